use std::alloc::{alloc_zeroed, dealloc, Layout};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

use crate::error::{allocation_error, layout_error, Result};

/// Byte alignment of every buffer handed to the kernels (one 128-bit register).
pub const SIMD_ALIGNMENT: usize = 16;

/// A heap buffer of `f64` with a caller-chosen alignment, zero-initialised.
///
/// `Vec<f64>` cannot be used here: a `Vec` always frees with the element's
/// natural alignment, which must match the layout it was allocated with.
pub struct AlignedBuf {
    ptr: NonNull<f64>,
    len: usize,
    layout: Layout,
}

// SAFETY: the buffer uniquely owns its allocation, like `Vec<f64>`.
unsafe impl Send for AlignedBuf {}
unsafe impl Sync for AlignedBuf {}

impl AlignedBuf {
    /// Allocates `len` zeroed `f64` values aligned to [`SIMD_ALIGNMENT`].
    pub fn zeroed(len: usize) -> Result<Self> {
        Self::zeroed_with_alignment(len, SIMD_ALIGNMENT)
    }

    /// Allocates `len` zeroed `f64` values with the given byte alignment.
    ///
    /// # Errors
    ///
    /// * `LayoutError` if `align` is not a power of two, is smaller than the
    ///   natural alignment of `f64`, or the total size overflows.
    /// * `AllocationError` if the global allocator returns null.
    pub fn zeroed_with_alignment(len: usize, align: usize) -> Result<Self> {
        if align < std::mem::align_of::<f64>() {
            return Err(layout_error(
                len,
                align,
                "alignment is smaller than the natural alignment of f64",
            ));
        }

        if len == 0 {
            let layout = Layout::from_size_align(0, align)
                .map_err(|e| layout_error(0, align, e.to_string()))?;

            return Ok(Self {
                ptr: NonNull::dangling(),
                len: 0,
                layout,
            });
        }

        let size_bytes = len
            .checked_mul(std::mem::size_of::<f64>())
            .ok_or_else(|| layout_error(len, align, "total size overflowed"))?;

        let layout = Layout::from_size_align(size_bytes, align)
            .map_err(|e| layout_error(size_bytes, align, e.to_string()))?;

        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc_zeroed(layout) as *mut f64 };

        let ptr = NonNull::new(raw).ok_or_else(|| {
            allocation_error(size_bytes, align, format!("cannot allocate {len} f64 values"))
        })?;

        Ok(Self { ptr, len, layout })
    }

    /// Allocates an aligned copy of `data`.
    pub fn from_slice(data: &[f64]) -> Result<Self> {
        let mut buf = Self::zeroed(data.len())?;
        buf.copy_from_slice(data);
        Ok(buf)
    }

    /// Alignment in bytes the buffer was allocated with.
    pub fn alignment(&self) -> usize {
        self.layout.align()
    }
}

impl Deref for AlignedBuf {
    type Target = [f64];

    #[inline(always)]
    fn deref(&self) -> &[f64] {
        // SAFETY: `ptr` is valid for `len` initialised values (or dangling with len 0).
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl DerefMut for AlignedBuf {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut [f64] {
        // SAFETY: as above, and `&mut self` guarantees exclusive access.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl Drop for AlignedBuf {
    fn drop(&mut self) {
        if self.len != 0 {
            // SAFETY: allocated in `zeroed_with_alignment` with exactly `self.layout`.
            unsafe { dealloc(self.ptr.as_ptr() as *mut u8, self.layout) };
        }
    }
}

impl fmt::Debug for AlignedBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignedBuf")
            .field("len", &self.len)
            .field("alignment", &self.layout.align())
            .finish()
    }
}

impl Clone for AlignedBuf {
    fn clone(&self) -> Self {
        let mut buf = match Self::zeroed_with_alignment(self.len, self.layout.align()) {
            Ok(buf) => buf,
            Err(_) => std::alloc::handle_alloc_error(self.layout),
        };
        buf.copy_from_slice(self);
        buf
    }
}

impl PartialEq for AlignedBuf {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimddivError;

    #[test]
    fn test_zeroed_is_aligned_and_zero() {
        let buf = AlignedBuf::zeroed(10).unwrap();
        assert_eq!(buf.len(), 10);
        assert_eq!(buf.as_ptr() as usize % SIMD_ALIGNMENT, 0);
        assert!(buf.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_wider_alignment() {
        let buf = AlignedBuf::zeroed_with_alignment(7, 64).unwrap();
        assert_eq!(buf.alignment(), 64);
        assert_eq!(buf.as_ptr() as usize % 64, 0);
    }

    #[test]
    fn test_empty_buffer() {
        let buf = AlignedBuf::zeroed(0).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_bad_alignment_is_layout_error() {
        let err = AlignedBuf::zeroed_with_alignment(4, 24).unwrap_err();
        assert!(matches!(err, SimddivError::LayoutError { .. }));

        let err = AlignedBuf::zeroed_with_alignment(4, 4).unwrap_err();
        assert!(matches!(err, SimddivError::LayoutError { .. }));
    }

    #[test]
    fn test_overflowing_size_is_layout_error() {
        let err = AlignedBuf::zeroed(usize::MAX).unwrap_err();
        assert!(matches!(err, SimddivError::LayoutError { .. }));
    }

    #[test]
    fn test_from_slice_and_clone() {
        let buf = AlignedBuf::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let copy = buf.clone();
        assert_eq!(&*copy, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(buf, copy);
        assert_ne!(buf.as_ptr(), copy.as_ptr());
    }
}

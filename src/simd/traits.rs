/// Pointer alignment check for a SIMD register type.
pub trait Alignment<T> {
    fn is_aligned(ptr: *const T) -> bool;
}

/// Loading lanes from memory into a SIMD register.
pub trait SimdLoad<T> {
    type Output;

    /// Broadcasts `value` to every lane.
    fn splat(value: T) -> Self::Output;

    /// Loads a full register, picking the aligned form when `ptr` allows it.
    ///
    /// # Safety
    ///
    /// `ptr` must point to at least `LANE_COUNT` readable values.
    unsafe fn load(ptr: *const T) -> Self::Output;

    /// # Safety
    ///
    /// `ptr` must be aligned to the register width and point to at least
    /// `LANE_COUNT` readable values.
    unsafe fn load_aligned(ptr: *const T) -> Self::Output;

    /// # Safety
    ///
    /// `ptr` must point to at least `LANE_COUNT` readable values.
    unsafe fn load_unaligned(ptr: *const T) -> Self::Output;
}

/// Storing a SIMD register back to memory.
pub trait SimdStore<T> {
    /// Stores every lane, picking the aligned form when `ptr` allows it.
    ///
    /// # Safety
    ///
    /// `ptr` must point to at least `LANE_COUNT` writable values.
    unsafe fn store_at(&self, ptr: *mut T);

    /// # Safety
    ///
    /// `ptr` must be aligned to the register width and point to at least
    /// `LANE_COUNT` writable values.
    unsafe fn store_aligned_at(&self, ptr: *mut T);

    /// # Safety
    ///
    /// `ptr` must point to at least `LANE_COUNT` writable values.
    unsafe fn store_unaligned_at(&self, ptr: *mut T);
}

/// Elementwise division over slices, in a scalar and a packed flavour.
///
/// The intensive forms repeat the whole pass `iterations` times with three
/// chained divisions per element: `((a / b) / (b + 1)) / (a + 2)`.
pub trait SimdDiv<Rhs = Self> {
    type Output;

    fn scalar_div(self, rhs: Rhs) -> Self::Output;
    fn simd_div(self, rhs: Rhs) -> Self::Output;
    fn scalar_div_intensive(self, rhs: Rhs, iterations: usize) -> Self::Output;
    fn simd_div_intensive(self, rhs: Rhs, iterations: usize) -> Self::Output;
}

//! Error types for simddiv operations.
//!
//! Kernels, the input generator and the aligned buffer report failures through
//! [`SimddivError`] instead of panicking, so the benchmark binary can print a
//! single diagnostic and exit with a non-zero status.

use std::fmt;

/// Errors that can occur while preparing or running a benchmark pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimddivError {
    /// Memory allocation failed.
    AllocationError {
        /// The size that was requested to be allocated.
        requested_size: usize,
        /// The alignment that was requested.
        requested_alignment: usize,
        /// Human-readable error message.
        message: String,
    },
    /// Invalid layout parameters were provided.
    LayoutError {
        /// The size parameter that caused the error.
        size: usize,
        /// The alignment parameter that caused the error.
        alignment: usize,
        /// Human-readable error message.
        message: String,
    },
    /// Input validation error.
    ValidationError {
        /// Human-readable error message.
        message: String,
    },
    /// Writing the report failed.
    ReportError {
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for SimddivError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimddivError::AllocationError {
                requested_size,
                requested_alignment,
                message,
            } => write!(
                f,
                "Memory allocation failed: {message} (requested {requested_size} bytes with {requested_alignment} byte alignment)"
            ),
            SimddivError::LayoutError {
                size,
                alignment,
                message,
            } => write!(
                f,
                "Invalid memory layout: {message} (size: {size}, alignment: {alignment})"
            ),
            SimddivError::ValidationError { message } => {
                write!(f, "Validation error: {message}")
            }
            SimddivError::ReportError { message } => {
                write!(f, "Report error: {message}")
            }
        }
    }
}

impl std::error::Error for SimddivError {}

impl From<std::io::Error> for SimddivError {
    fn from(err: std::io::Error) -> Self {
        SimddivError::ReportError {
            message: err.to_string(),
        }
    }
}

/// Result type alias for simddiv operations.
pub type Result<T> = std::result::Result<T, SimddivError>;

/// Creates an allocation error.
pub fn allocation_error(size: usize, alignment: usize, message: impl Into<String>) -> SimddivError {
    SimddivError::AllocationError {
        requested_size: size,
        requested_alignment: alignment,
        message: message.into(),
    }
}

/// Creates a layout error.
pub fn layout_error(size: usize, alignment: usize, message: impl Into<String>) -> SimddivError {
    SimddivError::LayoutError {
        size,
        alignment,
        message: message.into(),
    }
}

/// Creates a validation error.
pub fn validation_error(message: impl Into<String>) -> SimddivError {
    SimddivError::ValidationError {
        message: message.into(),
    }
}

/// Checks that three kernel operands share one even, non-zero length.
///
/// The vector kernel has no scalar tail, so odd lengths are rejected up front
/// for both kernels to keep their contracts identical.
pub fn check_operands(a: &[f64], b: &[f64], out: &[f64]) -> Result<()> {
    if a.len() != b.len() || a.len() != out.len() {
        return Err(validation_error(format!(
            "operand lengths differ (dividends: {}, divisors: {}, result: {})",
            a.len(),
            b.len(),
            out.len()
        )));
    }

    check_len(a.len())
}

/// Checks that `len` is a usable sequence length: non-zero and even.
pub fn check_len(len: usize) -> Result<()> {
    if len == 0 {
        return Err(validation_error("sequence length must be non-zero"));
    }

    if len % 2 != 0 {
        return Err(validation_error(format!(
            "sequence length must be even, got {len}"
        )));
    }

    Ok(())
}

//! Error types for imagelib-core operations.
//!
//! Every failure in the buffer core is a local logic error: an index outside
//! the grid, a data vector of the wrong length, or a destination buffer that
//! is too short. Errors are reported synchronously and the image is left
//! untouched.
//!
//! # Usage
//!
//! ```rust
//! use imagelib_core::{Error, Result};
//!
//! fn check(row: u32, col: u32, rows: u32, cols: u32) -> Result<()> {
//!     if row >= rows || col >= cols {
//!         return Err(Error::out_of_bounds(row, col, rows, cols));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(2, 0, 2, 2).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while accessing or building an image buffer.
///
/// # Categories
///
/// - **Bounds errors**: [`OutOfBounds`](Error::OutOfBounds), [`IndexOutOfRange`](Error::IndexOutOfRange)
/// - **Construction errors**: [`InvalidDimensions`](Error::InvalidDimensions)
/// - **Copy errors**: [`BufferTooSmall`](Error::BufferTooSmall)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// 2D location is outside the image grid.
    ///
    /// Returned when `row >= rows` or `col >= cols`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use imagelib_core::Error;
    ///
    /// let err = Error::out_of_bounds(5, 1, 4, 4);
    /// assert!(err.to_string().contains("row 5, col 1"));
    /// ```
    #[error("location (row {row}, col {col}) out of bounds for image {cols}x{rows}")]
    OutOfBounds {
        /// Requested row
        row: u32,
        /// Requested column
        col: u32,
        /// Image row count
        rows: u32,
        /// Image column count
        cols: u32,
    },

    /// Linear index is outside `[0, len)`.
    #[error("index {index} out of range for image of length {len}")]
    IndexOutOfRange {
        /// Requested linear index
        index: usize,
        /// Image length (cols * rows)
        len: usize,
    },

    /// Dimensions don't match the supplied data or overflow `usize`.
    #[error("invalid dimensions: {cols}x{rows} ({reason})")]
    InvalidDimensions {
        /// Requested column count
        cols: u32,
        /// Requested row count
        rows: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Destination slice is shorter than the image.
    #[error("destination holds {got} elements, image needs {required}")]
    BufferTooSmall {
        /// Elements required (image length)
        required: usize,
        /// Elements available in the destination
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(row: u32, col: u32, rows: u32, cols: u32) -> Self {
        Self::OutOfBounds {
            row,
            col,
            rows,
            cols,
        }
    }

    /// Creates an [`Error::IndexOutOfRange`] error.
    #[inline]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(cols: u32, rows: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            cols,
            rows,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::BufferTooSmall`] error.
    #[inline]
    pub fn buffer_too_small(required: usize, got: usize) -> Self {
        Self::BufferTooSmall { required, got }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. } | Self::IndexOutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds() {
        let err = Error::out_of_bounds(7, 3, 4, 5);
        let msg = err.to_string();
        assert!(msg.contains("row 7"));
        assert!(msg.contains("col 3"));
        assert!(msg.contains("5x4"));
        assert!(err.is_bounds_error());
    }

    #[test]
    fn test_index_out_of_range() {
        let err = Error::index_out_of_range(16, 16);
        assert!(err.to_string().contains("16"));
        assert!(err.is_bounds_error());
    }

    #[test]
    fn test_invalid_dimensions() {
        let err = Error::invalid_dimensions(3, 2, "expected 6 elements, got 5");
        assert!(err.to_string().contains("3x2"));
        assert!(!err.is_bounds_error());
    }

    #[test]
    fn test_buffer_too_small() {
        let err = Error::buffer_too_small(8, 4);
        assert_eq!(err, Error::BufferTooSmall { required: 8, got: 4 });
    }
}

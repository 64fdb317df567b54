//! Error types for image transforms.

use imagelib_core::Axis;
use thiserror::Error;

/// Error type for geometric transforms.
///
/// Every variant is raised before the result buffer is allocated; the
/// source image is never modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpsError {
    /// Crop rectangle is not fully inside the source image.
    #[error("crop region {width}x{height} at ({x},{y}) exceeds {cols}x{rows}")]
    InvalidRegion {
        /// Region left column
        x: u32,
        /// Region top row
        y: u32,
        /// Region width
        width: u32,
        /// Region height
        height: u32,
        /// Source columns
        cols: u32,
        /// Source rows
        rows: u32,
    },

    /// Pad target is smaller than the source along some axis.
    #[error("pad target {width}x{height} is smaller than source {cols}x{rows}")]
    PadTooSmall {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Source columns
        cols: u32,
        /// Source rows
        rows: u32,
    },

    /// Downsampling needs an even length along the decimated axis.
    #[error("cannot downsample odd {axis} count {len}")]
    OddDimension {
        /// Rejected axis
        axis: Axis,
        /// Length along that axis
        len: u32,
    },

    /// Result dimensions do not fit in the index types.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Error from the buffer core.
    #[error(transparent)]
    Core(#[from] imagelib_core::Error),
}

impl OpsError {
    /// Returns `true` for errors caused by a region or index outside the image.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        match self {
            Self::InvalidRegion { .. } => true,
            Self::Core(e) => e.is_bounds_error(),
            _ => false,
        }
    }
}

/// Result type for image transforms.
pub type OpsResult<T> = Result<T, OpsError>;

//! # imagelib-ops
//!
//! Geometric transforms for [`imagelib_core::Image`].
//!
//! Every operation is pure: it borrows the source, validates the request,
//! allocates a new image, and returns it. Invalid requests fail before any
//! allocation and leave the source untouched.
//!
//! # Modules
//!
//! - [`transform`] - Crop, pad, flip, transpose
//! - [`resample`] - Nearest-neighbor up/downsampling by two
//!
//! # Example
//!
//! ```rust
//! use imagelib_core::Image;
//! use imagelib_ops::ImageOps;
//!
//! let img: Image<u8> = Image::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
//!
//! let out = img.flip_x()?.pad(3, 2)?.upsample_rows()?;
//! assert_eq!(out.dimensions(), (3, 4));
//! assert_eq!(out.row(0).unwrap(), &[3, 4, 0]);
//!
//! // The source is unchanged
//! assert_eq!(img.as_slice(), &[1, 2, 3, 4]);
//! # Ok::<(), imagelib_ops::OpsError>(())
//! ```
//!
//! # Logging
//!
//! Operations emit `tracing` events (`trace` for single-axis ops, `debug`
//! for pad and the two-axis resamplers). No subscriber is installed.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod resample;
mod rows;
pub mod transform;

pub use error::{OpsError, OpsResult};
pub use imagelib_core::{Axis, PadAnchor, Rect};

use imagelib_core::{Image, Pixel};

/// Method-chaining form of the transforms in [`transform`] and [`resample`].
///
/// Implemented for every [`Image`]. Each method delegates to the free
/// function of the same name.
pub trait ImageOps: Sized {
    /// See [`transform::crop`].
    fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> OpsResult<Self>;
    /// See [`transform::crop_rect`].
    fn crop_rect(&self, rect: Rect) -> OpsResult<Self>;
    /// See [`transform::pad`].
    fn pad(&self, width: u32, height: u32) -> OpsResult<Self>;
    /// See [`transform::pad_anchored`].
    fn pad_anchored(&self, width: u32, height: u32, anchor: PadAnchor) -> OpsResult<Self>;
    /// See [`resample::upsample`].
    fn upsample(&self) -> OpsResult<Self>;
    /// See [`resample::upsample_cols`].
    fn upsample_cols(&self) -> OpsResult<Self>;
    /// See [`resample::upsample_rows`].
    fn upsample_rows(&self) -> OpsResult<Self>;
    /// See [`resample::downsample`].
    fn downsample(&self) -> OpsResult<Self>;
    /// See [`resample::downsample_cols`].
    fn downsample_cols(&self) -> OpsResult<Self>;
    /// See [`resample::downsample_rows`].
    fn downsample_rows(&self) -> OpsResult<Self>;
    /// See [`transform::flip_x`].
    fn flip_x(&self) -> OpsResult<Self>;
    /// See [`transform::flip_y`].
    fn flip_y(&self) -> OpsResult<Self>;
    /// See [`transform::flip_xy`].
    fn flip_xy(&self) -> OpsResult<Self>;
    /// See [`transform::transpose`].
    fn transpose(&self) -> OpsResult<Self>;
}

impl<Y: Pixel> ImageOps for Image<Y> {
    fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> OpsResult<Self> {
        transform::crop(self, x, y, width, height)
    }

    fn crop_rect(&self, rect: Rect) -> OpsResult<Self> {
        transform::crop_rect(self, rect)
    }

    fn pad(&self, width: u32, height: u32) -> OpsResult<Self> {
        transform::pad(self, width, height)
    }

    fn pad_anchored(&self, width: u32, height: u32, anchor: PadAnchor) -> OpsResult<Self> {
        transform::pad_anchored(self, width, height, anchor)
    }

    fn upsample(&self) -> OpsResult<Self> {
        resample::upsample(self)
    }

    fn upsample_cols(&self) -> OpsResult<Self> {
        resample::upsample_cols(self)
    }

    fn upsample_rows(&self) -> OpsResult<Self> {
        resample::upsample_rows(self)
    }

    fn downsample(&self) -> OpsResult<Self> {
        resample::downsample(self)
    }

    fn downsample_cols(&self) -> OpsResult<Self> {
        resample::downsample_cols(self)
    }

    fn downsample_rows(&self) -> OpsResult<Self> {
        resample::downsample_rows(self)
    }

    fn flip_x(&self) -> OpsResult<Self> {
        transform::flip_x(self)
    }

    fn flip_y(&self) -> OpsResult<Self> {
        transform::flip_y(self)
    }

    fn flip_xy(&self) -> OpsResult<Self> {
        transform::flip_xy(self)
    }

    fn transpose(&self) -> OpsResult<Self> {
        transform::transpose(self)
    }
}

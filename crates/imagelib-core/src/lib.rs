//! # imagelib-core
//!
//! Core types for generic two-dimensional pixel buffers.
//!
//! This crate provides the foundational types used by the imagelib workspace:
//!
//! - [`Image`] - Dense row-major buffer over any [`Pixel`] type
//! - [`Pixel`] - Storage bound for image elements
//! - [`ToBgra`], [`Bgra`] - Color conversion capability and its output
//! - [`Rect`] - Crop regions
//! - [`PadAnchor`], [`Axis`] - Transform options
//! - [`Error`], [`Result`] - Error handling
//!
//! ## Design
//!
//! The image core never interprets pixel contents. Storage and indexing work
//! for any `Copy + PartialEq + Default` value; color export is available
//! only when the pixel type also implements [`ToBgra`]:
//!
//! ```rust
//! use imagelib_core::{Bgra, Image, ToBgra};
//!
//! #[derive(Clone, Copy, Default, PartialEq)]
//! struct Label(u16);
//!
//! impl ToBgra for Label {
//!     fn to_bgra(&self) -> Bgra {
//!         Bgra::new((self.0 * 40) as u8, 0, 0, 255)
//!     }
//! }
//!
//! let img = Image::filled(2, 2, Label(3));
//! assert_eq!(img.to_bgra()[0..4], [120, 0, 0, 255]);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! imagelib-core (this crate)
//!    ^
//!    |
//!    +-- imagelib-ops (crop, pad, resample, flip, transpose)
//!    +-- imagelib-bench
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` - Convert pixels across the rayon pool in color export (enabled by default)
//! - `serde` - Enable serialization for [`Rect`], [`Bgra`], [`PadAnchor`] and [`Axis`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
mod export;
pub mod image;
pub mod options;
pub mod pixel;
pub mod rect;

// Re-exports for convenience
pub use error::*;
pub use image::*;
pub use options::*;
pub use pixel::*;
pub use rect::*;

/// Prelude module for convenient imports.
///
/// ```
/// use imagelib_core::prelude::*;
///
/// let img: Image<u8> = Image::new(2, 2);
/// assert_eq!(img.bounds(), Rect::from_size(2, 2));
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::Image;
    pub use crate::options::{Axis, PadAnchor};
    pub use crate::pixel::{Bgra, Pixel, ToBgra};
    pub use crate::rect::Rect;
}

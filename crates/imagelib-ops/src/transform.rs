//! Geometric transformation operations.
//!
//! Provides crop, pad, flip, and transpose. Every function reads the source
//! and returns a freshly allocated image; the source is never mutated.
//!
//! # Operations
//!
//! - [`crop`], [`crop_rect`] - Extract a region
//! - [`pad`], [`pad_anchored`] - Grow the canvas with default-valued pixels
//! - [`flip_x`] - Vertical flip (reverse row order)
//! - [`flip_y`] - Horizontal flip (reverse column order)
//! - [`flip_xy`] - Both flips
//! - [`transpose`] - Swap rows and columns
//!
//! # Zero-sized images
//!
//! A source with zero columns or rows is accepted by every operation and
//! yields the zero-sized result the dimension rules imply.
//!
//! # Example
//!
//! ```rust
//! use imagelib_core::Image;
//! use imagelib_ops::transform::{crop, flip_y, transpose};
//!
//! let img: Image<u8> = Image::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
//!
//! assert_eq!(transpose(&img).unwrap().as_slice(), &[1, 3, 2, 4]);
//! assert_eq!(flip_y(&img).unwrap().as_slice(), &[2, 1, 4, 3]);
//! assert_eq!(crop(&img, 1, 0, 1, 1).unwrap().as_slice(), &[2]);
//! ```

use crate::rows::{build, src_row};
use crate::{OpsError, OpsResult};
use imagelib_core::{Image, PadAnchor, Pixel, Rect};
use tracing::{debug, trace};

/// Crops a `width x height` region whose top-left pixel is `(x, y)`.
///
/// `x` is a column and `y` a row, matching [`Rect`].
///
/// # Errors
///
/// [`OpsError::InvalidRegion`] if the region is not fully inside the source.
/// Regions are never clamped.
///
/// # Example
///
/// ```rust
/// use imagelib_core::Image;
/// use imagelib_ops::transform::crop;
///
/// let src = Image::from_fn(8, 8, |row, col| (row * 8 + col) as u8);
/// let cropped = crop(&src, 2, 3, 4, 2).unwrap();
/// assert_eq!(cropped.dimensions(), (4, 2));
/// assert_eq!(cropped[0], 26);
/// ```
pub fn crop<Y: Pixel>(
    src: &Image<Y>,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> OpsResult<Image<Y>> {
    crop_rect(src, Rect::new(x, y, width, height))
}

/// Crops the region described by `rect`.
///
/// See [`crop`].
pub fn crop_rect<Y: Pixel>(src: &Image<Y>, rect: Rect) -> OpsResult<Image<Y>> {
    let (cols, rows) = src.dimensions();
    if !rect.fits_within(cols, rows) {
        return Err(OpsError::InvalidRegion {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            cols,
            rows,
        });
    }
    trace!(cols, rows, %rect, "crop");

    let x = rect.x as usize;
    let y = rect.y as usize;
    let w = rect.width as usize;
    build(rect.width, rect.height, |r, row| {
        row.copy_from_slice(&src_row(src, y + r)[x..x + w]);
    })
}

/// Pads the image to `width x height`, keeping the source at the top-left.
///
/// New pixels are `Y::default()`. Equivalent to
/// `pad_anchored(src, width, height, PadAnchor::TopLeft)`.
///
/// # Errors
///
/// [`OpsError::PadTooSmall`] if `width < cols` or `height < rows`.
///
/// # Example
///
/// ```rust
/// use imagelib_core::Image;
/// use imagelib_ops::transform::pad;
///
/// let src: Image<u8> = Image::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
/// let padded = pad(&src, 3, 2).unwrap();
/// assert_eq!(padded.as_slice(), &[1, 2, 0, 3, 4, 0]);
/// ```
pub fn pad<Y: Pixel>(src: &Image<Y>, width: u32, height: u32) -> OpsResult<Image<Y>> {
    pad_anchored(src, width, height, PadAnchor::TopLeft)
}

/// Pads the image to `width x height`, placing the source according to
/// `anchor`.
///
/// # Example
///
/// ```rust
/// use imagelib_core::{Image, PadAnchor};
/// use imagelib_ops::transform::pad_anchored;
///
/// let src: Image<u8> = Image::filled(1, 1, 9);
/// let padded = pad_anchored(&src, 3, 3, PadAnchor::Center).unwrap();
/// assert_eq!(padded.as_slice(), &[0, 0, 0, 0, 9, 0, 0, 0, 0]);
/// ```
pub fn pad_anchored<Y: Pixel>(
    src: &Image<Y>,
    width: u32,
    height: u32,
    anchor: PadAnchor,
) -> OpsResult<Image<Y>> {
    let (cols, rows) = src.dimensions();
    if width < cols || height < rows {
        return Err(OpsError::PadTooSmall {
            width,
            height,
            cols,
            rows,
        });
    }
    let (ox, oy) = anchor.offsets(width - cols, height - rows);
    debug!(cols, rows, width, height, ?anchor, "pad");

    let (ox, oy) = (ox as usize, oy as usize);
    let (sc, sr) = (cols as usize, rows as usize);
    build(width, height, |r, row| {
        if (oy..oy + sr).contains(&r) {
            row[ox..ox + sc].copy_from_slice(src_row(src, r - oy));
        }
    })
}

/// Flips vertically: row `r` of the result is row `rows - 1 - r` of the
/// source.
pub fn flip_x<Y: Pixel>(src: &Image<Y>) -> OpsResult<Image<Y>> {
    let (cols, rows) = src.dimensions();
    trace!(cols, rows, "flip_x");
    let last = rows as usize - usize::from(rows > 0);
    build(cols, rows, |r, row| {
        row.copy_from_slice(src_row(src, last - r));
    })
}

/// Flips horizontally: column `c` of the result is column `cols - 1 - c`
/// of the source.
pub fn flip_y<Y: Pixel>(src: &Image<Y>) -> OpsResult<Image<Y>> {
    let (cols, rows) = src.dimensions();
    trace!(cols, rows, "flip_y");
    build(cols, rows, |r, row| {
        row.copy_from_slice(src_row(src, r));
        row.reverse();
    })
}

/// Flips both vertically and horizontally (a 180 degree rotation).
pub fn flip_xy<Y: Pixel>(src: &Image<Y>) -> OpsResult<Image<Y>> {
    let (cols, rows) = src.dimensions();
    trace!(cols, rows, "flip_xy");
    let last = rows as usize - usize::from(rows > 0);
    build(cols, rows, |r, row| {
        row.copy_from_slice(src_row(src, last - r));
        row.reverse();
    })
}

/// Transposes the image: the result is `rows x cols` and its pixel at
/// `(i, j)` is the source pixel at `(j, i)`.
///
/// # Example
///
/// ```rust
/// use imagelib_core::Image;
/// use imagelib_ops::transform::transpose;
///
/// // 3 cols x 1 row becomes 1 col x 3 rows
/// let src: Image<u8> = Image::from_vec(3, 1, vec![1, 2, 3]).unwrap();
/// let t = transpose(&src).unwrap();
/// assert_eq!(t.dimensions(), (1, 3));
/// assert_eq!(t[(2, 0)], 3);
/// ```
pub fn transpose<Y: Pixel>(src: &Image<Y>) -> OpsResult<Image<Y>> {
    let (cols, rows) = src.dimensions();
    trace!(cols, rows, "transpose");
    let data = src.as_slice();
    let sc = cols as usize;
    build(rows, cols, |i, row| {
        for (j, dst) in row.iter_mut().enumerate() {
            *dst = data[j * sc + i];
        }
    })
}

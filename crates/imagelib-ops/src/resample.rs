//! Nearest-neighbor up/downsampling by factors of two.
//!
//! Upsampling duplicates every column and/or row next to itself.
//! Downsampling keeps the even-indexed columns and/or rows and discards the
//! rest. No interpolation or averaging takes place, so pixel values are
//! only ever copied.
//!
//! # Odd dimensions
//!
//! Downsampling an axis of odd length fails with
//! [`OpsError::OddDimension`]. The last row or column is never dropped
//! silently. A zero-length axis is even and downsamples to zero.
//!
//! # Example
//!
//! ```rust
//! use imagelib_core::Image;
//! use imagelib_ops::resample::{downsample_cols, upsample_cols};
//!
//! let img: Image<u8> = Image::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
//! let wide = upsample_cols(&img).unwrap();
//! assert_eq!(wide.dimensions(), (4, 2));
//! assert_eq!(wide.as_slice(), &[1, 1, 2, 2, 3, 3, 4, 4]);
//!
//! assert_eq!(downsample_cols(&wide).unwrap(), img);
//! ```

use crate::rows::{build, doubled, src_row};
use crate::{OpsError, OpsResult};
use imagelib_core::{Axis, Image, Pixel};
use tracing::{debug, trace};

fn require_even(axis: Axis, len: u32) -> OpsResult<()> {
    if len % 2 != 0 {
        return Err(OpsError::OddDimension { axis, len });
    }
    Ok(())
}

fn duplicate_cols<Y: Pixel>(line: &[Y], dst: &mut [Y]) {
    for (pair, &v) in dst.chunks_exact_mut(2).zip(line) {
        pair[0] = v;
        pair[1] = v;
    }
}

fn decimate_cols<Y: Pixel>(line: &[Y], dst: &mut [Y]) {
    for (d, &v) in dst.iter_mut().zip(line.iter().step_by(2)) {
        *d = v;
    }
}

/// Doubles the column count: result is `2 * cols x rows`.
pub fn upsample_cols<Y: Pixel>(src: &Image<Y>) -> OpsResult<Image<Y>> {
    let (cols, rows) = src.dimensions();
    let new_cols = doubled(cols, "cols")?;
    trace!(cols, rows, new_cols, "upsample_cols");
    build(new_cols, rows, |r, row| duplicate_cols(src_row(src, r), row))
}

/// Doubles the row count: result is `cols x 2 * rows`.
pub fn upsample_rows<Y: Pixel>(src: &Image<Y>) -> OpsResult<Image<Y>> {
    let (cols, rows) = src.dimensions();
    let new_rows = doubled(rows, "rows")?;
    trace!(cols, rows, new_rows, "upsample_rows");
    build(cols, new_rows, |r, row| {
        row.copy_from_slice(src_row(src, r / 2));
    })
}

/// Doubles both axes in a single pass: result is `2 * cols x 2 * rows`.
///
/// Equal to `upsample_rows(&upsample_cols(src)?)`.
pub fn upsample<Y: Pixel>(src: &Image<Y>) -> OpsResult<Image<Y>> {
    let (cols, rows) = src.dimensions();
    let new_cols = doubled(cols, "cols")?;
    let new_rows = doubled(rows, "rows")?;
    debug!(cols, rows, new_cols, new_rows, "upsample");
    build(new_cols, new_rows, |r, row| {
        duplicate_cols(src_row(src, r / 2), row)
    })
}

/// Halves the column count by keeping even-indexed columns.
///
/// # Errors
///
/// [`OpsError::OddDimension`] if `cols` is odd.
pub fn downsample_cols<Y: Pixel>(src: &Image<Y>) -> OpsResult<Image<Y>> {
    let (cols, rows) = src.dimensions();
    require_even(Axis::Cols, cols)?;
    trace!(cols, rows, "downsample_cols");
    build(cols / 2, rows, |r, row| decimate_cols(src_row(src, r), row))
}

/// Halves the row count by keeping even-indexed rows.
///
/// # Errors
///
/// [`OpsError::OddDimension`] if `rows` is odd.
pub fn downsample_rows<Y: Pixel>(src: &Image<Y>) -> OpsResult<Image<Y>> {
    let (cols, rows) = src.dimensions();
    require_even(Axis::Rows, rows)?;
    trace!(cols, rows, "downsample_rows");
    build(cols, rows / 2, |r, row| {
        row.copy_from_slice(src_row(src, r * 2));
    })
}

/// Halves both axes in a single pass.
///
/// # Errors
///
/// [`OpsError::OddDimension`] if either axis is odd; columns are checked
/// first.
pub fn downsample<Y: Pixel>(src: &Image<Y>) -> OpsResult<Image<Y>> {
    let (cols, rows) = src.dimensions();
    require_even(Axis::Cols, cols)?;
    require_even(Axis::Rows, rows)?;
    debug!(cols, rows, "downsample");
    build(cols / 2, rows / 2, |r, row| {
        decimate_cols(src_row(src, r * 2), row)
    })
}

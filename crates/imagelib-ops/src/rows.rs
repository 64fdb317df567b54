//! Row-wise construction of transform results.
//!
//! Every transform produces its output one destination row at a time from
//! read-only access to the source. With the `parallel` feature rows are
//! filled across the rayon pool.

use crate::{OpsError, OpsResult};
use imagelib_core::{Image, Pixel};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Checked `a * 2` for result dimensions.
#[inline]
pub(crate) fn doubled(len: u32, what: &str) -> OpsResult<u32> {
    len.checked_mul(2)
        .ok_or_else(|| OpsError::InvalidDimensions(format!("doubling {what} {len} overflows u32")))
}

/// Returns row `r` of `src`.
#[inline]
pub(crate) fn src_row<Y: Pixel>(src: &Image<Y>, r: usize) -> &[Y] {
    let cols = src.cols() as usize;
    &src.as_slice()[r * cols..(r + 1) * cols]
}

/// Allocates a `cols x rows` image of `Y::default()` and calls
/// `fill_row(r, row)` for each destination row.
pub(crate) fn build<Y, F>(cols: u32, rows: u32, fill_row: F) -> OpsResult<Image<Y>>
where
    Y: Pixel,
    F: Fn(usize, &mut [Y]) + Send + Sync,
{
    let width = cols as usize;
    let len = width.checked_mul(rows as usize).ok_or_else(|| {
        OpsError::InvalidDimensions(format!("{cols}x{rows} pixel count overflows usize"))
    })?;

    let mut data = vec![Y::default(); len];
    if len > 0 {
        #[cfg(feature = "parallel")]
        data.par_chunks_mut(width)
            .enumerate()
            .for_each(|(r, row)| fill_row(r, row));

        #[cfg(not(feature = "parallel"))]
        for (r, row) in data.chunks_mut(width).enumerate() {
            fill_row(r, row);
        }
    }

    Ok(Image::from_vec(cols, rows, data)?)
}

//! Image buffer type.
//!
//! [`Image<Y>`] is a dense two-dimensional grid of pixel values of any
//! [`Pixel`] type: grayscale scalars, multi-channel structs, labels, depth
//! values, and so on.
//!
//! # Memory Layout
//!
//! Pixels are stored in a single `Vec<Y>` in **row-major** order,
//! top-to-bottom. The pixel at `(row, col)` lives at linear index
//! `row * cols + col`:
//!
//! ```text
//! index: [ 0  1  2 ]  ← row 0
//!        [ 3  4  5 ]  ← row 1
//! ```
//!
//! Both indexing entry points (2D and linear) translate to that one buffer.
//!
//! # Ownership
//!
//! Every image exclusively owns its storage. [`Clone`] performs a deep copy
//! and there are no views: transforms in `imagelib-ops` always allocate a
//! fresh buffer. Storage is released exactly once when the image is dropped,
//! or handed to the caller through [`Image::into_vec`]. Use after release
//! is rejected by the compiler.
//!
//! # Usage
//!
//! ```rust
//! use imagelib_core::Image;
//!
//! let mut img: Image<u8> = Image::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
//! assert_eq!(img.len(), 4);
//! assert_eq!(*img.get(1, 0).unwrap(), 3);
//!
//! img.set(0, 1, 9).unwrap();
//! assert_eq!(img.as_slice(), &[1, 9, 3, 4]);
//! assert!(img.get(2, 0).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`crate::pixel::Pixel`] - Element bound
//! - [`crate::rect::Rect`] - Bounds reporting
//! - [`crate::error::Error`] - Error types

use crate::{Error, Pixel, Rect, Result};
use std::ops::{Index, IndexMut};

/// Owned row-major image buffer.
///
/// Dimensions are fixed for the lifetime of an instance; `len()` is always
/// `cols() * rows()`.
///
/// # Example
///
/// ```rust
/// use imagelib_core::Image;
///
/// let img: Image<f32> = Image::filled(3, 2, 0.5);
/// assert_eq!(img.dimensions(), (3, 2));
/// assert!(img.iter().all(|&v| v == 0.5));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Image<Y: Pixel> {
    /// Pixel buffer, exactly `cols * rows` elements
    data: Vec<Y>,
    /// Width in pixels
    cols: u32,
    /// Height in pixels
    rows: u32,
}

impl<Y: Pixel> Image<Y> {
    /// Creates an image filled with `Y::default()`.
    ///
    /// ```rust
    /// use imagelib_core::Image;
    ///
    /// let img: Image<u16> = Image::new(4, 3);
    /// assert_eq!(img.len(), 12);
    /// assert_eq!(img[(2, 3)], 0);
    /// ```
    pub fn new(cols: u32, rows: u32) -> Self {
        Self::filled(cols, rows, Y::default())
    }

    /// Creates an image with every pixel set to `value`.
    pub fn filled(cols: u32, rows: u32, value: Y) -> Self {
        Self {
            data: vec![value; cols as usize * rows as usize],
            cols,
            rows,
        }
    }

    /// Creates an image from row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len() != cols * rows`
    /// or the product overflows `usize`.
    pub fn from_vec(cols: u32, rows: u32, data: Vec<Y>) -> Result<Self> {
        let expected = (cols as usize)
            .checked_mul(rows as usize)
            .ok_or_else(|| Error::invalid_dimensions(cols, rows, "pixel count overflows usize"))?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                cols,
                rows,
                format!("expected {} elements, got {}", expected, data.len()),
            ));
        }
        Ok(Self { data, cols, rows })
    }

    /// Creates an image by evaluating `f(row, col)` for every location,
    /// in row-major order.
    ///
    /// ```rust
    /// use imagelib_core::Image;
    ///
    /// let img = Image::from_fn(3, 2, |row, col| (row * 10 + col) as u8);
    /// assert_eq!(img.as_slice(), &[0, 1, 2, 10, 11, 12]);
    /// ```
    pub fn from_fn<F>(cols: u32, rows: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Y,
    {
        let mut data = Vec::with_capacity(cols as usize * rows as usize);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        Self { data, cols, rows }
    }

    /// Returns the number of columns.
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Returns the number of rows.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Returns the width in pixels (same as [`cols`](Self::cols)).
    #[inline]
    pub fn width(&self) -> u32 {
        self.cols
    }

    /// Returns the height in pixels (same as [`rows`](Self::rows)).
    #[inline]
    pub fn height(&self) -> u32 {
        self.rows
    }

    /// Returns `(cols, rows)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.cols, self.rows)
    }

    /// Returns the pixel count, `cols * rows`.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a rectangle covering the whole image.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.cols, self.rows)
    }

    /// Returns the pixels in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[Y] {
        &self.data
    }

    /// Returns the pixels in row-major order, mutably.
    ///
    /// The slice length is fixed, so dimensions cannot change through it.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Y] {
        &mut self.data
    }

    /// Releases the image and returns its storage.
    #[inline]
    pub fn into_vec(self) -> Vec<Y> {
        self.data
    }

    /// Returns an independent deep copy of this image.
    ///
    /// Equivalent to [`Clone::clone`].
    #[inline]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    #[inline]
    fn offset(&self, row: u32, col: u32) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::out_of_bounds(row, col, self.rows, self.cols));
        }
        Ok(row as usize * self.cols as usize + col as usize)
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<usize> {
        if index >= self.data.len() {
            return Err(Error::index_out_of_range(index, self.data.len()));
        }
        Ok(index)
    }

    /// Returns the pixel at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] unless `row < rows` and `col < cols`.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Result<&Y> {
        let i = self.offset(row, col)?;
        Ok(&self.data[i])
    }

    /// Returns a mutable reference to the pixel at `(row, col)`.
    #[inline]
    pub fn get_mut(&mut self, row: u32, col: u32) -> Result<&mut Y> {
        let i = self.offset(row, col)?;
        Ok(&mut self.data[i])
    }

    /// Sets the pixel at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: u32, col: u32, value: Y) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Returns the pixel at a linear (row-major) index.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `index < len()`.
    #[inline]
    pub fn get_index(&self, index: usize) -> Result<&Y> {
        let i = self.check_index(index)?;
        Ok(&self.data[i])
    }

    /// Returns a mutable reference to the pixel at a linear index.
    #[inline]
    pub fn get_index_mut(&mut self, index: usize) -> Result<&mut Y> {
        let i = self.check_index(index)?;
        Ok(&mut self.data[i])
    }

    /// Sets the pixel at a linear index.
    #[inline]
    pub fn set_index(&mut self, index: usize, value: Y) -> Result<()> {
        *self.get_index_mut(index)? = value;
        Ok(())
    }

    /// Returns row `row` as a slice of `cols` pixels.
    pub fn row(&self, row: u32) -> Result<&[Y]> {
        if row >= self.rows {
            return Err(Error::out_of_bounds(row, 0, self.rows, self.cols));
        }
        let start = row as usize * self.cols as usize;
        Ok(&self.data[start..start + self.cols as usize])
    }

    /// Iterates over rows top to bottom.
    ///
    /// Yields exactly `rows` slices, even when `cols == 0`.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Y]> + '_ {
        let cols = self.cols as usize;
        (0..self.rows as usize).map(move |r| &self.data[r * cols..(r + 1) * cols])
    }

    /// Iterates over pixels in linear-index order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Y> {
        self.data.iter()
    }

    /// Iterates mutably over pixels in linear-index order.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Y> {
        self.data.iter_mut()
    }

    /// Returns `true` if any pixel equals `value`.
    #[inline]
    pub fn contains(&self, value: &Y) -> bool {
        self.data.contains(value)
    }

    /// Sets every pixel to `value`.
    pub fn fill(&mut self, value: Y) {
        self.data.fill(value);
    }

    /// Copies all pixels, in linear-index order, to the front of `dst`.
    ///
    /// # Errors
    ///
    /// [`Error::BufferTooSmall`] if `dst.len() < len()`; `dst` is untouched.
    pub fn copy_to_slice(&self, dst: &mut [Y]) -> Result<()> {
        if dst.len() < self.data.len() {
            return Err(Error::buffer_too_small(self.data.len(), dst.len()));
        }
        dst[..self.data.len()].copy_from_slice(&self.data);
        Ok(())
    }

    /// Converts every pixel into a new image of the same dimensions.
    ///
    /// ```rust
    /// use imagelib_core::Image;
    ///
    /// let bytes: Image<u8> = Image::filled(2, 2, 51);
    /// let floats: Image<f32> = bytes.map(|&v| v as f32 / 255.0);
    /// assert!((floats[0] - 0.2).abs() < 1e-6);
    /// ```
    pub fn map<Z, F>(&self, f: F) -> Image<Z>
    where
        Z: Pixel,
        F: FnMut(&Y) -> Z,
    {
        Image {
            data: self.data.iter().map(f).collect(),
            cols: self.cols,
            rows: self.rows,
        }
    }
}

impl<Y: Pixel> std::fmt::Debug for Image<Y> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("cols", &self.cols)
            .field("rows", &self.rows)
            .field("pixel", &std::any::type_name::<Y>())
            .finish()
    }
}

/// Linear indexing. Panics if `index >= len()`; use
/// [`Image::get_index`] for a checked lookup.
impl<Y: Pixel> Index<usize> for Image<Y> {
    type Output = Y;

    #[inline]
    fn index(&self, index: usize) -> &Y {
        &self.data[index]
    }
}

impl<Y: Pixel> IndexMut<usize> for Image<Y> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Y {
        &mut self.data[index]
    }
}

/// `(row, col)` indexing. Panics when out of bounds; use [`Image::get`]
/// for a checked lookup.
impl<Y: Pixel> Index<(u32, u32)> for Image<Y> {
    type Output = Y;

    #[inline]
    fn index(&self, (row, col): (u32, u32)) -> &Y {
        assert!(
            row < self.rows && col < self.cols,
            "location (row {row}, col {col}) out of bounds for image {}x{}",
            self.cols,
            self.rows
        );
        &self.data[row as usize * self.cols as usize + col as usize]
    }
}

impl<Y: Pixel> IndexMut<(u32, u32)> for Image<Y> {
    #[inline]
    fn index_mut(&mut self, (row, col): (u32, u32)) -> &mut Y {
        assert!(
            row < self.rows && col < self.cols,
            "location (row {row}, col {col}) out of bounds for image {}x{}",
            self.cols,
            self.rows
        );
        let cols = self.cols as usize;
        &mut self.data[row as usize * cols + col as usize]
    }
}

impl<'a, Y: Pixel> IntoIterator for &'a Image<Y> {
    type Item = &'a Y;
    type IntoIter = std::slice::Iter<'a, Y>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, Y: Pixel> IntoIterator for &'a mut Image<Y> {
    type Item = &'a mut Y;
    type IntoIter = std::slice::IterMut<'a, Y>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<Y: Pixel> IntoIterator for Image<Y> {
    type Item = Y;
    type IntoIter = std::vec::IntoIter<Y>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

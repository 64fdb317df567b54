//! Color export for images whose pixel type implements [`ToBgra`].
//!
//! All outputs are in row-major (linear-index) order:
//!
//! | Method | Output length |
//! |--------|---------------|
//! | [`Image::to_bgr`] | `len() * 3` bytes |
//! | [`Image::to_bgra`] | `len() * 4` bytes |
//! | [`Image::to_pixel_color`] | `len()` [`Bgra`] values |
//! | [`Image::to_indexed_bgra`] | one callback per pixel |
//!
//! With the `parallel` feature the buffer-producing methods convert pixels
//! across the rayon thread pool. The callback form always runs sequentially
//! on the caller's thread, so its ordering guarantee holds.
//!
//! # Example
//!
//! ```rust
//! use imagelib_core::{Bgra, Image};
//!
//! let img: Image<u8> = Image::from_vec(2, 1, vec![10, 200]).unwrap();
//! assert_eq!(img.to_bgr(), vec![10, 10, 10, 200, 200, 200]);
//! assert_eq!(img.to_pixel_color(), vec![Bgra::gray(10), Bgra::gray(200)]);
//! ```

use crate::{Bgra, Image, Pixel, ToBgra};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl<Y: Pixel + ToBgra> Image<Y> {
    /// Calls `f(index, color)` once per pixel in linear-index order.
    ///
    /// ```rust
    /// use imagelib_core::Image;
    ///
    /// let img: Image<u8> = Image::from_vec(3, 1, vec![1, 2, 3]).unwrap();
    /// let mut seen = Vec::new();
    /// img.to_indexed_bgra(|i, c| seen.push((i, c.r)));
    /// assert_eq!(seen, vec![(0, 1), (1, 2), (2, 3)]);
    /// ```
    pub fn to_indexed_bgra<F>(&self, mut f: F)
    where
        F: FnMut(usize, Bgra),
    {
        for (i, px) in self.iter().enumerate() {
            f(i, px.to_bgra());
        }
    }

    /// Returns every pixel as a [`Bgra`] value.
    pub fn to_pixel_color(&self) -> Vec<Bgra> {
        #[cfg(feature = "parallel")]
        {
            self.as_slice().par_iter().map(ToBgra::to_bgra).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.iter().map(ToBgra::to_bgra).collect()
        }
    }

    /// Returns packed `B, G, R` bytes, three per pixel.
    pub fn to_bgr(&self) -> Vec<u8> {
        self.pack::<3>(Bgra::to_bgr)
    }

    /// Returns packed `B, G, R, A` bytes, four per pixel.
    pub fn to_bgra(&self) -> Vec<u8> {
        self.pack::<4>(Bgra::to_array)
    }

    fn pack<const N: usize>(&self, channels: fn(Bgra) -> [u8; N]) -> Vec<u8> {
        let mut out = vec![0u8; self.len() * N];

        #[cfg(feature = "parallel")]
        out.par_chunks_exact_mut(N)
            .zip(self.as_slice().par_iter())
            .for_each(|(dst, px)| dst.copy_from_slice(&channels(px.to_bgra())));

        #[cfg(not(feature = "parallel"))]
        for (dst, px) in out.chunks_exact_mut(N).zip(self.iter()) {
            dst.copy_from_slice(&channels(px.to_bgra()));
        }

        out
    }
}

//! Pixel contract and the BGRA color value.
//!
//! An [`Image`](crate::Image) stores values of any type implementing
//! [`Pixel`]: plain value types with structural equality and a default
//! ("zero") value used when padding. Color export additionally needs the
//! pixel type to describe itself as a [`Bgra`] color through [`ToBgra`].
//!
//! # Types
//!
//! - [`Pixel`] - Storage bound for image elements (blanket implemented)
//! - [`ToBgra`] - Conversion capability supplied by the pixel type
//! - [`Bgra`] - Four 8-bit channels in blue, green, red, alpha order
//!
//! # Built-in conversions
//!
//! | Type | Mapping |
//! |------|---------|
//! | `u8` | gray `v`, alpha 255 |
//! | `u16` | gray `v / 65535` scaled to 8 bits, alpha 255 |
//! | `f32`, `f16` | gray clamped to `[0, 1]` then scaled, alpha 255 |
//! | `Bgra` | identity |
//!
//! # Memory Layout
//!
//! [`Bgra`] uses `#[repr(C)]`, so a `&[Bgra]` has the same byte order as the
//! output of [`Image::to_bgra`](crate::Image::to_bgra).

use half::f16;

/// Storage bound for image elements.
///
/// Any `Copy + PartialEq + Default` type qualifies; the `Send + Sync` bounds
/// allow row-parallel transforms when the `parallel` feature is enabled.
/// No ordering is required.
///
/// # Example
///
/// ```
/// use imagelib_core::{Image, Pixel};
///
/// #[derive(Clone, Copy, Default, PartialEq, Debug)]
/// struct Depth(f32);
///
/// fn takes_pixel<Y: Pixel>(_: Y) {}
/// takes_pixel(Depth(1.5));
///
/// let img: Image<Depth> = Image::new(4, 4);
/// assert_eq!(img[0], Depth(0.0));
/// ```
pub trait Pixel: Copy + PartialEq + Default + Send + Sync + 'static {}

impl<T> Pixel for T where T: Copy + PartialEq + Default + Send + Sync + 'static {}

/// Conversion of a pixel value to its BGRA color.
///
/// Implemented by the pixel type itself; the image core never interprets
/// pixel contents beyond calling this.
pub trait ToBgra {
    /// Returns the color of this pixel.
    fn to_bgra(&self) -> Bgra;
}

/// 32-bit color with blue, green, red, and alpha channels, in that order.
///
/// # Example
///
/// ```
/// use imagelib_core::Bgra;
///
/// let c = Bgra::new(10, 20, 30, 255);
/// assert_eq!(c.to_array(), [10, 20, 30, 255]);
/// assert_eq!(c.to_bgr(), [10, 20, 30]);
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bgra {
    /// Blue channel
    pub b: u8,
    /// Green channel
    pub g: u8,
    /// Red channel
    pub r: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Bgra {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Opaque black.
    pub const OPAQUE_BLACK: Self = Self::new(0, 0, 0, 255);

    /// Creates a color from channel values in B, G, R, A order.
    #[inline]
    pub const fn new(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Creates an opaque gray with all color channels set to `v`.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v, 255)
    }

    /// Returns `[b, g, r, a]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.b, self.g, self.r, self.a]
    }

    /// Returns `[b, g, r]`, dropping alpha.
    #[inline]
    pub const fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }
}

impl From<[u8; 4]> for Bgra {
    #[inline]
    fn from(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<Bgra> for [u8; 4] {
    #[inline]
    fn from(c: Bgra) -> Self {
        c.to_array()
    }
}

/// Maps a normalized value to 8 bits, clamping to `[0, 1]`. NaN maps to 0.
#[inline]
fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl ToBgra for Bgra {
    #[inline]
    fn to_bgra(&self) -> Bgra {
        *self
    }
}

impl ToBgra for u8 {
    #[inline]
    fn to_bgra(&self) -> Bgra {
        Bgra::gray(*self)
    }
}

impl ToBgra for u16 {
    #[inline]
    fn to_bgra(&self) -> Bgra {
        Bgra::gray(unit_to_u8(*self as f32 / 65535.0))
    }
}

impl ToBgra for f32 {
    #[inline]
    fn to_bgra(&self) -> Bgra {
        Bgra::gray(unit_to_u8(*self))
    }
}

impl ToBgra for f16 {
    #[inline]
    fn to_bgra(&self) -> Bgra {
        Bgra::gray(unit_to_u8(self.to_f32()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        assert_eq!(std::mem::size_of::<Bgra>(), 4);
        assert_eq!(std::mem::align_of::<Bgra>(), 1);
    }

    #[test]
    fn test_u8_gray() {
        assert_eq!(7u8.to_bgra(), Bgra::new(7, 7, 7, 255));
    }

    #[test]
    fn test_u16_scaling() {
        assert_eq!(0u16.to_bgra(), Bgra::gray(0));
        assert_eq!(65535u16.to_bgra(), Bgra::gray(255));
        assert_eq!(32768u16.to_bgra(), Bgra::gray(128));
    }

    #[test]
    fn test_float_clamp() {
        assert_eq!(1.5f32.to_bgra(), Bgra::gray(255));
        assert_eq!((-0.25f32).to_bgra(), Bgra::gray(0));
        assert_eq!(f32::NAN.to_bgra(), Bgra::gray(0));
        assert_eq!(f16::from_f32(0.5).to_bgra(), Bgra::gray(128));
    }

    #[test]
    fn test_array_conversion() {
        let c: Bgra = [1, 2, 3, 4].into();
        assert_eq!(c, Bgra::new(1, 2, 3, 4));
        let arr: [u8; 4] = c.into();
        assert_eq!(arr, [1, 2, 3, 4]);
    }

    #[test]
    fn test_constants() {
        assert_eq!(Bgra::default(), Bgra::TRANSPARENT);
        assert_eq!(Bgra::OPAQUE_BLACK.a, 255);
    }
}

//! Rectangle type for crop regions.
//!
//! # Coordinate System
//!
//! Coordinates follow the image convention used by [`Image`](crate::Image):
//! - Origin (0, 0) is the **top-left** pixel
//! - `x` counts columns to the right
//! - `y` counts rows downward
//!
//! ```text
//! (0,0) ────────► x (cols)
//!   │
//!   │   ┌──────────┐
//!   │   │   Rect   │
//!   │   └──────────┘
//!   ▼
//!   y (rows)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use imagelib_core::Rect;
//!
//! let rect = Rect::new(10, 20, 100, 50);
//! assert!(rect.contains(15, 25));
//! assert!(rect.fits_within(110, 70));
//! assert!(!rect.fits_within(109, 70));
//! ```

/// A rectangle defined by origin (x, y) and extent (width, height).
///
/// A rectangle with zero width or height is empty.
///
/// # Example
///
/// ```rust
/// use imagelib_core::Rect;
///
/// let rect = Rect::new(10, 20, 100, 50);
/// assert_eq!(rect.right(), 110);
/// assert_eq!(rect.bottom(), 70);
/// assert_eq!(rect.area(), 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left column (inclusive)
    pub x: u32,
    /// Top row (inclusive)
    pub y: u32,
    /// Width in columns
    pub width: u32,
    /// Height in rows
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle with the given origin and extent.
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle at origin (0, 0) with the given extent.
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Returns the column just past the right edge.
    ///
    /// Saturates at `u32::MAX`.
    #[inline]
    pub const fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Returns the row just past the bottom edge.
    ///
    /// Saturates at `u32::MAX`.
    #[inline]
    pub const fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Returns the area in pixels.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns `true` if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if the point (px, py) is inside this rectangle.
    ///
    /// Inclusive on the left/top edges, exclusive on the right/bottom edges.
    ///
    /// ```rust
    /// use imagelib_core::Rect;
    ///
    /// let rect = Rect::new(10, 10, 100, 100);
    /// assert!(rect.contains(10, 10));
    /// assert!(rect.contains(109, 109));
    /// assert!(!rect.contains(110, 110));
    /// ```
    #[inline]
    pub const fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Returns `true` if the rectangle lies within a `cols x rows` grid.
    ///
    /// Computed in 64-bit so that origins near `u32::MAX` cannot wrap.
    /// An empty rectangle fits as long as its origin is not past the grid
    /// edge (`x <= cols`, `y <= rows`).
    #[inline]
    pub const fn fits_within(&self, cols: u32, rows: u32) -> bool {
        self.x as u64 + self.width as u64 <= cols as u64
            && self.y as u64 + self.height as u64 <= rows as u64
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

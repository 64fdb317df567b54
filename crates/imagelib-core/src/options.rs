//! Option types shared by the geometric transforms.

/// Placement of the source image inside a padded canvas.
///
/// # Example
///
/// ```rust
/// use imagelib_core::PadAnchor;
///
/// // 5 extra columns, 2 extra rows
/// assert_eq!(PadAnchor::TopLeft.offsets(5, 2), (0, 0));
/// assert_eq!(PadAnchor::Center.offsets(5, 2), (2, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PadAnchor {
    /// Source pixel (0, 0) stays at (0, 0); padding goes right and below.
    #[default]
    TopLeft,
    /// Source is centered; odd leftovers go to the right/bottom margin.
    Center,
}

impl PadAnchor {
    /// Returns the `(col, row)` offset of the source inside the canvas,
    /// given the number of extra columns and rows.
    #[inline]
    pub const fn offsets(self, extra_cols: u32, extra_rows: u32) -> (u32, u32) {
        match self {
            Self::TopLeft => (0, 0),
            Self::Center => (extra_cols / 2, extra_rows / 2),
        }
    }
}

/// Image axis, used to report which dimension an operation rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Horizontal axis (width)
    Cols,
    /// Vertical axis (height)
    Rows,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cols => f.write_str("cols"),
            Self::Rows => f.write_str("rows"),
        }
    }
}

//! Viewport geometry primitives.

use std::fmt;

/// A terminal viewport size in cells (columns x rows).
///
/// One terminal row is the vertical "pixel" of this crate: scroll positions
/// and speeds are expressed in (fractional) rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    /// Create a new size.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

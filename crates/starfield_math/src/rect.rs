//! Axis-aligned rectangle

use crate::Vec2;

/// Axis-aligned rectangle stored as a min corner and a size
///
/// Containment is half-open: the min edges are inside, the max edges are not.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    /// Create a rectangle of `size` centered on `center`
    #[inline]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size * 0.5,
            size,
        }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Whether `p` lies inside the rectangle
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x < max.x && p.y >= self.min.y && p.y < max.y
    }
}

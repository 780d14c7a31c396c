//! Axis-aligned rectangle
//!
//! Stored as a center plus half-extents. The center representation is the
//! one every collision routine works in; callers that think in top-left
//! origin terms construct through [`Rect::from_min_size`].

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;

/// Axis-aligned box defined by its center and half-extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Center of the box
    pub center: Vec2,
    /// Half-extents on each axis (always non-negative for a well-formed box)
    pub half: Vec2,
}

impl Rect {
    /// Create a rectangle from its center and full size
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size * 0.5,
        }
    }

    /// Create a rectangle from its center and half-extents
    pub fn from_center_half(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Create a rectangle from its top-left corner and full size
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            center: min + size * 0.5,
            half: size * 0.5,
        }
    }

    /// Create a rectangle spanning two corner coordinates
    pub fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::from_min_size(Vec2::new(x1, y1), Vec2::new(x2 - x1, y2 - y1))
    }

    /// Create a rectangle spanning two corner points
    pub fn from_points(p1: Vec2, p2: Vec2) -> Self {
        Self::from_coords(p1.x, p1.y, p2.x, p2.y)
    }

    /// Full width of the box
    pub fn width(&self) -> f32 {
        self.half.x * 2.0
    }

    /// Full height of the box
    pub fn height(&self) -> f32 {
        self.half.y * 2.0
    }

    /// Full size of the box
    pub fn size(&self) -> Vec2 {
        self.half * 2.0
    }

    /// Minimum (top-left) corner
    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    /// Maximum (bottom-right) corner
    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }

    /// Interval-overlap test against another box
    ///
    /// Touching edges count as overlapping. Symmetric:
    /// `a.overlaps(&b) == b.overlaps(&a)`.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x <= b_max.x && a_max.x >= b_min.x && a_min.y <= b_max.y && a_max.y >= b_min.y
    }

    /// Check if a point lies inside the box (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// A copy of this box grown by per-axis padding
    pub fn padded(&self, padding: Vec2) -> Rect {
        Self {
            center: self.center,
            half: self.half + padding,
        }
    }
}

//! Axis-aligned bounding rectangles in screen space
//!
//! Every collidable thing (player car, traffic cars, road shoulders) is
//! reported to the simulation as one of these.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle: `origin` is the top-left corner, `size` the extent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const ZERO: Self = Self {
        origin: Vec2::ZERO,
        size: Vec2::ZERO,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle of `size` centered on `center`
    #[inline]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            origin: center - size / 2.0,
            size,
        }
    }

    /// Smallest corner (negative sizes are treated as extending left/up)
    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin.min(self.origin + self.size)
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin.max(self.origin + self.size)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        (self.min() + self.max()) / 2.0
    }

    /// True if the rectangle covers no area
    #[inline]
    pub fn is_empty(self) -> bool {
        let extent = self.max() - self.min();
        !(extent.x > 0.0 && extent.y > 0.0)
    }

    /// Overlap on each axis (negative or zero when the projections don't overlap)
    #[inline]
    fn overlap(self, other: Rect) -> Vec2 {
        self.max().min(other.max()) - self.min().max(other.min())
    }

    /// Strict intersection: both axes must overlap by a non-zero amount.
    ///
    /// Rectangles that only share an edge or a corner do not intersect.
    /// NaN coordinates never intersect anything.
    #[inline]
    pub fn intersects(self, other: Rect) -> bool {
        let overlap = self.overlap(other);
        overlap.x > 0.0 && overlap.y > 0.0
    }
}

//! Axis-aligned collision shapes
//!
//! Every entity's shape is a rectangle centred on its position. Edges that
//! merely touch do not count as overlapping.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle stored as centre + full size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Square of side `side` centred on `center`
    pub fn square(center: Vec2, side: f32) -> Self {
        Self::from_center(center, Vec2::splat(side))
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.size.x * 0.5
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.size.x * 0.5
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.size.y * 0.5
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y * 0.5
    }

    /// Strict overlap test on both axes
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

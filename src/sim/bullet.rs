//! Player projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// A bullet travelling at constant velocity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Side of the square shape
    pub size: f32,
}

impl Bullet {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    /// Move by one tick of velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// True once the centre has left [0, width] × [0, height]
    pub fn is_out_of_bounds(&self, width: f32, height: f32) -> bool {
        self.pos.x < 0.0 || self.pos.x > width || self.pos.y < 0.0 || self.pos.y > height
    }

    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_is_linear() {
        let mut b = Bullet::new(Vec2::new(10.0, 10.0), Vec2::new(2.0, -1.0), 4.0);
        b.advance();
        b.advance();
        assert_eq!(b.pos, Vec2::new(14.0, 8.0));
        assert_eq!(b.vel, Vec2::new(2.0, -1.0));
    }

    #[test]
    fn test_bounds_inclusive_of_edges() {
        let at_edge = Bullet::new(Vec2::new(800.0, 0.0), Vec2::ZERO, 4.0);
        assert!(!at_edge.is_out_of_bounds(800.0, 600.0));

        let past = Bullet::new(Vec2::new(800.5, 10.0), Vec2::ZERO, 4.0);
        assert!(past.is_out_of_bounds(800.0, 600.0));

        let above = Bullet::new(Vec2::new(10.0, -0.1), Vec2::ZERO, 4.0);
        assert!(above.is_out_of_bounds(800.0, 600.0));
    }
}

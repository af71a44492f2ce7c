//! Enemies: homing movement, knockback and animation

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::Animation;
use super::rect::Rect;
use crate::{direction, normalize};

/// Enemy types, each with its own animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Goblin,
    Skeleton,
    Slime,
    Bat,
}

impl EnemyKind {
    pub const COUNT: usize = 4;
    pub const ALL: [EnemyKind; Self::COUNT] = [
        EnemyKind::Goblin,
        EnemyKind::Skeleton,
        EnemyKind::Slime,
        EnemyKind::Bat,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kind for a uniform draw in `0..COUNT`
    pub fn from_index(i: u32) -> Self {
        Self::ALL[i as usize % Self::COUNT]
    }
}

/// How an enemy moves this tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Motion {
    /// Steer straight at the player
    Homing,
    /// Forced displacement along `dir` (unit) until `remaining` is used up
    Knockback { dir: Vec2, remaining: f32 },
}

/// An enemy entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub kind: EnemyKind,
    pub speed: f32,
    pub motion: Motion,
    pub facing_left: bool,
    pub anim: Animation,
    /// Size of the current animation frame
    pub size: Vec2,
}

impl Enemy {
    /// New homing enemy showing the first frame of its animation
    pub fn new(pos: Vec2, kind: EnemyKind, speed: f32, frames: &[Vec2]) -> Self {
        Self {
            pos,
            kind,
            speed,
            motion: Motion::Homing,
            facing_left: false,
            anim: Animation::default(),
            size: frames.first().copied().unwrap_or(Vec2::ZERO),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    pub fn is_knocked_back(&self) -> bool {
        matches!(self.motion, Motion::Knockback { .. })
    }

    /// Push away from `source` for `distance` units.
    ///
    /// Returns false (and changes nothing) when `source` is exactly on top of
    /// the enemy, since there is no direction to push in.
    pub fn set_knockback(&mut self, source: Vec2, distance: f32) -> bool {
        let dir = normalize(self.pos - source);
        if dir == Vec2::ZERO {
            return false;
        }
        self.motion = if distance > 0.0 {
            Motion::Knockback {
                dir,
                remaining: distance,
            }
        } else {
            Motion::Homing
        };
        true
    }

    /// Advance one tick: knockback if active, otherwise home in on `target`
    pub fn update(&mut self, target: Vec2, knockback_speed: f32, frames: &[Vec2], frame_ticks: u32) {
        match self.motion {
            Motion::Knockback { dir, remaining } => {
                let step = knockback_speed.min(remaining);
                self.pos += dir * step;
                self.facing_left = dir.x < 0.0;

                let remaining = remaining - step;
                self.motion = if remaining > 0.0 {
                    Motion::Knockback { dir, remaining }
                } else {
                    Motion::Homing
                };
            }
            Motion::Homing => self.move_toward(target),
        }

        if let Some(size) = self.anim.step(frames, frame_ticks) {
            self.size = size;
        }
    }

    fn move_toward(&mut self, target: Vec2) {
        self.facing_left = target.x - self.pos.x < 0.0;
        self.pos += direction(self.pos, target) * self.speed;
    }
}

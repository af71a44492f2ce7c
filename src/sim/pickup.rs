//! Coins and powerups dropped by defeated enemies

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::{COIN_SIZE, POWERUP_SIZE};

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerupKind {
    /// Sets player movement speed
    SpeedBoost,
    /// Faster bullets
    SpeedUpBullets,
    /// More bullets per volley
    MoreBullets,
}

impl PowerupKind {
    pub const ALL: [PowerupKind; 3] = [
        PowerupKind::SpeedBoost,
        PowerupKind::SpeedUpBullets,
        PowerupKind::MoreBullets,
    ];

    /// Kind for a uniform draw in `0..ALL.len()`
    pub fn from_index(i: u32) -> Self {
        Self::ALL[i as usize % Self::ALL.len()]
    }
}

/// Worth one XP when collected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vec2,
}

impl Coin {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, COIN_SIZE)
    }
}

/// A pickup entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Powerup {
    pub pos: Vec2,
    pub kind: PowerupKind,
}

impl Powerup {
    pub fn new(pos: Vec2, kind: PowerupKind) -> Self {
        Self { pos, kind }
    }

    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, POWERUP_SIZE)
    }
}

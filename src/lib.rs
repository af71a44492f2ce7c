//! Swarm Shooter - a top-down arena survival shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, spawning, game state)
//! - `config`: Immutable tuning values loaded once at startup
//! - `assets`: Animation frame lookup resolved from an asset provider
//! - `audio`: Sound effect ids and the sink they are played through
//! - `platform`: Input polling abstraction
//! - `renderer`: Draw-call interface and scene ordering
//! - `game`: Frame driver wiring the collaborators to the simulation

pub mod assets;
pub mod audio;
pub mod config;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{Config, ConfigError};
pub use game::Game;

use glam::Vec2;

/// Fixed game rules that are not exposed as configuration
pub mod consts {
    /// Side length of the square coin shape
    pub const COIN_SIZE: f32 = 15.0;
    /// Side length of the square powerup shape
    pub const POWERUP_SIZE: f32 = 15.0;
    /// Powerups drop slightly offset from the dead enemy
    pub const POWERUP_DROP_OFFSET: f32 = 5.0;
    /// One powerup per this many enemy deaths, on average
    pub const POWERUP_DROP_ODDS: u32 = 10;
    /// Angle between neighbouring bullets of a spread shot (degrees)
    pub const SPREAD_ANGLE_DEG: f32 = 10.0;
    /// Ticks each animation frame is shown
    pub const ANIMATION_FRAME_TICKS: u32 = 8;

    /// Powerup effect magnitudes
    pub const SPEED_BOOST_VALUE: f32 = 10.0;
    pub const BULLET_SPEED_BONUS: f32 = 3.0;
    pub const BULLET_COUNT_BONUS: u32 = 3;

    /// Upper bound shown by the health HUD
    pub const HUD_MAX_HEALTH: u32 = 5;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Unit vector of `v`, or zero when `v` has no length
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    let len = v.length();
    if len == 0.0 { Vec2::ZERO } else { v / len }
}

/// Unit vector pointing from `from` toward `to`
#[inline]
pub fn direction(from: Vec2, to: Vec2) -> Vec2 {
    normalize(to - from)
}

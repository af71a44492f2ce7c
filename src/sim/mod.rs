//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed logical tick per frame
//! - Randomness only through the injected `RandomSource`
//! - Stable iteration order (collection order)
//! - No rendering, audio or platform dependencies

pub mod anim;
pub mod bullet;
pub mod enemy;
pub mod pickup;
pub mod player;
pub mod rect;
pub mod rng;
pub mod state;
pub mod tick;

pub use anim::Animation;
pub use bullet::Bullet;
pub use enemy::{Enemy, EnemyKind, Motion};
pub use pickup::{Coin, Powerup, PowerupKind};
pub use player::{MoveKeys, Player, PlayerAnim, nearest_enemy};
pub use rect::Rect;
pub use rng::{RandomSource, SimRng};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};

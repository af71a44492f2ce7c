//! Game state and core simulation types
//!
//! The arena owns every entity collection; only `tick` mutates them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::pickup::{Coin, Powerup, PowerupKind};
use super::player::Player;
use super::rng::{RandomSource, SimRng};
use crate::assets::AnimationTable;
use crate::config::Config;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player health reached zero; waiting for restart or quit
    GameOver,
    /// Quit requested
    Exited,
}

/// Things that happened during the last tick, in order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemyKilled { pos: Vec2 },
    CoinCollected,
    PowerupCollected(PowerupKind),
    PlayerDamaged,
    PlayerDied,
    MenuClick,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SimRng> {
    pub config: Config,
    pub anims: AnimationTable,
    pub rng: R,
    pub phase: GamePhase,
    /// Ticks simulated since the last reset
    pub time_ticks: u64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    pub powerups: Vec<Powerup>,
    /// Ticks since the last spawn wave
    pub spawn_timer: u32,
    /// Kind of the most recently dropped powerup
    pub last_powerup_kind: Option<PowerupKind>,
    /// Events produced by the last tick
    pub events: Vec<GameEvent>,
}

impl GameState<SimRng> {
    /// New session with a seeded generator
    pub fn new(config: Config, anims: AnimationTable, seed: u64) -> Self {
        Self::with_rng(config, anims, SimRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// New session drawing randomness from `rng`
    pub fn with_rng(config: Config, anims: AnimationTable, rng: R) -> Self {
        let player = Player::new(arena_center(&config), &config, &anims);
        Self {
            config,
            anims,
            rng,
            phase: GamePhase::Playing,
            time_ticks: 0,
            player,
            enemies: Vec::new(),
            coins: Vec::new(),
            powerups: Vec::new(),
            spawn_timer: 0,
            last_powerup_kind: None,
            events: Vec::new(),
        }
    }

    /// Start over: fresh player in the centre, empty arena
    pub fn reset(&mut self) {
        self.player = Player::new(arena_center(&self.config), &self.config, &self.anims);
        self.enemies.clear();
        self.coins.clear();
        self.powerups.clear();
        self.spawn_timer = 0;
        self.last_powerup_kind = None;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::MenuClick);
        log::info!("Game reset");
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.config.width_f(), self.config.height_f())
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_running(&self) -> bool {
        self.phase != GamePhase::Exited
    }
}

/// Integer centre of the arena, where the player starts
fn arena_center(config: &Config) -> Vec2 {
    Vec2::new((config.width / 2) as f32, (config.height / 2) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Enemy, EnemyKind};

    #[test]
    fn test_new_state() {
        let state = GameState::new(Config::default(), AnimationTable::default(), 1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.player.health, 5);
        assert!(state.enemies.is_empty());
        assert_eq!(state.rng.seed(), 1);
    }

    #[test]
    fn test_odd_arena_center_rounds_down() {
        let config = Config {
            width: 801,
            height: 599,
            ..Default::default()
        };
        let state = GameState::new(config, AnimationTable::default(), 1);
        assert_eq!(state.player.pos, Vec2::new(400.0, 299.0));
    }

    #[test]
    fn test_reset_clears_arena() {
        let mut state = GameState::new(Config::default(), AnimationTable::default(), 1);
        let frames = state.anims.enemy(EnemyKind::Goblin).to_vec();
        state
            .enemies
            .push(Enemy::new(Vec2::new(10.0, 10.0), EnemyKind::Goblin, 1.0, &frames));
        state.coins.push(Coin::new(Vec2::new(5.0, 5.0)));
        state
            .powerups
            .push(Powerup::new(Vec2::new(6.0, 6.0), PowerupKind::MoreBullets));
        state.player.pos = Vec2::new(12.0, 34.0);
        state.player.health = 0;
        state.player.xp = 9;
        state.spawn_timer = 33;
        state.phase = GamePhase::GameOver;

        state.reset();

        assert_eq!(state.player.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.player.health, 5);
        assert_eq!(state.player.xp, 0);
        assert!(state.enemies.is_empty());
        assert!(state.coins.is_empty());
        assert!(state.powerups.is_empty());
        assert_eq!(state.spawn_timer, 0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.events.last(), Some(&GameEvent::MenuClick));
    }
}

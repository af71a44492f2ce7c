//! Game configuration
//!
//! Built once at startup and handed to the simulation. Keys follow the
//! upper-case option names (`WIDTH`, `PLAYER_SPEED`, ...) so a JSON file can
//! override any subset of the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Immutable tuning values for one game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct Config {
    /// Arena width (pixels)
    pub width: u32,
    /// Arena height (pixels)
    pub height: u32,
    /// Logical ticks per second
    pub fps: u32,

    /// Player movement per tick along each pressed axis
    pub player_speed: f32,
    /// Starting (and maximum) player health
    pub player_health: u32,

    /// Enemy homing speed per tick
    pub default_enemy_speed: f32,
    /// Largest knockback step per tick
    pub enemy_knockback_speed: f32,
    /// Total knockback distance applied when the player is touched
    pub pushback_distance: f32,

    /// How far outside the arena edge enemies appear
    pub spawn_margin: f32,
    /// Ticks between spawn waves
    pub spawn_interval: u32,
    /// Enemies created per spawn wave
    pub enemies_per_spawn: u32,

    // === Bullet template ===
    pub bullet_speed: f32,
    pub bullet_size: f32,
    pub bullet_count: u32,
    /// Ticks that must pass between volleys
    pub shoot_cooldown: u32,

    /// Apply the most recently dropped powerup kind on every pickup instead
    /// of the collected powerup's own kind
    pub legacy_powerup_effect: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fps: 60,

            player_speed: 3.0,
            player_health: 5,

            default_enemy_speed: 1.0,
            enemy_knockback_speed: 5.0,
            pushback_distance: 50.0,

            spawn_margin: 50.0,
            spawn_interval: 60,
            enemies_per_spawn: 1,

            bullet_speed: 10.0,
            bullet_size: 10.0,
            bullet_count: 1,
            shoot_cooldown: 20,

            legacy_powerup_effect: false,
        }
    }
}

impl Config {
    /// Parse and validate a JSON document; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        }

        if self.width == 0 {
            return invalid("WIDTH", "must be positive");
        }
        if self.height == 0 {
            return invalid("HEIGHT", "must be positive");
        }
        if self.fps == 0 {
            return invalid("FPS", "must be positive");
        }
        if self.spawn_interval == 0 {
            return invalid("SPAWN_INTERVAL", "must be positive");
        }
        if self.player_health == 0 {
            return invalid("PLAYER_HEALTH", "must be positive");
        }
        if self.bullet_count == 0 {
            return invalid("BULLET_COUNT", "must be positive");
        }
        if self.enemy_knockback_speed.is_nan() || self.enemy_knockback_speed <= 0.0 {
            return invalid("ENEMY_KNOCKBACK_SPEED", "must be positive");
        }

        let non_negative = [
            ("PLAYER_SPEED", self.player_speed),
            ("DEFAULT_ENEMY_SPEED", self.default_enemy_speed),
            ("PUSHBACK_DISTANCE", self.pushback_distance),
            ("SPAWN_MARGIN", self.spawn_margin),
            ("BULLET_SPEED", self.bullet_speed),
            ("BULLET_SIZE", self.bullet_size),
        ];
        for (field, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return invalid(field, "must be a non-negative number");
            }
        }

        Ok(())
    }

    /// Arena width as a float
    #[inline]
    pub fn width_f(&self) -> f32 {
        self.width as f32
    }

    /// Arena height as a float
    #[inline]
    pub fn height_f(&self) -> f32 {
        self.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "WIDTH": 1024, "PUSHBACK_DISTANCE": 80.0 }"#).unwrap();
        assert_eq!(config.width, 1024);
        assert_eq!(config.pushback_distance, 80.0);
        assert_eq!(config.height, 600);
        assert_eq!(config.spawn_interval, 60);
    }

    #[test]
    fn test_recognized_option_names() {
        let json = r#"{
            "WIDTH": 640, "HEIGHT": 480, "FPS": 30,
            "PLAYER_SPEED": 4.0, "DEFAULT_ENEMY_SPEED": 2.0,
            "ENEMY_KNOCKBACK_SPEED": 6.0, "PUSHBACK_DISTANCE": 40.0,
            "SPAWN_MARGIN": 20.0
        }"#;
        let config = Config::from_json(json).unwrap();
        assert_eq!((config.width, config.height, config.fps), (640, 480, 30));
        assert_eq!(config.player_speed, 4.0);
        assert_eq!(config.default_enemy_speed, 2.0);
        assert_eq!(config.enemy_knockback_speed, 6.0);
        assert_eq!(config.spawn_margin, 20.0);
    }

    #[test]
    fn test_rejects_zero_width() {
        let err = Config::from_json(r#"{ "WIDTH": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "WIDTH", .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Config::from_json("{ WIDTH: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_negative_speed() {
        let config = Config {
            bullet_speed: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "BULLET_SPEED", .. })
        ));
    }
}

//! Sound effect ids and the sink that plays them
//!
//! Sounds are fire-and-forget: the simulation records [`GameEvent`]s and the
//! frame driver forwards them here. Loaded audio resources live with the
//! sink implementation, entities only ever name a [`SoundEffect`].

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Bullet destroyed an enemy
    EnemyDeath,
    /// Coin picked up
    CoinCollect,
    /// Powerup picked up
    PowerupCollect,
    /// Enemy touched the player
    PlayerDamaged,
    /// Health reached zero
    PlayerDeath,
    /// Restart or quit from the game-over prompt
    MenuClick,
}

impl GameEvent {
    /// Sound that accompanies this event
    pub fn sound(&self) -> SoundEffect {
        match self {
            GameEvent::EnemyKilled { .. } => SoundEffect::EnemyDeath,
            GameEvent::CoinCollected => SoundEffect::CoinCollect,
            GameEvent::PowerupCollected(_) => SoundEffect::PowerupCollect,
            GameEvent::PlayerDamaged => SoundEffect::PlayerDamaged,
            GameEvent::PlayerDied => SoundEffect::PlayerDeath,
            GameEvent::MenuClick => SoundEffect::MenuClick,
        }
    }
}

/// Audio output; implementations must not block
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Discards every sound
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Play the sound of each event, in order
pub fn play_events(sink: &mut dyn AudioSink, events: &[GameEvent]) {
    for event in events {
        sink.play(event.sound());
    }
}

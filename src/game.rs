//! Frame driver
//!
//! One call to [`Game::frame`] polls input, ticks the simulation, plays the
//! resulting sounds and draws the scene.

use crate::assets::{AnimationTable, AssetError, AssetProvider};
use crate::audio::{AudioSink, play_events};
use crate::config::Config;
use crate::platform::InputSource;
use crate::renderer::{RenderTarget, draw_scene};
use crate::sim::{GameState, RandomSource, SimRng, tick};

/// A running session
pub struct Game<R: RandomSource = SimRng> {
    pub state: GameState<R>,
}

impl Game<SimRng> {
    /// Resolve assets and start a seeded session
    pub fn new(config: Config, assets: &dyn AssetProvider, seed: u64) -> Result<Self, AssetError> {
        let anims = AnimationTable::load(assets)?;
        log::info!(
            "Starting {}x{} arena at {} fps, seed {}",
            config.width,
            config.height,
            config.fps,
            seed
        );
        Ok(Self {
            state: GameState::new(config, anims, seed),
        })
    }
}

impl<R: RandomSource> Game<R> {
    /// Run one frame; returns false once the player has quit
    pub fn frame(
        &mut self,
        input: &mut dyn InputSource,
        audio: &mut dyn AudioSink,
        target: &mut dyn RenderTarget,
    ) -> bool {
        let snapshot = input.poll();
        tick(&mut self.state, &snapshot);
        play_events(audio, &self.state.events);
        draw_scene(&self.state, target);
        self.state.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SoundEffect;
    use crate::platform::ScriptedInput;
    use crate::renderer::{DrawCall, DrawList};
    use crate::sim::{EnemyKind, PlayerAnim, TickInput};
    use glam::Vec2;

    struct Sheet;

    impl AssetProvider for Sheet {
        fn enemy_frames(&self, _kind: EnemyKind) -> Vec<Vec2> {
            vec![Vec2::splat(28.0); 3]
        }

        fn player_frames(&self, _anim: PlayerAnim) -> Vec<Vec2> {
            vec![Vec2::splat(32.0); 4]
        }
    }

    #[derive(Default)]
    struct Recorder(Vec<SoundEffect>);

    impl AudioSink for Recorder {
        fn play(&mut self, effect: SoundEffect) {
            self.0.push(effect);
        }
    }

    #[test]
    fn test_frame_until_quit() {
        let mut game = Game::new(Config::default(), &Sheet, 5).unwrap();
        let mut input = ScriptedInput::new([
            TickInput::default(),
            TickInput {
                quit: true,
                ..Default::default()
            },
        ]);
        let mut audio = Recorder::default();
        let mut target = DrawList::default();

        assert!(game.frame(&mut input, &mut audio, &mut target));
        assert!(!game.frame(&mut input, &mut audio, &mut target));
        assert_eq!(audio.0, vec![SoundEffect::MenuClick]);
        assert!(matches!(target.calls.last(), Some(DrawCall::Hud(_))));
    }

    #[test]
    fn test_death_plays_sounds_and_shows_prompt() {
        let mut game = Game::new(Config::default(), &Sheet, 5).unwrap();
        game.state.player.health = 1;
        let frames = game.state.anims.enemy(EnemyKind::Bat).to_vec();
        let enemy = crate::sim::Enemy::new(game.state.player.pos, EnemyKind::Bat, 1.0, &frames);
        game.state.enemies.push(enemy);

        let mut input = ScriptedInput::default();
        let mut audio = Recorder::default();
        let mut target = DrawList::default();
        assert!(game.frame(&mut input, &mut audio, &mut target));

        assert_eq!(
            audio.0,
            vec![SoundEffect::PlayerDamaged, SoundEffect::PlayerDeath]
        );
        assert!(target.calls.contains(&DrawCall::GameOver));
    }
}

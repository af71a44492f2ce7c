//! Swarm Shooter headless entry point
//!
//! Runs the simulation with an autopilot that fires at the nearest enemy
//! until the player dies or the time limit is reached, then logs the result.
//!
//! Usage: `swarm-shooter [config.json] [seed]`

use std::process::ExitCode;

use glam::Vec2;

use swarm_shooter::assets::AssetProvider;
use swarm_shooter::audio::NullAudio;
use swarm_shooter::platform::Autopilot;
use swarm_shooter::renderer::DrawList;
use swarm_shooter::sim::{EnemyKind, PlayerAnim};
use swarm_shooter::{Config, Game};

/// Seconds of game time before the demo stops on its own
const DEMO_SECONDS: u64 = 120;

/// Plain rectangles standing in for sprite sheets
struct PlaceholderSprites;

impl AssetProvider for PlaceholderSprites {
    fn enemy_frames(&self, kind: EnemyKind) -> Vec<Vec2> {
        let size = match kind {
            EnemyKind::Goblin => Vec2::new(28.0, 32.0),
            EnemyKind::Skeleton => Vec2::new(26.0, 36.0),
            EnemyKind::Slime => Vec2::new(30.0, 22.0),
            EnemyKind::Bat => Vec2::new(32.0, 20.0),
        };
        vec![size; 4]
    }

    fn player_frames(&self, anim: PlayerAnim) -> Vec<Vec2> {
        match anim {
            PlayerAnim::Idle => vec![Vec2::new(32.0, 32.0); 4],
            PlayerAnim::Run => vec![Vec2::new(32.0, 32.0); 6],
        }
    }
}

fn main() -> ExitCode {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => match Config::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Could not load {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::error!("Invalid seed: {}", e);
            return ExitCode::FAILURE;
        }
        None => 0x5eed,
    };

    let mut game = match Game::new(config, &PlaceholderSprites, seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Could not load assets: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let max_frames = u64::from(game.state.config.fps) * DEMO_SECONDS;
    let mut input = Autopilot;
    let mut audio = NullAudio;
    let mut target = DrawList::default();

    for _ in 0..max_frames {
        target.clear();
        if !game.frame(&mut input, &mut audio, &mut target) || game.state.is_game_over() {
            break;
        }
    }

    let player = &game.state.player;
    log::info!(
        "Finished after {} ticks: health {}, xp {}, {} enemies on the field",
        game.state.time_ticks,
        player.health,
        player.xp,
        game.state.enemies.len()
    );
    log::debug!("Last frame issued {} draw calls", target.calls.len());

    ExitCode::SUCCESS
}

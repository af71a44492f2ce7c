//! Draw-call interface
//!
//! The simulation does not know about pixels. `draw_scene` walks the state in
//! painter's order and hands each entity's shape and frame to a
//! [`RenderTarget`].

use crate::consts::HUD_MAX_HEALTH;
use crate::sim::{EnemyKind, GameState, PlayerAnim, PowerupKind, RandomSource, Rect};

/// What a sprite depicts, so the target can pick an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Player(PlayerAnim),
    Enemy(EnemyKind),
    Bullet,
    Coin,
    Powerup(PowerupKind),
}

/// One entity to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub rect: Rect,
    /// Animation frame index (0 for static sprites)
    pub frame: usize,
    /// Mirror horizontally
    pub flip_x: bool,
}

/// Heads-up display values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    /// Health clamped to the displayable range
    pub health: u32,
    pub xp: u32,
}

pub trait RenderTarget {
    fn draw_sprite(&mut self, sprite: &Sprite);
    fn draw_hud(&mut self, hud: &Hud);
    /// Dark overlay with the restart/quit prompt
    fn draw_game_over(&mut self);
}

/// Issue draw calls for the whole scene: pickups, enemies, the player and
/// their bullets (hidden once the game is over), the game-over prompt, HUD
pub fn draw_scene<R: RandomSource>(state: &GameState<R>, target: &mut dyn RenderTarget) {
    for coin in &state.coins {
        target.draw_sprite(&Sprite {
            kind: SpriteKind::Coin,
            rect: coin.rect(),
            frame: 0,
            flip_x: false,
        });
    }

    for powerup in &state.powerups {
        target.draw_sprite(&Sprite {
            kind: SpriteKind::Powerup(powerup.kind),
            rect: powerup.rect(),
            frame: 0,
            flip_x: false,
        });
    }

    for enemy in &state.enemies {
        target.draw_sprite(&Sprite {
            kind: SpriteKind::Enemy(enemy.kind),
            rect: enemy.rect(),
            frame: enemy.anim.frame_index,
            flip_x: enemy.facing_left,
        });
    }

    let player = &state.player;
    if state.is_game_over() {
        target.draw_game_over();
    } else {
        target.draw_sprite(&Sprite {
            kind: SpriteKind::Player(player.anim_state),
            rect: player.rect(),
            frame: player.current_frame(&state.anims),
            flip_x: player.facing_left,
        });
        for bullet in &player.bullets {
            target.draw_sprite(&Sprite {
                kind: SpriteKind::Bullet,
                rect: bullet.rect(),
                frame: 0,
                flip_x: false,
            });
        }
    }

    target.draw_hud(&Hud {
        health: player.health.min(HUD_MAX_HEALTH),
        xp: player.xp,
    });
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Sprite(Sprite),
    Hud(Hud),
    GameOver,
}

/// Records draw calls instead of rasterizing them
#[derive(Debug, Default)]
pub struct DrawList {
    pub calls: Vec<DrawCall>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn sprites(&self) -> impl Iterator<Item = &Sprite> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Sprite(s) => Some(s),
            _ => None,
        })
    }
}

impl RenderTarget for DrawList {
    fn draw_sprite(&mut self, sprite: &Sprite) {
        self.calls.push(DrawCall::Sprite(*sprite));
    }

    fn draw_hud(&mut self, hud: &Hud) {
        self.calls.push(DrawCall::Hud(*hud));
    }

    fn draw_game_over(&mut self) {
        self.calls.push(DrawCall::GameOver);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AnimationTable;
    use crate::config::Config;
    use crate::sim::{Bullet, Coin, Enemy, GamePhase, Powerup, TickInput, tick};
    use glam::Vec2;

    fn populated() -> GameState {
        let mut state = GameState::new(Config::default(), AnimationTable::default(), 3);
        let frames = state.anims.enemy(EnemyKind::Slime).to_vec();
        let mut enemy = Enemy::new(Vec2::new(50.0, 50.0), EnemyKind::Slime, 1.0, &frames);
        enemy.facing_left = true;
        state.enemies.push(enemy);
        state.coins.push(Coin::new(Vec2::new(10.0, 10.0)));
        state
            .powerups
            .push(Powerup::new(Vec2::new(20.0, 20.0), PowerupKind::SpeedBoost));
        state
            .player
            .bullets
            .push(Bullet::new(Vec2::new(300.0, 300.0), Vec2::ZERO, 10.0));
        state
    }

    #[test]
    fn test_painter_order() {
        let state = populated();
        let mut list = DrawList::default();
        draw_scene(&state, &mut list);

        let kinds: Vec<SpriteKind> = list.sprites().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SpriteKind::Coin,
                SpriteKind::Powerup(PowerupKind::SpeedBoost),
                SpriteKind::Enemy(EnemyKind::Slime),
                SpriteKind::Player(PlayerAnim::Idle),
                SpriteKind::Bullet,
            ]
        );
        assert!(list.sprites().nth(2).unwrap().flip_x);
        assert_eq!(
            list.calls.last(),
            Some(&DrawCall::Hud(Hud { health: 5, xp: 0 }))
        );
    }

    #[test]
    fn test_game_over_hides_player() {
        let mut state = populated();
        state.phase = GamePhase::GameOver;
        state.player.health = 0;
        let mut list = DrawList::default();
        draw_scene(&state, &mut list);

        assert!(list.calls.contains(&DrawCall::GameOver));
        assert!(
            list.sprites()
                .all(|s| !matches!(s.kind, SpriteKind::Player(_) | SpriteKind::Bullet))
        );
        assert_eq!(
            list.calls.last(),
            Some(&DrawCall::Hud(Hud { health: 0, xp: 0 }))
        );
    }

    struct Strips;

    impl crate::assets::AssetProvider for Strips {
        fn enemy_frames(&self, _kind: EnemyKind) -> Vec<Vec2> {
            vec![Vec2::splat(30.0); 4]
        }

        fn player_frames(&self, anim: PlayerAnim) -> Vec<Vec2> {
            match anim {
                PlayerAnim::Idle => vec![Vec2::splat(32.0); 4],
                PlayerAnim::Run => vec![Vec2::splat(32.0); 6],
            }
        }
    }

    #[test]
    fn test_player_frame_within_idle_strip_after_run() {
        let anims = AnimationTable::load(&Strips).unwrap();
        let mut state = GameState::new(Config::default(), anims, 3);
        let run = TickInput {
            left: true,
            ..Default::default()
        };
        for _ in 0..40 {
            tick(&mut state, &run);
        }
        assert_eq!(state.player.anim.frame_index, 5);
        tick(&mut state, &TickInput::default());

        let mut list = DrawList::default();
        draw_scene(&state, &mut list);
        let sprite = list
            .sprites()
            .find(|s| matches!(s.kind, SpriteKind::Player(_)))
            .unwrap();
        assert_eq!(sprite.kind, SpriteKind::Player(PlayerAnim::Idle));
        assert_eq!(sprite.frame, 1);
        assert!(sprite.frame < state.anims.player(PlayerAnim::Idle).len());
    }

    #[test]
    fn test_hud_health_clamped() {
        let mut state = populated();
        state.player.health = 9;
        let mut list = DrawList::default();
        draw_scene(&state, &mut list);
        assert_eq!(
            list.calls.last(),
            Some(&DrawCall::Hud(Hud { health: 5, xp: 0 }))
        );
    }
}

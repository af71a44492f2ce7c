//! Fixed timestep simulation tick
//!
//! Core game loop that advances the arena by one frame. The order of the
//! phases below is fixed; replaying the same inputs against the same seed
//! reproduces a run exactly.

use glam::Vec2;

use super::enemy::{Enemy, EnemyKind};
use super::pickup::{Coin, Powerup, PowerupKind};
use super::player::MoveKeys;
use super::rng::RandomSource;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Fire at the nearest enemy
    pub shoot: bool,
    /// Pointer click position to fire at
    pub click: Option<Vec2>,
    /// Start a new game from the game-over prompt
    pub restart: bool,
    /// Leave the game
    pub quit: bool,
}

impl TickInput {
    pub fn move_keys(&self) -> MoveKeys {
        MoveKeys {
            left: self.left,
            right: self.right,
            up: self.up,
            down: self.down,
        }
    }
}

/// Advance the game state by one tick
pub fn tick<R: RandomSource>(state: &mut GameState<R>, input: &TickInput) {
    state.events.clear();

    if input.quit && state.phase != GamePhase::Exited {
        state.events.push(GameEvent::MenuClick);
        state.phase = GamePhase::Exited;
        log::info!("Quit requested");
        return;
    }

    match state.phase {
        GamePhase::Exited => return,
        GamePhase::GameOver => {
            if input.restart {
                state.reset();
            }
            return;
        }
        GamePhase::Playing => {}
    }

    // Shoot intents are handled before movement, like key events arriving
    // ahead of the frame update
    if input.shoot {
        state.player.shoot_toward_nearest(&state.enemies);
    }
    if let Some(target) = input.click {
        state.player.shoot_toward(target);
    }

    let bounds = state.bounds();
    state.player.apply_movement(input.move_keys(), bounds);
    state.player.update(bounds, &state.anims);

    resolve_player_enemy(state);
    resolve_bullet_enemy(state);
    collect_coins(state);
    collect_powerups(state);

    let target = state.player.pos;
    let knockback_speed = state.config.enemy_knockback_speed;
    for enemy in state.enemies.iter_mut() {
        enemy.update(
            target,
            knockback_speed,
            state.anims.enemy(enemy.kind),
            state.anims.frame_ticks,
        );
    }

    state.time_ticks += 1;

    if state.player.is_dead() {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::PlayerDied);
        log::info!(
            "Game over after {} ticks with {} xp",
            state.time_ticks,
            state.player.xp
        );
        return;
    }

    spawn_enemies(state);
}

/// Any contact costs one health (once per tick) and shoves every enemy away
fn resolve_player_enemy<R: RandomSource>(state: &mut GameState<R>) {
    let player_rect = state.player.rect();
    if !state.enemies.iter().any(|e| e.rect().overlaps(&player_rect)) {
        return;
    }

    state.player.take_damage(1);
    state.events.push(GameEvent::PlayerDamaged);

    let source = state.player.pos;
    let distance = state.config.pushback_distance;
    for enemy in state.enemies.iter_mut() {
        enemy.set_knockback(source, distance);
    }
}

/// Each bullet destroys at most the first live enemy it overlaps
fn resolve_bullet_enemy<R: RandomSource>(state: &mut GameState<R>) {
    if state.player.bullets.is_empty() || state.enemies.is_empty() {
        return;
    }

    let mut enemy_dead = vec![false; state.enemies.len()];
    let mut bullet_spent = vec![false; state.player.bullets.len()];
    let mut kills = Vec::new();

    for (bi, bullet) in state.player.bullets.iter().enumerate() {
        let bullet_rect = bullet.rect();
        let hit = state
            .enemies
            .iter()
            .enumerate()
            .position(|(ei, enemy)| !enemy_dead[ei] && enemy.rect().overlaps(&bullet_rect));
        if let Some(ei) = hit {
            enemy_dead[ei] = true;
            bullet_spent[bi] = true;
            kills.push(state.enemies[ei].pos);
        }
    }

    if kills.is_empty() {
        return;
    }

    for pos in kills {
        drop_loot(state, pos);
        state.events.push(GameEvent::EnemyKilled { pos });
    }

    retain_unmarked(&mut state.player.bullets, &bullet_spent);
    retain_unmarked(&mut state.enemies, &enemy_dead);
}

/// Powerup roll, then the coin every kill leaves behind
fn drop_loot<R: RandomSource>(state: &mut GameState<R>, pos: Vec2) {
    if state.rng.one_in(POWERUP_DROP_ODDS) {
        let kind = PowerupKind::from_index(state.rng.below(PowerupKind::ALL.len() as u32));
        state.last_powerup_kind = Some(kind);
        state
            .powerups
            .push(Powerup::new(pos + Vec2::splat(POWERUP_DROP_OFFSET), kind));
        log::debug!("Powerup {:?} dropped at {}", kind, pos);
    }
    state.coins.push(Coin::new(pos));
}

fn collect_coins<R: RandomSource>(state: &mut GameState<R>) {
    let player_rect = state.player.rect();
    let before = state.coins.len();
    state.coins.retain(|coin| !coin.rect().overlaps(&player_rect));

    for _ in state.coins.len()..before {
        state.player.add_xp(1);
        state.events.push(GameEvent::CoinCollected);
    }
}

fn collect_powerups<R: RandomSource>(state: &mut GameState<R>) {
    let player_rect = state.player.rect();
    let mut collected = Vec::new();
    state.powerups.retain(|powerup| {
        if powerup.rect().overlaps(&player_rect) {
            collected.push(powerup.kind);
            false
        } else {
            true
        }
    });

    for kind in collected {
        // Legacy mode applies whatever kind dropped last, not the one picked up
        let effect = if state.config.legacy_powerup_effect {
            state.last_powerup_kind.unwrap_or(kind)
        } else {
            kind
        };
        apply_powerup(state, effect);
        state.events.push(GameEvent::PowerupCollected(effect));
    }
}

fn apply_powerup<R: RandomSource>(state: &mut GameState<R>, kind: PowerupKind) {
    let player = &mut state.player;
    match kind {
        PowerupKind::SpeedBoost => player.increase_speed(SPEED_BOOST_VALUE),
        PowerupKind::SpeedUpBullets => player.speed_up_bullets(BULLET_SPEED_BONUS),
        PowerupKind::MoreBullets => player.increase_bullet_count(BULLET_COUNT_BONUS),
    }
    log::debug!("Applied powerup {:?}", kind);
}

/// Count toward the next wave; on the interval, drop enemies just outside a
/// random arena edge
fn spawn_enemies<R: RandomSource>(state: &mut GameState<R>) {
    state.spawn_timer += 1;
    if state.spawn_timer < state.config.spawn_interval {
        return;
    }
    state.spawn_timer = 0;

    let width = state.config.width;
    let height = state.config.height;
    let margin = state.config.spawn_margin;

    for _ in 0..state.config.enemies_per_spawn {
        let pos = match state.rng.below(4) {
            0 => Vec2::new(state.rng.up_to(width) as f32, -margin),
            1 => Vec2::new(state.rng.up_to(width) as f32, height as f32 + margin),
            2 => Vec2::new(-margin, state.rng.up_to(height) as f32),
            _ => Vec2::new(width as f32 + margin, state.rng.up_to(height) as f32),
        };
        let kind = EnemyKind::from_index(state.rng.below(EnemyKind::COUNT as u32));
        let enemy = Enemy::new(
            pos,
            kind,
            state.config.default_enemy_speed,
            state.anims.enemy(kind),
        );
        log::debug!("Spawned {:?} at {}", kind, pos);
        state.enemies.push(enemy);
    }
}

/// Keep items whose mark is false; `marks` is parallel to `items`
fn retain_unmarked<T>(items: &mut Vec<T>, marks: &[bool]) {
    let mut idx = 0;
    items.retain(|_| {
        let keep = !marks[idx];
        idx += 1;
        keep
    });
}

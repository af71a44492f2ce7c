//! The player: movement, shooting and stats

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::Animation;
use super::bullet::Bullet;
use super::enemy::Enemy;
use super::rect::Rect;
use crate::assets::AnimationTable;
use crate::config::Config;
use crate::consts::SPREAD_ANGLE_DEG;
use crate::{direction, distance};

/// Player animation states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAnim {
    Idle,
    Run,
}

impl PlayerAnim {
    pub const COUNT: usize = 2;
    pub const ALL: [PlayerAnim; Self::COUNT] = [PlayerAnim::Idle, PlayerAnim::Run];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Directional keys held this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Movement per tick along each pressed axis
    pub speed: f32,
    pub health: u32,
    pub xp: u32,
    pub facing_left: bool,

    // === Bullet template ===
    pub bullet_speed: f32,
    pub bullet_size: f32,
    pub bullet_count: u32,
    /// Minimum ticks between volleys
    pub shoot_cooldown: u32,
    /// Ticks since the last volley
    pub shoot_timer: u32,
    /// Live bullets, owned exclusively by the player
    pub bullets: Vec<Bullet>,

    pub anim_state: PlayerAnim,
    pub anim: Animation,
    /// Size of the current animation frame
    pub size: Vec2,
}

impl Player {
    /// Fresh player with default stats, ready to shoot
    pub fn new(pos: Vec2, config: &Config, anims: &AnimationTable) -> Self {
        let size = anims
            .player(PlayerAnim::Idle)
            .first()
            .copied()
            .unwrap_or(Vec2::ZERO);
        Self {
            pos,
            speed: config.player_speed,
            health: config.player_health,
            xp: 0,
            facing_left: false,
            bullet_speed: config.bullet_speed,
            bullet_size: config.bullet_size,
            bullet_count: config.bullet_count,
            shoot_cooldown: config.shoot_cooldown,
            shoot_timer: config.shoot_cooldown,
            bullets: Vec::new(),
            anim_state: PlayerAnim::Idle,
            anim: Animation::default(),
            size,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    /// Frame to show from the current animation's sequence.
    ///
    /// The cursor is shared between Idle and Run, so right after a switch it
    /// can point past the end of a shorter sequence until the next advance.
    pub fn current_frame(&self, anims: &AnimationTable) -> usize {
        self.anim.frame_index % anims.player(self.anim_state).len().max(1)
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Move according to held keys, clamped to the arena; returns the velocity.
    ///
    /// Diagonals are not normalized, so they cover more ground per tick.
    pub fn apply_movement(&mut self, keys: MoveKeys, bounds: Vec2) -> Vec2 {
        let mut vel = Vec2::ZERO;
        if keys.left {
            vel.x -= self.speed;
        }
        if keys.right {
            vel.x += self.speed;
        }
        if keys.up {
            vel.y -= self.speed;
        }
        if keys.down {
            vel.y += self.speed;
        }

        self.pos = (self.pos + vel).clamp(Vec2::ZERO, bounds);

        self.anim_state = if vel != Vec2::ZERO {
            PlayerAnim::Run
        } else {
            PlayerAnim::Idle
        };

        // Vertical-only movement keeps the previous facing
        if vel.x < 0.0 {
            self.facing_left = true;
        } else if vel.x > 0.0 {
            self.facing_left = false;
        }

        vel
    }

    /// True when the cooldown has elapsed
    pub fn can_shoot(&self) -> bool {
        self.shoot_timer >= self.shoot_cooldown
    }

    /// Fire a volley at `target`; returns how many bullets were created.
    ///
    /// With several bullets the volley fans out `SPREAD_ANGLE_DEG` apart,
    /// centred on the target direction.
    pub fn shoot_toward(&mut self, target: Vec2) -> usize {
        if !self.can_shoot() {
            return 0;
        }
        let dir = direction(self.pos, target);
        if dir == Vec2::ZERO {
            return 0;
        }

        let base_angle = dir.y.atan2(dir.x);
        let mid = (self.bullet_count as f32 - 1.0) / 2.0;
        for i in 0..self.bullet_count {
            let offset = i as f32 - mid;
            let angle = base_angle + (SPREAD_ANGLE_DEG * offset).to_radians();
            let vel = Vec2::from_angle(angle) * self.bullet_speed;
            self.bullets
                .push(Bullet::new(self.pos, vel, self.bullet_size));
        }

        self.shoot_timer = 0;
        self.bullet_count as usize
    }

    /// Fire at the closest enemy (first one wins ties); 0 when there are none
    pub fn shoot_toward_nearest(&mut self, enemies: &[Enemy]) -> usize {
        match nearest_enemy(self.pos, enemies) {
            Some(enemy) => {
                let target = enemy.pos;
                self.shoot_toward(target)
            }
            None => 0,
        }
    }

    /// Advance bullets (dropping those that left the arena), timers and animation
    pub fn update(&mut self, bounds: Vec2, anims: &AnimationTable) {
        for bullet in self.bullets.iter_mut() {
            bullet.advance();
        }
        self.bullets
            .retain(|b| !b.is_out_of_bounds(bounds.x, bounds.y));

        self.shoot_timer = self.shoot_timer.saturating_add(1);

        if let Some(size) = self
            .anim
            .step(anims.player(self.anim_state), anims.frame_ticks)
        {
            self.size = size;
        }
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn add_xp(&mut self, amount: u32) {
        self.xp = self.xp.saturating_add(amount);
    }

    /// Sets the movement speed outright (not additive)
    pub fn increase_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn speed_up_bullets(&mut self, amount: f32) {
        self.bullet_speed += amount;
    }

    pub fn increase_bullet_count(&mut self, amount: u32) {
        self.bullet_count = self.bullet_count.saturating_add(amount);
    }
}

/// Closest enemy to `pos`, earliest in collection order on ties
pub fn nearest_enemy(pos: Vec2, enemies: &[Enemy]) -> Option<&Enemy> {
    let mut best: Option<(&Enemy, f32)> = None;
    for enemy in enemies {
        let d = distance(pos, enemy.pos);
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((enemy, d));
        }
    }
    best.map(|(enemy, _)| enemy)
}

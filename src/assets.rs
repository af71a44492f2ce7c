//! Animation asset lookup
//!
//! The simulation only needs the size of each animation frame (collision
//! shapes follow the current frame) and how many frames a sequence has.
//! Pixel data stays with whoever implements [`AssetProvider`].

use glam::Vec2;
use thiserror::Error;

use crate::consts::ANIMATION_FRAME_TICKS;
use crate::sim::{EnemyKind, PlayerAnim};

#[derive(Debug, Error, PartialEq)]
pub enum AssetError {
    #[error("no animation frames for enemy kind {0:?}")]
    EmptyEnemyFrames(EnemyKind),
    #[error("no animation frames for player animation {0:?}")]
    EmptyPlayerFrames(PlayerAnim),
}

/// Source of animation frame sizes, keyed by closed tags
pub trait AssetProvider {
    /// Ordered frame sizes for an enemy kind
    fn enemy_frames(&self, kind: EnemyKind) -> Vec<Vec2>;
    /// Ordered frame sizes for a player animation
    fn player_frames(&self, anim: PlayerAnim) -> Vec<Vec2>;
}

/// Frame sequences resolved once at load time
#[derive(Debug, Clone)]
pub struct AnimationTable {
    enemies: [Vec<Vec2>; EnemyKind::COUNT],
    player: [Vec<Vec2>; PlayerAnim::COUNT],
    /// Ticks each frame is shown before advancing
    pub frame_ticks: u32,
}

impl AnimationTable {
    /// Resolve every sequence from a provider, rejecting empty ones
    pub fn load(provider: &dyn AssetProvider) -> Result<Self, AssetError> {
        let mut enemies: [Vec<Vec2>; EnemyKind::COUNT] = Default::default();
        for kind in EnemyKind::ALL {
            let frames = provider.enemy_frames(kind);
            if frames.is_empty() {
                return Err(AssetError::EmptyEnemyFrames(kind));
            }
            enemies[kind.index()] = frames;
        }

        let mut player: [Vec<Vec2>; PlayerAnim::COUNT] = Default::default();
        for anim in PlayerAnim::ALL {
            let frames = provider.player_frames(anim);
            if frames.is_empty() {
                return Err(AssetError::EmptyPlayerFrames(anim));
            }
            player[anim.index()] = frames;
        }

        log::debug!("Animation table loaded");
        Ok(Self {
            enemies,
            player,
            frame_ticks: ANIMATION_FRAME_TICKS,
        })
    }

    /// Every sequence has `count` frames of the same `size`
    pub fn uniform(size: Vec2, count: usize) -> Self {
        let count = count.max(1);
        Self {
            enemies: std::array::from_fn(|_| vec![size; count]),
            player: std::array::from_fn(|_| vec![size; count]),
            frame_ticks: ANIMATION_FRAME_TICKS,
        }
    }

    #[inline]
    pub fn enemy(&self, kind: EnemyKind) -> &[Vec2] {
        &self.enemies[kind.index()]
    }

    #[inline]
    pub fn player(&self, anim: PlayerAnim) -> &[Vec2] {
        &self.player[anim.index()]
    }
}

impl Default for AnimationTable {
    /// 32×32 sprites with four frames each
    fn default() -> Self {
        Self::uniform(Vec2::splat(32.0), 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sheet;

    impl AssetProvider for Sheet {
        fn enemy_frames(&self, kind: EnemyKind) -> Vec<Vec2> {
            match kind {
                EnemyKind::Slime => vec![Vec2::new(20.0, 16.0), Vec2::new(22.0, 14.0)],
                _ => vec![Vec2::splat(30.0); 4],
            }
        }

        fn player_frames(&self, anim: PlayerAnim) -> Vec<Vec2> {
            match anim {
                PlayerAnim::Idle => vec![Vec2::splat(32.0); 4],
                PlayerAnim::Run => vec![Vec2::splat(32.0); 6],
            }
        }
    }

    struct MissingRun;

    impl AssetProvider for MissingRun {
        fn enemy_frames(&self, _kind: EnemyKind) -> Vec<Vec2> {
            vec![Vec2::splat(30.0)]
        }

        fn player_frames(&self, anim: PlayerAnim) -> Vec<Vec2> {
            match anim {
                PlayerAnim::Idle => vec![Vec2::splat(32.0)],
                PlayerAnim::Run => Vec::new(),
            }
        }
    }

    #[test]
    fn test_load_resolves_sequences() {
        let table = AnimationTable::load(&Sheet).unwrap();
        assert_eq!(table.enemy(EnemyKind::Slime).len(), 2);
        assert_eq!(table.enemy(EnemyKind::Goblin).len(), 4);
        assert_eq!(table.player(PlayerAnim::Run).len(), 6);
        assert_eq!(table.frame_ticks, ANIMATION_FRAME_TICKS);
    }

    #[test]
    fn test_load_rejects_empty_sequence() {
        let err = AnimationTable::load(&MissingRun).unwrap_err();
        assert_eq!(err, AssetError::EmptyPlayerFrames(PlayerAnim::Run));
    }

    #[test]
    fn test_uniform_never_empty() {
        let table = AnimationTable::uniform(Vec2::splat(8.0), 0);
        assert_eq!(table.enemy(EnemyKind::Bat).len(), 1);
    }
}

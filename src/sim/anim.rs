//! Frame-counted sprite animation

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Frame cursor shared by the player and enemies
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub frame_index: usize,
    pub timer: u32,
}

impl Animation {
    /// Count one tick; every `frame_ticks` ticks move to the next frame of
    /// `frames` (wrapping) and return its size
    pub fn step(&mut self, frames: &[Vec2], frame_ticks: u32) -> Option<Vec2> {
        self.timer += 1;
        if self.timer < frame_ticks || frames.is_empty() {
            return None;
        }
        self.timer = 0;
        self.frame_index = (self.frame_index + 1) % frames.len();
        Some(frames[self.frame_index])
    }
}

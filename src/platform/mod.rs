//! Platform abstraction layer
//!
//! Input is polled once per frame and delivered as a [`TickInput`] snapshot.

use std::collections::VecDeque;

use crate::sim::TickInput;

/// Per-frame input snapshot provider
pub trait InputSource {
    fn poll(&mut self) -> TickInput;
}

/// Replays a fixed sequence of inputs, then idles
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<TickInput>,
}

impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            queue: inputs.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> TickInput {
        self.queue.pop_front().unwrap_or_default()
    }
}

/// Holds the shoot key down every frame without moving
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl InputSource for Autopilot {
    fn poll(&mut self) -> TickInput {
        TickInput {
            shoot: true,
            ..Default::default()
        }
    }
}

//! Held-control sampling
//!
//! Host input events (key down/up, touch, gamepad) update an
//! [`InputSampler`] asynchronously; the simulation reads one immutable
//! [`TickInput`] snapshot per frame and never sees the events themselves.

use serde::{Deserialize, Serialize};

use super::state::Side;

/// Momentary up/down signals for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
}

/// The two control directions a paddle understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlDir {
    Up,
    Down,
}

/// Snapshot of both players' held controls for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: Controls,
    pub right: Controls,
}

/// Tracks which controls are currently held. No other state: releases and
/// presses simply overwrite the flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSampler {
    left: Controls,
    right: Controls,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press (`held = true`) or release (`held = false`)
    pub fn set_held(&mut self, side: Side, dir: ControlDir, held: bool) {
        let controls = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        match dir {
            ControlDir::Up => controls.up = held,
            ControlDir::Down => controls.down = held,
        }
    }

    /// Drop every held flag, e.g. when the host window loses focus
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    /// The per-frame snapshot the simulation consumes
    pub fn sample(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
        }
    }
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Exactly one tick per display frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{Rect, ball_hits_paddle, ball_rect, paddle_rect, powerup_rect};
pub use input::{ControlDir, Controls, InputSampler, TickInput};
pub use state::{
    Ball, Effects, GameEvent, GamePhase, GameState, Mode, Paddle, Powerup, PowerupKind, Score,
    Side,
};
pub use tick::tick;

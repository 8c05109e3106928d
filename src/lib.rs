//! Ping Pong - a two-paddle arcade game simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball physics, powerups, rounds)
//! - `highscores`: Persisted best-score tracking
//! - `persistence`: Key/value storage abstraction (file on native, LocalStorage on web)
//! - `audio`: Sound-event collaborator interface
//!
//! Rendering, menus and actual audio playback are host concerns: the host
//! feeds held-control state in, calls [`sim::tick`] once per display frame,
//! and reads the committed [`sim::GameState`] back out to draw it.

pub mod audio;
pub mod highscores;
pub mod persistence;
pub mod sim;

pub use highscores::HighScore;

/// Game configuration constants
pub mod consts {
    /// Field dimensions (immutable for a session)
    pub const FIELD_W: f32 = 700.0;
    pub const FIELD_H: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Player movement per frame per held direction
    pub const PADDLE_SPEED: f32 = 6.0;
    /// Height multiplier while the big-paddle effect is active
    pub const ENLARGE_FACTOR: f32 = 1.7;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 16.0;
    pub const BALL_SPEED: f32 = 6.0;
    /// Horizontal speed gain on every paddle hit (compounding difficulty ramp)
    pub const PADDLE_HIT_SPEEDUP: f32 = 1.04;
    /// Vertical deflection per unit of ball-center/paddle-center offset
    pub const SPIN_FACTOR: f32 = 0.15;
    /// Per-frame velocity scale while the fast-ball effect is active
    pub const FAST_BALL_ACCEL: f32 = 1.03;

    /// AI (right paddle, single-player mode).
    /// Slower than the player on purpose - this is the difficulty tuning.
    pub const AI_SPEED: f32 = 4.0;
    pub const AI_DEADZONE: f32 = 10.0;

    /// Powerup token
    pub const POWERUP_SIZE: f32 = 24.0;
    /// Margin inset for spawn positions
    pub const POWERUP_MARGIN: f32 = 20.0;
    /// Per-frame spawn probability while no token is live
    pub const POWERUP_SPAWN_CHANCE: f64 = 0.003;

    /// Effect durations (wall clock, independent of frame rate)
    pub const BIG_PADDLE_DURATION_MS: f64 = 6000.0;
    pub const FAST_BALL_DURATION_MS: f64 = 5000.0;

    /// First side to reach this score wins the match
    pub const WIN_SCORE: u32 = 7;

    /// Nominal frame interval at 60 Hz (what the demo runner feeds to `tick`)
    pub const FRAME_DT_MS: f64 = 1000.0 / 60.0;
}

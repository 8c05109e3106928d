//! Game state and core simulation types
//!
//! All state the simulation mutates across frames lives in [`GameState`]:
//! an explicit value passed into each frame step, never ambient globals.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::input::Controls;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No active simulation; the host shows the menu
    Menu,
    /// Active match
    Playing,
    /// Match ended; frozen until the next `start_match`
    GameOver,
}

/// Match mode chosen at start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Left paddle is human, right paddle is the AI follower
    Single,
    /// Both paddles are human
    Multi,
}

/// One side of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// A paddle, stored as the y of its top edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub y: f32,
}

impl Paddle {
    /// Paddle centered vertically at base height
    pub fn centered() -> Self {
        Self {
            y: FIELD_H / 2.0 - PADDLE_HEIGHT / 2.0,
        }
    }

    /// Apply one frame of held input. Up then down sequentially, so holding
    /// both cancels out.
    pub fn step(&mut self, controls: Controls) {
        if controls.up {
            self.y -= PADDLE_SPEED;
        }
        if controls.down {
            self.y += PADDLE_SPEED;
        }
    }

    /// One frame of dead-zone AI tracking toward a target top edge.
    /// Moves at `AI_SPEED`, slower than a player, and holds inside the
    /// dead zone - imperfect on purpose.
    pub fn track(&mut self, target: f32) {
        if self.y + AI_DEADZONE < target {
            self.y += AI_SPEED;
        }
        if self.y - AI_DEADZONE > target {
            self.y -= AI_SPEED;
        }
    }

    /// Clamp to the field for the paddle's current height
    pub fn clamp(&mut self, height: f32) {
        self.y = self.y.clamp(0.0, FIELD_H - height);
    }
}

/// The ball, stored as the top-left corner of its bounding square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Ball at field center with the given velocity
    pub fn centered(dx: f32, dy: f32) -> Self {
        Self {
            pos: Vec2::new(FIELD_W / 2.0, FIELD_H / 2.0),
            vel: Vec2::new(dx, dy),
        }
    }

    /// Center of the ball square
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(BALL_SIZE / 2.0)
    }
}

/// Powerup token types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerupKind {
    BigPaddle,
    FastBall,
}

impl PowerupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerupKind::BigPaddle => "big-paddle",
            PowerupKind::FastBall => "fast-ball",
        }
    }
}

/// A live powerup token on the field. At most one exists at a time; the
/// token itself has no timer - only the effect it grants does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Powerup {
    pub pos: Vec2,
    pub kind: PowerupKind,
}

/// Active timed effects, stored as absolute expiry timestamps on the
/// simulation clock. Checked and cleared at the top of each frame step
/// (pull model), so there are no deferred callbacks to cancel and a round
/// reset can never be resurrected by a stale timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Effects {
    pub big_left_until_ms: Option<f64>,
    pub big_right_until_ms: Option<f64>,
    pub fast_ball_until_ms: Option<f64>,
}

impl Effects {
    pub fn big_paddle(&self, side: Side) -> bool {
        match side {
            Side::Left => self.big_left_until_ms.is_some(),
            Side::Right => self.big_right_until_ms.is_some(),
        }
    }

    pub fn fast_ball(&self) -> bool {
        self.fast_ball_until_ms.is_some()
    }

    /// Drop every effect whose expiry has passed
    pub fn expire(&mut self, now_ms: f64) {
        for slot in [
            &mut self.big_left_until_ms,
            &mut self.big_right_until_ms,
            &mut self.fast_ball_until_ms,
        ] {
            if slot.is_some_and(|until| now_ms >= until) {
                *slot = None;
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Match score, monotonically increasing within a match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn of(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn add(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Events triggered during one frame, for the audio and persistence
/// collaborators to consume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallHit,
    /// Ball bounced off a paddle
    PaddleHit(Side),
    /// Powerup token consumed; `receiver` is the side the ball was moving
    /// toward, reported here so nobody re-derives it from mutable ball state
    PowerupHit { kind: PowerupKind, receiver: Side },
    /// A side scored
    Goal { scorer: Side },
    /// The scoring side's total beat the stored high score
    NewHighScore(u32),
    /// A side reached the win threshold
    MatchOver { winner: Side },
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed for reproducibility
    pub seed: u64,
    pub mode: Mode,
    pub phase: GamePhase,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    /// At most one live token
    pub powerup: Option<Powerup>,
    pub effects: Effects,
    pub score: Score,
    /// Best single-side score seen; loaded from storage by the host
    pub high_score: u32,
    /// Simulation wall clock in milliseconds, advanced by host-supplied dt
    pub clock_ms: f64,
    /// Seeded RNG, serialized with the state so a resumed snapshot replays
    /// identically
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Fresh state in the menu phase
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            mode: Mode::Single,
            phase: GamePhase::Menu,
            left: Paddle::centered(),
            right: Paddle::centered(),
            ball: Ball::centered(-BALL_SPEED, BALL_SPEED),
            powerup: None,
            effects: Effects::default(),
            score: Score::default(),
            high_score: 0,
            clock_ms: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start a match in the given mode. Valid from `Menu` and `GameOver`;
    /// restarting mid-match abandons the old score.
    pub fn start_match(&mut self, mode: Mode) {
        self.mode = mode;
        self.score = Score::default();
        self.clock_ms = 0.0;
        // Single-player serves at the human first
        let serve_toward = match mode {
            Mode::Single => Side::Left,
            Mode::Multi => Side::Right,
        };
        self.reset_round(serve_toward);
        self.phase = GamePhase::Playing;
        log::info!("match started ({mode:?})");
    }

    /// Abandon the current match and return to the menu. Score and
    /// transient state are dropped, not paused.
    pub fn return_to_menu(&mut self) {
        self.phase = GamePhase::Menu;
        log::info!("returned to menu");
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Current height of a side's paddle, honoring the enlarged effect
    pub fn paddle_height(&self, side: Side) -> f32 {
        if self.effects.big_paddle(side) {
            PADDLE_HEIGHT * ENLARGE_FACTOR
        } else {
            PADDLE_HEIGHT
        }
    }

    /// Reset transient round state: paddles centered, effects and powerup
    /// cleared, ball served toward `serve_toward` with a random vertical
    /// direction. Score is untouched.
    pub(crate) fn reset_round(&mut self, serve_toward: Side) {
        self.left = Paddle::centered();
        self.right = Paddle::centered();
        self.effects.clear();
        self.powerup = None;
        let dx = match serve_toward {
            Side::Left => -BALL_SPEED,
            Side::Right => BALL_SPEED,
        };
        let dy = if self.rng.random::<bool>() {
            BALL_SPEED
        } else {
            -BALL_SPEED
        };
        self.ball = Ball::centered(dx, dy);
    }

    /// Grant a consumed token's effect. Re-triggering an active effect
    /// restarts its timer; effects never stack.
    pub(crate) fn apply_powerup(&mut self, kind: PowerupKind, receiver: Side) {
        match kind {
            PowerupKind::BigPaddle => {
                let until = self.clock_ms + BIG_PADDLE_DURATION_MS;
                match receiver {
                    Side::Left => self.effects.big_left_until_ms = Some(until),
                    Side::Right => self.effects.big_right_until_ms = Some(until),
                }
                // The taller paddle may now poke past the bottom edge
                let height = self.paddle_height(receiver);
                self.paddle_mut(receiver).clamp(height);
            }
            PowerupKind::FastBall => {
                self.effects.fast_ball_until_ms = Some(self.clock_ms + FAST_BALL_DURATION_MS);
            }
        }
        log::debug!("powerup {} -> {receiver:?}", kind.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_in_menu() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, Score::default());
        assert!(state.powerup.is_none());
    }

    #[test]
    fn start_match_resets_score_and_serves_by_mode() {
        let mut state = GameState::new(1);
        state.score = Score { left: 3, right: 5 };

        state.start_match(Mode::Single);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, Score::default());
        assert_eq!(state.ball.vel.x, -BALL_SPEED);

        state.start_match(Mode::Multi);
        assert_eq!(state.ball.vel.x, BALL_SPEED);
        assert_eq!(state.ball.vel.y.abs(), BALL_SPEED);
    }

    #[test]
    fn reset_round_clears_transient_state_but_not_score() {
        let mut state = GameState::new(7);
        state.start_match(Mode::Multi);
        state.score = Score { left: 2, right: 1 };
        state.powerup = Some(Powerup {
            pos: glam::Vec2::new(100.0, 100.0),
            kind: PowerupKind::FastBall,
        });
        state.effects.fast_ball_until_ms = Some(9000.0);
        state.left.y = 10.0;

        state.reset_round(Side::Right);
        assert!(state.powerup.is_none());
        assert_eq!(state.effects, Effects::default());
        assert_eq!(state.left, Paddle::centered());
        assert_eq!(state.score, Score { left: 2, right: 1 });
        assert_eq!(state.ball.vel.x, BALL_SPEED);
    }

    #[test]
    fn effects_expire_on_the_pull_model() {
        let mut effects = Effects::default();
        effects.big_left_until_ms = Some(6000.0);
        effects.fast_ball_until_ms = Some(5000.0);

        effects.expire(4999.0);
        assert!(effects.big_paddle(Side::Left));
        assert!(effects.fast_ball());

        effects.expire(5000.0);
        assert!(!effects.fast_ball());
        assert!(effects.big_paddle(Side::Left));

        effects.expire(6000.0);
        assert_eq!(effects, Effects::default());
    }

    #[test]
    fn apply_powerup_restarts_timer_instead_of_stacking() {
        let mut state = GameState::new(3);
        state.start_match(Mode::Multi);
        state.clock_ms = 1000.0;
        state.apply_powerup(PowerupKind::FastBall, Side::Left);
        assert_eq!(
            state.effects.fast_ball_until_ms,
            Some(1000.0 + crate::consts::FAST_BALL_DURATION_MS)
        );

        state.clock_ms = 2000.0;
        state.apply_powerup(PowerupKind::FastBall, Side::Left);
        assert_eq!(
            state.effects.fast_ball_until_ms,
            Some(2000.0 + crate::consts::FAST_BALL_DURATION_MS)
        );
    }

    #[test]
    fn enlarging_a_bottom_hugging_paddle_keeps_it_in_bounds() {
        let mut state = GameState::new(3);
        state.start_match(Mode::Multi);
        state.right.y = FIELD_H - PADDLE_HEIGHT;

        state.apply_powerup(PowerupKind::BigPaddle, Side::Right);
        let height = state.paddle_height(Side::Right);
        assert!(state.right.y >= 0.0);
        assert!(state.right.y <= FIELD_H - height);
    }

    #[test]
    fn paddle_step_cancels_when_both_directions_held() {
        use crate::sim::input::Controls;
        let mut paddle = Paddle::centered();
        let before = paddle.y;
        paddle.step(Controls {
            up: true,
            down: true,
        });
        assert_eq!(paddle.y, before);
    }

    #[test]
    fn state_serde_round_trip_replays_identically() {
        let state = GameState::new(42);
        let json = serde_json::to_string(&state).expect("serialize");
        let restored: GameState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(
            serde_json::to_string(&restored).expect("serialize"),
            json
        );
    }
}

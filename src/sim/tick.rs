//! Per-frame simulation step
//!
//! Advances the game by exactly one display frame. Paddle motion and ball
//! velocity are per-frame quantities (one tick = one frame); `dt_ms` only
//! advances the wall-clock used by the timed effects, which keeps effect
//! durations frame-rate independent.
//!
//! Collision responses apply in a fixed order - walls, left paddle, right
//! paddle, powerup, goals - matching single-threaded evaluation so frames
//! with multiple eligible collisions stay deterministic.

use rand::Rng;

use super::collision::{ball_hits_paddle, ball_rect, paddle_rect, powerup_rect};
use super::input::TickInput;
use super::state::{GameEvent, GamePhase, GameState, Mode, Powerup, PowerupKind, Side};
use crate::consts::*;

/// Advance the simulation by one frame.
///
/// Returns the events the frame triggered, for the audio and persistence
/// collaborators. Outside the `Playing` phase this is a no-op: menu and
/// game-over frames never mutate state.
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Playing {
        return events;
    }

    // Advance the effect clock and drop whatever ran out. Pull model: no
    // deferred callbacks exist, so a round reset can never be undone by a
    // stale timer and teardown has nothing to cancel.
    state.clock_ms += dt_ms;
    state.effects.expire(state.clock_ms);

    // Player paddles: fixed step per held direction, then clamp
    state.left.step(input.left);
    if state.mode == Mode::Multi {
        state.right.step(input.right);
    }
    state.left.clamp(state.paddle_height(Side::Left));
    state.right.clamp(state.paddle_height(Side::Right));

    // AI drives the right paddle when nobody else does
    if state.mode == Mode::Single {
        let height = state.paddle_height(Side::Right);
        let target = state.ball.pos.y + BALL_SIZE / 2.0 - height / 2.0;
        state.right.track(target);
        state.right.clamp(height);
    }

    // Integrate the ball
    state.ball.pos += state.ball.vel;

    // Top/bottom walls: clamp to the boundary and invert
    if state.ball.pos.y < 0.0 {
        state.ball.pos.y = 0.0;
        state.ball.vel.y = -state.ball.vel.y;
        events.push(GameEvent::WallHit);
    }
    if state.ball.pos.y + BALL_SIZE > FIELD_H {
        state.ball.pos.y = FIELD_H - BALL_SIZE;
        state.ball.vel.y = -state.ball.vel.y;
        events.push(GameEvent::WallHit);
    }

    // Paddles, left before right
    for side in [Side::Left, Side::Right] {
        let rect = paddle_rect(side, state.paddle(side).y, state.paddle_height(side));
        if ball_hits_paddle(&state.ball, &rect, side) {
            // Flush against the paddle face, reverse and amplify, then
            // deflect by the center offset (spin)
            state.ball.pos.x = match side {
                Side::Left => rect.x + rect.w,
                Side::Right => rect.x - BALL_SIZE,
            };
            state.ball.vel.x = -state.ball.vel.x * PADDLE_HIT_SPEEDUP;
            let offset = state.ball.pos.y + BALL_SIZE / 2.0 - (rect.y + rect.h / 2.0);
            state.ball.vel.y += offset * SPIN_FACTOR;
            events.push(GameEvent::PaddleHit(side));
        }
    }

    // Powerup token
    if let Some(token) = state.powerup {
        if ball_rect(state.ball.pos).overlaps(&powerup_rect(token.pos)) {
            // The side the ball is moving toward receives the effect;
            // decided here and carried on the event so nothing downstream
            // re-derives it from ball state that may have changed
            let receiver = if state.ball.vel.x < 0.0 {
                Side::Left
            } else {
                Side::Right
            };
            state.apply_powerup(token.kind, receiver);
            state.powerup = None;
            events.push(GameEvent::PowerupHit {
                kind: token.kind,
                receiver,
            });
        }
    }

    // Goals: the ball must leave the field by more than its own diameter.
    // A goal ends the frame - no speedups or spawns on a dead ball.
    if state.ball.pos.x < -BALL_SIZE {
        goal(state, Side::Right, &mut events);
        return events;
    }
    if state.ball.pos.x > FIELD_W + BALL_SIZE {
        goal(state, Side::Left, &mut events);
        return events;
    }

    // Fast-ball compounds after all collision responses
    if state.effects.fast_ball() {
        state.ball.vel *= FAST_BALL_ACCEL;
    }

    // Powerup generation: small per-frame roll while no token is live
    if state.powerup.is_none() && state.rng.random_bool(POWERUP_SPAWN_CHANCE) {
        let token = random_powerup(state);
        log::debug!(
            "powerup {} spawned at ({:.0}, {:.0})",
            token.kind.as_str(),
            token.pos.x,
            token.pos.y
        );
        state.powerup = Some(token);
    }

    events
}

/// Score a goal for `scorer`: bump the score, report a beaten high score,
/// then either reset the round (serving toward the scorer) or end the match.
fn goal(state: &mut GameState, scorer: Side, events: &mut Vec<GameEvent>) {
    state.score.add(scorer);
    events.push(GameEvent::Goal { scorer });

    let total = state.score.of(scorer);
    if total > state.high_score {
        state.high_score = total;
        events.push(GameEvent::NewHighScore(total));
    }

    if total >= WIN_SCORE {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::MatchOver { winner: scorer });
        log::info!(
            "match over: {scorer:?} wins {} - {}",
            state.score.left,
            state.score.right
        );
    } else {
        state.reset_round(scorer);
    }
}

/// A fresh token of uniformly random kind at a uniformly random position
/// inside the margin-inset spawn area.
fn random_powerup(state: &mut GameState) -> Powerup {
    let kind = if state.rng.random::<bool>() {
        PowerupKind::BigPaddle
    } else {
        PowerupKind::FastBall
    };
    let x = state.rng.random_range(0.0..FIELD_W - 2.0 * POWERUP_MARGIN) + POWERUP_MARGIN;
    let y = state.rng.random_range(0.0..FIELD_H - 2.0 * POWERUP_MARGIN) + POWERUP_MARGIN;
    Powerup {
        pos: glam::Vec2::new(x, y),
        kind,
    }
}

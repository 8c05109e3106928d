//! Axis-aligned collision helpers
//!
//! Everything on the field is a rectangle (the ball is drawn round but
//! collides as its bounding square), so this is plain AABB overlap math
//! plus the approach-direction gate that keeps a separating ball from
//! bouncing off the same paddle twice.

use glam::Vec2;

use super::state::{Ball, Side};
use crate::consts::*;

/// An axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict overlap: rectangles that merely touch do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// A side's paddle rectangle for its current top edge and height
pub fn paddle_rect(side: Side, top: f32, height: f32) -> Rect {
    let x = match side {
        Side::Left => 0.0,
        Side::Right => FIELD_W - PADDLE_WIDTH,
    };
    Rect::new(x, top, PADDLE_WIDTH, height)
}

/// The ball's bounding square
pub fn ball_rect(pos: Vec2) -> Rect {
    Rect::new(pos.x, pos.y, BALL_SIZE, BALL_SIZE)
}

/// A powerup token's bounding square
pub fn powerup_rect(pos: Vec2) -> Rect {
    Rect::new(pos.x, pos.y, POWERUP_SIZE, POWERUP_SIZE)
}

/// Paddle hit test: the ball's leading edge must overlap the paddle AND
/// the ball must be moving toward it. The velocity gate is what prevents
/// re-triggering on the frame after a bounce, while the ball is still
/// inside the paddle's x-range but already separating.
pub fn ball_hits_paddle(ball: &Ball, paddle: &Rect, side: Side) -> bool {
    let vertical_overlap =
        ball.pos.y + BALL_SIZE > paddle.y && ball.pos.y < paddle.y + paddle.h;
    match side {
        Side::Left => ball.vel.x < 0.0 && ball.pos.x < paddle.x + paddle.w && vertical_overlap,
        Side::Right => ball.vel.x > 0.0 && ball.pos.x + BALL_SIZE > paddle.x && vertical_overlap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_strict() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 10.0, 10.0);
        let apart = Rect::new(20.0, 20.0, 4.0, 4.0);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&touching));
        assert!(!a.overlaps(&apart));
    }

    #[test]
    fn paddle_rects_sit_on_their_walls() {
        let left = paddle_rect(Side::Left, 100.0, PADDLE_HEIGHT);
        assert_eq!(left.x, 0.0);
        assert_eq!(left.w, PADDLE_WIDTH);

        let right = paddle_rect(Side::Right, 100.0, PADDLE_HEIGHT);
        assert_eq!(right.x + right.w, FIELD_W);
    }

    #[test]
    fn approaching_ball_hits_left_paddle() {
        let paddle = paddle_rect(Side::Left, 160.0, PADDLE_HEIGHT);
        let ball = Ball {
            pos: Vec2::new(6.0, 200.0),
            vel: Vec2::new(-6.0, 0.0),
        };
        assert!(ball_hits_paddle(&ball, &paddle, Side::Left));
    }

    #[test]
    fn separating_ball_does_not_retrigger() {
        let paddle = paddle_rect(Side::Left, 160.0, PADDLE_HEIGHT);
        // Same overlap, but already moving away after a bounce
        let ball = Ball {
            pos: Vec2::new(6.0, 200.0),
            vel: Vec2::new(6.24, 0.0),
        };
        assert!(!ball_hits_paddle(&ball, &paddle, Side::Left));
    }

    #[test]
    fn vertical_miss_is_a_miss() {
        let paddle = paddle_rect(Side::Right, 0.0, PADDLE_HEIGHT);
        let ball = Ball {
            pos: Vec2::new(FIELD_W - PADDLE_WIDTH - 2.0, 300.0),
            vel: Vec2::new(6.0, 0.0),
        };
        assert!(!ball_hits_paddle(&ball, &paddle, Side::Right));
    }

    #[test]
    fn enlarged_paddle_catches_a_wider_span() {
        let base = paddle_rect(Side::Right, 160.0, PADDLE_HEIGHT);
        let big = paddle_rect(Side::Right, 160.0, PADDLE_HEIGHT * ENLARGE_FACTOR);
        let ball = Ball {
            pos: Vec2::new(FIELD_W - PADDLE_WIDTH, 250.0),
            vel: Vec2::new(6.0, 0.0),
        };
        assert!(!ball_hits_paddle(&ball, &base, Side::Right));
        assert!(ball_hits_paddle(&ball, &big, Side::Right));
    }
}

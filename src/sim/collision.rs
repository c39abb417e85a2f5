//! Collision detection and response
//!
//! Axis-aligned tests only: the ball's square bounding box against the
//! arena walls and the paddle faces. Each resolver snaps the ball out of
//! the surface before adjusting velocity so one tick fully separates them.

use crate::consts::*;
use crate::sim::state::{Ball, Paddle};

/// Vertical overlap between the ball's box and a paddle's box
fn overlaps_vertically(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y + BALL_SIZE > paddle.y && ball.pos.y < paddle.y + PADDLE_HEIGHT
}

/// Vertical speed imparted by a paddle strike
///
/// Proportional to how far from the paddle center the ball struck,
/// reaching `ENGLISH_MAX` at the paddle tip. The offset is clamped so a
/// corner graze cannot exceed the tip value. A dead-center strike returns
/// exactly zero.
pub fn paddle_english(ball: &Ball, paddle: &Paddle) -> f32 {
    let offset = (ball.center().y - paddle.center_y()) / (PADDLE_HEIGHT / 2.0);
    offset.clamp(-1.0, 1.0) * ENGLISH_MAX
}

/// Bounce the ball off the top and bottom walls
///
/// Snaps to the crossed boundary and inverts the vertical velocity.
/// Horizontal velocity and speed magnitude are untouched.
pub fn collide_walls(ball: &mut Ball) -> bool {
    if ball.pos.y < 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y;
        true
    } else if ball.pos.y + BALL_SIZE > ARENA_HEIGHT {
        ball.pos.y = ARENA_HEIGHT - BALL_SIZE;
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Resolve a strike on the player (left) paddle
///
/// The horizontal test restricts the ball's left edge to the paddle band,
/// so a ball that has already slipped behind the paddle is not caught. On
/// hit: snap the ball to the paddle face, reverse and boost the horizontal
/// velocity, and overwrite the vertical velocity with strike english.
pub fn collide_player(ball: &mut Ball, paddle: &Paddle) -> bool {
    let in_band = ball.pos.x >= paddle.x && ball.pos.x <= paddle.x + PADDLE_WIDTH;
    if !in_band || !overlaps_vertically(ball, paddle) {
        return false;
    }
    ball.pos.x = paddle.x + PADDLE_WIDTH;
    ball.vel.x = -ball.vel.x * PADDLE_BOOST;
    ball.vel.y = paddle_english(ball, paddle);
    true
}

/// Resolve a strike on the computer (right) paddle, mirrored from the
/// player test: the ball's right edge must lie within the paddle band.
pub fn collide_computer(ball: &mut Ball, paddle: &Paddle) -> bool {
    let right = ball.pos.x + BALL_SIZE;
    let in_band = right >= paddle.x && right <= paddle.x + PADDLE_WIDTH + BALL_SIZE;
    if !in_band || !overlaps_vertically(ball, paddle) {
        return false;
    }
    ball.pos.x = paddle.x - BALL_SIZE;
    ball.vel.x = -ball.vel.x * PADDLE_BOOST;
    ball.vel.y = paddle_english(ball, paddle);
    true
}

//! Computer paddle controller
//!
//! A proportional-with-deadband tracker: compare the paddle center to the
//! ball center and chase at a fraction of full speed, holding when already
//! close. Deliberately imperfect so well-placed shots can win points.

use crate::consts::*;
use crate::sim::state::{Ball, Paddle};

/// Set the computer paddle's vertical speed for this tick
///
/// Chases the ball center at `AI_SPEED_FACTOR` of full paddle speed once it
/// drifts more than `AI_DEADBAND` units from the paddle center; inside the
/// dead zone the paddle holds still.
pub fn track_ball(paddle: &mut Paddle, ball: &Ball) {
    let paddle_center = paddle.center_y();
    let ball_center = ball.center().y;
    let chase_speed = paddle.speed * AI_SPEED_FACTOR;

    if paddle_center < ball_center - AI_DEADBAND {
        paddle.dy = chase_speed;
    } else if paddle_center > ball_center + AI_DEADBAND {
        paddle.dy = -chase_speed;
    } else {
        paddle.dy = 0.0;
    }
}

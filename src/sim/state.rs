//! Game state and core simulation types
//!
//! Everything the simulation needs between ticks lives here. State is
//! deterministic for a given seed and input sequence.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// A paddle entity. Two instances exist for the whole run: the player's
/// on the left and the computer's on the right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    /// Fixed horizontal position (left edge), set at init
    pub x: f32,
    /// Top edge, clamped to the arena every tick
    pub y: f32,
    /// Signed vertical speed applied this tick
    pub dy: f32,
    /// Maximum vertical speed magnitude
    pub speed: f32,
    /// Points scored against the opposite side
    pub score: u32,
}

impl Paddle {
    pub fn new(x: f32) -> Self {
        Self {
            x,
            y: (ARENA_HEIGHT - PADDLE_HEIGHT) / 2.0,
            dy: 0.0,
            speed: PADDLE_SPEED,
            score: 0,
        }
    }

    /// Vertical center of the paddle face
    pub fn center_y(&self) -> f32 {
        self.y + PADDLE_HEIGHT / 2.0
    }

    /// Keep the paddle fully inside the arena
    pub fn clamp_to_arena(&mut self) {
        self.y = self.y.clamp(0.0, ARENA_HEIGHT - PADDLE_HEIGHT);
    }
}

/// The ball. `pos` is the top-left corner of its bounding box; `vel` is the
/// displacement applied per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Center of the ball's bounding box
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(BALL_SIZE / 2.0)
    }
}

/// Complete game state (deterministic for a given seed)
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG, drawn from only on ball resets
    pub rng: Pcg32,
    /// Left paddle, human-controlled
    pub player: Paddle,
    /// Right paddle, AI-controlled
    pub computer: Paddle,
    pub ball: Ball,
}

impl GameState {
    /// Create a new game state with the given seed. The opening serve goes
    /// to a random side.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let mut state = Self {
            seed,
            rng,
            player: Paddle::new(PLAYER_X),
            computer: Paddle::new(COMPUTER_X),
            ball: Ball {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
            },
        };
        state.reset_ball(direction);
        state
    }

    /// Recenter the ball and serve it toward `direction` (+1.0 is the
    /// computer's side). Vertical serve speed is drawn fresh each time;
    /// scores are untouched.
    pub fn reset_ball(&mut self, direction: f32) {
        self.ball.pos = Vec2::new(
            (ARENA_WIDTH - BALL_SIZE) / 2.0,
            (ARENA_HEIGHT - BALL_SIZE) / 2.0,
        );
        self.ball.vel = Vec2::new(
            SERVE_SPEED_X * direction,
            SERVE_SPEED_Y * self.rng.random_range(-1.0..=1.0f32),
        );
    }
}

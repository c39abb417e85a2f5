//! Rally Pong - a classic two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, scoring)
//! - `renderer`: WebGPU rendering pipeline

pub mod renderer;
pub mod sim;

pub use sim::{GameState, TickEvents, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz; all speeds are per-tick displacements)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    /// Paddle defaults - mirrored columns inset from the side walls
    pub const PADDLE_WIDTH: f32 = 16.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0;
    /// Vertical paddle speed under key control (units per tick)
    pub const PADDLE_SPEED: f32 = 6.0;

    /// Fixed horizontal paddle positions (left edge)
    pub const PLAYER_X: f32 = PADDLE_MARGIN;
    pub const COMPUTER_X: f32 = ARENA_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 18.0;
    /// Horizontal serve speed (sign picks the serve direction)
    pub const SERVE_SPEED_X: f32 = 5.0;
    /// Max vertical serve speed (actual value is uniform in [-1, 1] times this)
    pub const SERVE_SPEED_Y: f32 = 4.0;

    /// Computer controller: hold while the ball center is within this
    /// distance of the paddle center
    pub const AI_DEADBAND: f32 = 12.0;
    /// Computer tracking speed as a fraction of full paddle speed
    pub const AI_SPEED_FACTOR: f32 = 0.85;

    /// Max vertical speed imparted by a paddle strike
    pub const ENGLISH_MAX: f32 = 6.0;
    /// Speed boost when ball hits paddle (multiplicative)
    pub const PADDLE_BOOST: f32 = 1.04;
}

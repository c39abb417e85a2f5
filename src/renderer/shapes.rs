//! Shape generation for 2D primitives
//!
//! Free functions emitting triangle lists in arena coordinates, plus the
//! `scene` assembler that turns a game state into one frame's vertices.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::GameState;

/// Segments for the ball circle
const BALL_SEGMENTS: u32 = 24;
/// Center divider dash layout
const DIVIDER_STEP: f32 = 24.0;
const DIVIDER_WIDTH: f32 = 4.0;
const DIVIDER_HEIGHT: f32 = 14.0;

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let top_right = pos + Vec2::new(size.x, 0.0);
    let bottom_left = pos + Vec2::new(0.0, size.y);
    let bottom_right = pos + size;

    vec![
        Vertex::new(pos, color),
        Vertex::new(top_right, color),
        Vertex::new(bottom_left, color),
        Vertex::new(bottom_left, color),
        Vertex::new(top_right, color),
        Vertex::new(bottom_right, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle fan from the center
        vertices.push(Vertex::new(center, color));
        vertices.push(Vertex::new(center + radius * Vec2::from_angle(theta1), color));
        vertices.push(Vertex::new(center + radius * Vec2::from_angle(theta2), color));
    }

    vertices
}

/// Dashed vertical line splitting the two courts
pub fn center_divider() -> Vec<Vertex> {
    let x = ARENA_WIDTH / 2.0 - DIVIDER_WIDTH / 2.0;
    let mut vertices = Vec::new();
    let mut y = 0.0;
    while y < ARENA_HEIGHT {
        vertices.extend(rect(
            Vec2::new(x, y),
            Vec2::new(DIVIDER_WIDTH, DIVIDER_HEIGHT),
            colors::DIVIDER,
        ));
        y += DIVIDER_STEP;
    }
    vertices
}

/// Assemble the full frame: divider, both paddles, the ball
pub fn scene(state: &GameState) -> Vec<Vertex> {
    let paddle_size = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);

    let mut vertices = center_divider();
    vertices.extend(rect(
        Vec2::new(state.player.x, state.player.y),
        paddle_size,
        colors::PLAYER,
    ));
    vertices.extend(rect(
        Vec2::new(state.computer.x, state.computer.y),
        paddle_size,
        colors::COMPUTER,
    ));
    vertices.extend(circle(
        state.ball.center(),
        BALL_SIZE / 2.0,
        colors::BALL,
        BALL_SEGMENTS,
    ));
    vertices
}

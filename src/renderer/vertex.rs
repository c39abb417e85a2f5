//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Simple 2D vertex with position and color
///
/// Positions are in arena coordinates; the vertex shader maps them to
/// clip space.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(pos: Vec2, color: [f32; 4]) -> Self {
        Self {
            position: pos.to_array(),
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements (CSS hex values noted for reference)
pub mod colors {
    /// Player paddle, #0ff
    pub const PLAYER: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
    /// Computer paddle, #f80
    pub const COMPUTER: [f32; 4] = [1.0, 0.533, 0.0, 1.0];
    /// Ball, #fff
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Center divider dashes, #444
    pub const DIVIDER: [f32; 4] = [0.267, 0.267, 0.267, 1.0];
    /// Arena background, #000
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}

//! WebGPU rendering module
//!
//! One triangle-list pipeline: shapes are emitted as colored vertices in
//! arena coordinates and mapped to clip space in the vertex shader.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;

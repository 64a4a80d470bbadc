//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
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

/// Colors for game elements
pub mod colors {
    /// Lava paddle (left)
    pub const PADDLE_LEFT: [f32; 4] = [1.0, 0.27, 0.0, 1.0];
    /// Ice paddle (right)
    pub const PADDLE_RIGHT: [f32; 4] = [0.0, 0.75, 1.0, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Obstacles take a washed-out tint of the side they sit toward
    pub const OBSTACLE_LEFT: [f32; 4] = [1.0, 0.27, 0.0, 0.5];
    pub const OBSTACLE_RIGHT: [f32; 4] = [0.0, 0.75, 1.0, 0.5];
    pub const CENTER_LINE: [f32; 4] = [1.0, 1.0, 1.0, 0.2];
    pub const BACK_BUTTON: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
    pub const STAR: [f32; 4] = [1.0, 1.0, 1.0, 0.5];
    pub const STAR_LAVA: [f32; 4] = [1.0, 0.65, 0.0, 0.5];
    pub const STAR_ICE: [f32; 4] = [0.53, 0.81, 0.92, 0.5];
    pub const RAIN: [f32; 4] = [0.6, 0.75, 0.9, 0.35];
}

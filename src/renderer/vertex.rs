//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
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

/// 8-bit RGB to linear-ish float color
pub const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colors for game elements
pub mod colors {
    use super::rgb;

    pub const BACKGROUND: [f32; 4] = rgb(16, 42, 90);
    pub const BASKET: [f32; 4] = rgb(255, 122, 24);
    pub const BASKET_TEXT: [f32; 4] = rgb(255, 255, 255);
    pub const BALL_LABEL: [f32; 4] = rgb(11, 27, 58);

    pub const NORMAL_FILL: [f32; 4] = rgb(253, 224, 71);
    pub const NORMAL_STROKE: [f32; 4] = rgb(245, 158, 11);
    pub const MULTIPLIER_FILL: [f32; 4] = rgb(74, 222, 128);
    pub const MULTIPLIER_STROKE: [f32; 4] = rgb(22, 163, 74);
    pub const NEGATIVE_FILL: [f32; 4] = rgb(248, 113, 113);
    pub const NEGATIVE_STROKE: [f32; 4] = rgb(220, 38, 38);

    pub const PAUSE_DIM: [f32; 4] = [0.0, 0.0, 0.0, 0.35];
}

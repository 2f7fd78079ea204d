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

/// Colors for game elements, 0xRRGGBB
pub mod colors {
    pub const SKY_TOP: u32 = 0x1a1a2e;
    pub const SKY_BOTTOM: u32 = 0x16213e;
    pub const MOUNTAIN: u32 = 0x0f3460;
    pub const STAR: u32 = 0xffffff;
    pub const PLATFORM_TOP: u32 = 0x3aa88a;
    pub const COIN: u32 = 0xffd700;
    pub const COIN_SHINE: u32 = 0xfff9c4;
    pub const CUBE: u32 = 0xff6b8b;
    pub const CUBE_INNER: u32 = 0xff8fab;
    pub const EYE: u32 = 0x000000;
    pub const OVERLAY: u32 = 0x000000;
    pub const OVERLAY_ALPHA: f32 = 0.7;
    pub const LOST_TITLE: u32 = 0xff6b8b;
    pub const WON_TITLE: u32 = 0x4ecca3;
    pub const OVERLAY_TEXT: u32 = 0xe6e6e6;

    /// Opaque RGBA from 0xRRGGBB
    pub fn rgb(hex: u32) -> [f32; 4] {
        rgba(hex, 1.0)
    }

    /// RGBA from 0xRRGGBB and an alpha
    pub fn rgba(hex: u32, alpha: f32) -> [f32; 4] {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        [channel(16), channel(8), channel(0), alpha]
    }

    /// CSS `#rrggbb` form (for DOM text)
    pub fn css(hex: u32) -> String {
        format!("#{:06x}", hex & 0xff_ffff)
    }
}

//! Vertex types and palettes for 2D rendering

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

/// Colors for game elements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub sky_top: [f32; 4],
    pub sky_bottom: [f32; 4],
    pub ground: [f32; 4],
    pub hatch: [f32; 4],
    pub player: [f32; 4],
    pub face: [f32; 4],
    pub smile: [f32; 4],
    pub obstacle: [f32; 4],
    pub overlay: [f32; 4],
    pub overlay_border: [f32; 4],
}

impl Palette {
    /// Soft lilac theme
    pub const LILAC: Palette = Palette {
        sky_top: rgb(0xf9, 0xf6, 0xff),
        sky_bottom: rgb(0xf0, 0xec, 0xff),
        ground: rgb(0xe4, 0xdc, 0xff),
        hatch: rgba(180, 160, 255, 0.6),
        player: rgb(0x6e, 0x55, 0xe4),
        face: [0.0, 0.0, 0.0, 0.22],
        smile: [0.0, 0.0, 0.0, 0.28],
        obstacle: rgb(0xc4, 0xa4, 0xff),
        overlay: [1.0, 1.0, 1.0, 0.8],
        overlay_border: rgba(180, 160, 255, 0.9),
    };

    /// Dark background, saturated entities
    pub const HIGH_CONTRAST: Palette = Palette {
        sky_top: rgb(0x10, 0x0c, 0x1c),
        sky_bottom: rgb(0x10, 0x0c, 0x1c),
        ground: rgb(0xff, 0xff, 0xff),
        hatch: rgba(255, 255, 255, 0.8),
        player: rgb(0xff, 0xd2, 0x3f),
        face: [0.0, 0.0, 0.0, 0.8],
        smile: [0.0, 0.0, 0.0, 0.8],
        obstacle: rgb(0xff, 0x4f, 0xd8),
        overlay: [0.0, 0.0, 0.0, 0.85],
        overlay_border: rgb(0xff, 0xff, 0xff),
    };

    pub fn for_contrast(high_contrast: bool) -> Self {
        if high_contrast {
            Self::HIGH_CONTRAST
        } else {
            Self::LILAC
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::LILAC
    }
}

const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    rgba(r, g, b, 1.0)
}

const fn rgba(r: u8, g: u8, b: u8, a: f32) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a]
}

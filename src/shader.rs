use bytemuck::{Pod, Zeroable};

pub const CANVAS_SHADER_SOURCE: &str = include_str!("gpu/canvas.wgsl");

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    /// Surface size in pixels.
    pub resolution: [f32; 2],
    pub _padding: [f32; 2],
}

impl Uniforms {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            resolution: [width.max(1.0), height.max(1.0)],
            _padding: [0.0; 2],
        }
    }
}

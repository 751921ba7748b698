//! CPU tessellation of circles and segments into a triangle batch.
//!
//! [`Canvas`] implements [`DrawSurface`] by appending triangles in pixel
//! space; the GPU backend uploads [`Canvas::vertices`] once per frame and
//! draws them with a single call.

use std::f32::consts::TAU;

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::particle::Rgba;
use crate::surface::DrawSurface;

/// Segments used to approximate a circle.
const CIRCLE_SEGMENTS: usize = 16;

/// Strokes thinner than this are widened and faded to keep coverage.
const MIN_STROKE_WIDTH: f32 = 1.0;

/// One vertex of the triangle batch.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in surface pixels, origin top-left.
    pub position: [f32; 2],
    /// Normalized RGBA, not premultiplied.
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    /// Vertex buffer layout matching the canvas shader.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// A [`DrawSurface`] that builds a triangle list.
#[derive(Clone, Debug)]
pub struct Canvas {
    size: Vec2,
    opacity: f32,
    vertices: Vec<Vertex>,
    /// Unit circle offsets, computed once.
    circle: [Vec2; CIRCLE_SEGMENTS + 1],
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        let circle = std::array::from_fn(|i| Vec2::from_angle(i as f32 * TAU / CIRCLE_SEGMENTS as f32));
        Self {
            size: Vec2::new(width, height),
            opacity: 1.0,
            vertices: Vec::new(),
            circle,
        }
    }

    /// Multiply every drawn alpha by `opacity`.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Triangles drawn since the last clear.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    fn color(&self, color: Rgba) -> [f32; 4] {
        let mut c = color.to_array();
        c[3] *= self.opacity;
        c
    }

    fn push_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
        for p in [a, b, c] {
            self.vertices.push(Vertex {
                position: p.to_array(),
                color,
            });
        }
    }
}

impl DrawSurface for Canvas {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
        self.vertices.clear();
    }

    fn clear(&mut self) {
        self.vertices.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if radius <= 0.0 {
            return;
        }
        let color = self.color(color);
        for i in 0..CIRCLE_SEGMENTS {
            let a = center + self.circle[i] * radius;
            let b = center + self.circle[i + 1] * radius;
            self.push_triangle(center, a, b, color);
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        let dir = (to - from).normalize_or_zero();
        if dir == Vec2::ZERO || width <= 0.0 {
            return;
        }

        let mut color = self.color(color);
        let width = if width < MIN_STROKE_WIDTH {
            color[3] *= width / MIN_STROKE_WIDTH;
            MIN_STROKE_WIDTH
        } else {
            width
        };

        let offset = dir.perp() * (width * 0.5);
        let (a, b) = (from + offset, from - offset);
        let (c, d) = (to + offset, to - offset);
        self.push_triangle(a, b, c, color);
        self.push_triangle(c, b, d, color);
    }
}

//! Particle state and color types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An RGBA color with 8-bit channels and a floating point alpha.
///
/// Channels mirror the CSS `rgba(r, g, b, a)` notation the effect is
/// specified in; [`Rgba::to_array`] converts to normalized floats for the GPU.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same channels, different alpha.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Normalized `[r, g, b, a]` in `0.0..=1.0`.
    pub fn to_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a.clamp(0.0, 1.0),
        ]
    }
}

/// One simulated point of the field.
///
/// Everything except `position`, the sign of `velocity` and `phase` is
/// fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Position in surface pixels.
    pub position: Vec2,
    /// Per-frame displacement. Only the sign of each component ever changes.
    pub velocity: Vec2,
    /// Circle radius in pixels.
    pub radius: f32,
    /// Fill color.
    pub color: Rgba,
    /// Angular accumulator advanced every step. Not read by the renderer.
    pub phase: f32,
}

impl Particle {
    #[inline]
    pub fn x(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.position.y
    }

    /// True when every float field is finite.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.velocity.is_finite()
            && self.radius.is_finite()
            && self.phase.is_finite()
    }
}

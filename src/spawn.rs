//! Random sampling of fresh particles.
//!
//! [`SpawnContext`] owns the random source used to seed a field and draws
//! each particle attribute independently from the ranges in [`FieldConfig`].

use std::f32::consts::TAU;

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::FieldConfig;
use crate::particle::{Particle, Rgba};

/// Random source plus helpers for sampling particles inside a surface.
#[derive(Debug)]
pub struct SpawnContext {
    rng: SmallRng,
}

impl SpawnContext {
    /// Create a context seeded from `seed`, or from OS entropy when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self { rng }
    }

    /// Random f32 in `min..max`. Returns `min` for an empty range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        if min < max {
            self.rng.gen_range(min..max)
        } else {
            min
        }
    }

    /// Random point in `[0, width) × [0, height)`.
    pub fn random_in_rect(&mut self, width: f32, height: f32) -> Vec2 {
        Vec2::new(self.random_range(0.0, width), self.random_range(0.0, height))
    }

    /// Random velocity with both components in `range`.
    pub fn random_velocity(&mut self, range: [f32; 2]) -> Vec2 {
        Vec2::new(
            self.random_range(range[0], range[1]),
            self.random_range(range[0], range[1]),
        )
    }

    /// Random opaque-channel color with every channel in `range`.
    pub fn random_color(&mut self, range: [u8; 2], alpha: f32) -> Rgba {
        let [lo, hi] = range;
        let mut channel = || if lo < hi { self.rng.gen_range(lo..hi) } else { lo };
        Rgba::new(channel(), channel(), channel(), alpha)
    }

    /// Sample one particle for a `width × height` surface.
    pub fn particle(&mut self, config: &FieldConfig, width: f32, height: f32) -> Particle {
        Particle {
            position: self.random_in_rect(width, height),
            radius: self.random_range(config.radius_range[0], config.radius_range[1]),
            color: self.random_color(config.channel_range, config.particle_alpha),
            velocity: self.random_velocity(config.speed_range),
            phase: self.random_range(0.0, TAU),
        }
    }
}

impl Default for SpawnContext {
    fn default() -> Self {
        Self::new(None)
    }
}

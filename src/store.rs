//! The authoritative particle list for the current viewport.

use glam::Vec2;

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::spawn::SpawnContext;

/// Owns every particle of the field and the random source that seeds them.
///
/// The list is only ever replaced wholesale by [`ParticleStore::initialize`];
/// its length never changes between reinitializations.
#[derive(Debug)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    bounds: Vec2,
    spawn: SpawnContext,
}

impl ParticleStore {
    /// Create an empty store. `seed` fixes the random source.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            particles: Vec::new(),
            bounds: Vec2::ZERO,
            spawn: SpawnContext::new(seed),
        }
    }

    /// Replace the whole collection with `floor(width / spacing)` fresh
    /// particles sampled inside `width × height`.
    ///
    /// A zero, negative or non-finite dimension produces an empty store.
    pub fn initialize(&mut self, config: &FieldConfig, width: f32, height: f32) {
        let count = if height.is_finite() && height > 0.0 {
            config.particle_count(width)
        } else {
            0
        };

        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(self.spawn.particle(config, width, height));
        }

        self.particles = particles;
        self.bounds = if count > 0 { Vec2::new(width, height) } else { Vec2::ZERO };
        log::debug!("Seeded {} particles for {}x{} surface", count, width, height);
    }

    /// Drop every particle.
    pub fn clear(&mut self) {
        self.particles = Vec::new();
        self.bounds = Vec2::ZERO;
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Surface size the current particles were seeded for.
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }
}

impl Default for ParticleStore {
    fn default() -> Self {
        Self::new(None)
    }
}

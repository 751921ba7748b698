//! Frame rendering: step, draw particles, draw connections.

use crate::config::FieldConfig;
use crate::connections;
use crate::step::advance;
use crate::store::ParticleStore;
use crate::surface::DrawSurface;

/// Counters for one rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub pairs_checked: usize,
    pub connections: usize,
}

/// Produce one frame of the field on `surface`.
///
/// The surface is cleared, every particle is advanced once against the
/// surface bounds and drawn, then connections are drawn from the
/// post-step positions. Each particle is mutated exactly once, so the
/// connection pass sees a consistent snapshot.
///
/// Rescheduling is the caller's job; see
/// [`AnimationSession`](crate::session::AnimationSession).
pub fn render_frame<S: DrawSurface + ?Sized>(
    store: &mut ParticleStore,
    surface: &mut S,
    config: &FieldConfig,
) -> FrameStats {
    surface.clear();

    let bounds = surface.size();
    for particle in store.particles_mut() {
        advance(particle, bounds, config.phase_step);
        surface.fill_circle(particle.position, particle.radius, particle.color);
    }

    let color = config.connection_color;
    let width = config.connection_width;
    let mut drawn = 0;
    let pairs_checked = connections::scan(store.particles(), config, |c| {
        surface.stroke_line(c.from, c.to, color.with_alpha(c.alpha), width);
        drawn += 1;
    });

    FrameStats {
        particles: store.len(),
        pairs_checked,
        connections: drawn,
    }
}

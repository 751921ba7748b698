//! Proximity connections between particles.
//!
//! Every unordered pair is checked, self-pairs included, which makes the
//! pass O(n²). Particle count is tied to surface width, so at 1500 px this
//! is 75 particles and 2,850 pairs per frame. A self-pair is at distance
//! zero and produces a zero-length segment, which draws nothing visible.

use glam::Vec2;

use crate::config::FieldConfig;
use crate::particle::Particle;

/// A segment to stroke between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub from: Vec2,
    pub to: Vec2,
    /// Euclidean distance between the endpoints.
    pub distance: f32,
    /// Stroke alpha, never negative.
    pub alpha: f32,
}

/// Stroke alpha for a pair at `distance`, or `None` when the pair is too
/// far apart to connect.
///
/// With the defaults this is `max(0, 0.2 - d / 500)` for `d < 100`.
#[inline]
pub fn connection_alpha(distance: f32, config: &FieldConfig) -> Option<f32> {
    if distance < config.connection_distance {
        Some((config.connection_alpha - distance / config.connection_falloff).max(0.0))
    } else {
        None
    }
}

/// Visit every connection among `particles`.
///
/// Pairs `(i, j)` with `i <= j` are visited in index order. Returns the
/// number of pairs checked.
pub fn scan<F>(particles: &[Particle], config: &FieldConfig, mut visit: F) -> usize
where
    F: FnMut(Connection),
{
    let mut checked = 0;
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i..] {
            checked += 1;
            let distance = a.position.distance(b.position);
            if let Some(alpha) = connection_alpha(distance, config) {
                visit(Connection {
                    from: a.position,
                    to: b.position,
                    distance,
                    alpha,
                });
            }
        }
    }
    checked
}

/// Collect every connection among `particles` into a vector.
pub fn collect(particles: &[Particle], config: &FieldConfig) -> Vec<Connection> {
    let mut connections = Vec::new();
    scan(particles, config, |c| connections.push(c));
    connections
}

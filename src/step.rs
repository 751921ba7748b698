//! One discrete time step for a single particle.
//!
//! Boundary handling is a velocity sign flip applied *after* the move. The
//! position is never clamped, so a particle may sit up to one step outside
//! the surface for a frame before the reversed velocity brings it back.

use glam::Vec2;

use crate::particle::Particle;

/// Advance `particle` by one step inside a `bounds.x × bounds.y` surface.
///
/// Moves by `velocity`, adds `phase_step` to `phase`, then reverses each
/// velocity component whose coordinate now lies outside `[0, bound]`.
#[inline]
pub fn advance(particle: &mut Particle, bounds: Vec2, phase_step: f32) {
    particle.position += particle.velocity;
    particle.phase += phase_step;

    if particle.position.x < 0.0 || particle.position.x > bounds.x {
        particle.velocity.x = -particle.velocity.x;
    }
    if particle.position.y < 0.0 || particle.position.y > bounds.y {
        particle.velocity.y = -particle.velocity.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Rgba;

    fn particle(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        Particle {
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
            radius: 2.0,
            color: Rgba::new(200, 200, 200, 0.7),
            phase: 0.0,
        }
    }

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_interior_step_is_exact() {
        let mut p = particle(100.0, 200.0, 0.3, -0.7);
        p.phase = 1.5;
        let before = p.clone();
        advance(&mut p, BOUNDS, 0.01);

        assert_eq!(p.position.x, before.position.x + before.velocity.x);
        assert_eq!(p.position.y, before.position.y + before.velocity.y);
        assert_eq!(p.phase, before.phase + 0.01);
        assert_eq!(p.velocity, before.velocity);
    }

    #[test]
    fn test_right_edge_overshoot_then_return() {
        let mut p = particle(799.5, 300.0, 0.8, 0.0);
        advance(&mut p, BOUNDS, 0.01);

        // Not clamped: one frame outside, velocity already reversed.
        assert_eq!(p.position.x, 799.5 + 0.8);
        assert!(p.position.x > 800.0);
        assert_eq!(p.velocity.x, -0.8);

        advance(&mut p, BOUNDS, 0.01);
        assert!(p.position.x <= 800.0);
        assert_eq!(p.velocity.x, -0.8);
    }

    #[test]
    fn test_left_and_top_edges() {
        let mut p = particle(0.2, 0.1, -0.5, -0.4);
        advance(&mut p, BOUNDS, 0.01);
        assert!(p.position.x < 0.0 && p.position.y < 0.0);
        assert_eq!(p.velocity, Vec2::new(0.5, 0.4));
    }

    #[test]
    fn test_axes_flip_independently() {
        let mut p = particle(400.0, 599.9, 0.5, 0.5);
        advance(&mut p, BOUNDS, 0.01);
        assert_eq!(p.velocity.x, 0.5);
        assert_eq!(p.velocity.y, -0.5);
    }

    #[test]
    fn test_edge_itself_is_inside() {
        let mut p = particle(799.0, 300.0, 1.0, 0.0);
        advance(&mut p, BOUNDS, 0.01);
        assert_eq!(p.position.x, 800.0);
        assert_eq!(p.velocity.x, 1.0);
    }

    #[test]
    fn test_stays_contained_over_many_steps() {
        let mut p = particle(10.0, 590.0, -0.93, 0.77);
        for _ in 0..100_000 {
            advance(&mut p, BOUNDS, 0.01);
            assert!(p.is_finite());
            assert!(p.position.x >= -1.0 && p.position.x <= 801.0);
            assert!(p.position.y >= -1.0 && p.position.y <= 601.0);
        }
    }
}

//! Integration tests driving a full session headlessly.
//!
//! These run the field against a [`RecordingSurface`] and a [`ManualHost`]
//! the way a window host would: mount, deliver frame callbacks, resize,
//! tear down.

use std::cell::Cell;
use std::rc::Rc;

use helix_field::connections;
use helix_field::prelude::*;
use helix_field::step::advance;

fn mounted(width: f32, height: f32, seed: u64) -> AnimationSession<RecordingSurface, ManualHost> {
    AnimationSession::mount(
        RecordingSurface::new(width, height),
        ManualHost::new(),
        FieldConfig::default().with_seed(seed),
    )
}

fn pump(session: &mut AnimationSession<RecordingSurface, ManualHost>, frames: usize) {
    for _ in 0..frames {
        let handle = session.host_mut().take_pending().expect("frame should be pending");
        session.on_frame(handle).expect("pending frame should render");
    }
}

// ============================================================================
// Initialization
// ============================================================================

#[test]
fn test_count_is_floor_of_width_over_spacing() {
    let config = FieldConfig::default();
    let mut store = ParticleStore::new(Some(1));
    for width in 0..2000u32 {
        let w = width as f32 * 1.37;
        store.initialize(&config, w, 480.0);
        assert_eq!(store.len(), (w / 20.0).floor() as usize, "width {}", w);
    }
}

#[test]
fn test_reinitialize_is_structurally_equal_but_reseeded() {
    let config = FieldConfig::default();
    let mut store = ParticleStore::new(None);

    store.initialize(&config, 800.0, 600.0);
    let first = store.particles().to_vec();
    store.initialize(&config, 800.0, 600.0);
    let second = store.particles().to_vec();

    assert_eq!(first.len(), second.len());
    assert_ne!(first, second);
    for p in first.iter().chain(second.iter()) {
        assert!((0.0..800.0).contains(&p.x()));
        assert!((0.0..600.0).contains(&p.y()));
    }
}

#[test]
fn test_zero_sized_viewport_renders_empty_frames() {
    let mut session = mounted(0.0, 0.0, 1);
    assert!(session.store().is_empty());
    pump(&mut session, 3);
    assert_eq!(session.surface().commands(), &[DrawCommand::Clear]);
    assert!(session.is_active());
}

// ============================================================================
// End-to-end 800x600 scenario
// ============================================================================

#[test]
fn test_800_by_600_scenario() {
    let config = FieldConfig::default();
    let mut store = ParticleStore::new(Some(2024));
    store.initialize(&config, 800.0, 600.0);

    assert_eq!(store.len(), 40);
    for p in store.particles() {
        assert!((0.0..800.0).contains(&p.x()));
        assert!((0.0..600.0).contains(&p.y()));
        assert!((1.0..3.0).contains(&p.radius));
        assert!((-1.0..1.0).contains(&p.velocity.x));
        assert!((-1.0..1.0).contains(&p.velocity.y));
    }

    for p in store.particles_mut() {
        p.position.x = 799.5;
        p.velocity.x = 0.8;
    }

    let mut surface = RecordingSurface::new(800.0, 600.0);
    render_frame(&mut store, &mut surface, &config);

    for p in store.particles() {
        assert!((p.x() - 800.3).abs() < 1e-3);
        assert!(p.x() > 800.0);
        assert_eq!(p.velocity.x, -0.8);
    }

    render_frame(&mut store, &mut surface, &config);
    for p in store.particles() {
        assert!((p.x() - 799.5).abs() < 1e-3);
        assert_eq!(p.velocity.x, -0.8);
    }
}

#[test]
fn test_crossing_flips_sign_for_next_call() {
    let config = FieldConfig::default();
    let mut store = ParticleStore::new(Some(8));
    store.initialize(&config, 300.0, 200.0);
    let bounds = Vec2::new(300.0, 200.0);

    for _ in 0..5_000 {
        for p in store.particles_mut() {
            let used = p.velocity;
            advance(p, bounds, config.phase_step);
            let outside_x = p.x() < 0.0 || p.x() > bounds.x;
            let outside_y = p.y() < 0.0 || p.y() > bounds.y;
            assert_eq!(p.velocity.x, if outside_x { -used.x } else { used.x });
            assert_eq!(p.velocity.y, if outside_y { -used.y } else { used.y });
        }
    }
}

// ============================================================================
// Connections
// ============================================================================

#[test]
fn test_connections_drawn_iff_within_threshold() {
    let mut session = mounted(600.0, 400.0, 77);
    pump(&mut session, 10);

    let config = session.config().clone();
    let particles = session.store().particles().to_vec();

    let mut expected = Vec::new();
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i..] {
            let d = a.position.distance(b.position);
            if d < 100.0 {
                expected.push((a.position, b.position, (0.2 - d / 500.0).max(0.0)));
            }
        }
    }

    let drawn: Vec<_> = session
        .surface()
        .lines()
        .map(|c| match c {
            DrawCommand::Line { from, to, color, width } => {
                assert_eq!(*width, config.connection_width);
                assert_eq!((color.r, color.g, color.b), (100, 150, 255));
                (*from, *to, color.a)
            }
            _ => unreachable!(),
        })
        .collect();

    assert_eq!(drawn.len(), expected.len());
    for ((from, to, alpha), (ef, et, ea)) in drawn.iter().zip(expected.iter()) {
        assert_eq!(from, ef);
        assert_eq!(to, et);
        assert!((alpha - ea).abs() < 1e-6);
        assert!(*alpha >= 0.0);
    }

    assert_eq!(connections::collect(&particles, &config).len(), expected.len());
    assert_eq!(session.last_stats().connections, expected.len());
    assert_eq!(session.last_stats().pairs_checked, particles.len() * (particles.len() + 1) / 2);
}

// ============================================================================
// Resize and lifecycle
// ============================================================================

#[test]
fn test_resize_reseeds_and_loop_continues() {
    let mut session = mounted(800.0, 600.0, 5);
    pump(&mut session, 3);
    let requests_before = session.host().request_count();

    assert!(session.on_resize(1500.0, 900.0));
    assert_eq!(session.surface().size(), Vec2::new(1500.0, 900.0));
    assert_eq!(session.store().len(), 75);
    assert_eq!(session.host().request_count(), requests_before);

    pump(&mut session, 1);
    assert_eq!(session.surface().circles().count(), 75);
    assert_eq!(session.last_stats().pairs_checked, 75 * 76 / 2);

    assert!(session.on_resize(10.0, 900.0));
    assert!(session.store().is_empty());
    pump(&mut session, 1);
    assert_eq!(session.surface().circles().count(), 0);
}

#[test]
fn test_teardown_cancels_once_and_freezes() {
    let mut session = mounted(800.0, 600.0, 6);
    pump(&mut session, 4);

    let pending = session.pending_frame().expect("loop keeps a frame pending");
    let frames = session.frame_count();
    let clears = session.surface().clear_count();

    session.teardown();
    session.teardown();

    assert_eq!(session.state(), SessionState::Stopped);
    assert!(!session.is_active());
    assert_eq!(session.host().cancel_count(), 1);
    assert_eq!(session.host().removal_count(), 1);
    assert!(!session.host().is_listening());
    assert!(session.host().pending().is_none());

    // A callback that raced the cancellation does nothing.
    assert!(session.on_frame(pending).is_none());
    assert!(!session.on_resize(1024.0, 768.0));
    assert_eq!(session.frame_count(), frames);
    assert_eq!(session.surface().clear_count(), clears);
    assert!(session.store().is_empty());
    assert_eq!(session.host().request_count(), frames);
}

/// Wraps a [`ManualHost`] and mirrors its withdrawals into counters that
/// outlive the session.
struct SharedCountHost {
    inner: ManualHost,
    cancels: Rc<Cell<u32>>,
    removals: Rc<Cell<u32>>,
}

impl FrameHost for SharedCountHost {
    fn request_frame(&mut self) -> FrameHandle {
        self.inner.request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancels.set(self.cancels.get() + 1);
        self.inner.cancel_frame(handle);
    }

    fn add_resize_listener(&mut self) -> ListenerId {
        self.inner.add_resize_listener()
    }

    fn remove_resize_listener(&mut self, id: ListenerId) {
        self.removals.set(self.removals.get() + 1);
        self.inner.remove_resize_listener(id);
    }
}

#[test]
fn test_drop_tears_down() {
    let cancels = Rc::new(Cell::new(0));
    let removals = Rc::new(Cell::new(0));
    let host = SharedCountHost {
        inner: ManualHost::new(),
        cancels: cancels.clone(),
        removals: removals.clone(),
    };

    let mut session = AnimationSession::mount(
        RecordingSurface::new(400.0, 400.0),
        host,
        FieldConfig::default().with_seed(9),
    );
    assert!(session.is_active());
    let handle = session.host_mut().inner.take_pending().expect("frame should be pending");
    session.on_frame(handle).expect("pending frame should render");
    assert_eq!((cancels.get(), removals.get()), (0, 0));

    drop(session);
    assert_eq!(cancels.get(), 1);
    assert_eq!(removals.get(), 1);
}

#[test]
fn test_drop_after_teardown_does_nothing_more() {
    let cancels = Rc::new(Cell::new(0));
    let removals = Rc::new(Cell::new(0));
    let host = SharedCountHost {
        inner: ManualHost::new(),
        cancels: cancels.clone(),
        removals: removals.clone(),
    };

    let mut session = AnimationSession::mount(
        RecordingSurface::new(400.0, 400.0),
        host,
        FieldConfig::default().with_seed(10),
    );
    session.teardown();
    drop(session);
    assert_eq!((cancels.get(), removals.get()), (1, 1));
}

#[test]
fn test_long_run_stays_finite_and_near_bounds() {
    let mut session = mounted(640.0, 360.0, 123);
    pump(&mut session, 2_000);

    for p in session.store().particles() {
        assert!(p.is_finite());
        assert!(p.x() >= -1.0 && p.x() <= 641.0);
        assert!(p.y() >= -1.0 && p.y() <= 361.0);
        assert!((1.0..3.0).contains(&p.radius));
        assert!(p.velocity.x.abs() <= 1.0 && p.velocity.y.abs() <= 1.0);
    }
}

#[test]
fn test_canvas_host_renders_same_frame() {
    let mut session = AnimationSession::mount(
        Canvas::new(400.0, 300.0),
        ManualHost::new(),
        FieldConfig::default().with_seed(31),
    );
    let stats = session.last_stats();
    assert_eq!(stats.particles, 20);
    // Every particle produces a triangle fan, every non-degenerate
    // connection a quad.
    assert!(session.surface().vertex_count() as usize >= stats.particles * 3);
    session.teardown();
}

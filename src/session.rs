//! The animation session: one owned object per mounted field.
//!
//! A session owns the particle store, the drawing surface and the host
//! handle. It is the only place frames are rescheduled and the only place
//! they are cancelled.
//!
//! ```text
//! Idle --start--> Running --resize--> Running --teardown--> Stopped
//! ```
//!
//! There is no pause and no error state. Dropping a session tears it down.

use crate::config::FieldConfig;
use crate::render::{render_frame, FrameStats};
use crate::schedule::{FrameHandle, FrameHost, ListenerId};
use crate::store::ParticleStore;
use crate::surface::DrawSurface;
use crate::time::Time;

/// Lifecycle state of an [`AnimationSession`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed, nothing scheduled yet.
    Idle,
    /// Frames are being produced and rescheduled.
    Running,
    /// Torn down. Terminal.
    Stopped,
}

/// Drives the field on a host-provided surface.
///
/// The host delivers three kinds of events:
/// - [`on_frame`](Self::on_frame) with the handle returned by
///   [`FrameHost::request_frame`],
/// - [`on_resize`](Self::on_resize) with the new viewport size,
/// - [`teardown`](Self::teardown) when the view goes away.
pub struct AnimationSession<S: DrawSurface, H: FrameHost> {
    surface: S,
    host: H,
    store: ParticleStore,
    config: FieldConfig,
    state: SessionState,
    pending: Option<FrameHandle>,
    listener: Option<ListenerId>,
    time: Time,
    last_stats: FrameStats,
}

impl<S: DrawSurface, H: FrameHost> AnimationSession<S, H> {
    /// Create an idle session. Nothing is seeded or scheduled until
    /// [`start`](Self::start).
    pub fn new(surface: S, host: H, config: FieldConfig) -> Self {
        let store = ParticleStore::new(config.seed);
        Self {
            surface,
            host,
            store,
            config,
            state: SessionState::Idle,
            pending: None,
            listener: None,
            time: Time::new(),
            last_stats: FrameStats::default(),
        }
    }

    /// Create a session and start it immediately.
    pub fn mount(surface: S, host: H, config: FieldConfig) -> Self {
        let mut session = Self::new(surface, host, config);
        session.start();
        session
    }

    /// Seed the store for the current surface size, subscribe to resizes
    /// and render the first frame, which schedules the next.
    ///
    /// Returns `false` if the session was not idle.
    pub fn start(&mut self) -> bool {
        if self.state != SessionState::Idle {
            return false;
        }

        let size = self.surface.size();
        self.store.initialize(&self.config, size.x, size.y);
        self.listener = Some(self.host.add_resize_listener());
        self.state = SessionState::Running;
        self.time.reset();
        log::info!(
            "Particle field started: {} particles on {}x{}",
            self.store.len(),
            size.x,
            size.y
        );

        self.run_frame();
        true
    }

    /// Frame callback. Renders one frame and requests the next.
    ///
    /// Callbacks for a handle that is not the pending one (stale or
    /// cancelled) and callbacks after teardown are ignored and return
    /// `None`.
    pub fn on_frame(&mut self, handle: FrameHandle) -> Option<FrameStats> {
        if !self.is_active() || self.pending != Some(handle) {
            log::trace!("Ignoring frame callback {:?}", handle);
            return None;
        }
        self.pending = None;
        Some(self.run_frame())
    }

    /// Resize notification. Resizes the surface and reseeds the store; the
    /// frame loop keeps running untouched.
    ///
    /// Returns `false` when no listener is registered (idle or torn down).
    pub fn on_resize(&mut self, width: f32, height: f32) -> bool {
        if self.listener.is_none() || !self.is_active() {
            return false;
        }

        self.surface.resize(width, height);
        let size = self.surface.size();
        self.store.initialize(&self.config, size.x, size.y);
        log::debug!(
            "Viewport resized to {}x{}, reseeded {} particles",
            size.x,
            size.y,
            self.store.len()
        );
        true
    }

    /// Cancel the pending frame, unsubscribe from resizes and drop the
    /// particles. Safe to call any number of times.
    pub fn teardown(&mut self) {
        if self.state == SessionState::Stopped {
            return;
        }

        if let Some(handle) = self.pending.take() {
            self.host.cancel_frame(handle);
        }
        if let Some(id) = self.listener.take() {
            self.host.remove_resize_listener(id);
        }
        self.store.clear();
        self.state = SessionState::Stopped;
        log::info!(
            "Particle field stopped after {} frames ({:.1}s)",
            self.time.frame(),
            self.time.elapsed()
        );
    }

    fn run_frame(&mut self) -> FrameStats {
        let stats = render_frame(&mut self.store, &mut self.surface, &self.config);
        self.last_stats = stats;

        if self.time.update() {
            log::debug!(
                "{:.1} fps, {} particles, {} pairs, {} connections",
                self.time.fps(),
                stats.particles,
                stats.pairs_checked,
                stats.connections
            );
        }

        if self.is_active() {
            self.pending = Some(self.host.request_frame());
        }
        stats
    }

    /// Whether frames are still being scheduled.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == SessionState::Running
    }

    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Handle of the frame currently awaiting its callback.
    #[inline]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Frames rendered since start.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.time.frame()
    }

    /// Counters of the most recent frame.
    #[inline]
    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<S: DrawSurface, H: FrameHost> Drop for AnimationSession<S, H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

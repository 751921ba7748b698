//! Frame timing for the animation loop.
//!
//! The simulation advances a fixed step per frame regardless of wall time,
//! so [`Time`] is only used for reporting: frame counts and a periodically
//! refreshed FPS figure for the debug log, and the run length logged at
//! teardown.
//!
//! # Example
//!
//! ```ignore
//! use helix_field::time::Time;
//!
//! let mut time = Time::new();
//!
//! // Once per frame:
//! if time.update() {
//!     log::debug!("{:.1} fps over {} frames", time.fps(), time.frame());
//! }
//! ```

use std::time::{Duration, Instant};

/// Frame counter with a rolling FPS estimate.
#[derive(Debug)]
pub struct Time {
    /// When the timer was created or last reset.
    start: Instant,
    /// Total frames since start.
    frame_count: u64,
    /// FPS over the last completed interval.
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
}

impl Time {
    /// Create a tracker starting now, refreshing FPS every 2 seconds.
    pub fn new() -> Self {
        Self::with_interval(Duration::from_secs(2))
    }

    /// Create a tracker refreshing FPS every `interval`.
    pub fn with_interval(interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: interval,
        }
    }

    /// Record a frame. Returns `true` when the FPS figure was refreshed.
    pub fn update(&mut self) -> bool {
        let now = Instant::now();
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32().max(f32::EPSILON);
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
            return true;
        }
        false
    }

    /// Seconds since start.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Frames per second over the last completed interval.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Reset the tracker to its initial state.
    pub fn reset(&mut self) {
        *self = Self::with_interval(self.fps_update_interval);
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

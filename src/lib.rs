//! # helix-field
//!
//! A decorative particle field: points drift across a resizable surface,
//! bounce off its edges, and nearby points are joined by faint lines.
//!
//! The simulation core is host-agnostic. A host supplies a [`DrawSurface`]
//! and a [`FrameHost`], and an [`AnimationSession`] does the rest. The crate
//! ships a winit + wgpu host behind [`ParticleField`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use helix_field::ParticleField;
//!
//! fn main() {
//!     ParticleField::new()
//!         .with_title("Background")
//!         .run()
//!         .unwrap();
//! }
//! ```
//!
//! ## Headless
//!
//! ```ignore
//! use helix_field::prelude::*;
//!
//! let mut session = AnimationSession::mount(
//!     RecordingSurface::new(800.0, 600.0),
//!     ManualHost::new(),
//!     FieldConfig::default(),
//! );
//! while let Some(handle) = session.host_mut().take_pending() {
//!     session.on_frame(handle);
//! #   break;
//! }
//! session.teardown();
//! ```
//!
//! ## Frame anatomy
//!
//! Every frame clears the surface, advances and draws each particle once,
//! then strokes a segment for every pair closer than
//! [`FieldConfig::connection_distance`]. Particle count is
//! `floor(width / particle_spacing)`, reseeded on every resize.

pub mod canvas;
pub mod config;
pub mod connections;
pub mod error;
mod gpu;
pub mod particle;
pub mod render;
pub mod schedule;
pub mod session;
mod shader;
mod simulation;
pub mod spawn;
pub mod step;
pub mod store;
pub mod surface;
pub mod time;
mod window;

pub use glam::Vec2;

pub use canvas::{Canvas, Vertex};
pub use config::{Config, FieldConfig, WindowConfig};
pub use error::{AppError, ConfigError, GpuError};
pub use particle::{Particle, Rgba};
pub use render::{render_frame, FrameStats};
pub use schedule::{FrameHandle, FrameHost, ListenerId, ManualHost};
pub use session::{AnimationSession, SessionState};
pub use simulation::ParticleField;
pub use store::ParticleStore;
pub use surface::{DrawCommand, DrawSurface, RecordingSurface};
pub use window::WindowHost;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use helix_field::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::config::{Config, FieldConfig, WindowConfig};
    pub use crate::particle::{Particle, Rgba};
    pub use crate::render::{render_frame, FrameStats};
    pub use crate::schedule::{FrameHandle, FrameHost, ListenerId, ManualHost};
    pub use crate::session::{AnimationSession, SessionState};
    pub use crate::simulation::ParticleField;
    pub use crate::store::ParticleStore;
    pub use crate::surface::{DrawCommand, DrawSurface, RecordingSurface};
    pub use crate::Vec2;
}

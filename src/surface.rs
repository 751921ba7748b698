//! The drawing surface the field renders onto.
//!
//! The core never reaches for a global canvas; the host hands a
//! [`DrawSurface`] to the session. [`Canvas`](crate::canvas::Canvas)
//! tessellates for the GPU backend and [`RecordingSurface`] keeps a command
//! log for headless use.

use glam::Vec2;

use crate::particle::Rgba;

/// A resizable 2D drawing surface in pixel coordinates.
pub trait DrawSurface {
    /// Current size in pixels as `(width, height)`.
    fn size(&self) -> Vec2;

    /// Change the surface size. Clears its contents.
    fn resize(&mut self, width: f32, height: f32);

    /// Clear the whole surface.
    fn clear(&mut self);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Stroke a straight segment.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);
}

/// One call made against a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle { center: Vec2, radius: f32, color: Rgba },
    Line { from: Vec2, to: Vec2, color: Rgba, width: f32 },
}

/// A surface that records every call instead of drawing.
///
/// Calls accumulate until [`DrawSurface::clear`] or
/// [`DrawSurface::resize`], so after a frame the log holds exactly that
/// frame (starting with its `Clear`).
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    size: Vec2,
    commands: Vec<DrawCommand>,
    clears: u64,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Vec::new(),
            clears: 0,
        }
    }

    /// Commands recorded since the last clear, including that clear.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Total number of clears, which is one per rendered frame.
    pub fn clear_count(&self) -> u64 {
        self.clears
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
        self.commands.clear();
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.clears += 1;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.commands.push(DrawCommand::Line { from, to, color, width });
    }
}

//! Builder and runner for the windowed particle field.

use winit::event_loop::{ControlFlow, EventLoop};

use crate::config::{Config, FieldConfig};
use crate::error::AppError;
use crate::window::App;

/// A windowed particle field.
///
/// Use method chaining to configure, then call `.run()` to open the window.
///
/// ```ignore
/// use helix_field::ParticleField;
///
/// ParticleField::new()
///     .with_title("Background")
///     .with_opacity(0.2)
///     .run()?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    config: Config,
}

impl ParticleField {
    /// Create a field with the default look.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Replace the simulation parameters.
    pub fn with_field(mut self, field: FieldConfig) -> Self {
        self.config.field = field;
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.window.title = title.into();
        self
    }

    /// Set the initial logical window size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.config.window.width = width;
        self.config.window.height = height;
        self
    }

    /// Set the background color (normalized RGBA).
    pub fn with_clear_color(mut self, color: [f32; 4]) -> Self {
        self.config.window.clear_color = color;
        self
    }

    /// Multiply every drawn alpha by `opacity`.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.config.window.opacity = opacity;
        self
    }

    /// Seed the particle generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.field.seed = Some(seed);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the field. This blocks until the window is closed.
    pub fn run(self) -> Result<(), AppError> {
        self.config.field.validate()?;

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = App::new(self.config);
        event_loop.run_app(&mut app)?;
        app.into_result()
    }
}

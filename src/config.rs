//! Configuration for the particle field and its window host.
//!
//! Every constant of the effect lives in [`FieldConfig`]. The defaults
//! reproduce the classic look: one particle per 20 px of surface width,
//! connections under 100 px fading out as `0.2 - d / 500`.
//!
//! Configs serialize to JSON; missing fields fall back to their defaults.
//!
//! ```ignore
//! use helix_field::config::Config;
//!
//! let config = Config::load("field.json")?;
//! config.field.validate()?;
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::particle::Rgba;

/// Smallest accepted `particle_spacing`, in pixels.
pub const MIN_PARTICLE_SPACING: f32 = 1.0;

/// Parameters of the simulation and its connection pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Surface width per particle. Count is `floor(width / particle_spacing)`.
    pub particle_spacing: f32,
    /// Half-open range for particle radii.
    pub radius_range: [f32; 2],
    /// Half-open range for each velocity component.
    pub speed_range: [f32; 2],
    /// Half-open range for each of the R, G and B channels.
    pub channel_range: [u8; 2],
    /// Fill alpha shared by every particle.
    pub particle_alpha: f32,
    /// Added to `phase` on every step.
    pub phase_step: f32,
    /// Pairs closer than this are connected.
    pub connection_distance: f32,
    /// Connection alpha at distance zero.
    pub connection_alpha: f32,
    /// Distance over which the connection alpha drops by 1.0.
    pub connection_falloff: f32,
    /// Stroke width of connection segments.
    pub connection_width: f32,
    /// Stroke color of connection segments. Its alpha is ignored.
    pub connection_color: Rgba,
    /// Fixed seed for reproducible fields. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_spacing: 20.0,
            radius_range: [1.0, 3.0],
            speed_range: [-1.0, 1.0],
            channel_range: [155, 255],
            particle_alpha: 0.7,
            phase_step: 0.01,
            connection_distance: 100.0,
            connection_alpha: 0.2,
            connection_falloff: 500.0,
            connection_width: 0.5,
            connection_color: Rgba::new(100, 150, 255, 1.0),
            seed: None,
        }
    }
}

impl FieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the surface width per particle.
    pub fn with_particle_spacing(mut self, spacing: f32) -> Self {
        self.particle_spacing = spacing;
        self
    }

    /// Set the connection threshold distance.
    pub fn with_connection_distance(mut self, distance: f32) -> Self {
        self.connection_distance = distance;
        self
    }

    /// Set the per-step phase increment.
    pub fn with_phase_step(mut self, step: f32) -> Self {
        self.phase_step = step;
        self
    }

    /// Seed the particle generator for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of particles for a surface of the given width.
    ///
    /// Zero, negative and non-finite widths yield zero particles.
    pub fn particle_count(&self, width: f32) -> usize {
        if !width.is_finite() || width <= 0.0 {
            return 0;
        }
        (width / self.particle_spacing.max(MIN_PARTICLE_SPACING)).floor() as usize
    }

    /// Check that every range is non-empty and every value usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            ("particle_spacing", self.particle_spacing),
            ("radius_range[0]", self.radius_range[0]),
            ("radius_range[1]", self.radius_range[1]),
            ("speed_range[0]", self.speed_range[0]),
            ("speed_range[1]", self.speed_range[1]),
            ("particle_alpha", self.particle_alpha),
            ("phase_step", self.phase_step),
            ("connection_distance", self.connection_distance),
            ("connection_alpha", self.connection_alpha),
            ("connection_falloff", self.connection_falloff),
            ("connection_width", self.connection_width),
        ];
        if let Some((name, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::Invalid(format!("{} must be finite", name)));
        }

        if self.particle_spacing < MIN_PARTICLE_SPACING {
            return Err(ConfigError::Invalid(format!(
                "particle_spacing must be at least {}",
                MIN_PARTICLE_SPACING
            )));
        }
        if self.radius_range[0] < 0.0 || self.radius_range[0] >= self.radius_range[1] {
            return Err(ConfigError::Invalid(format!(
                "radius_range {:?} must be a non-empty range of non-negative radii",
                self.radius_range
            )));
        }
        if self.speed_range[0] >= self.speed_range[1] {
            return Err(ConfigError::Invalid(format!(
                "speed_range {:?} must be a non-empty range",
                self.speed_range
            )));
        }
        if self.channel_range[0] >= self.channel_range[1] {
            return Err(ConfigError::Invalid(format!(
                "channel_range {:?} must be a non-empty range",
                self.channel_range
            )));
        }
        if !(0.0..=1.0).contains(&self.particle_alpha) {
            return Err(ConfigError::Invalid("particle_alpha must be within 0..=1".into()));
        }
        if self.connection_distance < 0.0 || self.connection_width < 0.0 {
            return Err(ConfigError::Invalid(
                "connection_distance and connection_width must not be negative".into(),
            ));
        }
        if self.connection_falloff <= 0.0 {
            return Err(ConfigError::Invalid("connection_falloff must be positive".into()));
        }
        Ok(())
    }
}

/// Window host settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial logical size in pixels.
    pub width: u32,
    pub height: u32,
    /// Background color, normalized RGBA.
    pub clear_color: [f32; 4],
    /// Multiplier applied to every drawn alpha. A web page overlays the
    /// field at 0.2.
    pub opacity: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Helix Field".to_string(),
            width: 1280,
            height: 720,
            clear_color: [0.02, 0.03, 0.08, 1.0],
            opacity: 1.0,
        }
    }
}

/// Complete configuration file: field parameters plus window settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field: FieldConfig,
    pub window: WindowConfig,
}

impl Config {
    /// Save the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a configuration from a JSON file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&json)?;
        config.field.validate()?;
        Ok(config)
    }
}

//! Viewer settings loaded from an optional JSON file.
//!
//! Every section uses `#[serde(default)]`, so a file that only overrides
//! `{"camera": {"zoom_speed": 2.0}}` keeps every other default.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::camera::{OrbitSpeeds, Projection, DEFAULT_ROTATION_SPEED, DEFAULT_ZOOM_SPEED};

/// Top-level settings container
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub projection: ProjectionConfig,
    /// RGBA clear colour
    pub clear_color: ClearColor,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Orbit Viewer".to_string(),
        }
    }
}

/// Orbit control rates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Radians per second
    pub rotation_speed: f32,
    /// World units per second
    pub zoom_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            rotation_speed: DEFAULT_ROTATION_SPEED,
            zoom_speed: DEFAULT_ZOOM_SPEED,
        }
    }
}

impl CameraConfig {
    pub fn speeds(&self) -> OrbitSpeeds {
        OrbitSpeeds {
            rotation: self.rotation_speed,
            zoom: self.zoom_speed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectionConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl ProjectionConfig {
    pub fn projection(&self, width: u32, height: u32) -> Projection {
        Projection::new(self.fov_degrees.to_radians(), width, height, self.near, self.far)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ClearColor(pub [f64; 4]);

impl Default for ClearColor {
    fn default() -> Self {
        Self([0.2, 0.3, 0.3, 1.0])
    }
}

impl From<ClearColor> for wgpu::Color {
    fn from(color: ClearColor) -> Self {
        let [r, g, b, a] = color.0;
        wgpu::Color { r, g, b, a }
    }
}

impl ViewerConfig {
    /// Load settings from a JSON file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                let config: ViewerConfig = serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))?;
                log::info!("Loaded config from {}", path.display());
                config
            }
            None => ViewerConfig::default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would produce a degenerate window or projection
    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            bail!(
                "window size must be non-zero, got {}x{}",
                self.window.width,
                self.window.height
            );
        }

        let p = &self.projection;
        if !(p.fov_degrees > 0.0 && p.fov_degrees < 180.0) {
            bail!("fov_degrees must be within (0, 180), got {}", p.fov_degrees);
        }
        if p.near <= 0.0 || p.far <= p.near {
            bail!("projection needs 0 < near < far, got near={} far={}", p.near, p.far);
        }

        let c = &self.camera;
        if c.rotation_speed < 0.0 || c.zoom_speed < 0.0 {
            bail!("camera speeds must not be negative");
        }

        Ok(())
    }
}

//! Startup configuration
//!
//! Read once from an optional TOML file. Every key has a default, so a missing
//! file, or a file that sets only a few keys, is fine:
//!
//! ```toml
//! tick_rate_ms = 16
//! fov_degrees = 60.0
//!
//! [camera]
//! position = [0.0, 2.0, 4.0]
//! target = [0.0, 2.0, 0.0]
//!
//! [controls]
//! pro_move_speed = 0.1
//! pro_look_sensitivity = 0.05
//!
//! [log]
//! filter = "info"
//! file = "/tmp/notes.log"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use notes_oui::{FirstPersonCamera, Point3D};
use serde::Deserialize;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "NOTES_CONFIG";

const CONFIG_FILE: &str = "notes.toml";
const LOG_FILE: &str = "notes.log";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Milliseconds per tick
    pub tick_rate_ms: u64,
    /// Vertical field of view
    pub fov_degrees: f32,
    pub camera: CameraConfig,
    pub controls: ControlsConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub target: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Units moved per tick with advanced controls
    pub pro_move_speed: f32,
    /// Degrees turned per unit of mouse movement with advanced controls
    pub pro_look_sensitivity: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive, `RUST_LOG` takes precedence
    pub filter: String,
    /// Log file, defaults to the platform data directory
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 16,
            fov_degrees: 60.0,
            camera: CameraConfig::default(),
            controls: ControlsConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 2.0, 4.0],
            target: [0.0, 2.0, 0.0],
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            pro_move_speed: 0.1,
            pro_look_sensitivity: 0.05,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Load from the default location, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::from_toml(&raw).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).context("Failed to parse TOML")?;

        if config.tick_rate_ms == 0 {
            anyhow::bail!("tick_rate_ms must be greater than zero");
        }
        if !(1.0..180.0).contains(&config.fov_degrees) {
            anyhow::bail!("fov_degrees must be between 1 and 180, got {}", config.fov_degrees);
        }

        Ok(config)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Camera the player starts with
    pub fn initial_camera(&self) -> FirstPersonCamera {
        FirstPersonCamera::new(
            Point3D::from(self.camera.position),
            Point3D::from(self.camera.target),
            self.fov_degrees,
        )
    }

    /// Where log output goes
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log
            .file
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.data_dir().join(LOG_FILE)))
    }
}

/// Config file location: `$NOTES_CONFIG`, else the platform config directory
pub fn config_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .or_else(|| project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE)))
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "notes")
}

//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. Built-in defaults
//! 2. `config/default.toml` (version controlled)
//! 3. `config/user.toml` (untracked, user overrides)
//! 4. Environment variables (`SF_SECTION__KEY`)

use figment::{Figment, providers::{Format, Serialized, Toml, Env}};
use serde::{Serialize, Deserialize};
use starfield_core::StarConfig;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Star field parameters
    #[serde(default)]
    pub stars: StarsConfig,
    /// Frame timing
    #[serde(default)]
    pub timing: TimingConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. Built-in defaults
    /// 2. `config/default.toml`
    /// 3. `config/user.toml`
    /// 4. Environment variables (`SF_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional, never checked in
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // SF_STARS__COUNT=500 -> stars.count = 500
        figment = figment.merge(Env::prefixed("SF_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Build the simulation parameters
    ///
    /// The viewport is the configured window size. The result is not
    /// validated here; `FieldGenerator::new` does that.
    pub fn star_config(&self) -> StarConfig {
        self.star_config_for(self.window.width, self.window.height)
    }

    /// Build the simulation parameters for an explicit viewport size
    pub fn star_config_for(&self, width: u32, height: u32) -> StarConfig {
        StarConfig::default()
            .with_viewport(width as f32, height as f32)
            .with_count(self.stars.count)
            .with_depth_range(self.stars.near, self.stars.far)
            .with_radius(self.stars.radius)
            .with_speed(self.stars.speed)
            .with_frame_interval(self.timing.frame_interval())
            .with_spawn_scale(self.stars.spawn_scale.unwrap_or(self.stars.far))
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in borderless fullscreen
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
    /// Hide the mouse cursor over the window
    pub hide_cursor: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Starfield".to_string(),
            width: 1920,
            height: 1080,
            fullscreen: false,
            vsync: true,
            hide_cursor: true,
        }
    }
}

/// Star field configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarsConfig {
    /// Number of stars
    pub count: u32,
    /// Sprite radius in pixels at depth 1
    pub radius: f32,
    /// Near plane
    pub near: f32,
    /// Far plane
    pub far: f32,
    /// Depth units per second
    pub speed: f32,
    /// Spawn area multiplier; defaults to the far plane
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spawn_scale: Option<f32>,
    /// Fixed generation seed; random when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for StarsConfig {
    fn default() -> Self {
        Self {
            count: 10_000,
            radius: 30.0,
            near: 0.1,
            far: 10.0,
            speed: 0.5,
            spawn_scale: None,
            seed: None,
        }
    }
}

/// Frame timing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Frame rate cap; the simulation steps by `1 / max_framerate` per frame
    pub max_framerate: u32,
}

impl TimingConfig {
    /// Fixed simulation interval in seconds
    ///
    /// A zero frame rate yields an infinite interval, which configuration
    /// validation rejects.
    pub fn frame_interval(&self) -> f32 {
        1.0 / self.max_framerate as f32
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { max_framerate: 144 }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Clear color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Star sprite image
    pub texture_path: PathBuf,
    /// Linear texture filtering
    pub smooth_texture: bool,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            texture_path: PathBuf::from("assets/star.png"),
            smooth_texture: true,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Show frame rate in the window title
    pub show_fps: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_fps: true,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

//! Camera configuration resource.
//!
//! Manages camera settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [camera]
//! x = 0.0
//! y = 0.0
//! depth = 1.0
//! angle_degrees = 0.0
//! zoom_x = 1.0
//! zoom_y = 1.0
//!
//! [virtual]
//! width = 640
//! height = 360
//!
//! [viewport]
//! width = 1280
//! height = 720
//!
//! [layers]
//! background = -2.0
//! ground = 0.0
//! ```

use crate::camera::CameraPose;
use crate::camera::parallax::CAMERA_DEFAULT_Z;
use crate::math::Vec2;
use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use rustc_hash::FxHashMap;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_ZOOM: f32 = 1.0;
const DEFAULT_VIRTUAL_WIDTH: i32 = 0;
const DEFAULT_VIRTUAL_HEIGHT: i32 = 0;
const DEFAULT_VIEWPORT_WIDTH: i32 = 1280;
const DEFAULT_VIEWPORT_HEIGHT: i32 = 720;
const DEFAULT_CONFIG_PATH: &str = "./camera.ini";

/// Camera configuration resource.
///
/// Stores the initial pose, virtual resolution, a fallback viewport size for
/// hosts that cannot report one, and named parallax layer depths. The
/// [`apply_camera_config_changes`] system pushes changes into the camera.
///
/// [`apply_camera_config_changes`]: crate::systems::cameraconfig::apply_camera_config_changes
#[derive(Resource, Debug, Clone)]
pub struct CameraConfig {
    pub position_x: f32,
    pub position_y: f32,
    /// Camera depth for parallax.
    pub depth: f32,
    /// Rotation in degrees (the camera itself works in radians).
    pub angle_degrees: f32,
    pub zoom_x: f32,
    pub zoom_y: f32,
    /// Virtual resolution width; `<= 0` disables it.
    pub virtual_width: i32,
    pub virtual_height: i32,
    /// Viewport size used when the host does not report one.
    pub viewport_width: i32,
    pub viewport_height: i32,
    /// Named parallax layers and their depths.
    pub layers: FxHashMap<String, f32>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            position_x: 0.0,
            position_y: 0.0,
            depth: CAMERA_DEFAULT_Z,
            angle_degrees: 0.0,
            zoom_x: DEFAULT_ZOOM,
            zoom_y: DEFAULT_ZOOM,
            virtual_width: DEFAULT_VIRTUAL_WIDTH,
            virtual_height: DEFAULT_VIRTUAL_HEIGHT,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            layers: FxHashMap::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.position_x, self.position_y)
    }

    pub fn zoom(&self) -> Vec2 {
        Vec2::new(self.zoom_x, self.zoom_y)
    }

    pub fn viewport_size(&self) -> (i32, i32) {
        (self.viewport_width, self.viewport_height)
    }

    /// Camera pose described by this configuration, angle in radians.
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position(),
            depth: self.depth,
            angle: self.angle_degrees.to_radians(),
            scale: self.zoom(),
            virtual_resolution: (self.virtual_width, self.virtual_height),
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        let float = |section: &str, key: &str| {
            config
                .getfloat(section, key)
                .ok()
                .flatten()
                .map(|v| v as f32)
        };
        let int = |section: &str, key: &str| {
            config
                .getint(section, key)
                .ok()
                .flatten()
                .map(|v| v as i32)
        };

        // [camera] section
        if let Some(x) = float("camera", "x") {
            self.position_x = x;
        }
        if let Some(y) = float("camera", "y") {
            self.position_y = y;
        }
        if let Some(depth) = float("camera", "depth") {
            self.depth = depth;
        }
        if let Some(angle) = float("camera", "angle_degrees") {
            self.angle_degrees = angle;
        }
        if let Some(zoom_x) = float("camera", "zoom_x") {
            self.zoom_x = zoom_x;
        }
        if let Some(zoom_y) = float("camera", "zoom_y") {
            self.zoom_y = zoom_y;
        }

        // [virtual] section
        if let Some(width) = int("virtual", "width") {
            self.virtual_width = width;
        }
        if let Some(height) = int("virtual", "height") {
            self.virtual_height = height;
        }

        // [viewport] section
        if let Some(width) = int("viewport", "width") {
            self.viewport_width = width;
        }
        if let Some(height) = int("viewport", "height") {
            self.viewport_height = height;
        }

        // [layers] section: name = depth
        if let Some(section) = config.get_map_ref().get("layers") {
            for (name, value) in section {
                match value.as_deref().map(str::parse::<f32>) {
                    Some(Ok(z)) => {
                        self.layers.insert(name.clone(), z);
                    }
                    _ => log::warn!("Ignoring parallax layer '{}': bad depth {:?}", name, value),
                }
            }
        }

        info!(
            "Loaded camera config: pos=({}, {}), depth={}, angle={}°, zoom=({}, {}), virtual={}x{}, viewport={}x{}, layers={}",
            self.position_x,
            self.position_y,
            self.depth,
            self.angle_degrees,
            self.zoom_x,
            self.zoom_y,
            self.virtual_width,
            self.virtual_height,
            self.viewport_width,
            self.viewport_height,
            self.layers.len()
        );
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [camera] section
        config.set("camera", "x", Some(self.position_x.to_string()));
        config.set("camera", "y", Some(self.position_y.to_string()));
        config.set("camera", "depth", Some(self.depth.to_string()));
        config.set("camera", "angle_degrees", Some(self.angle_degrees.to_string()));
        config.set("camera", "zoom_x", Some(self.zoom_x.to_string()));
        config.set("camera", "zoom_y", Some(self.zoom_y.to_string()));

        // [virtual] section
        config.set("virtual", "width", Some(self.virtual_width.to_string()));
        config.set("virtual", "height", Some(self.virtual_height.to_string()));

        // [viewport] section
        config.set("viewport", "width", Some(self.viewport_width.to_string()));
        config.set("viewport", "height", Some(self.viewport_height.to_string()));

        // [layers] section
        for (name, z) in &self.layers {
            config.set("layers", name, Some(z.to_string()));
        }

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved camera config to {:?}", self.config_path);

        Ok(())
    }
}

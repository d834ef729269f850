//! Camera configuration change detection system.
//!
//! Monitors [`CameraConfig`] for changes and applies the pose, virtual
//! resolution and named layers to the camera and [`ParallaxLayers`].

use crate::resources::camera2d::Camera2DRes;
use crate::resources::cameraconfig::CameraConfig;
use crate::resources::parallaxlayers::ParallaxLayers;
use bevy_ecs::prelude::*;
use log::{error, info};

/// System that applies camera configuration changes.
///
/// Runs on insertion and on every modification of [`CameraConfig`]. An
/// invalid zoom is logged and leaves the camera untouched.
pub fn apply_camera_config_changes(
    maybe_config: Option<Res<CameraConfig>>,
    camera: Option<ResMut<Camera2DRes>>,
    layers: Option<ResMut<ParallaxLayers>>,
) {
    let Some(config) = maybe_config else {
        return;
    };
    if !config.is_changed() {
        return;
    }

    if let Some(mut camera) = camera {
        if let Err(e) = camera.0.apply_pose(&config.pose()) {
            error!("Failed to apply camera config: {}", e);
        }
    }

    if let Some(mut layers) = layers {
        *layers = ParallaxLayers::from_map(config.layers.clone());
    }

    info!("CameraConfig changes applied.");
}

//! Parallax depth component.
//!
//! Entities without a [`ParallaxLayer`] sit on the ground layer
//! ([`GROUND_Z`]).

use crate::camera::parallax::GROUND_Z;
use bevy_ecs::prelude::Component;

/// Depth of the layer an entity is drawn on.
///
/// Layers behind the ground use negative values and scroll slower; layers
/// between the ground and the camera scroll faster.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct ParallaxLayer {
    pub z: f32,
}

impl Default for ParallaxLayer {
    fn default() -> Self {
        Self { z: GROUND_Z }
    }
}

impl ParallaxLayer {
    pub fn new(z: f32) -> Self {
        Self { z }
    }
}

/// Depth of an optional layer component.
pub fn layer_z(layer: Option<&ParallaxLayer>) -> f32 {
    layer.map_or(GROUND_Z, |l| l.z)
}

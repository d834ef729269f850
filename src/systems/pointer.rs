//! Pointer world-position system.
//!
//! Converts the raw pointer coordinate pushed by the host into world space,
//! once per frame, and publishes it in
//! [`PointerWorldPosition`](crate::resources::pointer::PointerWorldPosition).
use bevy_ecs::prelude::*;

use crate::resources::camera2d::Camera2DRes;
use crate::resources::pointer::{PointerInput, PointerWorldPosition};

/// Refresh the camera's cached pointer world position.
///
/// Frames without a reported pointer keep the previous value.
pub fn update_pointer_world_position(
    input: Res<PointerInput>,
    mut camera: ResMut<Camera2DRes>,
    mut pointer_world: ResMut<PointerWorldPosition>,
) {
    let Some(raw) = input.raw else {
        return;
    };
    let world = camera.0.update_pointer_world_position(raw);
    pointer_world.0 = Some(world);
}

//! Per-frame pointer input resource.
//!
//! The host pushes the raw pointer coordinate here once per frame; the camera
//! never polls a device itself. See
//! [`update_pointer_world_position`](crate::systems::pointer::update_pointer_world_position).

use crate::math::Vec2;
use bevy_ecs::prelude::*;

/// Raw pointer state for the current frame, in viewport pixels.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PointerInput {
    /// Latest raw screen coordinate, if the host has reported one.
    pub raw: Option<Vec2>,
}

impl PointerInput {
    /// Record this frame's raw coordinate.
    pub fn push(&mut self, x: f32, y: f32) {
        self.raw = Some(Vec2::new(x, y));
    }
}

/// Pointer position in world space, refreshed once per frame.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PointerWorldPosition(pub Option<Vec2>);

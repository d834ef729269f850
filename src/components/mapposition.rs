//! World-space position component.
//!
//! For the projected on-screen position, see
//! [`ScreenPosition`](super::screenposition::ScreenPosition).

use crate::math::Vec2;
use bevy_ecs::prelude::Component;

/// World-space position (pivot) of an entity.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }
}

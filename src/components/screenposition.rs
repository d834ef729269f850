//! Screen-space position component.
//!
//! The [`ScreenPosition`] component stores where an entity's
//! [`MapPosition`](super::mapposition::MapPosition) lands on screen, in
//! viewport pixels. It is written by
//! [`screen_projection_system`](crate::systems::projection::screen_projection_system)
//! and read by renderers or UI anchoring code.

use crate::math::Vec2;
use bevy_ecs::prelude::Component;

/// Projected screen-space position of an entity.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPosition {
    /// 2D coordinates in screen pixels.
    pub pos: Vec2,
    /// Zoom applied to the entity's layer; scale sprites by this.
    pub zoom: f32,
}

impl ScreenPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            zoom: 1.0,
        }
    }
}

//! Culling marker.

use bevy_ecs::prelude::Component;

/// Present while the entity lies inside the camera's visible bounds for its
/// layer. Managed by [`culling_system`](crate::systems::culling::culling_system).
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InView;

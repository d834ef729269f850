//! Shared 2D camera resource.
//!
//! Wraps the engine's [`Camera2D`] so that systems can agree on a single
//! world/screen transform. Update this resource to pan/zoom/rotate the view.

use crate::camera::Camera2D;
use bevy_ecs::prelude::Resource;

/// ECS resource that holds the active 2D camera.
///
/// Typically inserted during setup, read by projection and culling systems,
/// and mutated by camera-controller systems and the viewport resize observer.
#[derive(Resource, Debug, Clone)]
pub struct Camera2DRes(pub Camera2D);

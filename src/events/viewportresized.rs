//! Viewport resize event and observer.
//!
//! The host triggers [`ViewportResizedEvent`] on window resizes and device
//! resets. [`viewport_resized_observer`] records the new size in
//! [`ViewportSize`] and forwards it to the camera, which only marks its scale
//! chain dirty; matrices are rebuilt on the next read.

use crate::resources::camera2d::Camera2DRes;
use crate::resources::viewportsize::ViewportSize;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

/// Event carrying the new viewport size in pixels.
#[derive(Event, Debug, Clone, Copy)]
pub struct ViewportResizedEvent {
    pub width: i32,
    pub height: i32,
}

/// Observer that applies a [`ViewportResizedEvent`].
///
/// Both resources are optional so the observer is harmless when registered
/// before the camera is inserted.
pub fn viewport_resized_observer(
    trigger: On<ViewportResizedEvent>,
    viewport: Option<ResMut<ViewportSize>>,
    camera: Option<ResMut<Camera2DRes>>,
) {
    let event = trigger.event();
    if let Some(mut viewport) = viewport {
        viewport.w = event.width;
        viewport.h = event.height;
    }
    if let Some(mut camera) = camera {
        camera.0.on_viewport_resized(event.width, event.height);
    }
}

//! Viewport size resource.
//!
//! Stores the current viewport dimensions in pixels as last reported by the
//! host. Updated by the viewport resize observer.

use crate::camera::ViewportProvider;
use bevy_ecs::prelude::Resource;

/// Current viewport size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ViewportProvider for ViewportSize {
    fn viewport_size(&self) -> (i32, i32) {
        (self.w, self.h)
    }
}

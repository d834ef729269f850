//! Back-buffer size resource.
//!
//! Tracks the physical back-buffer dimensions in pixels, which may differ from
//! the camera's virtual resolution. The host refreshes it whenever the window
//! or device changes.

use crate::camera::ViewportProvider;
use bevy_ecs::prelude::Resource;

/// Current back-buffer size in pixels.
///
/// Pass it to [`Camera2D::letterbox_for`](crate::camera::Camera2D::letterbox_for)
/// to get the destination rectangle when scaling the virtual render target
/// to fit the physical surface.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackBufferSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ViewportProvider for BackBufferSize {
    fn viewport_size(&self) -> (i32, i32) {
        (self.w, self.h)
    }

    fn back_buffer_size(&self) -> (i32, i32) {
        (self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera2D;
    use crate::math::IntRect;

    #[test]
    fn test_letterbox_pillarbox() {
        let camera = Camera2D::new((1920, 1080)).with_virtual_resolution(640, 480);
        let bb = BackBufferSize { w: 1920, h: 1080 };
        assert_eq!(camera.letterbox_for(&bb), IntRect::new(240, 0, 1440, 1080));
    }

    #[test]
    fn test_letterbox_follows_resized_buffer() {
        let camera = Camera2D::new((1920, 1080)).with_virtual_resolution(640, 360);
        let mut bb = BackBufferSize { w: 1920, h: 1080 };
        assert_eq!(camera.letterbox_for(&bb), IntRect::new(0, 0, 1920, 1080));
        bb.h = 1200;
        assert_eq!(camera.letterbox_for(&bb), IntRect::new(0, 60, 1920, 1080));
    }
}

//! Camera pose and the values derived from it.
//!
//! [`CameraState`] is plain data mutated by the owner. [`DerivedState`] holds
//! everything computed from it, and [`resolve`] brings a `DerivedState` up to
//! date for a given [`DirtyLevel`] without touching the pose.

use super::bounds::local_view_bounds;
use super::composer;
use super::dirty::DirtyLevel;
use super::parallax::CAMERA_DEFAULT_Z;
use super::virtualizer::{self, VirtualFit};
use crate::math::{Affine2, IntRect, Mat4, Vec2, affine};
use serde::{Deserialize, Serialize};

/// Mutable camera pose and configuration.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    /// World position the camera looks at.
    pub position: Vec2,
    /// Camera depth for parallax queries.
    pub depth: f32,
    /// Rotation in radians.
    pub angle: f32,
    /// Anisotropic zoom. Both components must be non-zero.
    pub scale: Vec2,
    /// Logical resolution; disabled when either dimension is `<= 0`.
    pub virtual_resolution: (i32, i32),
    /// Physical viewport size in pixels.
    pub viewport_resolution: (i32, i32),
}

impl CameraState {
    pub fn new(viewport_resolution: (i32, i32)) -> Self {
        Self {
            position: Vec2::ZERO,
            depth: CAMERA_DEFAULT_Z,
            angle: 0.0,
            scale: Vec2::ONE,
            virtual_resolution: (0, 0),
            viewport_resolution,
        }
    }

    pub fn virtual_resolution_enabled(&self) -> bool {
        virtualizer::is_enabled(self.virtual_resolution)
    }
}

/// Initial pose handed to [`Camera2D::from_pose`](super::Camera2D::from_pose).
///
/// Everything in [`CameraState`] except the viewport, which comes from the
/// host.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec2,
    pub depth: f32,
    /// Rotation in radians.
    pub angle: f32,
    pub scale: Vec2,
    pub virtual_resolution: (i32, i32),
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            depth: CAMERA_DEFAULT_Z,
            angle: 0.0,
            scale: Vec2::ONE,
            virtual_resolution: (0, 0),
        }
    }
}

/// Cached values computed from a [`CameraState`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct DerivedState {
    /// `cos(−angle)`
    pub rotation_cos: f32,
    /// `sin(−angle)`
    pub rotation_sin: f32,
    pub fit: VirtualFit,
    /// `scale * fit.scale`
    pub composed_scale: Vec2,
    pub view: Affine2,
    pub inverse: Affine2,
    pub projection: Mat4,
    /// Visible area in local (pre-translation) space.
    pub view_bounds: IntRect,
}

impl Default for DerivedState {
    fn default() -> Self {
        Self {
            rotation_cos: 1.0,
            rotation_sin: 0.0,
            fit: VirtualFit::default(),
            composed_scale: Vec2::ONE,
            view: Affine2::IDENTITY,
            inverse: Affine2::IDENTITY,
            projection: Mat4::IDENTITY,
            view_bounds: IntRect::default(),
        }
    }
}

impl DerivedState {
    /// Fully computed derived state for `state`.
    pub fn from_state(state: &CameraState) -> Self {
        let mut derived = Self::default();
        resolve(state, DirtyLevel::Angle, &mut derived);
        derived
    }
}

/// Orthographic projection for a viewport: pixel `(0, 0)` is the top-left
/// corner of clip space, Y grows downward.
///
/// Row-vector form of an off-center orthographic projection with
/// `near = 0`, `far = −1`.
pub fn viewport_projection(viewport: (i32, i32)) -> Mat4 {
    Mat4::orthographic_rh(
        0.0,
        viewport.0 as f32,
        viewport.1 as f32,
        0.0,
        0.0,
        -1.0,
    )
}

/// Recompute the stages of `derived` covered by `level`, top-down.
pub fn resolve(state: &CameraState, level: DirtyLevel, derived: &mut DerivedState) {
    if level.covers(DirtyLevel::Angle) {
        let (sin, cos) = (-state.angle).sin_cos();
        derived.rotation_cos = cos;
        derived.rotation_sin = sin;
    }

    if level.covers(DirtyLevel::Scale) {
        derived.fit = virtualizer::virtual_fit(state.viewport_resolution, state.virtual_resolution);
        derived.composed_scale = state.scale * derived.fit.scale;
        derived.projection = viewport_projection(state.viewport_resolution);
        derived.view = composer::linear_block(
            derived.rotation_cos,
            derived.rotation_sin,
            derived.composed_scale,
        );
        derived.view_bounds = local_view_bounds(
            state.viewport_resolution,
            derived.composed_scale,
            derived.rotation_cos,
            derived.rotation_sin,
        );
    }

    if level.covers(DirtyLevel::Position) {
        derived.view =
            composer::with_camera_translation(derived.view, state.position, derived.fit.origin);
        derived.inverse = affine::inverse(&derived.view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_from_state_identity_pose() {
        let derived = DerivedState::from_state(&CameraState::new((800, 600)));
        assert_eq!(derived.rotation_cos, 1.0);
        assert_eq!(derived.composed_scale, Vec2::ONE);
        assert_eq!(derived.view.translation, Vec2::new(400.0, 300.0));
        assert_eq!(derived.inverse.translation, Vec2::new(-400.0, -300.0));
    }

    #[test]
    fn test_position_level_keeps_bounds_and_trig() {
        let mut state = CameraState::new((800, 600));
        let mut derived = DerivedState::from_state(&state);
        let bounds = derived.view_bounds;

        state.position = Vec2::new(50.0, 0.0);
        state.angle = 1.0; // not flagged: must stay untouched at Position level
        resolve(&state, DirtyLevel::Position, &mut derived);

        assert_eq!(derived.rotation_cos, 1.0);
        assert_eq!(derived.view_bounds, bounds);
        assert_eq!(derived.view.translation, Vec2::new(350.0, 300.0));
    }

    #[test]
    fn test_clean_level_is_noop() {
        let state = CameraState::new((800, 600));
        let mut derived = DerivedState::from_state(&state);
        let before = derived;
        let moved = CameraState {
            position: Vec2::new(1.0, 1.0),
            ..state
        };
        resolve(&moved, DirtyLevel::Clean, &mut derived);
        assert_eq!(derived, before);
    }

    #[test]
    fn test_projection_maps_viewport_corners_to_clip_space() {
        let m = viewport_projection((800, 600));
        let tl = m.transform_point3(Vec3::ZERO);
        let br = m.transform_point3(Vec3::new(800.0, 600.0, 0.0));
        let close = |a: f32, b: f32| (a - b).abs() < 1e-6;
        assert!(close(tl.x, -1.0) && close(tl.y, 1.0));
        assert!(close(br.x, 1.0) && close(br.y, -1.0));
        // m33 = 1 / (near − far), m43 = near / (near − far)
        assert_eq!(m.z_axis.z, 1.0);
        assert_eq!(m.w_axis.z, 0.0);
    }

    #[test]
    fn test_virtual_resolution_enabled() {
        let mut state = CameraState::new((800, 600));
        assert!(!state.virtual_resolution_enabled());
        state.virtual_resolution = (320, 240);
        assert!(state.virtual_resolution_enabled());
    }
}

//! The camera facade.
//!
//! [`Camera2D`] owns a [`CameraState`], a cached [`DerivedState`] and the
//! current [`DirtyLevel`]. Setters only store and mark; every accessor of a
//! derived value resolves first, so no stale cache is ever returned. Depth
//! queries (`*_at`) are recomputed on every call and never cached.

use super::bounds;
use super::composer;
use super::dirty::DirtyLevel;
use super::error::CameraError;
use super::parallax;
use super::provider::ViewportProvider;
use super::state::{self, CameraPose, CameraState, DerivedState};
use super::virtualizer;
use crate::math::{Affine2, IntRect, Mat4, Vec2, affine};
use glam::Vec3;
use log::{debug, info, trace, warn};

/// 2D camera with lazily recomputed view matrices.
///
/// Single owner, not reentrant. Accessors take `&mut self` because reading a
/// derived value may resolve pending changes.
#[derive(Debug, Clone)]
pub struct Camera2D {
    state: CameraState,
    derived: DerivedState,
    dirty: DirtyLevel,
    revision: u64,
    pointer_world: Option<Vec2>,
}

impl Camera2D {
    /// Camera at the world origin with unit zoom for the given viewport.
    pub fn new(viewport: (i32, i32)) -> Self {
        Self {
            state: CameraState::new(viewport),
            derived: DerivedState::default(),
            dirty: DirtyLevel::Angle,
            revision: 0,
            pointer_world: None,
        }
    }

    /// Build a camera from an initial pose and the host's viewport.
    pub fn from_pose(
        pose: &CameraPose,
        provider: &impl ViewportProvider,
    ) -> Result<Self, CameraError> {
        let mut camera = Self::new(provider.viewport_size());
        camera.apply_pose(pose)?;
        Ok(camera)
    }

    /// Apply pose and virtual resolution.
    ///
    /// The scale is validated first; on error nothing is changed.
    pub fn apply_pose(&mut self, pose: &CameraPose) -> Result<(), CameraError> {
        self.set_scale(pose.scale)?;
        self.set_position(pose.position);
        self.set_angle(pose.angle);
        self.set_depth(pose.depth);
        self.set_virtual_resolution(pose.virtual_resolution.0, pose.virtual_resolution.1);
        Ok(())
    }

    /// Builder-style: enable a virtual resolution.
    pub fn with_virtual_resolution(mut self, width: i32, height: i32) -> Self {
        self.set_virtual_resolution(width, height);
        self
    }

    /// Builder-style: set the position.
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.set_position(position);
        self
    }

    // ---------------------------------------------------------------------
    // State store
    // ---------------------------------------------------------------------

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn position(&self) -> Vec2 {
        self.state.position
    }

    pub fn angle(&self) -> f32 {
        self.state.angle
    }

    pub fn scale(&self) -> Vec2 {
        self.state.scale
    }

    pub fn depth(&self) -> f32 {
        self.state.depth
    }

    pub fn virtual_resolution(&self) -> (i32, i32) {
        self.state.virtual_resolution
    }

    pub fn viewport_resolution(&self) -> (i32, i32) {
        self.state.viewport_resolution
    }

    pub fn dirty_level(&self) -> DirtyLevel {
        self.dirty
    }

    /// Number of resolves that recomputed something.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.state.position = position;
        self.dirty.mark(DirtyLevel::Position);
    }

    /// Same as [`set_position`](Self::set_position): center the view on `target`.
    pub fn look_at(&mut self, target: Vec2) {
        self.set_position(target);
    }

    pub fn move_by(&mut self, delta: Vec2) {
        self.set_position(self.state.position + delta);
    }

    pub fn set_angle(&mut self, radians: f32) {
        self.state.angle = radians;
        self.dirty.mark(DirtyLevel::Angle);
    }

    pub fn rotate_by(&mut self, radians: f32) {
        self.set_angle(self.state.angle + radians);
    }

    /// Set the anisotropic zoom.
    ///
    /// Zero or non-finite components are rejected and leave the camera
    /// unchanged.
    pub fn set_scale(&mut self, scale: Vec2) -> Result<(), CameraError> {
        if scale.x == 0.0 || scale.y == 0.0 || !scale.is_finite() {
            warn!("Rejected camera scale ({}, {})", scale.x, scale.y);
            return Err(CameraError::InvalidScale {
                x: scale.x,
                y: scale.y,
            });
        }
        self.state.scale = scale;
        self.dirty.mark(DirtyLevel::Scale);
        Ok(())
    }

    /// Uniform zoom.
    pub fn set_zoom(&mut self, zoom: f32) -> Result<(), CameraError> {
        self.set_scale(Vec2::splat(zoom))
    }

    /// Set the logical resolution. Any non-positive dimension disables it.
    pub fn set_virtual_resolution(&mut self, width: i32, height: i32) {
        self.state.virtual_resolution = (width, height);
        self.dirty.mark(DirtyLevel::Scale);
    }

    pub fn set_viewport_resolution(&mut self, width: i32, height: i32) {
        self.state.viewport_resolution = (width, height);
        self.dirty.mark(DirtyLevel::Scale);
    }

    /// Host notification for window resizes and device resets.
    ///
    /// Only stores the new size; nothing is recomputed until the next read.
    pub fn on_viewport_resized(&mut self, width: i32, height: i32) {
        info!("Viewport resized to {}x{}", width, height);
        self.set_viewport_resolution(width, height);
    }

    /// Depth only feeds per-call parallax queries, so nothing cached goes stale.
    pub fn set_depth(&mut self, depth: f32) {
        self.state.depth = depth;
    }

    // ---------------------------------------------------------------------
    // Dirty tracker
    // ---------------------------------------------------------------------

    /// Bring the cached derived values up to date.
    ///
    /// Returns `false` when there was nothing to do.
    pub fn resolve(&mut self) -> bool {
        let level = self.dirty.take();
        if level.is_clean() {
            return false;
        }
        trace!("Camera resolve at {:?}", level);
        if level.covers(DirtyLevel::Scale) {
            debug!(
                "Recomputing camera scale chain: viewport {:?}, virtual {:?}, scale ({}, {})",
                self.state.viewport_resolution,
                self.state.virtual_resolution,
                self.state.scale.x,
                self.state.scale.y
            );
        }
        state::resolve(&self.state, level, &mut self.derived);
        self.revision += 1;
        true
    }

    /// Resolved derived values.
    pub fn derived(&mut self) -> &DerivedState {
        self.resolve();
        &self.derived
    }

    pub fn virtual_scale(&mut self) -> f32 {
        self.derived().fit.scale
    }

    /// Viewport center in virtual units.
    pub fn origin(&mut self) -> Vec2 {
        self.derived().fit.origin
    }

    pub fn composed_scale(&mut self) -> Vec2 {
        self.derived().composed_scale
    }

    /// Letterbox rectangle of the virtual resolution inside the host's
    /// back buffer, queried on demand.
    pub fn letterbox_for(&self, provider: &impl ViewportProvider) -> IntRect {
        virtualizer::letterbox(provider.back_buffer_size(), self.state.virtual_resolution)
    }

    // ---------------------------------------------------------------------
    // Matrices
    // ---------------------------------------------------------------------

    pub fn view(&mut self) -> Affine2 {
        self.derived().view
    }

    pub fn inverse_view(&mut self) -> Affine2 {
        self.derived().inverse
    }

    pub fn view_matrix(&mut self) -> Mat4 {
        affine::to_mat4(&self.view())
    }

    pub fn inverse_view_matrix(&mut self) -> Mat4 {
        affine::to_mat4(&self.inverse_view())
    }

    pub fn projection_matrix(&mut self) -> Mat4 {
        self.derived().projection
    }

    /// Translation by the resolved origin.
    pub fn origin_matrix(&mut self) -> Mat4 {
        Mat4::from_translation(self.origin().extend(0.0))
    }

    /// Uniform virtual-resolution scale.
    pub fn scale_matrix(&mut self) -> Mat4 {
        let s = self.virtual_scale();
        Mat4::from_scale(Vec3::new(s, s, 1.0))
    }

    /// Forward and inverse transforms for content at `target_z`.
    ///
    /// Freshly computed on every call.
    pub fn view_at(&mut self, target_z: f32) -> (Affine2, Affine2) {
        let zoom = self.depth_zoom(target_z);
        let position = self.state.position;
        let d = self.derived();
        composer::compose(
            d.rotation_cos,
            d.rotation_sin,
            d.composed_scale * zoom,
            position,
            d.fit.origin,
        )
    }

    pub fn view_matrix_at(&mut self, target_z: f32) -> Mat4 {
        affine::to_mat4(&self.view_at(target_z).0)
    }

    pub fn inverse_view_matrix_at(&mut self, target_z: f32) -> Mat4 {
        affine::to_mat4(&self.view_at(target_z).1)
    }

    // ---------------------------------------------------------------------
    // Coordinate conversion
    // ---------------------------------------------------------------------

    pub fn screen_to_world(&mut self, screen: Vec2) -> Vec2 {
        self.inverse_view().transform_point2(screen)
    }

    pub fn world_to_screen(&mut self, world: Vec2) -> Vec2 {
        self.view().transform_point2(world)
    }

    /// Screen to world for content at `target_z`.
    ///
    /// With the default camera depth, `target_z = 0` matches
    /// [`screen_to_world`](Self::screen_to_world).
    pub fn screen_to_world_at(&mut self, screen: Vec2, target_z: f32) -> Vec2 {
        self.view_at(target_z).1.transform_point2(screen)
    }

    pub fn world_to_screen_at(&mut self, world: Vec2, target_z: f32) -> Vec2 {
        self.view_at(target_z).0.transform_point2(world)
    }

    /// Screen pixels per world unit along screen X for content at `target_z`.
    pub fn screen_to_world_scale(&mut self, target_z: f32) -> f32 {
        let inverse = self.view_at(target_z).1;
        let a = inverse.transform_point2(Vec2::ZERO);
        let b = inverse.transform_point2(Vec2::X);
        1.0 / a.distance(b)
    }

    /// World units per screen pixel along world X for content at `target_z`.
    pub fn world_to_screen_scale(&mut self, target_z: f32) -> f32 {
        let view = self.view_at(target_z).0;
        let a = view.transform_point2(Vec2::ZERO);
        let b = view.transform_point2(Vec2::X);
        1.0 / a.distance(b)
    }

    /// Convert this frame's raw pointer coordinate and cache the result.
    pub fn update_pointer_world_position(&mut self, raw_screen: Vec2) -> Vec2 {
        let world = self.screen_to_world(raw_screen);
        self.pointer_world = Some(world);
        world
    }

    /// Pointer position from the last
    /// [`update_pointer_world_position`](Self::update_pointer_world_position).
    ///
    /// Not refreshed automatically after camera or viewport changes.
    pub fn pointer_world_position(&self) -> Option<Vec2> {
        self.pointer_world
    }

    // ---------------------------------------------------------------------
    // Parallax
    // ---------------------------------------------------------------------

    /// Zoom applied to content at `target_z` from the current camera depth.
    pub fn depth_zoom(&self, target_z: f32) -> f32 {
        parallax::scale_from_z(self.state.depth, target_z)
    }

    pub fn is_visible(&self, target_z: f32) -> bool {
        parallax::is_visible_from(self.state.depth, target_z)
    }

    /// Move the camera depth so content at `target_z` is drawn at `zoom`.
    pub fn set_depth_for_zoom(&mut self, zoom: f32, target_z: f32) -> Result<(), CameraError> {
        if zoom == 0.0 || !zoom.is_finite() {
            return Err(CameraError::InvalidZoom(zoom));
        }
        self.set_depth(parallax::z_from_scale(zoom, target_z));
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Bounds
    // ---------------------------------------------------------------------

    /// Visible area relative to the camera position.
    pub fn local_bounds(&mut self) -> IntRect {
        self.derived().view_bounds
    }

    /// World-space visible area.
    pub fn bounds(&mut self) -> IntRect {
        let position = self.state.position;
        self.local_bounds().offset_by(position)
    }

    /// Union of the world-space visible areas of every layer in `depths`.
    ///
    /// Collapsed layers (zoom 0) contribute nothing; with no contributing
    /// layer this is [`bounds`](Self::bounds).
    pub fn world_bounds(&mut self, depths: &[f32]) -> IntRect {
        let camera_z = self.state.depth;
        let position = self.state.position;
        let local = self.local_bounds();
        bounds::union_layer_bounds(
            local,
            position,
            depths.iter().map(|&z| parallax::scale_from_z(camera_z, z)),
        )
    }
}

//! Screen projection system.
//!
//! Writes [`ScreenPosition`] for every entity with a [`MapPosition`], using
//! the depth-parameterized view of the entity's [`ParallaxLayer`].

use bevy_ecs::prelude::*;
use smallvec::SmallVec;

use crate::components::mapposition::MapPosition;
use crate::components::parallaxlayer::{ParallaxLayer, layer_z};
use crate::components::screenposition::ScreenPosition;
use crate::math::Affine2;
use crate::resources::camera2d::Camera2DRes;

/// Project world positions to the screen.
///
/// Depth views are recomputed by the camera on each call, so they are built
/// once per distinct layer per frame.
pub fn screen_projection_system(
    mut camera: ResMut<Camera2DRes>,
    mut query: Query<(&MapPosition, Option<&ParallaxLayer>, &mut ScreenPosition)>,
) {
    let mut views: SmallVec<[(f32, Affine2, f32); 8]> = SmallVec::new();

    for (map_position, layer, mut screen_position) in query.iter_mut() {
        let z = layer_z(layer);
        let (view, zoom) = match views.iter().find(|(vz, _, _)| *vz == z) {
            Some(&(_, view, zoom)) => (view, zoom),
            None => {
                let view = camera.0.view_at(z).0;
                let zoom = camera.0.depth_zoom(z);
                views.push((z, view, zoom));
                (view, zoom)
            }
        };
        screen_position.pos = view.transform_point2(map_position.pos);
        screen_position.zoom = zoom;
    }
}

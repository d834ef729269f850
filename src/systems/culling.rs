//! Visibility culling system.
//!
//! Maintains the [`InView`] marker from the camera's conservative world
//! bounds for each entity's layer. Layers the camera cannot see
//! (see [`Camera2D::is_visible`](crate::camera::Camera2D::is_visible)) are
//! always culled.

use bevy_ecs::prelude::*;
use smallvec::SmallVec;

use crate::components::inview::InView;
use crate::components::mapposition::MapPosition;
use crate::components::parallaxlayer::{ParallaxLayer, layer_z};
use crate::math::IntRect;
use crate::resources::camera2d::Camera2DRes;

/// Insert or remove [`InView`] on entities with a [`MapPosition`].
pub fn culling_system(
    mut commands: Commands,
    mut camera: ResMut<Camera2DRes>,
    query: Query<(Entity, &MapPosition, Option<&ParallaxLayer>, Has<InView>)>,
) {
    // Per-layer bounds, None for layers outside the visible depth range
    let mut layers: SmallVec<[(f32, Option<IntRect>); 8]> = SmallVec::new();

    for (entity, map_position, layer, in_view) in query.iter() {
        let z = layer_z(layer);
        let bounds = match layers.iter().find(|(lz, _)| *lz == z) {
            Some(&(_, bounds)) => bounds,
            None => {
                let bounds = camera
                    .0
                    .is_visible(z)
                    .then(|| camera.0.world_bounds(&[z]));
                layers.push((z, bounds));
                bounds
            }
        };

        let visible = bounds.is_some_and(|b| b.contains_point(map_position.pos));
        if visible && !in_view {
            commands.entity(entity).insert(InView);
        } else if !visible && in_view {
            commands.entity(entity).remove::<InView>();
        }
    }
}

use crate::components::mapposition::MapPosition;
use crate::components::pointercontrolled::PointerControlled;
use crate::resources::pointer::PointerWorldPosition;
use bevy_ecs::prelude::*;

/// Update each pointer-controlled entity's `MapPosition` from the pointer's world position.
pub fn pointer_controller(
    mut query: Query<(&PointerControlled, &mut MapPosition)>,
    pointer_world: Res<PointerWorldPosition>,
) {
    let Some(world_position) = pointer_world.0 else {
        return;
    };
    for (controlled, mut map_position) in query.iter_mut() {
        if controlled.follow_x {
            map_position.pos.x = world_position.x;
        }
        if controlled.follow_y {
            map_position.pos.y = world_position.y;
        }
    }
}

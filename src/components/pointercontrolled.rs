//! Pointer-following component.
//!
//! Read by [`crate::systems::pointercontroller`] to move entities to the
//! pointer's world position.

use bevy_ecs::prelude::Component;

/// Movement controlled by pointer position.
///
/// When attached to an entity, the entity's position follows the pointer
/// world position on the enabled axes.
#[derive(Component, Clone, Copy, Debug)]
pub struct PointerControlled {
    /// Follow pointer X axis.
    pub follow_x: bool,
    /// Follow pointer Y axis.
    pub follow_y: bool,
}

impl PointerControlled {
    /// Create a new PointerControlled component.
    pub fn new(follow_x: bool, follow_y: bool) -> Self {
        Self { follow_x, follow_y }
    }
}

impl Default for PointerControlled {
    fn default() -> Self {
        Self::new(true, true)
    }
}

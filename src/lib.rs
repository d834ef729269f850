//! Aberred Camera library.
//!
//! A 2D camera transform engine (pose, lazy view matrices, screen/world
//! conversion, virtual resolution, Z-depth parallax, view bounds) plus the ECS
//! components, resources, systems and events that wire it into a `bevy_ecs`
//! world.

pub mod camera;
pub mod components;
pub mod events;
pub mod math;
pub mod resources;
pub mod systems;

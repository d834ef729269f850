//! ECS components for entities positioned by the camera.
//!
//! Submodules overview:
//! - [`inview`] – marker kept on entities inside the visible bounds
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`parallaxlayer`] – depth of the layer an entity is drawn on
//! - [`pointercontrolled`] – follow the pointer's world position
//! - [`screenposition`] – projected screen-space position

pub mod inview;
pub mod mapposition;
pub mod parallaxlayer;
pub mod pointercontrolled;
pub mod screenposition;

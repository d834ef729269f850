//! Camera systems.
//!
//! Submodules overview
//! - [`cameraconfig`] – apply [`crate::resources::cameraconfig::CameraConfig`] changes
//! - [`culling`] – maintain the [`crate::components::inview::InView`] marker
//! - [`pointer`] – convert the raw pointer to world space once per frame
//! - [`pointercontroller`] – move pointer-controlled entities
//! - [`projection`] – write screen positions for world entities

pub mod cameraconfig;
pub mod culling;
pub mod pointer;
pub mod pointercontroller;
pub mod projection;

//! 2D camera transform engine.
//!
//! This module is independent of the ECS and of any rendering backend; the
//! [`crate::resources`] and [`crate::systems`] modules wire it into a world.
//!
//! Submodules overview
//! - [`camera2d`] – the [`Camera2D`] facade: state store, lazy resolve, conversions
//! - [`state`] – pose data, derived values and the pure `resolve` step
//! - [`dirty`] – nested dirty levels (`Angle ⊇ Scale ⊇ Position`)
//! - [`composer`] – forward/inverse view transforms
//! - [`virtualizer`] – virtual resolution fit and back-buffer letterboxing
//! - [`parallax`] – Z-depth zoom helpers
//! - [`bounds`] – rotation-aware visible-area rectangles
//! - [`provider`] – host viewport queries
//! - [`error`] – [`CameraError`]

pub mod bounds;
pub mod camera2d;
pub mod composer;
pub mod dirty;
pub mod error;
pub mod parallax;
pub mod provider;
pub mod state;
pub mod virtualizer;

pub use camera2d::Camera2D;
pub use dirty::DirtyLevel;
pub use error::CameraError;
pub use provider::ViewportProvider;
pub use state::{CameraPose, CameraState, DerivedState};
pub use virtualizer::VirtualFit;

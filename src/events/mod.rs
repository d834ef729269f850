//! Event types and observers used by the camera integration.
//!
//! Submodules:
//! - [`viewportresized`] – host notification of a new viewport size
pub mod viewportresized;

//! ECS resources made available to systems.
//!
//! Overview
//! - `backbuffersize` – physical back-buffer size and letterbox helpers
//! - `camera2d` – shared 2D camera used for world/screen transforms
//! - `cameraconfig` – camera settings loaded from an INI file
//! - `parallaxlayers` – named parallax layer depths
//! - `pointer` – raw pointer input pushed by the host and its world position
//! - `viewportsize` – current viewport dimensions in pixels
pub mod backbuffersize;
pub mod camera2d;
pub mod cameraconfig;
pub mod parallaxlayers;
pub mod pointer;
pub mod viewportsize;

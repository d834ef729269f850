//! 2D math used by the camera.
//!
//! Vectors and matrices are [`glam`] types. This module adds what glam does
//! not cover:
//!
//! - [`affine`] – row-vector helpers over `Affine2` (rotation-scale block,
//!   closed-form inverse, expansion to `Mat4`)
//! - [`rect`] – `IntRect`, integer axis-aligned rectangle used for bounds
//!
//! With the `raylib` feature enabled, [`interop`] provides conversions to the
//! raylib equivalents.

pub mod affine;
#[cfg(feature = "raylib")]
pub mod interop;
pub mod rect;

pub use glam::{Affine2, Mat2, Mat4, Vec2};
pub use rect::IntRect;

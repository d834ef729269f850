//! Camera error type.

use std::fmt;

/// Errors reported by camera mutators that validate their input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraError {
    /// A scale component was zero or not finite; the view transform would not
    /// be invertible.
    InvalidScale { x: f32, y: f32 },
    /// A requested parallax zoom was zero or not finite.
    InvalidZoom(f32),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::InvalidScale { x, y } => {
                write!(f, "invalid camera scale ({x}, {y}): components must be finite and non-zero")
            }
            CameraError::InvalidZoom(z) => {
                write!(f, "invalid parallax zoom {z}: must be finite and non-zero")
            }
        }
    }
}

impl std::error::Error for CameraError {}

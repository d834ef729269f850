//! Viewport virtualization: fitting a fixed logical resolution into the
//! physical viewport.
//!
//! Both functions are pure; callers re-invoke them whenever the viewport or
//! virtual resolution changes.

use crate::math::{IntRect, Vec2};
use serde::{Deserialize, Serialize};

/// Uniform fit scale and the matching origin, in virtual units.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct VirtualFit {
    /// Physical pixels per virtual pixel. Always `> 0`.
    pub scale: f32,
    /// Viewport center expressed in virtual units.
    pub origin: Vec2,
}

impl Default for VirtualFit {
    fn default() -> Self {
        Self {
            scale: 1.0,
            origin: Vec2::ZERO,
        }
    }
}

/// A virtual resolution is active only when both dimensions are positive.
pub fn is_enabled(virtual_resolution: (i32, i32)) -> bool {
    virtual_resolution.0 > 0 && virtual_resolution.1 > 0
}

/// Letterbox/pillarbox fit of `virtual_resolution` inside `viewport`.
///
/// The scale is limited by the tighter axis so the aspect ratio is kept.
/// Disabled virtual resolutions and degenerate viewports fall back to `1`.
pub fn virtual_fit(viewport: (i32, i32), virtual_resolution: (i32, i32)) -> VirtualFit {
    let (vw, vh) = (viewport.0 as f32, viewport.1 as f32);

    let mut scale = if is_enabled(virtual_resolution) {
        (vw / virtual_resolution.0 as f32).min(vh / virtual_resolution.1 as f32)
    } else {
        1.0
    };
    if !(scale > 0.0 && scale.is_finite()) {
        scale = 1.0;
    }

    VirtualFit {
        scale,
        origin: Vec2::new(vw * 0.5, vh * 0.5) / scale,
    }
}

/// Centered sub-rectangle of the back buffer with the virtual aspect ratio.
///
/// Returns the whole back buffer when the virtual resolution is disabled.
pub fn letterbox(back_buffer: (i32, i32), virtual_resolution: (i32, i32)) -> IntRect {
    let (bw, bh) = back_buffer;
    if !is_enabled(virtual_resolution) || bw <= 0 || bh <= 0 {
        return IntRect::new(0, 0, bw.max(0), bh.max(0));
    }

    let game_w = virtual_resolution.0 as f32;
    let game_h = virtual_resolution.1 as f32;
    let window_w = bw as f32;
    let window_h = bh as f32;

    if window_w / window_h > game_w / game_h {
        // Wider than the virtual grid: bars on the sides
        let width = (game_w * (window_h / game_h)).round() as i32;
        IntRect::new((bw - width) / 2, 0, width, bh)
    } else {
        // Taller: bars top and bottom
        let height = (game_h * (window_w / game_w)).round() as i32;
        IntRect::new(0, (bh - height) / 2, bw, height)
    }
}

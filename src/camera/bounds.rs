//! Visible-area bounds.
//!
//! Bounds are conservative: the rectangle always covers the rotated view,
//! padded by half a unit so rounding and seams never cull visible content.

use crate::math::{IntRect, Vec2};

/// Local (camera-centered, pre-translation) bounds of the visible area.
///
/// The viewport's half extents are converted to world units with the
/// composed scale, rounded up and padded by `0.5`. The four corners are
/// rotated about the center and the axis-aligned envelope is taken.
pub fn local_view_bounds(viewport: (i32, i32), composed_scale: Vec2, cos: f32, sin: f32) -> IntRect {
    // Tiny zooms push the extents past f32 range; saturate before rotating
    let half = Vec2::new(
        (viewport.0 as f32 / (2.0 * composed_scale.x.abs())).ceil() + 0.5,
        (viewport.1 as f32 / (2.0 * composed_scale.y.abs())).ceil() + 0.5,
    )
    .min(Vec2::splat(IntRect::COORD_LIMIT));

    let corners = [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ];

    let mut min = Vec2::splat(f32::INFINITY);
    let mut max = Vec2::splat(f32::NEG_INFINITY);
    for c in corners {
        let r = Vec2::new(c.x * cos - c.y * sin, c.x * sin + c.y * cos);
        min = min.min(r);
        max = max.max(r);
    }

    IntRect::from_extents(min, max)
}

/// Bounds of a single parallax layer, or `None` when the layer's zoom is
/// zero (collapsed) or not finite.
pub fn layer_bounds(local: IntRect, position: Vec2, zoom: f32) -> Option<IntRect> {
    if zoom == 0.0 || !zoom.is_finite() {
        return None;
    }
    Some(local.scaled(1.0 / zoom.abs()).offset_by(position))
}

/// Union of the layer bounds for every zoom in `zooms`.
///
/// Falls back to the base bounds offset by `position` when no layer
/// contributes.
pub fn union_layer_bounds<I>(local: IntRect, position: Vec2, zooms: I) -> IntRect
where
    I: IntoIterator<Item = f32>,
{
    zooms
        .into_iter()
        .filter_map(|zoom| layer_bounds(local, position, zoom))
        .reduce(|acc, r| acc.union(&r))
        .unwrap_or_else(|| local.offset_by(position))
}

//! Integer axis-aligned rectangle.
//!
//! Used for view bounds handed to culling code. Conversions from float
//! extents always round outward so a rectangle never shrinks below the area
//! it was built from. Coordinates saturate at [`IntRect::COORD_LIMIT`], so
//! extreme zooms yield a huge rectangle rather than an overflow.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with integer origin and size.
///
/// `x`/`y` is the top-left corner. Width and height are never negative when
/// built through the constructors below.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl IntRect {
    /// Largest coordinate magnitude produced from float extents.
    ///
    /// Twice this still fits in an `i32`, so widths never overflow.
    pub const COORD_LIMIT: f32 = 1.0e9;

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest integer rectangle containing the float extents `min..max`.
    ///
    /// The minimum is rounded down and the maximum rounded up.
    /// Extents beyond [`COORD_LIMIT`](Self::COORD_LIMIT) are clamped.
    pub fn from_extents(min: Vec2, max: Vec2) -> Self {
        let left = saturate(min.x.floor());
        let top = saturate(min.y.floor());
        let right = saturate(max.x.ceil()).max(left);
        let bottom = saturate(max.y.ceil()).max(top);
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Translate by a float offset, rounding outward.
    pub fn offset_by(&self, offset: Vec2) -> Self {
        Self::from_extents(
            Vec2::new(self.x as f32 + offset.x, self.y as f32 + offset.y),
            Vec2::new(self.right() as f32 + offset.x, self.bottom() as f32 + offset.y),
        )
    }

    /// Scale the rectangle (position and size) about the local origin by
    /// `factor`, rounding outward.
    pub fn scaled(&self, factor: f32) -> Self {
        let factor = factor.clamp(-Self::COORD_LIMIT, Self::COORD_LIMIT);
        let a = Vec2::new(self.x as f32, self.y as f32) * factor;
        let b = Vec2::new(self.right() as f32, self.bottom() as f32) * factor;
        Self::from_extents(a.min(b), a.max(b))
    }

    /// Smallest rectangle enclosing both `self` and `other`.
    pub fn union(&self, other: &IntRect) -> Self {
        let left = self.x.min(other.x);
        let top = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(left, top, right.saturating_sub(left), bottom.saturating_sub(top))
    }

    /// True when `point` lies inside the rectangle (right/bottom edges excluded).
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x as f32
            && point.x < self.right() as f32
            && point.y >= self.y as f32
            && point.y < self.bottom() as f32
    }
}

/// Float coordinate to `i32`, clamped to the coordinate limit. NaN maps to 0.
fn saturate(v: f32) -> i32 {
    v.clamp(-IntRect::COORD_LIMIT, IntRect::COORD_LIMIT) as i32
}

//! Conversions to raylib math types (`raylib` feature).

use super::{IntRect, Mat4, Vec2};
use raylib::prelude::{Matrix, Rectangle, Vector2};

pub fn to_vector2(v: Vec2) -> Vector2 {
    Vector2 { x: v.x, y: v.y }
}

pub fn from_vector2(v: Vector2) -> Vec2 {
    Vec2::new(v.x, v.y)
}

impl From<IntRect> for Rectangle {
    fn from(r: IntRect) -> Self {
        Rectangle {
            x: r.x as f32,
            y: r.y as f32,
            width: r.width as f32,
            height: r.height as f32,
        }
    }
}

/// raylib stores matrices column-major for column vectors, which is the same
/// memory layout as a glam `Mat4`.
pub fn to_matrix(m: &Mat4) -> Matrix {
    let [m0, m1, m2, m3, m4, m5, m6, m7, m8, m9, m10, m11, m12, m13, m14, m15] =
        m.to_cols_array();
    Matrix {
        m0,
        m1,
        m2,
        m3,
        m4,
        m5,
        m6,
        m7,
        m8,
        m9,
        m10,
        m11,
        m12,
        m13,
        m14,
        m15,
    }
}

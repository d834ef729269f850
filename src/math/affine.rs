//! Row-vector helpers over glam's [`Affine2`].
//!
//! The camera writes its transforms in the row-vector convention, where a
//! point `p` maps to `p · L + T`:
//!
//! ```text
//! x' = x·m11 + y·m21 + tx
//! y' = x·m12 + y·m22 + ty
//! ```
//!
//! glam multiplies column vectors, so row `i` of `L` is stored as column `i`
//! of the `Mat2` and `transform_point2` computes the same product. For the
//! same reason a glam `Mat4`'s column-major array is the row-major array of
//! the row-vector matrix.

use glam::{Affine2, DMat2, Mat2, Mat4, Vec2, Vec4};

/// Rotation-scale block.
///
/// Rows are `(scale.x·cos, scale.y·sin)` and `(scale.x·−sin, scale.y·cos)`.
pub fn rotation_scale(cos: f32, sin: f32, scale: Vec2) -> Mat2 {
    Mat2::from_cols(
        Vec2::new(scale.x * cos, scale.y * sin),
        Vec2::new(scale.x * -sin, scale.y * cos),
    )
}

/// Closed-form inverse of the linear block and translation.
///
/// The reciprocal determinant is taken in `f64` to limit error growth at
/// high zoom or far from the origin. A singular block (zero scale axis)
/// yields non-finite components; callers must not pass one.
pub fn inverse(affine: &Affine2) -> Affine2 {
    let m = affine.matrix2.as_dmat2();
    let n = 1.0 / m.determinant();

    // Rows (m22, −m12) and (−m21, m11), scaled by n
    let inv = DMat2::from_cols_array(&[
        m.y_axis.y * n,
        -m.x_axis.y * n,
        -m.y_axis.x * n,
        m.x_axis.x * n,
    ]);
    let translation = inv * -affine.translation.as_dvec2();

    Affine2::from_mat2_translation(inv.as_mat2(), translation.as_vec2())
}

/// Expand into a homogeneous 4×4 with passthrough Z/W.
pub fn to_mat4(affine: &Affine2) -> Mat4 {
    Mat4::from_cols(
        affine.matrix2.x_axis.extend(0.0).extend(0.0),
        affine.matrix2.y_axis.extend(0.0).extend(0.0),
        Vec4::Z,
        affine.translation.extend(0.0).extend(1.0),
    )
}

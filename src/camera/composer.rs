//! View matrix composition.
//!
//! The forward transform maps world to screen as `screen = p · L + T`, where
//! `L` is the rotation-scale block and `T = (−position) · L + origin`.

use crate::math::{Affine2, Vec2, affine};

/// Rotation-scale block for the resolved trig and composed scale.
pub fn linear_block(cos: f32, sin: f32, composed_scale: Vec2) -> Affine2 {
    Affine2::from_mat2(affine::rotation_scale(cos, sin, composed_scale))
}

/// Attach the camera translation to a linear block.
pub fn with_camera_translation(linear: Affine2, position: Vec2, origin: Vec2) -> Affine2 {
    let t = linear.transform_vector2(-position) + origin;
    Affine2::from_mat2_translation(linear.matrix2, t)
}

/// Forward and inverse transforms in one go.
pub fn compose(
    cos: f32,
    sin: f32,
    composed_scale: Vec2,
    position: Vec2,
    origin: Vec2,
) -> (Affine2, Affine2) {
    let view = with_camera_translation(linear_block(cos, sin, composed_scale), position, origin);
    (view, affine::inverse(&view))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_camera_position_maps_to_origin() {
        let (sin, cos) = (-0.4f32).sin_cos();
        let position = Vec2::new(120.0, -35.0);
        let origin = Vec2::new(400.0, 300.0);
        let (view, _) = compose(cos, sin, Vec2::new(1.5, 2.0), position, origin);
        let p = view.transform_point2(position);
        assert!(approx_eq(p.x, origin.x));
        assert!(approx_eq(p.y, origin.y));
    }

    #[test]
    fn test_unrotated_translation() {
        let (view, inverse) = compose(1.0, 0.0, Vec2::new(2.0, 2.0), Vec2::new(10.0, 5.0), Vec2::new(100.0, 50.0));
        assert!(approx_eq(view.translation.x, 80.0));
        assert!(approx_eq(view.translation.y, 40.0));
        assert!(approx_eq(inverse.matrix2.x_axis.x, 0.5));
        assert!(approx_eq(inverse.translation.x, -40.0));
        assert!(approx_eq(inverse.translation.y, -20.0));
    }
}

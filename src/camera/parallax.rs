//! Z-depth parallax helpers.
//!
//! Depth is simulated with pure 2D scaling: a layer at `target_z` seen from a
//! camera at `camera_z` is drawn with zoom `1 / (camera_z − target_z)`.

/// Default camera depth.
pub const CAMERA_DEFAULT_Z: f32 = 1.0;
/// Depth of the ground content layer.
pub const GROUND_Z: f32 = 0.0;
/// Layers magnified at or beyond this zoom are treated as clipped.
pub const MAX_VISIBLE_ZOOM: f32 = 10.0;

/// Zoom of a layer at `target_z` seen from `camera_z`.
///
/// Coincident depths collapse to `0`; layers in front of the camera
/// (`target_z > camera_z`) get a negative, mirrored zoom.
pub fn scale_from_z(camera_z: f32, target_z: f32) -> f32 {
    if camera_z == target_z {
        0.0
    } else {
        1.0 / (camera_z - target_z)
    }
}

/// Camera depth that produces `zoom` on a layer at `target_z`.
pub fn z_from_scale(zoom: f32, target_z: f32) -> f32 {
    1.0 / zoom + target_z
}

pub fn is_visible_from(camera_z: f32, target_z: f32) -> bool {
    let zoom = scale_from_z(camera_z, target_z);
    zoom > 0.0 && zoom < MAX_VISIBLE_ZOOM
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_default_camera_sees_ground_at_one() {
        assert!(approx_eq(scale_from_z(CAMERA_DEFAULT_Z, GROUND_Z), 1.0));
    }

    #[test]
    fn test_coincident_depth_collapses() {
        assert_eq!(scale_from_z(1.0, 1.0), 0.0);
    }

    #[test]
    fn test_layer_in_front_is_mirrored() {
        assert!(scale_from_z(1.0, 2.0) < 0.0);
    }

    #[test]
    fn test_z_round_trip() {
        let z = z_from_scale(2.0, 0.0);
        assert!(approx_eq(z, 1.5));
        assert!(approx_eq(scale_from_z(z, 0.0), 2.0));
    }

    #[test]
    fn test_visibility_window() {
        assert!(is_visible_from(1.0, 0.0));
        assert!(!is_visible_from(1.0, 1.0));
        assert!(!is_visible_from(1.0, 2.0));
        // zoom 20: magnified past the limit
        assert!(!is_visible_from(1.0, 0.95));
        assert!(is_visible_from(1.0, 0.85));
        assert!(is_visible_from(1.0, -4.0));
    }
}

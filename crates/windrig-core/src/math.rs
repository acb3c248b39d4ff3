//! Angle and scalar mapping helpers.

use std::f32::consts::PI;

use glam::Vec3;

/// Horizontal angle from `listener` to `source`, offset by half a turn.
///
/// Only the X and Z components are used. `atan2` returns `(-π, π]`, so the
/// result lies in `(0, 2π]`; a source straight ahead along +Z yields `π`.
#[inline]
pub fn angle_to_source(listener: Vec3, source: Vec3) -> f32 {
    (source.x - listener.x).atan2(source.z - listener.z) + PI
}

/// Convert a yaw angle in degrees to radians.
#[inline]
pub fn heading_radians(yaw_degrees: f32) -> f32 {
    yaw_degrees / 180.0 * PI
}

/// Map `sin(f)` from `[-1, 1]` onto `[0, 1]`.
#[inline]
pub fn normalize_sin(f: f32) -> f32 {
    (1.0 + f.sin()) / 2.0
}

/// Scale `f` from `[0, 1]` onto `[min, max]`.
#[inline]
pub fn scale_normalized(f: f32, min: f32, max: f32) -> f32 {
    (max - min).mul_add(f, min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn normalize_sin_stays_in_unit_range() {
        let mut x = -1000.0_f32;
        while x < 1000.0 {
            let n = normalize_sin(x);
            assert!((0.0..=1.0).contains(&n), "normalize_sin({x}) = {n}");
            x += 0.37;
        }
    }

    #[test]
    fn normalize_sin_extremes() {
        assert_abs_diff_eq!(normalize_sin(0.0), 0.5);
        assert_abs_diff_eq!(normalize_sin(PI / 2.0), 1.0);
        assert_abs_diff_eq!(normalize_sin(-PI / 2.0), 0.0);
    }

    #[test]
    fn scale_normalized_endpoints() {
        assert_abs_diff_eq!(scale_normalized(0.0, 0.3, 1.0), 0.3);
        assert_abs_diff_eq!(scale_normalized(1.0, 0.3, 1.0), 1.0);
        assert_abs_diff_eq!(scale_normalized(0.0, 1.0, 3.0), 1.0);
        assert_abs_diff_eq!(scale_normalized(1.0, 1.0, 3.0), 3.0);
        assert_abs_diff_eq!(scale_normalized(0.5, 0.0, 5.0), 2.5);
    }

    #[test]
    fn scale_normalized_inverted_range() {
        assert_abs_diff_eq!(scale_normalized(0.0, 2.0, 1.0), 2.0);
        assert_abs_diff_eq!(scale_normalized(1.0, 2.0, 1.0), 1.0);
    }

    #[test]
    fn angle_to_source_directions() {
        let origin = Vec3::ZERO;
        // Straight ahead (+Z)
        assert_abs_diff_eq!(angle_to_source(origin, Vec3::Z), PI);
        // To the right (+X)
        assert_abs_diff_eq!(angle_to_source(origin, Vec3::X), 1.5 * PI, epsilon = 1e-6);
        // To the left (-X)
        assert_abs_diff_eq!(angle_to_source(origin, Vec3::NEG_X), 0.5 * PI, epsilon = 1e-6);
        // Height is ignored
        assert_abs_diff_eq!(
            angle_to_source(origin, Vec3::new(0.0, 50.0, 1.0)),
            angle_to_source(origin, Vec3::Z)
        );
    }

    #[test]
    fn angle_to_source_directly_behind_is_full_turn() {
        let angle = angle_to_source(Vec3::ZERO, Vec3::NEG_Z);
        assert_abs_diff_eq!(angle, 2.0 * PI);
        assert!(angle > 0.0);
    }

    #[test]
    fn angle_to_source_is_relative() {
        let listener = Vec3::new(10.0, 0.0, -4.0);
        let a = angle_to_source(listener, listener + Vec3::new(3.0, 0.0, 3.0));
        let b = angle_to_source(Vec3::ZERO, Vec3::new(3.0, 0.0, 3.0));
        assert_abs_diff_eq!(a, b, epsilon = 1e-6);
    }

    #[test]
    fn heading_conversion() {
        assert_abs_diff_eq!(heading_radians(0.0), 0.0);
        assert_abs_diff_eq!(heading_radians(180.0), PI);
        assert_abs_diff_eq!(heading_radians(90.0), PI / 2.0);
    }
}

//! Visual parameters derived from the drag offset
//!
//! Both functions run on every frame of a drag or settle animation.

use flick_animation::PiecewiseLinear;

/// Card tilt: ±250 units of drag map to ±15°, extended linearly beyond.
const ROTATION: PiecewiseLinear<2> = PiecewiseLinear::new([-250.0, 250.0], [-15.0, 15.0]);

/// The card underneath grows from 0.7 to full size as the top card leaves in
/// either direction.
const COMPANION_SCALE: PiecewiseLinear<3> =
    PiecewiseLinear::new([-300.0, 0.0, 300.0], [1.0, 0.7, 1.0]).clamped();

/// Rotation of the top card in degrees. Not clamped.
pub fn rotation(offset: f32) -> f32 {
    ROTATION.map(offset)
}

/// Scale of the companion card, in `[0.7, 1.0]`
pub fn companion_scale(offset: f32) -> f32 {
    COMPANION_SCALE.map(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_rotation_is_linear() {
        for d in [-250.0, -120.0, -1.0, 0.0, 37.5, 100.0, 250.0] {
            assert!(approx(rotation(d), d * 15.0 / 250.0), "rotation({d})");
        }
        assert_eq!(rotation(0.0), 0.0);
    }

    #[test]
    fn test_rotation_is_not_clamped() {
        assert!(approx(rotation(500.0), 30.0));
        assert!(approx(rotation(-500.0), -30.0));
        assert!(approx(rotation(260.0), 15.6));
    }

    #[test]
    fn test_companion_scale_control_points() {
        assert_eq!(companion_scale(-300.0), 1.0);
        assert_eq!(companion_scale(300.0), 1.0);
        assert!(approx(companion_scale(0.0), 0.7));
    }

    #[test]
    fn test_companion_scale_clamps() {
        assert_eq!(companion_scale(-500.0), 1.0);
        assert_eq!(companion_scale(450.0), 1.0);
        assert_eq!(companion_scale(f32::MAX), 1.0);
    }

    #[test]
    fn test_companion_scale_is_symmetric_and_linear() {
        for d in [15.0, 100.0, 150.0, 299.0] {
            let expected = 0.7 + 0.3 * d / 300.0;
            assert!(approx(companion_scale(d), expected), "companion_scale({d})");
            assert!(approx(companion_scale(-d), expected), "companion_scale(-{d})");
        }
    }
}

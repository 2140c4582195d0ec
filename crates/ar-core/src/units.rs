// ar-core/src/units.rs

use uom::si::f64::AngularVelocity as UomAngularVelocity;

// Public canonical unit types (SI, f64)
pub type AngularVelocity = UomAngularVelocity;

#[inline]
pub fn rad_per_s(v: f64) -> AngularVelocity {
    use uom::si::angular_velocity::radian_per_second;
    AngularVelocity::new::<radian_per_second>(v)
}

#[inline]
pub fn rpm(v: f64) -> AngularVelocity {
    use uom::si::angular_velocity::revolution_per_minute;
    AngularVelocity::new::<revolution_per_minute>(v)
}

/// Angular velocity as a plain rad/s scalar.
#[inline]
pub fn to_rad_per_s(w: AngularVelocity) -> f64 {
    use uom::si::angular_velocity::radian_per_second;
    w.get::<radian_per_second>()
}

/// Motor velocity constant given in rpm per volt, expressed in rad/s per volt.
#[inline]
pub fn kv_from_rpm_per_volt(kv_rpm: f64) -> f64 {
    to_rad_per_s(rpm(kv_rpm))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tolerances, nearly_equal};

    #[test]
    fn rpm_converts_to_rad_per_s() {
        let w = to_rad_per_s(rpm(60.0));
        assert!(nearly_equal(w, 2.0 * std::f64::consts::PI, Tolerances::default()));
    }

    #[test]
    fn kv_conversion_matches_hand_value() {
        // 105 rpm/V ≈ 10.9956 rad/s/V
        let kv = kv_from_rpm_per_volt(105.0);
        assert!((kv - 105.0 * 2.0 * std::f64::consts::PI / 60.0).abs() < 1e-9);
    }

    #[test]
    fn rad_per_s_is_identity() {
        assert_eq!(to_rad_per_s(rad_per_s(12.5)), 12.5);
    }
}

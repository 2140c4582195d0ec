//! Parasitic drag of the hub, modelled as a circular cylinder in crossflow.

use ar_core::Real;

/// Reynolds number of the hub cylinder based on its diameter.
pub fn hub_reynolds(axial_speed: Real, hub_radius: Real, kinematic_viscosity: Real) -> Real {
    2.0 * axial_speed.abs() * hub_radius / kinematic_viscosity
}

/// Empirical cylinder drag coefficient by Reynolds regime.
///
/// | Re                  | Cd                 |
/// |---------------------|--------------------|
/// | `Re <= 10`          | `24 / Re`          |
/// | `10 < Re <= 1e3`    | `-0.002 Re + 2.42` |
/// | `1e3 < Re <= 3e5`   | `0.5`              |
/// | `Re > 3e5`          | `0.15`             |
pub fn cylinder_drag_coefficient(reynolds: Real) -> Real {
    if reynolds <= 10.0 {
        24.0 / reynolds
    } else if reynolds <= 1000.0 {
        -0.002 * reynolds + 2.42
    } else if reynolds <= 300_000.0 {
        0.5
    } else {
        0.15
    }
}

/// Hub drag force (N) along the freestream axis.
///
/// `0.5 ρ V² Cd (2 r h)` reduces to `Cd r ρ V² h`. Zero axial speed gives zero
/// force rather than evaluating `24 / 0`.
pub fn hub_drag(
    axial_speed: Real,
    hub_radius: Real,
    hub_height: Real,
    air_density: Real,
    kinematic_viscosity: Real,
) -> Real {
    if axial_speed == 0.0 {
        return 0.0;
    }
    let cd = cylinder_drag_coefficient(hub_reynolds(axial_speed, hub_radius, kinematic_viscosity));
    cd * hub_radius * air_density * axial_speed * axial_speed * hub_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regime_boundaries() {
        // Stokes branch and linear branch meet at Re = 10
        assert_eq!(cylinder_drag_coefficient(10.0), 2.4);
        assert!((cylinder_drag_coefficient(10.0 + 1e-9) - 2.4).abs() < 1e-9);
        assert!((cylinder_drag_coefficient(1000.0) - 0.42).abs() < 1e-12);
        assert_eq!(cylinder_drag_coefficient(1000.0 + 1e-6), 0.5);
        assert_eq!(cylinder_drag_coefficient(300_000.0), 0.5);
        assert_eq!(cylinder_drag_coefficient(300_000.0 + 1e-6), 0.15);
    }

    #[test]
    fn coefficient_is_positive_in_every_regime() {
        for re in [0.5, 5.0, 10.0, 500.0, 1000.0, 5e4, 3e5, 1e7] {
            assert!(cylinder_drag_coefficient(re) > 0.0, "Re = {re}");
        }
    }

    #[test]
    fn hub_drag_uses_diameter_reynolds() {
        // Re = 2 * 50 * 0.05 / 1.461e-5 ≈ 3.4e5 → Cd = 0.15
        let re = hub_reynolds(50.0, 0.05, 1.461e-5);
        assert!(re > 300_000.0);
        let f = hub_drag(50.0, 0.05, 0.25, 1.225, 1.461e-5);
        assert!((f - 0.15 * 0.05 * 1.225 * 2500.0 * 0.25).abs() < 1e-9);
    }

    #[test]
    fn hub_drag_independent_of_flow_sign() {
        let fwd = hub_drag(20.0, 0.1, 0.2, 1.2, 1.5e-5);
        let back = hub_drag(-20.0, 0.1, 0.2, 1.2, 1.5e-5);
        assert!(fwd > 0.0);
        assert_eq!(fwd, back);
    }

    #[test]
    fn still_air_has_no_hub_drag() {
        assert_eq!(hub_drag(0.0, 0.1, 0.2, 1.2, 1.5e-5), 0.0);
    }
}

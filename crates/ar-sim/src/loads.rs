//! Blade-element evaluation of rotor loads at one instant.

use std::ops::{Add, AddAssign};

use ar_aero::{AirfoilTables, FlowDirection};
use ar_core::{Real, Vec3, linspace};
use rayon::prelude::*;

use crate::config::Configuration;

/// Rotor loads summed over all blades and strips.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Loads {
    /// Torque about the rotation axis (N·m)
    pub torque: Real,
    /// Sum of section lift (N)
    pub lift: Real,
    /// Force along x (N)
    pub drag: Real,
    /// Force along y (N)
    pub side_force: Real,
}

impl Add for Loads {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            torque: self.torque + other.torque,
            lift: self.lift + other.lift,
            drag: self.drag + other.drag,
            side_force: self.side_force + other.side_force,
        }
    }
}

impl AddAssign for Loads {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Blade strip with its geometry resolved once per run.
#[derive(Clone, Copy, Debug)]
struct Station {
    r: Real,
    chord: Real,
    pitch: Real,
}

/// Precomputed blade azimuths and strips for one configuration.
pub struct BladeElementModel<'a> {
    tables: &'a AirfoilTables,
    blade_offsets: Vec<Real>,
    stations: Vec<Station>,
    freestream: Vec3,
    air_density: Real,
    kinematic_viscosity: Real,
    strip_width: Real,
}

impl<'a> BladeElementModel<'a> {
    pub fn new(config: &Configuration, tables: &'a AirfoilTables) -> Self {
        let geometry = config.blade_geometry();
        let blade_offsets = linspace(
            0.0,
            2.0 * std::f64::consts::PI,
            config.propeller.num_blades as usize,
        );
        let stations = linspace(
            geometry.hub_radius,
            geometry.propeller_radius,
            config.radial_stations(),
        )
        .into_iter()
        .map(|r| Station {
            r,
            chord: geometry.chord_at(r),
            pitch: geometry.pitch_at(r),
        })
        .collect();

        Self {
            tables,
            blade_offsets,
            stations,
            freestream: config.flight.freestream_velocity,
            air_density: config.flight.air_density,
            kinematic_viscosity: config.flight.kinematic_viscosity,
            strip_width: config.simulation.radial_step_m,
        }
    }

    pub fn blade_offsets(&self) -> &[Real] {
        &self.blade_offsets
    }

    pub fn station_radii(&self) -> impl Iterator<Item = Real> + '_ {
        self.stations.iter().map(|s| s.r)
    }

    /// Aerodynamic loads with the rotor at `position` spinning at `omega`.
    pub fn loads(&self, position: Real, omega: Real) -> Loads {
        let mut total = Loads::default();
        for &offset in &self.blade_offsets {
            total += self.blade_loads(offset + position, omega);
        }
        total
    }

    /// Same as [`Self::loads`] with blades evaluated on the rayon pool.
    ///
    /// Summation order differs from the sequential path, so results agree
    /// only to rounding.
    pub fn par_loads(&self, position: Real, omega: Real) -> Loads {
        self.blade_offsets
            .par_iter()
            .map(|&offset| self.blade_loads(offset + position, omega))
            .reduce(Loads::default, Add::add)
    }

    /// Loads of a single blade at azimuth `phi`.
    pub fn blade_loads(&self, phi: Real, omega: Real) -> Loads {
        let omega_vec = Vec3::new(0.0, 0.0, omega);
        let (sin_phi, cos_phi) = phi.sin_cos();
        let r_hat = Vec3::new(cos_phi, sin_phi, 0.0);
        let phi_hat = Vec3::new(-r_hat.y, r_hat.x, 0.0);

        let mut loads = Loads::default();
        for station in &self.stations {
            let radius = r_hat.scale(station.r);
            let local_velocity = omega_vec.cross(&radius) + self.freestream;
            let tangential = local_velocity.dot(&phi_hat);

            let dynamic_pressure = 0.5 * self.air_density * tangential * tangential;
            let reynolds = tangential * station.chord / self.kinematic_viscosity;

            // Geometric pitch stands in for the local angle of attack
            let flow = FlowDirection::from_tangential(tangential);
            let coefs = self.tables.section(flow, station.pitch, reynolds);

            let strip_force = dynamic_pressure * station.chord * self.strip_width;
            let section_drag = strip_force * coefs.drag;
            loads.lift += strip_force * coefs.lift;

            let sign = match flow {
                FlowDirection::Forward => -1.0,
                FlowDirection::Reverse => 1.0,
            };
            loads.torque += sign * section_drag * station.r;
            loads.drag += sign * sin_phi * section_drag;
            loads.side_force += sign * cos_phi * section_drag;
        }
        loads
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Configuration {
        let mut config = Configuration::default();
        config.propeller.radius_m = 0.5;
        config.propeller.hub_radius_m = 0.05;
        config
    }

    #[test]
    fn blades_evenly_spaced() {
        let config = config();
        let model = BladeElementModel::new(&config, config.tables());
        let offsets = model.blade_offsets();
        assert_eq!(offsets.len(), 4);
        for (i, offset) in offsets.iter().enumerate() {
            assert!((offset - i as f64 * std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        }
    }

    #[test]
    fn stations_start_at_hub() {
        let config = config();
        let model = BladeElementModel::new(&config, config.tables());
        let radii: Vec<f64> = model.station_radii().collect();
        assert_eq!(radii.len(), 45);
        assert_eq!(radii[0], 0.05);
        assert!(radii.iter().all(|r| *r < 0.5));
    }

    #[test]
    fn still_air_and_rest_give_no_loads() {
        let mut config = config();
        config.flight.freestream_velocity = Vec3::zero();
        let model = BladeElementModel::new(&config, config.tables());
        assert_eq!(model.loads(0.0, 0.0), Loads::default());
    }

    #[test]
    fn spinning_in_still_air_drag_opposes_rotation() {
        // Positive omega: forward flow on every strip
        let mut config = config();
        config.flight.freestream_velocity = Vec3::zero();
        let model = BladeElementModel::new(&config, config.tables());
        let spin_up = model.loads(0.0, 20.0);
        assert!(spin_up.torque < 0.0);
        let spin_down = model.loads(0.0, -20.0);
        assert!(spin_down.torque > 0.0);
    }

    /// Sum of section drag and its moment for pure rotation at `omega`.
    fn still_air_drag(model: &BladeElementModel, omega: Real) -> (Real, Real) {
        let flow = FlowDirection::from_tangential(omega);
        model.stations.iter().fold((0.0, 0.0), |(sum, moment), st| {
            let tangential = omega * st.r;
            let q = 0.5 * model.air_density * tangential * tangential;
            let re = tangential * st.chord / model.kinematic_viscosity;
            let cd = model.tables.section(flow, st.pitch, re).drag;
            let drag = q * st.chord * model.strip_width * cd;
            (sum + drag, moment + drag * st.r)
        })
    }

    fn close(actual: Real, expected: Real, scale: Real) -> bool {
        (actual - expected).abs() <= 1e-9 * scale.abs().max(1e-12)
    }

    #[test]
    fn section_drag_resolves_against_the_blade_motion() {
        let mut config = config();
        config.flight.freestream_velocity = Vec3::zero();
        let model = BladeElementModel::new(&config, config.tables());
        let half_pi = std::f64::consts::FRAC_PI_2;

        // Forward: a blade along +x moves toward +y, so drag pushes -y
        let (sum, moment) = still_air_drag(&model, 20.0);
        assert!(sum > 0.0);
        let along_x = model.blade_loads(0.0, 20.0);
        assert!(close(along_x.side_force, -sum, sum));
        assert!(close(along_x.drag, 0.0, sum));
        assert!(close(along_x.torque, -moment, moment));
        let along_y = model.blade_loads(half_pi, 20.0);
        assert!(close(along_y.drag, -sum, sum));
        assert!(close(along_y.side_force, 0.0, sum));

        // Reverse: the blade moves the other way and the signs flip
        let (sum, moment) = still_air_drag(&model, -20.0);
        assert!(sum > 0.0);
        let along_x = model.blade_loads(0.0, -20.0);
        assert!(close(along_x.side_force, sum, sum));
        assert!(close(along_x.drag, 0.0, sum));
        assert!(close(along_x.torque, moment, moment));
        let along_y = model.blade_loads(half_pi, -20.0);
        assert!(close(along_y.drag, sum, sum));
        assert!(close(along_y.side_force, 0.0, sum));
    }

    #[test]
    fn parallel_sum_matches_sequential() {
        let config = config();
        let model = BladeElementModel::new(&config, config.tables());
        let seq = model.loads(0.3, 12.0);
        let par = model.par_loads(0.3, 12.0);
        assert!((seq.torque - par.torque).abs() <= 1e-9 * seq.torque.abs().max(1.0));
        assert!((seq.lift - par.lift).abs() <= 1e-9 * seq.lift.abs().max(1.0));
        assert!((seq.drag - par.drag).abs() <= 1e-9 * seq.drag.abs().max(1.0));
        assert!((seq.side_force - par.side_force).abs() <= 1e-9 * seq.side_force.abs().max(1.0));
    }
}

//! Scenario description: simulation, flight, motor and propeller parameters.

use ar_aero::{
    Airfoil, AirfoilTables, BladeGeometry, FlowDirection, SectionCoefficients, SpanTable,
};
use ar_core::{Real, Vec3, ensure_finite};
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Time and space discretization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Simulated duration (s)
    pub sim_time_s: Real,
    /// Fixed time step (s)
    pub time_step_s: Real,
    /// Width of one blade strip (m)
    pub radial_step_m: Real,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            sim_time_s: 10.0,
            time_step_s: 0.001,
            radial_step_m: 0.01,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConditions {
    /// Freestream velocity in the rotor frame (m/s); x lies in the disk plane
    pub freestream_velocity: Vec3,
    /// Air density (kg/m³)
    pub air_density: Real,
    /// Kinematic viscosity (m²/s)
    pub kinematic_viscosity: Real,
}

impl Default for FlightConditions {
    fn default() -> Self {
        Self {
            freestream_velocity: Vec3::new(87.0, 0.0, 0.0),
            air_density: 1.225,
            kinematic_viscosity: 0.000_014_61,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialConditions {
    /// Angular velocity at t = 0 (rad/s)
    pub angular_velocity_rad_s: Real,
}

/// DC motor acting as an electromagnetic brake on the propeller shaft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotorParams {
    /// Winding resistance (Ω)
    pub resistance_ohm: Real,
    /// Velocity constant (rad/s per V)
    pub velocity_constant: Real,
    /// Rotor moment of inertia (kg·m²)
    pub rotor_inertia: Real,
}

impl Default for MotorParams {
    fn default() -> Self {
        Self {
            resistance_ohm: 0.125,
            velocity_constant: 1.75,
            rotor_inertia: 0.002_186_5,
        }
    }
}

impl MotorParams {
    /// Braking torque magnitude for a shorted winding: `ω / (Kv² R)`.
    pub fn braking_torque(&self, omega: Real) -> Real {
        omega / (self.velocity_constant * self.velocity_constant * self.resistance_ohm)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropellerGeometry {
    /// Tip radius (m)
    pub radius_m: Real,
    /// Hub radius (m), where the blade root starts
    pub hub_radius_m: Real,
    /// Hub height along the rotation axis (m)
    pub hub_height_m: Real,
    pub num_blades: u32,
    /// Propeller moment of inertia (kg·m²)
    pub inertia: Real,
    /// Chord at 0%, 10%, ..., 100% span (m)
    pub blade_chord_m: SpanTable,
    /// Geometric pitch at 0%, 10%, ..., 100% span (rad)
    pub blade_pitch_rad: SpanTable,
    pub airfoil: Airfoil,
}

impl Default for PropellerGeometry {
    fn default() -> Self {
        Self {
            radius_m: 1.5,
            hub_radius_m: 0.18,
            hub_height_m: 0.25,
            num_blades: 4,
            inertia: 10.0,
            blade_chord_m: [
                0.0667, 0.1333, 0.2205, 0.2499, 0.2646, 0.2499, 0.2352, 0.2205, 0.1764, 0.137,
                0.0,
            ],
            blade_pitch_rad: [
                0.975_639_051_9,
                0.975_639_051_9,
                0.975_639_051_9,
                0.853_466_004_2,
                0.738_274_273_6,
                0.649_262_481_7,
                0.572_467_994_7,
                0.523_598_775_6,
                0.460_766_922_5,
                0.424_115_008_2,
                0.392_699_081_7,
            ],
            airfoil: Airfoil::Dae51,
        }
    }
}

/// Complete description of one autorotation scenario.
///
/// A run takes its own copy, so editing a configuration never affects a run
/// already in flight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub simulation: SimulationParams,
    pub flight: FlightConditions,
    pub initial: InitialConditions,
    pub motor: MotorParams,
    pub propeller: PropellerGeometry,
}

impl Configuration {
    /// Reject configurations that would give undefined step or station counts.
    pub fn validate(&self) -> SimResult<()> {
        let sim = &self.simulation;
        let flight = &self.flight;
        let motor = &self.motor;
        let prop = &self.propeller;

        for (value, what) in [
            (sim.sim_time_s, "sim_time_s"),
            (sim.time_step_s, "time_step_s"),
            (sim.radial_step_m, "radial_step_m"),
            (flight.freestream_velocity.x, "freestream_velocity.x"),
            (flight.freestream_velocity.y, "freestream_velocity.y"),
            (flight.freestream_velocity.z, "freestream_velocity.z"),
            (flight.air_density, "air_density"),
            (flight.kinematic_viscosity, "kinematic_viscosity"),
            (self.initial.angular_velocity_rad_s, "initial angular_velocity_rad_s"),
            (motor.resistance_ohm, "resistance_ohm"),
            (motor.velocity_constant, "velocity_constant"),
            (motor.rotor_inertia, "rotor_inertia"),
            (prop.radius_m, "radius_m"),
            (prop.hub_radius_m, "hub_radius_m"),
            (prop.hub_height_m, "hub_height_m"),
            (prop.inertia, "propeller inertia"),
        ] {
            ensure_finite(value, what)?;
        }
        for (value, what) in prop
            .blade_chord_m
            .iter()
            .map(|v| (*v, "blade_chord_m"))
            .chain(prop.blade_pitch_rad.iter().map(|v| (*v, "blade_pitch_rad")))
        {
            ensure_finite(value, what)?;
        }

        let checks: [(bool, &'static str); 12] = [
            (sim.time_step_s > 0.0, "time_step_s must be positive"),
            (sim.sim_time_s > 0.0, "sim_time_s must be positive"),
            (
                sim.time_step_s <= sim.sim_time_s,
                "time_step_s must not exceed sim_time_s",
            ),
            (sim.radial_step_m > 0.0, "radial_step_m must be positive"),
            (prop.hub_radius_m >= 0.0, "hub_radius_m cannot be negative"),
            (
                prop.hub_radius_m < prop.radius_m,
                "hub_radius_m must be smaller than radius_m",
            ),
            (
                sim.radial_step_m <= prop.radius_m - prop.hub_radius_m,
                "radial_step_m must not exceed the blade span",
            ),
            (prop.num_blades >= 2, "num_blades must be at least 2"),
            (flight.air_density > 0.0, "air_density must be positive"),
            (
                flight.kinematic_viscosity > 0.0,
                "kinematic_viscosity must be positive",
            ),
            (
                motor.resistance_ohm > 0.0 && motor.velocity_constant != 0.0,
                "motor resistance must be positive and velocity constant non-zero",
            ),
            (
                prop.inertia + motor.rotor_inertia > 0.0,
                "total moment of inertia must be positive",
            ),
        ];
        for (ok, what) in checks {
            if !ok {
                return Err(SimError::InvalidConfig { what });
            }
        }

        Ok(())
    }

    /// Number of time samples, `floor(sim_time / time_step)`.
    pub fn time_steps(&self) -> usize {
        (self.simulation.sim_time_s / self.simulation.time_step_s) as usize
    }

    /// Number of blade strips, `floor(span / radial_step)`.
    pub fn radial_stations(&self) -> usize {
        let span = self.propeller.radius_m - self.propeller.hub_radius_m;
        (span / self.simulation.radial_step_m) as usize
    }

    /// Combined propeller and motor rotor inertia (kg·m²).
    pub fn total_inertia(&self) -> Real {
        self.propeller.inertia + self.motor.rotor_inertia
    }

    pub fn blade_geometry(&self) -> BladeGeometry {
        BladeGeometry {
            hub_radius: self.propeller.hub_radius_m,
            propeller_radius: self.propeller.radius_m,
            chord: self.propeller.blade_chord_m,
            pitch: self.propeller.blade_pitch_rad,
        }
    }

    /// Coefficient tables of the configured airfoil.
    pub fn tables(&self) -> &'static AirfoilTables {
        self.propeller.airfoil.tables()
    }

    pub fn blade_chord_at(&self, r: Real) -> Real {
        self.blade_geometry().chord_at(r)
    }

    pub fn blade_pitch_at(&self, r: Real) -> Real {
        self.blade_geometry().pitch_at(r)
    }

    /// Section lift/drag at radius `r`, looked up at the local geometric pitch.
    pub fn section_coefficients_at(
        &self,
        tables: &AirfoilTables,
        flow: FlowDirection,
        r: Real,
        reynolds: Real,
    ) -> SectionCoefficients {
        tables.section(flow, self.blade_pitch_at(r), reynolds)
    }

    pub fn lift_coefficient_at(&self, tables: &AirfoilTables, r: Real, reynolds: Real) -> Real {
        self.section_coefficients_at(tables, FlowDirection::Forward, r, reynolds)
            .lift
    }

    pub fn drag_coefficient_at(&self, tables: &AirfoilTables, r: Real, reynolds: Real) -> Real {
        self.section_coefficients_at(tables, FlowDirection::Forward, r, reynolds)
            .drag
    }

    pub fn reverse_lift_coefficient_at(
        &self,
        tables: &AirfoilTables,
        r: Real,
        reynolds: Real,
    ) -> Real {
        self.section_coefficients_at(tables, FlowDirection::Reverse, r, reynolds)
            .lift
    }

    pub fn reverse_drag_coefficient_at(
        &self,
        tables: &AirfoilTables,
        r: Real,
        reynolds: Real,
    ) -> Real {
        self.section_coefficients_at(tables, FlowDirection::Reverse, r, reynolds)
            .drag
    }
}

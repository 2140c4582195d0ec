//! Human-readable dump of the configuration behind a solution.

use std::fmt::{self, Write};
use std::fs;
use std::path::{Path, PathBuf};

use ar_sim::{Configuration, Solution};

use crate::ResultsResult;

fn join_fixed(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{v:.6}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Grouped `Label: value` listing with six decimal places.
pub fn config_report(config: &Configuration) -> String {
    let mut out = String::new();
    // fmt::Write for String never fails
    let _ = write_report(config, &mut out);
    out
}

fn write_report(config: &Configuration, out: &mut impl Write) -> fmt::Result {
    let sim = &config.simulation;
    let flight = &config.flight;
    let motor = &config.motor;
    let prop = &config.propeller;
    let v = flight.freestream_velocity;

    writeln!(out, "Simulation Parameters")?;
    writeln!(out, "Sim Time: {:.6}", sim.sim_time_s)?;
    writeln!(out, "Time Step: {:.6}", sim.time_step_s)?;
    writeln!(out, "Radial Step: {:.6}", sim.radial_step_m)?;

    writeln!(out, "\nFlight Conditions")?;
    writeln!(out, "Freestream Velocity: {:.6}, {:.6}, {:.6}", v.x, v.y, v.z)?;
    writeln!(out, "Air Density: {:.6}", flight.air_density)?;
    writeln!(out, "Kinematic Viscosity: {:.6}", flight.kinematic_viscosity)?;

    writeln!(out, "\nInitial Conditions")?;
    writeln!(
        out,
        "Initial Angular Velocity: {:.6}",
        config.initial.angular_velocity_rad_s
    )?;

    writeln!(out, "\nMotor Parameters")?;
    writeln!(out, "Motor Resistance: {:.6}", motor.resistance_ohm)?;
    writeln!(out, "Motor Velocity Constant: {:.6}", motor.velocity_constant)?;
    writeln!(out, "Motor Rotor Moment of Inertia: {:.6}", motor.rotor_inertia)?;

    writeln!(out, "\nPropeller and Hub Geometry")?;
    writeln!(out, "Propeller Radius: {:.6}", prop.radius_m)?;
    writeln!(out, "Number of Blades: {}", prop.num_blades)?;
    writeln!(out, "Propeller Moment of Inertia: {:.6}", prop.inertia)?;
    writeln!(out, "Hub Radius: {:.6}", prop.hub_radius_m)?;
    writeln!(out, "Hub Height: {:.6}", prop.hub_height_m)?;

    writeln!(out, "\nBlade Geometry")?;
    writeln!(out, "Blade Airfoil: {}", prop.airfoil)?;
    writeln!(out, "Blade Chord: {}", join_fixed(&prop.blade_chord_m))?;
    writeln!(out, "Blade Pitch: {}", join_fixed(&prop.blade_pitch_rad))
}

/// Write `<dir>/<name>_config.txt` and return its path.
pub fn write_config_report(solution: &Solution, dir: &Path) -> ResultsResult<PathBuf> {
    let path = dir.join(format!("{}_config.txt", solution.name));
    fs::write(&path, config_report(&solution.configuration))?;
    Ok(path)
}

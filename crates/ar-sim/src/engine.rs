//! Time-marching autorotation solver.

use ar_aero::{AirfoilTables, hub_drag};
use ar_core::linspace;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Configuration;
use crate::error::SimResult;
use crate::integrator::IntegratorType;
use crate::loads::BladeElementModel;
use crate::progress::SimProgress;
use crate::solution::{DECIMATION_TARGET, Solution};

/// Options for a run that do not belong to the physical scenario.
#[derive(Clone, Debug)]
pub struct EngineOptions {
    /// Shaft state stepper (default: frozen-rate RK4)
    pub integrator: IntegratorType,
    /// Evaluate blades on the rayon pool
    pub parallel_blades: bool,
    /// Min/max decimate to this many windows when longer; `None` keeps every sample
    pub decimate_to: Option<usize>,
}

/// The options that change a run's output samples.
///
/// `parallel_blades` only reorders the summation, so it is left out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OutputOptions {
    pub integrator: IntegratorType,
    pub decimate_to: Option<usize>,
}

impl EngineOptions {
    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            integrator: self.integrator,
            decimate_to: self.decimate_to,
        }
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            integrator: IntegratorType::default(),
            parallel_blades: false,
            decimate_to: Some(DECIMATION_TARGET),
        }
    }
}

/// Run a scenario with its airfoil's tables and default options.
pub fn run(configuration: Configuration) -> SimResult<Solution> {
    let tables = configuration.tables();
    run_with_progress(configuration, tables, &EngineOptions::default(), None)
}

/// Run a scenario, reporting progress once per time step.
///
/// Fractions reported are `t / (N - 1)`: non-decreasing and ending at 1.
pub fn run_with_progress(
    configuration: Configuration,
    tables: &AirfoilTables,
    opts: &EngineOptions,
    mut progress_cb: Option<&mut dyn FnMut(SimProgress)>,
) -> SimResult<Solution> {
    configuration.validate()?;

    let model = BladeElementModel::new(&configuration, tables);
    let steps = configuration.time_steps();
    let dt = configuration.simulation.time_step_s;
    let inertia = configuration.total_inertia();

    let flight = &configuration.flight;
    let prop = &configuration.propeller;
    let hub = hub_drag(
        flight.freestream_velocity.x,
        prop.hub_radius_m,
        prop.hub_height_m,
        flight.air_density,
        flight.kinematic_viscosity,
    );

    info!(
        steps,
        blades = prop.num_blades,
        dt_s = dt,
        "starting autorotation run"
    );
    debug!(
        stations = configuration.radial_stations(),
        hub_drag_n = hub,
        inertia,
        "run setup"
    );

    let mut solution = Solution::new(steps, configuration.clone());
    solution.time = linspace(0.0, configuration.simulation.sim_time_s, steps);
    if steps > 0 {
        solution.angular_velocity[0] = configuration.initial.angular_velocity_rad_s;
    }

    for t in 0..steps {
        if let Some(cb) = progress_cb.as_deref_mut() {
            let fraction = if steps > 1 {
                t as f64 / (steps - 1) as f64
            } else {
                1.0
            };
            cb(SimProgress {
                step: t,
                total_steps: steps,
                sim_time_s: solution.time[t],
                fraction_complete: fraction,
            });
        }

        let position = solution.angular_position[t];
        let omega = solution.angular_velocity[t];

        let aero = if opts.parallel_blades {
            model.par_loads(position, omega)
        } else {
            model.loads(position, omega)
        };

        let torque = aero.torque - configuration.motor.braking_torque(omega);
        solution.torque[t] = torque;
        solution.lift[t] = aero.lift;
        solution.drag[t] = aero.drag + hub;
        solution.side_force[t] = aero.side_force;

        let acceleration = torque / inertia;
        solution.angular_acceleration[t] = acceleration;

        if t + 1 == steps {
            break;
        }

        solution.angular_position[t + 1] = opts.integrator.advance(position, omega, dt);
        solution.angular_velocity[t + 1] = opts.integrator.advance(omega, acceleration, dt);
    }

    if let Some(target) = opts.decimate_to
        && let Some(window) = solution.decimate(target)
    {
        debug!(window, points = solution.len(), "decimated solution");
    }

    info!(
        name = %solution.name,
        final_omega_rad_s = solution.angular_velocity.last().copied().unwrap_or_default(),
        "autorotation run complete"
    );

    Ok(solution)
}

//! Integration tests: whole runs of the autorotation solver.
//!
//! Scenarios:
//! - Small propeller spinning up from rest in a 50 m/s crossflow
//! - Still air (no loads), axial flow (blade-count scaling)
//! - Long runs (decimation) and progress reporting

use ar_core::Vec3;
use ar_sim::{
    BladeElementModel, Configuration, EngineOptions, IntegratorType, SimProgress, Solution, run,
    run_with_progress,
};

/// 0.5 m propeller, 4 blades, 1 s at dt = 0.01 in a 50 m/s crossflow.
fn crossflow_config() -> Configuration {
    let mut config = Configuration::default();
    config.propeller.radius_m = 0.5;
    config.propeller.hub_radius_m = 0.05;
    config.propeller.num_blades = 4;
    config.simulation.time_step_s = 0.01;
    config.simulation.sim_time_s = 1.0;
    config.flight.freestream_velocity = Vec3::new(50.0, 0.0, 0.0);
    config.initial.angular_velocity_rad_s = 0.0;
    config
}

fn assert_all_finite(solution: &Solution) {
    for series in ar_sim::Series::ALL {
        assert!(
            solution.series(series).iter().all(|v| v.is_finite()),
            "{} has non-finite samples",
            series.title()
        );
    }
}

#[test]
fn crossflow_spin_up_is_monotonic_and_braked() {
    let solution = run(crossflow_config()).expect("run should succeed");
    assert_eq!(solution.len(), 100);
    assert_all_finite(&solution);

    let omega = &solution.angular_velocity;
    let direction = omega[omega.len() - 1].signum();
    assert!(direction != 0.0, "rotor should leave rest");
    for w in omega.windows(2) {
        assert!(
            (w[1] - w[0]) * direction > 0.0,
            "angular speed should grow monotonically"
        );
    }

    // Motor braking grows with speed, so the net acceleration shrinks
    let alpha = &solution.angular_acceleration;
    assert!(alpha[alpha.len() - 1].abs() < alpha[0].abs());
}

#[test]
fn light_rotor_settles_to_steady_speed() {
    let mut config = crossflow_config();
    config.propeller.inertia = 0.1;
    let solution = run(config).expect("run should succeed");
    assert_all_finite(&solution);

    let tail = &solution.angular_velocity[solution.len() - 10..];
    let mean = tail.iter().sum::<f64>() / tail.len() as f64;
    let spread = tail.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
        - tail.iter().cloned().fold(f64::INFINITY, f64::min);
    assert!(mean.abs() > 1e-3, "steady speed should be non-zero");
    assert!(
        spread <= 0.05 * mean.abs(),
        "tail spread {spread} too large for mean {mean}"
    );

    // At equilibrium the braking torque balances the aerodynamic torque
    let last = solution.len() - 1;
    let peak_torque = solution
        .torque
        .iter()
        .fold(0.0_f64, |acc, t| acc.max(t.abs()));
    assert!(solution.torque[last].abs() < 0.1 * peak_torque);
}

#[test]
fn still_air_at_rest_has_no_loads() {
    let mut config = crossflow_config();
    config.flight.freestream_velocity = Vec3::zero();
    let solution = run(config).unwrap();
    assert_eq!(solution.torque[0], 0.0);
    assert_eq!(solution.lift[0], 0.0);
    assert_eq!(solution.drag[0], 0.0);
    assert_eq!(solution.side_force[0], 0.0);
    assert!(solution.angular_velocity.iter().all(|w| *w == 0.0));
}

#[test]
fn symmetric_rotor_in_still_air_has_no_net_in_plane_force() {
    let mut config = crossflow_config();
    config.flight.freestream_velocity = Vec3::zero();
    config.initial.angular_velocity_rad_s = 40.0;
    let solution = run(config).unwrap();
    let scale = solution.lift[0].abs().max(1.0);
    assert!(solution.drag[0].abs() < 1e-9 * scale);
    assert!(solution.side_force[0].abs() < 1e-9 * scale);
    // Spinning down under drag and braking
    assert!(solution.angular_velocity[99] < 40.0);
}

#[test]
fn doubling_blades_doubles_axial_flow_loads() {
    let mut two = crossflow_config();
    two.flight.freestream_velocity = Vec3::new(0.0, 0.0, 10.0);
    two.propeller.num_blades = 2;
    let mut four = two.clone();
    four.propeller.num_blades = 4;

    let model_two = BladeElementModel::new(&two, two.tables());
    let model_four = BladeElementModel::new(&four, four.tables());
    let loads_two = model_two.loads(0.2, 30.0);
    let loads_four = model_four.loads(0.2, 30.0);

    assert!(loads_two.torque != 0.0);
    assert!((loads_four.torque - 2.0 * loads_two.torque).abs() < 1e-9 * loads_two.torque.abs());
    assert!((loads_four.lift - 2.0 * loads_two.lift).abs() < 1e-9 * loads_two.lift.abs());
}

#[test]
fn progress_is_monotonic_and_ends_at_one() {
    let config = crossflow_config();
    let tables = config.tables();
    let mut events: Vec<SimProgress> = Vec::new();
    let solution = run_with_progress(
        config,
        tables,
        &EngineOptions::default(),
        Some(&mut |p| events.push(p)),
    )
    .unwrap();

    assert_eq!(events.len(), solution.len());
    assert_eq!(events[0].fraction_complete, 0.0);
    assert_eq!(events[events.len() - 1].fraction_complete, 1.0);
    for pair in events.windows(2) {
        assert!(pair[1].fraction_complete >= pair[0].fraction_complete);
        assert_eq!(pair[1].step, pair[0].step + 1);
    }
}

#[test]
fn long_runs_are_decimated() {
    let mut config = crossflow_config();
    config.simulation.sim_time_s = 25.0;
    config.simulation.radial_step_m = 0.05;

    let decimated = run(config.clone()).unwrap();
    // 2500 samples, window 2 → 1250 windows of (min, max)
    assert_eq!(decimated.len(), 2500);
    assert_eq!(decimated.time[0], 0.0);
    assert_eq!(decimated.time[1], 0.01);

    let full = run_with_progress(
        config.clone(),
        config.tables(),
        &EngineOptions {
            decimate_to: None,
            ..EngineOptions::default()
        },
        None,
    )
    .unwrap();
    assert_eq!(full.len(), 2500);

    let max_full = full.torque.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let max_dec = decimated
        .torque
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(max_full, max_dec);
}

#[test]
fn parallel_blades_agree_with_sequential() {
    let config = crossflow_config();
    let seq = run(config.clone()).unwrap();
    let par = run_with_progress(
        config.clone(),
        config.tables(),
        &EngineOptions {
            parallel_blades: true,
            ..EngineOptions::default()
        },
        None,
    )
    .unwrap();
    for (a, b) in seq.angular_velocity.iter().zip(&par.angular_velocity) {
        assert!((a - b).abs() <= 1e-9 * a.abs().max(1.0));
    }
}

#[test]
fn forward_euler_tracks_default_stepper() {
    let config = crossflow_config();
    let frozen = run(config.clone()).unwrap();
    let euler = run_with_progress(
        config.clone(),
        config.tables(),
        &EngineOptions {
            integrator: IntegratorType::ForwardEuler,
            ..EngineOptions::default()
        },
        None,
    )
    .unwrap();
    let a = frozen.angular_velocity[99];
    let b = euler.angular_velocity[99];
    assert!(a != b);
    // Frozen-rate stages add ~dt/2 relative growth per step
    assert!((a - b).abs() < 0.05 * a.abs());
}

#[test]
fn run_keeps_its_configuration_copy() {
    let config = crossflow_config();
    let solution = run(config.clone()).unwrap();
    assert_eq!(solution.configuration, config);
}

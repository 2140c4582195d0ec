//! Transient autorotation solver for a multi-blade propeller in crossflow.
//!
//! Provides:
//! - Scenario configuration with validation
//! - Blade-element rotor loads (forward and reversed flow)
//! - Fixed-step shaft integration with electromagnetic motor braking
//! - Time-series solutions with min/max decimation
//! - Progress reporting for runs on a worker thread

pub mod config;
pub mod engine;
pub mod error;
pub mod integrator;
pub mod loads;
pub mod progress;
pub mod solution;

pub use config::{
    Configuration, FlightConditions, InitialConditions, MotorParams, PropellerGeometry,
    SimulationParams,
};
pub use engine::{EngineOptions, OutputOptions, run, run_with_progress};
pub use error::{SimError, SimResult};
pub use integrator::{ForwardEuler, FrozenRateRk4, Integrator, IntegratorType};
pub use loads::{BladeElementModel, Loads};
pub use progress::{Progress, SimProgress};
pub use solution::{DECIMATION_TARGET, Series, Solution, downsample_min_max};

/// Solver version mixed into cached run ids.
pub const SOLVER_VERSION: &str = env!("CARGO_PKG_VERSION");

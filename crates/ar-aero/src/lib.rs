//! Aerodynamic models for the autorotation solver.
//!
//! Provides:
//! - Two-stage (angle of attack × Reynolds number) coefficient tables
//! - Static DAE-51 sample data for forward and reversed flow
//! - Spanwise chord/pitch interpolation for a blade
//! - Empirical circular-cylinder drag for the hub

pub mod airfoil;
pub mod geometry;
pub mod hub;
pub mod table;

mod dae51;

pub use airfoil::{Airfoil, AirfoilTables, FlowDirection, SectionCoefficients};
pub use geometry::{BladeGeometry, CONTROL_POINTS, SpanTable};
pub use hub::{cylinder_drag_coefficient, hub_drag, hub_reynolds};
pub use table::{AeroCoefficientTable, CoefficientSample, ReynoldsCurve};

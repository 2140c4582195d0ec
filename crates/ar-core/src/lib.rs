//! ar-core: shared foundation for the autorotation workspace.
//!
//! Contains:
//! - numeric (Real + tolerances + interpolation helpers)
//! - vector (3-component vector math)
//! - units (uom SI types + constructors)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;
pub mod vector;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use vector::Vec3;

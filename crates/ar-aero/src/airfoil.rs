//! Airfoil selection and the coefficient table bundle it resolves to.

use std::fmt;
use std::sync::LazyLock;

use ar_core::Real;
use serde::{Deserialize, Serialize};

use crate::dae51;
use crate::table::{AeroCoefficientTable, ReynoldsCurve};

/// Blade section profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Airfoil {
    #[default]
    #[serde(rename = "DAE_51", alias = "Dae51")]
    Dae51,
}

impl Airfoil {
    /// Process-wide, read-only tables for this airfoil.
    pub fn tables(self) -> &'static AirfoilTables {
        match self {
            Airfoil::Dae51 => &DAE51_TABLES,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Airfoil::Dae51 => "DAE_51",
        }
    }
}

impl fmt::Display for Airfoil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which side of the section meets the oncoming air.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowDirection {
    /// Leading edge first
    Forward,
    /// Trailing edge first
    Reverse,
}

impl FlowDirection {
    /// Positive tangential velocity is forward flow; zero counts as reversed.
    pub fn from_tangential(tangential: Real) -> Self {
        if tangential > 0.0 {
            FlowDirection::Forward
        } else {
            FlowDirection::Reverse
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionCoefficients {
    pub lift: Real,
    pub drag: Real,
}

/// Lift and drag tables for both flow directions of one airfoil.
#[derive(Debug, Clone, PartialEq)]
pub struct AirfoilTables {
    pub lift: AeroCoefficientTable,
    pub drag: AeroCoefficientTable,
    pub lift_reversed: AeroCoefficientTable,
    pub drag_reversed: AeroCoefficientTable,
}

impl AirfoilTables {
    pub fn lift_table(&self, flow: FlowDirection) -> &AeroCoefficientTable {
        match flow {
            FlowDirection::Forward => &self.lift,
            FlowDirection::Reverse => &self.lift_reversed,
        }
    }

    pub fn drag_table(&self, flow: FlowDirection) -> &AeroCoefficientTable {
        match flow {
            FlowDirection::Forward => &self.drag,
            FlowDirection::Reverse => &self.drag_reversed,
        }
    }

    pub fn section(
        &self,
        flow: FlowDirection,
        alpha: Real,
        reynolds: Real,
    ) -> SectionCoefficients {
        SectionCoefficients {
            lift: self.lift_table(flow).coefficient_at(alpha, reynolds),
            drag: self.drag_table(flow).coefficient_at(alpha, reynolds),
        }
    }
}

static DAE51_TABLES: LazyLock<AirfoilTables> = LazyLock::new(|| {
    let table = |data: &[(f64, f64)]| {
        AeroCoefficientTable::new([ReynoldsCurve::new(dae51::REYNOLDS, data.iter().copied())])
    };
    AirfoilTables {
        lift: table(&dae51::LIFT),
        drag: table(&dae51::DRAG),
        lift_reversed: table(&dae51::LIFT_REVERSED),
        drag_reversed: table(&dae51::DRAG_REVERSED),
    }
});

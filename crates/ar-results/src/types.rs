//! Result data types.

use ar_sim::Solution;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type RunId = String;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: RunId,
    pub solution_id: Uuid,
    pub solution_name: String,
    pub timestamp: String,
    pub solver_version: String,
    pub sample_count: usize,
    pub sim_time_s: f64,
}

impl RunManifest {
    /// Manifest for `solution` stored under `run_id`, stamped now.
    pub fn for_solution(run_id: RunId, solution: &Solution, solver_version: &str) -> Self {
        Self {
            run_id,
            solution_id: solution.id,
            solution_name: solution.name.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            solver_version: solver_version.to_string(),
            sample_count: solution.len(),
            sim_time_s: solution.configuration.simulation.sim_time_s,
        }
    }
}

/// One row of a stored solution, one JSON object per line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesRecord {
    pub time_s: f64,
    pub angular_position_rad: f64,
    pub angular_velocity_rad_s: f64,
    pub angular_acceleration_rad_s2: f64,
    pub torque_nm: f64,
    pub lift_n: f64,
    pub drag_n: f64,
    pub side_force_n: f64,
}

/// Flatten co-indexed solution series into rows.
pub fn records_from_solution(solution: &Solution) -> Vec<TimeseriesRecord> {
    (0..solution.len())
        .map(|i| TimeseriesRecord {
            time_s: solution.time[i],
            angular_position_rad: solution.angular_position[i],
            angular_velocity_rad_s: solution.angular_velocity[i],
            angular_acceleration_rad_s2: solution.angular_acceleration[i],
            torque_nm: solution.torque[i],
            lift_n: solution.lift[i],
            drag_n: solution.drag[i],
            side_force_n: solution.side_force[i],
        })
        .collect()
}

/// Write rows back into the series of `solution`, replacing what it held.
pub fn fill_solution(solution: &mut Solution, records: &[TimeseriesRecord]) {
    solution.time = records.iter().map(|r| r.time_s).collect();
    solution.angular_position = records.iter().map(|r| r.angular_position_rad).collect();
    solution.angular_velocity = records.iter().map(|r| r.angular_velocity_rad_s).collect();
    solution.angular_acceleration = records
        .iter()
        .map(|r| r.angular_acceleration_rad_s2)
        .collect();
    solution.torque = records.iter().map(|r| r.torque_nm).collect();
    solution.lift = records.iter().map(|r| r.lift_n).collect();
    solution.drag = records.iter().map(|r| r.drag_n).collect();
    solution.side_force = records.iter().map(|r| r.side_force_n).collect();
}

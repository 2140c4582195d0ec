//! Time-series output of one simulation run.

use std::sync::atomic::{AtomicUsize, Ordering};

use ar_core::Real;
use uuid::Uuid;

use crate::config::Configuration;

/// Above this many samples a solution is decimated for display.
pub const DECIMATION_TARGET: usize = 1000;

static SOLUTION_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Next sequential display name, `solution_<n>`.
fn next_solution_name() -> String {
    let n = SOLUTION_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("solution_{n}")
}

/// Output series of a [`Solution`], in export column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    Time,
    AngularPosition,
    AngularVelocity,
    AngularAcceleration,
    Torque,
    Lift,
    Drag,
    SideForce,
}

impl Series {
    pub const ALL: [Series; 8] = [
        Series::Time,
        Series::AngularPosition,
        Series::AngularVelocity,
        Series::AngularAcceleration,
        Series::Torque,
        Series::Lift,
        Series::Drag,
        Series::SideForce,
    ];

    /// Column/plot title.
    pub fn title(self) -> &'static str {
        match self {
            Series::Time => "Time",
            Series::AngularPosition => "Angular Position",
            Series::AngularVelocity => "Angular Velocity",
            Series::AngularAcceleration => "Angular Acceleration",
            Series::Torque => "Torque",
            Series::Lift => "Lift",
            Series::Drag => "Drag",
            Series::SideForce => "Side Force",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Series::Time => "s",
            Series::AngularPosition => "rad",
            Series::AngularVelocity => "rad/s",
            Series::AngularAcceleration => "rad/s^2",
            Series::Torque => "Nm",
            Series::Lift | Series::Drag | Series::SideForce => "N",
        }
    }

    /// Axis label such as `Angular Velocity (rad/s)`.
    pub fn axis_label(self) -> String {
        format!("{} ({})", self.title(), self.unit())
    }

    /// Parse a series by title or snake_case name.
    pub fn from_name(name: &str) -> Option<Series> {
        let key: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Series::ALL.into_iter().find(|s| {
            let title: String = s
                .title()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .map(|c| c.to_ascii_lowercase())
                .collect();
            title == key
        })
    }
}

/// Output of one run: co-indexed series plus the configuration that made them.
#[derive(Debug, Clone)]
pub struct Solution {
    pub id: Uuid,
    pub name: String,
    pub configuration: Configuration,
    pub time: Vec<Real>,
    pub angular_position: Vec<Real>,
    pub angular_velocity: Vec<Real>,
    pub angular_acceleration: Vec<Real>,
    pub torque: Vec<Real>,
    pub lift: Vec<Real>,
    pub drag: Vec<Real>,
    pub side_force: Vec<Real>,
}

impl Solution {
    /// Zero-filled solution of `len` samples with a fresh name and id.
    pub fn new(len: usize, configuration: Configuration) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: next_solution_name(),
            configuration,
            time: vec![0.0; len],
            angular_position: vec![0.0; len],
            angular_velocity: vec![0.0; len],
            angular_acceleration: vec![0.0; len],
            torque: vec![0.0; len],
            lift: vec![0.0; len],
            drag: vec![0.0; len],
            side_force: vec![0.0; len],
        }
    }

    /// Empty solution carrying a stored name and id. Does not draw a new name.
    pub fn restore(id: Uuid, name: String, configuration: Configuration) -> Self {
        Self {
            id,
            name,
            configuration,
            time: Vec::new(),
            angular_position: Vec::new(),
            angular_velocity: Vec::new(),
            angular_acceleration: Vec::new(),
            torque: Vec::new(),
            lift: Vec::new(),
            drag: Vec::new(),
            side_force: Vec::new(),
        }
    }

    /// First series holding a NaN or infinite sample.
    pub fn first_non_finite(&self) -> Option<Series> {
        Series::ALL
            .into_iter()
            .find(|&s| self.series(s).iter().any(|v| !v.is_finite()))
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn series(&self, series: Series) -> &[Real] {
        match series {
            Series::Time => &self.time,
            Series::AngularPosition => &self.angular_position,
            Series::AngularVelocity => &self.angular_velocity,
            Series::AngularAcceleration => &self.angular_acceleration,
            Series::Torque => &self.torque,
            Series::Lift => &self.lift,
            Series::Drag => &self.drag,
            Series::SideForce => &self.side_force,
        }
    }

    fn series_mut(&mut self, series: Series) -> &mut Vec<Real> {
        match series {
            Series::Time => &mut self.time,
            Series::AngularPosition => &mut self.angular_position,
            Series::AngularVelocity => &mut self.angular_velocity,
            Series::AngularAcceleration => &mut self.angular_acceleration,
            Series::Torque => &mut self.torque,
            Series::Lift => &mut self.lift,
            Series::Drag => &mut self.drag,
            Series::SideForce => &mut self.side_force,
        }
    }

    /// Min/max decimation of every series once the run exceeds `target` samples.
    ///
    /// All series share the window `len / target`, so they stay co-indexed.
    /// Returns the window used, or `None` when nothing was done.
    pub fn decimate(&mut self, target: usize) -> Option<usize> {
        let len = self.len();
        if target == 0 || len <= target {
            return None;
        }
        let window = len / target;
        for series in Series::ALL {
            let values = self.series_mut(series);
            *values = downsample_min_max(values, window);
        }
        Some(window)
    }
}

/// Replace each `window`-sized chunk of `data` with its minimum then maximum.
///
/// The trailing chunk may be shorter than `window`.
pub fn downsample_min_max(data: &[Real], window: usize) -> Vec<Real> {
    if window == 0 || data.len() <= 2 {
        return data.to_vec();
    }
    let mut out = Vec::with_capacity(2 * data.len().div_ceil(window));
    for chunk in data.chunks(window) {
        let (min, max) = chunk
            .iter()
            .fold((Real::INFINITY, Real::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        out.push(min);
        out.push(max);
    }
    out
}

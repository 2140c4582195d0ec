//! Run progress shared between the solving thread and observers.

use std::sync::atomic::{AtomicU64, Ordering};

/// Progress event emitted once per time step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimProgress {
    pub step: usize,
    pub total_steps: usize,
    pub sim_time_s: f64,
    pub fraction_complete: f64,
}

/// Completed fraction in `[0, 1]`, written by one run and read by anyone.
///
/// Stored as `f64` bits. For non-negative floats the bit pattern orders the
/// same way as the value, so `fetch_max` keeps the fraction non-decreasing.
#[derive(Debug, Default)]
pub struct Progress {
    bits: AtomicU64,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, fraction: f64) {
        // NaN and -0.0 would poison fetch_max through their sign bit
        let clamped = if fraction.is_nan() || fraction <= 0.0 {
            0.0
        } else {
            fraction.min(1.0)
        };
        self.bits.fetch_max(clamped.to_bits(), Ordering::Relaxed);
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }

    pub fn is_complete(&self) -> bool {
        self.get() >= 1.0
    }
}

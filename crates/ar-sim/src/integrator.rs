//! Fixed-step scalar integrators for the shaft state.

use ar_core::Real;
use serde::{Deserialize, Serialize};

/// Advances a scalar by one step given its rate of change at the step start.
pub trait Integrator {
    fn advance(&self, value: Real, rate: Real, dt: Real) -> Real;
}

/// Four-stage recurrence with the stage derivative frozen at the step rate.
///
/// ```text
/// k1 = f
/// k2 = f + dt/2 * k1
/// k3 = f + dt/2 * k2
/// k4 = f + dt   * k3
/// x' = x + dt/6 * (k1 + 2 k2 + 2 k3 + k4)
/// ```
///
/// Unlike classical RK4 the right-hand side is never re-evaluated at the
/// intermediate states; each stage feeds back on the previous stage value.
/// Net effect: `x' = x + f dt (1 + dt/2 + dt²/6 + dt³/24)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrozenRateRk4;

impl Integrator for FrozenRateRk4 {
    fn advance(&self, value: Real, rate: Real, dt: Real) -> Real {
        let k1 = rate;
        let k2 = rate + 0.5 * dt * k1;
        let k3 = rate + 0.5 * dt * k2;
        let k4 = rate + dt * k3;
        value + (dt / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4)
    }
}

/// Forward Euler (explicit, 1st order).
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn advance(&self, value: Real, rate: Real, dt: Real) -> Real {
        value + dt * rate
    }
}

/// Integrator selection for a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegratorType {
    /// Frozen-rate four-stage recurrence.
    #[default]
    FrozenRateRk4,
    /// Forward Euler.
    ForwardEuler,
}

impl IntegratorType {
    pub fn advance(self, value: Real, rate: Real, dt: Real) -> Real {
        match self {
            IntegratorType::FrozenRateRk4 => FrozenRateRk4.advance(value, rate, dt),
            IntegratorType::ForwardEuler => ForwardEuler.advance(value, rate, dt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frozen_rate_matches_closed_form() {
        let (x, f, dt) = (2.0, 3.0, 0.1);
        let expected = x + f * dt * (1.0 + dt / 2.0 + dt * dt / 6.0 + dt * dt * dt / 24.0);
        let got = FrozenRateRk4.advance(x, f, dt);
        assert!((got - expected).abs() < 1e-12);
    }

    #[test]
    fn frozen_rate_differs_from_euler_and_exact_ramp() {
        // For x' = f (constant) the exact step is x + f dt; the recurrence overshoots it.
        let got = FrozenRateRk4.advance(0.0, 1.0, 0.5);
        let euler = ForwardEuler.advance(0.0, 1.0, 0.5);
        assert_eq!(euler, 0.5);
        assert!(got > euler);
        assert!((got - 0.5 * (1.0 + 0.25 + 0.25 / 6.0 + 0.125 / 24.0)).abs() < 1e-12);
    }

    #[test]
    fn zero_rate_is_stationary() {
        assert_eq!(IntegratorType::FrozenRateRk4.advance(1.25, 0.0, 0.01), 1.25);
        assert_eq!(IntegratorType::ForwardEuler.advance(1.25, 0.0, 0.01), 1.25);
    }
}

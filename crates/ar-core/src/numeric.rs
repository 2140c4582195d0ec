use crate::{CoreError, CoreResult};

/// Floating point type used throughout the workspace
pub type Real = f64;

/// Absolute/relative tolerance pair for float comparisons
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> CoreResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Linear interpolation through `(x1, y1)` and `(x2, y2)` evaluated at `x`.
///
/// Coincident abscissae return `y1` instead of dividing by zero.
#[inline]
pub fn lerp(x1: Real, x2: Real, y1: Real, y2: Real, x: Real) -> Real {
    if x2 == x1 {
        return y1;
    }
    y1 + (y2 - y1) * (x - x1) / (x2 - x1)
}

/// `n` evenly spaced samples starting at `start` with spacing `(end - start) / n`.
///
/// The end point itself is not part of the output.
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    if n == 0 {
        return Vec::new();
    }
    let step = (end - start) / n as Real;
    (0..n).map(|i| start + i as Real * step).collect()
}

//! Coefficient lookup over angle of attack and Reynolds number.

use ar_core::{Real, lerp};

/// One `(alpha, coefficient)` sample of a polar curve. Alpha is in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoefficientSample {
    pub alpha: Real,
    pub coefficient: Real,
}

impl From<(Real, Real)> for CoefficientSample {
    fn from((alpha, coefficient): (Real, Real)) -> Self {
        Self { alpha, coefficient }
    }
}

/// Samples measured at a single reference Reynolds number, sorted by alpha.
#[derive(Clone, Debug, PartialEq)]
pub struct ReynoldsCurve {
    pub reynolds: Real,
    pub samples: Vec<CoefficientSample>,
}

impl ReynoldsCurve {
    pub fn new(reynolds: Real, samples: impl IntoIterator<Item = (Real, Real)>) -> Self {
        let mut samples: Vec<CoefficientSample> = samples.into_iter().map(Into::into).collect();
        samples.sort_by(|a, b| a.alpha.total_cmp(&b.alpha));
        Self { reynolds, samples }
    }

    /// Coefficient at `alpha`, clamped to the end samples outside the curve.
    pub fn coefficient_at(&self, alpha: Real) -> Real {
        let samples = &self.samples;
        match samples.len() {
            0 => return 0.0,
            1 => return samples[0].coefficient,
            _ => {}
        }

        // First sample with alpha >= query
        let idx = samples.partition_point(|s| s.alpha < alpha);
        if idx == 0 {
            return samples[0].coefficient;
        }
        if idx == samples.len() {
            return samples[samples.len() - 1].coefficient;
        }

        let lo = samples[idx - 1];
        let hi = samples[idx];
        lerp(lo.alpha, hi.alpha, lo.coefficient, hi.coefficient, alpha)
    }
}

/// Immutable lookup table for one coefficient in one flow direction.
///
/// Curves are kept sorted by Reynolds number. Lookups interpolate along alpha
/// within a curve, then linearly between the two curves bracketing the query
/// Reynolds number. Queries outside the stored Reynolds range use the nearest
/// end curve without extrapolating.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AeroCoefficientTable {
    curves: Vec<ReynoldsCurve>,
}

impl AeroCoefficientTable {
    pub fn new(curves: impl IntoIterator<Item = ReynoldsCurve>) -> Self {
        let mut curves: Vec<ReynoldsCurve> = curves.into_iter().collect();
        curves.sort_by(|a, b| a.reynolds.total_cmp(&b.reynolds));
        Self { curves }
    }

    pub fn curves(&self) -> &[ReynoldsCurve] {
        &self.curves
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn coefficient_at(&self, alpha: Real, reynolds: Real) -> Real {
        if self.curves.is_empty() {
            return 0.0;
        }

        // First curve with Re >= query
        let idx = self.curves.partition_point(|c| c.reynolds < reynolds);
        if idx == self.curves.len() {
            return self.curves[idx - 1].coefficient_at(alpha);
        }
        if idx == 0 {
            return self.curves[0].coefficient_at(alpha);
        }

        let lower = &self.curves[idx - 1];
        let upper = &self.curves[idx];

        if lower.samples.len() < 2 || upper.samples.len() < 2 {
            return self.closest_sample(alpha, reynolds);
        }

        let coef1 = lower.coefficient_at(alpha);
        let coef2 = upper.coefficient_at(alpha);
        // Linear in Re, not log(Re)
        lerp(lower.reynolds, upper.reynolds, coef1, coef2, reynolds)
    }

    /// Coefficient of the sample nearest to `(alpha, log10 Re)` over every curve.
    fn closest_sample(&self, alpha: Real, reynolds: Real) -> Real {
        let mut min_distance = Real::MAX;
        let mut closest = 0.0;

        for curve in &self.curves {
            let re_distance = (reynolds / curve.reynolds).log10();
            for sample in &curve.samples {
                let alpha_distance = alpha - sample.alpha;
                let distance = (alpha_distance * alpha_distance + re_distance * re_distance).sqrt();
                if distance < min_distance {
                    min_distance = distance;
                    closest = sample.coefficient;
                }
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_curve_table() -> AeroCoefficientTable {
        AeroCoefficientTable::new([
            ReynoldsCurve::new(2e5, [(0.0, 1.0), (0.2, 2.0)]),
            ReynoldsCurve::new(1e5, [(0.2, 0.0), (0.0, -1.0)]),
        ])
    }

    #[test]
    fn empty_table_returns_zero() {
        let table = AeroCoefficientTable::default();
        assert!(table.is_empty());
        assert_eq!(table.coefficient_at(0.1, 1e6), 0.0);
    }

    #[test]
    fn curves_and_samples_are_sorted_on_construction() {
        let table = two_curve_table();
        assert_eq!(table.curves()[0].reynolds, 1e5);
        assert_eq!(table.curves()[0].samples[0].alpha, 0.0);
        assert_eq!(table.curves()[0].samples[0].coefficient, -1.0);
    }

    #[test]
    fn alpha_interpolation_and_clamping() {
        let curve = ReynoldsCurve::new(1e6, [(0.0, 0.0), (1.0, 2.0)]);
        assert_eq!(curve.coefficient_at(0.5), 1.0);
        assert_eq!(curve.coefficient_at(-3.0), 0.0);
        assert_eq!(curve.coefficient_at(7.0), 2.0);
    }

    #[test]
    fn single_sample_curve_is_constant() {
        let curve = ReynoldsCurve::new(1e6, [(0.3, 0.42)]);
        assert_eq!(curve.coefficient_at(-1.0), 0.42);
        assert_eq!(curve.coefficient_at(5.0), 0.42);
    }

    #[test]
    fn reynolds_outside_range_uses_end_curve() {
        let table = two_curve_table();
        assert_eq!(table.coefficient_at(0.1, 1.0), -0.5);
        assert_eq!(table.coefficient_at(0.1, 1e9), 1.5);
        // Negative Reynolds (reversed flow) falls below the lowest curve
        assert_eq!(table.coefficient_at(0.1, -5e4), -0.5);
    }

    #[test]
    fn reynolds_interpolation_is_linear_not_logarithmic() {
        let table = two_curve_table();
        // Midway in linear Re between 1e5 and 2e5
        let c = table.coefficient_at(0.1, 1.5e5);
        assert!((c - 0.5).abs() < 1e-12);
        // A log-scale blend would give a different value at the geometric mean
        let geometric_mean = (1e5_f64 * 2e5).sqrt();
        let c = table.coefficient_at(0.1, geometric_mean);
        let linear = -0.5 + 2.0 * (geometric_mean - 1e5) / 1e5;
        assert!((c - linear).abs() < 1e-12);
        assert!((c - 0.5).abs() > 1e-3);
    }

    #[test]
    fn sparse_bracket_falls_back_to_nearest_sample() {
        let table = AeroCoefficientTable::new([
            ReynoldsCurve::new(1e5, [(0.0, 0.1), (0.2, 0.3)]),
            ReynoldsCurve::new(1e6, [(0.5, 9.0)]),
        ]);
        // Re = 2e5: log-distance to 1e5 ≈ 0.30, to 1e6 ≈ 0.70
        assert_eq!(table.coefficient_at(0.19, 2e5), 0.3);
        // Re = 9e5 with alpha near the lone sample picks it
        assert_eq!(table.coefficient_at(0.5, 9e5), 9.0);
    }

    #[test]
    fn exact_sample_round_trip_on_single_curve() {
        let samples = [(-0.2, -0.5), (0.0, 0.1), (0.1, 0.4), (0.35, 0.9)];
        let table = AeroCoefficientTable::new([ReynoldsCurve::new(5e5, samples)]);
        for (alpha, coef) in samples {
            assert!((table.coefficient_at(alpha, 5e5) - coef).abs() < 1e-12);
            assert!((table.coefficient_at(alpha, 3e4) - coef).abs() < 1e-12);
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lookup_stays_within_sample_bounds(
            coefs in prop::collection::vec(-2.0_f64..2.0, 2..12),
            alpha in -1.5_f64..1.5,
            reynolds in 1e3_f64..1e7,
        ) {
            let n = coefs.len();
            let samples: Vec<(f64, f64)> = coefs
                .iter()
                .enumerate()
                .map(|(i, &c)| (-1.0 + 2.0 * i as f64 / (n - 1) as f64, c))
                .collect();
            let shifted: Vec<(f64, f64)> = samples.iter().map(|&(a, c)| (a, c * 0.5)).collect();
            let table = AeroCoefficientTable::new([
                ReynoldsCurve::new(1e4, samples),
                ReynoldsCurve::new(1e6, shifted),
            ]);

            let lo = coefs.iter().cloned().fold(f64::INFINITY, f64::min).min(0.0);
            let hi = coefs.iter().cloned().fold(f64::NEG_INFINITY, f64::max).max(0.0);
            let c = table.coefficient_at(alpha, reynolds);
            prop_assert!(c >= lo - 1e-12 && c <= hi + 1e-12);
        }
    }
}

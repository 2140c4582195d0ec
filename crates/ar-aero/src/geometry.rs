//! Spanwise blade geometry.

use ar_core::Real;

/// Number of spanwise control points (0%, 10%, ..., 100% of the blade span).
pub const CONTROL_POINTS: usize = 11;

/// Values sampled at each span control point, hub first.
pub type SpanTable = [Real; CONTROL_POINTS];

/// Chord and pitch distribution of one blade between hub and tip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BladeGeometry {
    pub hub_radius: Real,
    pub propeller_radius: Real,
    /// Chord length per control point (m)
    pub chord: SpanTable,
    /// Geometric pitch per control point (rad)
    pub pitch: SpanTable,
}

impl BladeGeometry {
    pub fn span(&self) -> Real {
        self.propeller_radius - self.hub_radius
    }

    /// Fraction of the span covered at radius `r`, clamped to `[0, 1]`.
    pub fn span_fraction(&self, r: Real) -> Real {
        ((r - self.hub_radius) / self.span()).clamp(0.0, 1.0)
    }

    pub fn chord_at(&self, r: Real) -> Real {
        interpolate_span(&self.chord, self.span_fraction(r))
    }

    pub fn pitch_at(&self, r: Real) -> Real {
        interpolate_span(&self.pitch, self.span_fraction(r))
    }
}

/// Piecewise-linear lookup of `table` at span fraction `t` in `[0, 1]`.
pub fn interpolate_span(table: &SpanTable, t: Real) -> Real {
    let last = CONTROL_POINTS - 1;
    let index = t * last as Real;
    let i = index.floor() as usize;
    if i >= last {
        return table[last];
    }
    let frac = index - i as Real;
    table[i] * (1.0 - frac) + table[i + 1] * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> BladeGeometry {
        let mut chord = [0.0; CONTROL_POINTS];
        let mut pitch = [0.0; CONTROL_POINTS];
        for i in 0..CONTROL_POINTS {
            chord[i] = 0.1 * i as Real;
            pitch[i] = 1.0 - 0.05 * i as Real;
        }
        BladeGeometry {
            hub_radius: 0.5,
            propeller_radius: 1.5,
            chord,
            pitch,
        }
    }

    #[test]
    fn control_points_are_hit_exactly() {
        let g = ramp();
        assert_eq!(g.chord_at(0.5), 0.0);
        assert_eq!(g.chord_at(1.5), 1.0);
        assert!((g.chord_at(1.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn between_control_points_is_linear() {
        let g = ramp();
        // 15% span: halfway between points 1 and 2
        assert!((g.chord_at(0.65) - 0.15).abs() < 1e-12);
        assert!((g.pitch_at(0.65) - 0.925).abs() < 1e-12);
    }

    #[test]
    fn outside_span_is_clamped() {
        let g = ramp();
        assert_eq!(g.chord_at(0.0), g.chord[0]);
        assert_eq!(g.pitch_at(10.0), g.pitch[CONTROL_POINTS - 1]);
    }

    #[test]
    fn last_segment_returns_tip_value() {
        let mut table = [0.0; CONTROL_POINTS];
        table[CONTROL_POINTS - 1] = 7.0;
        assert_eq!(interpolate_span(&table, 1.0), 7.0);
    }
}

//! Piecewise-linear range mapping with endpoint clamping.

use crate::error::{ConfigError, Result};
use crate::progress::Progress;
use smallvec::SmallVec;

/// One `(input, output)` pair of an interpolation table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint {
    pub input: f32,
    pub output: f32,
}

impl Breakpoint {
    #[inline]
    pub const fn new(input: f32, output: f32) -> Self {
        Self { input, output }
    }
}

impl From<(f32, f32)> for Breakpoint {
    fn from((input, output): (f32, f32)) -> Self {
        Self { input, output }
    }
}

/// Validated breakpoint table. Inputs strictly increase; at least two entries.
///
/// Most tables in this crate have two or three entries, so they stay inline.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeMapper {
    points: SmallVec<[Breakpoint; 4]>,
}

impl RangeMapper {
    /// Build from `(input, output)` pairs.
    pub fn new(points: impl IntoIterator<Item = (f32, f32)>) -> Result<Self> {
        let points: SmallVec<[Breakpoint; 4]> = points.into_iter().map(Breakpoint::from).collect();
        if points.len() < 2 {
            return Err(ConfigError::TooFewBreakpoints { len: points.len() });
        }
        for (i, p) in points.iter().enumerate() {
            if !p.input.is_finite() || !p.output.is_finite() {
                return Err(ConfigError::NonFinite { field: "breakpoint" });
            }
            if i > 0 && !(points[i - 1].input < p.input) {
                return Err(ConfigError::UnsortedBreakpoints { index: i });
            }
        }
        Ok(Self { points })
    }

    /// Two-point table, the common case.
    pub fn linear(in0: f32, in1: f32, out0: f32, out1: f32) -> Result<Self> {
        Self::new([(in0, out0), (in1, out1)])
    }

    pub fn points(&self) -> &[Breakpoint] {
        &self.points
    }

    /// Interpolate `value` through the table, clamping outside its input range.
    pub fn map(&self, value: f32) -> f32 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if value.is_nan() || value <= first.input {
            return first.output;
        }
        if value >= last.input {
            return last.output;
        }
        // first index whose input exceeds `value`; always in 1..len here
        let hi = self.points.partition_point(|p| p.input <= value);
        let a = self.points[hi - 1];
        let b = self.points[hi];
        a.output + (b.output - a.output) * (value - a.input) / (b.input - a.input)
    }

    #[inline]
    pub fn map_progress(&self, progress: Progress) -> f32 {
        self.map(progress.get())
    }
}

/// Clamped two-point mapping for ad hoc domains (pointer pixels, viewport sizes).
///
/// A degenerate input window yields `out0` rather than dividing by zero.
#[inline]
pub fn map_range(value: f32, input: (f32, f32), output: (f32, f32)) -> f32 {
    let (in0, in1) = input;
    let (out0, out1) = output;
    let span = in1 - in0;
    if span == 0.0 || !span.is_finite() || value.is_nan() {
        return out0;
    }
    let t = ((value - in0) / span).clamp(0.0, 1.0);
    out0 + (out1 - out0) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_point_table_picks_the_bracketing_pair() {
        let m = RangeMapper::new([(0.0, 0.0), (0.5, 10.0), (1.0, 0.0)]).unwrap();
        assert_eq!(m.map(0.25), 5.0);
        assert_eq!(m.map(0.5), 10.0);
        assert_eq!(m.map(0.75), 5.0);
    }

    #[test]
    fn duplicate_inputs_are_rejected() {
        let err = RangeMapper::new([(0.0, 0.0), (0.5, 1.0), (0.5, 2.0)]).unwrap_err();
        assert_eq!(err, ConfigError::UnsortedBreakpoints { index: 2 });
    }

    #[test]
    fn single_breakpoint_is_rejected() {
        let err = RangeMapper::new([(0.0, 1.0)]).unwrap_err();
        assert_eq!(err, ConfigError::TooFewBreakpoints { len: 1 });
    }

    #[test]
    fn map_range_handles_inverted_output_and_empty_input() {
        assert_eq!(map_range(0.0, (0.0, 100.0), (8.0, -8.0)), 8.0);
        assert_eq!(map_range(100.0, (0.0, 100.0), (8.0, -8.0)), -8.0);
        assert_eq!(map_range(42.0, (0.0, 0.0), (3.0, 9.0)), 3.0);
    }
}

//! Validated numeric sampling range
//!
//! A [`NumericRange`] is a closed interval `[min, max]` walked in increments
//! of `step`. Values are produced by repeated addition, so accumulated
//! rounding error is accepted rather than corrected: the last produced value
//! is the largest `min + step + step + ...` that is still `<= max`.

use crate::EvalError;
use std::fmt;

/// Number of intervals used when no step is given
pub const DEFAULT_SUBDIVISIONS: f64 = 1000.0;

/// Immutable closed interval with a positive step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    min: f64,
    max: f64,
    step: f64,
}

impl NumericRange {
    /// Create a validated range
    ///
    /// # Errors
    /// `EvalError::InvalidRange` if any value is NaN or infinite, if
    /// `min >= max`, or if `step <= 0`.
    ///
    /// A step too small to move a value in `f64` arithmetic is accepted;
    /// [`NumericRange::values`] then ends at the first value it cannot
    /// advance past.
    ///
    /// # Example
    /// ```
    /// use graphcalc::NumericRange;
    ///
    /// let range = NumericRange::new(-1.0, 1.0, 0.5).unwrap();
    /// let values: Vec<f64> = range.values().collect();
    /// assert_eq!(values, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    ///
    /// assert!(NumericRange::new(1.0, 1.0, 0.1).is_err());
    /// assert!(NumericRange::new(0.0, 1.0, 0.0).is_err());
    /// ```
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, EvalError> {
        let invalid = |reason| EvalError::InvalidRange {
            min,
            max,
            step,
            reason,
        };

        if !min.is_finite() || !max.is_finite() || !step.is_finite() {
            return Err(invalid("bounds and step must be finite numbers"));
        }
        if min >= max {
            return Err(invalid("min must be less than max"));
        }
        if step <= 0.0 {
            return Err(invalid("step must be positive"));
        }
        Ok(Self { min, max, step })
    }

    /// Build a range from parts already known to be valid
    pub(crate) const fn from_parts(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Create a range split into 1000 equal steps
    pub fn with_default_step(min: f64, max: f64) -> Result<Self, EvalError> {
        Self::new(min, max, (max - min) / DEFAULT_SUBDIVISIONS)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Width of the interval, `max - min`
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Nominal number of sample points, `ceil((max - min) / step) + 1`
    ///
    /// This is the count for exact arithmetic; [`NumericRange::values`] may
    /// produce one fewer when rounding pushes the final value past `max`.
    pub fn point_count(&self) -> usize {
        (self.span() / self.step).ceil() as usize + 1
    }

    /// Check whether `value` lies inside `[min, max]`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Lazy sequence of sample abscissas; every call starts over at `min`
    pub fn values(&self) -> RangeValues {
        RangeValues {
            next: self.min,
            max: self.max,
            step: self.step,
            done: false,
        }
    }

    pub fn with_min(&self, min: f64) -> Result<Self, EvalError> {
        Self::new(min, self.max, self.step)
    }

    pub fn with_max(&self, max: f64) -> Result<Self, EvalError> {
        Self::new(self.min, max, self.step)
    }

    pub fn with_step(&self, step: f64) -> Result<Self, EvalError> {
        Self::new(self.min, self.max, step)
    }
}

impl fmt::Display for NumericRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] step {}", self.min, self.max, self.step)
    }
}

impl IntoIterator for &NumericRange {
    type Item = f64;
    type IntoIter = RangeValues;

    fn into_iter(self) -> RangeValues {
        self.values()
    }
}

/// Iterator over the values of a [`NumericRange`]
#[derive(Debug, Clone)]
pub struct RangeValues {
    next: f64,
    max: f64,
    step: f64,
    done: bool,
}

impl Iterator for RangeValues {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.done || self.next > self.max {
            self.done = true;
            return None;
        }
        let current = self.next;
        self.next = current + self.step;
        // Guard against a step that stops advancing far from the origin
        if self.next <= current {
            self.done = true;
        }
        Some(current)
    }
}

impl std::iter::FusedIterator for RangeValues {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_ranges() {
        assert!(NumericRange::new(2.0, 1.0, 0.1).is_err());
        assert!(NumericRange::new(1.0, 1.0, 0.1).is_err());
        assert!(NumericRange::new(0.0, 1.0, -0.1).is_err());
        assert!(NumericRange::new(f64::NAN, 1.0, 0.1).is_err());
        assert!(NumericRange::new(0.0, f64::INFINITY, 0.1).is_err());
        assert!(NumericRange::new(0.0, 1.0, f64::NAN).is_err());

        match NumericRange::new(0.0, 1.0, 0.0) {
            Err(EvalError::InvalidRange { reason, .. }) => {
                assert_eq!(reason, "step must be positive")
            }
            other => panic!("expected InvalidRange, got {:?}", other),
        }
    }

    #[test]
    fn test_values_start_at_min_and_stay_below_max() {
        let range = NumericRange::new(-2.0, 2.0, 0.1).unwrap();
        let values: Vec<f64> = range.values().collect();
        assert_eq!(values[0], -2.0);
        assert!(*values.last().unwrap() <= 2.0);
        for pair in values.windows(2) {
            assert!(pair[1] > pair[0]);
            assert!((pair[1] - pair[0] - 0.1).abs() < 1e-9);
        }
        assert!(values.len() == 40 || values.len() == 41);
    }

    #[test]
    fn test_large_magnitude_with_small_step() {
        // 1.0 is below half an ulp at 1e20, so the walk stalls at min
        let range = NumericRange::new(1e20, 2e20, 1.0).unwrap();
        assert_eq!(range.min(), 1e20);
        assert_eq!(range.values().collect::<Vec<_>>(), vec![1e20]);

        let range = NumericRange::new(1e16, 2e16, 0.1).unwrap();
        assert_eq!(range.values().count(), 1);
    }

    #[test]
    fn test_values_are_restartable() {
        let range = NumericRange::new(0.0, 1.0, 0.25).unwrap();
        let first: Vec<f64> = range.values().collect();
        let second: Vec<f64> = (&range).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_step_larger_than_span() {
        let range = NumericRange::new(0.0, 1.0, 5.0).unwrap();
        assert_eq!(range.values().collect::<Vec<_>>(), vec![0.0]);
        assert_eq!(range.point_count(), 2);
    }

    #[test]
    fn test_point_count() {
        let range = NumericRange::new(-2.0, 2.0, 1.0).unwrap();
        assert_eq!(range.point_count(), 5);
        assert_eq!(range.values().count(), 5);
    }

    #[test]
    fn test_default_step_and_withers() {
        let range = NumericRange::with_default_step(0.0, 10.0).unwrap();
        assert!((range.step() - 0.01).abs() < 1e-15);

        let narrowed = range.with_min(5.0).unwrap();
        assert_eq!(narrowed.min(), 5.0);
        assert_eq!(narrowed.max(), 10.0);
        assert!(range.with_max(-1.0).is_err());
        assert!(range.with_step(0.0).is_err());
        assert_eq!(range.with_step(2.0).unwrap().values().count(), 6);
    }

    #[test]
    fn test_display() {
        let range = NumericRange::new(-1.0, 1.0, 0.1).unwrap();
        assert_eq!(range.to_string(), "[-1, 1] step 0.1");
    }
}

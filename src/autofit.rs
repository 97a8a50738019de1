//! Display Y-range fitting from sampled points

use crate::{NumericRange, SamplePoint};

/// Default fraction of the Y span added above and below
pub const DEFAULT_PADDING_FACTOR: f64 = 0.1;

/// Display granularity of a fitted Y-range, independent of its span
pub const DISPLAY_STEP: f64 = 0.1;

/// Range returned when there is nothing to fit
fn fallback_range() -> NumericRange {
    NumericRange::from_parts(-1.0, 1.0, DISPLAY_STEP)
}

/// Fit a padded Y-range around the finite `y` values of `points`
///
/// Both ends are pushed out by `(y_max - y_min) * padding_factor`; a
/// negative factor pulls them in. When that interval is not a valid range
/// (all values equal, a factor that crosses the ends over, a non-finite
/// padding) the range is `[y_min - 1, y_max + 1]`, with the unit scaled up
/// for values too large for `1.0` to register. With no finite values, or
/// when even that overflows, the range is `[-1, 1]`. The step is always
/// [`DISPLAY_STEP`].
///
/// # Example
/// ```
/// use graphcalc::{SamplePoint, auto_y_range};
///
/// let points = [SamplePoint::new(0.0, 2.0), SamplePoint::new(1.0, 4.0)];
/// let range = auto_y_range(&points, 0.1);
/// assert!((range.min() - 1.8).abs() < 1e-12);
/// assert!((range.max() - 4.2).abs() < 1e-12);
/// assert_eq!(range.step(), 0.1);
/// ```
pub fn auto_y_range(points: &[SamplePoint], padding_factor: f64) -> NumericRange {
    let bounds = points
        .iter()
        .map(|p| p.y)
        .filter(|y| y.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, y| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        });

    let Some((y_min, y_max)) = bounds else {
        return fallback_range();
    };

    let padding = (y_max - y_min) * padding_factor;
    let unit = (y_min.abs().max(y_max.abs()) * f64::EPSILON).max(1.0);

    NumericRange::new(y_min - padding, y_max + padding, DISPLAY_STEP)
        .or_else(|_| NumericRange::new(y_min - unit, y_max + unit, DISPLAY_STEP))
        .unwrap_or_else(|err| {
            tracing::debug!(error = %err, y_min, y_max, "y-range not representable, using default");
            fallback_range()
        })
}

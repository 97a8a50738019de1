use super::bisection::{Bisection, bisect};
use super::{SearchOptions, sign};
use crate::evaluator::Evaluator;
use crate::sampler::sample_with;
use crate::{Bindings, Expr, NumericRange, SamplePoint};

/// Central-difference derivative of `expr` at `x` with step `h`
///
/// `None` when either shifted evaluation has no value.
fn derivative(evaluator: &mut Evaluator, expr: &Expr, var: &str, x: f64, h: f64) -> Option<f64> {
    let forward = evaluator.evaluate_finite(expr, var, x + h)?;
    let backward = evaluator.evaluate_finite(expr, var, x - h)?;
    Some((forward - backward) / (2.0 * h))
}

/// Locate the local minima and maxima of `expr` over `range`
///
/// A sample whose neighbouring secant slopes are both within `precision` of
/// zero is reported as a flat extremum. Elsewhere a change of slope sign
/// marks a candidate, refined by bisecting the numerical derivative.
///
/// # Example
/// ```
/// use graphcalc::{Expr, NumericRange, find_extrema};
///
/// let x = Expr::variable("x");
/// let range = NumericRange::new(-2.0, 2.0, 0.1).unwrap();
/// let extrema = find_extrema(&(x.clone() * x), "x", &range, 0.01);
/// assert_eq!(extrema.len(), 1);
/// assert!(extrema[0].x.abs() < 0.01 && extrema[0].y.abs() < 0.01);
/// ```
pub fn find_extrema(
    expr: &Expr,
    var: &str,
    range: &NumericRange,
    precision: f64,
) -> Vec<SamplePoint> {
    find_extrema_with(
        expr,
        var,
        range,
        &Bindings::new(),
        SearchOptions::with_precision(precision),
    )
}

/// [`find_extrema`] with extra bindings and an explicit iteration budget
pub fn find_extrema_with(
    expr: &Expr,
    var: &str,
    range: &NumericRange,
    bindings: &Bindings,
    options: SearchOptions,
) -> Vec<SamplePoint> {
    let samples: Vec<SamplePoint> = sample_with(expr, var, range, bindings.clone()).collect();
    if samples.len() < 3 {
        return Vec::new();
    }

    let precision = options.precision;
    let mut evaluator = Evaluator::with_bindings(bindings.clone());
    let mut extrema = Vec::new();
    let mut last_refined: Option<f64> = None;

    for triple in samples.windows(3) {
        let (prev, current, next) = (triple[0], triple[1], triple[2]);

        let slope_left = (current.y - prev.y) / (current.x - prev.x);
        let slope_right = (next.y - current.y) / (next.x - current.x);
        if !slope_left.is_finite() || !slope_right.is_finite() {
            continue;
        }

        if slope_left.abs() <= precision && slope_right.abs() <= precision {
            extrema.push(current);
            continue;
        }

        // A zero right slope belongs to this triple, a zero left slope to the previous one
        let turns = (slope_left < 0.0 && slope_right >= 0.0) || (slope_left > 0.0 && slope_right <= 0.0);
        if !turns {
            continue;
        }

        let h = precision.max((next.x - prev.x).abs() / 100.0);
        let d_prev = derivative(&mut evaluator, expr, var, prev.x, h);
        let d_next = derivative(&mut evaluator, expr, var, next.x, h);

        let refined = match (d_prev, d_next) {
            (Some(da), Some(db)) if sign(da) != sign(db) => bisect(
                |x| derivative(&mut evaluator, expr, var, x, h),
                prev.x,
                next.x,
                da,
                db,
                options,
            ),
            _ => Bisection::Undefined,
        };
        let x = refined.estimate().unwrap_or(current.x);

        if last_refined.is_some_and(|seen| (seen - x).abs() <= precision) {
            continue;
        }

        match evaluator.evaluate_finite(expr, var, x) {
            Some(y) => {
                extrema.push(SamplePoint::new(x, y));
                last_refined = Some(x);
            }
            None => tracing::trace!(x, "extremum candidate has no value"),
        }
    }

    tracing::debug!(%range, samples = samples.len(), extrema = extrema.len(), "extremum search finished");
    extrema
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn x() -> Expr {
        Expr::variable("x")
    }

    #[test]
    fn test_parabola_minimum() {
        let range = NumericRange::new(-2.0, 2.0, 0.1).unwrap();
        let extrema = find_extrema(&(x() * x()), "x", &range, 0.01);
        assert_eq!(extrema.len(), 1);
        assert!(extrema[0].x.abs() < 0.01);
        assert!(extrema[0].y.abs() < 0.01);
    }

    #[test]
    fn test_extremum_on_grid_point() {
        // Vertex at x = 1 coincides with a sample
        let expr = Expr::number(3.0) - (x() - 1.0) * (x() - 1.0);
        let range = NumericRange::new(-1.0, 3.0, 0.5).unwrap();
        let extrema = find_extrema(&expr, "x", &range, 0.001);
        assert_eq!(extrema.len(), 1);
        assert!((extrema[0].x - 1.0).abs() < 0.001);
        assert!((extrema[0].y - 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_extremum_between_symmetric_samples() {
        // Vertex at 0 falls exactly between the samples -0.25 and 0.25
        let range = NumericRange::new(-1.25, 1.25, 0.5).unwrap();
        let extrema = find_extrema(&(x() * x()), "x", &range, 0.001);
        assert_eq!(extrema.len(), 1);
        assert!(extrema[0].x.abs() < 0.01);
    }

    #[test]
    fn test_sine_extrema() {
        let range = NumericRange::new(0.0, 2.0 * PI, 0.05).unwrap();
        let extrema = find_extrema(&Expr::func("sin", x()), "x", &range, 1e-4);
        assert_eq!(extrema.len(), 2);
        assert!((extrema[0].x - PI / 2.0).abs() < 1e-3);
        assert!((extrema[0].y - 1.0).abs() < 1e-6);
        assert!((extrema[1].x - 3.0 * PI / 2.0).abs() < 1e-3);
        assert!((extrema[1].y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic_has_no_extrema() {
        let range = NumericRange::new(-2.0, 2.0, 0.1).unwrap();
        assert!(find_extrema(&(x() * 3.0 + 1.0), "x", &range, 0.001).is_empty());
    }

    #[test]
    fn test_constant_is_flat_everywhere() {
        let range = NumericRange::new(0.0, 1.0, 0.25).unwrap();
        let extrema = find_extrema(&Expr::number(5.0), "x", &range, 0.001);
        // Every interior sample is flat
        assert_eq!(extrema.len(), 3);
        assert!(extrema.iter().all(|p| p.y == 5.0));
    }

    #[test]
    fn test_too_few_samples() {
        let range = NumericRange::new(0.0, 1.0, 0.5).unwrap();
        // sqrt(x - 0.6) only defined on the last sample
        let expr = Expr::func("sqrt", x() - 0.6);
        assert!(find_extrema(&expr, "x", &range, 0.001).is_empty());
    }
}

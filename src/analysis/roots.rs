use super::bisection::{Bisection, bisect};
use super::{SearchOptions, sign};
use crate::evaluator::Evaluator;
use crate::sampler::sample_with;
use crate::{Bindings, Expr, NumericRange, SamplePoint};

/// Locate the zero-crossings of `expr` over `range`
///
/// Every returned point has `y == 0.0`. Roots come out in increasing `x`.
/// Intervals whose refinement runs into an undefined value contribute nothing.
///
/// # Example
/// ```
/// use graphcalc::{Expr, NumericRange, find_roots};
///
/// let range = NumericRange::new(-1.0, 1.0, 0.5).unwrap();
/// let roots = find_roots(&Expr::variable("x"), "x", &range, 0.001);
/// assert_eq!(roots.len(), 1);
/// assert!(roots[0].x.abs() <= 0.001);
/// ```
pub fn find_roots(expr: &Expr, var: &str, range: &NumericRange, precision: f64) -> Vec<SamplePoint> {
    find_roots_with(
        expr,
        var,
        range,
        &Bindings::new(),
        SearchOptions::with_precision(precision),
    )
}

/// [`find_roots`] with extra bindings and an explicit iteration budget
pub fn find_roots_with(
    expr: &Expr,
    var: &str,
    range: &NumericRange,
    bindings: &Bindings,
    options: SearchOptions,
) -> Vec<SamplePoint> {
    let samples: Vec<SamplePoint> = sample_with(expr, var, range, bindings.clone()).collect();
    if samples.len() < 2 {
        return Vec::new();
    }

    let precision = options.precision;
    let mut evaluator = Evaluator::with_bindings(bindings.clone());
    let mut roots = Vec::new();

    for pair in samples.windows(2) {
        let (current, next) = (pair[0], pair[1]);

        if current.y.abs() <= precision {
            roots.push(SamplePoint::root(current.x));
            continue;
        }
        // A near-zero right endpoint is reported on its own turn
        if next.y.abs() <= precision || sign(current.y) == sign(next.y) {
            continue;
        }

        let outcome = bisect(
            |x| evaluator.evaluate_finite(expr, var, x),
            current.x,
            next.x,
            current.y,
            next.y,
            options,
        );
        match outcome {
            Bisection::Converged(x) | Bisection::Exhausted(x) => roots.push(SamplePoint::root(x)),
            Bisection::Undefined => {
                tracing::trace!(left = current.x, right = next.x, "sign change without a root");
            }
        }
    }

    if let Some(last) = samples.last()
        && last.y.abs() <= precision
    {
        roots.push(SamplePoint::root(last.x));
    }

    tracing::debug!(%range, samples = samples.len(), roots = roots.len(), "root search finished");
    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Expr {
        Expr::variable("x")
    }

    #[test]
    fn test_identity_single_root() {
        let range = NumericRange::new(-1.0, 1.0, 0.5).unwrap();
        let roots = find_roots(&x(), "x", &range, 0.001);
        assert_eq!(roots.len(), 1);
        assert!(roots[0].x.abs() <= 0.001);
        assert_eq!(roots[0].y, 0.0);
    }

    #[test]
    fn test_root_between_samples() {
        // x^2 - 2 has roots at ±sqrt(2), neither on the grid
        let expr = x() * x() - 2.0;
        let range = NumericRange::new(-3.0, 3.0, 0.5).unwrap();
        let roots = find_roots(&expr, "x", &range, 1e-6);
        assert_eq!(roots.len(), 2);
        assert!((roots[0].x + 2.0_f64.sqrt()).abs() < 1e-5);
        assert!((roots[1].x - 2.0_f64.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn test_root_on_last_sample() {
        let expr = x() - 1.0;
        let range = NumericRange::new(0.0, 1.0, 0.25).unwrap();
        let roots = find_roots(&expr, "x", &range, 0.001);
        assert_eq!(roots, vec![SamplePoint::root(1.0)]);
    }

    #[test]
    fn test_no_sign_change_no_roots() {
        let expr = x() * x() + 1.0;
        let range = NumericRange::new(-2.0, 2.0, 0.1).unwrap();
        assert!(find_roots(&expr, "x", &range, 0.001).is_empty());
    }

    #[test]
    fn test_pole_is_not_a_root() {
        // 1/x flips sign across 0, but the midpoint 0 is undefined
        let expr = Expr::number(1.0) / x();
        let range = NumericRange::new(-1.0, 1.0, 0.5).unwrap();
        assert!(find_roots(&expr, "x", &range, 0.001).is_empty());
    }

    #[test]
    fn test_too_few_samples() {
        let range = NumericRange::new(-1.0, 1.0, 5.0).unwrap();
        assert!(find_roots(&x(), "x", &range, 0.001).is_empty());

        let range = NumericRange::new(-1.0, 1.0, 0.5).unwrap();
        assert!(find_roots(&Expr::variable("y"), "x", &range, 0.001).is_empty());
    }

    #[test]
    fn test_sine_roots() {
        let expr = Expr::func("sin", x());
        let range = NumericRange::new(-4.0, 4.0, 0.1).unwrap();
        let roots = find_roots(&expr, "x", &range, 1e-6);
        let expected = [-std::f64::consts::PI, 0.0, std::f64::consts::PI];
        assert_eq!(roots.len(), expected.len());
        for (root, want) in roots.iter().zip(expected) {
            assert!((root.x - want).abs() < 1e-5, "{} vs {}", root.x, want);
        }
    }
}

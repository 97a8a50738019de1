use super::{SearchOptions, sign};
use crate::evaluator::Evaluator;
use crate::{Bindings, Expr};

/// Outcome of bisecting one interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bisection {
    /// Half-width or function value fell within the precision
    Converged(f64),
    /// The iteration cap was reached; holds the midpoint of the last interval
    Exhausted(f64),
    /// The function had no value at an endpoint or midpoint, or the endpoints
    /// do not bracket a sign change
    Undefined,
}

impl Bisection {
    /// Best estimate of the crossing, whether or not it converged
    pub fn estimate(self) -> Option<f64> {
        match self {
            Bisection::Converged(x) | Bisection::Exhausted(x) => Some(x),
            Bisection::Undefined => None,
        }
    }

    pub fn is_converged(self) -> bool {
        matches!(self, Bisection::Converged(_))
    }
}

/// Halve `[left, right]` until `f` changes sign within the precision
///
/// `f_left` and `f_right` are the already-known values at the endpoints.
pub(crate) fn bisect<F>(
    mut f: F,
    mut left: f64,
    mut right: f64,
    mut f_left: f64,
    f_right: f64,
    options: SearchOptions,
) -> Bisection
where
    F: FnMut(f64) -> Option<f64>,
{
    if sign(f_left) == sign(f_right) {
        return Bisection::Undefined;
    }

    for _ in 0..options.max_iterations {
        let mid = (left + right) / 2.0;
        let Some(f_mid) = f(mid) else {
            tracing::trace!(left, right, mid, "bisection hit an undefined midpoint");
            return Bisection::Undefined;
        };

        if f_mid.abs() <= options.precision || (right - left).abs() / 2.0 <= options.precision {
            return Bisection::Converged(mid);
        }

        if sign(f_left) == sign(f_mid) {
            left = mid;
            f_left = f_mid;
        } else {
            right = mid;
        }
    }

    let estimate = (left + right) / 2.0;
    tracing::debug!(
        estimate,
        iterations = options.max_iterations,
        "bisection did not converge"
    );
    Bisection::Exhausted(estimate)
}

/// Locate a zero of `expr` between `left` and `right`
///
/// Unlike [`find_roots`](super::find_roots), which keeps the best estimate
/// silently, this reports whether the search converged.
///
/// # Example
/// ```
/// use graphcalc::{Bindings, Expr};
/// use graphcalc::analysis::{Bisection, SearchOptions, refine_root};
///
/// let expr = Expr::variable("x") * Expr::variable("x") - 2.0;
/// let outcome = refine_root(&expr, "x", 0.0, 2.0, &Bindings::new(), SearchOptions::with_precision(1e-9));
/// let root = outcome.estimate().unwrap();
/// assert!(outcome.is_converged());
/// assert!((root - 2.0_f64.sqrt()).abs() < 1e-8);
/// ```
pub fn refine_root(
    expr: &Expr,
    var: &str,
    left: f64,
    right: f64,
    bindings: &Bindings,
    options: SearchOptions,
) -> Bisection {
    let mut evaluator = Evaluator::with_bindings(bindings.clone());
    let (Some(f_left), Some(f_right)) = (
        evaluator.evaluate_finite(expr, var, left),
        evaluator.evaluate_finite(expr, var, right),
    ) else {
        return Bisection::Undefined;
    };
    bisect(
        |x| evaluator.evaluate_finite(expr, var, x),
        left,
        right,
        f_left,
        f_right,
        options,
    )
}

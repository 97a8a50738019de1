//! Fault-isolated sampling of an expression over a range
//!
//! Every abscissa of the range is evaluated independently. A point whose
//! evaluation fails (unbound variable, unsupported function, wrong arity) or
//! whose value is `NaN`/infinite is dropped, and sampling carries on with the
//! next abscissa. `1/x` over a range through zero yields a curve with a gap,
//! never an error.

use crate::evaluator::Evaluator;
use crate::range::RangeValues;
use crate::{Bindings, Expr, NumericRange, SamplePoint, Series};

/// Lazy iterator of valid sample points, in increasing `x`
pub struct Samples<'a> {
    evaluator: Evaluator,
    expr: &'a Expr,
    var: &'a str,
    values: RangeValues,
    dropped: usize,
}

impl Samples<'_> {
    /// Number of abscissas skipped so far because they had no value
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl Iterator for Samples<'_> {
    type Item = SamplePoint;

    fn next(&mut self) -> Option<SamplePoint> {
        for x in self.values.by_ref() {
            match self.evaluator.evaluate_finite(self.expr, self.var, x) {
                Some(y) => return Some(SamplePoint::new(x, y)),
                None => {
                    tracing::trace!(x, "sample dropped");
                    self.dropped += 1;
                }
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Samples<'_> {}

/// Sample `expr` over `range`, binding each abscissa to `var`
///
/// # Example
/// ```
/// use graphcalc::{Expr, NumericRange, sample};
///
/// let expr = Expr::number(1.0) / Expr::variable("x");
/// let range = NumericRange::new(-1.0, 1.0, 1.0).unwrap();
/// let points: Vec<(f64, f64)> = sample(&expr, "x", &range).map(Into::into).collect();
/// assert_eq!(points, vec![(-1.0, -1.0), (1.0, 1.0)]);
/// ```
pub fn sample<'a>(expr: &'a Expr, var: &'a str, range: &NumericRange) -> Samples<'a> {
    sample_with(expr, var, range, Bindings::new())
}

/// Like [`sample`], with additional variables (e.g. `pi`) bound from `bindings`
pub fn sample_with<'a>(
    expr: &'a Expr,
    var: &'a str,
    range: &NumericRange,
    bindings: Bindings,
) -> Samples<'a> {
    Samples {
        evaluator: Evaluator::with_bindings(bindings),
        expr,
        var,
        values: range.values(),
        dropped: 0,
    }
}

/// Sample into a [`Series`] labelled with `text`
pub fn sample_series(
    expr: &Expr,
    text: impl Into<String>,
    var: &str,
    range: &NumericRange,
    bindings: Bindings,
) -> Series {
    let text = text.into();
    let mut samples = sample_with(expr, var, range, bindings);
    let points: Vec<SamplePoint> = samples.by_ref().collect();
    tracing::debug!(
        expression = %text,
        %range,
        points = points.len(),
        dropped = samples.dropped(),
        "sampled series"
    );
    Series::new(text, points)
}

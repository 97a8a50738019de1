//! Numeric evaluation of expression trees
//!
//! Evaluation is a structural recursion over [`ExprKind`]: both operands of a
//! binary node are evaluated before they are combined, and call arguments are
//! evaluated left-to-right before the function is dispatched.
//!
//! # Example
//! ```
//! use graphcalc::{Bindings, Expr, evaluate};
//!
//! let expr = Expr::func("sin", Expr::variable("x")) * Expr::variable("x") + 2.0;
//! let bindings = Bindings::new().with("x", 0.5);
//! let result = evaluate(&expr, &bindings).unwrap();
//! assert!((result - (0.5_f64.sin() * 0.5 + 2.0)).abs() < 1e-12);
//! ```

use crate::functions::Registry;
use crate::{Bindings, EvalError, Expr, ExprKind};
use std::sync::{Mutex, PoisonError};

/// Evaluate an expression against a set of bindings
///
/// # Errors
/// - `UnknownVariable` if a referenced variable is not bound
/// - `UnsupportedFunction` if a call names a function outside the table
/// - `ArityMismatch` if a function receives the wrong number of arguments
///
/// Division by zero and `sqrt` of a negative number are not errors; they
/// produce `NaN`.
pub fn evaluate(expr: &Expr, bindings: &Bindings) -> Result<f64, EvalError> {
    match &expr.kind {
        ExprKind::Number(n) => Ok(*n),

        ExprKind::Variable(name) => bindings
            .get(name)
            .ok_or_else(|| EvalError::unknown_variable(name.as_str())),

        ExprKind::Binary { op, left, right } => {
            let l = evaluate(left, bindings)?;
            let r = evaluate(right, bindings)?;
            Ok(op.apply(l, r))
        }

        ExprKind::FunctionCall { name, args } => {
            let def = Registry::get(name).ok_or_else(|| EvalError::unsupported_function(name))?;
            let values = args
                .iter()
                .map(|arg| evaluate(arg, bindings))
                .collect::<Result<Vec<f64>, _>>()?;

            if !def.validate_arity(values.len()) {
                return Err(EvalError::ArityMismatch {
                    name: name.clone(),
                    expected: def.expected_arity(),
                    got: values.len(),
                });
            }
            Ok((def.eval)(&values))
        }
    }
}

/// How a batch evaluation reacts to a failed value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Yield the error for that value and keep going
    #[default]
    Continue,
    /// Yield the first error, then end the sequence
    Propagate,
}

/// Reusable evaluator that owns its bindings between calls
///
/// Rebinding the independent variable in place avoids building a fresh
/// bindings map for every sample. Access is through `&mut self`, so one
/// instance is never shared without a lock; see [`SharedEvaluator`].
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    bindings: Bindings,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator whose cache starts from `bindings`
    pub fn with_bindings(bindings: Bindings) -> Self {
        Self { bindings }
    }

    /// Current cached bindings
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Bind `var` to `value` in the cache and evaluate `expr`
    pub fn evaluate_at(&mut self, expr: &Expr, var: &str, value: f64) -> Result<f64, EvalError> {
        self.bindings.rebind(var, value);
        evaluate(expr, &self.bindings)
    }

    /// Evaluate `expr` at `value`, collapsing every failure into `None`
    ///
    /// Structural errors and non-finite results both mean "no value here".
    pub fn evaluate_finite(&mut self, expr: &Expr, var: &str, value: f64) -> Option<f64> {
        match self.evaluate_at(expr, var, value) {
            Ok(y) if y.is_finite() => Some(y),
            Ok(_) => None,
            Err(err) => {
                tracing::trace!(%var, value, error = %err, "evaluation failed");
                None
            }
        }
    }
}

/// An [`Evaluator`] guarded by a lock so it can be shared between threads
///
/// Every bind-then-evaluate step runs under one lock, so concurrent callers
/// never observe each other's variable assignments.
#[derive(Debug, Default)]
pub struct SharedEvaluator {
    inner: Mutex<Evaluator>,
}

impl SharedEvaluator {
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            inner: Mutex::new(evaluator),
        }
    }

    pub fn evaluate_at(&self, expr: &Expr, var: &str, value: f64) -> Result<f64, EvalError> {
        // The cache only holds plain numbers, so a poisoned lock is still usable
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        guard.evaluate_at(expr, var, value)
    }

    pub fn into_inner(self) -> Evaluator {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Lazy sequence of results produced by [`evaluate_batch`]
pub struct BatchEval<'a, I> {
    evaluator: Evaluator,
    expr: &'a Expr,
    var: &'a str,
    values: I,
    policy: ErrorPolicy,
    finished: bool,
}

impl<I: Iterator<Item = f64>> Iterator for BatchEval<'_, I> {
    type Item = Result<f64, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let value = self.values.next()?;
        let result = self.evaluator.evaluate_at(self.expr, self.var, value);
        if result.is_err() && self.policy == ErrorPolicy::Propagate {
            self.finished = true;
        }
        Some(result)
    }
}

/// Evaluate `expr` once per value, substituting each into `var`
///
/// Other variables come from `template`. One result is produced per input
/// value; with [`ErrorPolicy::Propagate`] the sequence ends after the first
/// error.
///
/// # Example
/// ```
/// use graphcalc::{Bindings, ErrorPolicy, Expr, evaluate_batch};
///
/// let expr = Expr::number(1.0) / Expr::variable("x");
/// let results: Vec<f64> = evaluate_batch(&expr, &Bindings::new(), "x", [1.0, 2.0, 4.0], ErrorPolicy::Continue)
///     .map(Result::unwrap)
///     .collect();
/// assert_eq!(results, vec![1.0, 0.5, 0.25]);
/// ```
pub fn evaluate_batch<'a, I>(
    expr: &'a Expr,
    template: &Bindings,
    var: &'a str,
    values: I,
    policy: ErrorPolicy,
) -> BatchEval<'a, I::IntoIter>
where
    I: IntoIterator<Item = f64>,
{
    BatchEval {
        evaluator: Evaluator::with_bindings(template.clone()),
        expr,
        var,
        values: values.into_iter(),
        policy,
        finished: false,
    }
}

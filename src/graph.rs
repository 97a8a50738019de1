//! A graph: an expression of one independent variable over an x-range
//!
//! This is the unit the request layer works with. It bundles the expression
//! text (kept for labelling series), its AST, the independent variable and
//! the sampling range, and offers one-call calculations on top of the
//! sampler and the analysis routines.

use crate::analysis::{SearchOptions, find_extrema_with, find_roots_with};
use crate::autofit::auto_y_range;
use crate::sampler::sample_series;
use crate::visitor::collect_variables;
use crate::{Bindings, EvalError, Expr, NumericRange, SamplePoint, Series};
use std::collections::BTreeSet;

/// Name of the independent variable unless configured otherwise
pub const DEFAULT_VARIABLE: &str = "x";

#[derive(Debug, Clone)]
pub struct Graph {
    text: String,
    expr: Expr,
    variable: String,
    x_range: Option<NumericRange>,
    bindings: Bindings,
}

/// A sampled series together with the ranges it should be displayed in
#[derive(Debug, Clone, PartialEq)]
pub struct GraphCalculation {
    pub series: Series,
    pub x_range: NumericRange,
    pub y_range: NumericRange,
}

impl Graph {
    /// Create a graph of `expr` in the variable `x`
    ///
    /// # Errors
    /// `EvalError::EmptyExpression` if `text` is blank.
    pub fn new(text: impl Into<String>, expr: Expr) -> Result<Self, EvalError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(EvalError::EmptyExpression);
        }
        Ok(Self {
            text,
            expr,
            variable: DEFAULT_VARIABLE.to_string(),
            x_range: None,
            bindings: Bindings::new(),
        })
    }

    /// Use `variable` as the independent variable
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    pub fn with_x_range(mut self, range: NumericRange) -> Self {
        self.x_range = Some(range);
        self
    }

    /// Bind additional constants (e.g. `pi`, or parameters like `a`)
    pub fn with_bindings(mut self, bindings: Bindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn x_range(&self) -> Option<&NumericRange> {
        self.x_range.as_ref()
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    fn require_range(&self) -> Result<&NumericRange, EvalError> {
        self.x_range.as_ref().ok_or(EvalError::MissingRange)
    }

    /// Variables the expression references besides the independent one and
    /// the bound constants
    pub fn free_variables(&self) -> BTreeSet<String> {
        let mut vars = collect_variables(&self.expr);
        vars.retain(|name| name != &self.variable && !self.bindings.contains(name));
        vars
    }

    /// Reject expressions that reference unbound variables
    ///
    /// Sampling would silently drop every point of such an expression; this
    /// lets a request layer report the mistake instead.
    ///
    /// # Errors
    /// `EvalError::UnknownVariable` naming the first unbound variable.
    pub fn validate(&self) -> Result<(), EvalError> {
        match self.free_variables().into_iter().next() {
            Some(name) => Err(EvalError::UnknownVariable { name }),
            None => Ok(()),
        }
    }

    /// Sample the graph over its x-range
    ///
    /// # Errors
    /// `EvalError::MissingRange` if no x-range was set.
    pub fn calculate(&self) -> Result<Series, EvalError> {
        let range = self.require_range()?;
        Ok(sample_series(
            &self.expr,
            self.text.clone(),
            &self.variable,
            range,
            self.bindings.clone(),
        ))
    }

    /// Sample the graph and fit a padded display Y-range to the result
    pub fn calculate_with_auto_y_range(
        &self,
        padding_factor: f64,
    ) -> Result<GraphCalculation, EvalError> {
        let x_range = *self.require_range()?;
        let series = self.calculate()?;
        let y_range = auto_y_range(&series.points, padding_factor);
        Ok(GraphCalculation {
            series,
            x_range,
            y_range,
        })
    }

    pub fn roots(&self, options: SearchOptions) -> Result<Vec<SamplePoint>, EvalError> {
        let range = self.require_range()?;
        Ok(find_roots_with(
            &self.expr,
            &self.variable,
            range,
            &self.bindings,
            options,
        ))
    }

    pub fn extrema(&self, options: SearchOptions) -> Result<Vec<SamplePoint>, EvalError> {
        let range = self.require_range()?;
        Ok(find_extrema_with(
            &self.expr,
            &self.variable,
            range,
            &self.bindings,
            options,
        ))
    }
}

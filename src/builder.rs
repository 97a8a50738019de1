//! Builder pattern API for configuring graph analysis
//!
//! Provides a fluent interface over the sampler, the root and extremum
//! searches and the Y-range fitter, so the tuning knobs live in one place.
//!
//! # Example
//! ```
//! use graphcalc::{Analysis, Expr, NumericRange};
//!
//! let t = Expr::variable("t");
//! let range = NumericRange::new(-3.0, 3.0, 0.25).unwrap();
//! let analysis = Analysis::new().variable("t").precision(1e-6);
//!
//! let roots = analysis.roots(&(t.clone() * t - 2.0), &range);
//! assert_eq!(roots.len(), 2);
//! ```

use crate::analysis::{
    Bisection, DEFAULT_PRECISION, MAX_BISECTION_ITERATIONS, SearchOptions, find_extrema_with,
    find_roots_with, refine_root,
};
use crate::autofit::{DEFAULT_PADDING_FACTOR, auto_y_range};
use crate::graph::{DEFAULT_VARIABLE, Graph};
use crate::sampler::{sample_series, sample_with};
use crate::{Bindings, EvalError, Expr, NumericRange, SamplePoint, Series};

/// Environment variable overriding the default precision
pub const ENV_PRECISION: &str = "GRAPHCALC_PRECISION";
/// Environment variable overriding the default padding factor
pub const ENV_PADDING_FACTOR: &str = "GRAPHCALC_PADDING_FACTOR";
/// Environment variable overriding the bisection iteration cap
pub const ENV_MAX_ITERATIONS: &str = "GRAPHCALC_MAX_ITERATIONS";

/// Everything the analysis operations report for one graph
#[derive(Debug, Clone, PartialEq)]
pub struct GraphReport {
    pub series: Series,
    pub y_range: NumericRange,
    pub roots: Vec<SamplePoint>,
    pub extrema: Vec<SamplePoint>,
}

/// Builder for analysis operations
#[derive(Debug, Clone)]
pub struct Analysis {
    precision: f64,
    padding_factor: f64,
    max_iterations: usize,
    variable: String,
    bindings: Bindings,
}

impl Default for Analysis {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            padding_factor: DEFAULT_PADDING_FACTOR,
            max_iterations: MAX_BISECTION_ITERATIONS,
            variable: DEFAULT_VARIABLE.to_string(),
            bindings: Bindings::new(),
        }
    }
}

/// Read and parse an environment override, ignoring unusable values
fn env_override<T: std::str::FromStr>(key: &str, valid: impl Fn(&T) -> bool) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) if valid(&value) => Some(value),
        _ => {
            tracing::warn!(key, value = %raw, "ignoring invalid environment override");
            None
        }
    }
}

impl Analysis {
    /// Create a builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with defaults overridden by `GRAPHCALC_*` variables
    pub fn from_env() -> Self {
        let mut analysis = Self::default();
        if let Some(p) = env_override::<f64>(ENV_PRECISION, |p| p.is_finite() && *p >= 0.0) {
            analysis.precision = p;
        }
        if let Some(f) = env_override::<f64>(ENV_PADDING_FACTOR, |f| f.is_finite()) {
            analysis.padding_factor = f;
        }
        if let Some(n) = env_override::<usize>(ENV_MAX_ITERATIONS, |n| *n > 0) {
            analysis.max_iterations = n;
        }
        analysis
    }

    /// Tolerance for root and extremum refinement
    pub fn precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    /// Fraction of the Y span added on each side by [`Analysis::auto_y_range`]
    pub fn padding_factor(mut self, factor: f64) -> Self {
        self.padding_factor = factor;
        self
    }

    /// Cap on bisection halvings per interval
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Name of the independent variable (default `x`)
    pub fn variable(mut self, name: impl Into<String>) -> Self {
        self.variable = name.into();
        self
    }

    /// Bind an additional variable to a fixed value
    pub fn bind(mut self, name: impl Into<String>, value: f64) -> Self {
        self.bindings.set(name, value);
        self
    }

    /// Bind `pi` and `e`
    pub fn with_constants(mut self) -> Self {
        for (name, value) in Bindings::with_constants().iter() {
            self.bindings.set(name, value);
        }
        self
    }

    /// Search settings handed to the root and extremum finders
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            precision: self.precision,
            max_iterations: self.max_iterations,
        }
    }

    pub fn sample(&self, expr: &Expr, range: &NumericRange) -> Vec<SamplePoint> {
        sample_with(expr, &self.variable, range, self.bindings.clone()).collect()
    }

    pub fn series(&self, expr: &Expr, text: impl Into<String>, range: &NumericRange) -> Series {
        sample_series(expr, text, &self.variable, range, self.bindings.clone())
    }

    pub fn roots(&self, expr: &Expr, range: &NumericRange) -> Vec<SamplePoint> {
        find_roots_with(expr, &self.variable, range, &self.bindings, self.options())
    }

    pub fn extrema(&self, expr: &Expr, range: &NumericRange) -> Vec<SamplePoint> {
        find_extrema_with(expr, &self.variable, range, &self.bindings, self.options())
    }

    pub fn auto_y_range(&self, points: &[SamplePoint]) -> NumericRange {
        auto_y_range(points, self.padding_factor)
    }

    /// Refine a single root between `left` and `right`, reporting convergence
    pub fn bisect_root(&self, expr: &Expr, left: f64, right: f64) -> Bisection {
        refine_root(
            expr,
            &self.variable,
            left,
            right,
            &self.bindings,
            self.options(),
        )
    }

    /// Build a [`Graph`] using this builder's variable and bindings
    pub fn graph(
        &self,
        text: impl Into<String>,
        expr: Expr,
        range: NumericRange,
    ) -> Result<Graph, EvalError> {
        Ok(Graph::new(text, expr)?
            .with_variable(self.variable.clone())
            .with_bindings(self.bindings.clone())
            .with_x_range(range))
    }

    /// Sample a graph and run every analysis on it
    ///
    /// # Errors
    /// `EvalError::MissingRange` if the graph has no x-range.
    pub fn report(&self, graph: &Graph) -> Result<GraphReport, EvalError> {
        let options = self.options();
        let calculation = graph.calculate_with_auto_y_range(self.padding_factor)?;
        let roots = graph.roots(options)?;
        let extrema = graph.extrema(options)?;
        tracing::debug!(
            expression = graph.text(),
            points = calculation.series.len(),
            roots = roots.len(),
            extrema = extrema.len(),
            "graph analysed"
        );
        Ok(GraphReport {
            series: calculation.series,
            y_range: calculation.y_range,
            roots,
            extrema,
        })
    }
}

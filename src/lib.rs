//! Expression Evaluation and Graph Analysis Library
//!
//! Evaluates single-variable expression trees and analyses their graphs
//! numerically.
//!
//! # Features
//! - Evaluation of pre-built ASTs with variable bindings
//! - Fixed, case-insensitive function table (`sin`, `cos`, `sqrt`, `max`)
//! - Sampling over a validated range, skipping points where the expression is undefined
//! - Root location by bisection between sign changes
//! - Extremum location by bisection on a numerical derivative
//! - Padded Y-range fitting for display
//! - **Builder pattern API** for tuning precision, padding and iteration caps
//! - Parallel analysis of independent graphs (`parallel` feature)
//!
//! # Usage Examples
//!
//! ```
//! use graphcalc::{Expr, NumericRange, auto_y_range, find_extrema, find_roots, sample};
//!
//! // sin(x) * x + 2
//! let x = Expr::variable("x");
//! let expr = Expr::func("sin", x.clone()) * x + 2.0;
//! let range = NumericRange::new(-10.0, 10.0, 0.1).unwrap();
//!
//! let points: Vec<_> = sample(&expr, "x", &range).collect();
//! let y_range = auto_y_range(&points, 0.1);
//! let roots = find_roots(&expr, "x", &range, 0.001);
//! let extrema = find_extrema(&expr, "x", &range, 0.001);
//!
//! assert!(y_range.min() < y_range.max());
//! assert!(roots.iter().all(|r| r.y == 0.0));
//! assert!(!extrema.is_empty());
//! ```
//!
//! Expressions that are undefined somewhere still produce a curve:
//!
//! ```
//! use graphcalc::{Expr, NumericRange, sample};
//!
//! let reciprocal = Expr::number(1.0) / Expr::variable("x");
//! let range = NumericRange::new(-1.0, 1.0, 1.0).unwrap();
//! assert_eq!(sample(&reciprocal, "x", &range).count(), 2);
//! ```

pub mod analysis;
mod ast;
mod autofit;
mod bindings;
mod builder;
mod display;
mod error;
mod evaluator;
pub mod functions;
mod graph;
mod point;
mod range;
mod sampler;
pub mod visitor;

#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use analysis::{Bisection, DEFAULT_PRECISION, SearchOptions, find_extrema, find_roots};
pub use ast::{BinaryOp, Expr, ExprKind};
pub use autofit::{DEFAULT_PADDING_FACTOR, DISPLAY_STEP, auto_y_range};
pub use bindings::Bindings;
pub use builder::{Analysis, GraphReport};
pub use error::{Arity, EvalError};
pub use evaluator::{
    BatchEval, ErrorPolicy, Evaluator, SharedEvaluator, evaluate, evaluate_batch,
};
pub use graph::{DEFAULT_VARIABLE, Graph, GraphCalculation};
pub use point::{SamplePoint, Series};
pub use range::{NumericRange, RangeValues};
pub use sampler::{Samples, sample, sample_series, sample_with};

//! Parallel analysis of independent graphs using Rayon
//!
//! Each graph is sampled and analysed on its own task. Graphs share no
//! evaluator state, so no locking is involved; results come back in input
//! order.
//!
//! Enable with the `parallel` feature:
//! ```toml
//! graphcalc = { version = "0.1", features = ["parallel"] }
//! ```

use crate::{Analysis, EvalError, Graph, GraphReport, SamplePoint, Series};
use rayon::prelude::*;

/// Sample every graph in parallel
///
/// A graph without an x-range yields `Err(EvalError::MissingRange)` in its
/// slot without affecting the others.
pub fn sample_parallel(graphs: &[Graph]) -> Vec<Result<Series, EvalError>> {
    graphs.par_iter().map(Graph::calculate).collect()
}

/// Find the roots of every graph in parallel
pub fn roots_parallel(
    graphs: &[Graph],
    analysis: &Analysis,
) -> Vec<Result<Vec<SamplePoint>, EvalError>> {
    let options = analysis.options();
    graphs.par_iter().map(|g| g.roots(options)).collect()
}

/// Produce a full [`GraphReport`] for every graph in parallel
pub fn analyze_parallel(
    graphs: &[Graph],
    analysis: &Analysis,
) -> Vec<Result<GraphReport, EvalError>> {
    graphs.par_iter().map(|g| analysis.report(g)).collect()
}

//! Numerical graph analysis: root and extremum location
//!
//! Both searches start from the valid samples of the expression over a range
//! and refine every bracketing interval by bisection. Refinement is capped at
//! [`MAX_BISECTION_ITERATIONS`] halvings, so every search is finite.

mod bisection;
mod extrema;
mod roots;

pub use bisection::{Bisection, refine_root};
pub use extrema::{find_extrema, find_extrema_with};
pub use roots::{find_roots, find_roots_with};

/// Default tolerance for roots and extrema
pub const DEFAULT_PRECISION: f64 = 0.001;

/// Upper bound on halvings per bracketed interval
pub const MAX_BISECTION_ITERATIONS: usize = 64;

/// Tolerance and iteration budget shared by the root and extremum searches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// A bisection stops once the half-width or the function value is within this
    pub precision: f64,
    /// Maximum number of halvings per interval
    pub max_iterations: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            max_iterations: MAX_BISECTION_ITERATIONS,
        }
    }
}

impl SearchOptions {
    pub fn with_precision(precision: f64) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }
}

/// Sign of `v` as -1, 0 or 1; `NaN` counts as 0
#[inline]
pub(crate) fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

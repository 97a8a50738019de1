use thiserror::Error;

/// Expected argument count of a function, as reported by `ArityMismatch`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

/// Errors raised by evaluation, range construction and graph calculation
///
/// These are structural errors: the request itself is malformed. Values that
/// are merely undefined at one point (division by zero, `sqrt` of a negative)
/// are not errors; they evaluate to `NaN` and are skipped by the sampler.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("Unknown variable '{name}'")]
    UnknownVariable { name: String },

    #[error("Unsupported operator '{symbol}'")]
    UnsupportedOperator { symbol: String },

    #[error("Unsupported function '{name}'")]
    UnsupportedFunction { name: String },

    #[error("Function '{name}' expects {expected} argument(s), got {got}")]
    ArityMismatch {
        name: String,
        expected: Arity,
        got: usize,
    },

    #[error("Invalid range [{min}, {max}] with step {step}: {reason}")]
    InvalidRange {
        min: f64,
        max: f64,
        step: f64,
        reason: &'static str,
    },

    #[error("Expression cannot be empty")]
    EmptyExpression,

    #[error("Graph range must be specified")]
    MissingRange,
}

impl EvalError {
    pub(crate) fn unknown_variable(name: impl Into<String>) -> Self {
        EvalError::UnknownVariable { name: name.into() }
    }

    pub(crate) fn unsupported_function(name: impl Into<String>) -> Self {
        EvalError::UnsupportedFunction { name: name.into() }
    }

    /// Whether the error describes a malformed expression rather than bad parameters
    pub fn is_expression_error(&self) -> bool {
        matches!(
            self,
            EvalError::UnknownVariable { .. }
                | EvalError::UnsupportedOperator { .. }
                | EvalError::UnsupportedFunction { .. }
                | EvalError::ArityMismatch { .. }
                | EvalError::EmptyExpression
        )
    }
}

use crate::error::Arity;
use rustc_hash::FxHashMap;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

/// Definition of a callable function: name, accepted arity and evaluation
#[derive(Clone)]
pub(crate) struct FunctionDefinition {
    /// Canonical lowercase name (e.g., "sin", "max")
    pub name: &'static str,

    /// Acceptable argument count
    pub arity: RangeInclusive<usize>,

    /// Numerical evaluation over already-evaluated arguments
    pub eval: fn(&[f64]) -> f64,
}

impl FunctionDefinition {
    /// Helper to check if argument count is valid
    pub(crate) fn validate_arity(&self, args: usize) -> bool {
        self.arity.contains(&args)
    }

    /// Expected argument count in reportable form
    pub(crate) fn expected_arity(&self) -> Arity {
        if self.arity.start() == self.arity.end() {
            Arity::Exactly(*self.arity.start())
        } else {
            Arity::AtLeast(*self.arity.start())
        }
    }
}

/// Static registry storing all function definitions
static REGISTRY: OnceLock<FxHashMap<&'static str, FunctionDefinition>> = OnceLock::new();

fn init_registry() -> FxHashMap<&'static str, FunctionDefinition> {
    crate::functions::definitions::all_definitions()
        .into_iter()
        .map(|def| (def.name, def))
        .collect()
}

/// Central registry for getting function definitions
pub(crate) struct Registry;

impl Registry {
    /// Get a function definition by name, ignoring ASCII case
    pub(crate) fn get(name: &str) -> Option<&'static FunctionDefinition> {
        let registry = REGISTRY.get_or_init(init_registry);
        registry
            .get(name)
            .or_else(|| registry.get(name.to_ascii_lowercase().as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_lookup() {
        assert_eq!(Registry::get("sin").map(|d| d.name), Some("sin"));
        assert_eq!(Registry::get("SQRT").map(|d| d.name), Some("sqrt"));
        assert_eq!(Registry::get("Max").map(|d| d.name), Some("max"));
        assert!(Registry::get("ln").is_none());
    }

    #[test]
    fn test_arity() {
        let sin = Registry::get("sin").unwrap();
        assert!(sin.validate_arity(1));
        assert!(!sin.validate_arity(0));
        assert!(!sin.validate_arity(2));
        assert_eq!(sin.expected_arity(), Arity::Exactly(1));

        let max = Registry::get("max").unwrap();
        assert!(!max.validate_arity(0));
        assert!(max.validate_arity(1));
        assert!(max.validate_arity(17));
        assert_eq!(max.expected_arity(), Arity::AtLeast(1));
    }
}

//! Fixed table of functions callable from an expression
//!
//! Lookup is case-insensitive: `SIN(x)`, `Sin(x)` and `sin(x)` all resolve to
//! the same definition.

pub(crate) mod definitions;
pub(crate) mod registry;

pub(crate) use registry::Registry;

/// Check whether `name` refers to a supported function
///
/// # Example
/// ```
/// assert!(graphcalc::functions::is_supported("MAX"));
/// assert!(!graphcalc::functions::is_supported("tan"));
/// ```
pub fn is_supported(name: &str) -> bool {
    Registry::get(name).is_some()
}

/// Canonical names of every supported function, sorted
pub fn supported_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = definitions::all_definitions()
        .iter()
        .map(|def| def.name)
        .collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_names() {
        let names = supported_names();
        assert_eq!(names, vec!["cos", "max", "sin", "sqrt"]);
        assert!(names.iter().all(|name| is_supported(name)));
        assert!(is_supported("Cos"));
        assert!(!is_supported("log"));
    }
}

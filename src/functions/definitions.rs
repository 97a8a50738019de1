use super::registry::FunctionDefinition;

/// Return all function definitions for populating the registry
///
/// Domain violations (e.g. `sqrt(-1)`) produce `NaN` rather than an error.
pub(crate) fn all_definitions() -> Vec<FunctionDefinition> {
    vec![
        FunctionDefinition {
            name: "sin",
            arity: 1..=1,
            eval: |args| args[0].sin(),
        },
        FunctionDefinition {
            name: "cos",
            arity: 1..=1,
            eval: |args| args[0].cos(),
        },
        FunctionDefinition {
            name: "sqrt",
            arity: 1..=1,
            eval: |args| args[0].sqrt(),
        },
        FunctionDefinition {
            name: "max",
            arity: 1..=usize::MAX,
            // NaN arguments propagate instead of being ignored by f64::max
            eval: |args| {
                args.iter().copied().fold(f64::NEG_INFINITY, |acc, v| {
                    if acc.is_nan() || v.is_nan() {
                        f64::NAN
                    } else {
                        acc.max(v)
                    }
                })
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(name: &str, args: &[f64]) -> f64 {
        let def = all_definitions()
            .into_iter()
            .find(|d| d.name == name)
            .expect("definition exists");
        (def.eval)(args)
    }

    #[test]
    fn test_unary_functions() {
        assert!((eval("sin", &[std::f64::consts::FRAC_PI_2]) - 1.0).abs() < 1e-12);
        assert!((eval("cos", &[0.0]) - 1.0).abs() < 1e-12);
        assert_eq!(eval("sqrt", &[9.0]), 3.0);
        assert!(eval("sqrt", &[-1.0]).is_nan());
    }

    #[test]
    fn test_max() {
        assert_eq!(eval("max", &[3.0]), 3.0);
        assert_eq!(eval("max", &[1.0, 5.0, -2.0]), 5.0);
        assert!(eval("max", &[1.0, f64::NAN]).is_nan());
    }
}

//! One bad abscissa, function or binding must never take down a whole
//! sampling or analysis run.

use crate::{
    Arity, Bindings, ErrorPolicy, EvalError, Evaluator, Expr, Graph, NumericRange,
    SharedEvaluator, evaluate, evaluate_batch, find_extrema, find_roots, sample, sample_with,
};

fn x() -> Expr {
    Expr::variable("x")
}

fn range(min: f64, max: f64, step: f64) -> NumericRange {
    NumericRange::new(min, max, step).unwrap()
}

#[test]
fn test_sqrt_domain_leaves_gap() {
    let expr = Expr::func("sqrt", x());
    let xs: Vec<f64> = sample(&expr, "x", &range(-2.0, 2.0, 1.0)).map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 1.0, 2.0]);
}

#[test]
fn test_pole_inside_range() {
    // 1 / (x - 1) is undefined only at x = 1
    let expr = Expr::number(1.0) / (x() - 1.0);
    let mut samples = sample(&expr, "x", &range(0.0, 2.0, 0.5));
    let points: Vec<_> = samples.by_ref().collect();
    assert_eq!(points.len(), 4);
    assert_eq!(samples.dropped(), 1);
    assert!(points.iter().all(|p| p.x != 1.0));
}

#[test]
fn test_structural_errors_drop_every_point() {
    let cases = [
        Expr::variable("y") + x(),
        Expr::func("tan", x()),
        Expr::call("sin", [x(), x()]),
        Expr::func_multi("max", vec![]),
    ];
    for expr in &cases {
        let mut samples = sample(expr, "x", &range(-1.0, 1.0, 0.5));
        assert_eq!(samples.by_ref().count(), 0, "{}", expr);
        assert_eq!(samples.dropped(), 5);
        assert!(find_roots(expr, "x", &range(-1.0, 1.0, 0.5), 0.001).is_empty());
        assert!(find_extrema(expr, "x", &range(-1.0, 1.0, 0.5), 0.001).is_empty());
    }
}

#[test]
fn test_structural_error_kinds() {
    let bound = Bindings::new().with("x", 1.0);
    assert_eq!(
        evaluate(&(Expr::variable("y") + x()), &bound),
        Err(EvalError::UnknownVariable {
            name: "y".to_string()
        })
    );
    assert_eq!(
        evaluate(&Expr::func("tan", x()), &bound),
        Err(EvalError::UnsupportedFunction {
            name: "tan".to_string()
        })
    );
    assert_eq!(
        evaluate(&Expr::call("cos", [x(), x()]), &bound),
        Err(EvalError::ArityMismatch {
            name: "cos".to_string(),
            expected: Arity::Exactly(1),
            got: 2,
        })
    );
}

#[test]
fn test_binding_fixes_unknown_variable() {
    let expr = Expr::variable("y") + x();
    let points: Vec<_> = sample_with(
        &expr,
        "x",
        &range(0.0, 1.0, 0.5),
        Bindings::new().with("y", 10.0),
    )
    .collect();
    assert_eq!(points.len(), 3);
    assert_eq!(points[2].y, 11.0);
}

#[test]
fn test_batch_policies() {
    let expr = Expr::func("sqrt", x()) + Expr::variable("y");
    let mut template = Bindings::new();
    let values = [1.0, 4.0];

    let cont: Vec<_> = evaluate_batch(&expr, &template, "x", values, ErrorPolicy::Continue).collect();
    assert_eq!(cont.len(), 2);
    assert!(cont.iter().all(Result::is_err));

    let prop: Vec<_> = evaluate_batch(&expr, &template, "x", values, ErrorPolicy::Propagate).collect();
    assert_eq!(prop.len(), 1);

    template.set("y", 1.0);
    let ok: Vec<f64> = evaluate_batch(&expr, &template, "x", values, ErrorPolicy::Propagate)
        .map(Result::unwrap)
        .collect();
    assert_eq!(ok, vec![2.0, 3.0]);
}

#[test]
fn test_evaluator_reused_after_failure() {
    let mut evaluator = Evaluator::new();
    let recip = Expr::number(1.0) / x();
    assert_eq!(evaluator.evaluate_finite(&recip, "x", 0.0), None);
    assert_eq!(evaluator.evaluate_finite(&Expr::func("nope", x()), "x", 2.0), None);
    assert_eq!(evaluator.evaluate_finite(&recip, "x", 2.0), Some(0.5));
}

#[test]
fn test_shared_evaluator_under_threads() {
    let shared = SharedEvaluator::new(Evaluator::new());
    let expr = x() * x();
    std::thread::scope(|s| {
        for t in 0..4 {
            let shared = &shared;
            let expr = &expr;
            s.spawn(move || {
                for i in 0..200 {
                    let v = f64::from(t * 1000 + i);
                    assert_eq!(shared.evaluate_at(expr, "x", v), Ok(v * v));
                }
            });
        }
    });
}

#[test]
fn test_graph_validation_reports_what_sampling_hides() {
    let graph = Graph::new("y + x", Expr::variable("y") + x())
        .unwrap()
        .with_x_range(range(0.0, 1.0, 0.5));
    assert!(graph.calculate().unwrap().is_empty());
    assert!(matches!(
        graph.validate(),
        Err(EvalError::UnknownVariable { .. })
    ));
}

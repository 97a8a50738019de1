//! Expression visitor pattern for read-only AST traversal
//!
//! Numeric evaluation does not go through this trait (it matches on
//! [`ExprKind`] directly); the visitor serves analyses such as collecting the
//! free variables of an expression before sampling it.

use crate::{BinaryOp, Expr, ExprKind};
use std::collections::BTreeSet;

/// Trait for visiting expression nodes in the AST
///
/// Each method returns a boolean indicating whether to continue visiting children.
///
/// # Example
/// ```
/// use graphcalc::{Expr, visitor::{ExprVisitor, walk_expr}};
///
/// struct CallCounter { calls: usize }
///
/// impl ExprVisitor for CallCounter {
///     fn visit_number(&mut self, _n: f64) -> bool { true }
///     fn visit_variable(&mut self, _name: &str) -> bool { true }
///     fn visit_function(&mut self, _name: &str, _args: &[Expr]) -> bool { self.calls += 1; true }
///     fn visit_binary(&mut self, _op: graphcalc::BinaryOp, _l: &Expr, _r: &Expr) -> bool { true }
/// }
///
/// let expr = Expr::func("sin", Expr::func("cos", Expr::variable("x")));
/// let mut counter = CallCounter { calls: 0 };
/// walk_expr(&expr, &mut counter);
/// assert_eq!(counter.calls, 2);
/// ```
pub trait ExprVisitor {
    /// Visit a number literal, returns true to continue visiting
    fn visit_number(&mut self, n: f64) -> bool;

    /// Visit a variable reference, returns true to continue visiting
    fn visit_variable(&mut self, name: &str) -> bool;

    /// Visit a function call, returns true to visit arguments
    fn visit_function(&mut self, name: &str, args: &[Expr]) -> bool;

    /// Visit a binary operation, returns true to visit operands
    fn visit_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr) -> bool;
}

/// Walk an expression tree with a visitor
///
/// Visits nodes in pre-order (parent before children, left before right).
pub fn walk_expr<V: ExprVisitor>(expr: &Expr, visitor: &mut V) {
    match &expr.kind {
        ExprKind::Number(n) => {
            visitor.visit_number(*n);
        }
        ExprKind::Variable(name) => {
            visitor.visit_variable(name);
        }
        ExprKind::FunctionCall { name, args } => {
            if visitor.visit_function(name, args) {
                for arg in args {
                    walk_expr(arg, visitor);
                }
            }
        }
        ExprKind::Binary { op, left, right } => {
            if visitor.visit_binary(*op, left, right) {
                walk_expr(left, visitor);
                walk_expr(right, visitor);
            }
        }
    }
}

/// A visitor that collects all unique variable names, in sorted order
#[derive(Default)]
pub struct VariableCollector {
    pub variables: BTreeSet<String>,
}

impl ExprVisitor for VariableCollector {
    fn visit_number(&mut self, _n: f64) -> bool {
        true
    }

    fn visit_variable(&mut self, name: &str) -> bool {
        if !self.variables.contains(name) {
            self.variables.insert(name.to_string());
        }
        true
    }

    fn visit_function(&mut self, _name: &str, _args: &[Expr]) -> bool {
        true
    }

    fn visit_binary(&mut self, _op: BinaryOp, _left: &Expr, _right: &Expr) -> bool {
        true
    }
}

/// Collect the variable names referenced by an expression
pub fn collect_variables(expr: &Expr) -> BTreeSet<String> {
    let mut collector = VariableCollector::default();
    walk_expr(expr, &mut collector);
    collector.variables
}

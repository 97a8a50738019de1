// Display formatting for AST
use crate::ast::{BinaryOp, Expr, ExprKind};
use std::fmt;

fn format_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        if n > 0.0 {
            write!(f, "Infinity")
        } else {
            write!(f, "-Infinity")
        }
    } else if n.fract() == 0.0 && n.abs() < 1e10 {
        // Display as integer if no fractional part
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{}", n)
    }
}

/// Write an operand, parenthesizing it when it binds looser than its parent
fn format_operand(
    f: &mut fmt::Formatter<'_>,
    operand: &Expr,
    parent: BinaryOp,
    is_right: bool,
) -> fmt::Result {
    let needs_parens = match &operand.kind {
        ExprKind::Binary { op, .. } => {
            let (child, outer) = (op.precedence(), parent.precedence());
            // `a - (b + c)`, `a / (b * c)` and `(a ^ b) ^ c` need grouping kept
            child < outer
                || (child == outer && is_right && matches!(parent, BinaryOp::Sub | BinaryOp::Div))
                || (child == outer && !is_right && parent == BinaryOp::Pow)
        }
        ExprKind::Number(n) => *n < 0.0 && parent != BinaryOp::Add,
        _ => false,
    };

    if needs_parens {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Number(n) => format_number(f, *n),

            ExprKind::Variable(name) => write!(f, "{}", name),

            ExprKind::FunctionCall { name, args } => {
                let args_str: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
                write!(f, "{}({})", name, args_str.join(", "))
            }

            ExprKind::Binary { op, left, right } => {
                format_operand(f, left, *op, false)?;
                match op {
                    BinaryOp::Pow => write!(f, "^")?,
                    other => write!(f, " {} ", other.symbol())?,
                }
                format_operand(f, right, *op, true)
            }
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

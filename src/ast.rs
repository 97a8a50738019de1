//! Abstract Syntax Tree for single-variable mathematical expressions
//!
//! Trees are built by an external parser (or by hand through the convenience
//! constructors below) and are never mutated once constructed. Every child is
//! owned by exactly one parent.

use crate::EvalError;

/// Binary operator of an [`ExprKind::Binary`] node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    /// Convert a parser operator token into a `BinaryOp`
    ///
    /// # Errors
    /// Returns `EvalError::UnsupportedOperator` for any token outside `+ - * / ^`.
    ///
    /// # Example
    /// ```
    /// use graphcalc::BinaryOp;
    /// assert_eq!(BinaryOp::from_symbol("^").unwrap(), BinaryOp::Pow);
    /// assert!(BinaryOp::from_symbol("%").is_err());
    /// ```
    pub fn from_symbol(symbol: &str) -> Result<Self, EvalError> {
        match symbol.trim() {
            "+" => Ok(BinaryOp::Add),
            "-" => Ok(BinaryOp::Sub),
            "*" => Ok(BinaryOp::Mul),
            "/" => Ok(BinaryOp::Div),
            "^" | "**" => Ok(BinaryOp::Pow),
            other => Err(EvalError::UnsupportedOperator {
                symbol: other.to_string(),
            }),
        }
    }

    /// Operator token as written in infix notation
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }

    /// Binding strength used when printing
    pub(crate) fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div => 2,
            BinaryOp::Pow => 3,
        }
    }

    /// Apply the operator to two already-evaluated operands
    ///
    /// Division by exactly zero yields `NaN` rather than an infinity so the
    /// point is treated as undefined downstream.
    #[inline]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOp::Add => left + right,
            BinaryOp::Sub => left - right,
            BinaryOp::Mul => left * right,
            BinaryOp::Div => {
                if right == 0.0 {
                    f64::NAN
                } else {
                    left / right
                }
            }
            BinaryOp::Pow => left.powf(right),
        }
    }
}

/// Expression tree node
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Numeric literal (e.g., 2, 0.5, 1e-3)
    Number(f64),

    /// Reference to a bound variable (e.g., "x")
    Variable(String),

    /// Binary operation, both operands always evaluated
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Named function call with ordered arguments
    FunctionCall { name: String, args: Vec<Expr> },
}

impl Expr {
    pub fn new(kind: ExprKind) -> Self {
        Expr { kind }
    }

    // Convenience constructors

    /// Create a numeric literal
    pub fn number(n: f64) -> Self {
        Expr::new(ExprKind::Number(n))
    }

    /// Create a variable reference
    pub fn variable(name: impl Into<String>) -> Self {
        Expr::new(ExprKind::Variable(name.into()))
    }

    /// Create a binary operation node
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::new(ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn add_expr(left: Expr, right: Expr) -> Self {
        Expr::binary(BinaryOp::Add, left, right)
    }

    pub fn sub_expr(left: Expr, right: Expr) -> Self {
        Expr::binary(BinaryOp::Sub, left, right)
    }

    pub fn mul_expr(left: Expr, right: Expr) -> Self {
        Expr::binary(BinaryOp::Mul, left, right)
    }

    pub fn div_expr(left: Expr, right: Expr) -> Self {
        Expr::binary(BinaryOp::Div, left, right)
    }

    pub fn pow(base: Expr, exponent: Expr) -> Self {
        Expr::binary(BinaryOp::Pow, base, exponent)
    }

    /// Create a single-argument function call
    pub fn func(name: impl Into<String>, arg: Expr) -> Self {
        Expr::new(ExprKind::FunctionCall {
            name: name.into(),
            args: vec![arg],
        })
    }

    /// Create a function call with any number of arguments
    pub fn func_multi(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::new(ExprKind::FunctionCall {
            name: name.into(),
            args,
        })
    }

    /// Create a function call from a fixed-size argument array
    ///
    /// # Example
    /// ```
    /// use graphcalc::Expr;
    /// let m = Expr::call("max", [Expr::variable("x"), Expr::number(0.0)]);
    /// assert_eq!(m.to_string(), "max(x, 0)");
    /// ```
    pub fn call<const N: usize>(name: impl Into<String>, args: [Expr; N]) -> Self {
        Expr::func_multi(name, args.into())
    }

    // Accessors

    /// Return the literal value if this node is a number
    pub fn as_number(&self) -> Option<f64> {
        match &self.kind {
            ExprKind::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Return the variable name if this node is a variable reference
    pub fn as_variable(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::Variable(name) => Some(name),
            _ => None,
        }
    }

    // Analysis methods

    /// Count the total number of nodes in the tree
    pub fn node_count(&self) -> usize {
        match &self.kind {
            ExprKind::Number(_) | ExprKind::Variable(_) => 1,
            ExprKind::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
            ExprKind::FunctionCall { args, .. } => {
                1 + args.iter().map(Expr::node_count).sum::<usize>()
            }
        }
    }

    /// Get the maximum nesting depth of the tree (a leaf has depth 1)
    pub fn max_depth(&self) -> usize {
        match &self.kind {
            ExprKind::Number(_) | ExprKind::Variable(_) => 1,
            ExprKind::Binary { left, right, .. } => 1 + left.max_depth().max(right.max_depth()),
            ExprKind::FunctionCall { args, .. } => {
                1 + args.iter().map(Expr::max_depth).max().unwrap_or(0)
            }
        }
    }

    /// Check whether the tree references the named variable anywhere
    pub fn contains_var(&self, var: &str) -> bool {
        match &self.kind {
            ExprKind::Number(_) => false,
            ExprKind::Variable(name) => name == var,
            ExprKind::Binary { left, right, .. } => left.contains_var(var) || right.contains_var(var),
            ExprKind::FunctionCall { args, .. } => args.iter().any(|a| a.contains_var(var)),
        }
    }
}

impl From<f64> for Expr {
    fn from(n: f64) -> Self {
        Expr::number(n)
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Expr::variable(name)
    }
}

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op:expr) => {
        impl std::ops::$trait for Expr {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Expr {
                Expr::binary($op, self, rhs)
            }
        }

        impl std::ops::$trait<f64> for Expr {
            type Output = Expr;

            fn $method(self, rhs: f64) -> Expr {
                Expr::binary($op, self, Expr::number(rhs))
            }
        }
    };
}

impl_binary_operator!(Add, add, BinaryOp::Add);
impl_binary_operator!(Sub, sub, BinaryOp::Sub);
impl_binary_operator!(Mul, mul, BinaryOp::Mul);
impl_binary_operator!(Div, div, BinaryOp::Div);

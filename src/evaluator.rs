//! Evaluation - substitutes bound variables with numeric values
//!
//! Evaluation is partial: bound variables become numbers, unbound ones
//! stay symbolic, and a binary node whose children both evaluated to
//! numbers folds to a number. The combining step reuses the same
//! arithmetic operators as tree construction, implemented on [`Value`].

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use rustc_hash::FxHashMap;

use crate::Expr;

/// Variable bindings for evaluation, keyed by variable name.
pub type Bindings<'a> = FxHashMap<&'a str, i64>;

/// Result of evaluating an expression: either a pure number or a
/// residual tree over the variables that stayed unbound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Num(i64),
    Expr(Expr),
}

impl Value {
    /// Return the number if evaluation was total
    pub fn as_num(&self) -> Option<i64> {
        match self {
            Value::Num(n) => Some(*n),
            Value::Expr(_) => None,
        }
    }

    /// Convert into an expression tree, promoting a number to `Num`
    pub fn into_expr(self) -> Expr {
        match self {
            Value::Num(n) => Expr::num(n),
            Value::Expr(e) => e,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Num(n) => write!(f, "{}", n),
            Value::Expr(e) => write!(f, "{}", e),
        }
    }
}

// Two numbers combine numerically; a residual on either side rebuilds
// the corresponding tree node with the numeric side promoted. Division
// of two numbers is ordinary i64 division: a zero divisor traps.

macro_rules! impl_value_op {
    ($trait:ident, $method:ident, $ctor:ident) => {
        impl $trait for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                match (self, rhs) {
                    (Value::Num(a), Value::Num(b)) => Value::Num(a.$method(b)),
                    (a, b) => Value::Expr(Expr::$ctor(a.into_expr(), b.into_expr())),
                }
            }
        }
    };
}

impl_value_op!(Add, add, add_expr);
impl_value_op!(Sub, sub, sub_expr);
impl_value_op!(Mul, mul, mul_expr);
impl_value_op!(Div, div, div_expr);

/// Evaluate `expr` under the given bindings (see [`Expr::evaluate`]).
pub fn evaluate(expr: &Expr, vars: &Bindings<'_>) -> Value {
    expr.evaluate(vars)
}

impl Expr {
    /// Evaluate this expression under the given variable bindings.
    ///
    /// A fully bound expression yields `Value::Num`; a partially bound
    /// one yields a smaller residual tree mixing substituted numbers
    /// and the remaining free variables.
    ///
    /// # Example
    /// ```
    /// use symalg::{parse, Bindings, Value, Expr};
    ///
    /// let mut vars = Bindings::default();
    /// vars.insert("x", 3);
    ///
    /// let full = parse("(x * 2)").unwrap().evaluate(&vars);
    /// assert_eq!(full, Value::Num(6));
    ///
    /// let partial = parse("(x + y)").unwrap().evaluate(&vars);
    /// assert_eq!(partial, Value::Expr(Expr::add_expr(3, "y")));
    /// ```
    pub fn evaluate(&self, vars: &Bindings<'_>) -> Value {
        match self {
            Expr::Num(n) => Value::Num(*n),

            Expr::Var(name) => match vars.get(name.as_str()) {
                Some(&value) => Value::Num(value),
                // Unbound variables pass through symbolically
                None => Value::Expr(self.clone()),
            },

            Expr::Add(l, r) => l.evaluate(vars) + r.evaluate(vars),
            Expr::Sub(l, r) => l.evaluate(vars) - r.evaluate(vars),
            Expr::Mul(l, r) => l.evaluate(vars) * r.evaluate(vars),
            Expr::Div(l, r) => l.evaluate(vars) / r.evaluate(vars),
        }
    }
}

//! Simplification - constant folding and algebraic identities
//!
//! One post-order pass: children are simplified first, then the
//! per-operator rule runs on the already-simplified children. Because a
//! rule's output is itself fully simplified (a folded constant or an
//! already-simplified child), chained reductions across levels resolve
//! without fixpoint iteration and the pass is idempotent.

use crate::Expr;

/// Simplify an expression.
///
/// Applies constant folding and the identity/absorbing rules for each
/// operator. `0 - x` is deliberately left as-is (there is no unary
/// minus to rewrite it to), and division by a constant zero is not
/// guarded: folding `Num(a) / Num(0)` traps like any `i64` division.
///
/// # Example
/// ```
/// use symalg::{parse, simplify, Expr};
///
/// let expr = parse("((x + 0) * (2 + 3))").unwrap();
/// assert_eq!(simplify(&expr), Expr::mul_expr("x", 5));
/// ```
pub fn simplify(expr: &Expr) -> Expr {
    match expr {
        // A lone number or variable simplifies to itself
        Expr::Var(_) | Expr::Num(_) => expr.clone(),
        Expr::Add(l, r) => simplify_add(simplify(l), simplify(r)),
        Expr::Sub(l, r) => simplify_sub(simplify(l), simplify(r)),
        Expr::Mul(l, r) => simplify_mul(simplify(l), simplify(r)),
        Expr::Div(l, r) => simplify_div(simplify(l), simplify(r)),
    }
}

impl Expr {
    /// Simplify this expression (convenience wrapper for [`simplify`]).
    pub fn simplified(&self) -> Expr {
        simplify(self)
    }
}

fn simplify_add(left: Expr, right: Expr) -> Expr {
    match (left.as_num(), right.as_num()) {
        (Some(a), Some(b)) => Expr::num(a + b),
        (Some(0), _) => right,
        (_, Some(0)) => left,
        _ => Expr::add_expr(left, right),
    }
}

fn simplify_sub(left: Expr, right: Expr) -> Expr {
    match (left.as_num(), right.as_num()) {
        (Some(a), Some(b)) => Expr::num(a - b),
        // Only the right-zero identity: 0 - x stays Sub(0, x)
        (_, Some(0)) => left,
        _ => Expr::sub_expr(left, right),
    }
}

fn simplify_mul(left: Expr, right: Expr) -> Expr {
    match (left.as_num(), right.as_num()) {
        (Some(a), Some(b)) => Expr::num(a * b),
        (Some(1), _) => right,
        (_, Some(1)) => left,
        (Some(0), _) | (_, Some(0)) => Expr::num(0),
        _ => Expr::mul_expr(left, right),
    }
}

fn simplify_div(left: Expr, right: Expr) -> Expr {
    match (left.as_num(), right.as_num()) {
        (Some(a), Some(b)) => Expr::num(a / b),
        (_, Some(1)) => left,
        (Some(0), _) => Expr::num(0),
        _ => Expr::div_expr(left, right),
    }
}

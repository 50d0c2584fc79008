// Differentiation - applies calculus rules structurally
//
// The result is deliberately left unsimplified: the rules below build
// the textbook shapes (including 0 and 1 factors), and the
// simplification pass cleans them up separately.

use crate::Expr;

/// Symbolic derivative of `expr` with respect to the variable `var`.
///
/// # Example
/// ```
/// use symalg::{derivative, parse, simplify};
///
/// let expr = parse("(x * x)").unwrap();
/// let d = simplify(&derivative(&expr, "x"));
/// assert_eq!(d, parse("(x + x)").unwrap());
/// ```
pub fn derivative(expr: &Expr, var: &str) -> Expr {
    expr.derivative(var)
}

impl Expr {
    /// Differentiate this expression with respect to `var`.
    /// Returns a new, unsimplified tree.
    pub fn derivative(&self, var: &str) -> Expr {
        match self {
            // Constant rule
            Expr::Num(_) => Expr::num(0),

            Expr::Var(name) => {
                if name == var {
                    Expr::num(1)
                } else {
                    Expr::num(0)
                }
            }

            // Sum rule: (u + v)' = u' + v'
            Expr::Add(u, v) => Expr::add_expr(u.derivative(var), v.derivative(var)),

            // Difference rule: (u - v)' = u' - v'
            Expr::Sub(u, v) => Expr::sub_expr(u.derivative(var), v.derivative(var)),

            // Product rule: (u * v)' = u * v' + v * u'
            Expr::Mul(u, v) => Expr::add_expr(
                Expr::mul_expr(u.as_ref().clone(), v.derivative(var)),
                Expr::mul_expr(v.as_ref().clone(), u.derivative(var)),
            ),

            // Quotient rule: (u / v)' = (v * u' - u * v') / (v * v)
            Expr::Div(u, v) => Expr::div_expr(
                Expr::sub_expr(
                    Expr::mul_expr(v.as_ref().clone(), u.derivative(var)),
                    Expr::mul_expr(u.as_ref().clone(), v.derivative(var)),
                ),
                Expr::mul_expr(v.as_ref().clone(), v.as_ref().clone()),
            ),
        }
    }
}

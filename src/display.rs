// Display formatting - renders a tree back to minimally-parenthesized infix
use crate::{ast::BinOp, Expr};
use std::fmt;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Num(n) => write!(f, "{}", n),
            Expr::Add(l, r) => fmt_binary(f, BinOp::Add, l, r),
            Expr::Sub(l, r) => fmt_binary(f, BinOp::Sub, l, r),
            Expr::Mul(l, r) => fmt_binary(f, BinOp::Mul, l, r),
            Expr::Div(l, r) => fmt_binary(f, BinOp::Div, l, r),
        }
    }
}

fn fmt_binary(f: &mut fmt::Formatter<'_>, op: BinOp, left: &Expr, right: &Expr) -> fmt::Result {
    fmt_operand(f, op, left, false)?;
    write!(f, " {} ", op.symbol())?;
    fmt_operand(f, op, right, true)
}

fn fmt_operand(
    f: &mut fmt::Formatter<'_>,
    parent: BinOp,
    operand: &Expr,
    is_right: bool,
) -> fmt::Result {
    if needs_parens(parent, operand, is_right) {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

/// An operand is parenthesized when it binds looser than its parent, or
/// when it is the right child of a non-associative operator (`-`, `/`)
/// at equal precedence: `a - (b - c)` keeps its parentheses,
/// `(a - b) - c` renders as `a - b - c`.
fn needs_parens(parent: BinOp, operand: &Expr, is_right: bool) -> bool {
    match operand.precedence() {
        None => false,
        Some(p) => {
            p > parent.precedence()
                || (is_right
                    && p == parent.precedence()
                    && matches!(parent, BinOp::Sub | BinOp::Div))
        }
    }
}

/// Render an expression as a precedence-correct infix string.
/// Equivalent to the `Display` impl.
pub fn render(expr: &Expr) -> String {
    expr.to_string()
}

//! Symbol type and operator overloading for ergonomic expression building
//!
//! # Example
//! ```
//! use symalg::sym;
//!
//! let x = sym("x");
//! let expr = x.clone() * x + 1;  // x * x + 1
//! assert_eq!(expr.to_string(), "x * x + 1");
//! ```

use crate::Expr;
use std::ops::{Add, Div, Mul, Sub};

/// A named symbol for building expressions without spelling out `Expr::Var`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new symbol with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Symbol(name.into())
    }

    /// Get the name of the symbol
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Convert to an `Expr`
    pub fn to_expr(&self) -> Expr {
        Expr::var(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Symbol> for Expr {
    fn from(s: Symbol) -> Self {
        s.to_expr()
    }
}

// ===== Macro for generating operator implementations =====
// One instantiation per (lhs, rhs) type pair; both sides are promoted to
// Expr through the supplied converters, so trees, symbols and raw
// integers mix freely on either side.

macro_rules! impl_binary_ops {
    ($lhs:ty, $rhs:ty, $to_lhs:expr, $to_rhs:expr) => {
        impl Add<$rhs> for $lhs {
            type Output = Expr;
            fn add(self, rhs: $rhs) -> Expr {
                Expr::add_expr($to_lhs(self), $to_rhs(rhs))
            }
        }
        impl Sub<$rhs> for $lhs {
            type Output = Expr;
            fn sub(self, rhs: $rhs) -> Expr {
                Expr::sub_expr($to_lhs(self), $to_rhs(rhs))
            }
        }
        impl Mul<$rhs> for $lhs {
            type Output = Expr;
            fn mul(self, rhs: $rhs) -> Expr {
                Expr::mul_expr($to_lhs(self), $to_rhs(rhs))
            }
        }
        impl Div<$rhs> for $lhs {
            type Output = Expr;
            fn div(self, rhs: $rhs) -> Expr {
                Expr::div_expr($to_lhs(self), $to_rhs(rhs))
            }
        }
    };
}

// Expr operations
impl_binary_ops!(Expr, Expr, |l: Expr| l, |r: Expr| r);
impl_binary_ops!(Expr, Symbol, |l: Expr| l, |r: Symbol| r.to_expr());
impl_binary_ops!(Expr, i64, |l: Expr| l, Expr::num);

// Symbol operations
impl_binary_ops!(Symbol, Symbol, |l: Symbol| l.to_expr(), |r: Symbol| r.to_expr());
impl_binary_ops!(Symbol, Expr, |l: Symbol| l.to_expr(), |r: Expr| r);
impl_binary_ops!(Symbol, i64, |l: Symbol| l.to_expr(), Expr::num);

// i64 on the left side
impl_binary_ops!(i64, Expr, Expr::num, |r: Expr| r);
impl_binary_ops!(i64, Symbol, Expr::num, |r: Symbol| r.to_expr());

/// Convenience function to create a `Symbol`
pub fn sym(name: &str) -> Symbol {
    Symbol::new(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_basic() {
        let x = sym("x");
        assert_eq!(x.name(), "x");
        assert_eq!(x.to_expr(), Expr::var("x"));
    }

    #[test]
    fn test_symbol_arithmetic() {
        let x = sym("x");
        let y = sym("y");

        let sum = x.clone() + y.clone();
        assert_eq!(sum, Expr::add_expr("x", "y"));

        let quotient = x.clone() / y;
        assert_eq!(quotient, Expr::div_expr("x", "y"));
    }

    #[test]
    fn test_literal_on_either_side() {
        let x = sym("x");

        let left = 2 * x.clone();
        assert_eq!(left, Expr::mul_expr(Expr::num(2), Expr::var("x")));

        let right = x.clone() - 1;
        assert_eq!(right, Expr::sub_expr(Expr::var("x"), Expr::num(1)));

        let reversed = 1 - x;
        assert_eq!(reversed, Expr::sub_expr(Expr::num(1), Expr::var("x")));
    }

    #[test]
    fn test_expr_and_literal() {
        let expr = Expr::mul_expr("x", "x");
        let shifted = expr.clone() + 3;
        assert_eq!(shifted, Expr::add_expr(expr.clone(), Expr::num(3)));

        let scaled = 3 * expr.clone();
        assert_eq!(scaled, Expr::mul_expr(Expr::num(3), expr));
    }
}

//! Parser module - converts strings to expression trees
mod descent;
mod lexer;

pub use lexer::tokenize;

use crate::{Expr, ParseError};

/// Parse an expression string into an expression tree.
///
/// Pipeline: validate -> tokenize -> descend. Binary operations must be
/// fully parenthesized, e.g. `"(x * (y + 2))"`; see [`tokenize`] for the
/// spacing requirement around `-`.
///
/// # Example
/// ```
/// use symalg::{parse, Expr};
///
/// let expr = parse("(x * (2 + 3))").unwrap();
/// assert_eq!(expr, Expr::mul_expr("x", Expr::add_expr(2, 3)));
/// ```
///
/// # Errors
/// Returns `ParseError` if the input is empty, a numeric token is
/// malformed, or the token sequence does not follow the grammar.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyFormula);
    }

    let tokens = lexer::tokenize(input);
    descent::Descent::new(&tokens).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leaves() {
        assert_eq!(parse("x"), Ok(Expr::var("x")));
        assert_eq!(parse("20"), Ok(Expr::num(20)));
        assert_eq!(parse("-3"), Ok(Expr::num(-3)));
    }

    #[test]
    fn test_parse_nested() {
        let expr = parse("(x * (2 + 3))").unwrap();
        assert_eq!(expr, Expr::mul_expr("x", Expr::add_expr(2, 3)));
    }

    #[test]
    fn test_parse_fused_negative() {
        let expr = parse("(x * (-302 + 3))").unwrap();
        assert_eq!(expr, Expr::mul_expr("x", Expr::add_expr(-302, 3)));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), Err(ParseError::EmptyFormula));
        assert_eq!(parse("   "), Err(ParseError::EmptyFormula));
    }

    #[test]
    fn test_unbalanced_input() {
        assert!(parse("(x + 1").is_err());
    }
}

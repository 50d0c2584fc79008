//! Recursive descent over the token sequence
//!
//! Grammar, one token of lookahead per step:
//!
//! ```text
//! expr := VAR-TOKEN
//!       | NUM-TOKEN
//!       | '(' expr OP expr ')'
//! ```
//!
//! Each step returns the built subtree together with the index just past
//! it, so the caller resumes scanning there. Trailing tokens after the
//! top-level expression are not checked.

use crate::{BinOp, Expr, ParseError};

pub(crate) struct Descent<'a> {
    tokens: &'a [String],
}

impl<'a> Descent<'a> {
    pub(crate) fn new(tokens: &'a [String]) -> Self {
        Descent { tokens }
    }

    /// Parse the whole sequence starting at index 0.
    pub(crate) fn parse(&self) -> Result<Expr, ParseError> {
        let (expr, _next) = self.expr_at(0)?;
        Ok(expr)
    }

    fn token_at(&self, index: usize) -> Result<&'a str, ParseError> {
        self.tokens
            .get(index)
            .map(String::as_str)
            .ok_or(ParseError::UnexpectedEndOfInput)
    }

    fn expr_at(&self, index: usize) -> Result<(Expr, usize), ParseError> {
        let token = self.token_at(index)?;

        if is_name(token) {
            return Ok((Expr::var(token), index + 1));
        }

        if token == "(" {
            let (left, after_left) = self.expr_at(index + 1)?;

            let op_token = self.token_at(after_left)?;
            let op = BinOp::from_token(op_token)
                .ok_or_else(|| ParseError::unexpected("an operator", op_token))?;

            let (right, after_right) = self.expr_at(after_left + 1)?;

            match self.token_at(after_right)? {
                ")" => Ok((Expr::binary(op, left, right), after_right + 1)),
                other => Err(ParseError::unexpected("')'", other)),
            }
        } else {
            let value: i64 = token.parse().map_err(|_| ParseError::InvalidNumber {
                token: token.to_string(),
            })?;
            Ok((Expr::num(value), index + 1))
        }
    }
}

/// A variable-name token is a non-empty run of alphabetic characters.
fn is_name(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

use std::fmt;

/// Errors that can occur while parsing an expression string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or all whitespace
    EmptyFormula,

    /// A token that should have been a numeric literal was not
    InvalidNumber { token: String },

    /// A token other than the expected one appeared
    UnexpectedToken { expected: String, got: String },

    /// The token sequence ended mid-expression
    UnexpectedEndOfInput,
}

impl ParseError {
    /// Create an `UnexpectedToken` from anything stringly
    pub fn unexpected(expected: impl Into<String>, got: impl Into<String>) -> Self {
        ParseError::UnexpectedToken {
            expected: expected.into(),
            got: got.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyFormula => write!(f, "Formula cannot be empty"),
            ParseError::InvalidNumber { token } => {
                write!(f, "Invalid number format: '{}'", token)
            }
            ParseError::UnexpectedToken { expected, got } => {
                write!(f, "Expected {}, but got '{}'", expected, got)
            }
            ParseError::UnexpectedEndOfInput => write!(f, "Unexpected end of input"),
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ParseError::EmptyFormula.to_string(),
            "Formula cannot be empty"
        );
        assert_eq!(
            ParseError::unexpected("')'", "+").to_string(),
            "Expected ')', but got '+'"
        );
        assert_eq!(
            ParseError::InvalidNumber {
                token: "3b".to_string()
            }
            .to_string(),
            "Invalid number format: '3b'"
        );
    }
}

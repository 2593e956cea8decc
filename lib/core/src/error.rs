use std::fmt::{Display, Formatter};

use expr_parser::ParseError;
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(context(false), display("{}", source))]
    Parse { source: ParseError },

    #[snafu(display("Malformed expression: {}", reason))]
    MalformedExpression { reason: String },

    #[snafu(display(
        "Too many variables ({}), at most {} are allowed to keep the table within 2^{} rows",
        count,
        limit,
        limit
    ))]
    TooManyVariables { count: usize, limit: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCharacter,
    UnbalancedParentheses,
    UnexpectedToken,
    MalformedExpression,
    TooManyVariables,
    DuplicateOperators,
    MissingOperator,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse { source } => match source {
                ParseError::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
                ParseError::UnbalancedParentheses { .. } => ErrorKind::UnbalancedParentheses,
                ParseError::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
                ParseError::MalformedExpression { .. } => ErrorKind::MalformedExpression,
                ParseError::DuplicateOperators { .. } => ErrorKind::DuplicateOperators,
                ParseError::MissingOperator { .. } => ErrorKind::MissingOperator,
            },
            Error::MalformedExpression { .. } => ErrorKind::MalformedExpression,
            Error::TooManyVariables { .. } => ErrorKind::TooManyVariables,
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use ErrorKind::*;
        write!(
            f,
            "{}",
            match self {
                InvalidCharacter => "InvalidCharacter",
                UnbalancedParentheses => "UnbalancedParentheses",
                UnexpectedToken => "UnexpectedToken",
                MalformedExpression => "MalformedExpression",
                TooManyVariables => "TooManyVariables",
                DuplicateOperators => "DuplicateOperators",
                MissingOperator => "MissingOperator",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_parse_error_converts() {
        fn fails() -> Result<()> {
            Err(ParseError::InvalidCharacter { ch: '&', index: 1 })?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCharacter);
        assert_eq!(err.to_string(), "Invalid character '&' at position 1");
    }

    #[test]
    fn test_too_many_variables_message() {
        let err = TooManyVariablesSnafu { count: 17usize, limit: 16usize }.build();
        assert_eq!(err.kind(), ErrorKind::TooManyVariables);
        assert!(err.to_string().starts_with("Too many variables (17)"));
    }
}

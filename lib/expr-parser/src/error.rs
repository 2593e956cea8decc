use snafu::Snafu;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ParseError {
    #[snafu(display("Invalid character '{}' at position {}", ch, index))]
    InvalidCharacter { ch: char, index: usize },

    #[snafu(display("Unbalanced parentheses (missing '{}')", missing))]
    UnbalancedParentheses { missing: char },

    #[snafu(display("Unexpected token '{}'", token))]
    UnexpectedToken { token: String },

    #[snafu(display("Malformed expression: {}", reason))]
    MalformedExpression { reason: String },

    #[snafu(display("Duplicate operators '{}' and '{}'", first, second))]
    DuplicateOperators { first: String, second: String },

    #[snafu(display("Missing operator between '{}' and '{}'", before, after))]
    MissingOperator { before: String, after: String },
}

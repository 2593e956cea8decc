//! Early, friendlier diagnostics for user input.
//!
//! These checks run on normalized text before the formula is handed to the
//! evaluation pipeline. The parser itself never calls them.

use itertools::Itertools;

use crate::error::{
    DuplicateOperatorsSnafu, InvalidCharacterSnafu, MissingOperatorSnafu, ParseError, UnbalancedParenthesesSnafu,
};
use crate::token::{tokenize, Token, TokenKind};

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | ' ' | '(' | ')') || TokenKind::from_symbol(c).is_some()
}

fn ends_operand(token: &Token) -> bool {
    matches!(token.kind(), TokenKind::Variable | TokenKind::RParen)
}

fn starts_operand(token: &Token) -> bool {
    matches!(token.kind(), TokenKind::Variable | TokenKind::LParen | TokenKind::Not)
}

pub fn validate(input: &str) -> Result<(), ParseError> {
    if let Some((index, ch)) = input.chars().find_position(|&c| !is_allowed(c)) {
        return InvalidCharacterSnafu { ch, index }.fail();
    }

    let mut balance = 0i64;
    for c in input.chars() {
        match c {
            '(' => balance += 1,
            ')' => balance -= 1,
            _ => {}
        }
        if balance < 0 {
            return UnbalancedParenthesesSnafu { missing: '(' }.fail();
        }
    }
    if balance > 0 {
        return UnbalancedParenthesesSnafu { missing: ')' }.fail();
    }

    let tokens = tokenize(input)?;
    for (a, b) in tokens.iter().tuple_windows() {
        if a.kind().is_binary() && b.kind().is_binary() {
            return DuplicateOperatorsSnafu {
                first: a.text(),
                second: b.text(),
            }
            .fail();
        }
        if ends_operand(a) && starts_operand(b) {
            return MissingOperatorSnafu {
                before: a.text(),
                after: b.text(),
            }
            .fail();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_valid() {
        assert_eq!(validate("¬(p ∧ q) ↔ (¬p ∨ ¬q)"), Ok(()));
        assert_eq!(validate("A"), Ok(()));
        assert_eq!(validate(""), Ok(()));
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(validate("A ∧ B;"), Err(ParseError::InvalidCharacter { ch: ';', index: 5 }));
    }

    #[test]
    fn test_unbalanced() {
        assert_eq!(validate("(A ∧ B"), Err(ParseError::UnbalancedParentheses { missing: ')' }));
        assert_eq!(validate(")A("), Err(ParseError::UnbalancedParentheses { missing: '(' }));
    }

    #[test]
    fn test_duplicate_operators() {
        assert_eq!(
            validate("A ∧ ∨ B"),
            Err(ParseError::DuplicateOperators {
                first: "∧".to_string(),
                second: "∨".to_string(),
            })
        );
    }

    #[test]
    fn test_negation_after_binary_is_fine() {
        assert_eq!(validate("A ∧ ¬B"), Ok(()));
        assert_eq!(validate("A → ¬¬B"), Ok(()));
    }

    #[test]
    fn test_missing_operator() {
        assert_eq!(
            validate("A B"),
            Err(ParseError::MissingOperator {
                before: "A".to_string(),
                after: "B".to_string(),
            })
        );
        assert!(matches!(validate("(A) (B)"), Err(ParseError::MissingOperator { .. })));
        assert!(matches!(validate("A ¬B"), Err(ParseError::MissingOperator { .. })));
        assert!(matches!(validate("A (B ∨ C)"), Err(ParseError::MissingOperator { .. })));
    }
}

use expr_parser::{Token, TokenKind};
use log::debug;
use tap::Tap;

use crate::assignment::Assignment;
use crate::error::{MalformedExpressionSnafu, Result};

fn pop_operand(stack: &mut Vec<bool>, token: &Token) -> Result<bool> {
    match stack.pop() {
        Some(value) => Ok(value),
        None => MalformedExpressionSnafu {
            reason: format!("operator '{}' is missing an operand", token),
        }
        .fail(),
    }
}

/// Run a postfix sequence against one assignment.
///
/// Binary operators pop their right operand first. Unassigned variables read
/// as `false`. Fails with `MalformedExpression` on stack underflow or when the
/// stack does not end with exactly one value.
pub fn evaluate(postfix: &[Token], assignment: &Assignment) -> Result<bool> {
    let mut stack: Vec<bool> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token.kind() {
            TokenKind::Variable => stack.push(assignment.value(token.text())),
            TokenKind::Not => {
                let arg = pop_operand(&mut stack, token)?;
                stack.push(!arg);
            }
            kind => match kind.binop() {
                Some(op) => {
                    let rhs = pop_operand(&mut stack, token)?;
                    let lhs = pop_operand(&mut stack, token)?;
                    stack.push(op.apply(lhs, rhs));
                }
                None => {
                    return MalformedExpressionSnafu {
                        reason: format!("'{}' cannot appear in a postfix sequence", token),
                    }
                    .fail();
                }
            },
        }
    }

    match stack.as_slice() {
        &[value] => Ok(value).tap(|_| debug!("evaluate(assignment = {}) = {}", assignment, value)),
        _ => MalformedExpressionSnafu {
            reason: format!("expected a single result, but {} values remain", stack.len()),
        }
        .fail(),
    }
}

#[cfg(test)]
mod tests {
    use expr_parser::parse;
    use test_log::test;

    use super::*;
    use crate::error::ErrorKind;

    fn eval(s: &str, values: &[(&str, bool)]) -> Result<bool> {
        let postfix = parse(s)?;
        let assignment: Assignment = values.iter().copied().collect();
        evaluate(&postfix, &assignment)
    }

    #[test]
    fn test_not_and() {
        assert!(eval("¬(A ∧ B)", &[("A", true), ("B", false)]).unwrap());
        assert!(!eval("¬(A ∧ B)", &[("A", true), ("B", true)]).unwrap());
    }

    #[test]
    fn test_imply() {
        assert!(!eval("A → B", &[("A", true), ("B", false)]).unwrap());
        assert!(eval("A → B", &[("A", false), ("B", false)]).unwrap());
        assert!(eval("A → B", &[("A", false), ("B", true)]).unwrap());
        assert!(eval("A → B", &[("A", true), ("B", true)]).unwrap());
    }

    #[test]
    fn test_iff() {
        assert!(eval("A ↔ B", &[("A", false), ("B", false)]).unwrap());
        assert!(!eval("A ↔ B", &[("A", true), ("B", false)]).unwrap());
    }

    #[test]
    fn test_implication_operand_order() {
        // (A → B) → C differs from A → (B → C) when A = B = C = false
        let values = [("A", false), ("B", false), ("C", false)];
        assert!(!eval("(A → B) → C", &values).unwrap());
        assert!(eval("A → B → C", &values).unwrap());
    }

    #[test]
    fn test_unassigned_is_false() {
        assert!(eval("A ∨ ¬Z", &[("A", false)]).unwrap());
    }

    #[test]
    fn test_underflow() {
        let tokens = vec![Token::variable("A"), Token::new(TokenKind::And, '∧')];
        let err = evaluate(&tokens, &Assignment::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedExpression);
    }

    #[test]
    fn test_leftover_values() {
        let tokens = vec![Token::variable("A"), Token::variable("B")];
        let err = evaluate(&tokens, &Assignment::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedExpression);
    }

    #[test]
    fn test_empty() {
        let err = evaluate(&[], &Assignment::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedExpression);
    }

    #[test]
    fn test_paren_in_postfix() {
        let tokens = vec![Token::variable("A"), Token::new(TokenKind::RParen, ')')];
        let err = evaluate(&tokens, &Assignment::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedExpression);
    }
}

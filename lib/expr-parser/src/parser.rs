use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::slice::Iter;

use itertools::Itertools;
use log::debug;

use crate::error::{MalformedExpressionSnafu, ParseError, UnbalancedParenthesesSnafu, UnexpectedTokenSnafu};
use crate::expr::Expr;
use crate::token::{Assoc, Token, TokenKind};

/// Tokens in reverse-Polish order.
///
/// Only [`to_postfix`] and [`Postfix::new`] build one, and both check that
/// evaluating it can never underflow the stack or leave more than one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    pub fn new(tokens: Vec<Token>) -> Result<Self, ParseError> {
        let mut depth = 0usize;
        for token in tokens.iter() {
            let arity = match token.kind().arity() {
                Some(arity) => arity,
                None => {
                    return UnexpectedTokenSnafu { token: token.text() }.fail();
                }
            };
            if depth < arity {
                return MalformedExpressionSnafu {
                    reason: format!("operator '{}' is missing an operand", token),
                }
                .fail();
            }
            depth = depth - arity + 1;
        }
        if depth != 1 {
            return MalformedExpressionSnafu {
                reason: format!("expected a single result, but {} values remain", depth),
            }
            .fail();
        }
        Ok(Postfix { tokens })
    }

    pub fn iter(&self) -> Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Rebuild the expression tree encoded by this sequence.
    pub fn to_expr(&self) -> Result<Expr, ParseError> {
        let missing = |token: &Token| {
            MalformedExpressionSnafu {
                reason: format!("operator '{}' is missing an operand", token),
            }
            .build()
        };

        let mut stack: Vec<Expr> = Vec::with_capacity(self.tokens.len());
        for token in self.tokens.iter() {
            let kind = token.kind();
            if kind == TokenKind::Variable {
                stack.push(Expr::var(token.text()));
            } else if kind == TokenKind::Not {
                let arg = stack.pop().ok_or_else(|| missing(token))?;
                stack.push(Expr::negation(arg));
            } else if let Some(op) = kind.binop() {
                let rhs = stack.pop().ok_or_else(|| missing(token))?;
                let lhs = stack.pop().ok_or_else(|| missing(token))?;
                stack.push(Expr::binop(op, lhs, rhs));
            } else {
                return UnexpectedTokenSnafu { token: token.text() }.fail();
            }
        }

        match (stack.pop(), stack.is_empty()) {
            (Some(expr), true) => Ok(expr),
            _ => MalformedExpressionSnafu {
                reason: "expected a single result",
            }
            .fail(),
        }
    }
}

impl Deref for Postfix {
    type Target = [Token];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl<'a> IntoIterator for &'a Postfix {
    type Item = &'a Token;
    type IntoIter = Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Postfix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tokens.iter().join(" "))
    }
}

/// Shunting-yard conversion of infix tokens into a [`Postfix`] sequence.
///
/// Variables go straight to the output. An operator first moves to the output
/// every stacked operator that binds tighter, or equally tight when the
/// incoming one is left-associative, and is then pushed itself.
pub fn to_postfix(tokens: &[Token]) -> Result<Postfix, ParseError> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<&Token> = Vec::new();

    for token in tokens {
        debug!("token = {:?}, ops = [{}]", token.text(), ops.iter().join(" "));
        match token.kind() {
            TokenKind::Variable => output.push(token.clone()),
            TokenKind::LParen => ops.push(token),
            TokenKind::RParen => loop {
                match ops.pop() {
                    Some(top) if top.kind() == TokenKind::LParen => break,
                    Some(top) => output.push(top.clone()),
                    None => return UnbalancedParenthesesSnafu { missing: '(' }.fail(),
                }
            },
            kind => {
                let prec = match kind.precedence() {
                    Some(prec) => prec,
                    None => return UnexpectedTokenSnafu { token: token.text() }.fail(),
                };
                while let Some(&top) = ops.last() {
                    let top_prec = match top.kind().precedence() {
                        Some(p) => p,
                        None => break, // '('
                    };
                    if top_prec > prec || (top_prec == prec && kind.assoc() == Assoc::Left) {
                        output.push(top.clone());
                        ops.pop();
                    } else {
                        break;
                    }
                }
                ops.push(token);
            }
        }
    }

    while let Some(top) = ops.pop() {
        if matches!(top.kind(), TokenKind::LParen | TokenKind::RParen) {
            return UnbalancedParenthesesSnafu { missing: ')' }.fail();
        }
        output.push(top.clone());
    }

    debug!("postfix = [{}]", output.iter().join(" "));
    Postfix::new(output)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::normalize::normalize;
    use crate::token::tokenize;

    fn postfix(s: &str) -> Result<String, ParseError> {
        let tokens = tokenize(&normalize(s))?;
        to_postfix(&tokens).map(|p| p.to_string())
    }

    #[test]
    fn test_single_var() {
        assert_eq!(postfix("x1"), Ok("x1".to_string()));
    }

    #[test]
    fn test_braced_single_var() {
        assert_eq!(postfix("((x1))"), Ok("x1".to_string()));
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        assert_eq!(postfix("A ∨ B ∧ C"), Ok("A B C ∧ ∨".to_string()));
        assert_eq!(postfix("A ∧ B ∨ C"), Ok("A B ∧ C ∨".to_string()));
    }

    #[test]
    fn test_not_binds_tightest() {
        assert_eq!(postfix("¬A ∧ B"), Ok("A ¬ B ∧".to_string()));
        assert_eq!(postfix("¬(A ∧ B)"), Ok("A B ∧ ¬".to_string()));
    }

    #[test]
    fn test_double_negation() {
        assert_eq!(postfix("¬¬A"), Ok("A ¬ ¬".to_string()));
        assert_eq!(postfix("~~(~x1 && ~x2)"), Ok("x1 ¬ x2 ¬ ∧ ¬ ¬".to_string()));
    }

    #[test]
    fn test_conjunction_is_left_associative() {
        assert_eq!(postfix("A ∧ B ∧ C"), Ok("A B ∧ C ∧".to_string()));
    }

    #[test]
    fn test_implication_is_right_associative() {
        assert_eq!(postfix("A → B → C"), Ok("A B C → →".to_string()));
        assert_eq!(postfix("x1 -> ~x2 -> x3"), Ok("x1 x2 ¬ x3 → →".to_string()));
    }

    #[test]
    fn test_iff_is_left_associative() {
        assert_eq!(postfix("A ↔ B ↔ C"), Ok("A B ↔ C ↔".to_string()));
    }

    #[test]
    fn test_iff_binds_loosest() {
        assert_eq!(postfix("A → B ↔ C ∨ D"), Ok("A B → C D ∨ ↔".to_string()));
    }

    #[test]
    fn test_lone_open_paren() {
        assert_eq!(postfix("("), Err(ParseError::UnbalancedParentheses { missing: ')' }));
    }

    #[test]
    fn test_unclosed_paren() {
        assert_eq!(postfix("(A ∧ B"), Err(ParseError::UnbalancedParentheses { missing: ')' }));
    }

    #[test]
    fn test_missing_open_paren() {
        assert_eq!(postfix("A ∧ B)"), Err(ParseError::UnbalancedParentheses { missing: '(' }));
    }

    #[test]
    fn test_missing_operand() {
        assert!(matches!(postfix("A ∧"), Err(ParseError::MalformedExpression { .. })));
        assert!(matches!(postfix("∨ B"), Err(ParseError::MalformedExpression { .. })));
        assert!(matches!(postfix("¬"), Err(ParseError::MalformedExpression { .. })));
    }

    #[test]
    fn test_missing_operator() {
        assert!(matches!(postfix("A B"), Err(ParseError::MalformedExpression { .. })));
    }

    #[test]
    fn test_empty() {
        assert!(matches!(postfix(""), Err(ParseError::MalformedExpression { .. })));
        assert!(matches!(postfix("()"), Err(ParseError::MalformedExpression { .. })));
    }

    #[test]
    fn test_postfix_new_rejects_parens() {
        let tokens = vec![Token::variable("A"), Token::new(TokenKind::LParen, '(')];
        assert_eq!(
            Postfix::new(tokens),
            Err(ParseError::UnexpectedToken { token: "(".to_string() })
        );
    }

    #[test]
    fn test_to_expr() {
        let tokens = tokenize("A ∨ B ∧ ¬C → D").unwrap();
        let expr = to_postfix(&tokens).unwrap().to_expr().unwrap();
        assert_eq!(expr.to_string(), "((A ∨ (B ∧ ¬C)) → D)");
    }

    #[test]
    fn test_to_expr_implication_chain() {
        let tokens = tokenize("A → B → C").unwrap();
        let expr = to_postfix(&tokens).unwrap().to_expr().unwrap();
        assert_eq!(expr.to_string(), "(A → (B → C))");
    }
}

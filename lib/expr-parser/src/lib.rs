//! Front end for propositional formulas.
//!
//! Raw text goes through [`normalize`], then [`tokenize`], and finally
//! [`to_postfix`], which produces a validated reverse-Polish [`Postfix`]
//! sequence ready for evaluation.

pub mod error;
pub mod expr;
pub mod normalize;
pub mod parser;
pub mod token;
pub mod validate;

pub use error::ParseError;
pub use expr::{BinOp, Expr};
pub use normalize::normalize;
pub use parser::{to_postfix, Postfix};
pub use token::{tokenize, Assoc, Token, TokenKind};
pub use validate::validate;

/// Normalize, tokenize and parse `input` in one go.
pub fn parse(input: &str) -> Result<Postfix, ParseError> {
    let tokens = tokenize(&normalize(input))?;
    to_postfix(&tokens)
}

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use expr_parser::{normalize, to_postfix, tokenize, Expr, Postfix};
use log::debug;

use crate::assignment::{variable_set, Assignment};
use crate::error::{Error, Result};
use crate::eval::evaluate;

/// A formula compiled into its postfix sequence, together with its
/// normalized source text and its variable set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    text: String,
    postfix: Postfix,
    variables: Vec<String>,
}

impl Formula {
    pub fn parse(input: &str) -> Result<Self> {
        Self::from_normalized(normalize(input))
    }

    /// Compile text that is already in normal symbol form.
    pub fn from_normalized(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let tokens = tokenize(&text)?;
        let variables = variable_set(&tokens);
        let postfix = to_postfix(&tokens)?;
        debug!("Formula({:?}): postfix = {}, variables = {:?}", text, postfix, variables);
        Ok(Formula {
            text,
            postfix,
            variables,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn postfix(&self) -> &Postfix {
        &self.postfix
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn eval(&self, assignment: &Assignment) -> Result<bool> {
        evaluate(&self.postfix, assignment)
    }

    pub fn to_expr(&self) -> Result<Expr> {
        Ok(self.postfix.to_expr()?)
    }
}

impl FromStr for Formula {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Formula::parse(s)
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::truth::Truth;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Classification {
    Tautology,
    Contradiction,
    Contingency,
}

/// Label a result vector.
///
/// `Undefined` cells are neither true nor false, so a vector containing one
/// is never a tautology or a contradiction.
pub fn classify(results: &[Truth]) -> Classification {
    if results.iter().all(Truth::is_true) {
        Classification::Tautology
    } else if results.iter().all(Truth::is_false) {
        Classification::Contradiction
    } else {
        Classification::Contingency
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use Classification::*;
        match self {
            Tautology => write!(f, "Tautology"),
            Contradiction => write!(f, "Contradiction"),
            Contingency => write!(f, "Contingency"),
        }
    }
}

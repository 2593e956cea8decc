use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

/// One cell of a result vector.
///
/// `Undefined` marks a row where a subexpression could not be evaluated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Truth {
    True,
    False,
    Undefined,
}

impl Truth {
    pub fn bool(&self) -> Option<bool> {
        match self {
            Truth::True => Some(true),
            Truth::False => Some(false),
            Truth::Undefined => None,
        }
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Truth::True)
    }

    pub fn is_false(&self) -> bool {
        matches!(self, Truth::False)
    }
}

impl From<bool> for Truth {
    fn from(b: bool) -> Self {
        if b {
            Truth::True
        } else {
            Truth::False
        }
    }
}

impl Display for Truth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use Truth::*;
        match self {
            True => write!(f, "T"),
            False => write!(f, "F"),
            Undefined => write!(f, "?"),
        }
    }
}

impl Serialize for Truth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bool().serialize(serializer)
    }
}

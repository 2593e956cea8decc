use std::fmt::{Display, Formatter};
use std::ops;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Var(String),
    Negation { arg: Box<Expr> },
    BinOp { op: BinOp, lhs: Box<Expr>, rhs: Box<Expr> },
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn negation(arg: Expr) -> Self {
        Expr::Negation { arg: Box::new(arg) }
    }

    pub fn binop(op: BinOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::BinOp {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn imply(lhs: Expr, rhs: Expr) -> Self {
        Expr::binop(BinOp::Imply, lhs, rhs)
    }

    pub fn iff(lhs: Expr, rhs: Expr) -> Self {
        Expr::binop(BinOp::Iff, lhs, rhs)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinOp {
    And,
    Or,
    Imply,
    Iff,
}

impl BinOp {
    pub fn apply(&self, lhs: bool, rhs: bool) -> bool {
        match self {
            BinOp::And => lhs && rhs,
            BinOp::Or => lhs || rhs,
            BinOp::Imply => !lhs || rhs,
            BinOp::Iff => lhs == rhs,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            match self {
                Expr::Var(v) => {
                    write!(f, "{v}")
                }
                Expr::Negation { arg } => {
                    write!(f, "not {arg:#}")
                }
                Expr::BinOp { op, lhs, rhs } => {
                    write!(f, "({lhs:#} {op:#} {rhs:#})")
                }
            }
        } else {
            match self {
                Expr::Var(v) => {
                    write!(f, "{v}")
                }
                Expr::Negation { arg } => {
                    write!(f, "¬{arg}")
                }
                Expr::BinOp { op, lhs, rhs } => {
                    write!(f, "({lhs} {op} {rhs})")
                }
            }
        }
    }
}

impl Display for BinOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            if f.alternate() {
                match self {
                    BinOp::And => "and",
                    BinOp::Or => "or",
                    BinOp::Imply => "imply",
                    BinOp::Iff => "iff",
                }
            } else {
                match self {
                    BinOp::And => "∧",
                    BinOp::Or => "∨",
                    BinOp::Imply => "→",
                    BinOp::Iff => "↔",
                }
            }
        )
    }
}

impl ops::Not for Expr {
    type Output = Self;

    fn not(self) -> Self::Output {
        Expr::negation(self)
    }
}

impl ops::BitAnd for Expr {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Expr::binop(BinOp::And, self, rhs)
    }
}

impl ops::BitOr for Expr {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expr::binop(BinOp::Or, self, rhs)
    }
}

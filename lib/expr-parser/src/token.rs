use std::fmt::{Display, Formatter};

use log::debug;

use crate::error::{InvalidCharacterSnafu, ParseError};
use crate::expr::BinOp;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Variable,
    Not,
    And,
    Or,
    Imply,
    Iff,
    LParen,
    RParen,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

impl TokenKind {
    pub fn from_symbol(c: char) -> Option<Self> {
        use TokenKind::*;
        match c {
            '¬' => Some(Not),
            '∧' => Some(And),
            '∨' => Some(Or),
            '→' => Some(Imply),
            '↔' => Some(Iff),
            '(' => Some(LParen),
            ')' => Some(RParen),
            _ => None,
        }
    }

    pub fn is_binary(&self) -> bool {
        self.binop().is_some()
    }

    pub fn binop(&self) -> Option<BinOp> {
        use TokenKind::*;
        match self {
            And => Some(BinOp::And),
            Or => Some(BinOp::Or),
            Imply => Some(BinOp::Imply),
            Iff => Some(BinOp::Iff),
            _ => None,
        }
    }

    /// Binding strength, from `¬` (4) down to `↔` (0).
    pub fn precedence(&self) -> Option<u8> {
        use TokenKind::*;
        match self {
            Not => Some(4),
            And => Some(3),
            Or => Some(2),
            Imply => Some(1),
            Iff => Some(0),
            _ => None,
        }
    }

    /// `→` groups to the right. `¬` is a prefix operator and never pops
    /// another `¬` off the stack, so `¬¬A` reads as `¬(¬A)`.
    /// `↔` groups to the left by convention; the result is the same either way.
    pub fn assoc(&self) -> Assoc {
        match self {
            TokenKind::Not | TokenKind::Imply => Assoc::Right,
            _ => Assoc::Left,
        }
    }

    /// Number of operands taken from the evaluation stack.
    pub fn arity(&self) -> Option<usize> {
        use TokenKind::*;
        match self {
            Variable => Some(0),
            Not => Some(1),
            And | Or | Imply | Iff => Some(2),
            LParen | RParen => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use TokenKind::*;
        write!(
            f,
            "{}",
            match self {
                Variable => "VARIABLE",
                Not => "NOT",
                And => "AND",
                Or => "OR",
                Imply => "IMPLIES",
                Iff => "IFF",
                LParen => "LPAREN",
                RParen => "RPAREN",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token { kind, text: text.into() }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Token::new(TokenKind::Variable, name)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split normalized text into tokens.
///
/// Spaces are skipped, operator symbols and parentheses become single-character
/// tokens, and a letter starts a variable that extends over letters, digits
/// and underscores. Anything else is an [`ParseError::InvalidCharacter`],
/// reported with its 0-based character position.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().enumerate().peekable();

    while let Some((index, (start, c))) = chars.next() {
        if c == ' ' {
            continue;
        }
        if let Some(kind) = TokenKind::from_symbol(c) {
            tokens.push(Token::new(kind, c));
            continue;
        }
        if c.is_ascii_alphabetic() {
            let mut end = start + c.len_utf8();
            while let Some(&(_, (i, next))) = chars.peek() {
                if !is_ident_char(next) {
                    break;
                }
                end = i + next.len_utf8();
                chars.next();
            }
            tokens.push(Token::variable(&input[start..end]));
            continue;
        }
        return InvalidCharacterSnafu { ch: c, index }.fail();
    }

    debug!("tokens = [{}]", itertools::join(tokens.iter(), ", "));
    Ok(tokens)
}

use std::fmt;

use thiserror::Error;

use crate::CompareOp;

/// Location of a token in the rule source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl Position {
    pub(crate) fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Reserved words of the rule grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    On,
    If,
    And,
    Or,
    Not,
}

/// Why the lexer could not produce a regular token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unrecognized character")]
    UnrecognizedCharacter,
    #[error("invalid number literal")]
    InvalidNumber,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Identifier(String),
    Keyword(Keyword),
    String(String),
    Int(i64),
    Float(f32),
    Double(f64),
    Bool(bool),
    Operator(CompareOp),
    LeftParen,
    RightParen,
    Comma,
    Error(LexErrorKind),
    Eof,
}

impl TokenKind {
    /// Short description used in parse diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Identifier(name) => format!("identifier `{name}`"),
            TokenKind::Keyword(kw) => format!("keyword `{}`", kw.as_str()),
            TokenKind::String(_) => "string literal".to_owned(),
            TokenKind::Int(_) | TokenKind::Float(_) | TokenKind::Double(_) => {
                "number literal".to_owned()
            }
            TokenKind::Bool(v) => format!("`{v}`"),
            TokenKind::Operator(op) => format!("operator `{op}`"),
            TokenKind::LeftParen => "`(`".to_owned(),
            TokenKind::RightParen => "`)`".to_owned(),
            TokenKind::Comma => "`,`".to_owned(),
            TokenKind::Error(kind) => kind.to_string(),
            TokenKind::Eof => "end of input".to_owned(),
        }
    }
}

impl Keyword {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::On => "on",
            Keyword::If => "if",
            Keyword::And => "and",
            Keyword::Or => "or",
            Keyword::Not => "not",
        }
    }
}

/// A single lexed token. `lexeme` borrows the exact source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'s> {
    pub kind: TokenKind,
    pub lexeme: &'s str,
    pub position: Position,
}

impl Token<'_> {
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

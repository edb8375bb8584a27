use thiserror::Error;

use crate::lex::{LexErrorKind, Position};

/// Errors produced when parsing rule text.
///
/// The parser stops at the first offending token; no partial rule is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("lex error at {position}: {kind}")]
    Lex {
        position: Position,
        kind: LexErrorKind,
    },

    #[error("parse error at {position}: expected {}, found {found}", expected.join(" or "))]
    Unexpected {
        position: Position,
        found: String,
        expected: Vec<&'static str>,
    },
}

impl ParseError {
    /// Where in the source the error was detected.
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            ParseError::Lex { position, .. } | ParseError::Unexpected { position, .. } => {
                *position
            }
        }
    }
}

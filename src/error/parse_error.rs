use thiserror::Error;

use crate::interpreter::lexer::TokenType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during parsing.
///
/// Positions are indices into the token sequence, not byte offsets.
pub enum ParseError {
    /// A token was found where a different one was required.
    #[error("Error on line {line}: Expected {} but found '{found}' (token {position}).",
            describe(.expected))]
    Expected {
        /// The token types that would have been accepted.
        expected: Vec<TokenType>,
        /// The source text of the token actually found.
        found:    String,
        /// Index of the offending token.
        position: usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The tokens ran out while a construct was still incomplete.
    #[error("Unexpected end of input: expected {} (token {position}).", describe(.expected))]
    UnexpectedEndOfInput {
        /// The token types that would have been accepted.
        expected: Vec<TokenType>,
        /// Index one past the last token.
        position: usize,
    },
}

impl ParseError {
    /// The token types the parser was looking for.
    #[must_use]
    pub fn expected(&self) -> &[TokenType] {
        match self {
            Self::Expected { expected, .. } | Self::UnexpectedEndOfInput { expected, .. } => {
                expected
            },
        }
    }

    /// Index of the token at which parsing stopped.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Expected { position, .. } | Self::UnexpectedEndOfInput { position, .. } => {
                *position
            },
        }
    }
}

/// Renders a list of candidates as `a`, `a or b`, `a, b or c`.
fn describe(expected: &[TokenType]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let init = init.iter().map(ToString::to_string).collect::<Vec<_>>();
            format!("{} or {last}", init.join(", "))
        },
    }
}

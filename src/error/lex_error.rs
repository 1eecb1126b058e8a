use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// No token rule matches at this position.
    #[error("Error on line {line}: Unexpected character '{text}' at offset {position}.")]
    UnexpectedCharacter {
        /// The unmatched source text.
        text:     String,
        /// Byte offset into the source.
        position: usize,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl LexError {
    /// Byte offset of the offending text.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. } => *position,
        }
    }
}

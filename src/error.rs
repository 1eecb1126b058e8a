use thiserror::Error;

/// Lexing errors.
///
/// Raised when no token rule matches at the current source position.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the errors raised while building the syntax tree: missing
/// operands, unmatched parentheses, missing assignment operators and missing
/// statement terminators.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while executing a syntax tree, such as
/// references to unbound variables or assignments to something other than a
/// variable.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any error that aborts a run.
///
/// Each phase has its own error type; this enum lets the whole pipeline
/// propagate them with `?`.
#[derive(Debug, Error)]
pub enum Error {
    /// The source could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens do not form a valid program.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while running.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

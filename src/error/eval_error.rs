use thiserror::Error;

#[derive(Debug, Error)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// Tried to read a variable that was never assigned.
    #[error("Error on line {line}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left-hand side of an assignment is not a variable.
    #[error("Error on line {line}: Assignment target must be a variable, found '{target}'.")]
    InvalidAssignmentTarget {
        /// The offending target, as source text.
        target: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A number literal does not fit a 64-bit signed integer.
    #[error("Error on line {line}: Invalid integer literal '{text}'.")]
    InvalidNumber {
        /// The literal text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic overflowed.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operand produced no value.
    #[error("Error on line {line}: Value missing.")]
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing printed output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Core evaluation logic and context management.
///
/// Contains the evaluation [`core::Context`], node dispatch and the leaf
/// rules for numbers and variables.
pub mod core;

/// Binary operator evaluation: addition, subtraction and assignment.
pub mod binary;

/// Unary operator evaluation: printing.
pub mod unary;

pub use self::core::{Context, EvalResult};

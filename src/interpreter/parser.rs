/// The parser cursor and the program-level rule.
///
/// Holds the [`core::Parser`] struct, its token matching primitives and the
/// top-level `parse_code` loop that splits the program into statements.
pub mod core;

/// Statement rules: print statements and assignments.
pub mod statement;

/// Addition and subtraction chains.
pub mod binary;

/// Operands: literals, variables and parenthesized formulas.
pub mod unary;

pub use self::core::{ParseResult, Parser};

//! # tally
//!
//! tally is an interpreter for a tiny imperative language written in Rust.
//! A program is a sequence of `;`-terminated statements that assign integer
//! values to variables or print them:
//!
//! ```text
//! code := 5 - 9;
//! LOG code;
//! sum := 0 - 6;
//! LOG sum - (5 + 3);
//! ```
//!
//! Source text goes through three strictly sequential phases: the lexer
//! turns it into tokens, the parser builds a syntax tree, and the evaluator
//! walks the tree. The first error in any phase aborts the run.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, Write};

use crate::interpreter::{evaluator::Context, lexer::tokenize, parser::Parser, scope::Scope};

/// Defines the structure of parsed code.
///
/// This module declares the [`ast::Node`] enum and the operator enums that
/// represent a parsed program as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one node variant per language construct.
/// - Keeps the source token of each node for values, names and error
///   locations.
/// - Writes a tree back out as source text.
pub mod ast;
/// Provides the error types for lexing, parsing and evaluation.
///
/// Every failure mode of the pipeline is described by one of these types,
/// together with the location it happened at.
///
/// # Responsibilities
/// - Defines one error enum per phase and a crate-level [`error::Error`].
/// - Attaches line numbers and positions for context.
/// - Implements `std::error::Error` and `Display` for reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing and evaluation, and holds the
/// runtime scope.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use error::Error;

/// Runs a program, printing to stdout, and returns the final variable scope.
///
/// # Errors
/// Returns the first lexing, parsing or evaluation error. Lines printed
/// before an evaluation error stay printed.
///
/// # Examples
/// ```
/// use tally::run;
///
/// let scope = run("x := 1 + 2; LOG x;").unwrap();
/// assert_eq!(scope.get("x"), Some(3));
///
/// // `y` is never assigned.
/// assert!(run("LOG y;").is_err());
/// ```
pub fn run(source: &str) -> Result<Scope, Error> {
    run_with_output(source, io::stdout().lock())
}

/// Runs a program, writing printed lines to `output`, and returns the final
/// variable scope.
///
/// The source is tokenized completely before parsing starts, and parsed
/// completely before evaluation starts, so lexical and syntax errors never
/// produce any output.
///
/// # Errors
/// Returns the first lexing, parsing or evaluation error.
///
/// # Examples
/// ```
/// use tally::run_with_output;
///
/// let mut output = Vec::new();
/// let source = "code := 5 - 9; LOG code; sum := 0 - 6; LOG sum; LOG sum - (5 + 3);";
/// run_with_output(source, &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "-4\n-6\n-14\n");
/// ```
pub fn run_with_output<W: Write>(source: &str, output: W) -> Result<Scope, Error> {
    let tokens = tokenize(source)?;
    let root = Parser::new(&tokens).parse_code()?;

    let mut context = Context::with_output(output);
    context.evaluate(&root)?;

    Ok(context.into_scope())
}

/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the syntax tree produced by the parser, keeps the
/// variable scope up to date and writes the output of print statements. It is
/// the last stage of interpretation.
///
/// # Responsibilities
/// - Evaluates AST nodes: literals, variables, arithmetic and assignment.
/// - Executes print statements in source order.
/// - Reports runtime errors such as undefined variables or overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens,
/// each classified by its [`lexer::TokenType`] and carrying its source slice
/// and position. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input text into tokens with type and source location.
/// - Drops whitespace and comments.
/// - Reports lexical errors for text no token rule matches.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser walks the token sequence with a single cursor and builds a
/// statement list by recursive descent.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Validates the grammar, reporting the expected tokens and the position
///   where they were missing.
pub mod parser;
/// The variable scope of a run.
pub mod scope;

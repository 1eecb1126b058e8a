use std::io::{self, Write};

use crate::{
    ast::Node,
    error::EvalError,
    interpreter::{lexer::Token, scope::Scope},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the runtime evaluation context.
///
/// A context owns the [`Scope`] of one run and the sink that print statements
/// write to. Output goes to stdout unless another writer is supplied with
/// [`Context::with_output`].
///
/// ## Usage
///
/// Create a context, pass it the root of a parsed program with
/// [`Context::evaluate`], then take the final variable bindings back with
/// [`Context::into_scope`].
pub struct Context<W = io::Stdout> {
    pub(super) scope:  Scope,
    pub(super) output: W,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a context with an empty scope that prints to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl<W: Write> Context<W> {
    /// Creates a context with an empty scope that prints to `output`.
    #[must_use]
    pub fn with_output(output: W) -> Self {
        Self { scope: Scope::new(),
               output }
    }

    /// The variables bound so far.
    #[must_use]
    pub const fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Ends the run, handing back the final variable bindings.
    #[must_use]
    pub fn into_scope(self) -> Scope {
        self.scope
    }

    /// Evaluates a node and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. The evaluator dispatches
    /// on the node variant:
    /// - numbers and variables yield their value,
    /// - additions, subtractions and assignments yield the computed value,
    /// - print statements write a line and yield nothing,
    /// - a statement list runs its statements in order and yields nothing.
    ///
    /// Side effects that already happened stay when a later statement fails.
    ///
    /// # Errors
    /// The first [`EvalError`] raised anywhere in the tree.
    ///
    /// # Examples
    /// ```
    /// use tally::interpreter::{evaluator::Context, lexer::tokenize, parser::Parser};
    ///
    /// let tokens = tokenize("x := 2 + 3; LOG x;").unwrap();
    /// let root = Parser::new(&tokens).parse_code().unwrap();
    ///
    /// let mut output = Vec::new();
    /// let mut context = Context::with_output(&mut output);
    /// assert_eq!(context.evaluate(&root).unwrap(), None);
    ///
    /// let scope = context.into_scope();
    /// assert_eq!(scope.get("x"), Some(5));
    /// assert_eq!(String::from_utf8(output).unwrap(), "5\n");
    /// ```
    pub fn evaluate(&mut self, node: &Node<'_>) -> EvalResult<Option<i64>> {
        match node {
            Node::Number { token } => Self::eval_number(token).map(Some),
            Node::Variable { token } => self.eval_variable(token).map(Some),
            Node::Unary { op, token, operand } => self.eval_unary_op(*op, token, operand),
            Node::Binary { op,
                           token,
                           left,
                           right, } => self.eval_binary_op(*op, token, left, right).map(Some),
            Node::StatementList { items } => {
                for item in items {
                    self.evaluate(item)?;
                }
                Ok(None)
            },
        }
    }

    /// Evaluates a node that has to produce a value, such as an operand.
    pub(super) fn eval_value(&mut self, node: &Node<'_>, line: usize) -> EvalResult<i64> {
        self.evaluate(node)?
            .ok_or(EvalError::MissingValue { line })
    }

    fn eval_number(token: &Token<'_>) -> EvalResult<i64> {
        token.text
             .parse()
             .map_err(|_| EvalError::InvalidNumber { text: token.text.to_string(),
                                                     line: token.line, })
    }

    fn eval_variable(&self, token: &Token<'_>) -> EvalResult<i64> {
        self.scope
            .get(token.text)
            .ok_or_else(|| EvalError::UndefinedVariable { name: token.text.to_string(),
                                                          line: token.line, })
    }
}

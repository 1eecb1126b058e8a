use std::io::Write;

use crate::{
    ast::{BinaryOperator, Node},
    error::EvalError,
    interpreter::{evaluator::core::{Context, EvalResult}, lexer::Token},
};

impl<W: Write> Context<W> {
    /// Evaluates a binary operation.
    ///
    /// Arithmetic evaluates the left operand first, then the right, and fails
    /// on overflow instead of wrapping.
    pub(super) fn eval_binary_op(&mut self,
                                 op: BinaryOperator,
                                 token: &Token<'_>,
                                 left: &Node<'_>,
                                 right: &Node<'_>)
                                 -> EvalResult<i64> {
        let line = token.line;
        let result = match op {
            BinaryOperator::Add => {
                let lhs = self.eval_value(left, line)?;
                let rhs = self.eval_value(right, line)?;
                lhs.checked_add(rhs)
            },
            BinaryOperator::Sub => {
                let lhs = self.eval_value(left, line)?;
                let rhs = self.eval_value(right, line)?;
                lhs.checked_sub(rhs)
            },
            BinaryOperator::Assign => return self.eval_assignment(left, right, line),
        };

        result.ok_or(EvalError::Overflow { line })
    }

    /// Binds the value of `right` to the variable `left` and returns it.
    ///
    /// The value is computed before the target is checked.
    fn eval_assignment(&mut self, left: &Node<'_>, right: &Node<'_>, line: usize) -> EvalResult<i64> {
        let value = self.eval_value(right, line)?;

        let Node::Variable { token: target } = left else {
            return Err(EvalError::InvalidAssignmentTarget { target: left.to_string(),
                                                            line });
        };

        log::trace!("{} := {value}", target.text);
        self.scope.assign(target.text, value);

        Ok(value)
    }
}

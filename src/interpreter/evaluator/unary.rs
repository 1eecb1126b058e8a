use std::io::Write;

use crate::{
    ast::{Node, UnaryOperator},
    interpreter::{evaluator::core::{Context, EvalResult}, lexer::Token},
};

impl<W: Write> Context<W> {
    pub(super) fn eval_unary_op(&mut self,
                                op: UnaryOperator,
                                token: &Token<'_>,
                                operand: &Node<'_>)
                                -> EvalResult<Option<i64>> {
        match op {
            UnaryOperator::Print => {
                let value = self.eval_value(operand, token.line)?;
                log::trace!("print {value}");

                // Flushed per line so output keeps execution order.
                writeln!(self.output, "{value}")?;
                self.output.flush()?;

                Ok(None)
            },
        }
    }
}

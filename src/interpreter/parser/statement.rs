use crate::{
    ast::{BinaryOperator, Node, UnaryOperator},
    interpreter::{
        lexer::TokenType,
        parser::core::{ParseResult, Parser},
    },
};

impl<'src> Parser<'_, 'src> {
    /// Parses a single statement, without its terminator.
    ///
    /// A statement that starts with a variable or a number is an assignment,
    /// and the `:=` after it is mandatory: a bare `x;` is rejected. Anything
    /// else must be a print statement.
    ///
    /// # Errors
    /// Returns a `ParseError` if the statement is neither form, or if its
    /// formula is malformed.
    pub fn parse_statement(&mut self) -> ParseResult<Node<'src>> {
        match self.peek().map(|token| token.kind) {
            Some(TokenType::Variable | TokenType::Number) => self.parse_assignment(),
            _ => self.parse_print_statement(),
        }
    }

    /// Parses `LOG <formula>`.
    ///
    /// # Errors
    /// Returns a `ParseError` if `LOG` or the formula is missing.
    pub fn parse_print_statement(&mut self) -> ParseResult<Node<'src>> {
        let token = self.require(&[TokenType::Log])?;
        let operand = self.parse_formula()?;

        Ok(Node::Unary { op: UnaryOperator::Print,
                         token,
                         operand: Box::new(operand) })
    }

    /// Parses `<target> := <formula>`.
    ///
    /// A number is accepted as the target here; it is the evaluator that
    /// rejects assigning to anything but a variable.
    ///
    /// # Errors
    /// Returns a `ParseError` if the target, `:=` or the formula is missing.
    pub fn parse_assignment(&mut self) -> ParseResult<Node<'src>> {
        let target = self.require(&[TokenType::Variable, TokenType::Number])?;
        let target = if target.kind == TokenType::Number {
            Node::Number { token: target }
        } else {
            Node::Variable { token: target }
        };

        let token = self.require(&[TokenType::Assign])?;
        let value = self.parse_formula()?;

        Ok(Node::Binary { op: BinaryOperator::Assign,
                          token,
                          left: Box::new(target),
                          right: Box::new(value) })
    }
}

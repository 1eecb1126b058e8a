use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::TokenType,
        parser::core::{ParseResult, Parser},
    },
};

impl<'src> Parser<'_, 'src> {
    /// Parses addition and subtraction chains.
    ///
    /// The operators are left-associative: `a - b - c` becomes
    /// `(a - b) - c`.
    ///
    /// The rule is: `formula := operand (("+" | "-") operand)*`
    ///
    /// # Errors
    /// Returns a `ParseError` if an operand is missing or malformed.
    pub fn parse_formula(&mut self) -> ParseResult<Node<'src>> {
        let mut left = self.parse_operand()?;

        while let Some(token) = self.match_any(&[TokenType::Plus, TokenType::Minus]) {
            let op = if token.kind == TokenType::Plus {
                BinaryOperator::Add
            } else {
                BinaryOperator::Sub
            };
            let right = self.parse_operand()?;
            left = Node::Binary { op,
                                  token,
                                  left: Box::new(left),
                                  right: Box::new(right) };
        }

        Ok(left)
    }
}

use crate::{
    ast::Node,
    interpreter::{
        lexer::TokenType,
        parser::core::{ParseResult, Parser},
    },
};

impl<'src> Parser<'_, 'src> {
    /// Parses one operand of a formula.
    ///
    /// Grammar: `operand := "(" formula ")" | NUMBER | VARIABLE`
    ///
    /// A parenthesized formula yields the inner node itself; grouping only
    /// shapes the tree.
    ///
    /// # Errors
    /// - `Expected` if no operand starts at the cursor.
    /// - `Expected` or `UnexpectedEndOfInput` if a `(` is never closed.
    pub fn parse_operand(&mut self) -> ParseResult<Node<'src>> {
        let token = self.require(&[TokenType::LPar, TokenType::Number, TokenType::Variable])?;

        match token.kind {
            TokenType::LPar => {
                let formula = self.parse_formula()?;
                self.require(&[TokenType::RPar])?;
                Ok(formula)
            },
            TokenType::Number => Ok(Node::Number { token }),
            _ => Ok(Node::Variable { token }),
        }
    }
}

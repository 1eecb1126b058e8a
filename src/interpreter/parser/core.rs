use crate::{
    ast::Node,
    error::ParseError,
    interpreter::lexer::{Token, TokenType},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser over a token sequence.
///
/// The only state is a read cursor into the borrowed tokens. Each grammar
/// rule is a method that either consumes the tokens of one complete construct
/// and returns its node, or fails with a [`ParseError`].
///
/// Grammar, in descending precedence:
/// ```text
///     code           := (statement ";")*
///     statement      := printStatement | assignment
///     printStatement := LOG formula
///     assignment     := (VARIABLE | NUMBER) ":=" formula
///     formula        := operand (("+" | "-") operand)*
///     operand        := "(" formula ")" | NUMBER | VARIABLE
/// ```
#[derive(Debug, Clone)]
pub struct Parser<'t, 'src> {
    tokens:   &'t [Token<'src>],
    position: usize,
}

impl<'t, 'src> Parser<'t, 'src> {
    /// Creates a parser positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'t [Token<'src>]) -> Self {
        Self { tokens,
               position: 0 }
    }

    /// Index of the next unread token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Whether every token has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// The token at the cursor, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&Token<'src>> {
        self.tokens.get(self.position)
    }

    /// Consumes the token at the cursor if it has one of the `expected` types.
    ///
    /// On a miss nothing happens and `None` is returned.
    ///
    /// # Examples
    /// ```
    /// use tally::interpreter::{lexer::{TokenType, tokenize}, parser::Parser};
    ///
    /// let tokens = tokenize("LOG 1;").unwrap();
    /// let mut parser = Parser::new(&tokens);
    ///
    /// assert!(parser.match_any(&[TokenType::Variable]).is_none());
    /// assert_eq!(parser.position(), 0);
    /// assert_eq!(parser.match_any(&[TokenType::Variable, TokenType::Log]).map(|t| t.text),
    ///            Some("LOG"));
    /// assert_eq!(parser.position(), 1);
    /// ```
    pub fn match_any(&mut self, expected: &[TokenType]) -> Option<Token<'src>> {
        let token = *self.peek()?;
        if expected.contains(&token.kind) {
            self.position += 1;
            Some(token)
        } else {
            None
        }
    }

    /// Like [`Parser::match_any`], but a miss is an error.
    ///
    /// # Errors
    /// - `Expected` if the token at the cursor has none of the `expected`
    ///   types.
    /// - `UnexpectedEndOfInput` if there are no tokens left.
    pub fn require(&mut self, expected: &[TokenType]) -> ParseResult<Token<'src>> {
        if let Some(token) = self.match_any(expected) {
            return Ok(token);
        }

        Err(match self.peek() {
            Some(found) => ParseError::Expected { expected: expected.to_vec(),
                                                  found:    found.text.to_string(),
                                                  position: self.position,
                                                  line:     found.line, },
            None => ParseError::UnexpectedEndOfInput { expected: expected.to_vec(),
                                                       position: self.position, },
        })
    }

    /// Parses the whole token sequence into a [`Node::StatementList`].
    ///
    /// Statements are parsed one at a time, each followed by a mandatory `;`,
    /// until the tokens run out. An empty token sequence gives an empty list.
    ///
    /// # Errors
    /// The first [`ParseError`] raised by any statement, or a missing `;`.
    pub fn parse_code(&mut self) -> ParseResult<Node<'src>> {
        let mut items = Vec::new();

        while !self.is_at_end() {
            let statement = self.parse_statement()?;
            self.require(&[TokenType::Semicolon])?;
            items.push(statement);
        }

        log::debug!("parsed {} statements", items.len());

        Ok(Node::StatementList { items })
    }
}

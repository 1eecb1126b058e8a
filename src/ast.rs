use std::fmt;

use crate::interpreter::lexer::Token;

/// Prefix operators. Printing is the only one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Writes the operand's value as one output line.
    Print,
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `:=`, binding the right operand's value to the variable on the left.
    Assign,
}

/// An abstract syntax tree (AST) node.
///
/// Every node keeps the source token it was built from, so later phases can
/// recover literal text, variable names and line numbers. Children are owned
/// by their parent; the [`Node::StatementList`] root is owned by whoever
/// called the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<'src> {
    /// An integer literal.
    Number {
        /// The literal token.
        token: Token<'src>,
    },
    /// Reference to a variable by name.
    Variable {
        /// The identifier token.
        token: Token<'src>,
    },
    /// A unary operation.
    Unary {
        /// The operator to apply.
        op:      UnaryOperator,
        /// The operator token.
        token:   Token<'src>,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation: arithmetic or assignment.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// The operator token.
        token: Token<'src>,
        /// Left operand, or the assignment target.
        left:  Box<Self>,
        /// Right operand, or the assigned value.
        right: Box<Self>,
    },
    /// The program root: one entry per statement, in source order.
    StatementList {
        /// The statements.
        items: Vec<Self>,
    },
}

impl Node<'_> {
    /// Gets the source line of the node, if it has one.
    ///
    /// ## Example
    /// ```
    /// use tally::{ast::Node, interpreter::lexer::{Token, TokenType}};
    ///
    /// let token = Token { kind:     TokenType::Variable,
    ///                     text:     "x",
    ///                     position: 10,
    ///                     line:     2, };
    ///
    /// assert_eq!(Node::Variable { token }.line_number(), Some(2));
    /// assert_eq!(Node::StatementList { items: vec![] }.line_number(), None);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> Option<usize> {
        match self {
            Self::Number { token }
            | Self::Variable { token }
            | Self::Unary { token, .. }
            | Self::Binary { token, .. } => Some(token.line),
            Self::StatementList { .. } => None,
        }
    }

    const fn is_arithmetic(&self) -> bool {
        matches!(self,
                 Self::Binary { op: BinaryOperator::Add | BinaryOperator::Sub,
                                .. })
    }
}

/// Writes the node back as source text.
///
/// Operators keep the spelling they were parsed from. Since `+` and `-` are
/// left-associative, only a right operand that is itself a sum or difference
/// needs parentheses; the printed text parses back into the same tree.
impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { token } | Self::Variable { token } => f.write_str(token.text),
            Self::Unary { token, operand, .. } => write!(f, "{} {operand}", token.text),
            Self::Binary { op,
                           token,
                           left,
                           right, } => {
                write!(f, "{left} {} ", token.text)?;
                if *op != BinaryOperator::Assign && right.is_arithmetic() {
                    write!(f, "( {right} )")
                } else {
                    write!(f, "{right}")
                }
            },
            Self::StatementList { items } => {
                for item in items {
                    writeln!(f, "{item};")?;
                }
                Ok(())
            },
        }
    }
}

use std::fmt;

use logos::Logos;

use crate::error::LexError;

/// The closed set of lexical categories of the language.
///
/// Every variant carries its matching rule as a `logos` attribute. When more
/// than one rule matches at the same position the longest match wins, and
/// between matches of equal length the literal keywords outrank the generic
/// identifier pattern, so `LOG` is a keyword while `LOGGER` is a variable.
///
/// Each keyword has an ASCII spelling and a Cyrillic one.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenType {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Number,
    /// Variable names such as `x` or `сумма`.
    #[regex(r"[a-zA-Zа-яА-ЯёЁ_][a-zA-Z0-9а-яА-ЯёЁ_]*")]
    Variable,
    /// `:=`
    #[token(":=")]
    #[token("РАВНО")]
    Assign,
    /// `+`
    #[token("+")]
    #[token("ПЛЮС")]
    Plus,
    /// `-`
    #[token("-")]
    #[token("МИНУС")]
    Minus,
    /// `(`
    #[token("(")]
    LPar,
    /// `)`
    #[token(")")]
    RPar,
    /// `LOG`
    #[token("LOG")]
    #[token("КОНСОЛЬ")]
    Log,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks, counted for error reporting.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::Variable => "variable",
            Self::Assign => "':='",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::LPar => "'('",
            Self::RPar => "')'",
            Self::Log => "'LOG'",
            Self::Semicolon => "';'",
            Self::Comment => "comment",
            Self::NewLine => "line break",
            Self::Ignored => "whitespace",
        };
        f.write_str(name)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A classified, positioned fragment of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// The lexical category.
    pub kind:     TokenType,
    /// The exact source slice the token was matched from.
    pub text:     &'src str,
    /// Byte offset of the first character in the source.
    pub position: usize,
    /// 1-based source line.
    pub line:     usize,
}

/// Converts source text into the ordered sequence of tokens.
///
/// Whitespace, line breaks and comments are matched but not emitted. The whole
/// input is tokenized before anything is returned, so a lexical error anywhere
/// in the source means no tokens at all.
///
/// # Errors
/// Returns [`LexError::UnexpectedCharacter`] for the first position at which
/// no token rule matches.
///
/// # Examples
/// ```
/// use tally::interpreter::lexer::{TokenType, tokenize};
///
/// let tokens = tokenize("LOG x + 1;").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenType::Log, TokenType::Variable, TokenType::Plus, TokenType::Number, TokenType::Semicolon]);
/// assert!(tokenize("").unwrap().is_empty());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut lexer = TokenType::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        let Ok(kind) = kind else {
            return Err(LexError::UnexpectedCharacter { text:     lexer.slice().to_string(),
                                                       position: lexer.span().start,
                                                       line:     lexer.extras.line, });
        };
        tokens.push(Token { kind,
                            text: lexer.slice(),
                            position: lexer.span().start,
                            line: lexer.extras.line });
    }

    log::debug!("lexed {} tokens", tokens.len());
    log::trace!("tokens: {tokens:?}");

    Ok(tokens)
}

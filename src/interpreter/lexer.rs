use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::token::{Token, TokenKind},
};

/// Raw lexeme classes recognized by the generated scanner.
///
/// This enum only classifies spans of text. Payload extraction and the
/// repeatable end-of-input sentinel live in [`Lexer`], which wraps the
/// generated scanner and produces [`Token`] values, so `Lexeme` stays
/// private to this module.
///
/// Whitespace and brace comments are skipped before classification. The
/// comment rule has no nesting; a comment that is never closed swallows the
/// rest of the input. A real constant requires at least one digit after the
/// dot, so a digit run followed by a bare dot lexes as an integer constant
/// and leaves the dot as its own token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
#[logos(skip r"\{[^}]*\}?")]
enum Lexeme {
    #[token("begin", ignore(ascii_case))]
    Begin,
    #[token("end", ignore(ascii_case))]
    End,
    #[token("program", ignore(ascii_case))]
    Program,
    #[token("var", ignore(ascii_case))]
    Var,
    #[token("integer", ignore(ascii_case))]
    Integer,
    #[token("real", ignore(ascii_case))]
    Real,
    #[token("div", ignore(ascii_case))]
    IntegerDiv,
    #[regex(r"[0-9]+\.[0-9]+")]
    RealConstant,
    #[regex(r"[0-9]+")]
    IntegerConstant,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
    #[token(".")]
    Dot,
    #[token(":=")]
    Assign,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Mul,
    #[token("/")]
    FloatDiv,
}

impl From<Lexeme> for TokenKind {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Begin => Self::Begin,
            Lexeme::End => Self::End,
            Lexeme::Program => Self::Program,
            Lexeme::Var => Self::Var,
            Lexeme::Integer => Self::Integer,
            Lexeme::Real => Self::Real,
            Lexeme::IntegerDiv => Self::IntegerDiv,
            Lexeme::RealConstant => Self::RealConstant,
            Lexeme::IntegerConstant => Self::IntegerConstant,
            Lexeme::Identifier => Self::Identifier,
            Lexeme::Dot => Self::Dot,
            Lexeme::Assign => Self::Assign,
            Lexeme::Colon => Self::Colon,
            Lexeme::Semicolon => Self::Semicolon,
            Lexeme::Comma => Self::Comma,
            Lexeme::LeftParen => Self::LeftParen,
            Lexeme::RightParen => Self::RightParen,
            Lexeme::Plus => Self::Plus,
            Lexeme::Minus => Self::Minus,
            Lexeme::Mul => Self::Mul,
            Lexeme::FloatDiv => Self::FloatDiv,
        }
    }
}

/// A pull-based tokenizer over an in-memory source string.
///
/// Each call to [`Lexer::advance`] yields the next token. Once the input is
/// exhausted, every further call keeps returning the
/// [`TokenKind::EndOfFile`] sentinel, so callers may probe past the end
/// freely.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, Lexeme>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over the full source text.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { inner: Lexeme::lexer(text) }
    }

    /// Returns the next token from the source.
    ///
    /// Whitespace and comments are skipped; identifier and number tokens
    /// carry their raw lexeme as payload.
    ///
    /// # Errors
    /// Returns [`ParseError::UnrecognizedCharacter`] with the offending
    /// character and its byte offset when the source contains a character
    /// that starts no token.
    ///
    /// # Examples
    /// ```
    /// use pascaline::interpreter::{lexer::Lexer, token::TokenKind};
    ///
    /// let mut lexer = Lexer::new("x := 1");
    /// assert_eq!(lexer.advance().unwrap().kind, TokenKind::Identifier);
    /// assert_eq!(lexer.advance().unwrap().kind, TokenKind::Assign);
    /// assert_eq!(lexer.advance().unwrap().kind, TokenKind::IntegerConstant);
    /// assert_eq!(lexer.advance().unwrap().kind, TokenKind::EndOfFile);
    /// assert_eq!(lexer.advance().unwrap().kind, TokenKind::EndOfFile);
    /// ```
    pub fn advance(&mut self) -> Result<Token, ParseError> {
        match self.inner.next() {
            None => Ok(Token::end_of_file()),
            Some(Err(())) => {
                let character = self.inner.slice().chars().next().unwrap_or('\u{fffd}');
                Err(ParseError::UnrecognizedCharacter {
                    character,
                    offset: self.inner.span().start,
                })
            },
            Some(Ok(lexeme)) => {
                let kind = TokenKind::from(lexeme);
                let value = matches!(
                    kind,
                    TokenKind::Identifier | TokenKind::IntegerConstant | TokenKind::RealConstant
                )
                .then(|| self.inner.slice().to_owned());
                Ok(Token { kind, value })
            },
        }
    }
}

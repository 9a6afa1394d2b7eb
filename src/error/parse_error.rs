use crate::interpreter::token::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer hit a character that starts no token.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source text.
        offset: usize,
    },
    /// The current token does not match what the grammar requires here.
    UnexpectedToken {
        /// The token kind the grammar expected.
        expected: TokenKind,
        /// The token that was actually found.
        found: Token,
    },
    /// A factor was expected: a number, an identifier, a sign, or `(`.
    ExpectedFactor {
        /// The token that was actually found.
        found: Token,
    },
    /// A numeric literal could not be represented as a machine number.
    InvalidNumberLiteral {
        /// The raw lexeme of the literal.
        lexeme: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, offset } => {
                write!(f, "Cannot read character '{character}' at offset {offset}.")
            },
            Self::UnexpectedToken { expected, found } => {
                write!(f, "Expected {expected}, found {found}.")
            },
            Self::ExpectedFactor { found } => {
                write!(f, "Expected a number, an identifier, a sign or '(', found {found}.")
            },
            Self::InvalidNumberLiteral { lexeme } => {
                write!(f, "Numeric literal '{lexeme}' is out of range.")
            },
        }
    }
}

impl std::error::Error for ParseError {}

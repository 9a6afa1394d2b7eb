use std::fmt;

/// The kinds of tokens the lexer can produce.
///
/// Keyword kinds are recognized case-insensitively from the source text;
/// `EndOfFile` is the terminal sentinel, returned again on every pull past
/// the end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `begin`
    Begin,
    /// `end`
    End,
    /// `program`
    Program,
    /// `var`
    Var,
    /// `integer`
    Integer,
    /// `real`
    Real,
    /// A whole-number literal, such as `42`.
    IntegerConstant,
    /// A real literal with a fractional part, such as `3.14`.
    RealConstant,
    /// A variable or program name, such as `x` or `_total`.
    Identifier,
    /// `.`
    Dot,
    /// `:=`
    Assign,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `div`
    IntegerDiv,
    /// `/`
    FloatDiv,
    /// End of input.
    EndOfFile,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Begin => "Begin",
            Self::End => "End",
            Self::Program => "Program",
            Self::Var => "Var",
            Self::Integer => "Integer",
            Self::Real => "Real",
            Self::IntegerConstant => "IntegerConstant",
            Self::RealConstant => "RealConstant",
            Self::Identifier => "Identifier",
            Self::Dot => "Dot",
            Self::Assign => "Assign",
            Self::Colon => "Colon",
            Self::Semicolon => "Semicolon",
            Self::Comma => "Comma",
            Self::LeftParen => "LeftParen",
            Self::RightParen => "RightParen",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Mul => "Mul",
            Self::IntegerDiv => "IntegerDiv",
            Self::FloatDiv => "FloatDiv",
            Self::EndOfFile => "EndOfFile",
        };
        write!(f, "{name}")
    }
}

/// A lexical token: a kind plus the raw lexeme where one is meaningful.
///
/// `value` is `Some` only for [`TokenKind::Identifier`],
/// [`TokenKind::IntegerConstant`], and [`TokenKind::RealConstant`], and
/// holds the matched source text verbatim; identifier case is preserved.
/// Tokens are plain immutable values, produced and discarded per parse
/// step.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token's kind.
    pub kind: TokenKind,
    /// The raw lexeme, for payload-carrying kinds.
    pub value: Option<String>,
}

impl Token {
    /// The terminal sentinel returned past the end of input.
    #[must_use]
    pub const fn end_of_file() -> Self {
        Self { kind: TokenKind::EndOfFile, value: None }
    }
}

impl fmt::Display for Token {
    /// Renders the token for diagnostics, e.g. `Token(Identifier, x)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "Token({}, {value})", self.kind),
            None => write!(f, "Token({})", self.kind),
        }
    }
}

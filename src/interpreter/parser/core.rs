use crate::{
    ast::{Node, TypeSpec},
    error::ParseError,
    interpreter::{lexer::Lexer, token::{Token, TokenKind}},
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser over the lexer's token stream.
///
/// The parser owns the lexer and exactly one token of lookahead
/// (`current`), primed on construction. Every grammar rule is a sequence of
/// [`Parser::eat`] calls and recursive sub-parses; the host call stack is
/// the parse stack, so extremely deep nesting is bounded by it.
///
/// Parsing is a pure function of the source text: the same input always
/// yields the same tree. Failures are fatal; the parser never attempts
/// recovery.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Creates a parser and pulls the first token of lookahead.
    ///
    /// # Errors
    /// Returns a [`ParseError`] if the very first token cannot be lexed.
    pub fn new(mut lexer: Lexer<'a>) -> ParseResult<Self> {
        let current = lexer.advance()?;
        Ok(Self { lexer, current })
    }

    /// Parses a full program.
    ///
    /// Grammar:
    /// ```text
    ///     program := [ 'program' IDENT ';' ] block '.' EOF
    /// ```
    /// The `program` header is optional; without it the resulting
    /// [`Node::Program`] carries no name. The trailing dot and end of
    /// input are both required, so trailing garbage is a syntax error.
    ///
    /// # Errors
    /// Returns a [`ParseError`] naming the expected and found tokens at
    /// the first point where the input diverges from the grammar.
    pub fn parse_program(&mut self) -> ParseResult<Node> {
        let name = if self.current.kind == TokenKind::Program {
            self.eat(TokenKind::Program)?;
            let name = self.identifier()?;
            self.eat(TokenKind::Semicolon)?;
            Some(name)
        } else {
            None
        };

        let block = self.parse_block()?;
        self.eat(TokenKind::Dot)?;
        self.eat(TokenKind::EndOfFile)?;

        Ok(Node::Program { name, block: Box::new(block) })
    }

    /// Parses a block: declarations followed by a compound statement.
    ///
    /// Grammar: `block := declarations compound`
    pub fn parse_block(&mut self) -> ParseResult<Node> {
        let declarations = self.parse_declarations()?;
        let compound = self.parse_compound()?;
        Ok(Node::Block { declarations, compound: Box::new(compound) })
    }

    /// Parses the optional `var` declaration section.
    ///
    /// Grammar:
    /// ```text
    ///     declarations := ( 'var' (varDecl ';')+ )?
    /// ```
    /// Without a `var` keyword the declaration list is empty.
    fn parse_declarations(&mut self) -> ParseResult<Vec<Node>> {
        let mut declarations = Vec::new();

        if self.current.kind == TokenKind::Var {
            self.eat(TokenKind::Var)?;
            loop {
                declarations.push(self.parse_var_decl()?);
                self.eat(TokenKind::Semicolon)?;
                if self.current.kind != TokenKind::Identifier {
                    break;
                }
            }
        }

        Ok(declarations)
    }

    /// Parses one declaration line: `varDecl := IDENT (',' IDENT)* ':' typeSpec`.
    fn parse_var_decl(&mut self) -> ParseResult<Node> {
        let mut names = vec![self.identifier()?];
        while self.current.kind == TokenKind::Comma {
            self.eat(TokenKind::Comma)?;
            names.push(self.identifier()?);
        }
        self.eat(TokenKind::Colon)?;
        let type_spec = self.parse_type_spec()?;
        Ok(Node::VarDecl { names, type_spec })
    }

    /// Parses a type name: `typeSpec := 'integer' | 'real'`.
    fn parse_type_spec(&mut self) -> ParseResult<TypeSpec> {
        match self.current.kind {
            TokenKind::Integer => {
                self.eat(TokenKind::Integer)?;
                Ok(TypeSpec::Integer)
            },
            TokenKind::Real => {
                self.eat(TokenKind::Real)?;
                Ok(TypeSpec::Real)
            },
            _ => Err(ParseError::UnexpectedToken {
                expected: TokenKind::Integer,
                found: self.current.clone(),
            }),
        }
    }

    /// Consumes the current token if it has the expected kind and pulls
    /// the next one.
    ///
    /// This is the parser's only point of lookahead consumption; every
    /// grammar rule advances through it.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] naming `expected` and the
    /// actual current token when the kinds do not match.
    pub fn eat(&mut self, expected: TokenKind) -> ParseResult<()> {
        if self.current.kind == expected {
            self.current = self.lexer.advance()?;
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken { expected, found: self.current.clone() })
        }
    }

    /// Consumes an identifier token and returns its spelling verbatim.
    pub(crate) fn identifier(&mut self) -> ParseResult<String> {
        if self.current.kind == TokenKind::Identifier {
            let name = self.current.value.clone().unwrap_or_default();
            self.eat(TokenKind::Identifier)?;
            Ok(name)
        } else {
            Err(ParseError::UnexpectedToken {
                expected: TokenKind::Identifier,
                found: self.current.clone(),
            })
        }
    }

    /// The current lookahead token.
    pub(crate) const fn current(&self) -> &Token {
        &self.current
    }
}

use crate::{
    ast::Node,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses a compound statement.
    ///
    /// Grammar: `compound := 'begin' statementList 'end'`
    ///
    /// # Errors
    /// Returns a [`crate::error::ParseError`] when the `begin`/`end`
    /// bracketing or any inner statement is malformed.
    pub fn parse_compound(&mut self) -> ParseResult<Node> {
        self.eat(TokenKind::Begin)?;
        let children = self.parse_statement_list()?;
        self.eat(TokenKind::End)?;
        Ok(Node::Compound { children })
    }

    /// Parses one or more statements separated by semicolons.
    ///
    /// Grammar: `statementList := statement (';' statement)*`
    ///
    /// Semicolons separate statements rather than terminate them, so a
    /// trailing semicolon before `end` yields an extra empty statement.
    fn parse_statement_list(&mut self) -> ParseResult<Vec<Node>> {
        let mut children = vec![self.parse_statement()?];
        while self.current().kind == TokenKind::Semicolon {
            self.eat(TokenKind::Semicolon)?;
            children.push(self.parse_statement()?);
        }
        Ok(children)
    }

    /// Parses a single statement.
    ///
    /// Grammar: `statement := compound | assignment | empty`
    ///
    /// Anything that starts with neither `begin` nor an identifier is the
    /// empty statement, which parses to [`Node::NoOp`] without consuming
    /// input.
    fn parse_statement(&mut self) -> ParseResult<Node> {
        match self.current().kind {
            TokenKind::Begin => self.parse_compound(),
            TokenKind::Identifier => self.parse_assignment(),
            _ => Ok(Node::NoOp),
        }
    }

    /// Parses an assignment: `assignment := IDENT ':=' expr`.
    fn parse_assignment(&mut self) -> ParseResult<Node> {
        let name = self.identifier()?;
        self.eat(TokenKind::Assign)?;
        let value = self.parse_expression()?;
        Ok(Node::Assign { name, value: Box::new(value) })
    }
}

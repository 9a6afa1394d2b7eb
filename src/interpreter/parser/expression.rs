use crate::{
    ast::{BinaryOperator, LiteralValue, Node, UnaryOperator},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses an additive expression.
    ///
    /// Grammar: `expr := term (('+' | '-') term)*`
    ///
    /// Operators of equal precedence associate to the left, so `1 - 2 - 3`
    /// parses as `(1 - 2) - 3`.
    ///
    /// # Errors
    /// Returns a [`ParseError`] when an operand is missing or malformed.
    pub fn parse_expression(&mut self) -> ParseResult<Node> {
        let mut node = self.parse_term()?;

        loop {
            let kind = self.current().kind;
            let op = match kind {
                TokenKind::Plus => BinaryOperator::Plus,
                TokenKind::Minus => BinaryOperator::Minus,
                _ => break,
            };
            self.eat(kind)?;
            let right = self.parse_term()?;
            node = Node::BinaryOp {
                left: Box::new(node),
                op,
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    /// Parses a multiplicative term.
    ///
    /// Grammar: `term := factor (('*' | 'div' | '/') factor)*`
    fn parse_term(&mut self) -> ParseResult<Node> {
        let mut node = self.parse_factor()?;

        loop {
            let kind = self.current().kind;
            let op = match kind {
                TokenKind::Mul => BinaryOperator::Mul,
                TokenKind::IntegerDiv => BinaryOperator::IntegerDiv,
                TokenKind::FloatDiv => BinaryOperator::FloatDiv,
                _ => break,
            };
            self.eat(kind)?;
            let right = self.parse_factor()?;
            node = Node::BinaryOp {
                left: Box::new(node),
                op,
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    /// Parses a factor, the atoms of the expression grammar.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ('+' | '-') factor
    ///             | INTEGER_CONSTANT
    ///             | REAL_CONSTANT
    ///             | '(' expr ')'
    ///             | IDENT
    /// ```
    /// Sign factors are right-recursive, so `- - 5` nests two unary
    /// negations around the literal.
    fn parse_factor(&mut self) -> ParseResult<Node> {
        match self.current().kind {
            TokenKind::Plus => {
                self.eat(TokenKind::Plus)?;
                let operand = self.parse_factor()?;
                Ok(Node::UnaryOp { op: UnaryOperator::Plus, operand: Box::new(operand) })
            },
            TokenKind::Minus => {
                self.eat(TokenKind::Minus)?;
                let operand = self.parse_factor()?;
                Ok(Node::UnaryOp { op: UnaryOperator::Minus, operand: Box::new(operand) })
            },
            TokenKind::IntegerConstant => {
                let lexeme = self.current().value.clone().unwrap_or_default();
                self.eat(TokenKind::IntegerConstant)?;
                let value = lexeme
                    .parse::<i64>()
                    .map_err(|_| ParseError::InvalidNumberLiteral { lexeme })?;
                Ok(Node::Number { value: LiteralValue::Integer(value) })
            },
            TokenKind::RealConstant => {
                let lexeme = self.current().value.clone().unwrap_or_default();
                self.eat(TokenKind::RealConstant)?;
                let value = lexeme
                    .parse::<f64>()
                    .map_err(|_| ParseError::InvalidNumberLiteral { lexeme })?;
                Ok(Node::Number { value: LiteralValue::Real(value) })
            },
            TokenKind::LeftParen => {
                self.eat(TokenKind::LeftParen)?;
                let node = self.parse_expression()?;
                self.eat(TokenKind::RightParen)?;
                Ok(node)
            },
            TokenKind::Identifier => {
                let name = self.identifier()?;
                Ok(Node::Variable { name })
            },
            _ => Err(ParseError::ExpectedFactor { found: self.current().clone() }),
        }
    }
}

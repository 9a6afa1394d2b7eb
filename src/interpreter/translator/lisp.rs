use std::mem;

use crate::{
    ast::{BinaryOperator, LiteralValue, Node, NodeVisitor, TypeSpec, UnaryOperator},
    error::TranslateError,
};

/// Renders expression trees as Lisp-style prefix forms.
///
/// Every binary operation becomes a parenthesized list with the operator
/// first, so `2 + 3 * 4` becomes `(+ 2 (* 3 4))`. Like the postfix
/// translator, it handles only numbers and binary operations.
///
/// # Example
/// ```
/// use pascaline::{interpreter::translator::lisp::LispTranslator, parse_expression};
///
/// let tree = parse_expression("2 + 3 * 4").unwrap();
/// let mut translator = LispTranslator::new();
/// assert_eq!(translator.translate(&tree).unwrap(), "(+ 2 (* 3 4))");
/// ```
#[derive(Debug, Default)]
pub struct LispTranslator {
    accumulator: String,
}

impl LispTranslator {
    /// Creates a translator with an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self { accumulator: String::new() }
    }

    /// Translates an expression tree into its prefix rendering.
    ///
    /// # Errors
    /// Returns a [`TranslateError`] when the tree contains anything other
    /// than numbers and binary operations.
    pub fn translate(&mut self, node: &Node) -> Result<String, TranslateError> {
        node.accept(self)?;
        Ok(mem::take(&mut self.accumulator))
    }

    fn render(&mut self, node: &Node) -> Result<String, TranslateError> {
        node.accept(self)?;
        Ok(mem::take(&mut self.accumulator))
    }
}

impl NodeVisitor for LispTranslator {
    type Error = TranslateError;

    fn visit_binary_op(
        &mut self,
        left: &Node,
        op: BinaryOperator,
        right: &Node,
    ) -> Result<(), TranslateError> {
        let left = self.render(left)?;
        let right = self.render(right)?;
        self.accumulator = format!("({op} {left} {right})");
        Ok(())
    }

    fn visit_unary_op(&mut self, _op: UnaryOperator, _operand: &Node) -> Result<(), TranslateError> {
        Err(TranslateError::UnsupportedUnaryOperator)
    }

    fn visit_number(&mut self, value: LiteralValue) -> Result<(), TranslateError> {
        self.accumulator = value.to_string();
        Ok(())
    }

    fn visit_variable(&mut self, _name: &str) -> Result<(), TranslateError> {
        Err(TranslateError::UnsupportedNode { kind: "variable reference" })
    }

    fn visit_assign(&mut self, _name: &str, _value: &Node) -> Result<(), TranslateError> {
        Err(TranslateError::UnsupportedNode { kind: "assignment" })
    }

    fn visit_compound(&mut self, _children: &[Node]) -> Result<(), TranslateError> {
        Err(TranslateError::UnsupportedNode { kind: "compound statement" })
    }

    fn visit_no_op(&mut self) -> Result<(), TranslateError> {
        Err(TranslateError::UnsupportedNode { kind: "empty statement" })
    }

    fn visit_program(&mut self, _name: Option<&str>, _block: &Node) -> Result<(), TranslateError> {
        Err(TranslateError::UnsupportedNode { kind: "program" })
    }

    fn visit_block(
        &mut self,
        _declarations: &[Node],
        _compound: &Node,
    ) -> Result<(), TranslateError> {
        Err(TranslateError::UnsupportedNode { kind: "block" })
    }

    fn visit_var_decl(
        &mut self,
        _names: &[String],
        _type_spec: TypeSpec,
    ) -> Result<(), TranslateError> {
        Err(TranslateError::UnsupportedNode { kind: "variable declaration" })
    }
}

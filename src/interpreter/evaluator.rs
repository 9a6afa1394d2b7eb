use std::collections::HashMap;

use crate::{
    ast::{BinaryOperator, LiteralValue, Node, NodeVisitor, TypeSpec, UnaryOperator},
    error::RuntimeError,
    interpreter::value::Value,
};

/// Result type used during evaluation.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The store of variable bindings built up during evaluation.
///
/// Names are matched case-insensitively: `Number`, `nUmber`, and `NUMBER`
/// all refer to the same binding. The spelling used at the first assignment
/// is the one reported back when the environment is dumped.
#[derive(Debug, Default)]
pub struct Environment {
    slots: HashMap<String, (String, Value)>,
}

impl Environment {
    /// Looks up a variable by name, ignoring case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.slots.get(&name.to_lowercase()).map(|(_, value)| *value)
    }

    /// Binds `name` to `value`, creating or overwriting the binding.
    ///
    /// A rebinding keeps the spelling from the first assignment.
    pub fn assign(&mut self, name: &str, value: Value) {
        self.slots
            .entry(name.to_lowercase())
            .and_modify(|slot| slot.1 = value)
            .or_insert_with(|| (name.to_owned(), value));
    }

    /// Returns every binding as `(spelling, value)` pairs, ordered by the
    /// case-normalized name.
    #[must_use]
    pub fn dump(&self) -> Vec<(String, Value)> {
        let mut entries: Vec<_> = self.slots.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries
            .into_iter()
            .map(|(_, (spelling, value))| (spelling.clone(), *value))
            .collect()
    }

    /// The number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the environment holds no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// A tree-walking evaluator for programs and expressions.
///
/// The evaluator visits nodes and keeps the result of the most recently
/// evaluated expression in an accumulator; statement nodes leave the
/// accumulator untouched except through the expressions they contain. The
/// environment persists across [`Evaluator::evaluate`] calls, so several
/// programs can be run against shared state.
///
/// # Example
/// ```
/// use pascaline::{interpreter::{evaluator::Evaluator, value::Value}, parse_program};
///
/// let program = parse_program("begin x := 6 * 7 end.").unwrap();
/// let mut evaluator = Evaluator::new();
/// evaluator.evaluate(&program).unwrap();
/// assert_eq!(evaluator.environment().get("x"), Some(Value::Integer(42)));
/// ```
pub struct Evaluator {
    environment: Environment,
    accumulator: Value,
}

impl Evaluator {
    /// Creates an evaluator with an empty environment.
    #[allow(clippy::new_without_default)]
    #[must_use]
    pub fn new() -> Self {
        Self {
            environment: Environment::default(),
            accumulator: Value::Integer(0),
        }
    }

    /// Evaluates a node and returns the final accumulator value.
    ///
    /// For a program node the returned value is that of the last expression
    /// evaluated anywhere in it; the interesting output is usually the
    /// environment. For a bare expression node the returned value is the
    /// expression's result.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] when evaluation reads an unbound variable
    /// or an arithmetic step fails.
    pub fn evaluate(&mut self, node: &Node) -> EvalResult<Value> {
        node.accept(self)?;
        Ok(self.accumulator)
    }

    /// The evaluator's variable environment.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Evaluates an expression subtree into the accumulator and returns it.
    fn calculate(&mut self, node: &Node) -> EvalResult<Value> {
        node.accept(self)?;
        Ok(self.accumulator)
    }
}

impl NodeVisitor for Evaluator {
    type Error = RuntimeError;

    fn visit_program(&mut self, _name: Option<&str>, block: &Node) -> EvalResult<()> {
        block.accept(self)
    }

    fn visit_block(&mut self, declarations: &[Node], compound: &Node) -> EvalResult<()> {
        for declaration in declarations {
            declaration.accept(self)?;
        }
        compound.accept(self)
    }

    // Declarations carry no runtime effect; variables spring into existence
    // on first assignment.
    fn visit_var_decl(&mut self, _names: &[String], _type_spec: TypeSpec) -> EvalResult<()> {
        Ok(())
    }

    fn visit_compound(&mut self, children: &[Node]) -> EvalResult<()> {
        for child in children {
            child.accept(self)?;
        }
        Ok(())
    }

    fn visit_assign(&mut self, name: &str, value: &Node) -> EvalResult<()> {
        let value = self.calculate(value)?;
        self.environment.assign(name, value);
        Ok(())
    }

    fn visit_binary_op(
        &mut self,
        left: &Node,
        op: BinaryOperator,
        right: &Node,
    ) -> EvalResult<()> {
        let left = self.calculate(left)?;
        let right = self.calculate(right)?;
        self.accumulator = Value::apply_binary(op, left, right)?;
        Ok(())
    }

    fn visit_unary_op(&mut self, op: UnaryOperator, operand: &Node) -> EvalResult<()> {
        let operand = self.calculate(operand)?;
        self.accumulator = match op {
            UnaryOperator::Plus => operand,
            UnaryOperator::Minus => operand.negated()?,
        };
        Ok(())
    }

    fn visit_number(&mut self, value: LiteralValue) -> EvalResult<()> {
        self.accumulator = Value::from(value);
        Ok(())
    }

    fn visit_variable(&mut self, name: &str) -> EvalResult<()> {
        match self.environment.get(name) {
            Some(value) => {
                self.accumulator = value;
                Ok(())
            },
            None => Err(RuntimeError::UnknownVariable { name: name.to_owned() }),
        }
    }

    fn visit_no_op(&mut self) -> EvalResult<()> {
        Ok(())
    }
}

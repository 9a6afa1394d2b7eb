use std::fmt;

/// Represents a numeric literal value in the language.
///
/// `LiteralValue` distinguishes the two numeric representations the grammar
/// can spell out directly: whole-number constants and real constants with a
/// fractional part. It is used in the AST for literal expressions; the
/// evaluator mirrors it with its runtime
/// [`Value`](crate::interpreter::value::Value) type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Real(value) => write!(f, "{value}"),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Plus,
    /// Subtraction (`-`)
    Minus,
    /// Multiplication (`*`)
    Mul,
    /// Integer division (`div`), truncating toward zero.
    IntegerDiv,
    /// Floating-point division (`/`), never truncating.
    FloatDiv,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mul => "*",
            Self::IntegerDiv => "div",
            Self::FloatDiv => "/",
        };
        write!(f, "{operator}")
    }
}

/// Represents a unary operator.
///
/// Unary operators bind tighter than any binary operator and nest
/// right-recursively, so `- - b` stays two nested
/// [`Node::UnaryOp`] nodes rather than collapsing into a subtraction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Minus,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
        };
        write!(f, "{operator}")
    }
}

/// The declared type of a variable in a `var` section.
///
/// Declarations are parsed for grammar completeness but carry no weight at
/// evaluation time: the evaluator performs no type checking.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TypeSpec {
    /// `integer`
    Integer,
    /// `real`
    Real,
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "integer",
            Self::Real => "real",
        };
        write!(f, "{name}")
    }
}

/// An abstract syntax tree (AST) node.
///
/// `Node` is the closed set of constructs the parser can produce. Children
/// are exclusively owned (`Box`/`Vec`), the tree is acyclic, and no node
/// refers back to its parent or siblings, so a subtree can be moved or
/// dropped as a unit.
///
/// Algorithms never match on `Node` directly; they implement
/// [`NodeVisitor`] and let [`Node::accept`] dispatch to the method for the
/// concrete variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// The program root: an optional `program` header name and the
    /// top-level block.
    Program {
        /// Name from the `program <name>;` header, if one was written.
        name: Option<String>,
        /// The top-level block.
        block: Box<Self>,
    },
    /// A block: the declaration section followed by a compound statement.
    Block {
        /// Variable declarations, possibly empty.
        declarations: Vec<Self>,
        /// The `begin ... end` compound statement.
        compound: Box<Self>,
    },
    /// One `var` declaration line: one or more names sharing a type.
    VarDecl {
        /// The declared identifiers, spelling preserved.
        names: Vec<String>,
        /// The declared type.
        type_spec: TypeSpec,
    },
    /// A `begin ... end` statement list; children run in insertion order.
    Compound {
        /// The statements, in source order.
        children: Vec<Self>,
    },
    /// An assignment `name := value`.
    Assign {
        /// The target identifier, spelling preserved verbatim.
        name: String,
        /// The right-hand side expression.
        value: Box<Self>,
    },
    /// A binary operation (addition, multiplication, etc.).
    BinaryOp {
        /// Left operand.
        left: Box<Self>,
        /// The operator.
        op: BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A unary operation (`-x`, `+x`).
    UnaryOp {
        /// The operator.
        op: UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A numeric literal.
    Number {
        /// The constant value.
        value: LiteralValue,
    },
    /// A reference to a variable by name; the stored spelling is
    /// case-sensitive, case-insensitive lookup happens at evaluation time.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// An empty statement. Produced for empty statement slots such as a
    /// trailing semicolon; evaluating it has no observable effect.
    NoOp,
}

impl Node {
    /// Dispatches to the visitor method matching this node's variant.
    ///
    /// This is the double-dispatch seam of the crate: the node contributes
    /// its variant, the visitor contributes the algorithm, and the match
    /// below is the only place that pairs the two. Adding an algorithm
    /// means writing a new [`NodeVisitor`] impl; adding a node variant
    /// forces every existing impl to handle it before the crate compiles
    /// again.
    ///
    /// # Errors
    /// Propagates whatever error the visitor method returns.
    pub fn accept<V: NodeVisitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
        match self {
            Self::Program { name, block } => visitor.visit_program(name.as_deref(), block),
            Self::Block { declarations, compound } => visitor.visit_block(declarations, compound),
            Self::VarDecl { names, type_spec } => visitor.visit_var_decl(names, *type_spec),
            Self::Compound { children } => visitor.visit_compound(children),
            Self::Assign { name, value } => visitor.visit_assign(name, value),
            Self::BinaryOp { left, op, right } => visitor.visit_binary_op(left, *op, right),
            Self::UnaryOp { op, operand } => visitor.visit_unary_op(*op, operand),
            Self::Number { value } => visitor.visit_number(*value),
            Self::Variable { name } => visitor.visit_variable(name),
            Self::NoOp => visitor.visit_no_op(),
        }
    }
}

/// A traversal algorithm over the closed [`Node`] set.
///
/// Implementors supply one method per node variant plus an error type; the
/// node side of the dispatch lives in [`Node::accept`]. Visitors drive
/// recursion themselves by calling `accept` on child nodes, so the host
/// call stack is the traversal stack and tree depth is bounded by it.
pub trait NodeVisitor {
    /// The error type this algorithm can fail with.
    type Error;

    /// Visits the program root.
    fn visit_program(&mut self, name: Option<&str>, block: &Node) -> Result<(), Self::Error>;
    /// Visits a block (declarations plus compound statement).
    fn visit_block(&mut self, declarations: &[Node], compound: &Node) -> Result<(), Self::Error>;
    /// Visits one variable declaration line.
    fn visit_var_decl(&mut self, names: &[String], type_spec: TypeSpec) -> Result<(), Self::Error>;
    /// Visits a compound statement.
    fn visit_compound(&mut self, children: &[Node]) -> Result<(), Self::Error>;
    /// Visits an assignment.
    fn visit_assign(&mut self, name: &str, value: &Node) -> Result<(), Self::Error>;
    /// Visits a binary operation.
    fn visit_binary_op(
        &mut self,
        left: &Node,
        op: BinaryOperator,
        right: &Node,
    ) -> Result<(), Self::Error>;
    /// Visits a unary operation.
    fn visit_unary_op(&mut self, op: UnaryOperator, operand: &Node) -> Result<(), Self::Error>;
    /// Visits a numeric literal.
    fn visit_number(&mut self, value: LiteralValue) -> Result<(), Self::Error>;
    /// Visits a variable reference.
    fn visit_variable(&mut self, name: &str) -> Result<(), Self::Error>;
    /// Visits an empty statement.
    fn visit_no_op(&mut self) -> Result<(), Self::Error>;
}

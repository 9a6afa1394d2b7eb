#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero, integer or floating-point.
    DivisionByZero,
    /// Integer arithmetic overflowed.
    Overflow,
    /// An integer was too large to be promoted to a real number exactly.
    LiteralTooLarge,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Unknown variable '{name}'."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Overflow => {
                write!(f, "Integer overflow while trying to compute result.")
            },
            Self::LiteralTooLarge => {
                write!(f, "Integer is too large to be represented as a real number.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}

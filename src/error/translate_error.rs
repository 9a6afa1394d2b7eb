#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during notation translation.
///
/// The translators cover pure arithmetic expressions only. Anything outside
/// that subset fails hard rather than being silently dropped, so a
/// translation either represents the whole tree or produces no output at
/// all.
pub enum TranslateError {
    /// Unary operators have no representation in the target notations.
    UnsupportedUnaryOperator,
    /// A statement-level node reached a translator.
    UnsupportedNode {
        /// Human-readable description of the node variant.
        kind: &'static str,
    },
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedUnaryOperator => {
                write!(f, "Cannot translate a unary operator.")
            },
            Self::UnsupportedNode { kind } => write!(f, "Cannot translate {kind} nodes."),
        }
    }
}

impl std::error::Error for TranslateError {}

/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of
/// source code: unrecognized characters, tokens that do not match the
/// grammar, and numeric literals that cannot be represented.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// reading an unassigned variable, dividing by zero, or overflowing integer
/// arithmetic.
pub mod runtime_error;
/// Translation errors.
///
/// Contains the error types raised by the notation translators when asked
/// to render a tree that has no representation in the target notation.
pub mod translate_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use translate_error::TranslateError;

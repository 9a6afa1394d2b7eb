/// Lisp-style (prefix) notation translation.
///
/// Renders expression trees as fully parenthesized prefix forms, such as
/// `(+ 2 (* 3 4))`.
pub mod lisp;
/// Postfix (reverse Polish) notation translation.
///
/// Renders expression trees operand-first, such as `2 3 4 * +`.
pub mod postfix;

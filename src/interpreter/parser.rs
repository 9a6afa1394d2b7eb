/// Core parser state and program-level rules.
///
/// Contains the `Parser` struct, its single token-consumption primitive,
/// and the rules for the program header, blocks, and declarations.
pub mod core;
/// Expression parsing.
///
/// Implements the precedence-climbing rules `expr`, `term`, and `factor`.
pub mod expression;
/// Statement parsing.
///
/// Implements compound statements, statement lists, assignments, and the
/// empty statement.
pub mod statement;

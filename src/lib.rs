//! # pascaline
//!
//! pascaline is an interpreter front-end for a small Pascal-like language.
//! It tokenizes source text, builds an abstract syntax tree with a
//! recursive-descent parser, and walks that tree with interchangeable
//! visitor algorithms: an arithmetic evaluator and translators into postfix
//! (reverse Polish) and fully parenthesized Lisp-style notation.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{evaluator::Evaluator, lexer::Lexer, parser::core::Parser, token::TokenKind, value::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the [`Node`] enum that represents the syntactic
/// structure of a program as a tree, the operator enumerations carried by
/// its variants, and the [`NodeVisitor`](ast::NodeVisitor) protocol through
/// which algorithms traverse the tree.
///
/// # Responsibilities
/// - Defines statement and expression node variants for all language
///   constructs.
/// - Declares the visitor trait with one dispatch method per node variant.
/// - Implements `accept`, the single double-dispatch seam between nodes and
///   visitors.
pub mod ast;
/// Provides unified error types for parsing, evaluation, and translation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// evaluating, or translating code. It standardizes error reporting and
/// carries detailed information about failures: byte offsets for lexical
/// errors, expected-versus-found tokens for syntax errors, and offending
/// names for runtime errors.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator,
///   translators).
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and notation translation to provide a complete front
/// end for the language. It exposes the concrete pipeline types consumed by
/// the crate-level entry points.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and
///   translators.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable conversion routines used by the evaluator,
/// most importantly the checked promotion from `i64` to `f64` that refuses
/// to silently lose precision.
pub mod util;

/// Parses a full program into its syntax tree.
///
/// The accepted grammar is the Pascal-like language: an optional
/// `program <name>;` header, an optional `var` declaration section, a
/// `begin ... end` compound statement, and a terminating `.` followed by
/// end of input.
///
/// # Errors
/// Returns a [`ParseError`] if the source contains an unrecognized
/// character or does not match the grammar.
///
/// # Examples
/// ```
/// let program = pascaline::parse_program("begin x := 1 end.").unwrap();
/// ```
pub fn parse_program(source: &str) -> Result<Node, ParseError> {
    let mut parser = Parser::new(Lexer::new(source))?;
    parser.parse_program()
}

/// Parses a single arithmetic expression into its syntax tree.
///
/// The whole input must be consumed by the expression; trailing tokens are
/// a syntax error. This is the entry point used by the notation
/// translators, which operate on bare expressions rather than programs.
///
/// # Errors
/// Returns a [`ParseError`] if the source contains an unrecognized
/// character, does not match the expression grammar, or has trailing
/// tokens.
pub fn parse_expression(source: &str) -> Result<Node, ParseError> {
    let mut parser = Parser::new(Lexer::new(source))?;
    let node = parser.parse_expression()?;
    parser.eat(TokenKind::EndOfFile)?;
    Ok(node)
}

/// Parses and evaluates a program, returning its final variable state.
///
/// The result is the evaluator's environment as `(name, value)` pairs,
/// sorted by case-folded name. Each name keeps the spelling of its first
/// assignment, while lookups and re-assignments during evaluation match
/// names case-insensitively.
///
/// # Errors
/// Returns an error if parsing fails or if any runtime error occurs, such
/// as reading a variable that was never assigned or dividing by zero.
///
/// # Examples
/// ```
/// use pascaline::interpreter::value::Value;
///
/// let variables = pascaline::interpret("begin x := 2 + 3 end.").unwrap();
/// assert_eq!(variables, vec![("x".to_string(), Value::Integer(5))]);
///
/// // 'a' is read before ever being assigned.
/// assert!(pascaline::interpret("begin b := a end.").is_err());
/// ```
pub fn interpret(source: &str) -> Result<Vec<(String, Value)>, Box<dyn std::error::Error>> {
    let program = parse_program(source)?;
    let mut evaluator = Evaluator::new();
    evaluator.evaluate(&program)?;
    Ok(evaluator.environment().dump())
}

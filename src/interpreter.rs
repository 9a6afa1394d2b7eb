/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST through the visitor protocol, performs
/// arithmetic, and manages variable state in its environment. It is the
/// core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Maintains the name-to-value environment with case-insensitive keys.
/// - Reports runtime errors such as division by zero or unknown variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces tokens on demand, one per
/// call, classifying numbers, identifiers, keywords, operators, and
/// delimiters. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens, skipping whitespace
///   and brace comments.
/// - Recognizes reserved keywords case-insensitively while preserving
///   identifier spelling.
/// - Reports lexical errors with the offending character and byte offset.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser holds one token of lookahead pulled from the lexer and
/// constructs an AST by recursive descent, with operator precedence encoded
/// in the nesting of its expression rules.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Validates grammar, reporting expected-versus-found tokens on failure.
pub mod parser;
/// The token module defines the lexical vocabulary of the language.
///
/// Declares the token kinds produced by the lexer and the token value type
/// that pairs a kind with its raw lexeme where one is needed.
pub mod token;
/// The translator module renders expression trees in alternate notations.
///
/// Contains the postfix (reverse Polish) and Lisp-style translators, both
/// implemented as string-accumulating visitors over pure expression
/// subtrees.
pub mod translator;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum used during evaluation and implements the
/// arithmetic on it, including safe promotion from integer to real and
/// checked integer operations.
pub mod value;

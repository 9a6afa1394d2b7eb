use pascaline::{
    ast::{LiteralValue, Node, UnaryOperator},
    error::{ParseError, RuntimeError, TranslateError},
    interpret,
    interpreter::{
        evaluator::Evaluator,
        lexer::Lexer,
        token::TokenKind,
        translator::{lisp::LispTranslator, postfix::PostfixTranslator},
        value::Value,
    },
    parse_expression, parse_program,
};

fn variables(src: &str) -> Vec<(String, Value)> {
    match interpret(src) {
        Ok(variables) => variables,
        Err(e) => panic!("Program failed: {e}"),
    }
}

fn lookup(variables: &[(String, Value)], name: &str) -> Value {
    variables
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, value)| *value)
        .unwrap_or_else(|| panic!("Variable '{name}' not found"))
}

fn assert_failure(src: &str) {
    if interpret(src).is_ok() {
        panic!("Program succeeded but was expected to fail")
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_eq!(variables("begin x := 1 + 2 end."), vec![("x".to_string(), Value::Integer(3))]);
    assert_eq!(variables("begin x := 7 * 9 end."), vec![("x".to_string(), Value::Integer(63))]);
    assert_eq!(variables("begin x := 8 - 5 end."), vec![("x".to_string(), Value::Integer(3))]);
    assert_eq!(variables("begin x := 10 div 2 end."), vec![("x".to_string(), Value::Integer(5))]);
}

#[test]
fn operator_precedence_and_parentheses() {
    assert_eq!(lookup(&variables("begin x := 2 + 3 * 4 end."), "x"), Value::Integer(14));
    assert_eq!(lookup(&variables("begin x := (2 + 3) * 4 end."), "x"), Value::Integer(20));
    assert_eq!(lookup(&variables("begin x := 1 - 2 - 3 end."), "x"), Value::Integer(-4));
    assert_eq!(lookup(&variables("begin x := 100 div 10 div 5 end."), "x"), Value::Integer(2));
}

#[test]
fn integer_division_truncates_toward_zero() {
    assert_eq!(lookup(&variables("begin x := 7 div 2 end."), "x"), Value::Integer(3));
    assert_eq!(lookup(&variables("begin x := -7 div 2 end."), "x"), Value::Integer(-3));
    assert_eq!(lookup(&variables("begin x := 2.5 div 2 end."), "x"), Value::Real(1.0));
}

#[test]
fn float_division_never_truncates() {
    assert_eq!(lookup(&variables("begin x := 7 / 2 end."), "x"), Value::Real(3.5));
    assert_eq!(lookup(&variables("begin x := 8 / 2 end."), "x"), Value::Real(4.0));
}

#[test]
fn mixed_operands_promote_to_real() {
    assert_eq!(lookup(&variables("begin x := 1 + 2.5 end."), "x"), Value::Real(3.5));
    assert_eq!(lookup(&variables("begin x := 2.5 * 2 end."), "x"), Value::Real(5.0));
}

#[test]
fn nested_compounds_and_case_insensitive_names() {
    let source = "\
        Begin \
            begin \
                nUmber := 2; \
                a := number; \
                b := 10 * a + 10 * number DIV 4; \
                _c := a - - b \
            end; \
            x := 11; \
            number := 3; \
        END.";

    let variables = variables(source);
    let names: Vec<&str> = variables.iter().map(|(n, _)| n.as_str()).collect();

    // Sorted by case-folded name; '_' precedes letters. Each entry keeps
    // the spelling of its first assignment.
    assert_eq!(names, vec!["_c", "a", "b", "nUmber", "x"]);
    assert_eq!(lookup(&variables, "nUmber"), Value::Integer(3));
    assert_eq!(lookup(&variables, "a"), Value::Integer(2));
    assert_eq!(lookup(&variables, "b"), Value::Integer(25));
    assert_eq!(lookup(&variables, "_c"), Value::Integer(27));
    assert_eq!(lookup(&variables, "x"), Value::Integer(11));
}

#[test]
fn reassignment_under_any_spelling_updates_one_binding() {
    let program = parse_program("begin number := 1; NUMBER := 2 end.").unwrap();
    let mut evaluator = Evaluator::new();
    evaluator.evaluate(&program).unwrap();

    let environment = evaluator.environment();
    assert_eq!(environment.len(), 1);
    assert_eq!(environment.get("Number"), Some(Value::Integer(2)));
    assert_eq!(environment.dump(), vec![("number".to_string(), Value::Integer(2))]);
}

#[test]
fn program_header_and_declarations() {
    let source = "\
        PROGRAM Part10; \
        VAR \
            number     : INTEGER; \
            a, b       : INTEGER; \
            y          : REAL; \
        BEGIN \
            number := 2; \
            a := number; \
            b := 10 * a + 10 * number DIV 4; \
            y := 20 / 7 + 3.14 \
        END.";

    let program = parse_program(source).unwrap();
    assert!(matches!(&program, Node::Program { name: Some(name), .. } if name == "Part10"));

    let variables = variables(source);
    assert_eq!(lookup(&variables, "number"), Value::Integer(2));
    assert_eq!(lookup(&variables, "a"), Value::Integer(2));
    assert_eq!(lookup(&variables, "b"), Value::Integer(25));
    assert_eq!(lookup(&variables, "y"), Value::Real(20.0 / 7.0 + 3.14));
}

#[test]
fn repeated_unary_minus_nests() {
    let tree = parse_expression("- - 5").unwrap();
    assert_eq!(
        tree,
        Node::UnaryOp {
            op: UnaryOperator::Minus,
            operand: Box::new(Node::UnaryOp {
                op: UnaryOperator::Minus,
                operand: Box::new(Node::Number { value: LiteralValue::Integer(5) }),
            }),
        }
    );

    let mut evaluator = Evaluator::new();
    assert_eq!(evaluator.evaluate(&tree), Ok(Value::Integer(5)));
}

#[test]
fn expression_evaluation_without_a_program() {
    let tree = parse_expression("2 + 3").unwrap();
    let mut evaluator = Evaluator::new();
    assert_eq!(evaluator.evaluate(&tree), Ok(Value::Integer(5)));
}

#[test]
fn empty_statements_are_tolerated() {
    let variables = variables("begin a := 1;; b := 2; end.");
    assert_eq!(lookup(&variables, "a"), Value::Integer(1));
    assert_eq!(lookup(&variables, "b"), Value::Integer(2));
}

#[test]
fn comments_are_skipped() {
    let variables = variables("begin { sets x } x := { to } 5 end.");
    assert_eq!(lookup(&variables, "x"), Value::Integer(5));
}

#[test]
fn unterminated_comment_swallows_the_rest_of_the_input() {
    // After a complete program the dangling comment is skipped entirely.
    let variables = variables("begin x := 5 end. { never closed");
    assert_eq!(lookup(&variables, "x"), Value::Integer(5));

    // Mid-program it consumes everything up to end of input, so the parse
    // fails on a missing `end`, not on a lexical error.
    let result = parse_program("begin x := 5 { never closed end.");
    assert!(matches!(
        result,
        Err(ParseError::UnexpectedToken { expected: TokenKind::End, .. })
    ));
}

#[test]
fn postfix_translation() {
    let mut translator = PostfixTranslator::new();
    let tree = parse_expression("2 + 3 * 4").unwrap();
    assert_eq!(translator.translate(&tree).unwrap(), "2 3 4 * +");

    let tree = parse_expression("(5 + 3) * 12 / 3").unwrap();
    assert_eq!(translator.translate(&tree).unwrap(), "5 3 + 12 * 3 /");

    let tree = parse_expression("10 div 3").unwrap();
    assert_eq!(translator.translate(&tree).unwrap(), "10 3 div");
}

#[test]
fn lisp_translation() {
    let mut translator = LispTranslator::new();
    let tree = parse_expression("2 + 3 * 4").unwrap();
    assert_eq!(translator.translate(&tree).unwrap(), "(+ 2 (* 3 4))");

    let tree = parse_expression("(1 + 2) * 3").unwrap();
    assert_eq!(translator.translate(&tree).unwrap(), "(* (+ 1 2) 3)");

    let tree = parse_expression("10 / 4").unwrap();
    assert_eq!(translator.translate(&tree).unwrap(), "(/ 10 4)");
}

#[test]
fn translators_reject_unary_operators() {
    let tree = parse_expression("- 5").unwrap();
    assert_eq!(
        PostfixTranslator::new().translate(&tree),
        Err(TranslateError::UnsupportedUnaryOperator)
    );
    assert_eq!(
        LispTranslator::new().translate(&tree),
        Err(TranslateError::UnsupportedUnaryOperator)
    );
}

#[test]
fn translators_reject_variables() {
    let tree = parse_expression("a + 1").unwrap();
    assert!(matches!(
        PostfixTranslator::new().translate(&tree),
        Err(TranslateError::UnsupportedNode { .. })
    ));
    assert!(matches!(
        LispTranslator::new().translate(&tree),
        Err(TranslateError::UnsupportedNode { .. })
    ));
}

#[test]
fn lexer_reports_positions_and_payloads() {
    let mut lexer = Lexer::new("x := 3.14;");
    let token = lexer.advance().unwrap();
    assert_eq!(token.kind, TokenKind::Identifier);
    assert_eq!(token.value.as_deref(), Some("x"));

    assert_eq!(lexer.advance().unwrap().kind, TokenKind::Assign);

    let token = lexer.advance().unwrap();
    assert_eq!(token.kind, TokenKind::RealConstant);
    assert_eq!(token.value.as_deref(), Some("3.14"));

    assert_eq!(lexer.advance().unwrap().kind, TokenKind::Semicolon);
    assert_eq!(lexer.advance().unwrap().kind, TokenKind::EndOfFile);
    assert_eq!(lexer.advance().unwrap().kind, TokenKind::EndOfFile);
}

#[test]
fn integer_followed_by_bare_dot_is_not_a_real() {
    let mut lexer = Lexer::new("3.");
    let token = lexer.advance().unwrap();
    assert_eq!(token.kind, TokenKind::IntegerConstant);
    assert_eq!(token.value.as_deref(), Some("3"));
    assert_eq!(lexer.advance().unwrap().kind, TokenKind::Dot);
}

#[test]
fn keywords_are_case_insensitive_but_prefixes_are_identifiers() {
    let mut lexer = Lexer::new("BEGIN Beginner DIV enD");
    assert_eq!(lexer.advance().unwrap().kind, TokenKind::Begin);

    let token = lexer.advance().unwrap();
    assert_eq!(token.kind, TokenKind::Identifier);
    assert_eq!(token.value.as_deref(), Some("Beginner"));

    assert_eq!(lexer.advance().unwrap().kind, TokenKind::IntegerDiv);
    assert_eq!(lexer.advance().unwrap().kind, TokenKind::End);
}

#[test]
fn unrecognized_character_is_reported_with_offset() {
    let result = parse_program("begin ? end.");
    assert_eq!(
        result,
        Err(ParseError::UnrecognizedCharacter { character: '?', offset: 6 })
    );
}

#[test]
fn missing_assign_operator_is_a_syntax_error() {
    let result = parse_program("begin x 3 end.");
    assert!(matches!(
        result,
        Err(ParseError::UnexpectedToken { expected: TokenKind::Assign, .. })
    ));
}

#[test]
fn missing_operand_is_a_syntax_error() {
    let result = parse_program("begin x := end.");
    assert!(matches!(result, Err(ParseError::ExpectedFactor { .. })));
}

#[test]
fn trailing_input_after_the_final_dot_is_an_error() {
    assert!(parse_program("begin x := 1 end. begin end.").is_err());
}

#[test]
fn oversized_integer_literal_is_an_error() {
    let result = parse_expression("99999999999999999999");
    assert!(matches!(result, Err(ParseError::InvalidNumberLiteral { .. })));
}

#[test]
fn unknown_variable_is_an_error() {
    assert_failure("begin b := a end.");

    let tree = parse_expression("missing + 1").unwrap();
    let mut evaluator = Evaluator::new();
    assert!(matches!(
        evaluator.evaluate(&tree),
        Err(RuntimeError::UnknownVariable { name }) if name == "missing"
    ));
}

#[test]
fn division_by_zero_is_an_error() {
    assert_failure("begin x := 1 div 0 end.");
    assert_failure("begin x := 1 / 0 end.");
    assert_failure("begin x := 1.5 / 0 end.");
}

#[test]
fn integer_overflow_is_an_error() {
    assert_failure("begin x := 9223372036854775807 + 1 end.");
    assert_failure("begin x := 9223372036854775807 * 2 end.");
}

#[test]
fn negating_the_smallest_integer_is_an_error() {
    // -9223372036854775807 - 1 is i64::MIN, which has no positive
    // counterpart.
    let tree = parse_expression("-(-9223372036854775807 - 1)").unwrap();
    let mut evaluator = Evaluator::new();
    assert_eq!(evaluator.evaluate(&tree), Err(RuntimeError::Overflow));
}

#[test]
fn promotion_of_an_inexact_integer_is_an_error() {
    // i64::MAX exceeds 2^53 - 1 and cannot be held exactly in an f64.
    let tree = parse_expression("9223372036854775807 / 1").unwrap();
    let mut evaluator = Evaluator::new();
    assert_eq!(evaluator.evaluate(&tree), Err(RuntimeError::LiteralTooLarge));

    assert_failure("begin x := 9223372036854775807 + 0.5 end.");
}

#[test]
fn parsing_is_deterministic() {
    let source = "begin x := (1 + 2) * 3 - -4 end.";
    assert_eq!(parse_program(source).unwrap(), parse_program(source).unwrap());
    assert_eq!(variables(source), variables(source));
}

use simulator::{Error, ErrorCategory, SyntaxError, Token};

#[macro_use]
mod cases;

test_case!(
    empty,
    input: "",
    error: Error::EmptyInput,
);

test_case!(
    only_spaces,
    input: "   ",
    error: Error::EmptyInput,
);

test_case!(
    division_by_zero,
    input: "1 / 0",
    error: Error::DivisionByZero { .. },
);

test_case!(
    division_by_zero_expression,
    input: "1/(2-2)",
    error: Error::DivisionByZero { .. },
);

test_case!(
    division_by_negative_zero,
    input: "1 / -0",
    error: Error::DivisionByZero { .. },
);

test_case!(
    dangling_operator,
    input: "1 +",
    error: Error::Syntax { kind: SyntaxError::MissingOperand { found: Token::Eof }, .. },
);

test_case!(
    unclosed_parenthesis,
    input: "(2 * 3",
    error: Error::Syntax { kind: SyntaxError::UnclosedParenthesis, .. },
);

test_case!(
    double_star,
    input: "2 ** 3",
    error: Error::Syntax { kind: SyntaxError::MissingOperand { found: Token::Star }, .. },
);

test_case!(
    stray_closing_parenthesis,
    input: "(1 + 2))",
    error: Error::Syntax { kind: SyntaxError::TrailingInput { found: Token::RParen }, .. },
);

test_case!(
    juxtaposed_numbers,
    input: "1 2",
    error: Error::Syntax { kind: SyntaxError::TrailingInput { .. }, .. },
);

test_case!(
    empty_group,
    input: "()",
    error: Error::Syntax { kind: SyntaxError::MissingOperand { .. }, .. },
);

test_case!(
    exponent_caret,
    input: "2 ^ 3",
    error: Error::UnexpectedCharacter { character: '^', position: 2 },
);

test_case!(
    identifier,
    input: "x + 1",
    error: Error::UnexpectedCharacter { character: 'x', position: 0 },
);

test_case!(
    two_decimal_points,
    input: "1.2.3 + 4",
    error: Error::InvalidLiteral { .. },
);

test_case!(
    lone_point,
    input: ". + 1",
    error: Error::InvalidLiteral { .. },
);

#[test]
fn categories_separate_input_from_arithmetic() {
    let malformed = ["", "1 +", "(2 * 3", "2 ** 3", "2 $ 3", "1..2"];
    for source in malformed {
        let err = simulator::evaluate_expression(source).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Input, "{:?}", source);
    }

    let err = simulator::evaluate_expression("4 / (1 - 1)").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Arithmetic);
}

#[test]
fn nesting_limit_is_configurable() {
    let source = format!("{}1{}", "(".repeat(300), ")".repeat(300));
    assert!(matches!(
        simulator::evaluate_expression(&source),
        Err(Error::MaxDepthExceeded { max_depth: 256, .. })
    ));

    let options = simulator::EvaluationOptions { max_depth: 512 };
    assert_eq!(
        simulator::evaluate_expression_with_options(&source, &options),
        Ok(1.0)
    );
}

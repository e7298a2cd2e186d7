// tests/calc_tests.rs

use decicalc::decimal::Decimal;
use decicalc::{CalcError, ErrorKind, MAX_EXPRESSION_LEN, calculate, evaluate};

fn kind(expr: &str) -> ErrorKind {
    evaluate(expr).unwrap_err().kind()
}

// ============================================================================
// Results
// ============================================================================

#[test]
fn test_basic_expressions() {
    let test_cases = vec![
        ("2+3", "5"),
        ("2.5*2", "5"),
        ("-3-2", "-5"),
        ("(1+2)*3", "9"),
        ("10%3", "1"),
        ("1/4", "0.25"),
        ("7/2", "3.5"),
        ("0.1+0.2", "0.3"),
        ("2.50+0", "2.5"),
        ("1.10*10", "11"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(evaluate(input).unwrap(), expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_precedence_and_grouping() {
    let test_cases = vec![
        ("2+3*4", "14"),
        ("(2+3)*4", "20"),
        ("20-10-5", "5"),
        ("100/10/5", "2"),
        ("2*-3", "-6"),
        ("-(2+3)*2", "-10"),
        ("- -2", "2"),
        ("-2*-2", "4"),
        ("((((1))))+1", "2"),
        ("8 % 3 * 2", "4"),
        ("1 - (-1)", "2"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(evaluate(input).unwrap(), expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_modulo_keeps_dividend_sign() {
    assert_eq!(evaluate("-10%3").unwrap(), "-1");
    assert_eq!(evaluate("10%-3").unwrap(), "1");
    assert_eq!(evaluate("5.5%2").unwrap(), "1.5");
}

#[test]
fn test_division_precision() {
    assert_eq!(evaluate("1/3").unwrap(), format!("0.{}", "3".repeat(40)));
    assert_eq!(evaluate("10/3").unwrap(), format!("3.{}", "3".repeat(39)));
    assert_eq!(evaluate("-2/3").unwrap(), format!("-0.{}7", "6".repeat(39)));
}

#[test]
fn test_large_values_stay_fixed_point() {
    assert_eq!(
        evaluate("99999999999999999999 * 99999999999999999999").unwrap(),
        "9999999999999999999800000000000000000001"
    );
    assert_eq!(
        evaluate("1000000 * 1000000 * 1000000 * 1000000").unwrap(),
        "1000000000000000000000000"
    );
    assert_eq!(evaluate("0.000001 * 0.000001").unwrap(), "0.000000000001");
}

#[test]
fn test_zero_has_no_sign() {
    assert_eq!(evaluate("-0").unwrap(), "0");
    assert_eq!(evaluate("0 * -5").unwrap(), "0");
}

#[test]
fn test_round_trip_through_format() {
    for input in ["1/7", "2.5*2", "-3-2", "123.456 - 0.456", "22/7*7"] {
        let rendered = evaluate(input).unwrap();
        let reparsed: Decimal = rendered.parse().unwrap();
        assert_eq!(reparsed.to_string(), rendered, "Failed for input: {}", input);
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let first = evaluate("(1 + 2.25) * 4 % 5 / 3").unwrap();
    for _ in 0..10 {
        assert_eq!(evaluate("(1 + 2.25) * 4 % 5 / 3").unwrap(), first);
    }
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_division_by_zero() {
    assert_eq!(kind("1/0"), ErrorKind::DivisionByZero);
    assert_eq!(kind("1%0"), ErrorKind::DivisionByZero);
    assert_eq!(kind("5/(2-2)"), ErrorKind::DivisionByZero);
}

#[test]
fn test_mismatched_parentheses() {
    assert_eq!(kind("(1+2"), ErrorKind::MismatchedParentheses);
    assert_eq!(kind("1+2)"), ErrorKind::MismatchedParentheses);
}

#[test]
fn test_malformed_expressions() {
    assert_eq!(kind("3 4"), ErrorKind::InvalidExpression);
    assert_eq!(kind("1++2"), ErrorKind::MissingOperand);
    assert_eq!(kind("1+"), ErrorKind::MissingOperand);
    assert_eq!(kind("*2"), ErrorKind::MissingOperand);
    assert_eq!(kind("()"), ErrorKind::InvalidExpression);
    assert_eq!(kind(""), ErrorKind::InvalidExpression);
    assert_eq!(kind("(1)(2)"), ErrorKind::InvalidExpression);
}

#[test]
fn test_lexical_errors() {
    assert_eq!(kind("abc"), ErrorKind::InvalidCharacter);
    assert_eq!(kind("2^3"), ErrorKind::InvalidCharacter);
    assert_eq!(kind("1e5"), ErrorKind::InvalidCharacter);
    assert_eq!(kind(".5+1"), ErrorKind::MalformedToken);
    assert_eq!(kind("1.+1"), ErrorKind::MalformedToken);
}

#[test]
fn test_first_error_wins() {
    // The lexer fails before the unbalanced parenthesis is ever seen.
    assert_eq!(kind("(1 + a"), ErrorKind::InvalidCharacter);
    // Parenthesis errors come before arithmetic ones.
    assert_eq!(kind("(1/0"), ErrorKind::MismatchedParentheses);
}

#[test]
fn test_length_limit() {
    let at_limit = format!("1{}", "+1".repeat((MAX_EXPRESSION_LEN - 1) / 2));
    assert_eq!(at_limit.len(), 999);
    assert_eq!(evaluate(&at_limit).unwrap(), "500");

    let exact = "1".repeat(MAX_EXPRESSION_LEN);
    assert!(evaluate(&exact).is_ok());

    // Would be an invalid character if it were tokenized.
    let too_long = "x".repeat(MAX_EXPRESSION_LEN + 1);
    assert_eq!(
        evaluate(&too_long),
        Err(CalcError::ExpressionTooLong {
            length: MAX_EXPRESSION_LEN + 1
        })
    );
}

#[test]
fn test_length_counts_characters() {
    // Multi-byte characters count once each.
    let input = "é".repeat(MAX_EXPRESSION_LEN);
    assert_eq!(kind(&input), ErrorKind::InvalidCharacter);
}

#[test]
fn test_error_messages() {
    let test_cases = vec![
        ("1/0", "Division by zero"),
        ("(1", "Mismatched parentheses"),
        ("3 4", "Invalid expression"),
        ("1++2", "Missing operand"),
        ("a", "Invalid character 'a' at position 0"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(evaluate(input).unwrap_err().to_string(), expected);
    }

    let too_long = "1".repeat(MAX_EXPRESSION_LEN + 1);
    assert_eq!(evaluate(&too_long).unwrap_err().to_string(), "Expression too long");
}

// ============================================================================
// Two-Operand Calculations
// ============================================================================

#[test]
fn test_calculate() {
    let test_cases = vec![
        ("1", "+", "2", "3"),
        ("0.1", "+", "0.2", "0.3"),
        ("5", "-", "7.5", "-2.5"),
        ("2.5", "*", "4", "10"),
        ("1", "/", "8", "0.125"),
        ("10", "%", "4", "2"),
        ("1e2", "*", "3", "300"),
    ];

    for (a, op, b, expected) in test_cases {
        let value = calculate(a, op, b).unwrap();
        assert_eq!(
            decicalc::format_decimal(&value),
            expected,
            "Failed for {} {} {}",
            a,
            op,
            b
        );
    }
}

#[test]
fn test_calculate_errors() {
    let test_cases = vec![
        ("1", "/", "0", ErrorKind::DivisionByZero),
        ("1", "%", "0.0", ErrorKind::DivisionByZero),
        ("1", "^", "2", ErrorKind::UnsupportedOperator),
        ("1", "u-", "2", ErrorKind::UnsupportedOperator),
        ("1", "", "2", ErrorKind::UnsupportedOperator),
        ("abc", "+", "2", ErrorKind::InvalidNumber),
        ("1", "+", "null", ErrorKind::InvalidNumber),
        ("x", "^", "2", ErrorKind::InvalidNumber),
    ];

    for (a, op, b, expected) in test_cases {
        assert_eq!(
            calculate(a, op, b).unwrap_err().kind(),
            expected,
            "Failed for {} {} {}",
            a,
            op,
            b
        );
    }
}

#[test]
fn test_calculate_agrees_with_evaluate() {
    for (a, op, b) in [("7", "/", "3"), ("-7", "%", "3"), ("1.5", "*", "1.5")] {
        let direct = decicalc::format_decimal(&calculate(a, op, b).unwrap());
        let expr = evaluate(&format!("{}{}{}", a, op, b)).unwrap();
        assert_eq!(direct, expr);
    }
}

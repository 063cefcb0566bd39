use proptest::prelude::*;
use simulator_core::{Error, ErrorCategory, evaluate_expression};

/// A random well-formed expression without division, paired with the value
/// it must evaluate to under precedence-respecting left-to-right arithmetic.
fn expression() -> impl Strategy<Value = (String, f64)> {
    let leaf = (0u32..1000).prop_map(|n| (n.to_string(), n as f64));
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|((a, x), (b, y))| (
                format!("({} + {})", a, b),
                x + y
            )),
            (inner.clone(), inner.clone()).prop_map(|((a, x), (b, y))| (
                format!("({} - {})", a, b),
                x - y
            )),
            (inner.clone(), inner.clone()).prop_map(|((a, x), (b, y))| (
                format!("({} * {})", a, b),
                x * y
            )),
            inner.prop_map(|(a, x)| (format!("-{}", a), -x)),
        ]
    })
}

proptest! {
    #[test]
    fn matches_reference_arithmetic((source, expected) in expression()) {
        prop_assert_eq!(evaluate_expression(&source), Ok(expected));
    }

    #[test]
    fn evaluation_is_idempotent((source, _) in expression()) {
        let first = evaluate_expression(&source).unwrap();
        let second = evaluate_expression(&source).unwrap();
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn unary_minus_parity(n in 0usize..2000, value in 0u32..10_000) {
        let source = format!("{}{}", "-".repeat(n), value);
        let expected = if n % 2 == 0 { value as f64 } else { -(value as f64) };
        prop_assert_eq!(evaluate_expression(&source), Ok(expected));
    }

    #[test]
    fn flat_chains_fold_left(a in 1u32..100, b in 1u32..100, c in 1u32..100) {
        let (a, b, c) = (a as f64, b as f64, c as f64);
        prop_assert_eq!(evaluate_expression(&format!("{} - {} - {}", a, b, c)), Ok((a - b) - c));
        prop_assert_eq!(evaluate_expression(&format!("{} / {} / {}", a, b, c)), Ok((a / b) / c));
        prop_assert_eq!(evaluate_expression(&format!("{} + {} * {}", a, b, c)), Ok(a + b * c));
    }

    #[test]
    fn whitespace_is_insignificant((source, _) in expression(), pad in "[ \t\n]{0,3}") {
        let compact = source.replace(' ', "");
        let widened = format!("{pad}{}{pad}", source.replace(' ', &format!(" {pad}")));
        let expected = evaluate_expression(&source);
        prop_assert_eq!(evaluate_expression(&compact), expected.clone());
        prop_assert_eq!(evaluate_expression(&widened), expected);
    }

    #[test]
    fn zero_divisor_fails_at_any_depth(depth in 0usize..20, n in 0u32..100) {
        let source = format!("{}{} / ({} - {}){}", "(".repeat(depth), n, n, n, ")".repeat(depth));
        let result = evaluate_expression(&source);
        prop_assert!(matches!(result, Err(Error::DivisionByZero { .. })), "expected DivisionByZero, got {:?}", result);
        prop_assert_eq!(result.unwrap_err().category(), ErrorCategory::Arithmetic);
    }

    #[test]
    fn arbitrary_input_never_panics(source in "[0-9.+\\-*/() a]{0,40}") {
        let _ = evaluate_expression(&source);
    }
}

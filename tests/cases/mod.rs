/// Declares a test evaluating `input` through the public entry point.
///
/// ```ignore
/// test_case!(sum, input: "1 + 2", value: 3.0);
/// test_case!(bad, input: "1 +", error: Error::Syntax { .. });
/// ```
macro_rules! test_case {
    ($name:ident, input: $input:expr, value: $value:expr $(,)?) => {
        #[test]
        fn $name() {
            pretty_assertions::assert_eq!(simulator::evaluate_expression($input), Ok($value));
        }
    };
    ($name:ident, input: $input:expr, error: $pattern:pat $(,)?) => {
        #[test]
        fn $name() {
            let result = simulator::evaluate_expression($input);
            assert!(
                matches!(result, Err($pattern)),
                "input {:?} evaluated to {:?}",
                $input,
                result
            );
        }
    };
}

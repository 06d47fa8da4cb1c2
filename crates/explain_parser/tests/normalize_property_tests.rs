use explain_parser::{classify, normalize, parse_expression, QueryKind};
use proptest::prelude::*;

/// Query-like strings built from the fragments the normalizer reacts to.
fn arb_query() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("√"),
        Just("sqrt("),
        Just("SQRT("),
        Just("square root of "),
        Just("Square Root Of"),
        Just("root "),
        Just("("),
        Just(")"),
        Just(" "),
        Just("-"),
        Just("."),
        Just("+"),
        Just("*"),
        Just("4"),
        Just("144"),
        Just("2.5"),
        Just("x"),
        Just("?"),
    ];
    prop::collection::vec(fragment, 0..10).prop_map(|parts| parts.concat())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn normalization_is_idempotent(query in arb_query()) {
        let once = normalize(&query);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn arbitrary_text_is_idempotent(query in "\\PC{0,24}") {
        let once = normalize(&query);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn gate_rejects_any_letter(prefix in "[0-9 +*/()-]{0,6}", letter in "[a-zA-Z]", suffix in "[0-9 +*/()-]{0,6}") {
        let text = format!("{prefix}{letter}{suffix}");
        prop_assert!(parse_expression(&text).is_err());
    }

    #[test]
    fn integer_sums_evaluate_exactly(a in 0u32..10_000, b in 0u32..10_000, c in 1u32..100) {
        let text = format!("({a} + {b}) * {c}");
        prop_assert_eq!(classify(&text), QueryKind::Math);
        let value = parse_expression(&text).unwrap().evaluate().unwrap().value;
        prop_assert_eq!(value, f64::from(a + b) * f64::from(c));
    }
}

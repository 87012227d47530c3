//! Property-based tests for nebula-forms.

use nebula_forms::prelude::*;
use proptest::prelude::*;
use serde_json::{Value, json};

fn empty_value() -> impl Strategy<Value = Value> {
    prop_oneof![Just(Value::Null), Just(json!("")), Just(json!([]))]
}

fn falsy_value() -> impl Strategy<Value = Value> {
    prop_oneof![empty_value(), Just(json!(false)), Just(json!(0)), Just(json!(0.0))]
}

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn pattern_rules_idempotent(s in ".*", index in 0usize..23) {
        let rule = named(Format::ALL[index]);
        let value = json!(s);
        prop_assert_eq!(rule.validate(&value), rule.validate(&value));
    }

    #[test]
    fn range_idempotent(s in ".{0,30}") {
        let rule = range(8, 14).unwrap();
        let value = json!(s);
        prop_assert_eq!(rule.validate(&value), rule.validate(&value));
    }

    #[test]
    fn compare_to_idempotent(a in ".{0,10}", b in ".{0,10}") {
        let group = FormGroup::new()
            .with_control("a", a)
            .with_control("b", b);
        let rule = compare_to("b", Comparison::StrictEqual);
        let view = group.control("a").unwrap();
        prop_assert_eq!(rule.validate_control(&view), rule.validate_control(&view));
    }

    #[test]
    fn required_either_idempotent(a in "[a-z]{0,3}", b in "[a-z]{0,3}") {
        let group = FormGroup::new()
            .with_control("a", a)
            .with_control("b", b);
        let rule = required_either("a", "b");

        let first = rule.validate(&group);
        let errors_a = group.get("a").unwrap().errors();
        let second = rule.validate(&group);

        prop_assert_eq!(first, second);
        prop_assert_eq!(errors_a, group.get("a").unwrap().errors());
    }
}

// ============================================================================
// EMPTY IS VALID: every non-requirement rule ignores missing input
// ============================================================================

proptest! {
    #[test]
    fn falsy_is_valid_for_patterns(value in falsy_value(), index in 0usize..23) {
        prop_assert!(named(Format::ALL[index]).validate(&value).is_ok());
    }

    #[test]
    fn empty_is_valid_for_measurements(value in empty_value(), n in 0usize..50) {
        prop_assert!(length(n, Comparison::Greater).validate(&value).is_ok());
        prop_assert!(word_count(n, Comparison::Greater).validate(&value).is_ok());
        prop_assert!(range(n, n + 1).unwrap().validate(&value).is_ok());
    }
}

// ============================================================================
// RANGE: inclusive on both ends
// ============================================================================

proptest! {
    #[test]
    fn range_accepts_iff_within_bounds(len in 1usize..30) {
        let rule = range(8, 14).unwrap();
        let value = json!("x".repeat(len));
        prop_assert_eq!(rule.validate(&value).is_ok(), (8..=14).contains(&len));
    }

    #[test]
    fn inverted_ranges_never_build(start in 1usize..100, gap in 1usize..10) {
        prop_assert!(range(start, start.saturating_sub(gap)).is_err());
    }

    #[test]
    fn length_matches_comparison(s in "[a-z]{1,20}", threshold in 0usize..25) {
        let len = s.chars().count();
        let rule = length(threshold, Comparison::LessOrEqual);
        prop_assert_eq!(rule.validate(&json!(s)).is_ok(), len <= threshold);
    }
}

// ============================================================================
// POLARITY: a pattern and its negation disagree on every non-empty string
// ============================================================================

proptest! {
    #[test]
    fn regexp_and_regexp_not_are_complements(s in ".{1,20}") {
        let yes = regexp("[0-9]").unwrap();
        let no = regexp_not("[0-9]").unwrap();
        let value = json!(s);
        prop_assert_ne!(yes.validate(&value).is_ok(), no.validate(&value).is_ok());
    }
}

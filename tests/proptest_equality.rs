//! Property-based tests for comparator and assertion builder invariants.

use attest::prelude::*;
use attest::stringify;
use proptest::prelude::*;

fn value_strategy(max_depth: u32) -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("not NaN", |v| !v.is_nan())
            .prop_map(Value::Number),
        "[a-z]{0,6}".prop_map(Value::String),
    ];

    leaf.prop_recursive(max_depth, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::btree_map("[a-z]{1,3}", inner, 0..4).prop_map(|entries| Value::map(entries)),
        ]
    })
}

proptest! {
    #[test]
    fn equality_is_reflexive_without_nan(v in value_strategy(3)) {
        prop_assert!(equal(&v, &v));
    }

    #[test]
    fn assert_equal_tracks_comparator(x in value_strategy(2), y in value_strategy(2)) {
        prop_assert_eq!(assert_equal(&x, &y).ok(), equal(&x, &y));
        prop_assert_eq!(assert_not_equal(&x, &y).ok(), !equal(&x, &y));
    }

    #[test]
    fn messages_embed_both_operands(x in value_strategy(2), y in value_strategy(2)) {
        let rendered = (stringify(&x), stringify(&y));
        let message = assert_equal(&x, &y).into_message();
        prop_assert!(message.starts_with(&rendered.0));
        prop_assert!(message.ends_with(&rendered.1));
    }

    #[test]
    fn list_order_does_not_matter(items in prop::collection::vec(value_strategy(1), 0..6)) {
        let mut reversed = items.clone();
        reversed.reverse();
        prop_assert!(equal(&Value::List(items), &Value::List(reversed)));
    }

    #[test]
    fn length_mismatch_is_never_equal(items in prop::collection::vec(value_strategy(1), 1..6)) {
        let shorter = items[..items.len() - 1].to_vec();
        prop_assert!(!equal(&Value::List(items.clone()), &Value::List(shorter.clone())));
        prop_assert!(!equal(&Value::List(shorter), &Value::List(items)));
    }

    #[test]
    fn aggregate_counts_are_consistent(flags in prop::collection::vec(any::<bool>(), 0..10)) {
        let assertions: Vec<_> = flags
            .iter()
            .map(|&pass| if pass { assert_equal(1, 1) } else { assert_equal(1, 2) })
            .collect();
        let result = test("generated", assertions);
        prop_assert_eq!(result.total, flags.len());
        if flags.is_empty() {
            prop_assert_eq!(result.failures.len(), 1);
        } else {
            prop_assert_eq!(result.failures.len(), flags.iter().filter(|&&p| !p).count());
            prop_assert!(result.failures.len() <= result.total);
        }
    }
}

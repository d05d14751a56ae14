//! Structural equality and assertion builder behavior, through the public API.

use attest::prelude::*;
use attest::stringify;

#[cfg(test)]
mod reflexivity_tests {
    use super::*;

    #[test]
    fn acyclic_values_equal_themselves() {
        let samples = vec![
            Value::Undefined,
            Value::Null,
            Value::from(true),
            Value::from(42),
            Value::from(-0.5),
            Value::from("text"),
            Value::function(|_| Value::Null),
            Value::list([Value::from(1), Value::from("a"), Value::Null]),
            Value::map([
                ("nested", Value::map([("list", Value::list([1, 2]))])),
                ("flag", Value::from(false)),
            ]),
        ];
        for v in &samples {
            assert!(equal(v, v), "{} should equal itself", v);
        }
    }

    #[test]
    fn nan_is_the_documented_exception() {
        let nan = Value::from(f64::NAN);
        assert!(!equal(&nan, &nan));
        assert!(!equal(&Value::list([f64::NAN]), &Value::list([f64::NAN])));
    }

    #[test]
    fn symbols_never_equal_themselves() {
        let s = Value::from(Symbol::new("unique"));
        assert!(!equal(&s, &s));
    }
}

#[cfg(test)]
mod list_tests {
    use super::*;

    #[test]
    fn duplicate_heavy_lists_follow_some_match_rule() {
        let a = Value::list([1, 1, 2]);
        let b = Value::list([1, 2, 2]);
        assert!(equal(&a, &b));
        assert!(equal(&b, &a));
    }

    #[test]
    fn some_match_rule_is_not_symmetric() {
        let ones = Value::list([1, 1]);
        let one_two = Value::list([1, 2]);
        assert!(equal(&ones, &one_two));
        assert!(!equal(&one_two, &ones));
    }

    #[test]
    fn nested_lists_compare_recursively() {
        let a = Value::list([Value::list([1, 2]), Value::list([3])]);
        let b = Value::list([Value::list([3]), Value::list([2, 1])]);
        assert!(equal(&a, &b));
    }
}

#[cfg(test)]
mod map_tests {
    use super::*;

    #[test]
    fn identical_maps_are_equal() {
        assert!(equal(
            &Value::map([("a", 1), ("b", 2)]),
            &Value::map([("a", 1), ("b", 2)])
        ));
    }

    #[test]
    fn cardinality_mismatch_is_unequal() {
        assert!(!equal(
            &Value::map([("a", 1)]),
            &Value::map([("a", 1), ("b", 2)])
        ));
    }

    #[test]
    fn missing_key_is_unequal() {
        assert!(!equal(
            &Value::map([("a", 1), ("b", 2)]),
            &Value::map([("a", 1), ("c", 2)])
        ));
    }

    #[test]
    fn map_never_equals_list() {
        assert!(!equal(&Value::map([("0", 1)]), &Value::list([1])));
    }
}

#[cfg(test)]
mod function_tests {
    use super::*;

    #[test]
    fn same_reference_is_equal() {
        let f = FunctionRef::new(|_| Value::Null);
        assert!(equal(&Value::from(f.clone()), &Value::from(f)));
    }

    #[test]
    fn identical_bodies_are_not_equal() {
        assert!(!equal(
            &Value::function(|_| Value::Null),
            &Value::function(|_| Value::Null)
        ));
    }

    #[test]
    fn functions_inside_structures_keep_identity_rule() {
        let f = Value::function(|_| Value::Null);
        let a = Value::map([("callback", f.clone())]);
        let b = Value::map([("callback", f)]);
        assert!(equal(&a, &b));
        assert_eq!(stringify(&a), "{}");
    }
}

#[cfg(test)]
mod assertion_tests {
    use super::*;

    #[test]
    fn assertion_outcome_tracks_comparator() {
        let pairs = vec![
            (Value::from(1), Value::from(1)),
            (Value::from(1), Value::from(2)),
            (Value::list([1, 1]), Value::list([1, 2])),
            (Value::list([1, 2]), Value::list([1, 1])),
            (Value::Null, Value::Undefined),
        ];
        for (x, y) in pairs {
            assert_eq!(assert_equal(&x, &y).ok(), equal(&x, &y));
            assert_eq!(assert_not_equal(&x, &y).ok(), !equal(&x, &y));
        }
    }

    #[test]
    fn messages_use_stringified_operands() {
        let result = assert_equal(Value::map([("a", 1)]), Value::map([("a", "1")]));
        assert_eq!(result.message(), r#"{"a":1} is not equal to {"a":"1"}"#);

        let result = assert_not_equal(Value::list([1, 2]), Value::list([2, 1]));
        assert_eq!(result.message(), "[1,2] is equal to [2,1], but it shouldn't be");
    }

    #[test]
    fn mixed_test_records_only_failures() {
        let result = test("numbers", [assert_equal(1, 1), assert_equal(1, 2)]);
        assert_eq!(result.total, 2);
        assert_eq!(result.failures, vec!["1 is not equal to 2".to_string()]);
    }

    #[test]
    fn test_without_assertions_fails() {
        let result = test("nothing", Vec::new());
        assert_eq!(result.total, 0);
        assert_eq!(
            result.failures,
            vec!["Test did not contain any assertions.".to_string()]
        );
    }
}

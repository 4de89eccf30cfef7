//! Property tests over generated values.

use proptest::prelude::*;
use regraft::{deep_clone, equal, get, get_in, is, merge, put, put_in, put_key, Key, Path, Value};

/// Arbitrary trees of primitives, lists, and dicts.
///
/// Dict entries are generated without `Null` values, matching the shape of
/// anything the operators themselves produce; lists may contain `Null`.
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<f64>().prop_map(Value::Float),
        "[a-z]{0,6}".prop_map(Value::from),
        Just(Value::atom("opaque")),
    ];
    leaf.prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::list),
            prop::collection::vec(("[a-z]{1,4}", inner), 0..6).prop_map(|entries| {
                Value::dict(entries.into_iter().filter(|(_, value)| !value.is_null()))
            }),
        ]
    })
}

/// Every addressable path in `value`, root included.
fn all_paths(value: &Value) -> Vec<Path> {
    let mut paths = vec![Path::new()];
    collect_paths(value, &mut Path::new(), &mut paths);
    paths
}

fn collect_paths(value: &Value, prefix: &mut Path, out: &mut Vec<Path>) {
    match value {
        Value::List(items) => {
            for (i, child) in items.iter().enumerate() {
                prefix.push(Key::from(i));
                out.push(prefix.clone());
                collect_paths(child, prefix, out);
                prefix.pop();
            }
        }
        Value::Dict(map) => {
            for (k, child) in map.iter() {
                prefix.push(Key::from(k.as_str()));
                out.push(prefix.clone());
                collect_paths(child, prefix, out);
                prefix.pop();
            }
        }
        _ => {}
    }
}

proptest! {
    #[test]
    fn equality_is_reflexive(value in arb_value()) {
        prop_assert!(equal(&value, &value));
        prop_assert!(equal(&value, &value.clone()));
    }

    #[test]
    fn put_of_a_deep_copy_is_the_original(value in arb_value()) {
        let copy = deep_clone(&value);
        prop_assert!(is(&put(&value, &copy), &value));
    }

    #[test]
    fn put_result_is_value_equal_to_next(prev in arb_value(), next in arb_value()) {
        prop_assert!(equal(&put(&prev, &next), &next));
    }

    #[test]
    fn noop_deep_writes_are_identity(value in arb_value()) {
        for path in all_paths(&value) {
            let current = get_in(&value, &path).clone();
            let out = put_in(&value, &path, &current).unwrap();
            prop_assert!(is(&out, &value), "path {path:?}");
        }
    }

    #[test]
    fn deleting_by_null_leaves_no_key(value in arb_value(), name in "[a-z]{1,4}") {
        let key = Key::from(name.as_str());
        let out = put_key(&value, &key, &Value::Null).unwrap();
        prop_assert!(get(&out, &key).is_null());
        if let Some(map) = out.as_dict() {
            prop_assert!(!map.contains_key(&name));
        }
    }

    #[test]
    fn merged_dicts_contain_both_key_sets(a in arb_value(), b in arb_value()) {
        let out = merge(&a, &b);
        if let (Some(prev), Some(next), Some(map)) = (a.as_dict(), b.as_dict(), out.as_dict()) {
            for k in next.keys() {
                prop_assert!(map.contains_key(k), "missing {k} from next");
            }
            for (k, v) in prev.iter() {
                if !next.contains_key(k) && !v.is_null() {
                    prop_assert!(map.contains_key(k), "missing {k} from prev");
                }
            }
        }
    }
}

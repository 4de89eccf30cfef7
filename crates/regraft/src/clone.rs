//! Deep clone with fresh container nodes.

use crate::value::Value;
use std::sync::Arc;

/// Creates a deep clone of a value, allocating a fresh node for every list
/// and dict in the tree.
///
/// Strings keep their shared allocation (they compare by content) and atom
/// handles are carried over as-is: atoms are opaque and are never cloned.
/// The result is [`crate::equal()`] to the input but shares no container
/// handle with it, which makes it useful for observing reference
/// preservation: `put(&v, &deep_clone(&v))` returns `v`'s own handle.
///
/// # Examples
///
/// ```
/// use regraft::{deep_clone, equal, is, Value};
/// use serde_json::json;
///
/// let original = Value::from(json!({"foo": [1, 2, 3]}));
/// let copy = deep_clone(&original);
///
/// assert!(equal(&original, &copy));
/// assert!(!is(&original, &copy));
/// ```
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::List(items) => Value::List(Arc::new(items.iter().map(deep_clone).collect())),
        Value::Dict(map) => Value::Dict(Arc::new(
            map.iter().map(|(k, v)| (k.clone(), deep_clone(v))).collect(),
        )),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equal::{equal, is};
    use serde_json::json;

    #[test]
    fn test_clone_primitives_unchanged() {
        for j in [json!(null), json!(true), json!(42), json!("hello")] {
            let value = Value::from(j);
            assert!(is(&value, &deep_clone(&value)));
        }
    }

    #[test]
    fn test_clone_containers_are_fresh() {
        let value = Value::from(json!({"a": [1, 2, {"nested": true}], "b": {"c": "d"}}));
        let copy = deep_clone(&value);
        assert!(equal(&value, &copy));
        assert!(!is(&value, &copy));
        // Children are fresh too.
        let orig_a = value.as_dict().unwrap().get("a").unwrap();
        let copy_a = copy.as_dict().unwrap().get("a").unwrap();
        assert!(!is(orig_a, copy_a));
    }

    #[test]
    fn test_clone_keeps_atom_handle() {
        let atom = Value::atom("opaque");
        let value = Value::list([atom.clone()]);
        let copy = deep_clone(&value);
        assert!(!is(&value, &copy));
        assert!(is(&copy.as_list().unwrap()[0], &atom));
    }
}

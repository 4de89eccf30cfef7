//! Null-safe reads by key and by path.

use crate::value::{Key, Value, NULL};

/// Read one step into a value.
///
/// Never fails: any miss — wrong container kind, absent key, out-of-range
/// index, or a name that does not parse as a position when addressing a
/// list — yields the absent marker.
///
/// # Examples
///
/// ```
/// use regraft::{get, Key, Value};
/// use serde_json::json;
///
/// let doc = Value::from(json!({"foo": [10, 20]}));
/// assert_eq!(get(&doc, &Key::from("foo")), &Value::from(json!([10, 20])));
/// assert!(get(&doc, &Key::from("missing")).is_null());
/// assert!(get(&Value::Null, &Key::from("foo")).is_null());
/// ```
pub fn get<'a>(value: &'a Value, key: &Key) -> &'a Value {
    match value {
        Value::List(items) => match key.list_index() {
            Some(index) => items.get(index).unwrap_or(&NULL),
            None => &NULL,
        },
        Value::Dict(map) => map.get(key.dict_name().as_ref()).unwrap_or(&NULL),
        _ => &NULL,
    }
}

/// Read a nested location: a left fold of [`get`] over the path.
///
/// The absent marker propagates, so a miss at any depth yields `Null`
/// without an error.
///
/// # Examples
///
/// ```
/// use regraft::{get_in, path, Value};
/// use serde_json::json;
///
/// let doc = Value::from(json!({"a": {"b": [1, 2, 3]}}));
/// assert_eq!(get_in(&doc, &path!["a", "b", 1usize]), &Value::Int(2));
/// assert!(get_in(&doc, &path!["a", "x", "deep"]).is_null());
/// assert_eq!(get_in(&doc, &path![]), &doc);
/// ```
pub fn get_in<'a>(value: &'a Value, path: &[Key]) -> &'a Value {
    path.iter().fold(value, |current, key| get(current, key))
}

/// Read a nested location from an arbitrary sequence of key-convertible
/// steps.
///
/// Equivalent to [`get_in`] over the collected steps; an empty sequence
/// yields the origin itself.
///
/// # Examples
///
/// ```
/// use regraft::{scan, Value};
/// use serde_json::json;
///
/// let doc = Value::from(json!({"users": [{"name": "ada"}]}));
/// assert_eq!(scan(&doc, ["users", "0", "name"]), &Value::from("ada"));
/// ```
pub fn scan<'a, I>(value: &'a Value, steps: I) -> &'a Value
where
    I: IntoIterator,
    I::Item: Into<Key>,
{
    steps.into_iter().fold(value, |current, step| {
        let key: Key = step.into();
        get(current, &key)
    })
}

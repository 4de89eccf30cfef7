//! Index-based list insertion and removal.

use crate::error::{RegraftError, RegraftResult};
use crate::value::Value;
use std::sync::Arc;

/// Returns a new list with `value` spliced in at `index`.
///
/// Non-list input coerces to an empty list first. Valid indices run
/// `0..=len`; inserting at exactly `len` appends. Insertion always changes
/// the length, so it always allocates.
///
/// # Examples
///
/// ```
/// use regraft::{insert_at, Value};
/// use serde_json::json;
///
/// let list = Value::from(json!([1, 2]));
/// let out = insert_at(&list, 2, Value::Int(9)).unwrap();
/// assert_eq!(out, Value::from(json!([1, 2, 9])));
///
/// assert!(insert_at(&list, 3, Value::Int(9)).is_err());
/// ```
pub fn insert_at(list: &Value, index: usize, value: Value) -> RegraftResult<Value> {
    static EMPTY: [Value; 0] = [];
    let items: &[Value] = list.as_list().map_or(&EMPTY, |items| items.as_slice());
    if index > items.len() {
        return Err(RegraftError::IndexOutOfBounds {
            index,
            len: items.len(),
        });
    }
    let mut out = Vec::with_capacity(items.len() + 1);
    out.extend_from_slice(&items[..index]);
    out.push(value);
    out.extend_from_slice(&items[index..]);
    Ok(Value::List(Arc::new(out)))
}

/// Returns a new list with the element at `index` spliced out.
///
/// Non-list input coerces to an empty list. An out-of-range index is a
/// silent no-op returning the list unchanged — the one deliberate
/// exception to eager index validation.
///
/// # Examples
///
/// ```
/// use regraft::{is, remove_at, Value};
/// use serde_json::json;
///
/// let list = Value::from(json!([1, 2, 3]));
/// assert_eq!(remove_at(&list, 1), Value::from(json!([1, 3])));
/// assert!(is(&remove_at(&list, 5), &list));
/// ```
pub fn remove_at(list: &Value, index: usize) -> Value {
    match list.as_list() {
        Some(items) if index < items.len() => {
            let mut out = Vec::with_capacity(items.len() - 1);
            out.extend_from_slice(&items[..index]);
            out.extend_from_slice(&items[index + 1..]);
            Value::List(Arc::new(out))
        }
        Some(_) => list.clone(),
        None => Value::list([]),
    }
}

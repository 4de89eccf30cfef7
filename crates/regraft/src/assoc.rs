//! Single-location insertion with reference preservation.
//!
//! This is the foundation the update operators build on: it writes one key
//! (or one path) and hands back the original node whenever the write would
//! change nothing. It performs no recursive combination of old and new
//! values; that is the operators' job.

use crate::equal::{equal_by, is};
use crate::error::{RegraftError, RegraftResult};
use crate::get::{get, get_in};
use crate::value::{Dict, Key, Value};
use std::sync::Arc;

/// Write `next` at `key` in `prev`, reusing `prev`'s handle when nothing
/// changes.
///
/// A list with an `Index` key takes the bounds-checked list path: indices
/// in `0..len` overwrite, exactly `len` appends, and anything past that is
/// an error. Every other combination coerces `prev` to a dict (an empty one
/// when `prev` is not a dict already) and the key to a field name. Writing
/// `Null` deletes the field; deleting an absent field is a no-op.
///
/// # Examples
///
/// ```
/// use regraft::{assoc, is, Key, Value};
/// use serde_json::json;
///
/// let doc = Value::from(json!({"a": 1}));
/// let out = assoc(&doc, &Key::from("a"), Value::Int(1)).unwrap();
/// assert!(is(&out, &doc)); // unchanged, same handle
///
/// let out = assoc(&doc, &Key::from("b"), Value::Int(2)).unwrap();
/// assert_eq!(out, Value::from(json!({"a": 1, "b": 2})));
/// ```
pub fn assoc(prev: &Value, key: &Key, next: Value) -> RegraftResult<Value> {
    if let (Value::List(items), Key::Index(index)) = (prev, key) {
        if *index > items.len() {
            return Err(RegraftError::IndexOutOfBounds {
                index: *index,
                len: items.len(),
            });
        }
        return Ok(list_assoc(prev, items, *index, next));
    }
    Ok(dict_assoc(prev, key, next))
}

fn list_assoc(prev: &Value, items: &[Value], index: usize, next: Value) -> Value {
    if let Some(existing) = items.get(index) {
        if is(existing, &next) {
            return prev.clone();
        }
    }
    let mut out = items.to_vec();
    if index == out.len() {
        out.push(next);
    } else {
        out[index] = next;
    }
    Value::List(Arc::new(out))
}

fn dict_assoc(prev: &Value, key: &Key, next: Value) -> Value {
    let name = key.dict_name();
    let map = match prev.as_dict() {
        Some(map) => map,
        None => {
            // Coercion: whatever prev was, the write lands in a fresh dict.
            if next.is_null() {
                return Value::Dict(Arc::new(Dict::new()));
            }
            let mut out = Dict::with_capacity(1);
            out.insert(name.into_owned(), next);
            return Value::Dict(Arc::new(out));
        }
    };

    match map.get(name.as_ref()) {
        Some(existing) if is(existing, &next) => return prev.clone(),
        None if next.is_null() => return prev.clone(),
        _ => {}
    }

    let mut out = Dict::with_capacity(map.len() + 1);
    for (k, v) in map.iter() {
        // Omit-nil applies to carried-over entries too.
        if k == name.as_ref() || v.is_null() {
            continue;
        }
        out.insert(k.clone(), v.clone());
    }
    if !next.is_null() {
        out.insert(name.into_owned(), next);
    }
    Value::Dict(Arc::new(out))
}

/// Write `next` at a nested `path` in `prev`, reusing handles along the way.
///
/// An empty path replaces `prev` wholesale. When the value already at the
/// path [`is`] `next`, `prev` comes back untouched with no allocation at
/// any level. Otherwise the spine down to the path is rebuilt, with a
/// shallow re-check at each node that discards a rebuilt node which ended
/// up slot-for-slot identical to the one it replaces.
///
/// Missing intermediate nodes materialize as dicts, the same coercion
/// [`assoc`] applies.
///
/// # Examples
///
/// ```
/// use regraft::{assoc_in, is, path, Value};
/// use serde_json::json;
///
/// let doc = Value::from(json!({"a": {"b": 1}}));
/// let out = assoc_in(&doc, &path!["a", "b"], Value::Int(2)).unwrap();
/// assert_eq!(out, Value::from(json!({"a": {"b": 2}})));
///
/// let same = assoc_in(&doc, &path!["a", "b"], Value::Int(1)).unwrap();
/// assert!(is(&same, &doc));
/// ```
pub fn assoc_in(prev: &Value, path: &[Key], next: Value) -> RegraftResult<Value> {
    let (head, rest) = match path.split_first() {
        Some(split) => split,
        None => return Ok(next),
    };
    if is(get_in(prev, path), &next) {
        return Ok(prev.clone());
    }
    let child = assoc_in(get(prev, head), rest, next)?;
    let out = assoc(prev, head, child)?;
    if equal_by(&out, prev, is) {
        return Ok(prev.clone());
    }
    Ok(out)
}

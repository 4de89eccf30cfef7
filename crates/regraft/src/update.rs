//! The update operators: `put`, `patch`, `merge`, and their path-addressed
//! variants.
//!
//! Every operator runs the same recursive combination loop: reuse the old
//! node when the new one is the same value, otherwise rebuild it from a mix
//! of reused child handles and newly computed children. Rebuilt nodes that
//! turn out slot-for-slot identical to their predecessor are discarded in
//! favor of the original handle — a speculative copy is cheaper than
//! proving up front that no copy is needed.

use crate::assoc::{assoc, assoc_in};
use crate::equal::{equal_by, is};
use crate::error::RegraftResult;
use crate::get::{get, get_in};
use crate::value::{Dict, Key, Value, NULL};
use std::sync::Arc;

type Combiner = fn(&Value, &Value) -> Value;

/// Which keys a rebuilt dict keeps.
#[derive(Clone, Copy)]
enum DictRule {
    /// Keys of `next` only; keys present only in `prev` are dropped.
    Replace,
    /// Keys of both sides; `prev`-only keys carry over.
    Union,
}

fn combine_by(combine: Combiner, rule: DictRule, prev: &Value, next: &Value) -> Value {
    if is(prev, next) {
        return prev.clone();
    }
    match (prev, next) {
        (Value::List(prev_items), Value::List(next_items)) => {
            let out: Vec<Value> = next_items
                .iter()
                .enumerate()
                .map(|(i, n)| combine(prev_items.get(i).unwrap_or(&NULL), n))
                .collect();
            reuse_if_unchanged(prev, Value::List(Arc::new(out)))
        }
        (Value::Dict(prev_map), Value::Dict(next_map)) => {
            let mut out = Dict::with_capacity(next_map.len());
            if let DictRule::Union = rule {
                for (k, v) in prev_map.iter() {
                    if next_map.contains_key(k) || v.is_null() {
                        continue;
                    }
                    out.insert(k.clone(), v.clone());
                }
            }
            for (k, n) in next_map.iter() {
                let combined = combine(prev_map.get(k).unwrap_or(&NULL), n);
                if !combined.is_null() {
                    out.insert(k.clone(), combined);
                }
            }
            reuse_if_unchanged(prev, Value::Dict(Arc::new(out)))
        }
        // Mismatched kinds, or either side atomic: replace wholesale.
        _ => next.clone(),
    }
}

fn reuse_if_unchanged(prev: &Value, rebuilt: Value) -> Value {
    if equal_by(&rebuilt, prev, is) {
        prev.clone()
    } else {
        rebuilt
    }
}

/// Replace `prev` with `next`, reusing every subtree of `prev` that is
/// structurally equal to its counterpart in `next`.
///
/// Dicts take `next`'s key set; lists take `next`'s length; primitives and
/// atoms are `next`'s. The result is always [`crate::equal()`] to `next`
/// (minus `Null` dict entries, which are omitted), but shares as many
/// handles with `prev` as possible — when the two are fully equal, the
/// result *is* `prev`.
///
/// # Examples
///
/// ```
/// use regraft::{is, put, Value};
/// use serde_json::json;
///
/// let prev = Value::from(json!({"a": [1, 2], "b": 3}));
/// assert!(is(&put(&prev, &Value::from(json!({"a": [1, 2], "b": 3}))), &prev));
///
/// let next = put(&prev, &Value::from(json!({"a": [1, 2], "b": 4})));
/// assert_eq!(next, Value::from(json!({"a": [1, 2], "b": 4})));
/// ```
pub fn put(prev: &Value, next: &Value) -> Value {
    combine_by(put, DictRule::Replace, prev, next)
}

/// Combine two dicts one level deep: keys from both sides, overlapping
/// keys replaced via [`put`].
///
/// Non-dict inputs fall back to wholesale replacement. Nested dicts under
/// a shared key are not combined — they are [`put`], so a changed nested
/// dict takes `next`'s shape (with handle reuse where contents match).
/// `Null` values delete their key.
pub fn patch(prev: &Value, next: &Value) -> Value {
    combine_by(put, DictRule::Union, prev, next)
}

/// Recursive [`patch`]: overlapping dict-valued keys combine at every
/// depth.
///
/// # Examples
///
/// ```
/// use regraft::{merge, patch, Value};
/// use serde_json::json;
///
/// let prev = Value::from(json!({"a": {"x": 1, "y": 2}}));
/// let next = Value::from(json!({"a": {"x": 9}}));
///
/// assert_eq!(patch(&prev, &next), Value::from(json!({"a": {"x": 9}})));
/// assert_eq!(merge(&prev, &next), Value::from(json!({"a": {"x": 9, "y": 2}})));
/// ```
pub fn merge(prev: &Value, next: &Value) -> Value {
    combine_by(merge, DictRule::Union, prev, next)
}

/// Fold [`patch`] left to right over a sequence of operands.
///
/// Yields `Null` for an empty sequence and the sole operand for a
/// singleton one.
pub fn patch_all<'a, I>(operands: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    fold_with(patch, operands)
}

/// Fold [`merge`] left to right over a sequence of operands.
pub fn merge_all<'a, I>(operands: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    fold_with(merge, operands)
}

fn fold_with<'a, I>(combine: Combiner, operands: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut operands = operands.into_iter();
    let first = match operands.next() {
        Some(value) => value.clone(),
        None => Value::Null,
    };
    operands.fold(first, |acc, next| combine(&acc, next))
}

/// [`put`] the value under one key of `prev`.
///
/// Equivalent to a single-step [`put_in`]; errors on an out-of-range list
/// index.
pub fn put_key(prev: &Value, key: &Key, next: &Value) -> RegraftResult<Value> {
    assoc(prev, key, put(get(prev, key), next))
}

/// [`put`] the value at a nested path of `prev`.
///
/// One recursive combination pass against the current value at the path,
/// then one assoc pass to graft the result back in — never a repeated
/// equality sweep at every intermediate node.
///
/// # Examples
///
/// ```
/// use regraft::{is, path, put_in, Value};
/// use serde_json::json;
///
/// let doc = Value::from(json!({"a": {"b": 1}}));
/// let out = put_in(&doc, &path!["a", "b"], &Value::Int(2)).unwrap();
/// assert_eq!(out, Value::from(json!({"a": {"b": 2}})));
///
/// // Writing the value already there returns the original handle.
/// let same = put_in(&doc, &path!["a", "b"], &Value::Int(1)).unwrap();
/// assert!(is(&same, &doc));
/// ```
pub fn put_in(prev: &Value, path: &[Key], next: &Value) -> RegraftResult<Value> {
    assoc_in(prev, path, put(get_in(prev, path), next))
}

/// [`patch`] the dict at a nested path of `prev`.
pub fn patch_in(prev: &Value, path: &[Key], next: &Value) -> RegraftResult<Value> {
    assoc_in(prev, path, patch(get_in(prev, path), next))
}

/// [`merge`] the dict at a nested path of `prev`.
pub fn merge_in(prev: &Value, path: &[Key], next: &Value) -> RegraftResult<Value> {
    assoc_in(prev, path, merge(get_in(prev, path), next))
}

/// [`put_key`] the result of applying `next_fn` to the current value under
/// `key`.
///
/// # Examples
///
/// ```
/// use regraft::{put_key_with, Key, Value};
/// use serde_json::json;
///
/// let doc = Value::from(json!({"count": 1}));
/// let out = put_key_with(&doc, &Key::from("count"), |v| match v {
///     Value::Int(n) => Value::Int(n + 1),
///     _ => Value::Int(0),
/// })
/// .unwrap();
/// assert_eq!(out, Value::from(json!({"count": 2})));
/// ```
pub fn put_key_with<F>(prev: &Value, key: &Key, next_fn: F) -> RegraftResult<Value>
where
    F: FnOnce(&Value) -> Value,
{
    let next = next_fn(get(prev, key));
    put_key(prev, key, &next)
}

/// [`put_in`] the result of applying `next_fn` to the current value at
/// `path`.
pub fn put_in_with<F>(prev: &Value, path: &[Key], next_fn: F) -> RegraftResult<Value>
where
    F: FnOnce(&Value) -> Value,
{
    let next = next_fn(get_in(prev, path));
    put_in(prev, path, &next)
}

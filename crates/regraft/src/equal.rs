//! Identity and structural equality.
//!
//! [`is`] answers "same value, no allocation needed" and is what every
//! operator uses to decide reference reuse. [`equal_by`] runs the same
//! traversal with a pluggable comparator, which lets the operators check a
//! rebuilt node against its predecessor one level deep instead of
//! re-walking whole subtrees. [`equal`] closes the loop for full deep
//! equality.

use crate::value::Value;
use std::sync::Arc;

/// Identity equality.
///
/// Primitives compare by value, with `NaN` equal to `NaN` (so the relation
/// is reflexive for every value) and `0.0` equal to `-0.0`. Lists, dicts,
/// and atoms compare by handle identity only.
///
/// # Examples
///
/// ```
/// use regraft::{is, Value};
/// use serde_json::json;
///
/// assert!(is(&Value::Float(f64::NAN), &Value::Float(f64::NAN)));
///
/// let a = Value::from(json!([1, 2]));
/// let b = a.clone();
/// let c = Value::from(json!([1, 2]));
/// assert!(is(&a, &b)); // shared handle
/// assert!(!is(&a, &c)); // equal contents, distinct allocation
/// ```
pub fn is(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Value::Int(x), Value::Float(y)) | (Value::Float(y), Value::Int(x)) => {
            int_float_eq(*x, *y)
        }
        (Value::Str(x), Value::Str(y)) => Arc::ptr_eq(x, y) || x == y,
        (Value::List(x), Value::List(y)) => Arc::ptr_eq(x, y),
        (Value::Dict(x), Value::Dict(y)) => Arc::ptr_eq(x, y),
        (Value::Atom(x), Value::Atom(y)) => x.handle_eq(y),
        _ => false,
    }
}

#[inline]
fn int_float_eq(i: i64, f: f64) -> bool {
    i as f64 == f && f as i64 == i
}

/// Structural equality with a caller-supplied comparator for children.
///
/// Identity short-circuits first. Lists are equal when lengths match and
/// `compare` holds pairwise; dicts when the key sets match (checked before
/// any recursion into values, so added or removed keys bail out cheaply)
/// and `compare` holds for every key's value pair. Mismatched kinds and
/// atoms are never equal unless identical under [`is`].
pub fn equal_by<F>(a: &Value, b: &Value, compare: F) -> bool
where
    F: Fn(&Value, &Value) -> bool,
{
    if is(a, b) {
        return true;
    }
    match (a, b) {
        (Value::List(xs), Value::List(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys.iter()).all(|(x, y)| compare(x, y))
        }
        (Value::Dict(xs), Value::Dict(ys)) => {
            if xs.len() != ys.len() || !xs.keys().all(|k| ys.contains_key(k)) {
                return false;
            }
            xs.iter()
                .all(|(k, x)| ys.get(k).is_some_and(|y| compare(x, y)))
        }
        _ => false,
    }
}

/// Full deep structural equality.
///
/// # Examples
///
/// ```
/// use regraft::{equal, Value};
/// use serde_json::json;
///
/// let a = Value::from(json!({"a": [1, {"b": 2}]}));
/// let b = Value::from(json!({"a": [1, {"b": 2}]}));
/// assert!(equal(&a, &b));
/// ```
pub fn equal(a: &Value, b: &Value) -> bool {
    equal_by(a, b, equal)
}

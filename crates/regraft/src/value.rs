//! The value model: a closed tagged variant over primitives, lists, dicts,
//! and opaque atoms.
//!
//! Containers live behind [`Arc`] handles, so returning an unchanged subtree
//! is an O(1) handle clone and reference identity stays observable (see
//! [`crate::is`]). Dicts keep insertion order.

use indexmap::IndexMap;
use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Insertion-ordered key/value mapping backing dict nodes.
pub type Dict = IndexMap<String, Value>;

/// Ordered sequence backing list nodes.
pub type List = Vec<Value>;

/// An ordered sequence of keys addressing a nested location inside a value.
pub type Path = Vec<Key>;

/// The single absent marker, shared by null-safe readers.
pub(crate) static NULL: Value = Value::Null;

/// A tree-shaped value: primitive, list, dict, or opaque atom.
///
/// `Null` doubles as the absent marker: a dict built by this crate never
/// stores a `Null` entry, and reading a missing key yields `Null`.
///
/// # Examples
///
/// ```
/// use regraft::Value;
/// use serde_json::json;
///
/// let v = Value::from(json!({"name": "ada", "tags": ["admin"]}));
/// assert!(v.is_dict());
/// ```
#[derive(Clone, Debug)]
pub enum Value {
    /// The absent marker.
    Null,
    /// Boolean primitive.
    Bool(bool),
    /// Integer primitive.
    Int(i64),
    /// Floating-point primitive. `NaN` is a legal, self-equal value.
    Float(f64),
    /// String primitive. Shared, but compared by content.
    Str(Arc<str>),
    /// Ordered sequence. Compared by handle under [`crate::is`].
    List(Arc<List>),
    /// Plain key/value mapping. Compared by handle under [`crate::is`].
    Dict(Arc<Dict>),
    /// Opaque object: compared by handle identity only, never introspected,
    /// always replaced wholesale.
    Atom(Atom),
}

/// The four kinds a value classifies into.
///
/// Every engine component dispatches on this tag instead of re-deriving the
/// classification ad hoc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Null, booleans, numbers, and strings.
    Primitive,
    /// Ordered sequences.
    List,
    /// Plain key/value mappings.
    Dict,
    /// Everything else; opaque to the engine.
    Atom,
}

impl Value {
    /// Classify this value.
    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_) => {
                Kind::Primitive
            }
            Value::List(_) => Kind::List,
            Value::Dict(_) => Kind::Dict,
            Value::Atom(_) => Kind::Atom,
        }
    }

    /// Returns true for the absent marker.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for null, booleans, numbers, and strings.
    #[inline]
    pub fn is_primitive(&self) -> bool {
        self.kind() == Kind::Primitive
    }

    /// Returns true for list nodes.
    #[inline]
    pub fn is_list(&self) -> bool {
        self.kind() == Kind::List
    }

    /// Returns true for dict nodes.
    #[inline]
    pub fn is_dict(&self) -> bool {
        self.kind() == Kind::Dict
    }

    /// Returns true for opaque atoms.
    #[inline]
    pub fn is_atom(&self) -> bool {
        self.kind() == Kind::Atom
    }

    /// Borrow the items of a list node.
    #[inline]
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the entries of a dict node.
    #[inline]
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(map) => Some(map),
            _ => None,
        }
    }

    /// Build a list node from an iterator of values.
    pub fn list<I>(items: I) -> Value
    where
        I: IntoIterator<Item = Value>,
    {
        Value::List(Arc::new(items.into_iter().collect()))
    }

    /// Build a dict node from an iterator of entries.
    pub fn dict<K, I>(entries: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Dict(Arc::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    /// Wrap an arbitrary Rust value as an opaque atom.
    pub fn atom<T: Any + Send + Sync>(value: T) -> Value {
        Value::Atom(Atom::new(value))
    }

    /// Convert to a `serde_json::Value`.
    ///
    /// Returns `None` when the tree contains an atom or a non-finite float,
    /// neither of which JSON can represent.
    pub fn to_json(&self) -> Option<serde_json::Value> {
        Some(match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::Number((*i).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)?.into(),
            Value::Str(s) => serde_json::Value::String(s.to_string()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect::<Option<_>>()?)
            }
            Value::Dict(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| Some((k.clone(), v.to_json()?)))
                    .collect::<Option<_>>()?,
            ),
            Value::Atom(_) => return None,
        })
    }
}

/// Deep structural equality (see [`crate::equal`]), so `assert_eq!` compares
/// by value and the relation stays reflexive for `NaN`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        crate::equal::equal(self, other)
    }
}

impl Eq for Value {}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Arc::from(s))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(Arc::new(items))
    }
}

impl From<Dict> for Value {
    fn from(map: Dict) -> Self {
        Value::Dict(Arc::new(map))
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(Arc::from(s)),
            serde_json::Value::Array(items) => {
                Value::List(Arc::new(items.into_iter().map(Value::from).collect()))
            }
            serde_json::Value::Object(map) => Value::Dict(Arc::new(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            )),
        }
    }
}

/// An opaque object handle.
///
/// Atoms carry values the engine knows nothing about. They compare by
/// handle identity only and are replaced wholesale by every operator.
#[derive(Clone)]
pub struct Atom(Arc<dyn Any + Send + Sync>);

impl Atom {
    /// Wrap a Rust value as an atom.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Atom(Arc::new(value))
    }

    /// Borrow the wrapped value if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }

    /// Handle identity: true iff both atoms wrap the same allocation.
    #[inline]
    pub fn handle_eq(&self, other: &Atom) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Atom(..)")
    }
}

/// A single step addressing into a value: a list position or a dict field.
///
/// Keys coerce across container kinds the way the readers expect: an
/// `Index` addressed into a dict becomes its decimal string, and a `Name`
/// addressed into a list parses as a position (see [`Key::list_index`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// List position.
    Index(usize),
    /// Dict field.
    Name(Arc<str>),
}

impl Key {
    /// The list position this key addresses, if any.
    ///
    /// Names consisting of decimal digits parse as positions, mirroring how
    /// string path steps address arrays in pointer-style lookups.
    pub fn list_index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(s) => s.parse().ok(),
        }
    }

    /// The dict field this key addresses; indices coerce to decimal strings.
    pub fn dict_name(&self) -> Cow<'_, str> {
        match self {
            Key::Name(s) => Cow::Borrowed(s.as_ref()),
            Key::Index(i) => Cow::Owned(i.to_string()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(s) => f.write_str(s),
        }
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Index(i)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Name(Arc::from(s))
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Name(Arc::from(s))
    }
}

/// Build a [`Path`] from a sequence of key-convertible steps.
///
/// # Examples
///
/// ```
/// use regraft::{path, Key};
///
/// let p = path!["users", 0usize, "name"];
/// assert_eq!(p.len(), 3);
/// assert_eq!(p[1], Key::Index(0));
///
/// let root = path![];
/// assert!(root.is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::new()
    };
    ($($step:expr),+ $(,)?) => {
        vec![$($crate::Key::from($step)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_classification_is_exclusive() {
        let cases = [
            (Value::Null, Kind::Primitive),
            (Value::Bool(true), Kind::Primitive),
            (Value::Int(1), Kind::Primitive),
            (Value::Float(1.5), Kind::Primitive),
            (Value::from("s"), Kind::Primitive),
            (Value::list([]), Kind::List),
            (Value::dict([("a", Value::Int(1))]), Kind::Dict),
            (Value::atom(std::time::Duration::from_secs(1)), Kind::Atom),
        ];
        for (value, kind) in cases {
            assert_eq!(value.kind(), kind, "{value:?}");
        }
    }

    #[test]
    fn test_from_json_preserves_structure() {
        let v = Value::from(json!({"a": [1, true, null], "b": {"c": "d"}}));
        let map = v.as_dict().unwrap();
        assert_eq!(map.len(), 2);
        let items = map["a"].as_list().unwrap();
        assert_eq!(items[0], Value::Int(1));
        assert_eq!(items[1], Value::Bool(true));
        assert!(items[2].is_null());
    }

    #[test]
    fn test_from_json_keeps_key_order() {
        let v = Value::from(json!({"z": 1, "a": 2, "m": 3}));
        let keys: Vec<&str> = v.as_dict().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_to_json_roundtrip() {
        let source = json!({"a": [1, 2.5, "x"], "b": null});
        let v = Value::from(source.clone());
        assert_eq!(v.to_json(), Some(source));
    }

    #[test]
    fn test_to_json_rejects_atoms() {
        let v = Value::list([Value::Int(1), Value::atom("opaque")]);
        assert_eq!(v.to_json(), None);
    }

    #[test]
    fn test_to_json_rejects_non_finite_floats() {
        assert_eq!(Value::Float(f64::NAN).to_json(), None);
        assert_eq!(Value::Float(f64::INFINITY).to_json(), None);
    }

    #[test]
    fn test_key_list_index() {
        assert_eq!(Key::from(3usize).list_index(), Some(3));
        assert_eq!(Key::from("3").list_index(), Some(3));
        assert_eq!(Key::from("x").list_index(), None);
        assert_eq!(Key::from("-1").list_index(), None);
    }

    #[test]
    fn test_key_dict_name() {
        assert_eq!(Key::from("a").dict_name(), "a");
        assert_eq!(Key::from(7usize).dict_name(), "7");
    }

    #[test]
    fn test_atom_identity() {
        let a = Atom::new(42i64);
        let b = a.clone();
        let c = Atom::new(42i64);
        assert!(a.handle_eq(&b));
        assert!(!a.handle_eq(&c));
        assert_eq!(a.downcast_ref::<i64>(), Some(&42));
        assert_eq!(a.downcast_ref::<String>(), None);
    }

    #[test]
    fn test_path_macro() {
        let p = path!["users", 0usize, "name"];
        assert_eq!(p[0], Key::from("users"));
        assert_eq!(p[1], Key::Index(0));
        assert_eq!(p[2], Key::from("name"));
        assert!(path![].is_empty());
    }
}

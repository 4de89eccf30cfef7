//! Structural updates for immutable JSON-like trees.
//!
//! regraft transforms tree-shaped values — primitives, lists, and dicts —
//! without mutating them, and returns results that reuse every subtree of
//! the previous value that did not change. A write that changes nothing
//! returns the previous value's own handle, so downstream consumers can
//! detect "nothing happened here" with a cheap identity check ([`is`])
//! instead of a deep comparison.
//!
//! Three operators cover replacement and combination:
//!
//! - [`put`] — replace, reusing unchanged subtrees;
//! - [`patch`] — combine two dicts one level deep;
//! - [`merge`] — combine dicts recursively at every depth.
//!
//! Each has a path-addressed variant ([`put_in`], [`patch_in`],
//! [`merge_in`]), and [`insert_at`]/[`remove_at`] cover positional list
//! edits. Dicts built by these operators never store `Null`: writing `Null`
//! deletes the key.
//!
//! # Example
//!
//! ```
//! use regraft::{is, merge, path, put_in, Value};
//! use serde_json::json;
//!
//! let state = Value::from(json!({"user": {"name": "ada", "tags": ["admin"]}}));
//!
//! // Writes that change nothing return the original handle.
//! let same = put_in(&state, &path!["user", "name"], &Value::from("ada")).unwrap();
//! assert!(is(&same, &state));
//!
//! // Deep combination rebuilds only the spine that actually changed.
//! let next = merge(&state, &Value::from(json!({"user": {"name": "grace"}})));
//! assert_eq!(
//!     next,
//!     Value::from(json!({"user": {"name": "grace", "tags": ["admin"]}}))
//! );
//! let tags = path!["user", "tags"];
//! assert!(is(regraft::get_in(&next, &tags), regraft::get_in(&state, &tags)));
//! ```
//!
//! All operations are pure with respect to their arguments, but results may
//! alias the inputs: treat a value handed to an operator as superseded by
//! the result.

pub mod assoc;
pub mod clone;
pub mod equal;
pub mod error;
pub mod get;
pub mod list;
pub mod update;
pub mod value;

// Re-exports for convenience
pub use assoc::{assoc, assoc_in};
pub use clone::deep_clone;
pub use equal::{equal, equal_by, is};
pub use error::{RegraftError, RegraftResult};
pub use get::{get, get_in, scan};
pub use list::{insert_at, remove_at};
pub use update::{
    merge, merge_all, merge_in, patch, patch_all, patch_in, put, put_in, put_in_with, put_key,
    put_key_with,
};
pub use value::{Atom, Dict, Key, Kind, List, Path, Value};

//! Key enumeration over containers.
//!
//! Mapping keys and record field names are listed as path strings. Keys containing a `.`
//! are escaped as `\.`, so a returned path resolves back to the child it names. The one
//! exception is a key ending in `\` that has children: the backslash meets the following
//! separator and reads back as an escaped dot. [`extend`](crate::extend) walks unescaped
//! segments and is not affected.
//!
//! Order is unspecified.

use crate::{
    access::{Node, read_segment},
    constants::SEPARATOR,
    path::{Path, join_key},
    record::Record,
    value::Value,
};

/// Lists the immediate children of `container`.
///
/// Each key is prefixed with `prefix.` when a non-empty prefix is given. Scalars, sequences
/// and null have no children.
///
/// ```
/// use dotpath::{Map, Value, keys};
///
/// let data = Value::Map(Map::new().with("a", 1));
/// assert_eq!(keys(&data, None), vec!["a"]);
/// assert_eq!(keys(&data, Some("root")), vec!["root.a"]);
/// ```
pub fn keys<'a>(container: impl Into<Node<'a>>, prefix: Option<&str>) -> Vec<String> {
    child_keys(&container.into())
        .iter()
        .map(|key| join_key(prefix, key))
        .collect()
}

/// Lists every path below `container`, ancestors and leaves alike, in pre-order.
pub fn keys_recursive<'a>(container: impl Into<Node<'a>>, prefix: Option<&str>) -> Vec<String> {
    let mut paths = Vec::new();
    walk(&container.into(), &Path::new(), false, &mut paths);
    paths.iter().map(|path| render(prefix, path)).collect()
}

/// Lists only the paths below `container` that have no children of their own.
///
/// Null children, sequences, scalars and empty containers are leaves.
pub fn keys_recursive_leaves<'a>(
    container: impl Into<Node<'a>>,
    prefix: Option<&str>,
) -> Vec<String> {
    leaf_paths(container)
        .iter()
        .map(|path| render(prefix, path))
        .collect()
}

/// Leaf paths as unescaped segment lists.
pub(crate) fn leaf_paths<'a>(container: impl Into<Node<'a>>) -> Vec<Path> {
    let mut paths = Vec::new();
    walk(&container.into(), &Path::new(), true, &mut paths);
    paths
}

fn walk(node: &Node<'_>, at: &Path, leaves_only: bool, out: &mut Vec<Path>) {
    for key in child_keys(node) {
        let path = at.child(key.as_str());
        let before = out.len();

        if !leaves_only {
            out.push(path.clone());
        }
        // Keys come from the container itself, so lookups only fail on null
        if let Ok(Some(child)) = read_segment(node.reborrow(), &key) {
            walk(&child, &path, leaves_only, out);
        }
        if leaves_only && out.len() == before {
            out.push(path);
        }
    }
}

fn child_keys(node: &Node<'_>) -> Vec<String> {
    match node {
        Node::Map(map) => map.keys().cloned().collect(),
        Node::Record(record) => field_keys(*record),
        Node::Value(value) => value_keys(value),
        Node::Owned(value) => value_keys(value),
    }
}

fn value_keys(value: &Value) -> Vec<String> {
    match value {
        Value::Map(map) => map.keys().cloned().collect(),
        Value::Record(record) => field_keys(record.as_ref()),
        _ => Vec::new(),
    }
}

fn field_keys(record: &dyn Record) -> Vec<String> {
    record.field_names().iter().map(|name| name.to_string()).collect()
}

fn render(prefix: Option<&str>, path: &Path) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}{SEPARATOR}{path}"),
        _ => path.to_string(),
    }
}

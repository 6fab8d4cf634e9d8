//! Default-aware deep merge.

use tracing::trace;

use crate::{
    Result,
    access::{Node, Slot},
    keys::leaf_paths,
    resolve::{resolve, set_path},
};

/// Copies every meaningful leaf of `from` into `to` at the same path.
///
/// Leaves holding a default value (see [`Value::is_meaningful`](crate::Value::is_meaningful))
/// are skipped, so `to` keeps its own values wherever `from` has nothing to say. Missing
/// intermediate mappings in `to` are created as needed.
///
/// ```
/// use dotpath::{Map, Value, extend, get};
///
/// let mut to = Value::Map(Map::new().with("name", "to").with("port", 80));
/// let from = Value::Map(Map::new().with("name", "").with("port", 8080).with("tls", true));
///
/// extend(&mut to, &from)?;
/// assert_eq!(get(&to, ["name"])?, Some(Value::from("to")));
/// assert_eq!(get(&to, ["port"])?, Some(Value::Int(8080)));
/// assert_eq!(get(&to, ["tls"])?, Some(Value::Bool(true)));
/// # Ok::<(), dotpath::Error>(())
/// ```
///
/// # Errors
/// The first failed read or write aborts the merge. Writes made before it stay in place.
pub fn extend<'a, 'b>(to: impl Into<Slot<'a>>, from: impl Into<Node<'b>>) -> Result<()> {
    let mut target = to.into();
    let source = from.into();

    for path in leaf_paths(source.reborrow()) {
        let Some(node) = resolve(source.reborrow(), &path)? else {
            trace!(path = %path, "Skipping null leaf");
            continue;
        };

        let value = node.into_value();
        if !value.is_meaningful() {
            trace!(path = %path, "Skipping default value");
            continue;
        }

        set_path(target.reborrow(), &path, value)?;
    }

    Ok(())
}

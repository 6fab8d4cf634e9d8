//! Path resolution: reads with candidate fallback, coercing getters, and writes that create
//! missing intermediate mappings.
//!
//! # Reading
//!
//! [`get`] takes any number of candidate paths and returns the first one that resolves to a
//! non-null value. A candidate stops at the first segment that resolves to null. Errors
//! from failed candidates are only reported when no candidate succeeds.
//!
//! The typed getters run the same loop but also require the value to coerce to the target
//! type; a value that does not coerce counts as a miss. They never fail and return the
//! zero value when every candidate misses.
//!
//! ```
//! use dotpath::{Map, Value, get_int64, get_string};
//!
//! let data = Value::Map(Map::new().with("a", Map::new()).with("b", "x").with("n", 6.9));
//!
//! // "a" resolves to a mapping, which is not a string, so "b" is tried next
//! assert_eq!(get_string(&data, ["a", "b"]), "x");
//! assert_eq!(get_int64(&data, ["n"]), 6);
//! assert_eq!(get_int64(&data, ["missing"]), 0);
//! ```
//!
//! # Writing
//!
//! [`set`] walks every segment but the last. Where a step is absent or null, an empty
//! [`Map`] is written there and the walk continues through it, so a write never fails just
//! because intermediate containers are missing. Only mappings are created this way.
//!
//! ```
//! use dotpath::{Map, Value, get, set};
//!
//! let mut data = Value::Map(Map::new());
//! set(&mut data, "a.b.c", 1)?;
//! assert_eq!(get(&data, ["a.b.c"])?, Some(Value::Int(1)));
//! # Ok::<(), dotpath::Error>(())
//! ```

use tracing::{debug, trace};

use crate::{
    Result,
    access::{AccessError, Node, Slot, descend_mut, read_segment, write_segment},
    coerce::{coerce_float64, coerce_int64, coerce_string},
    map::Map,
    path::{Path, PathError},
    value::Value,
};

/// Folds [`read_segment`] over every segment of `path`.
///
/// Returns `Ok(None)` as soon as a step resolves to null.
pub(crate) fn resolve<'a>(root: Node<'a>, path: &Path) -> std::result::Result<Option<Node<'a>>, AccessError> {
    let mut cursor = root;
    for segment in path.segments() {
        match read_segment(cursor, segment)? {
            Some(next) => cursor = next,
            None => return Ok(None),
        }
    }

    if cursor.is_null() {
        Ok(None)
    } else {
        Ok(Some(cursor))
    }
}

/// Returns the value at the first candidate path that resolves to a non-null value.
///
/// # Errors
/// When no candidate resolves, returns the error from the last candidate that failed with
/// one (for example [`AccessError::FieldNotFound`] on a record). Without such an error the
/// result is `Ok(None)`.
pub fn get<'a, I, S>(container: impl Into<Node<'a>>, candidates: I) -> Result<Option<Value>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let root = container.into();
    let mut last_error = None;

    for candidate in candidates {
        let candidate = candidate.as_ref();
        match resolve(root.reborrow(), &Path::split(candidate)) {
            Ok(Some(node)) => return Ok(Some(node.into_value())),
            Ok(None) => trace!(path = candidate, "Candidate resolved to null"),
            Err(err) => {
                debug!(path = candidate, error = %err, "Candidate failed, trying next");
                last_error = Some(err);
            }
        }
    }

    match last_error {
        Some(err) => Err(err.into()),
        None => Ok(None),
    }
}

/// Candidate loop shared by the typed getters.
fn get_coerced<'a, T, I, S>(
    container: impl Into<Node<'a>>,
    candidates: I,
    coerce: impl Fn(&Value) -> Option<T>,
) -> Option<T>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let root = container.into();

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let Ok(Some(node)) = resolve(root.reborrow(), &Path::split(candidate)) else {
            continue;
        };
        match node.as_value().and_then(&coerce) {
            Some(coerced) => return Some(coerced),
            None => trace!(path = candidate, "Resolved value is not coercible, trying next"),
        }
    }

    None
}

/// Like [`get`], but keeps searching until a value coerces to a string.
///
/// Empty strings count as absent. Returns `""` when nothing matches.
pub fn get_string<'a, I, S>(container: impl Into<Node<'a>>, candidates: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    get_coerced(container, candidates, coerce_string).unwrap_or_default()
}

/// Like [`get`], but keeps searching until a value coerces to an `i64`.
///
/// Returns `0` when nothing matches.
pub fn get_int64<'a, I, S>(container: impl Into<Node<'a>>, candidates: I) -> i64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    get_coerced(container, candidates, coerce_int64).unwrap_or_default()
}

/// Like [`get`], but keeps searching until a value coerces to an `f64`.
///
/// Returns `0.0` when nothing matches.
pub fn get_float64<'a, I, S>(container: impl Into<Node<'a>>, candidates: I) -> f64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    get_coerced(container, candidates, coerce_float64).unwrap_or_default()
}

/// Writes `value` at `path`, creating missing intermediate mappings.
///
/// The path is trimmed and validated first.
///
/// # Errors
/// - [`AccessError::NilTarget`] when the container is null.
/// - [`PathError::InvalidPath`] when the path starts or ends with an unescaped `.`.
/// - Any [`AccessError`] raised by the walk or the final write. Mappings created before the
///   failure stay in place.
pub fn set<'a>(container: impl Into<Slot<'a>>, path: &str, value: impl Into<Value>) -> Result<()> {
    let target = container.into();
    if target.is_null() {
        return Err(AccessError::NilTarget.into());
    }

    let path = Path::parse(path)?;
    set_path(target, &path, value)
}

/// Writes `value` at an already-split `path`.
///
/// Same walk as [`set`] without trimming or validation, so segments are used verbatim.
///
/// # Errors
/// As [`set`]; a path with no segments is an [`PathError::InvalidPath`].
pub fn set_path<'a>(
    container: impl Into<Slot<'a>>,
    path: &Path,
    value: impl Into<Value>,
) -> Result<()> {
    let mut cursor = container.into();
    if cursor.is_null() {
        return Err(AccessError::NilTarget.into());
    }

    let Some((last, parents)) = path.split_last() else {
        return Err(PathError::InvalidPath {
            path: path.to_string(),
            reason: "path has no segments".to_string(),
        }
        .into());
    };

    for segment in parents {
        if read_segment(cursor.as_node(), segment)?.is_none() {
            debug!(path = %path, segment = segment.as_str(), "Creating intermediate map");
            write_segment(&mut cursor, segment, Value::Map(Map::new()))?;
        }
        cursor = descend_mut(cursor, segment)?;
    }

    write_segment(&mut cursor, last, value.into())?;
    Ok(())
}

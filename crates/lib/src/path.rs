//! Path types for dot-delimited access to nested values.
//!
//! A path string is split on `.` into an ordered list of segments. A literal dot inside a
//! segment is written `\.`; a backslash followed by anything else is kept as-is.
//!
//! # Parsing modes
//!
//! - [`Path::parse`] is strict and used for writes: it trims surrounding whitespace and
//!   rejects paths that start or end with an unescaped `.`.
//! - [`Path::split`] is lenient and used for reads: it never fails, so a leading or
//!   trailing dot simply produces a blank segment.
//!
//! Segments are never normalized away. The empty path string addresses the empty key.
//!
//! # Usage
//!
//! ```rust
//! use dotpath::path::Path;
//!
//! let path = Path::parse("server.tls\\.v2.cert")?;
//! let segments: Vec<&str> = path.segments().collect();
//! assert_eq!(segments, vec!["server", "tls.v2", "cert"]);
//!
//! // Rendering escapes dots again
//! assert_eq!(path.to_string(), "server.tls\\.v2.cert");
//!
//! assert!(Path::parse("server.").is_err());
//! # Ok::<(), dotpath::PathError>(())
//! ```

use std::{borrow::Cow, fmt, str::FromStr};

use thiserror::Error;

use crate::constants::{ESCAPE, SEPARATOR};

/// Error type for path validation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// The path starts or ends with an unescaped separator.
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },
}

impl PathError {
    /// Get the offending path string.
    pub fn path(&self) -> &str {
        match self {
            PathError::InvalidPath { path, .. } => path,
        }
    }
}

// Conversion from PathError to the main Error type
impl From<PathError> for crate::Error {
    fn from(err: PathError) -> Self {
        crate::Error::Path(err)
    }
}

/// An owned, split path.
///
/// Holds the unescaped segments, so `segments()` yields exactly the keys or field names that
/// are looked up. `Display` renders the escaped string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Creates a new path with no segments (the root).
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Parses a path for writing.
    ///
    /// Surrounding whitespace is trimmed first.
    ///
    /// # Errors
    /// Returns [`PathError::InvalidPath`] when the trimmed path starts or ends with an
    /// unescaped `.`.
    pub fn parse(input: &str) -> Result<Self, PathError> {
        let trimmed = input.trim();

        if trimmed.starts_with(SEPARATOR) {
            return Err(PathError::InvalidPath {
                path: input.to_string(),
                reason: "path may not start with '.'".to_string(),
            });
        }

        let (segments, trailing_separator) = scan(trimmed);
        if trailing_separator {
            return Err(PathError::InvalidPath {
                path: input.to_string(),
                reason: "path may not end in '.'".to_string(),
            });
        }

        Ok(Self { segments })
    }

    /// Splits a path for reading. Never fails and does not trim.
    pub fn split(input: &str) -> Self {
        let (segments, _) = scan(input);
        Self { segments }
    }

    /// Builds a path from already-unescaped segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Appends a literal segment. Dots in `segment` are part of the key.
    pub fn push(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Returns a new path with `segment` appended, leaving `self` untouched.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        self.clone().push(segment)
    }

    /// Returns an iterator over the unescaped segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Returns the segments as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.segments
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the parent path, or `None` if this path has at most one segment.
    pub fn parent(&self) -> Option<Path> {
        match self.segments.split_last() {
            Some((_, rest)) if !rest.is_empty() => Some(Path {
                segments: rest.to_vec(),
            }),
            _ => None,
        }
    }

    /// Returns the last segment, or `None` if empty.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Splits off the last segment from the segments leading up to it.
    pub fn split_last(&self) -> Option<(&str, &[String])> {
        self.segments
            .split_last()
            .map(|(last, parents)| (last.as_str(), parents))
    }
}

/// Splits `input` into unescaped segments.
///
/// The flag reports whether the final character consumed was an unescaped separator.
fn scan(input: &str) -> (Vec<String>, bool) {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut trailing_separator = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        trailing_separator = false;
        if c == ESCAPE && chars.peek() == Some(&SEPARATOR) {
            chars.next();
            current.push(SEPARATOR);
        } else if c == SEPARATOR {
            segments.push(std::mem::take(&mut current));
            trailing_separator = true;
        } else {
            current.push(c);
        }
    }
    segments.push(current);

    (segments, trailing_separator)
}

/// Escapes dots in a single key so it survives a round trip through [`Path::split`].
///
/// Only dots are escaped. A key ending in `\\` cannot be followed by a separator in string
/// form, since `\\.` always reads as an escaped dot; use [`Path::from_segments`] for such keys.
///
/// ```rust
/// # use dotpath::path::escape_segment;
/// assert_eq!(escape_segment("plain"), "plain");
/// assert_eq!(escape_segment("t.b"), "t\\.b");
/// ```
pub fn escape_segment(segment: &str) -> Cow<'_, str> {
    if segment.contains(SEPARATOR) {
        Cow::Owned(segment.replace(SEPARATOR, "\\."))
    } else {
        Cow::Borrowed(segment)
    }
}

/// Joins an escaped `prefix` and a raw child key into a path string.
pub(crate) fn join_key(prefix: Option<&str>, key: &str) -> String {
    let key = escape_segment(key);
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}{SEPARATOR}{key}"),
        _ => key.into_owned(),
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Path {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{}", escape_segment(segment))?;
        }
        Ok(())
    }
}

/// Constructs a [`Path`] from literal segments.
///
/// Each argument is one segment, so dots inside an argument are part of the key and need
/// no escaping.
///
/// # Examples
///
/// ```rust
/// # use dotpath::path;
/// let path = path!("user", "profile.v2", "name");
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.to_string(), "user.profile\\.v2.name");
///
/// let root = path!();
/// assert!(root.is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::path::Path::new()
    };

    ($($segment:expr),+ $(,)?) => {
        $crate::path::Path::from_segments([$(::std::string::ToString::to_string(&$segment)),+])
    };
}

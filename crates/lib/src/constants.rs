//! Constants used throughout the dotpath library.
//!
//! This module provides central definitions for the path syntax characters.

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Escape character. Only `\.` is an escape sequence; any other backslash is literal.
pub const ESCAPE: char = '\\';

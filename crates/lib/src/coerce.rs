//! Best-effort conversion of dynamic values into `i64`, `f64` and `String`.
//!
//! Every conversion reports failure as `None`; nothing here panics or errors. The
//! conversions are lossy where noted: floats truncate toward zero on the way to `i64`.

use crate::value::Value;

/// Converts integers and finite floats to `i64`.
///
/// Floats truncate toward zero and must fit the `i64` range. Text, booleans and containers
/// are not converted.
pub fn coerce_int64(value: &Value) -> Option<i64> {
    match value {
        Value::Int(n) => Some(*n),
        Value::Float(f) if f.is_finite() => {
            let truncated = f.trunc();
            // i64::MAX is not representable as f64; the bound is exclusive
            if truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
                Some(truncated as i64)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Converts integers, floats and decimal text to `f64`.
///
/// Text is trimmed before parsing and must produce a finite number, so `"inf"` and `"NaN"`
/// are rejected.
pub fn coerce_float64(value: &Value) -> Option<f64> {
    match value {
        Value::Int(n) => Some(*n as f64),
        Value::Float(f) => Some(*f),
        Value::Text(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Converts a value to its string form.
///
/// Non-empty text is returned as-is. Empty text counts as absent and yields `None`, which
/// lets the typed getters move on to the next candidate. Numbers format in plain decimal
/// notation and booleans as `"true"`/`"false"`.
pub fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::Text(s) if !s.is_empty() => Some(s.clone()),
        Value::Int(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => coerce_float64(other).map(|f| f.to_string()),
    }
}

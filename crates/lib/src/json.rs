//! Bridge between `serde_json` trees and [`Value`].
//!
//! Decoded JSON is the most common source of runtime-shaped data, so this module lets a
//! `serde_json::Value` or a raw JSON string be fed straight into the path operations.
//! Numbers that fit an `i64` become [`Value::Int`]; every other number becomes
//! [`Value::Float`].

use serde_json::Value as JsonValue;

use crate::{Result, map::Map, value::Value};

impl Value {
    /// Parses a JSON document.
    ///
    /// ```
    /// use dotpath::{Value, get_int64};
    ///
    /// let data = Value::from_json_str(r#"{"server": {"port": 8080}}"#)?;
    /// assert_eq!(get_int64(&data, ["server.port"]), 8080);
    /// # Ok::<(), dotpath::Error>(())
    /// ```
    ///
    /// # Errors
    /// Returns [`crate::Error::Serialize`] if the input is not valid JSON.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let json: JsonValue = serde_json::from_str(input)?;
        Ok(Value::from(json))
    }

    /// Renders the value as compact JSON. Records become objects of their fields.
    ///
    /// # Errors
    /// Returns [`crate::Error::Serialize`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// Conversion from serde_json errors to the main Error type
impl From<serde_json::Error> for crate::Error {
    fn from(err: serde_json::Error) -> Self {
        crate::Error::Serialize(Box::new(err))
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            JsonValue::String(s) => Value::Text(s),
            JsonValue::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(object) => Value::Map(
                object
                    .into_iter()
                    .map(|(key, item)| (key, Value::from(item)))
                    .collect::<Map>(),
            ),
        }
    }
}

impl From<&Value> for JsonValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Int(i) => JsonValue::from(*i),
            // Non-finite floats have no JSON form
            Value::Float(f) => serde_json::Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number),
            Value::Text(s) => JsonValue::String(s.clone()),
            Value::List(items) => JsonValue::Array(items.iter().map(JsonValue::from).collect()),
            Value::Map(map) => JsonValue::Object(
                map.iter()
                    .map(|(key, item)| (key.clone(), JsonValue::from(item)))
                    .collect(),
            ),
            Value::Record(record) => JsonValue::Object(
                record
                    .field_names()
                    .iter()
                    .map(|name| {
                        let field = record.read_field(name).unwrap_or_default();
                        (name.to_string(), JsonValue::from(&field))
                    })
                    .collect(),
            ),
        }
    }
}

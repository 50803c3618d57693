// src/payload.rs
use bson::{Bson, Document};
use serde_json::{Map, Number, Value};

use crate::error::SendError;

/// How the raw payload text is turned into BSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PayloadMode {
    /// Plain JSON. Keys like `$oid` stay ordinary field names.
    #[default]
    Plain,
    /// MongoDB Extended JSON. `{"$date": ...}`, `{"$oid": ...}` become native BSON.
    ExtendedJson,
}

/// Parses the metrics payload into the document that will be inserted.
///
/// The top-level value must be a JSON object. Key order is preserved.
///
/// # Errors
///
/// - [`SendError::MissingPayload`] if no payload was given
/// - [`SendError::InvalidJson`] if the text is not JSON
/// - [`SendError::NotADocument`] if the JSON is not an object
/// - [`SendError::InvalidExtendedJson`] if extended JSON cannot be converted
pub fn parse_payload(raw: Option<&str>, mode: PayloadMode) -> Result<Document, SendError> {
    let raw = raw.ok_or(SendError::MissingPayload)?;
    let value: Value = serde_json::from_str(raw)?;

    let Value::Object(map) = value else {
        return Err(SendError::NotADocument(json_kind(&value)));
    };

    match mode {
        PayloadMode::Plain => Ok(plain_document(map)),
        PayloadMode::ExtendedJson => Ok(Document::try_from(map)?),
    }
}

// Walks the JSON tree without interpreting `$`-prefixed keys.
fn plain_document(map: Map<String, Value>) -> Document {
    map.into_iter().map(|(k, v)| (k, plain_bson(v))).collect()
}

fn plain_bson(value: Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(b),
        Value::Number(n) => number_bson(&n),
        Value::String(s) => Bson::String(s),
        Value::Array(items) => Bson::Array(items.into_iter().map(plain_bson).collect()),
        Value::Object(map) => Bson::Document(plain_document(map)),
    }
}

/// Smallest integer type that holds the value, else a double.
fn number_bson(n: &Number) -> Bson {
    match n.as_i64() {
        Some(i) => i32::try_from(i).map_or(Bson::Int64(i), Bson::Int32),
        None => Bson::Double(n.as_f64().unwrap_or(f64::NAN)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

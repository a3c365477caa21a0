//! JSON text pretty-printing.

use crate::Error;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

/// Returned for empty input.
pub const EMPTY_JSON: &str = "Empty/Null json content";
/// Returned for anything that isn't a JSON object or array.
pub const INVALID_JSON: &str = "Invalid json content";

const JSON_INDENT: &[u8] = b"    ";

/// Pretty-prints a JSON object or array with a four-space indent, keeping key order.
///
/// Never fails: empty input yields [`EMPTY_JSON`], anything else that can't be
/// parsed as an object or array yields [`INVALID_JSON`].
#[must_use]
pub fn format_json(json: &str) -> String {
    if json.is_empty() {
        return EMPTY_JSON.to_string();
    }
    pretty_json(json).unwrap_or_else(|_| INVALID_JSON.to_string())
}

fn pretty_json(json: &str) -> Result<String, Error> {
    let json = json.trim();
    let value = if json.starts_with('{') {
        Value::Object(serde_json::from_str::<Map<String, Value>>(json)?)
    } else if json.starts_with('[') {
        Value::Array(serde_json::from_str::<Vec<Value>>(json)?)
    } else {
        return Err(Error::Format(
            "json content must be an object or an array".to_string(),
        ));
    };
    to_pretty_string(&value)
}

/// Shared by the object formatter so both emit the same layout.
pub(crate) fn to_pretty_string<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| Error::Format(e.to_string()))
}

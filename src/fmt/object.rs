//! Arbitrary values rendered as pretty JSON through serde.

use super::json::to_pretty_string;
use crate::Error;
use serde::Serialize;
use serde_json::Value;

/// Returned when there is no value, or it serializes to `null`.
pub const NULL_OBJECT: &str = "Null object content";
/// Returned when the value doesn't serialize to an object or a list of objects.
pub const INVALID_OBJECT: &str = "Invalid object content";

/// Renders a serializable value as pretty JSON (four-space indent).
///
/// Structs and maps become a JSON object; sequences become an array whose
/// elements must each serialize to an object. Map keys that serde can't turn
/// into strings, scalars, and sequences of scalars yield [`INVALID_OBJECT`].
#[must_use]
pub fn format_object<T: Serialize + ?Sized>(value: Option<&T>) -> String {
    let Some(value) = value else {
        return NULL_OBJECT.to_string();
    };

    match pretty_object(value) {
        Ok(Some(text)) => text,
        Ok(None) => NULL_OBJECT.to_string(),
        Err(_) => INVALID_OBJECT.to_string(),
    }
}

fn pretty_object<T: Serialize + ?Sized>(value: &T) -> Result<Option<String>, Error> {
    match serde_json::to_value(value)? {
        Value::Null => Ok(None),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            to_pretty_string(&items).map(Some)
        }
        Value::Object(map) => to_pretty_string(&map).map(Some),
        other => Err(Error::Format(format!(
            "expected an object or a list of objects, got {other}"
        ))),
    }
}

//! Field enumeration for structured values.
//!
//! Instead of runtime reflection, auxide walks the metadata the JSON codec
//! already has: the value is serialized to a [`serde_json::Value`] and the
//! object entries are read back in declaration order (`preserve_order`).
//! The projector and the sequence printer are both built on this walk.

use crate::{AuxideError, AuxideResult};
use serde::Serialize;
use serde_json::Value;

/// Enumerate the named fields of a structured value in declaration order.
///
/// A value that serializes to JSON `null` (for example `Option::None`) is
/// rejected with [`AuxideError::InvalidArgument`]; the subject of a field
/// enumeration must be present. A scalar subject has no named fields and
/// yields an empty list.
///
/// # Errors
///
/// Returns [`AuxideError::InvalidArgument`] for an absent subject and
/// [`AuxideError::Serialization`] when the codec cannot encode the value.
pub fn fields_of<T: Serialize>(value: &T) -> AuxideResult<Vec<(String, Value)>> {
    match serde_json::to_value(value)? {
        Value::Null => Err(AuxideError::invalid_argument(
            "cannot enumerate the fields of a null value",
        )),
        Value::Object(map) => Ok(map.into_iter().collect()),
        _ => Ok(Vec::new()),
    }
}

/// Whether a JSON value is a primitive-like scalar (number, text, bool).
#[must_use]
pub fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::Bool(_) | Value::Number(_) | Value::String(_))
}

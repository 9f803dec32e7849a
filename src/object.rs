//! Object-to-map projection for structured values.

use crate::fields::fields_of;
use crate::AuxideResult;
use serde::Serialize;
use serde_json::{Map, Value};

/// Extension methods projecting a structured value into a field mapping.
///
/// The mapping is freshly allocated on every call and owned entirely by the
/// caller; the subject is only read. Insertion order follows field
/// declaration order.
pub trait ObjectExt {
    /// Build a mapping of every field, including those holding a null value.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` when the subject itself is absent
    /// (serializes to `null`), and with `Serialization` when the codec
    /// cannot encode it.
    fn properties_to_map(&self) -> AuxideResult<Map<String, Value>>;

    /// Build a mapping of only the fields holding a present (non-null)
    /// value. Absent-valued fields are omitted entirely, not mapped to a
    /// sentinel.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ObjectExt::properties_to_map`].
    fn non_null_properties_to_map(&self) -> AuxideResult<Map<String, Value>>;
}

impl<T: Serialize> ObjectExt for T {
    fn properties_to_map(&self) -> AuxideResult<Map<String, Value>> {
        Ok(fields_of(self)?.into_iter().collect())
    }

    fn non_null_properties_to_map(&self) -> AuxideResult<Map<String, Value>> {
        Ok(fields_of(self)?
            .into_iter()
            .filter(|(_, value)| !value.is_null())
            .collect())
    }
}

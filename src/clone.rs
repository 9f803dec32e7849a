//! Deep cloning through a JSON round-trip.
//!
//! The clone is obtained by encoding the value to JSON text and decoding it
//! back into the same shape, so it is structurally equal to the source while
//! sharing no storage with it. The source is never mutated, so a failed
//! round-trip leaves no partial state behind.

use crate::AuxideResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Deep cloning for any value the JSON codec can round-trip.
pub trait DeepClone: Sized {
    /// Produce an independent copy of this value.
    ///
    /// `Option::None` clones to `None`. Mutating the clone (including any
    /// nested field) is never observable on the source, and vice versa.
    ///
    /// # Errors
    ///
    /// Returns `AuxideError::Serialization` when the codec cannot represent
    /// the value (non-string map keys, non-finite floats, and similar).
    fn deep_clone(&self) -> AuxideResult<Self>;
}

impl<T> DeepClone for T
where
    T: Serialize + DeserializeOwned,
{
    fn deep_clone(&self) -> AuxideResult<Self> {
        let encoded = serde_json::to_string(self).map_err(|err| {
            debug!(error = %err, "deep clone failed to encode");
            err
        })?;
        Ok(serde_json::from_str(&encoded)?)
    }
}

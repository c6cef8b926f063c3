//! Payloads attached to an envelope.
//!
//! The caller chooses how a payload lands in the envelope: a
//! [`Payload::MergeFields`] mapping is merged into the top level next to
//! `status`/`code`/`message`, a [`Payload::SingleValue`] is nested under one
//! key (`data` for success, `errors` for error).

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CoreError;

/// Data or error details carried by an [`Envelope`](crate::envelope::Envelope).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Payload {
    /// An empty mapping: nothing is merged, so the envelope only carries
    /// `status`, `code` and `message`.
    #[default]
    Empty,
    /// Entries merged into the envelope's top level.
    MergeFields(Map<String, Value>),
    /// A value nested under `data` or `errors`, whatever its JSON type.
    /// `Value::Null` still emits the key, as `"data": null` / `"errors": null`.
    SingleValue(Value),
}

impl Payload {
    /// Build a [`Payload::MergeFields`] from key/value pairs, keeping their order.
    pub fn fields<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::MergeFields(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Build a [`Payload::SingleValue`]. Objects are nested too, never merged.
    pub fn value(value: impl Into<Value>) -> Self {
        Self::SingleValue(value.into())
    }

    /// Convert any serializable value.
    ///
    /// JSON objects become [`Payload::MergeFields`], everything else
    /// (including `null`) a [`Payload::SingleValue`].
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, CoreError> {
        let value = serde_json::to_value(value).map_err(CoreError::Serialize)?;

        Ok(match value {
            Value::Object(map) => Self::MergeFields(map),
            other => Self::SingleValue(other),
        })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self::MergeFields(map)
    }
}

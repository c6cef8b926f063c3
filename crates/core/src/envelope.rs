//! The uniform response envelope.
//!
//! Every envelope serializes as a JSON object starting with `status`, `code`
//! and `message`, followed by its payload:
//!
//! ```json
//! { "status": true, "code": 201, "message": "Item created successfully", "id": 7 }
//! { "status": false, "code": 400, "message": "Bad Request", "errors": "quota exceeded" }
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::payload::Payload;

/// Top-level keys owned by the envelope itself.
pub const RESERVED_KEYS: [&str; 3] = ["status", "code", "message"];

/// A success or error response ready for serialization.
///
/// Envelopes are immutable once built. The payload is either merged entries
/// (possibly none) or a single value under `data`/`errors`.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    status: bool,
    code: u16,
    message: String,
    payload: Payload,
}

impl Envelope {
    /// Success envelope; single values are nested under `data`.
    pub fn success(code: u16, payload: impl Into<Payload>, message: impl Into<String>) -> Self {
        Self::new(true, code, payload.into(), message.into())
    }

    /// Error envelope; single values are nested under `errors`.
    pub fn error(code: u16, payload: impl Into<Payload>, message: impl Into<String>) -> Self {
        Self::new(false, code, payload.into(), message.into())
    }

    fn new(status: bool, code: u16, payload: Payload, message: String) -> Self {
        // Merged entries may not shadow the envelope's own keys.
        let payload = match payload {
            Payload::MergeFields(mut fields) => {
                fields.retain(|key, _| !RESERVED_KEYS.contains(&key.as_str()));
                Payload::MergeFields(fields)
            }
            other => other,
        };

        Self {
            status,
            code,
            message,
            payload,
        }
    }

    pub fn status(&self) -> bool {
        self.status
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Key a [`Payload::SingleValue`] is nested under.
    pub fn nest_key(&self) -> &'static str {
        if self.status {
            "data"
        } else {
            "errors"
        }
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("status", &self.status)?;
        map.serialize_entry("code", &self.code)?;
        map.serialize_entry("message", &self.message)?;

        match &self.payload {
            Payload::Empty => {}
            Payload::MergeFields(fields) => {
                for (key, value) in fields {
                    map.serialize_entry(key, value)?;
                }
            }
            Payload::SingleValue(value) => map.serialize_entry(self.nest_key(), value)?,
        }

        map.end()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::codes;

    fn to_json(envelope: &Envelope) -> Value {
        serde_json::to_value(envelope).unwrap()
    }

    #[test]
    fn merged_fields_sit_next_to_envelope_keys() {
        let envelope = Envelope::success(
            codes::OK,
            Payload::fields([("id", json!(3)), ("tags", json!(["a", "b"]))]),
            "OK",
        );

        assert_eq!(
            to_json(&envelope),
            json!({
                "status": true,
                "code": 200,
                "message": "OK",
                "id": 3,
                "tags": ["a", "b"],
            })
        );
    }

    #[test]
    fn single_value_nests_under_data_for_success() {
        let envelope = Envelope::success(codes::OK, Payload::value(json!([1, 2])), "OK");
        assert_eq!(to_json(&envelope)["data"], json!([1, 2]));
        assert!(to_json(&envelope).get("errors").is_none());
    }

    #[test]
    fn single_value_nests_under_errors_for_error() {
        let envelope = Envelope::error(codes::BAD_REQUEST, Payload::value("quota"), "Bad Request");
        let body = to_json(&envelope);

        assert_eq!(body["status"], false);
        assert_eq!(body["errors"], "quota");
        assert!(body.get("data").is_none());
    }

    #[test]
    fn error_mapping_is_merged() {
        let envelope = Envelope::error(
            codes::BAD_REQUEST,
            Payload::fields([("reason", "locked")]),
            "Bad Request",
        );
        let body = to_json(&envelope);

        assert_eq!(body["reason"], "locked");
        assert!(body.get("errors").is_none());
    }

    #[test]
    fn null_single_value_keeps_its_key() {
        let body = to_json(&Envelope::success(codes::OK, Payload::value(Value::Null), "OK"));
        assert_eq!(body.get("data"), Some(&Value::Null));

        let body = to_json(&Envelope::error(codes::BAD_REQUEST, Payload::value(Value::Null), "no"));
        assert_eq!(body.get("errors"), Some(&Value::Null));
    }

    #[test]
    fn empty_payload_adds_no_keys() {
        let body = to_json(&Envelope::success(codes::NO_CONTENT, Payload::Empty, "gone"));
        assert_eq!(body.as_object().unwrap().len(), 3);
    }

    #[test]
    fn reserved_keys_cannot_be_overridden() {
        let envelope = Envelope::success(
            codes::OK,
            Payload::fields([
                ("status", json!(false)),
                ("code", json!(500)),
                ("message", json!("hijacked")),
                ("name", json!("kept")),
            ]),
            "OK",
        );
        let body = to_json(&envelope);

        assert_eq!(body["status"], true);
        assert_eq!(body["code"], 200);
        assert_eq!(body["message"], "OK");
        assert_eq!(body["name"], "kept");
    }

    #[test]
    fn keys_serialize_in_envelope_then_payload_order() {
        let envelope = Envelope::success(
            codes::CREATED,
            Payload::fields([("zeta", 1), ("alpha", 2)]),
            "created",
        );
        let text = serde_json::to_string(&envelope).unwrap();

        assert_eq!(
            text,
            r#"{"status":true,"code":201,"message":"created","zeta":1,"alpha":2}"#
        );
    }

    #[test]
    fn identical_inputs_build_equal_envelopes() {
        let build = || Envelope::error(codes::NOT_FOUND, Payload::value(json!({"id": 9})), "missing");
        assert_eq!(build(), build());
        assert_eq!(to_json(&build()), to_json(&build()));
    }
}

//! Named envelope operations for request handlers.

use serde_json::Value;

use crate::codes;
use crate::envelope::Envelope;
use crate::messages::Messages;
use crate::payload::Payload;
use crate::validation::{first_errors, ValidationErrorItem};

/// Builds envelopes with fixed codes and catalog messages.
///
/// A `Responder` holds no per-request state; share one across handlers.
///
/// ```
/// use envelope_core::{Payload, Responder};
///
/// let responder = Responder::default();
/// let envelope = responder.created(Payload::fields([("id", 7)]));
///
/// assert_eq!(envelope.code(), 201);
/// assert_eq!(envelope.message(), "Item created successfully");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Responder {
    messages: Messages,
}

impl Responder {
    pub const fn new(messages: Messages) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// 201, resource created.
    pub fn created(&self, payload: impl Into<Payload>) -> Envelope {
        Envelope::success(codes::CREATED, payload, self.messages.created.clone())
    }

    /// 200, resource updated.
    pub fn updated(&self, payload: impl Into<Payload>) -> Envelope {
        Envelope::success(codes::OK, payload, self.messages.updated.clone())
    }

    /// 204, resource deleted. Never carries a payload.
    pub fn deleted(&self) -> Envelope {
        Envelope::success(codes::NO_CONTENT, Payload::Empty, self.messages.deleted.clone())
    }

    /// 200, a single resource.
    pub fn show(&self, payload: impl Into<Payload>) -> Envelope {
        Envelope::success(codes::OK, payload, self.messages.ok.clone())
    }

    /// 200, a collection of resources.
    pub fn list(&self, payload: impl Into<Payload>) -> Envelope {
        Envelope::success(codes::OK, payload, self.messages.ok.clone())
    }

    /// 200 with a caller-chosen message, `OK` by default.
    pub fn success(&self, payload: impl Into<Payload>, message: Option<&str>) -> Envelope {
        let message = message.unwrap_or(&*self.messages.ok);
        Envelope::success(codes::OK, payload, message)
    }

    /// 400 with a caller-chosen message, `Bad Request` by default.
    pub fn error(&self, payload: impl Into<Payload>, message: Option<&str>) -> Envelope {
        let message = message.unwrap_or(&*self.messages.bad_request);
        Envelope::error(codes::BAD_REQUEST, payload, message)
    }

    /// 403, the client lacks permission for the action. Reports `"errors": null`.
    pub fn unauthorized(&self) -> Envelope {
        Envelope::error(
            codes::FORBIDDEN,
            Payload::SingleValue(Value::Null),
            self.messages.unauthorized.clone(),
        )
    }

    /// 401, the client is not authenticated. Reports `"errors": null`.
    pub fn unauthenticated(&self) -> Envelope {
        Envelope::error(
            codes::UNAUTHORIZED,
            Payload::SingleValue(Value::Null),
            self.messages.unauthenticated.clone(),
        )
    }

    /// 404, requested resource missing.
    pub fn not_found(&self) -> Envelope {
        Envelope::error(codes::NOT_FOUND, Payload::Empty, self.messages.not_found.clone())
    }

    /// 422 from per-field message lists; only the first message of each
    /// field is reported, in input order.
    pub fn validation_error<I, F, M, S>(&self, fields: I) -> Envelope
    where
        I: IntoIterator<Item = (F, M)>,
        F: Into<String>,
        M: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.validation_items(first_errors(fields))
    }

    /// 422 from already-reduced items, listed under `errors`.
    pub fn validation_items(&self, items: Vec<ValidationErrorItem>) -> Envelope {
        let errors = Value::Array(items.into_iter().map(Value::from).collect());

        Envelope::error(
            codes::UNPROCESSABLE_ENTITY,
            Payload::SingleValue(errors),
            self.messages.unprocessable_entity.clone(),
        )
    }
}

impl From<Messages> for Responder {
    fn from(messages: Messages) -> Self {
        Self::new(messages)
    }
}

//! Standardized JSON response envelopes for web APIs.
//!
//! Handlers pick a named operation on a [`Responder`] (`created`,
//! `not_found`, `validation_error`, ...) and hand the resulting [`Envelope`]
//! to their framework for serialization. Nothing here performs I/O except
//! [`Messages::from_path`].

pub mod codes;
pub mod envelope;
pub mod error;
pub mod messages;
pub mod payload;
pub mod responder;
pub mod validation;

pub use envelope::Envelope;
pub use error::CoreError;
pub use messages::Messages;
pub use payload::Payload;
pub use responder::Responder;
pub use validation::{first_errors, items_from_validator, ValidationErrorItem};

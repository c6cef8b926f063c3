//! Default messages used by the named envelope operations.
//!
//! The English catalog is built in. A JSON file can override any subset of
//! the entries:
//!
//! ```json
//! { "created": "Élément créé", "not_found": "Élément introuvable" }
//! ```

use std::borrow::Cow;
use std::path::Path;

use serde::Deserialize;

use crate::error::CoreError;

/// Message catalog. Missing entries keep their English default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Messages {
    pub created: Cow<'static, str>,
    pub updated: Cow<'static, str>,
    pub deleted: Cow<'static, str>,
    pub ok: Cow<'static, str>,
    pub bad_request: Cow<'static, str>,
    pub unauthorized: Cow<'static, str>,
    pub unauthenticated: Cow<'static, str>,
    pub not_found: Cow<'static, str>,
    pub unprocessable_entity: Cow<'static, str>,
}

impl Messages {
    pub const ENGLISH: Self = Self {
        created: Cow::Borrowed("Item created successfully"),
        updated: Cow::Borrowed("Item updated successfully"),
        deleted: Cow::Borrowed("Item deleted successfully"),
        ok: Cow::Borrowed("OK"),
        bad_request: Cow::Borrowed("Bad Request"),
        unauthorized: Cow::Borrowed("Unauthorized"),
        unauthenticated: Cow::Borrowed("Unauthenticated"),
        not_found: Cow::Borrowed("Item not found"),
        unprocessable_entity: Cow::Borrowed("Unprocessable entity"),
    };

    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(CoreError::Catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&raw)
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::ENGLISH
    }
}

//! Validation-error formatting.
//!
//! Validation frameworks report several messages per field; envelopes only
//! surface the first one.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// One invalid input field and its first error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorItem {
    pub field: String,
    pub error: String,
}

impl ValidationErrorItem {
    pub fn new(field: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            error: error.into(),
        }
    }
}

impl From<ValidationErrorItem> for Value {
    fn from(item: ValidationErrorItem) -> Self {
        let mut map = serde_json::Map::with_capacity(2);
        map.insert("field".to_string(), Value::String(item.field));
        map.insert("error".to_string(), Value::String(item.error));
        Value::Object(map)
    }
}

/// Keep the first message of every field, in input order.
///
/// Fields without any message produce no item.
pub fn first_errors<I, F, M, S>(fields: I) -> Vec<ValidationErrorItem>
where
    I: IntoIterator<Item = (F, M)>,
    F: Into<String>,
    M: IntoIterator<Item = S>,
    S: Into<String>,
{
    fields
        .into_iter()
        .filter_map(|(field, messages)| {
            let error = messages.into_iter().next()?;
            Some(ValidationErrorItem::new(field, error))
        })
        .collect()
}

/// Flatten [`ValidationErrors`] from the `validator` crate into items.
///
/// Nested structs are addressed as `parent.child` and list entries as
/// `parent[i].child`. `validator` keeps field errors in hash maps, so fields
/// are ordered by name at every level; list entries keep their index order.
pub fn items_from_validator(errors: &ValidationErrors) -> Vec<ValidationErrorItem> {
    let mut fields = Vec::new();
    collect_field_messages(None, errors, &mut fields);

    first_errors(fields)
}

fn collect_field_messages(
    prefix: Option<&str>,
    errors: &ValidationErrors,
    out: &mut Vec<(String, Vec<String>)>,
) {
    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (field, kind) in entries {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                out.push((path, list.iter().map(describe).collect()));
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_field_messages(Some(&path), nested, out);
            }
            ValidationErrorsKind::List(entries) => {
                for (index, nested) in entries {
                    collect_field_messages(Some(&format!("{path}[{index}]")), nested, out);
                }
            }
        }
    }
}

/// Human-readable text of one error: its message, or its code when unset.
fn describe(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => error.code.to_string(),
    }
}

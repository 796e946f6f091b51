use serde_json::Value;

use crate::validate::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Wire(#[from] WireError),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

/// Why a well-formed JSON value cannot be read as a typed value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    #[error("expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("no {union} variant matches{}", describe_discriminator(.discriminator))]
    NoMatchingVariant {
        union: &'static str,
        discriminator: Option<String>,
    },
}

impl WireError {
    pub fn unexpected(expected: &'static str, found: &Value) -> Self {
        Self::UnexpectedType {
            expected,
            found: json_kind(found),
        }
    }
}

fn describe_discriminator(discriminator: &Option<String>) -> String {
    match discriminator {
        Some(value) => format!(" discriminator {value:?}"),
        None => String::new(),
    }
}

/// Name of the JSON kind of `value`, as used in diagnostics.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

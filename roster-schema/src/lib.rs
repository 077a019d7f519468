//! Form validation for Roster.
//!
//! Records and form payloads derive `validator::Validate`; failures are
//! flattened into `{"field": ["message", ...]}` and returned as an
//! `Unprocessable` [`RosterError`].

use roster_core::errors::{RosterError, RosterResult};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::Validate;

#[derive(Debug, Default)]
pub struct SchemaErrors {
    map: Map<String, Value>,
}

impl SchemaErrors {
    pub fn push_schema(&mut self, msg: impl Into<String>) {
        Self::push_to(&mut self.map, "_schema", msg);
    }

    pub fn push_field(&mut self, field: &str, msg: impl Into<String>) {
        Self::push_to(&mut self.map, field, msg);
    }

    fn push_to(map: &mut Map<String, Value>, key: &str, msg: impl Into<String>) {
        let msg = Value::String(msg.into());
        match map.get_mut(key) {
            Some(Value::Array(arr)) => arr.push(msg),
            _ => {
                map.insert(key.to_string(), Value::Array(vec![msg]));
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn into_unprocessable(self, message: &str) -> anyhow::Error {
        RosterError::unprocessable(message)
            .with_errors(Value::Object(self.map))
            .into_anyhow()
    }
}

fn friendly_message(code: &str) -> Option<&'static str> {
    match code {
        "required" | "length" => Some("is required"),
        _ => None,
    }
}

fn collect(errs: &validator::ValidationErrors) -> SchemaErrors {
    let mut out = SchemaErrors::default();
    for (field, kind) in errs.errors() {
        if let validator::ValidationErrorsKind::Field(field_errors) = kind {
            for e in field_errors {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .or_else(|| friendly_message(&e.code).map(|m| m.to_string()))
                    .unwrap_or_else(|| e.code.to_string());
                out.push_field(field, msg);
            }
        }
    }
    out
}

/// Validate an already-typed record.
pub fn check<T: Validate>(data: &T, error_message: &str) -> RosterResult<()> {
    data.validate()
        .map_err(|e| collect(&e).into_unprocessable(error_message))
}

/// Deserialize a form payload and validate it.
pub fn validate<T>(data: &Value, error_message: &str) -> RosterResult<T>
where
    T: DeserializeOwned + Validate,
{
    let parsed: T = serde_json::from_value(data.clone()).map_err(|e| {
        let mut errors = SchemaErrors::default();
        errors.push_schema(e.to_string());
        errors.into_unprocessable(error_message)
    })?;

    check(&parsed, error_message)?;
    Ok(parsed)
}

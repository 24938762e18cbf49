//! Response mapping: envelope shape checks and record projection.

use serde_json::Value;
use tracing::warn;

use crate::error::MalError;
use crate::jikan::extract::Record;

/// A closed output shape built from one upstream record.
///
/// Implementations must be total: every field gets a value even when the
/// record is missing it.
pub trait FromRecord: Sized {
    /// Noun used in log lines ("anime", "review", ...).
    const KIND: &'static str;

    fn from_record(record: &Record) -> Self;
}

/// Locate `data` and require it to be a list.
pub fn data_list(body: &Value) -> Result<&[Value], MalError> {
    match data(body)? {
        Value::Array(items) => Ok(items.as_slice()),
        other => Err(MalError::Format(format!(
            "'data' is not a list (got {})",
            type_name(other)
        ))),
    }
}

/// Locate `data` and require it to be an object.
pub fn data_object(body: &Value) -> Result<&Record, MalError> {
    match data(body)? {
        Value::Object(record) => Ok(record),
        other => Err(MalError::Format(format!(
            "'data' is not an object (got {})",
            type_name(other)
        ))),
    }
}

/// Map every object in `items`; anything else is skipped with a warning.
pub fn map_records<T: FromRecord>(items: &[Value]) -> Vec<T> {
    let mut mapped = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        match item.as_object() {
            Some(record) => mapped.push(T::from_record(record)),
            None => warn!(
                "Skipping {} at index {}: expected an object, got {}",
                T::KIND,
                idx,
                type_name(item)
            ),
        }
    }
    mapped
}

fn data(body: &Value) -> Result<&Value, MalError> {
    let envelope = body.as_object().ok_or_else(|| {
        MalError::Format(format!(
            "expected a JSON object envelope, got {}",
            type_name(body)
        ))
    })?;
    envelope
        .get("data")
        .ok_or_else(|| MalError::Format("envelope has no 'data' field".to_string()))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

use formulate_locale_core::{FieldValue, ValidationContext};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{RegistryError, RegistryResult};

/// Validation context as a JSON-speaking host sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct ContextPayload {
    pub name: String,
    #[serde(default, deserialize_with = "present_value")]
    pub value: Option<Value>,
    #[serde(default)]
    pub args: Option<Vec<String>>,
}

impl ContextPayload {
    pub fn from_json(contents: &str) -> RegistryResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn into_context(self) -> RegistryResult<ValidationContext> {
        Ok(ValidationContext {
            name: self.name,
            value: match self.value {
                Some(value) => field_value(value)?,
                None => FieldValue::Empty,
            },
            args: self.args.unwrap_or_default(),
        })
    }
}

// A `null` that is present in the payload must stay distinct from a missing key.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn field_value(value: Value) -> RegistryResult<FieldValue> {
    match value {
        Value::Null => Ok(FieldValue::Null),
        Value::String(text) => Ok(FieldValue::Str(text)),
        Value::Number(number) => number
            .as_f64()
            .map(FieldValue::Num)
            .ok_or(RegistryError::InvalidContext("number out of range")),
        Value::Array(items) => {
            let items = items
                .into_iter()
                .map(list_item)
                .collect::<RegistryResult<Vec<_>>>()?;
            Ok(FieldValue::List(items))
        }
        Value::Bool(_) => Err(RegistryError::InvalidContext("boolean value")),
        Value::Object(_) => Err(RegistryError::InvalidContext("object value")),
    }
}

fn list_item(item: Value) -> RegistryResult<String> {
    match item {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        _ => Err(RegistryError::InvalidContext("nested list item")),
    }
}

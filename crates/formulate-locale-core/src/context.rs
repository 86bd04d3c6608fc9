use alloc::string::String;
use alloc::vec::Vec;

use crate::FieldValue;

/// Read-only input handed to every message template.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ValidationContext {
    pub name: String,
    pub value: FieldValue,
    pub args: Vec<String>,
}

impl ValidationContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Empty,
            args: Vec::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Rule argument at `index`, or an empty string when it was not supplied.
    pub fn arg(&self, index: usize) -> &str {
        self.args.get(index).map(String::as_str).unwrap_or("")
    }

    /// Rule argument at `index` when supplied and non-empty.
    pub fn flag(&self, index: usize) -> Option<&str> {
        self.args
            .get(index)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn has_args(&self) -> bool {
        !self.args.is_empty()
    }
}

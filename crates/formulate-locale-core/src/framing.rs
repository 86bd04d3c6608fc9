use crate::{FieldValue, is_numeric_like};

/// Whether a size rule talks about the value itself or its character count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeFraming {
    Value,
    Length,
}

impl SizeFraming {
    /// `force` is the rule's force-flag argument, `None` when absent or blank.
    ///
    /// `"value"` always selects value framing. Numeric values default to value
    /// framing unless forced to `"length"`; any other flag keeps the default.
    pub fn select(value: &FieldValue, force: Option<&str>) -> Self {
        if (is_numeric_like(value) && force != Some("length")) || force == Some("value") {
            SizeFraming::Value
        } else {
            SizeFraming::Length
        }
    }
}

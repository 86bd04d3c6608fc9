use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// The current value of the field being validated.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum FieldValue {
    Str(String),
    Num(f64),
    List(Vec<String>),
    /// An explicit null, as opposed to a value that was never supplied.
    Null,
    #[default]
    Empty,
}

impl FieldValue {
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }

    pub fn is_list(&self) -> bool {
        matches!(self, FieldValue::List(_))
    }

    /// Returns the text when the value is a non-empty string.
    pub fn non_empty_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(text) if !text.is_empty() => Some(text.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(String::from(value))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Num(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Num(value as f64)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Empty, Into::into)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(text) => f.write_str(text),
            FieldValue::Num(number) => write_number(f, *number),
            FieldValue::List(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    f.write_str(item)?;
                }
                Ok(())
            }
            FieldValue::Null => f.write_str("null"),
            FieldValue::Empty => Ok(()),
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, number: f64) -> fmt::Result {
    if number.is_nan() {
        f.write_str("NaN")
    } else if number.is_infinite() {
        f.write_str(if number > 0.0 { "Infinity" } else { "-Infinity" })
    } else if number == 0.0 {
        f.write_str("0")
    } else if number.abs() >= 1e21 || number.abs() < 1e-6 {
        let text = format!("{number:e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{mantissa}e+{exponent}")
            }
            _ => f.write_str(&text),
        }
    } else {
        write!(f, "{number}")
    }
}

/// Falsiness of a field value: absent and null values, empty strings, zero
/// and NaN.
/// Sequences are never empty in this sense, even with no items.
pub fn is_empty(value: &FieldValue) -> bool {
    match value {
        FieldValue::Empty | FieldValue::Null => true,
        FieldValue::Str(text) => text.is_empty(),
        FieldValue::Num(number) => *number == 0.0 || number.is_nan(),
        FieldValue::List(_) => false,
    }
}

/// Whether the value coerces to a number.
///
/// Null and blank strings coerce to zero and count as numeric. A sequence
/// coerces through its comma-joined text, so only empty and single-item
/// sequences can be numeric.
pub fn is_numeric_like(value: &FieldValue) -> bool {
    match value {
        FieldValue::Empty => false,
        FieldValue::Null => true,
        FieldValue::Num(number) => !number.is_nan(),
        FieldValue::Str(text) => is_numeric_text(text),
        FieldValue::List(items) => match items.as_slice() {
            [] => true,
            [item] => is_numeric_text(item),
            _ => false,
        },
    }
}

fn is_numeric_text(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return true;
    }
    if is_radix_literal(trimmed) {
        return true;
    }
    let unsigned = trimmed
        .strip_prefix(|ch: char| ch == '+' || ch == '-')
        .unwrap_or(trimmed);
    unsigned == "Infinity" || is_decimal_literal(unsigned)
}

fn is_radix_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return false;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return false,
    };
    text[2..].chars().all(|ch| ch.is_digit(radix))
}

fn is_decimal_literal(text: &str) -> bool {
    let (mantissa, exponent) = match text.find(|ch: char| ch == 'e' || ch == 'E') {
        Some(idx) => (&text[..idx], Some(&text[idx + 1..])),
        None => (text, None),
    };
    let (integer, fraction) = match mantissa.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (mantissa, None),
    };

    if !all_digits(integer) {
        return false;
    }
    match fraction {
        Some(fraction) => {
            if !all_digits(fraction) || (integer.is_empty() && fraction.is_empty()) {
                return false;
            }
        }
        None => {
            if integer.is_empty() {
                return false;
            }
        }
    }
    if let Some(exponent) = exponent {
        let digits = exponent
            .strip_prefix(|ch: char| ch == '+' || ch == '-')
            .unwrap_or(exponent);
        if digits.is_empty() || !all_digits(digits) {
            return false;
        }
    }
    true
}

fn all_digits(value: &str) -> bool {
    value.chars().all(|ch| ch.is_ascii_digit())
}

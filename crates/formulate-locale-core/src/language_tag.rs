use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::{CoreError, CoreResult};

/// Locale key a catalog is registered under: a language subtag with an
/// optional region, e.g. `tr`, `en-GB`, `es-419`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleTag {
    original: String,
    normalized: String,
    region_start: Option<usize>,
}

impl LocaleTag {
    pub fn parse(input: &str) -> CoreResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidInput("locale tag is empty"));
        }

        let subtags: Vec<&str> = trimmed.split(|ch: char| ch == '-' || ch == '_').collect();
        if subtags.iter().any(|part| part.is_empty()) {
            return Err(CoreError::InvalidInput("locale tag has empty subtag"));
        }

        let language = subtags[0];
        if !is_alpha(language) || !(2..=3).contains(&language.len()) {
            return Err(CoreError::InvalidInput("invalid language subtag"));
        }
        let mut normalized = language.to_ascii_lowercase();

        let region_start = match subtags.as_slice() {
            [_] => None,
            [_, region] if is_region(region) => {
                normalized.push('-');
                let start = normalized.len();
                normalized.push_str(&region.to_ascii_uppercase());
                Some(start)
            }
            [_, _] => return Err(CoreError::InvalidInput("invalid region subtag")),
            _ => return Err(CoreError::Unsupported("locale tag with extra subtags")),
        };

        Ok(Self {
            original: trimmed.to_string(),
            normalized,
            region_start,
        })
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn language(&self) -> &str {
        match self.region_start {
            Some(start) => &self.normalized[..start - 1],
            None => &self.normalized,
        }
    }

    pub fn region(&self) -> Option<&str> {
        self.region_start.map(|start| &self.normalized[start..])
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.normalized())
    }
}

fn is_alpha(value: &str) -> bool {
    value.chars().all(|ch| ch.is_ascii_alphabetic())
}

fn is_region(value: &str) -> bool {
    (value.len() == 2 && is_alpha(value))
        || (value.len() == 3 && value.chars().all(|ch| ch.is_ascii_digit()))
}

use core::fmt;

use crate::{CoreError, CoreResult};

/// Validation rules a message catalog can describe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
    Accepted,
    After,
    Alpha,
    Alphanumeric,
    Before,
    Between,
    Confirm,
    Date,
    /// Generic message used when no rule-specific template exists.
    Default,
    Email,
    EndsWith,
    In,
    Matches,
    Max,
    Mime,
    Min,
    Not,
    Number,
    Required,
    StartsWith,
    Url,
}

impl Rule {
    pub const ALL: [Rule; 21] = [
        Rule::Accepted,
        Rule::After,
        Rule::Alpha,
        Rule::Alphanumeric,
        Rule::Before,
        Rule::Between,
        Rule::Confirm,
        Rule::Date,
        Rule::Default,
        Rule::Email,
        Rule::EndsWith,
        Rule::In,
        Rule::Matches,
        Rule::Max,
        Rule::Mime,
        Rule::Min,
        Rule::Not,
        Rule::Number,
        Rule::Required,
        Rule::StartsWith,
        Rule::Url,
    ];

    /// Key the host uses to request this rule's message.
    pub const fn as_str(self) -> &'static str {
        match self {
            Rule::Accepted => "accepted",
            Rule::After => "after",
            Rule::Alpha => "alpha",
            Rule::Alphanumeric => "alphanumeric",
            Rule::Before => "before",
            Rule::Between => "between",
            Rule::Confirm => "confirm",
            Rule::Date => "date",
            Rule::Default => "default",
            Rule::Email => "email",
            Rule::EndsWith => "endsWith",
            Rule::In => "in",
            Rule::Matches => "matches",
            Rule::Max => "max",
            Rule::Mime => "mime",
            Rule::Min => "min",
            Rule::Not => "not",
            Rule::Number => "number",
            Rule::Required => "required",
            Rule::StartsWith => "startsWith",
            Rule::Url => "url",
        }
    }

    pub fn parse(key: &str) -> CoreResult<Self> {
        Rule::ALL
            .iter()
            .copied()
            .find(|rule| rule.as_str() == key)
            .ok_or(CoreError::Unsupported("unknown rule key"))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Rule {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Rule::parse(value)
    }
}

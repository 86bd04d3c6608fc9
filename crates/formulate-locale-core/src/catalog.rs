use alloc::collections::BTreeSet;
use alloc::string::String;
use core::fmt;

use crate::{CoreError, CoreResult, LocaleTag, Rule, ValidationContext};

/// Produces the user-facing error message for one rule.
pub type MessageTemplate = fn(&ValidationContext) -> String;

#[derive(Clone, Copy)]
pub struct CatalogEntry {
    pub rule: Rule,
    pub template: MessageTemplate,
}

impl CatalogEntry {
    pub const fn new(rule: Rule, template: MessageTemplate) -> Self {
        Self { rule, template }
    }
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("rule", &self.rule)
            .finish_non_exhaustive()
    }
}

/// Immutable table of message templates for one locale.
#[derive(Clone, Copy)]
pub struct MessageCatalog {
    locale: &'static str,
    entries: &'static [CatalogEntry],
}

impl MessageCatalog {
    pub const fn new(locale: &'static str, entries: &'static [CatalogEntry]) -> Self {
        Self { locale, entries }
    }

    pub fn locale(&self) -> &'static str {
        self.locale
    }

    pub fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rules(&self) -> impl Iterator<Item = Rule> + '_ {
        self.entries.iter().map(|entry| entry.rule)
    }

    pub fn template(&self, rule: Rule) -> Option<MessageTemplate> {
        self.entries
            .iter()
            .find(|entry| entry.rule == rule)
            .map(|entry| entry.template)
    }

    pub fn message(&self, rule: Rule, ctx: &ValidationContext) -> Option<String> {
        self.template(rule).map(|template| template(ctx))
    }

    /// Checks the locale tag parses and no rule appears twice.
    pub fn validate(&self) -> CoreResult<()> {
        LocaleTag::parse(self.locale)?;
        let mut seen = BTreeSet::new();
        for entry in self.entries {
            if !seen.insert(entry.rule) {
                return Err(CoreError::InvalidInput("duplicate rule in catalog"));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for MessageCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageCatalog")
            .field("locale", &self.locale)
            .field("rules", &self.entries.len())
            .finish()
    }
}

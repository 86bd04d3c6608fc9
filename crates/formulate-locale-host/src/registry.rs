use std::collections::BTreeMap;

use formulate_locale_core::{
    Extension, LocaleTag, MessageTemplate, PluginHost, Rule, ValidationContext,
};
use tracing::{debug, trace, warn};

use crate::config::HostConfig;
use crate::error::{RegistryError, RegistryResult};

/// Host-side locale registry that plugins extend with message catalogs.
pub struct LocaleRegistry {
    config: HostConfig,
    locales: BTreeMap<String, BTreeMap<Rule, MessageTemplate>>,
}

impl LocaleRegistry {
    pub fn new() -> Self {
        Self::with_config(HostConfig::default())
    }

    pub fn with_config(config: HostConfig) -> Self {
        Self {
            config,
            locales: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn set_locale(&mut self, locale: &str) -> RegistryResult<()> {
        let tag = LocaleTag::parse(locale)?;
        self.config.locale = tag.normalized().to_string();
        Ok(())
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        LocaleTag::parse(locale)
            .map(|tag| self.locales.contains_key(tag.normalized()))
            .unwrap_or(false)
    }

    /// Rule keys registered for `locale`, in rule order.
    pub fn rule_keys(&self, locale: &str) -> RegistryResult<Vec<&'static str>> {
        let (_, rules) = self.rules_for(locale)?;
        Ok(rules.keys().map(|rule| rule.as_str()).collect())
    }

    pub fn template(&self, locale: &str, rule: Rule) -> Option<MessageTemplate> {
        let (_, rules) = self.rules_for(locale).ok()?;
        rules.get(&rule).copied()
    }

    /// Formats `rule_key` in the configured locale.
    pub fn message(&self, rule_key: &str, ctx: &ValidationContext) -> RegistryResult<String> {
        self.message_in(&self.config.locale, rule_key, ctx)
    }

    /// Formats `rule_key` in `locale`, falling back to the configured fallback
    /// rule of the same locale when the key has no template.
    pub fn message_in(
        &self,
        locale: &str,
        rule_key: &str,
        ctx: &ValidationContext,
    ) -> RegistryResult<String> {
        let (tag, rules) = self.rules_for(locale)?;
        let requested = Rule::parse(rule_key)
            .ok()
            .and_then(|rule| rules.get(&rule).copied());
        let template = match requested {
            Some(template) => template,
            None => {
                trace!(
                    locale = tag.normalized(),
                    rule = rule_key,
                    fallback = self.config.fallback_rule.as_str(),
                    "rule has no template, using fallback"
                );
                Rule::parse(&self.config.fallback_rule)
                    .ok()
                    .and_then(|rule| rules.get(&rule).copied())
                    .ok_or_else(|| RegistryError::MissingRule {
                        locale: tag.normalized().to_string(),
                        rule: rule_key.to_string(),
                    })?
            }
        };
        Ok(template(ctx))
    }

    fn rules_for(
        &self,
        locale: &str,
    ) -> RegistryResult<(LocaleTag, &BTreeMap<Rule, MessageTemplate>)> {
        let tag = LocaleTag::parse(locale)?;
        let rules = self
            .locales
            .get(tag.normalized())
            .ok_or_else(|| RegistryError::MissingLocale(tag.normalized().to_string()))?;
        Ok((tag, rules))
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginHost for LocaleRegistry {
    fn extend(&mut self, extension: Extension) {
        for (locale, catalog) in extension.locales {
            let tag = match LocaleTag::parse(&locale) {
                Ok(tag) => tag,
                Err(err) => {
                    warn!(
                        locale = locale.as_str(),
                        error = %err,
                        "skipping catalog with invalid locale tag"
                    );
                    continue;
                }
            };
            let rules = self
                .locales
                .entry(tag.normalized().to_string())
                .or_default();
            let existing = rules.len();
            for entry in catalog.entries() {
                rules.insert(entry.rule, entry.template);
            }
            debug!(
                locale = tag.normalized(),
                added = catalog.len(),
                previous = existing,
                total = rules.len(),
                "registered locale catalog"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LocaleRegistry;
    use crate::{HostConfig, RegistryError};
    use formulate_locale_core::{
        CatalogEntry, Extension, MessageCatalog, PluginHost, Rule, ValidationContext,
    };

    fn base_required(ctx: &ValidationContext) -> String {
        format!("{} is required.", ctx.name)
    }

    fn base_default(_ctx: &ValidationContext) -> String {
        "Invalid field.".to_string()
    }

    fn override_required(ctx: &ValidationContext) -> String {
        format!("{} must be filled in.", ctx.name)
    }

    fn email(_ctx: &ValidationContext) -> String {
        "Bad email.".to_string()
    }

    const BASE: &[CatalogEntry] = &[
        CatalogEntry::new(Rule::Required, base_required),
        CatalogEntry::new(Rule::Default, base_default),
    ];

    const OVERRIDES: &[CatalogEntry] = &[
        CatalogEntry::new(Rule::Required, override_required),
        CatalogEntry::new(Rule::Email, email),
    ];

    const NO_DEFAULT: &[CatalogEntry] = &[CatalogEntry::new(Rule::Email, email)];

    fn registry_with(locale: &'static str, entries: &'static [CatalogEntry]) -> LocaleRegistry {
        let config = HostConfig {
            locale: "en".to_string(),
            ..HostConfig::default()
        };
        let mut registry = LocaleRegistry::with_config(config);
        registry.extend(Extension::new().with_locale(MessageCatalog::new(locale, entries)));
        registry
    }

    #[test]
    fn formats_registered_rule() {
        let registry = registry_with("en", BASE);
        let ctx = ValidationContext::new("Email");
        let message = registry.message("required", &ctx).expect("message");
        assert_eq!(message, "Email is required.");
    }

    #[test]
    fn unknown_rule_uses_default() {
        let registry = registry_with("en", BASE);
        let ctx = ValidationContext::new("Email");
        assert_eq!(registry.message("uppercase", &ctx).expect("message"), "Invalid field.");
        assert_eq!(registry.message("email", &ctx).expect("message"), "Invalid field.");
    }

    #[test]
    fn missing_fallback_reports_rule() {
        let registry = registry_with("en", NO_DEFAULT);
        let ctx = ValidationContext::new("Email");
        let err = registry.message("required", &ctx).expect_err("no fallback");
        match err {
            RegistryError::MissingRule { locale, rule } => {
                assert_eq!(locale, "en");
                assert_eq!(rule, "required");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn configured_fallback_rule_is_used() {
        let config = HostConfig {
            locale: "en".to_string(),
            fallback_rule: "email".to_string(),
        };
        let mut registry = LocaleRegistry::with_config(config);
        registry.extend(Extension::new().with_locale(MessageCatalog::new("en", NO_DEFAULT)));
        let ctx = ValidationContext::new("Email");
        assert_eq!(registry.message("required", &ctx).expect("message"), "Bad email.");
    }

    #[test]
    fn later_extension_overrides_per_rule() {
        let mut registry = registry_with("en", BASE);
        registry.extend(Extension::new().with_locale(MessageCatalog::new("en", OVERRIDES)));
        let ctx = ValidationContext::new("Name");
        assert_eq!(
            registry.message("required", &ctx).expect("message"),
            "Name must be filled in."
        );
        assert_eq!(registry.message("default", &ctx).expect("message"), "Invalid field.");
        assert_eq!(
            registry.rule_keys("en").expect("keys"),
            vec!["default", "email", "required"]
        );
    }

    #[test]
    fn tags_are_normalized() {
        let registry = registry_with("PT_br", BASE);
        assert!(registry.has_locale("pt-BR"));
        assert_eq!(registry.locales().collect::<Vec<_>>(), vec!["pt-BR"]);
        let ctx = ValidationContext::new("Nome");
        let message = registry.message_in("pt-br", "required", &ctx).expect("message");
        assert_eq!(message, "Nome is required.");
    }

    #[test]
    fn invalid_tags_are_skipped() {
        let registry = registry_with("not a tag", BASE);
        assert_eq!(registry.locales().count(), 0);
    }

    #[test]
    fn unknown_locale_is_reported() {
        let registry = registry_with("en", BASE);
        let ctx = ValidationContext::new("Ad");
        let err = registry.message_in("tr", "required", &ctx).expect_err("missing");
        assert!(matches!(err, RegistryError::MissingLocale(locale) if locale == "tr"));
        assert!(registry.template("tr", Rule::Required).is_none());
    }

    #[test]
    fn set_locale_normalizes_tag() {
        let mut registry = LocaleRegistry::new();
        assert_eq!(registry.config().locale, "tr");
        registry.set_locale("EN").expect("locale");
        assert_eq!(registry.config().locale, "en");
        assert!(registry.set_locale("").is_err());
    }
}

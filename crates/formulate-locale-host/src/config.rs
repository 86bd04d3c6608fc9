use formulate_locale_core::{LocaleTag, Rule};
use serde::Deserialize;

use crate::error::RegistryResult;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Locale used by [`crate::LocaleRegistry::message`].
    pub locale: String,
    /// Rule whose message is shown when the requested rule has none.
    pub fallback_rule: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            locale: "tr".to_string(),
            fallback_rule: "default".to_string(),
        }
    }
}

impl HostConfig {
    pub fn from_toml_str(contents: &str) -> RegistryResult<Self> {
        let config: HostConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> RegistryResult<()> {
        LocaleTag::parse(&self.locale)?;
        Rule::parse(&self.fallback_rule)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::HostConfig;
    use crate::RegistryError;
    use formulate_locale_core::CoreError;

    #[test]
    fn default_values_are_stable() {
        let config = HostConfig::default();
        assert_eq!(config.locale, "tr");
        assert_eq!(config.fallback_rule, "default");
    }

    #[test]
    fn loads_from_toml() {
        let config = HostConfig::from_toml_str("locale = \"en-GB\"\n").expect("config");
        assert_eq!(config.locale, "en-GB");
        assert_eq!(config.fallback_rule, "default");
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = HostConfig::from_toml_str("").expect("config");
        assert_eq!(config, HostConfig::default());
    }

    #[test]
    fn rejects_unknown_fallback_rule() {
        let err = HostConfig::from_toml_str("fallback_rule = \"nope\"\n")
            .expect_err("unknown rule should fail");
        match err {
            RegistryError::Core(CoreError::Unsupported(_)) => {}
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_invalid_locale() {
        let err = HostConfig::from_toml_str("locale = \"\"\n").expect_err("empty locale");
        assert!(matches!(err, RegistryError::Core(CoreError::InvalidInput(_))));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = HostConfig::from_toml_str("locale = ").expect_err("bad toml");
        assert!(matches!(err, RegistryError::Toml(_)));
    }
}

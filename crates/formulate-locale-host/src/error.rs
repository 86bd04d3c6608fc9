use formulate_locale_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("locale {0} is not registered")]
    MissingLocale(String),
    #[error("no message for rule {rule} in locale {locale}")]
    MissingRule { locale: String, rule: String },
    #[error("invalid validation context: {0}")]
    InvalidContext(&'static str),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type RegistryResult<T> = Result<T, RegistryError>;

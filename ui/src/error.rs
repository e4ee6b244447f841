//! Error types for the loading and configuration seams.
//!
//! Nothing here reaches the rendered page: callers log the error and fall
//! back (primary-language table, default config).

use thiserror::Error;

use crate::i18n::LanguageCode;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("unsupported language tag `{0}`")]
    UnsupportedLanguage(String),

    #[error("no translation source for `{0}`")]
    MissingSource(LanguageCode),

    #[error("translation source for `{lang}` is not valid UTF-8")]
    Encoding { lang: LanguageCode },

    #[error("failed to parse translations for `{lang}`: {details}")]
    Parse { lang: LanguageCode, details: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid site configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("preference storage unavailable")]
    Unavailable,

    #[error("preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference file is corrupt: {0}")]
    Json(#[from] serde_json::Error),
}

//! Internationalization (i18n) support for `greensun-ui`.
//!
//! This module wires together:
//! - `fluent` (message parsing + formatting, one bundle per language)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed` (OS / browser locale requesters, used for first-visit detection)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   pl/greensun-ui.ftl   (primary/fallback/reference)
//!   en/greensun-ui.ftl
//!   fr/greensun-ui.ftl
//! ```
//!
//! Runtime shape:
//! - [`LanguageStore`] owns the active [`LanguageCode`] and the loaded
//!   [`TranslationTable`]. It is created once and handed to whoever needs it;
//!   there is no global loader.
//! - Dependents implement [`LanguageSubscriber`] and register with the store.
//!   A language switch notifies all of them in one synchronous pass.
//! - Until [`load_tables`] finishes, `set_language` calls are parked
//!   (latest wins) and replayed once the store is marked ready.
//!
//! To add a key: add it to `pl/greensun-ui.ftl` first, then to every other
//! locale. `tests/i18n_missing_keys.rs` fails when a locale lags behind.
//!
//! Markup is allowed inside values (`<strong>`, `<br>`); whether it is
//! rendered as markup is decided by the bound element's kind, never by the
//! string itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::error::I18nError;

pub mod binder;
pub mod form_messages;
pub mod source;
pub mod store;
pub mod table;

pub use binder::{
    Binding, BoundElement, ContentBinder, ElementKind, PageMeta, META_DESCRIPTION_KEY,
    META_KEYWORDS_KEY, META_TITLE_KEY, SUBJECT_PLACEHOLDER_KEY,
};
pub use form_messages::{
    ContactDraft, ContactField, FormMessages, MESSAGE_MIN_CHARS, NAME_MIN_CHARS,
};
pub use source::{load_tables, EmbeddedSource, TableSource};
pub use store::{LanguageChange, LanguageStore, LanguageSubscriber, LanguageUpdate};
pub use table::{LanguageTable, TranslationTable};

/// Fluent "domain" (matches the crate and the per-locale FTL filename).
pub const DOMAIN: &str = "greensun-ui";

/// Supported site languages. `Pl` is the primary language: its table is the
/// reference and the fallback for missing keys in the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    Pl,
    En,
    Fr,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 3] = [LanguageCode::Pl, LanguageCode::En, LanguageCode::Fr];
    pub const PRIMARY: LanguageCode = LanguageCode::Pl;

    pub fn as_str(self) -> &'static str {
        match self {
            LanguageCode::Pl => "pl",
            LanguageCode::En => "en",
            LanguageCode::Fr => "fr",
        }
    }

    pub fn is_primary(self) -> bool {
        self == Self::PRIMARY
    }

    /// Exact match on a stored or user-selected tag (`"pl"`, `"en"`, `"fr"`).
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.as_str() == tag)
    }

    /// Match on the primary subtag of a BCP 47 locale (`"fr-CA"` -> `Fr`).
    pub fn from_locale(locale: &str) -> Option<Self> {
        let primary = locale.split(['-', '_']).next()?.to_ascii_lowercase();
        Self::parse(&primary)
    }

    pub fn langid(self) -> LanguageIdentifier {
        // All three tags are plain ISO 639-1 codes, so parsing cannot fail.
        self.as_str().parse().unwrap_or_default()
    }

    /// CSS class of the flag icon in the language switcher.
    pub fn flag_class(self) -> String {
        format!("flag {}", self.as_str())
    }

    /// Switcher button text (`"PL"`).
    pub fn short_label(self) -> String {
        self.as_str().to_ascii_uppercase()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| I18nError::UnsupportedLanguage(s.to_string()))
    }
}

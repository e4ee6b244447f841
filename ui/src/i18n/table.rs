//! Per-language Fluent bundles and the fallback-aware lookup over them.

use std::collections::HashMap;
use std::fmt;

use fluent::{FluentBundle, FluentResource};

use super::LanguageCode;
use crate::error::I18nError;

/// One language's messages.
pub struct LanguageTable {
    code: LanguageCode,
    bundle: FluentBundle<FluentResource>,
}

impl LanguageTable {
    /// Parse an FTL source. Any syntax error rejects the whole file so a
    /// half-parsed table never shadows the primary fallback.
    pub fn parse(code: LanguageCode, source: impl Into<String>) -> Result<Self, I18nError> {
        let resource = FluentResource::try_new(source.into()).map_err(|(_, errors)| {
            I18nError::Parse {
                lang: code,
                details: format!("{errors:?}"),
            }
        })?;

        let mut table = Self::empty(code);
        table
            .bundle
            .add_resource(resource)
            .map_err(|errors| I18nError::Parse {
                lang: code,
                details: format!("{errors:?}"),
            })?;
        Ok(table)
    }

    pub fn empty(code: LanguageCode) -> Self {
        let mut bundle = FluentBundle::new(vec![code.langid()]);
        // Values are written straight into the page; no bidi isolation marks.
        bundle.set_use_isolating(false);
        Self { code, bundle }
    }

    pub fn code(&self) -> LanguageCode {
        self.code
    }

    pub fn contains(&self, key: &str) -> bool {
        self.bundle.has_message(key)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let message = self.bundle.get_message(key)?;
        let pattern = message.value()?;

        let mut errors = Vec::new();
        let value = self.bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            tracing::warn!(lang = %self.code, key, ?errors, "message formatted with errors");
        }
        Some(value.into_owned())
    }
}

impl fmt::Debug for LanguageTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageTable")
            .field("code", &self.code)
            .finish_non_exhaustive()
    }
}

/// All loaded languages. A language without its own table (failed load)
/// reads from the primary table.
#[derive(Default)]
pub struct TranslationTable {
    tables: HashMap<LanguageCode, LanguageTable>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, table: LanguageTable) {
        self.tables.insert(table.code(), table);
    }

    pub fn with(mut self, table: LanguageTable) -> Self {
        self.insert(table);
        self
    }

    pub fn has_language(&self, code: LanguageCode) -> bool {
        self.tables.contains_key(&code)
    }

    /// Value for `key` in `code`, falling back to the primary language.
    pub fn lookup(&self, code: LanguageCode, key: &str) -> Option<String> {
        let own = self.tables.get(&code).and_then(|table| table.get(key));
        if own.is_some() || code.is_primary() {
            return own;
        }
        self.tables
            .get(&LanguageCode::PRIMARY)
            .and_then(|table| table.get(key))
    }

    /// Value from `code`'s own table only, without the primary fallback.
    pub fn lookup_own(&self, code: LanguageCode, key: &str) -> Option<String> {
        self.tables.get(&code)?.get(key)
    }

    /// Like [`lookup`](Self::lookup) but echoes the key when nothing resolves.
    pub fn translate(&self, code: LanguageCode, key: &str) -> String {
        self.lookup(code, key).unwrap_or_else(|| key.to_string())
    }
}

impl fmt::Debug for TranslationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut loaded: Vec<_> = self.tables.keys().collect();
        loaded.sort();
        f.debug_struct("TranslationTable")
            .field("loaded", &loaded)
            .finish()
    }
}

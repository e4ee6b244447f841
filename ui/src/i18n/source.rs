//! Where translation tables come from, and the one-shot async load.

use std::future::Future;

use futures::future::join_all;
use rust_embed::Embed;

use super::table::{LanguageTable, TranslationTable};
use super::{LanguageCode, DOMAIN};
use crate::error::I18nError;

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Supplies the raw FTL text for a language.
pub trait TableSource {
    fn fetch(&self, code: LanguageCode) -> impl Future<Output = Result<String, I18nError>>;
}

/// Serves the `.ftl` files compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    pub fn path(code: LanguageCode) -> String {
        format!("{}/{DOMAIN}.ftl", code.as_str())
    }

    /// Locale folders present in the embedded assets.
    pub fn available_languages() -> Vec<LanguageCode> {
        let mut langs: Vec<_> = Localizations::iter()
            .filter_map(|path| path.split('/').next().and_then(LanguageCode::parse))
            .collect();
        langs.sort();
        langs.dedup();
        langs
    }
}

impl TableSource for EmbeddedSource {
    async fn fetch(&self, code: LanguageCode) -> Result<String, I18nError> {
        let file = Localizations::get(&Self::path(code)).ok_or(I18nError::MissingSource(code))?;
        String::from_utf8(file.data.into_owned()).map_err(|_| I18nError::Encoding { lang: code })
    }
}

/// Fetch and parse every supported language, one attempt each.
///
/// A language that fails is logged and left out of the table, so its
/// lookups read from the primary language for the rest of the session. A
/// failed primary language leaves an empty primary table (keys echo).
pub async fn load_tables<S: TableSource>(source: &S) -> TranslationTable {
    let fetches = LanguageCode::ALL.into_iter().map(move |code| async move {
        let parsed = source
            .fetch(code)
            .await
            .and_then(|raw| LanguageTable::parse(code, raw));
        (code, parsed)
    });

    let mut tables = TranslationTable::new();
    for (code, parsed) in join_all(fetches).await {
        match parsed {
            Ok(table) => {
                tracing::debug!(lang = %code, "translations loaded");
                tables.insert(table);
            }
            Err(err) if code.is_primary() => {
                tracing::error!(lang = %code, %err, "primary translations failed to load");
                tables.insert(LanguageTable::empty(code));
            }
            Err(err) => {
                tracing::error!(
                    lang = %code,
                    %err,
                    "translations failed to load; using {} instead",
                    LanguageCode::PRIMARY
                );
            }
        }
    }
    tables
}

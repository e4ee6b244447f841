//! The active language, its tables, and who to tell when it changes.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::table::TranslationTable;
use super::LanguageCode;
use crate::config::I18nConfig;
use crate::core::platform::LocaleSignal;
use crate::core::storage::PreferenceStore;

/// What every subscriber sees during one notification pass.
#[derive(Debug, Clone, Copy)]
pub struct LanguageChange<'a> {
    pub code: LanguageCode,
    pub previous: LanguageCode,
    pub tables: &'a TranslationTable,
}

pub trait LanguageSubscriber {
    fn language_changed(&mut self, change: &LanguageChange<'_>);
}

impl<F> LanguageSubscriber for F
where
    F: FnMut(&LanguageChange<'_>),
{
    fn language_changed(&mut self, change: &LanguageChange<'_>) {
        self(change)
    }
}

pub type SharedSubscriber = Rc<RefCell<dyn LanguageSubscriber>>;

/// Result of a `set_language` call. Callers may ignore it; rejected input
/// is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageUpdate {
    /// Active language set, persisted and broadcast.
    Applied,
    /// Tables still loading; the call replaces any earlier parked one.
    Deferred,
    /// Not a supported language tag.
    Ignored,
}

pub struct LanguageStore {
    current: LanguageCode,
    tables: Option<TranslationTable>,
    pending: Option<LanguageCode>,
    preferences: Box<dyn PreferenceStore>,
    preference_key: String,
    detection_default: LanguageCode,
    subscribers: Vec<SharedSubscriber>,
}

impl LanguageStore {
    pub fn new(preferences: Box<dyn PreferenceStore>, config: &I18nConfig) -> Self {
        Self {
            current: LanguageCode::PRIMARY,
            tables: None,
            pending: None,
            preferences,
            preference_key: config.preference_key.clone(),
            detection_default: config.detection_default,
            subscribers: Vec::new(),
        }
    }

    pub fn current(&self) -> LanguageCode {
        self.current
    }

    pub fn is_ready(&self) -> bool {
        self.tables.is_some()
    }

    /// The parked call waiting for the readiness gate, if any.
    pub fn pending(&self) -> Option<LanguageCode> {
        self.pending
    }

    pub fn tables(&self) -> Option<&TranslationTable> {
        self.tables.as_ref()
    }

    pub fn preferences(&self) -> &dyn PreferenceStore {
        self.preferences.as_ref()
    }

    /// Register a dependent. Subscribers are notified in registration order.
    pub fn subscribe(&mut self, subscriber: SharedSubscriber) {
        self.subscribers.push(subscriber);
    }

    pub fn on_change(&mut self, callback: impl FnMut(&LanguageChange<'_>) + 'static) {
        self.subscribe(Rc::new(RefCell::new(callback)));
    }

    /// Active-language string for `key`; echoes the key when unresolved or
    /// before tables are loaded.
    pub fn translate(&self, key: &str) -> String {
        match &self.tables {
            Some(tables) => tables.translate(self.current, key),
            None => key.to_string(),
        }
    }

    pub fn set_language(&mut self, tag: &str) -> LanguageUpdate {
        match LanguageCode::parse(tag) {
            Some(code) => self.select(code),
            None => {
                tracing::debug!(tag, "ignoring unsupported language");
                LanguageUpdate::Ignored
            }
        }
    }

    pub fn select(&mut self, code: LanguageCode) -> LanguageUpdate {
        if self.tables.is_none() {
            if let Some(superseded) = self.pending.replace(code) {
                tracing::debug!(%superseded, %code, "parked language switch superseded");
            }
            return LanguageUpdate::Deferred;
        }
        self.apply(code);
        LanguageUpdate::Applied
    }

    /// Open the readiness gate and replay the parked switch. Returns the
    /// language applied by the replay.
    pub fn finish_loading(&mut self, tables: TranslationTable) -> Option<LanguageCode> {
        self.tables = Some(tables);
        let pending = self.pending.take()?;
        self.apply(pending);
        Some(pending)
    }

    /// Stored preference if valid, else the locale signal, else the
    /// configured default. The result goes through [`select`](Self::select),
    /// so before loading it is parked like any other switch.
    pub fn detect_initial_language(&mut self, locale: &dyn LocaleSignal) -> LanguageCode {
        let detected = self.detect(locale);
        self.select(detected);
        detected
    }

    fn detect(&self, locale: &dyn LocaleSignal) -> LanguageCode {
        if let Some(saved) = self
            .preferences
            .get(&self.preference_key)
            .and_then(|tag| LanguageCode::parse(&tag))
        {
            return saved;
        }
        locale
            .preferred_locale()
            .and_then(|tag| LanguageCode::from_locale(&tag))
            .unwrap_or(self.detection_default)
    }

    fn apply(&mut self, code: LanguageCode) {
        let previous = std::mem::replace(&mut self.current, code);
        if let Err(err) = self.preferences.set(&self.preference_key, code.as_str()) {
            tracing::warn!(%err, lang = %code, "could not persist language preference");
        }

        let Some(tables) = self.tables.as_ref() else {
            return;
        };
        let change = LanguageChange {
            code,
            previous,
            tables,
        };
        tracing::debug!(%previous, %code, subscribers = self.subscribers.len(), "language changed");
        for subscriber in &self.subscribers {
            match subscriber.try_borrow_mut() {
                Ok(mut subscriber) => subscriber.language_changed(&change),
                Err(_) => {
                    debug_assert!(false, "subscriber re-entered during language change");
                    tracing::warn!(lang = %code, "subscriber busy during language change");
                }
            }
        }
    }
}

impl fmt::Debug for LanguageStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageStore")
            .field("current", &self.current)
            .field("ready", &self.is_ready())
            .field("pending", &self.pending)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

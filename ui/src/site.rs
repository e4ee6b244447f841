//! Page-wide wiring: one language store, the page's bound content and the
//! gallery carousel, created together and shared through the component tree.
//!
//! The launcher calls [`use_site_provider`] once at the root. Components call
//! [`use_site`], which also subscribes them to language switches.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use dioxus::prelude::*;

use crate::carousel::{Carousel, CarouselCatalog};
use crate::config::SiteConfig;
use crate::core::platform::{self, LocaleSignal, SystemLocale};
use crate::core::storage::{platform_preferences, PreferenceStore};
use crate::i18n::{
    load_tables, Binding, ContentBinder, EmbeddedSource, FormMessages, LanguageChange,
    LanguageCode, LanguageStore, LanguageUpdate, TableSource, TranslationTable,
};

#[derive(Clone)]
pub struct Site {
    store: Rc<RefCell<LanguageStore>>,
    binder: Rc<RefCell<ContentBinder>>,
    carousel: Rc<RefCell<Carousel>>,
}

impl PartialEq for Site {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl Site {
    /// Build the store and its dependents. Tables are not loaded yet: the
    /// binder is empty and carousel captions echo their keys until
    /// [`finish_loading`](Self::finish_loading).
    pub fn new(
        preferences: Box<dyn PreferenceStore>,
        config: &SiteConfig,
        viewport_width: f64,
        bindings: &[Binding],
    ) -> Self {
        let mut store = LanguageStore::new(preferences, &config.i18n);

        let binder = Rc::new(RefCell::new(ContentBinder::from_bindings(bindings)));
        let carousel = Rc::new(RefCell::new(Carousel::new(
            CarouselCatalog::default(),
            store.current(),
            &TranslationTable::new(),
            viewport_width,
            &config.carousel,
        )));
        store.subscribe(binder.clone());
        store.subscribe(carousel.clone());

        Self {
            store: Rc::new(RefCell::new(store)),
            binder,
            carousel,
        }
    }

    pub fn language(&self) -> LanguageCode {
        self.store.borrow().current()
    }

    pub fn is_ready(&self) -> bool {
        self.store.borrow().is_ready()
    }

    pub fn select(&self, code: LanguageCode) -> LanguageUpdate {
        self.store.borrow_mut().select(code)
    }

    pub fn set_language(&self, tag: &str) -> LanguageUpdate {
        self.store.borrow_mut().set_language(tag)
    }

    pub fn detect_initial_language(&self, locale: &dyn LocaleSignal) -> LanguageCode {
        self.store.borrow_mut().detect_initial_language(locale)
    }

    /// Register an extra listener, called after the binder and the carousel.
    pub fn on_change(&self, callback: impl FnMut(&LanguageChange<'_>) + 'static) {
        self.store.borrow_mut().on_change(callback);
    }

    /// Open the readiness gate. With nothing parked the current language is
    /// applied anyway, so bound content is always filled after loading.
    pub fn finish_loading(&self, tables: TranslationTable) -> LanguageCode {
        let mut store = self.store.borrow_mut();
        match store.finish_loading(tables) {
            Some(applied) => applied,
            None => {
                let current = store.current();
                store.select(current);
                current
            }
        }
    }

    /// Fetch every table from `source` and open the gate.
    pub async fn load_from(&self, source: &impl TableSource) -> LanguageCode {
        let tables = load_tables(source).await;
        self.finish_loading(tables)
    }

    pub fn translate(&self, key: &str) -> String {
        self.store.borrow().translate(key)
    }

    pub fn binder(&self) -> Ref<'_, ContentBinder> {
        self.binder.borrow()
    }

    pub fn carousel(&self) -> Ref<'_, Carousel> {
        self.carousel.borrow()
    }

    pub fn with_carousel<R>(&self, f: impl FnOnce(&mut Carousel) -> R) -> R {
        f(&mut self.carousel.borrow_mut())
    }

    pub fn form_messages(&self) -> FormMessages {
        let store = self.store.borrow();
        FormMessages::resolve(store.current(), store.tables())
    }
}

/// Bumped after every language switch; reading it re-renders the reader.
#[derive(Clone, Copy)]
pub struct SiteRevision(pub Signal<u64>);

/// Create the site for this page, provide it as context and start loading
/// the embedded tables. Call once, from the root component.
pub fn use_site_provider(bindings: &'static [Binding]) -> Site {
    let revision = use_context_provider(|| SiteRevision(Signal::new(0)));

    use_context_provider(move || {
        let site = Site::new(
            platform_preferences(),
            crate::config::site(),
            platform::viewport_width(),
            bindings,
        );

        let SiteRevision(mut counter) = revision;
        site.on_change(move |change: &LanguageChange<'_>| {
            document::eval(&format!(
                "document.documentElement.lang = '{}';",
                change.code
            ));
            counter += 1;
        });

        let detected = site.detect_initial_language(&SystemLocale);
        tracing::debug!(lang = %detected, "initial language");

        let loader = site.clone();
        spawn(async move {
            let applied = loader.load_from(&EmbeddedSource).await;
            tracing::debug!(lang = %applied, "translations ready");
        });

        site
    })
}

pub fn use_site() -> Site {
    let SiteRevision(revision) = use_context::<SiteRevision>();
    // Subscribe the caller to language switches.
    let _ = revision();
    use_context::<Site>()
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::core::platform::FixedLocale;
    use crate::core::storage::MemoryPreferences;
    use crate::i18n::META_TITLE_KEY;

    const BINDINGS: &[Binding] = &[
        Binding::markup("hero-title"),
        Binding::text("hero-cta"),
        Binding::placeholder("form-email"),
        Binding::text("subject-placeholder"),
    ];

    const DESKTOP: f64 = 1440.0;

    fn site(prefs: MemoryPreferences) -> Site {
        Site::new(Box::new(prefs), &SiteConfig::default(), DESKTOP, BINDINGS)
    }

    #[test]
    fn content_is_empty_until_loaded() {
        let site = site(MemoryPreferences::new());
        assert!(!site.is_ready());
        assert_eq!(site.binder().text("hero-cta"), "");
        assert_eq!(
            site.carousel().engine().active_item().map(|item| item.title.clone()),
            Some("gallery-item-3-title".to_string())
        );
    }

    #[test]
    fn boot_applies_detected_language_everywhere() {
        let site = site(MemoryPreferences::new());
        assert_eq!(
            site.detect_initial_language(&FixedLocale::new("fr-FR")),
            LanguageCode::Fr
        );
        assert_eq!(block_on(site.load_from(&EmbeddedSource)), LanguageCode::Fr);

        assert_eq!(site.language(), LanguageCode::Fr);
        assert_eq!(site.binder().text("hero-cta"), "Demander un devis");
        assert_eq!(site.binder().subject_label(None), "Choisissez un sujet");
        assert_eq!(site.carousel().language(), LanguageCode::Fr);
        assert_eq!(
            site.carousel().engine().active_item().map(|item| item.title.clone()),
            Some("Fermes PV terrestres".to_string())
        );
        assert_eq!(site.form_messages().sent, "Envoyé !");
    }

    #[test]
    fn loading_without_detection_still_fills_content() {
        let site = site(MemoryPreferences::new());
        assert_eq!(block_on(site.load_from(&EmbeddedSource)), LanguageCode::Pl);
        assert_eq!(site.binder().text("hero-cta"), "Poproś o wycenę");
        assert!(site.binder().meta().title.is_some());
    }

    #[test]
    fn switcher_clicks_before_loading_are_replayed() {
        let site = site(MemoryPreferences::new());
        site.detect_initial_language(&FixedLocale::new("pl-PL"));
        assert_eq!(site.select(LanguageCode::En), LanguageUpdate::Deferred);

        block_on(site.load_from(&EmbeddedSource));
        assert_eq!(site.language(), LanguageCode::En);
        assert_eq!(site.binder().text("form-email"), "Email address");
    }

    #[test]
    fn extra_listeners_run_after_dependents() {
        let site = site(MemoryPreferences::new());
        block_on(site.load_from(&EmbeddedSource));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let binder = site.binder.clone();
        site.on_change(move |change: &LanguageChange<'_>| {
            sink.borrow_mut()
                .push((change.code, binder.borrow().meta().title.clone()));
        });

        assert_eq!(site.set_language("en"), LanguageUpdate::Applied);
        let expected = site.translate(META_TITLE_KEY);
        assert_eq!(*seen.borrow(), vec![(LanguageCode::En, Some(expected))]);
    }

    #[test]
    fn saved_preference_wins_over_locale() {
        let prefs = MemoryPreferences::new().with("preferred-language", "en");
        let site = site(prefs);
        site.detect_initial_language(&FixedLocale::new("fr-FR"));
        block_on(site.load_from(&EmbeddedSource));
        assert_eq!(site.translate("nav-contact"), "Contact");
        assert_eq!(site.binder().text("hero-cta"), "Request a quote");
    }
}

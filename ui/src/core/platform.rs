//! Platform signals read once at startup: viewport width and locale.

use unic_langid::LanguageIdentifier;

/// Width assumed when no browser window is available (native preview,
/// server rendering). Wide enough for the ring layout.
pub const FALLBACK_VIEWPORT_WIDTH: f64 = 1280.0;

/// Current viewport width in CSS pixels.
pub fn viewport_width() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|width| width.as_f64())
            .unwrap_or(FALLBACK_VIEWPORT_WIDTH)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        FALLBACK_VIEWPORT_WIDTH
    }
}

/// External hint for the visitor's preferred locale (browser or OS).
pub trait LocaleSignal {
    /// Most preferred BCP 47 tag, if the platform reports one.
    fn preferred_locale(&self) -> Option<String>;
}

/// Locale from `navigator.languages` (web) or the OS locale list (desktop).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLocale;

impl LocaleSignal for SystemLocale {
    fn preferred_locale(&self) -> Option<String> {
        requested_languages().first().map(ToString::to_string)
    }
}

/// A locale chosen up front; `None` behaves like a platform without a hint.
#[derive(Debug, Default, Clone)]
pub struct FixedLocale(pub Option<String>);

impl FixedLocale {
    pub fn new(tag: &str) -> Self {
        Self(Some(tag.to_string()))
    }
}

impl LocaleSignal for FixedLocale {
    fn preferred_locale(&self) -> Option<String> {
        self.0.clone()
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

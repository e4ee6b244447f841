//! Site configuration embedded from `greensun.toml`.
//!
//! The file is compiled in; a malformed file is logged and the built-in
//! defaults (which mirror the production site) are used instead.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::carousel::GALLERY_IMAGES;
use crate::error::ConfigError;
use crate::i18n::LanguageCode;

const EMBEDDED_CONFIG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/greensun.toml"));

static SITE_CONFIG: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::from_toml(EMBEDDED_CONFIG) {
    Ok(config) => config,
    Err(err) => {
        tracing::warn!(%err, "falling back to default site configuration");
        SiteConfig::default()
    }
});

/// Shared, parsed-once configuration.
pub fn site() -> &'static SiteConfig {
    &SITE_CONFIG
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub carousel: CarouselConfig,
    pub i18n: I18nConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CarouselConfig {
    pub mobile_breakpoint_px: f64,
    pub ring_slots: usize,
    pub scroll_repeats: usize,
    pub scroll_padding: usize,
    pub scroll_tile_width_px: f64,
    pub settle_delays_ms: Vec<u32>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 1024.0,
            ring_slots: 5,
            scroll_repeats: 3,
            scroll_padding: 0,
            scroll_tile_width_px: 304.0,
            settle_delays_ms: vec![0, 300],
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct I18nConfig {
    /// Key under which the chosen language is persisted.
    pub preference_key: String,
    /// Language picked when neither a stored preference nor the locale
    /// signal names a supported non-default language.
    pub detection_default: LanguageCode,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            preference_key: "preferred-language".to_string(),
            detection_default: LanguageCode::En,
        }
    }
}

impl SiteConfig {
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.ring_slots < GALLERY_IMAGES.len() {
            return Err(ConfigError::Invalid(format!(
                "carousel.ring_slots must be at least {} (one per gallery item)",
                GALLERY_IMAGES.len()
            )));
        }
        if self.carousel.scroll_repeats == 0 {
            return Err(ConfigError::Invalid(
                "carousel.scroll_repeats must be at least 1".into(),
            ));
        }
        if self.i18n.preference_key.trim().is_empty() {
            return Err(ConfigError::Invalid("i18n.preference_key is empty".into()));
        }
        Ok(())
    }
}

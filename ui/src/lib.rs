//! Shared UI crate for the GreenSun site. Language handling, the gallery
//! carousel and every view live here; platform crates only launch them.

pub mod carousel;
pub mod config;
pub mod core;
pub mod error;
pub mod i18n;
pub mod site;
pub mod views;

pub mod components {
    // Header with section links and the language switcher (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    pub mod contact_form;
    pub use contact_form::ContactForm;

    pub mod gallery;
    pub use gallery::Gallery;
}

pub use site::{use_site, use_site_provider, Site};

use dioxus::prelude::*;

use crate::components::{ContactForm, Gallery};
use crate::i18n::{Binding, ContentBinder, ElementKind};
use crate::site::use_site;

/// Every key-tagged element on the landing page, with how its value is
/// written. The navbar, gallery and contact form read from the same list.
pub const PAGE_BINDINGS: &[Binding] = &[
    Binding::text("nav-home"),
    Binding::text("nav-about"),
    Binding::text("nav-services"),
    Binding::text("nav-gallery"),
    Binding::text("nav-contact"),
    Binding::title("nav-language-label"),
    Binding::markup("hero-title"),
    Binding::text("hero-subtitle"),
    Binding::text("hero-cta"),
    Binding::text("about-title"),
    Binding::markup("about-text"),
    Binding::text("services-title"),
    Binding::text("service-ground-title"),
    Binding::text("service-ground-text"),
    Binding::text("service-floating-title"),
    Binding::text("service-floating-text"),
    Binding::text("service-roofs-title"),
    Binding::text("service-roofs-text"),
    Binding::text("gallery-title"),
    Binding::text("gallery-subtitle"),
    Binding::title("gallery-prev"),
    Binding::title("gallery-next"),
    Binding::text("contact-title"),
    Binding::text("contact-text"),
    Binding::placeholder("form-firstName"),
    Binding::placeholder("form-email"),
    Binding::placeholder("form-message"),
    Binding::markup("form-privacy"),
    Binding::text("form-submit"),
    Binding::text("subject-placeholder"),
    Binding::text("subject-ground"),
    Binding::text("subject-floating"),
    Binding::text("subject-roofs"),
    Binding::text("subject-other"),
    Binding::text("footer-rights"),
];

const SERVICES: [(&str, &str, &str); 3] = [
    ("ground", "service-ground-title", "service-ground-text"),
    ("floating", "service-floating-title", "service-floating-text"),
    ("roofs", "service-roofs-title", "service-roofs-text"),
];

/// Render a `Text` or `Markup` element. Markup is only ever injected for
/// elements declared as such.
pub(crate) fn bound_content(binder: &ContentBinder, key: &str) -> Element {
    let content = binder.text(key);
    let markup = binder
        .elements()
        .iter()
        .any(|element| element.key() == key && element.kind() == ElementKind::Markup);
    if markup {
        rsx! { span { dangerous_inner_html: "{content}" } }
    } else {
        rsx! { "{content}" }
    }
}

#[component]
pub fn Home() -> Element {
    let site = use_site();
    let binder = site.binder();
    tracing::debug!(lang = %site.language(), ready = site.is_ready(), "home render");

    let services = SERVICES.map(|(id, title, text)| (id, binder.text(title), binder.text(text)));

    rsx! {
        section { id: "home", class: "hero",
            h1 { class: "hero__title", {bound_content(&binder, "hero-title")} }
            p { class: "hero__subtitle", {bound_content(&binder, "hero-subtitle")} }
            a { class: "button button--primary", href: "#contact", {bound_content(&binder, "hero-cta")} }
        }

        section { id: "about", class: "section about",
            h2 { {bound_content(&binder, "about-title")} }
            p { {bound_content(&binder, "about-text")} }
        }

        section { id: "services", class: "section services",
            h2 { {bound_content(&binder, "services-title")} }
            div { class: "services__grid",
                for (id, title, text) in services {
                    article { key: "{id}", class: "service-card service-card--{id}",
                        h3 { "{title}" }
                        p { "{text}" }
                    }
                }
            }
        }

        Gallery {}

        ContactForm {}

        footer { class: "footer",
            p { "© GreenSun. " {bound_content(&binder, "footer-rights")} }
        }
    }
}

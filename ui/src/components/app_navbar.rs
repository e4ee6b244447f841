use dioxus::prelude::*;

use crate::i18n::LanguageCode;
use crate::site::use_site;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// In-page anchors and their label keys, in menu order.
const NAV_LINKS: [(&str, &str); 5] = [
    ("home", "nav-home"),
    ("about", "nav-about"),
    ("services", "nav-services"),
    ("gallery", "nav-gallery"),
    ("contact", "nav-contact"),
];

/// Site header: brand, section links and the language switcher.
///
/// The switcher shows the active language's flag and short label; picking
/// another language goes through the shared store, so the whole page
/// (including this header) re-renders from the new table.
#[component]
pub fn AppNavbar() -> Element {
    let site = use_site();
    let active = site.language();
    let mut menu_open = use_signal(|| false);

    let (links, switcher_label) = {
        let binder = site.binder();
        let links = NAV_LINKS.map(|(anchor, key)| (anchor, binder.text(key)));
        (links, binder.text("nav-language-label"))
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                a { class: "navbar__brand", href: "#home",
                    span { class: "navbar__brand-spark", aria_hidden: "true" }
                    span { class: "navbar__brand-mark", "GreenSun" }
                }

                nav { class: "navbar__links",
                    for (anchor, label) in links {
                        a { key: "{anchor}", class: "navbar__link", href: "#{anchor}", "{label}" }
                    }
                }

                div { class: "navbar__locale",
                    button {
                        class: "navbar__locale-current",
                        r#type: "button",
                        title: "{switcher_label}",
                        aria_expanded: "{menu_open()}",
                        onclick: move |_| menu_open.toggle(),
                        span { class: active.flag_class(), aria_hidden: "true" }
                        span { class: "navbar__locale-code", "{active.short_label()}" }
                    }
                    if menu_open() {
                        ul { class: "navbar__locale-menu", role: "listbox",
                            for code in LanguageCode::ALL {
                                li { key: "{code}",
                                    button {
                                        class: if code == active { "navbar__locale-option is-active" } else { "navbar__locale-option" },
                                        r#type: "button",
                                        role: "option",
                                        aria_selected: "{code == active}",
                                        onclick: {
                                            let site = site.clone();
                                            move |_| {
                                                let outcome = site.select(code);
                                                tracing::debug!(lang = %code, ?outcome, "language picked");
                                                menu_open.set(false);
                                            }
                                        },
                                        span { class: code.flag_class(), aria_hidden: "true" }
                                        span { "{code.short_label()}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

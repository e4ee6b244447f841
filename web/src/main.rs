use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::views::{Home, PAGE_BINDINGS};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::use_site_provider(PAGE_BINDINGS);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        PageMeta {}
        Router::<Route> {}
    }
}

/// `<title>` and the description/keywords meta tags, in the active language.
#[component]
fn PageMeta() -> Element {
    let site = ui::use_site();
    let meta = site.binder().meta().clone();
    let title = meta.title.unwrap_or_else(|| "GreenSun".to_string());

    rsx! {
        document::Title { "{title}" }
        if let Some(description) = meta.description {
            document::Meta { name: "description", content: description }
        }
        if let Some(keywords) = meta.keywords {
            document::Meta { name: "keywords", content: keywords }
        }
    }
}

/// Shared header above every routed page.
#[component]
fn SiteLayout() -> Element {
    rsx! {
        AppNavbar {}
        main { class: "page", Outlet::<Route> {} }
    }
}

use std::rc::Rc;

use dioxus::html::geometry::PixelsRect;
use dioxus::prelude::*;

use crate::carousel::{
    centering_scroll_left, CarouselAction, LayoutMode, NavKey, ScrollGeometry, ScrollRequest, Span,
};
use crate::core::timing::{sleep_ms, SettleTimers};
use crate::site::use_site;

const GALLERY_CSS: Asset = asset!("/assets/styling/gallery.css");

const TRACK_ID: &str = "gallery-track";

fn tile_id(slot: usize) -> String {
    format!("gallery-tile-{slot}")
}

type Mounted = Option<Rc<MountedData>>;

const PAGE_ARROWS_JS: &str = r#"
document.addEventListener('keydown', (e) => {
    const target = e.target;
    if (target && (target.isContentEditable || ['INPUT', 'TEXTAREA', 'SELECT'].includes(target.tagName))) return;
    if (e.key !== 'ArrowLeft' && e.key !== 'ArrowRight') return;
    e.preventDefault();
    dioxus.send(e.key);
});
"#;

fn scroll_end_js() -> String {
    format!(
        "document.getElementById('{TRACK_ID}')?.addEventListener('scrollend', () => dioxus.send(true));"
    )
}

/// The projects carousel.
///
/// Wide viewports get the fixed five-slot ring driven by arrows, clicks
/// and the page-level arrow keys. Narrow viewports get a snapping
/// horizontal strip; the focused tile is re-measured after each scroll
/// burst settles and again when the snap ends.
#[component]
pub fn Gallery() -> Element {
    let site = use_site();
    let redraw = use_signal(|| 0u64);
    let _ = redraw();

    let settle = use_hook(|| SettleTimers::new(&crate::config::site().carousel.settle_delays_ms));
    let mut track: Signal<Mounted> = use_signal(|| None);
    let slot_count = site.carousel().engine().slot_count();
    let mut tiles: Signal<Vec<Mounted>> = use_signal(|| vec![None; slot_count]);

    let (mode, active_slot, slots, dots, initial) = {
        let carousel = site.carousel();
        let engine = carousel.engine();
        (
            engine.mode(),
            engine.active_slot(),
            engine.tiles().to_vec(),
            carousel.dots().states().to_vec(),
            carousel.initial_scroll(),
        )
    };
    let (title, subtitle, prev_label, next_label) = {
        let binder = site.binder();
        (
            binder.text("gallery-title"),
            binder.text("gallery-subtitle"),
            binder.text("gallery-prev"),
            binder.text("gallery-next"),
        )
    };

    let is_ring = mode == LayoutMode::Ring;

    // Ring arrows answer anywhere on the page except inside form fields.
    use_future({
        let site = site.clone();
        move || {
            let site = site.clone();
            async move {
                if !is_ring {
                    return;
                }
                let mut keys = document::eval(PAGE_ARROWS_JS);
                while let Ok(name) = keys.recv::<String>().await {
                    if let Some(key) = NavKey::from_key_name(&name) {
                        perform(site.with_carousel(|carousel| carousel.key(key)), redraw);
                    }
                }
            }
        }
    });

    let on_scroll = {
        let site = site.clone();
        move |_: ScrollEvent| {
            if is_ring {
                return;
            }
            for (delay, lane, ticket) in settle.restart() {
                let site = site.clone();
                spawn(async move {
                    sleep_ms(delay).await;
                    if !lane.is_current(ticket) {
                        return;
                    }
                    let geometry = measure(track(), tiles()).await;
                    perform(site.with_carousel(|carousel| carousel.scrolled(&geometry)), redraw);
                });
            }
        }
    };

    let on_track_mounted = {
        let site = site.clone();
        move |evt: MountedEvent| {
            track.set(Some(evt.data()));
            if let Some(request) = initial {
                spawn(async move {
                    // Let the tiles mount first.
                    sleep_ms(0).await;
                    center_without_animation(track(), tiles(), request.slot).await;
                });
            }
            if is_ring {
                return;
            }
            // Snap finished: re-measure without waiting for the settle pass.
            let site = site.clone();
            spawn(async move {
                let mut ends = document::eval(&scroll_end_js());
                while ends.recv::<bool>().await.is_ok() {
                    let geometry = measure(track(), tiles()).await;
                    perform(site.with_carousel(|carousel| carousel.scrolled(&geometry)), redraw);
                }
            });
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: GALLERY_CSS }

        section { id: "gallery", class: "section gallery",
            h2 { "{title}" }
            p { class: "gallery__subtitle", "{subtitle}" }

            div {
                class: if is_ring { "gallery__viewport gallery__viewport--ring" } else { "gallery__viewport gallery__viewport--scroll" },

                if is_ring {
                    button {
                        class: "gallery__arrow gallery__arrow--prev",
                        r#type: "button",
                        title: "{prev_label}",
                        aria_label: "{prev_label}",
                        onclick: {
                            let site = site.clone();
                            move |_| perform(site.with_carousel(|carousel| carousel.key(NavKey::Previous)), redraw)
                        },
                        "‹"
                    }
                }

                div {
                    id: TRACK_ID,
                    class: "gallery__track",
                    onscroll: on_scroll,
                    onmounted: on_track_mounted,

                    for (slot, tile) in slots.into_iter().enumerate() {
                        div {
                            key: "{slot}",
                            id: tile_id(slot),
                            class: tile_class(slot, active_slot, tile.payload().is_none()),
                            onmounted: move |evt: MountedEvent| {
                                if let Some(cell) = tiles.write().get_mut(slot) {
                                    *cell = Some(evt.data());
                                }
                            },
                            onclick: {
                                let site = site.clone();
                                move |_| perform(site.with_carousel(|carousel| carousel.click_tile(slot)), redraw)
                            },
                            if let Some(item) = tile.payload() {
                                img { src: item.image, alt: "{item.title}", loading: "lazy", draggable: "false" }
                                div { class: "gallery__caption",
                                    h3 { "{item.title}" }
                                    p { "{item.subtitle}" }
                                }
                            }
                        }
                    }
                }

                if is_ring {
                    button {
                        class: "gallery__arrow gallery__arrow--next",
                        r#type: "button",
                        title: "{next_label}",
                        aria_label: "{next_label}",
                        onclick: {
                            let site = site.clone();
                            move |_| perform(site.with_carousel(|carousel| carousel.key(NavKey::Next)), redraw)
                        },
                        "›"
                    }
                }
            }

            div { class: "gallery__dots",
                for (index, on) in dots.into_iter().enumerate() {
                    button {
                        key: "{index}",
                        class: if on { "gallery__dot is-active" } else { "gallery__dot" },
                        r#type: "button",
                        aria_label: "{index + 1}",
                        aria_current: "{on}",
                        onclick: {
                            let site = site.clone();
                            move |_| perform(site.with_carousel(|carousel| carousel.click_dot(index)), redraw)
                        },
                    }
                }
            }
        }
    }
}

fn tile_class(slot: usize, active_slot: usize, padding: bool) -> String {
    let mut class = format!("gallery__tile slot-{slot}");
    if padding {
        class.push_str(" gallery__tile--pad");
    } else if slot == active_slot {
        class.push_str(" is-active");
    }
    class
}

fn perform(action: CarouselAction, mut redraw: Signal<u64>) {
    match action {
        CarouselAction::Nothing => {}
        CarouselAction::Redraw => redraw += 1,
        // Dots follow once the scroll settles.
        CarouselAction::ScrollTo(request) => scroll_into_view(request),
    }
}

fn scroll_into_view(request: ScrollRequest) {
    let behavior = if request.smooth { "smooth" } else { "auto" };
    document::eval(&format!(
        "document.getElementById('{}')?.scrollIntoView({{ behavior: '{behavior}', inline: 'center', block: 'nearest' }});",
        tile_id(request.slot)
    ));
}

fn span_of(rect: &PixelsRect) -> Span {
    Span {
        left: rect.origin.x,
        width: rect.size.width,
    }
}

/// Client rects of the strip and every tile. Any missing measurement
/// yields an empty geometry, which the engine ignores.
async fn measure(track: Mounted, tiles: Vec<Mounted>) -> ScrollGeometry {
    let Some(track) = track else {
        return ScrollGeometry::default();
    };
    let Ok(container) = track.get_client_rect().await else {
        return ScrollGeometry::default();
    };

    let mut spans = Vec::with_capacity(tiles.len());
    for tile in &tiles {
        let Some(tile) = tile else {
            return ScrollGeometry::default();
        };
        match tile.get_client_rect().await {
            Ok(rect) => spans.push(span_of(&rect)),
            Err(err) => {
                tracing::debug!(?err, "tile not measurable");
                return ScrollGeometry::default();
            }
        }
    }

    ScrollGeometry {
        container: Some(span_of(&container)),
        tiles: spans,
    }
}

async fn center_without_animation(track: Mounted, tiles: Vec<Mounted>, slot: usize) {
    let (Some(track), Some(Some(tile))) = (track, tiles.get(slot).cloned()) else {
        return;
    };
    let (Ok(container), Ok(scrolled), Ok(rect)) = (
        track.get_client_rect().await,
        track.get_scroll_offset().await,
        tile.get_client_rect().await,
    ) else {
        tracing::debug!(slot, "initial centering skipped; strip not measurable");
        return;
    };

    let offset_left = rect.origin.x - container.origin.x + scrolled.x;
    let left = centering_scroll_left(offset_left, container.size.width, rect.size.width);
    document::eval(&format!(
        "const track = document.getElementById('{TRACK_ID}'); if (track) track.scrollLeft = {left};"
    ));
}

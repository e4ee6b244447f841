//! Gallery carousel: data provider, tile engine and indicator dots, wired
//! together behind one input surface.
//!
//! The view forwards raw input (arrow keys, tile clicks, dot clicks, scroll
//! measurements) to [`Carousel`] and acts on the returned
//! [`CarouselAction`]. Dots are re-derived after every engine change, and
//! captions are re-localized when the language store broadcasts a switch.

pub mod catalog;
pub mod dots;
pub mod engine;

pub use catalog::{CarouselCatalog, CarouselItem, GALLERY_IMAGES};
pub use dots::DotIndicators;
pub use engine::{
    centering_scroll_left, CarouselEngine, LayoutMode, ScrollGeometry, ScrollRequest, Span, Tile,
};

use crate::config::CarouselConfig;
use crate::i18n::{LanguageChange, LanguageCode, LanguageSubscriber, TranslationTable};

/// Directional input. Only the ring layout reacts to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Previous,
    Next,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` name.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

/// What the view should do after forwarding an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Nothing,
    Redraw,
    ScrollTo(ScrollRequest),
}

#[derive(Debug, Clone)]
pub struct Carousel {
    catalog: CarouselCatalog,
    engine: CarouselEngine,
    dots: DotIndicators,
    language: LanguageCode,
}

impl Carousel {
    pub fn new(
        catalog: CarouselCatalog,
        code: LanguageCode,
        tables: &TranslationTable,
        viewport_width: f64,
        config: &CarouselConfig,
    ) -> Self {
        let items = catalog.localized_items(code, tables);
        let engine = CarouselEngine::for_viewport(items, viewport_width, config);
        Self::from_engine(catalog, engine, code)
    }

    pub fn from_engine(catalog: CarouselCatalog, engine: CarouselEngine, code: LanguageCode) -> Self {
        let mut dots = DotIndicators::new(catalog.len());
        dots.render(engine.active_data_index());
        Self {
            catalog,
            engine,
            dots,
            language: code,
        }
    }

    pub fn engine(&self) -> &CarouselEngine {
        &self.engine
    }

    pub fn dots(&self) -> &DotIndicators {
        &self.dots
    }

    pub fn language(&self) -> LanguageCode {
        self.language
    }

    pub fn mode(&self) -> LayoutMode {
        self.engine.mode()
    }

    pub fn key(&mut self, key: NavKey) -> CarouselAction {
        let changed = match key {
            NavKey::Previous => self.engine.previous(),
            NavKey::Next => self.engine.next(),
        };
        self.sync(changed)
    }

    pub fn click_tile(&mut self, slot: usize) -> CarouselAction {
        match self.engine.mode() {
            LayoutMode::Ring => {
                let changed = self.engine.set_active_tile(slot);
                self.sync(changed)
            }
            LayoutMode::Scroll => {
                let has_data = self
                    .engine
                    .tiles()
                    .get(slot)
                    .and_then(Tile::data_index)
                    .is_some();
                if has_data && slot != self.engine.active_slot() {
                    CarouselAction::ScrollTo(ScrollRequest { slot, smooth: true })
                } else {
                    CarouselAction::Nothing
                }
            }
        }
    }

    pub fn click_dot(&mut self, data_index: usize) -> CarouselAction {
        match self.engine.mode() {
            LayoutMode::Ring => {
                let changed = self.engine.go_to_item(data_index);
                self.sync(changed)
            }
            LayoutMode::Scroll => self
                .engine
                .scroll_request_for_item(data_index)
                .map_or(CarouselAction::Nothing, CarouselAction::ScrollTo),
        }
    }

    /// Scroll-settle pass with fresh measurements.
    pub fn scrolled(&mut self, geometry: &ScrollGeometry) -> CarouselAction {
        let before = self.engine.active_slot();
        if self.engine.update_active_from_scroll(geometry).is_none() {
            return CarouselAction::Nothing;
        }
        let changed = self.engine.active_slot() != before;
        self.sync(changed)
    }

    /// Scroll layout: jump (no animation) to the initially focused tile.
    pub fn initial_scroll(&self) -> Option<ScrollRequest> {
        (self.engine.mode() == LayoutMode::Scroll && self.engine.slot_count() > 0).then(|| {
            ScrollRequest {
                slot: self.engine.active_slot(),
                smooth: false,
            }
        })
    }

    pub fn relocalize(&mut self, code: LanguageCode, tables: &TranslationTable) {
        let items = self.catalog.localized_items(code, tables);
        self.engine.update_captions(items);
        self.language = code;
        self.dots.render(self.engine.active_data_index());
    }

    fn sync(&mut self, engine_changed: bool) -> CarouselAction {
        let dots_changed = self.dots.render(self.engine.active_data_index());
        if engine_changed || dots_changed {
            CarouselAction::Redraw
        } else {
            CarouselAction::Nothing
        }
    }
}

impl LanguageSubscriber for Carousel {
    fn language_changed(&mut self, change: &LanguageChange<'_>) {
        self.relocalize(change.code, change.tables);
    }
}

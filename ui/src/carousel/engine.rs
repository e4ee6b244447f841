//! Carousel tile state: which data item each slot shows and which slot is
//! focused.
//!
//! Two layouts, fixed at construction:
//!
//! - **Ring** (wide viewports): `N` slots that never move. Navigation
//!   rotates the slot -> data-index bindings; the focused slot stays put, so
//!   the item under focus changes. Slot bindings always form a contiguous
//!   window `(base + slot) mod item_count`.
//! - **Scroll** (narrow viewports): the item sequence is repeated in a
//!   horizontally scrolling strip. Nothing is rebound; the focused slot is
//!   whichever tile sits nearest the strip's center.
//!
//! Operations that reject their input (out-of-range slot, already-focused
//! target, wrong layout) leave the state untouched and return `false`.

use super::catalog::CarouselItem;
use crate::config::CarouselConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Ring,
    Scroll,
}

impl LayoutMode {
    pub fn for_viewport(width: f64, mobile_breakpoint: f64) -> Self {
        if width <= mobile_breakpoint {
            LayoutMode::Scroll
        } else {
            LayoutMode::Ring
        }
    }
}

/// A fixed display slot. Padding tiles in the scroll layout carry no data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    data_index: Option<usize>,
    payload: Option<CarouselItem>,
}

impl Tile {
    fn bound(data_index: usize, items: &[CarouselItem]) -> Self {
        Self {
            data_index: Some(data_index),
            payload: items.get(data_index).cloned(),
        }
    }

    fn padding() -> Self {
        Self {
            data_index: None,
            payload: None,
        }
    }

    pub fn data_index(&self) -> Option<usize> {
        self.data_index
    }

    /// Image and caption last rendered into this slot.
    pub fn payload(&self) -> Option<&CarouselItem> {
        self.payload.as_ref()
    }
}

/// Horizontal extent of an on-screen box, in client pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub left: f64,
    pub width: f64,
}

impl Span {
    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Measured layout of the scroll strip; `tiles[i]` belongs to slot `i`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollGeometry {
    pub container: Option<Span>,
    pub tiles: Vec<Span>,
}

/// Ask the view to bring a slot to the strip's center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub slot: usize,
    pub smooth: bool,
}

/// `scrollLeft` that centers a tile at `tile_offset_left` (relative to the
/// strip's content box) in a strip `container_width` wide.
pub fn centering_scroll_left(tile_offset_left: f64, container_width: f64, tile_width: f64) -> f64 {
    let center_offset = container_width / 2.0 - tile_width / 2.0;
    (tile_offset_left - center_offset).max(0.0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselEngine {
    mode: LayoutMode,
    items: Vec<CarouselItem>,
    tiles: Vec<Tile>,
    active_slot: usize,
}

impl CarouselEngine {
    /// Pick the layout from the viewport width, then build it.
    /// The ring never gets fewer slots than items, so every item stays on
    /// some tile.
    pub fn for_viewport(items: Vec<CarouselItem>, viewport_width: f64, config: &CarouselConfig) -> Self {
        match LayoutMode::for_viewport(viewport_width, config.mobile_breakpoint_px) {
            LayoutMode::Ring => {
                let slots = config.ring_slots.max(items.len());
                if slots != config.ring_slots {
                    tracing::warn!(
                        configured = config.ring_slots,
                        items = items.len(),
                        "ring_slots below item count; using one slot per item"
                    );
                }
                Self::new_ring(items, slots)
            }
            LayoutMode::Scroll => Self::new_scroll(items, config.scroll_repeats, config.scroll_padding),
        }
    }

    /// `slots` fixed tiles, slot `i` bound to item `i mod item_count`, the
    /// middle slot focused.
    pub fn new_ring(items: Vec<CarouselItem>, slots: usize) -> Self {
        let tiles = if items.is_empty() {
            Vec::new()
        } else {
            (0..slots)
                .map(|slot| Tile::bound(slot % items.len(), &items))
                .collect()
        };
        Self {
            mode: LayoutMode::Ring,
            active_slot: tiles.len() / 2,
            items,
            tiles,
        }
    }

    /// `repeats` copies of the item sequence between `padding` empty tiles
    /// on each side; the middle data tile is focused.
    pub fn new_scroll(items: Vec<CarouselItem>, repeats: usize, padding: usize) -> Self {
        let data_tiles = items.len() * repeats;
        let mut tiles = Vec::with_capacity(data_tiles + 2 * padding);
        tiles.extend((0..padding).map(|_| Tile::padding()));
        tiles.extend((0..data_tiles).map(|i| Tile::bound(i % items.len(), &items)));
        tiles.extend((0..padding).map(|_| Tile::padding()));

        let active_slot = if data_tiles == 0 { 0 } else { padding + data_tiles / 2 };
        Self {
            mode: LayoutMode::Scroll,
            items,
            tiles,
            active_slot,
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn slot_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn active_slot(&self) -> usize {
        self.active_slot
    }

    pub fn data_indices(&self) -> Vec<Option<usize>> {
        self.tiles.iter().map(Tile::data_index).collect()
    }

    /// Data-index shown in the focused slot.
    pub fn active_data_index(&self) -> Option<usize> {
        self.tiles.get(self.active_slot).and_then(Tile::data_index)
    }

    pub fn active_item(&self) -> Option<&CarouselItem> {
        self.tiles.get(self.active_slot).and_then(Tile::payload)
    }

    /// Focus `slot` without touching any binding.
    pub fn set_active_tile(&mut self, slot: usize) -> bool {
        if slot == self.active_slot {
            return false;
        }
        match self.tiles.get(slot) {
            Some(tile) if tile.data_index.is_some() => {
                self.active_slot = slot;
                true
            }
            _ => false,
        }
    }

    /// Slot currently bound to `data_index`. With more slots than items the
    /// one nearest the focused slot wins (lower slot on a tie).
    pub fn slot_for_item(&self, data_index: usize) -> Option<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.data_index == Some(data_index))
            .map(|(slot, _)| slot)
            .min_by_key(|slot| slot.abs_diff(self.active_slot))
    }

    /// Ring layout: focus the slot showing `data_index`.
    pub fn go_to_item(&mut self, data_index: usize) -> bool {
        if self.mode != LayoutMode::Ring {
            return false;
        }
        match self.slot_for_item(data_index) {
            Some(slot) => self.set_active_tile(slot),
            None => false,
        }
    }

    /// Scroll layout: where to scroll to bring `data_index` to the center.
    pub fn scroll_request_for_item(&self, data_index: usize) -> Option<ScrollRequest> {
        if self.mode != LayoutMode::Scroll {
            return None;
        }
        self.slot_for_item(data_index)
            .map(|slot| ScrollRequest { slot, smooth: true })
    }

    /// Ring layout: every binding moves one slot right; slot 0 takes the
    /// item preceding the old first one.
    pub fn next(&mut self) -> bool {
        let Some(first) = self.ring_binding(0) else {
            return false;
        };
        let count = self.items.len();
        self.tiles.rotate_right(1);
        self.tiles[0] = Tile::bound((first + count - 1) % count, &self.items);
        true
    }

    /// Ring layout: every binding moves one slot left; the last slot takes
    /// the item following the old last one.
    pub fn previous(&mut self) -> bool {
        let Some(last) = self.tiles.len().checked_sub(1).and_then(|slot| self.ring_binding(slot))
        else {
            return false;
        };
        let count = self.items.len();
        let last_slot = self.tiles.len() - 1;
        self.tiles.rotate_left(1);
        self.tiles[last_slot] = Tile::bound((last + 1) % count, &self.items);
        true
    }

    fn ring_binding(&self, slot: usize) -> Option<usize> {
        if self.mode != LayoutMode::Ring || self.items.is_empty() {
            return None;
        }
        self.tiles.get(slot).and_then(Tile::data_index)
    }

    /// Swap in a re-localized item list and re-render every payload from
    /// its current binding. Bindings and focus are untouched.
    pub fn update_captions(&mut self, items: Vec<CarouselItem>) {
        if items.len() != self.items.len() {
            tracing::warn!(
                expected = self.items.len(),
                got = items.len(),
                "caption list length changed; unmatched tiles keep old captions"
            );
        }
        for tile in &mut self.tiles {
            if let Some(item) = tile.data_index.and_then(|index| items.get(index)) {
                tile.payload = Some(item.clone());
            }
        }
        self.items = items;
    }

    /// Scroll layout: focus the data tile whose center is nearest the
    /// strip's center. Returns the focused data-index, or `None` when
    /// nothing was measured or the layout is the ring.
    pub fn update_active_from_scroll(&mut self, geometry: &ScrollGeometry) -> Option<usize> {
        if self.mode != LayoutMode::Scroll {
            return None;
        }
        let center = geometry.container?.center();
        let (slot, _) = self
            .tiles
            .iter()
            .zip(&geometry.tiles)
            .enumerate()
            .filter(|(_, (tile, _))| tile.data_index.is_some())
            .map(|(slot, (_, span))| (slot, (span.center() - center).abs()))
            .min_by(|a, b| a.1.total_cmp(&b.1))?;

        self.active_slot = slot;
        self.active_data_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLES: [&str; 5] = [
        "Montaż od A do Z",
        "Farmy PV wodne",
        "Farmy PV na gruncie",
        "Dachy i carporty",
        "Prowadzenie projektów",
    ];

    fn items(titles: &[&str]) -> Vec<CarouselItem> {
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| CarouselItem {
                image: crate::carousel::catalog::GALLERY_IMAGES[i % 5],
                title: title.to_string(),
                subtitle: format!("subtitle {i}"),
            })
            .collect()
    }

    fn ring() -> CarouselEngine {
        CarouselEngine::new_ring(items(&TITLES), 5)
    }

    fn indices(engine: &CarouselEngine) -> Vec<usize> {
        engine.data_indices().into_iter().map(|i| i.unwrap()).collect()
    }

    /// Each slot's binding is one more than its left neighbor's.
    fn assert_contiguous(engine: &CarouselEngine) {
        let bound = indices(engine);
        let count = engine.item_count();
        for pair in bound.windows(2) {
            assert_eq!((pair[0] + 1) % count, pair[1], "window broken: {bound:?}");
        }
    }

    #[test]
    fn ring_starts_one_to_one_with_middle_focused() {
        let engine = ring();
        assert_eq!(indices(&engine), vec![0, 1, 2, 3, 4]);
        assert_eq!(engine.active_slot(), 2);
        assert_eq!(engine.active_item().unwrap().title, "Farmy PV na gruncie");
        let mut sorted = indices(&engine);
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), engine.item_count());
    }

    #[test]
    fn next_then_goto_scenario() {
        let mut engine = ring();
        assert!(engine.next());
        assert_eq!(indices(&engine), vec![4, 0, 1, 2, 3]);
        assert_eq!(engine.active_slot(), 2);
        assert_eq!(engine.active_data_index(), Some(1));
        assert_eq!(engine.active_item().unwrap().title, "Farmy PV wodne");

        assert!(engine.go_to_item(4));
        assert_eq!(engine.active_slot(), 0);
        assert_eq!(engine.active_data_index(), Some(4));
    }

    #[test]
    fn payload_travels_with_binding() {
        let mut engine = ring();
        engine.previous();
        assert_eq!(indices(&engine), vec![1, 2, 3, 4, 0]);
        for tile in engine.tiles() {
            let index = tile.data_index().unwrap();
            assert_eq!(tile.payload().unwrap().title, TITLES[index]);
        }
    }

    #[test]
    fn next_previous_roundtrip() {
        let mut engine = ring();
        engine.set_active_tile(4);
        let before = engine.clone();
        engine.next();
        engine.previous();
        assert_eq!(engine, before);

        engine.previous();
        engine.next();
        assert_eq!(engine, before);
    }

    #[test]
    fn full_cycle_is_identity() {
        let mut engine = ring();
        let before = engine.clone();
        for step in 0..engine.item_count() {
            engine.next();
            assert_contiguous(&engine);
            if step + 1 < engine.item_count() {
                assert_ne!(engine, before);
            }
        }
        assert_eq!(engine, before);

        for _ in 0..engine.item_count() {
            engine.previous();
            assert_contiguous(&engine);
        }
        assert_eq!(engine, before);
    }

    #[test]
    fn window_stays_contiguous_with_extra_slots() {
        let mut engine = CarouselEngine::new_ring(items(&TITLES[..3]), 5);
        assert_eq!(indices(&engine), vec![0, 1, 2, 0, 1]);
        for _ in 0..7 {
            engine.next();
            assert_contiguous(&engine);
        }
        for _ in 0..4 {
            engine.previous();
            assert_contiguous(&engine);
        }
    }

    #[test]
    fn set_active_tile_rejects_noop_and_out_of_range() {
        let mut engine = ring();
        let before = engine.clone();
        assert!(!engine.set_active_tile(2));
        assert!(!engine.set_active_tile(5));
        assert_eq!(engine, before);

        assert!(engine.set_active_tile(3));
        assert_eq!(engine.active_slot(), 3);
        assert_eq!(indices(&engine), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn go_to_item_reaches_every_item() {
        for target in 0..5 {
            let mut engine = ring();
            engine.next();
            engine.next();
            engine.go_to_item(target);
            assert_eq!(engine.active_data_index(), Some(target));
        }
    }

    #[test]
    fn go_to_item_ignores_active_and_unknown() {
        let mut engine = ring();
        assert!(!engine.go_to_item(2));
        assert!(!engine.go_to_item(9));
        assert_eq!(engine.active_slot(), 2);
    }

    #[test]
    fn go_to_item_prefers_slot_nearest_focus() {
        let mut engine = CarouselEngine::new_ring(items(&TITLES[..2]), 5);
        // [0, 1, 0, 1, 0], focus on slot 2.
        assert!(engine.go_to_item(1));
        assert_eq!(engine.active_slot(), 1);
    }

    #[test]
    fn captions_update_in_place() {
        let mut engine = ring();
        engine.next();
        let english = items(&[
            "A–Z installation",
            "Floating PV farms",
            "Ground-mounted PV farms",
            "Roofs & carports",
            "Project delivery",
        ]);
        engine.update_captions(english);
        assert_eq!(indices(&engine), vec![4, 0, 1, 2, 3]);
        assert_eq!(engine.active_slot(), 2);
        assert_eq!(engine.active_item().unwrap().title, "Floating PV farms");
        assert_eq!(engine.tiles()[0].payload().unwrap().title, "Project delivery");
    }

    #[test]
    fn empty_catalog_is_inert() {
        let mut engine = CarouselEngine::new_ring(Vec::new(), 5);
        assert_eq!(engine.slot_count(), 0);
        assert!(!engine.next());
        assert!(!engine.previous());
        assert!(!engine.go_to_item(0));
        assert_eq!(engine.active_data_index(), None);
    }

    #[test]
    fn layout_from_viewport() {
        let config = CarouselConfig::default();
        assert_eq!(LayoutMode::for_viewport(1024.0, 1024.0), LayoutMode::Scroll);
        assert_eq!(LayoutMode::for_viewport(1025.0, 1024.0), LayoutMode::Ring);
        let engine = CarouselEngine::for_viewport(items(&TITLES), 390.0, &config);
        assert_eq!(engine.mode(), LayoutMode::Scroll);
        assert_eq!(engine.slot_count(), 15);
    }

    fn scroll() -> CarouselEngine {
        CarouselEngine::new_scroll(items(&TITLES), 3, 1)
    }

    /// Tiles 304px wide with 16px gaps, strip scrolled by `scroll_left`.
    fn geometry(engine: &CarouselEngine, scroll_left: f64) -> ScrollGeometry {
        ScrollGeometry {
            container: Some(Span {
                left: 0.0,
                width: 390.0,
            }),
            tiles: (0..engine.slot_count())
                .map(|slot| Span {
                    left: slot as f64 * 320.0 - scroll_left,
                    width: 304.0,
                })
                .collect(),
        }
    }

    #[test]
    fn scroll_layout_focuses_middle_data_tile() {
        let engine = scroll();
        assert_eq!(engine.slot_count(), 17);
        assert_eq!(engine.data_indices()[0], None);
        assert_eq!(engine.data_indices()[16], None);
        assert_eq!(engine.active_slot(), 8);
        assert_eq!(engine.active_data_index(), Some(2));
    }

    #[test]
    fn nearest_center_wins() {
        let mut engine = scroll();
        // Slot 4 centered: its center at 4*320+152 = 1432, strip center 195.
        let focused = engine.update_active_from_scroll(&geometry(&engine, 1432.0 - 195.0));
        assert_eq!(engine.active_slot(), 4);
        assert_eq!(focused, Some(3));
        // Scroll never rebinds.
        assert_eq!(engine.data_indices()[4], Some(3));
    }

    #[test]
    fn padding_tiles_are_never_focused() {
        let mut engine = scroll();
        // Padding slot 0 sits dead center; slot 1 is the nearest data tile.
        let focused = engine.update_active_from_scroll(&geometry(&engine, 152.0 - 195.0));
        assert_eq!(engine.active_slot(), 1);
        assert_eq!(focused, Some(0));
    }

    #[test]
    fn unmeasured_strip_changes_nothing() {
        let mut engine = scroll();
        assert_eq!(engine.update_active_from_scroll(&ScrollGeometry::default()), None);
        assert_eq!(engine.active_slot(), 8);
    }

    #[test]
    fn scroll_layout_requests_scroll_instead_of_rotating() {
        let mut engine = scroll();
        let before = engine.clone();
        assert!(!engine.next());
        assert!(!engine.go_to_item(0));
        assert_eq!(engine, before);

        // Item 0 appears at slots 1, 6 and 11; 6 is nearest the focus (8).
        assert_eq!(
            engine.scroll_request_for_item(0),
            Some(ScrollRequest {
                slot: 6,
                smooth: true
            })
        );
        assert_eq!(ring().scroll_request_for_item(0), None);
    }

    #[test]
    fn ring_ignores_scroll_measurements() {
        let mut engine = ring();
        let before = engine.clone();
        // Slot 4 dead center of a 390px strip.
        let geometry = ScrollGeometry {
            container: Some(Span {
                left: 0.0,
                width: 390.0,
            }),
            tiles: (0..5)
                .map(|slot| Span {
                    left: (slot as f64 - 4.0) * 320.0 + 43.0,
                    width: 304.0,
                })
                .collect(),
        };
        assert_eq!(engine.update_active_from_scroll(&geometry), None);
        assert_eq!(engine, before);
        assert_eq!(engine.active_slot(), 2);
    }

    #[test]
    fn short_ring_config_still_shows_every_item() {
        let config = CarouselConfig {
            ring_slots: 3,
            ..CarouselConfig::default()
        };
        let mut engine = CarouselEngine::for_viewport(items(&TITLES), 1440.0, &config);
        assert_eq!(engine.slot_count(), 5);
        assert_eq!(indices(&engine), vec![0, 1, 2, 3, 4]);
        assert!(engine.go_to_item(4));
        assert_eq!(engine.active_data_index(), Some(4));
    }

    #[test]
    fn centering_offset() {
        assert_eq!(centering_scroll_left(2240.0, 390.0, 304.0), 2240.0 - 43.0);
        assert_eq!(centering_scroll_left(0.0, 390.0, 304.0), 0.0);
    }
}

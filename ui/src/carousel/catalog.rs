//! The canonical gallery items and their localized captions.

use crate::i18n::{LanguageCode, TranslationTable};

/// Gallery photos in display order. The order is the data-index order for
/// every language.
pub const GALLERY_IMAGES: [&str; 5] = [
    "/media/gallery/montage-a-z.jpg",
    "/media/gallery/floating-pv-farms.jpeg",
    "/media/gallery/ground-pv-farms.jpg",
    "/media/gallery/roofs-carports.jpg",
    "/media/gallery/project-delivery.jpg",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselItem {
    pub image: &'static str,
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselCatalog {
    images: Vec<&'static str>,
}

impl Default for CarouselCatalog {
    fn default() -> Self {
        Self::new(GALLERY_IMAGES)
    }
}

impl CarouselCatalog {
    pub fn new(images: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            images: images.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn title_key(index: usize) -> String {
        format!("gallery-item-{}-title", index + 1)
    }

    pub fn subtitle_key(index: usize) -> String {
        format!("gallery-item-{}-subtitle", index + 1)
    }

    /// One item per image, captions in `code`. A caption missing from
    /// `code` comes from the primary language; missing there too, the key
    /// itself is shown.
    pub fn localized_items(&self, code: LanguageCode, tables: &TranslationTable) -> Vec<CarouselItem> {
        self.images
            .iter()
            .enumerate()
            .map(|(index, &image)| CarouselItem {
                image,
                title: tables.translate(code, &Self::title_key(index)),
                subtitle: tables.translate(code, &Self::subtitle_key(index)),
            })
            .collect()
    }
}

//! Key-tagged page elements and the page metadata slots.
//!
//! Each element declares up front how a translated value is written into it
//! ([`ElementKind`]). A value containing `<` is *not* promoted to markup; only
//! elements declared as [`ElementKind::Markup`] render HTML.

use super::store::{LanguageChange, LanguageSubscriber};
use super::table::TranslationTable;
use super::LanguageCode;

pub const META_TITLE_KEY: &str = "site-title";
pub const META_DESCRIPTION_KEY: &str = "site-description";
pub const META_KEYWORDS_KEY: &str = "site-keywords";
pub const SUBJECT_PLACEHOLDER_KEY: &str = "subject-placeholder";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Plain text content, escaped on render.
    Text,
    /// Trusted inline HTML from the translation files.
    Markup,
    /// `placeholder` attribute of an input or textarea.
    Placeholder,
    /// `title` attribute (tooltip).
    Title,
}

/// Static declaration of a bound element, shared by the view that renders it
/// and the binder that fills it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub key: &'static str,
    pub kind: ElementKind,
}

impl Binding {
    pub const fn text(key: &'static str) -> Self {
        Self {
            key,
            kind: ElementKind::Text,
        }
    }

    pub const fn markup(key: &'static str) -> Self {
        Self {
            key,
            kind: ElementKind::Markup,
        }
    }

    pub const fn placeholder(key: &'static str) -> Self {
        Self {
            key,
            kind: ElementKind::Placeholder,
        }
    }

    pub const fn title(key: &'static str) -> Self {
        Self {
            key,
            kind: ElementKind::Title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundElement {
    key: String,
    kind: ElementKind,
    content: String,
}

impl BoundElement {
    pub fn new(key: impl Into<String>, kind: ElementKind, initial: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind,
            content: initial.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl From<Binding> for BoundElement {
    fn from(binding: Binding) -> Self {
        Self::new(binding.key, binding.kind, String::new())
    }
}

/// Document-level singletons (`<title>`, `<meta name=...>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ContentBinder {
    elements: Vec<BoundElement>,
    meta: PageMeta,
    language: Option<LanguageCode>,
}

impl ContentBinder {
    pub fn new(elements: impl IntoIterator<Item = BoundElement>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn from_bindings(bindings: &[Binding]) -> Self {
        Self::new(bindings.iter().copied().map(BoundElement::from))
    }

    pub fn elements(&self) -> &[BoundElement] {
        &self.elements
    }

    pub fn meta(&self) -> &PageMeta {
        &self.meta
    }

    /// Language last applied, `None` until the first pass.
    pub fn language(&self) -> Option<LanguageCode> {
        self.language
    }

    /// Current content of the first element bound to `key`.
    pub fn content(&self, key: &str) -> Option<&str> {
        self.elements
            .iter()
            .find(|element| element.key == key)
            .map(BoundElement::content)
    }

    /// Content for rendering; empty when nothing is bound to `key`.
    pub fn text(&self, key: &str) -> String {
        self.content(key).unwrap_or_default().to_string()
    }

    /// Subject selector label: the chosen subject, or the localized
    /// placeholder while none is chosen.
    pub fn subject_label(&self, chosen: Option<&str>) -> String {
        match chosen {
            Some(subject) if !subject.is_empty() => subject.to_string(),
            _ => self.text(SUBJECT_PLACEHOLDER_KEY),
        }
    }

    /// Write `code`'s strings into every bound element whose key resolves.
    /// Unresolved keys leave the element as it was. Returns the number of
    /// elements written.
    pub fn apply_language(&mut self, code: LanguageCode, tables: &TranslationTable) -> usize {
        let mut written = 0;
        for element in &mut self.elements {
            match tables.lookup(code, &element.key) {
                Some(value) => {
                    element.content = value;
                    written += 1;
                }
                None => {
                    tracing::debug!(lang = %code, key = %element.key, "no translation; keeping content");
                }
            }
        }

        let meta = &mut self.meta;
        for (key, slot) in [
            (META_TITLE_KEY, &mut meta.title),
            (META_DESCRIPTION_KEY, &mut meta.description),
            (META_KEYWORDS_KEY, &mut meta.keywords),
        ] {
            if let Some(value) = tables.lookup(code, key) {
                *slot = Some(value);
            }
        }

        self.language = Some(code);
        written
    }
}

impl LanguageSubscriber for ContentBinder {
    fn language_changed(&mut self, change: &LanguageChange<'_>) {
        self.apply_language(change.code, change.tables);
    }
}

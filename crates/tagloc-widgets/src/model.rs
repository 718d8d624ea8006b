#![forbid(unsafe_code)]

//! Plain-data widget for hosts without their own widget objects.
//!
//! [`WidgetModel`] stores whatever attributes a widget kind displays and
//! implements [`Localizable`] over them. Tests and headless tools use it to
//! run the adapter without a UI toolkit.

use ahash::AHashMap;
use tagloc_core::FontSpec;

use crate::adapter::Localizable;
use crate::attribute::{Attribute, WidgetKind};

/// Attribute storage for one widget.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetModel<I = ()> {
    kind: WidgetKind,
    texts: AHashMap<Attribute, String>,
    font: Option<FontSpec>,
    images: AHashMap<Attribute, I>,
    segments: Vec<Option<String>>,
}

impl<I> WidgetModel<I> {
    /// Widget of `kind` with no attributes set.
    #[must_use]
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            texts: AHashMap::new(),
            font: None,
            images: AHashMap::new(),
            segments: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_text(mut self, attribute: Attribute, text: impl Into<String>) -> Self {
        self.texts.insert(attribute, text.into());
        self
    }

    #[must_use]
    pub fn with_font(mut self, font: FontSpec) -> Self {
        self.font = Some(font);
        self
    }

    #[must_use]
    pub fn with_image(mut self, attribute: Attribute, image: I) -> Self {
        self.images.insert(attribute, image);
        self
    }

    /// Segments titled in order.
    #[must_use]
    pub fn with_segments<S: Into<String>>(mut self, titles: impl IntoIterator<Item = S>) -> Self {
        self.segments = titles.into_iter().map(|t| Some(t.into())).collect();
        self
    }

    /// Append an untitled segment.
    #[must_use]
    pub fn with_untitled_segment(mut self) -> Self {
        self.segments.push(None);
        self
    }

    /// Remove the text of `attribute`.
    pub fn clear_text(&mut self, attribute: Attribute) -> Option<String> {
        self.texts.remove(&attribute)
    }
}

impl<I: Clone> Localizable for WidgetModel<I> {
    type Image = I;

    fn kind(&self) -> WidgetKind {
        self.kind
    }

    fn text(&self, attribute: Attribute) -> Option<&str> {
        self.texts.get(&attribute).map(String::as_str)
    }

    fn set_text(&mut self, attribute: Attribute, text: String) {
        self.texts.insert(attribute, text);
    }

    fn font(&self) -> Option<FontSpec> {
        self.font.clone()
    }

    fn set_font(&mut self, font: FontSpec) {
        self.font = Some(font);
    }

    fn image(&self, attribute: Attribute) -> Option<I> {
        self.images.get(&attribute).cloned()
    }

    fn set_image(&mut self, attribute: Attribute, image: I) {
        self.images.insert(attribute, image);
    }

    fn segment_count(&self) -> usize {
        self.segments.len()
    }

    fn segment_title(&self, index: usize) -> Option<&str> {
        self.segments.get(index)?.as_deref()
    }

    fn set_segment_title(&mut self, index: usize, title: String) {
        if let Some(slot) = self.segments.get_mut(index) {
            *slot = Some(title);
        }
    }
}

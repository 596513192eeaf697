//! Chainable content builder.
//!
//! Each call consumes the builder and returns it with one more item appended.
//! Nothing is validated here; degenerate values reach the layout pass as given.

use crate::primitives::Size;

use super::item::{ButtonItem, ContentItem, ImageHandle, ImageItem, TapAction, TextItem};
use super::style::{ButtonPatch, ImagePatch, LabelPatch};

/// Accumulates an ordered `ContentItem` sequence.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderBuilder {
    items: Vec<ContentItem>,
}

impl PlaceholderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append any item.
    pub fn push(mut self, item: ContentItem) -> Self {
        self.items.push(item);
        self
    }

    /// Add fixed vertical space.
    pub fn spacer(self, height: f32) -> Self {
        self.push(ContentItem::Spacer(height))
    }

    /// Add an image with the default size and style.
    pub fn image(self, source: Option<ImageHandle>) -> Self {
        self.image_with(source, None, None)
    }

    pub fn image_with(
        self,
        source: Option<ImageHandle>,
        size: Option<Size>,
        style: Option<ImagePatch>,
    ) -> Self {
        self.push(ContentItem::Image(ImageItem { source, size, style }))
    }

    /// Add a title sized to its text.
    pub fn title(self, text: impl Into<String>) -> Self {
        self.title_with(text, None, None)
    }

    pub fn title_with(
        self,
        text: impl Into<String>,
        size: Option<Size>,
        style: Option<LabelPatch>,
    ) -> Self {
        self.push(ContentItem::Title(TextItem {
            text: text.into(),
            size,
            style,
        }))
    }

    /// Add a subtitle sized to its text.
    pub fn subtitle(self, text: impl Into<String>) -> Self {
        self.subtitle_with(text, None, None)
    }

    pub fn subtitle_with(
        self,
        text: impl Into<String>,
        size: Option<Size>,
        style: Option<LabelPatch>,
    ) -> Self {
        self.push(ContentItem::Subtitle(TextItem {
            text: text.into(),
            size,
            style,
        }))
    }

    /// Add a primary button.
    pub fn button(self, title: impl Into<String>, on_tap: Option<TapAction>) -> Self {
        self.button_with(title, None, on_tap, None)
    }

    pub fn button_with(
        self,
        title: impl Into<String>,
        size: Option<Size>,
        on_tap: Option<TapAction>,
        style: Option<ButtonPatch>,
    ) -> Self {
        self.push(ContentItem::PrimaryButton(ButtonItem {
            title: title.into(),
            size,
            on_tap,
            style,
        }))
    }

    /// Add a secondary button.
    pub fn secondary_button(self, title: impl Into<String>, on_tap: Option<TapAction>) -> Self {
        self.secondary_button_with(title, None, on_tap, None)
    }

    pub fn secondary_button_with(
        self,
        title: impl Into<String>,
        size: Option<Size>,
        on_tap: Option<TapAction>,
        style: Option<ButtonPatch>,
    ) -> Self {
        self.push(ContentItem::SecondaryButton(ButtonItem {
            title: title.into(),
            size,
            on_tap,
            style,
        }))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Freeze the sequence.
    pub fn build(self) -> Vec<ContentItem> {
        self.items
    }
}

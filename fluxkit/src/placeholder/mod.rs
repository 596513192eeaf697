//! Placeholder - empty-state view.
//!
//! A vertical stack of optional image, title, subtitle and buttons between two
//! flexible edge spacers. Content comes from `items(...)`, which rebuilds the
//! arranged sequence from scratch; `appearance(...)` only changes padding,
//! background and the spacer rule.
//!
//! ```
//! use fluxkit::{Placeholder, Size, StyleRegistry, VerticalAlignment};
//!
//! let placeholder = Placeholder::new()
//!     .appearance(|a| a.vertical_alignment = VerticalAlignment::Center)
//!     .items(|b| b.title("No tasks").spacer(20.0).subtitle("Enjoy the break"));
//!
//! let layout = placeholder.layout(Size::new(375.0, 667.0), &StyleRegistry::default());
//! assert_eq!(layout.leading_height(), layout.trailing_height());
//! ```

pub mod builder;
pub mod item;
pub mod render;
pub mod style;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::UNSUPPORTED_ARCHIVE;
use crate::layout::{Padding, SpacerRule, VerticalAlignment};
use crate::primitives::{Color, Point, Size};

use self::builder::PlaceholderBuilder;
use self::item::ContentItem;
use self::render::{ArrangedNode, ButtonRole, NodeKind, PlaceholderLayout, arrange};
use self::style::StyleRegistry;

/// Per-instance visual configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    pub background: Color,
    pub padding: Padding,
    pub vertical_alignment: VerticalAlignment,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            background: Color::TRANSPARENT,
            padding: Padding::new(100.0, 50.0, 50.0, 50.0),
            vertical_alignment: VerticalAlignment::Top,
        }
    }
}

/// The placeholder component.
#[derive(Debug, Clone)]
pub struct Placeholder {
    appearance: Appearance,
    items: Vec<ContentItem>,
    arranged: Vec<ArrangedNode>,
    spacer_rule: SpacerRule,
}

impl Default for Placeholder {
    fn default() -> Self {
        Self::new()
    }
}

impl Placeholder {
    /// Create an empty placeholder with default appearance.
    pub fn new() -> Self {
        let appearance = Appearance::default();
        Self {
            appearance,
            items: Vec::new(),
            arranged: arrange(&[]),
            spacer_rule: SpacerRule::for_alignment(appearance.vertical_alignment),
        }
    }

    /// Configure the appearance and re-resolve the spacer rule.
    pub fn appearance(mut self, configure: impl FnOnce(&mut Appearance)) -> Self {
        self.set_appearance(configure);
        self
    }

    /// Replace the content and rebuild the arranged sequence.
    pub fn items(mut self, build: impl FnOnce(PlaceholderBuilder) -> PlaceholderBuilder) -> Self {
        self.set_items(build);
        self
    }

    pub fn set_appearance(&mut self, configure: impl FnOnce(&mut Appearance)) {
        configure(&mut self.appearance);
        self.resolve_spacers();
    }

    pub fn set_items(&mut self, build: impl FnOnce(PlaceholderBuilder) -> PlaceholderBuilder) {
        self.items = build(PlaceholderBuilder::new()).build();
        self.arranged = arrange(&self.items);
        tracing::debug!(
            "Rebuilt placeholder: {} items, {} arranged nodes",
            self.items.len(),
            self.arranged.len()
        );
        self.resolve_spacers();
    }

    fn resolve_spacers(&mut self) {
        self.spacer_rule = SpacerRule::for_alignment(self.appearance.vertical_alignment);
    }

    pub fn appearance_ref(&self) -> &Appearance {
        &self.appearance
    }

    /// The content items as built.
    pub fn content(&self) -> &[ContentItem] {
        &self.items
    }

    /// The arranged node sequence, edge spacers included.
    pub fn arranged(&self) -> &[ArrangedNode] {
        &self.arranged
    }

    pub fn spacer_rule(&self) -> SpacerRule {
        self.spacer_rule
    }

    /// Compute frames for `bounds`, reading defaults from `styles`.
    pub fn layout(&self, bounds: Size, styles: &StyleRegistry) -> PlaceholderLayout {
        render::layout(&self.arranged, &self.appearance, self.spacer_rule, bounds, styles)
    }

    /// Run the tap action of the arranged node at `index`.
    ///
    /// Returns false when the node is not a button with an action.
    pub fn tap(&self, index: usize) -> bool {
        let action = match self.arranged.get(index) {
            Some(ArrangedNode::Item(item)) => item.tap_action(),
            _ => None,
        };
        match action {
            Some(action) => {
                action.invoke();
                true
            }
            None => {
                tracing::warn!("No tap action at arranged index {}", index);
                false
            }
        }
    }

    /// Run the tap action of the button under `point` in `layout`.
    ///
    /// `layout` must describe the current items. A layout computed before a
    /// later `items(...)` call is rejected when its button no longer matches
    /// the arranged node at the same index.
    pub fn tap_at(&self, layout: &PlaceholderLayout, point: Point) -> bool {
        let Some(index) = layout.button_at(point) else {
            return false;
        };
        let (role, title) = match &layout.nodes[index].kind {
            NodeKind::Button { role, title, .. } => (*role, title.as_str()),
            _ => return false,
        };
        let current = match self.arranged.get(index) {
            Some(ArrangedNode::Item(ContentItem::PrimaryButton(button))) => {
                Some((ButtonRole::Primary, button.title.as_str()))
            }
            Some(ArrangedNode::Item(ContentItem::SecondaryButton(button))) => {
                Some((ButtonRole::Secondary, button.title.as_str()))
            }
            _ => None,
        };
        if current != Some((role, title)) {
            tracing::warn!("Stale layout: button {:?} no longer at index {}", title, index);
            return false;
        }
        self.tap(index)
    }
}

/// Placeholders cannot be restored from an archive; deserialization always fails.
impl<'de> Deserialize<'de> for Placeholder {
    fn deserialize<D>(_deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Err(serde::de::Error::custom(UNSUPPORTED_ARCHIVE))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::placeholder::item::TapAction;

    #[test]
    fn test_new_placeholder() {
        let placeholder = Placeholder::new();
        assert!(placeholder.content().is_empty());
        assert_eq!(placeholder.arranged().len(), 2);
        assert_eq!(placeholder.spacer_rule(), SpacerRule::PinLeading);
        assert_eq!(placeholder.appearance_ref().padding.top, 100.0);
    }

    #[test]
    fn test_appearance_re_resolves_rule() {
        let placeholder = Placeholder::new()
            .appearance(|a| a.vertical_alignment = VerticalAlignment::Bottom);
        assert_eq!(placeholder.spacer_rule(), SpacerRule::PinTrailing);
    }

    #[test]
    fn test_appearance_does_not_rebuild() {
        let mut placeholder = Placeholder::new().items(|b| b.title("A").title("B"));
        let before = placeholder.arranged().len();
        placeholder.set_appearance(|a| a.background = Color::WHITE);
        assert_eq!(placeholder.arranged().len(), before);
        assert_eq!(placeholder.appearance_ref().background, Color::WHITE);
    }

    #[test]
    fn test_tap_runs_action() {
        let taps = Rc::new(Cell::new(0));
        let counter = taps.clone();
        let placeholder = Placeholder::new().items(|b| {
            b.title("Offline")
                .button("Retry", Some(TapAction::new(move || counter.set(counter.get() + 1))))
        });

        // [leading][title][gap][button][trailing]
        assert!(placeholder.tap(3));
        assert!(!placeholder.tap(1));
        assert!(!placeholder.tap(42));
        assert_eq!(taps.get(), 1);
    }

    #[test]
    fn test_tap_at_point() {
        let taps = Rc::new(Cell::new(0));
        let counter = taps.clone();
        let placeholder = Placeholder::new()
            .appearance(|a| a.padding = Padding::ZERO)
            .items(|b| {
                b.button("Retry", Some(TapAction::new(move || counter.set(counter.get() + 1))))
            });
        let layout = placeholder.layout(Size::new(200.0, 200.0), &StyleRegistry::default());

        assert!(placeholder.tap_at(&layout, Point::new(100.0, 20.0)));
        assert!(!placeholder.tap_at(&layout, Point::new(100.0, 120.0)));
        assert_eq!(taps.get(), 1);
    }

    #[test]
    fn test_tap_at_rejects_layout_from_previous_items() {
        let taps = Rc::new(Cell::new(0));
        let first = taps.clone();
        let retry = TapAction::new(move || first.set(first.get() + 1));
        let second = taps.clone();
        let close = TapAction::new(move || second.set(second.get() + 10));

        let mut placeholder = Placeholder::new()
            .appearance(|a| a.padding = Padding::ZERO)
            .items(|b| b.button("Retry", Some(retry)));
        let stale = placeholder.layout(Size::new(200.0, 200.0), &StyleRegistry::default());

        placeholder.set_items(|b| b.secondary_button("Close", Some(close)));
        assert!(!placeholder.tap_at(&stale, Point::new(100.0, 20.0)));
        assert_eq!(taps.get(), 0);

        let fresh = placeholder.layout(Size::new(200.0, 200.0), &StyleRegistry::default());
        assert!(placeholder.tap_at(&fresh, Point::new(100.0, 18.0)));
        assert_eq!(taps.get(), 10);
    }

    #[test]
    fn test_deserialization_is_unsupported() {
        let err = serde_json::from_str::<Placeholder>("{}").unwrap_err();
        assert!(err.to_string().contains(UNSUPPORTED_ARCHIVE));
    }

    #[test]
    fn test_appearance_from_partial_document() {
        let appearance: Appearance =
            serde_json::from_str(r#"{ "vertical_alignment": "bottom" }"#).unwrap();
        assert_eq!(appearance.vertical_alignment, VerticalAlignment::Bottom);
        assert_eq!(appearance.padding, Appearance::default().padding);
    }
}

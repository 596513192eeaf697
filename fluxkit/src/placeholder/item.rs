//! Content items accumulated by the builder.

use std::fmt;
use std::rc::Rc;

use crate::primitives::Size;

use super::style::{ButtonPatch, ImagePatch, LabelPatch};

/// Opaque handle to an image owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u32);

/// Zero-argument callback run when a button is tapped.
#[derive(Clone)]
pub struct TapAction(Rc<dyn Fn()>);

impl TapAction {
    pub fn new(action: impl Fn() + 'static) -> Self {
        Self(Rc::new(action))
    }

    pub fn invoke(&self) {
        (self.0)()
    }
}

impl fmt::Debug for TapAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TapAction(..)")
    }
}

impl<F> From<F> for TapAction
where
    F: Fn() + 'static,
{
    fn from(action: F) -> Self {
        Self::new(action)
    }
}

/// An image item.
#[derive(Debug, Clone, Default)]
pub struct ImageItem {
    pub source: Option<ImageHandle>,
    /// Explicit size; falls back to the registry's image size.
    pub size: Option<Size>,
    pub style: Option<ImagePatch>,
}

/// A title or subtitle item.
#[derive(Debug, Clone, Default)]
pub struct TextItem {
    pub text: String,
    /// Explicit size; otherwise the label sizes to its text.
    pub size: Option<Size>,
    pub style: Option<LabelPatch>,
}

/// A primary or secondary button item.
#[derive(Debug, Clone, Default)]
pub struct ButtonItem {
    pub title: String,
    /// Explicit size; falls back to the registry's button size.
    pub size: Option<Size>,
    pub on_tap: Option<TapAction>,
    pub style: Option<ButtonPatch>,
}

/// One entry of the placeholder's content, in top-to-bottom order.
#[derive(Debug, Clone)]
pub enum ContentItem {
    /// Fixed vertical space.
    Spacer(f32),
    Image(ImageItem),
    Title(TextItem),
    Subtitle(TextItem),
    PrimaryButton(ButtonItem),
    SecondaryButton(ButtonItem),
}

impl ContentItem {
    pub fn is_spacer(&self) -> bool {
        matches!(self, ContentItem::Spacer(_))
    }

    /// The tap action of a button item.
    pub fn tap_action(&self) -> Option<&TapAction> {
        match self {
            ContentItem::PrimaryButton(button) | ContentItem::SecondaryButton(button) => {
                button.on_tap.as_ref()
            }
            _ => None,
        }
    }

    /// Short kind name for logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ContentItem::Spacer(_) => "spacer",
            ContentItem::Image(_) => "image",
            ContentItem::Title(_) => "title",
            ContentItem::Subtitle(_) => "subtitle",
            ContentItem::PrimaryButton(_) => "button",
            ContentItem::SecondaryButton(_) => "secondary_button",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_tap_action_shared_between_clones() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let item = ContentItem::PrimaryButton(ButtonItem {
            title: "Retry".into(),
            on_tap: Some(TapAction::new(move || c.set(c.get() + 1))),
            ..Default::default()
        });
        let copy = item.clone();

        item.tap_action().unwrap().invoke();
        copy.tap_action().unwrap().invoke();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_only_buttons_have_actions() {
        assert!(ContentItem::Spacer(4.0).tap_action().is_none());
        assert!(ContentItem::Title(TextItem::default()).tap_action().is_none());
        assert!(ContentItem::Spacer(4.0).is_spacer());
        assert!(!ContentItem::Image(ImageItem::default()).is_spacer());
    }

    #[test]
    fn test_tap_action_debug_is_opaque() {
        let action = TapAction::from(|| {});
        assert_eq!(format!("{:?}", action), "TapAction(..)");
    }
}

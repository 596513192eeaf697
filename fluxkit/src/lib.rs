//! fluxkit: placeholder (empty-state) views
//!
//! A placeholder is a vertical stack of optional image, title, subtitle and
//! action buttons, with spacer-based top/center/bottom alignment and a default
//! gap between adjacent content items.
//!
//! # Architecture
//!
//! ```text
//! items(builder) -> arrange() -> [leading][item][gap][item]..[trailing]
//! layout(bounds, &StyleRegistry) -> materialize + stack_vertical -> frames
//! ```
//!
//! The library does no drawing. Hosts place the placeholder, call `layout()`
//! with its bounds and draw the returned nodes. Default sizes and styles live
//! in an explicit `StyleRegistry` that is read at layout time.

// Core primitives
pub mod primitives;
pub mod error;

// Layout system (vertical stack, text metrics)
pub mod layout;

// The placeholder component
pub mod placeholder;

// Re-export core types
pub use primitives::{Color, Point, Rect, Size};
pub use error::{ConfigError, UNSUPPORTED_ARCHIVE};
pub use layout::{DEFAULT_ITEM_SPACING, Padding, SpacerRule, VerticalAlignment};

pub use placeholder::{Appearance, Placeholder};
pub use placeholder::builder::PlaceholderBuilder;
pub use placeholder::item::{ButtonItem, ContentItem, ImageHandle, ImageItem, TapAction, TextItem};
pub use placeholder::render::{
    ArrangedNode, ButtonRole, LabelRole, LayoutNode, NodeKind, PlaceholderLayout,
};
pub use placeholder::style::{
    ButtonPatch, ButtonStyle, ContentMode, ImagePatch, ImageStyle, LabelPatch, LabelStyle,
    StyleRegistry, TextAlignment,
};

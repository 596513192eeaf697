//! Arranging items into stack nodes and materializing them into frames.
//!
//! `arrange` runs on every `items(...)` call and produces the arranged node
//! sequence. `layout` runs whenever the host needs frames; it is the only place
//! the style registry is read.

use crate::layout::{
    DEFAULT_ITEM_SPACING, SpacerRule, StackEntry, measure_text, stack_vertical,
};
use crate::primitives::{Color, Point, Rect, Size};

use super::Appearance;
use super::item::{ButtonItem, ContentItem, ImageHandle, TextItem};
use super::style::{ButtonStyle, ImageStyle, LabelStyle, StyleRegistry};

// =========================================================================
// Arranged sequence
// =========================================================================

/// A node of the arranged sequence.
#[derive(Debug, Clone)]
pub enum ArrangedNode {
    /// Flexible spacer above the content.
    LeadingSpacer,
    /// Fixed `DEFAULT_ITEM_SPACING` gap between two non-spacer items.
    Gap,
    /// A content item, including explicit spacers.
    Item(ContentItem),
    /// Flexible spacer below the content.
    TrailingSpacer,
}

impl ArrangedNode {
    pub fn is_spacer(&self) -> bool {
        match self {
            ArrangedNode::Item(item) => item.is_spacer(),
            _ => true,
        }
    }
}

/// Build the arranged sequence for `items`.
///
/// A gap is inserted before every non-spacer item that directly follows another
/// non-spacer item. The leading spacer counts as a spacer.
pub fn arrange(items: &[ContentItem]) -> Vec<ArrangedNode> {
    let mut nodes = Vec::with_capacity(items.len() * 2 + 2);
    nodes.push(ArrangedNode::LeadingSpacer);

    let mut last_was_spacer = true;
    for item in items {
        let is_spacer = item.is_spacer();
        if !is_spacer && !last_was_spacer {
            nodes.push(ArrangedNode::Gap);
        }
        nodes.push(ArrangedNode::Item(item.clone()));
        last_was_spacer = is_spacer;
    }

    nodes.push(ArrangedNode::TrailingSpacer);
    nodes
}

// =========================================================================
// Resolved layout
// =========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRole {
    Title,
    Subtitle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    Primary,
    Secondary,
}

/// What a laid-out node draws.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    LeadingSpacer,
    TrailingSpacer,
    Gap,
    Spacer,
    Image {
        source: Option<ImageHandle>,
        style: ImageStyle,
    },
    Label {
        role: LabelRole,
        text: String,
        style: LabelStyle,
    },
    Button {
        role: ButtonRole,
        title: String,
        style: ButtonStyle,
        tappable: bool,
    },
}

impl NodeKind {
    pub fn is_spacer(&self) -> bool {
        matches!(
            self,
            NodeKind::LeadingSpacer | NodeKind::TrailingSpacer | NodeKind::Gap | NodeKind::Spacer
        )
    }
}

/// A node with its frame in placeholder coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub frame: Rect,
    pub kind: NodeKind,
}

/// Result of a layout pass. Node order matches the arranged sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderLayout {
    pub bounds: Size,
    pub background: Color,
    pub nodes: Vec<LayoutNode>,
    /// How far content exceeds the padded bounds (0 when it fits).
    pub overflow: f32,
}

impl PlaceholderLayout {
    /// Height of the leading flexible spacer.
    pub fn leading_height(&self) -> f32 {
        self.nodes.first().map_or(0.0, |node| node.frame.height)
    }

    /// Height of the trailing flexible spacer.
    pub fn trailing_height(&self) -> f32 {
        self.nodes.last().map_or(0.0, |node| node.frame.height)
    }

    /// Index of the tappable button under `point`, if any.
    pub fn button_at(&self, point: Point) -> Option<usize> {
        self.nodes.iter().position(|node| {
            matches!(node.kind, NodeKind::Button { tappable: true, .. })
                && node.frame.contains(point)
        })
    }

    /// Nodes that draw something.
    pub fn content(&self) -> impl Iterator<Item = &LayoutNode> {
        self.nodes.iter().filter(|node| !node.kind.is_spacer())
    }
}

/// Materialize and stack `arranged` inside `bounds`.
pub(crate) fn layout(
    arranged: &[ArrangedNode],
    appearance: &Appearance,
    rule: SpacerRule,
    bounds: Size,
    styles: &StyleRegistry,
) -> PlaceholderLayout {
    let padding = appearance.padding;
    let content = Rect::new(
        padding.left,
        padding.top,
        (bounds.width - padding.horizontal()).max(0.0),
        (bounds.height - padding.vertical()).max(0.0),
    );

    let (entries, kinds): (Vec<StackEntry>, Vec<NodeKind>) = arranged
        .iter()
        .map(|node| materialize(node, styles, content.width))
        .unzip();

    let stacked = stack_vertical(&entries, content, rule);
    tracing::debug!(
        "Laid out placeholder: {} nodes in {:?}, rule {:?}",
        kinds.len(),
        content,
        rule
    );

    let nodes = stacked
        .frames
        .into_iter()
        .zip(kinds)
        .map(|(frame, kind)| LayoutNode { frame, kind })
        .collect();

    PlaceholderLayout {
        bounds,
        background: appearance.background,
        nodes,
        overflow: stacked.overflow,
    }
}

/// Resolve one arranged node against the registry.
///
/// Geometry is decided first; the style patch (explicit, else registry) is
/// applied over the base style afterwards and cannot change the frame size,
/// except that intrinsic text is measured with the resolved font.
fn materialize(
    node: &ArrangedNode,
    styles: &StyleRegistry,
    content_width: f32,
) -> (StackEntry, NodeKind) {
    let item = match node {
        ArrangedNode::LeadingSpacer => return (StackEntry::Leading, NodeKind::LeadingSpacer),
        ArrangedNode::TrailingSpacer => return (StackEntry::Trailing, NodeKind::TrailingSpacer),
        ArrangedNode::Gap => {
            return (
                StackEntry::Fixed(Size::new(0.0, DEFAULT_ITEM_SPACING)),
                NodeKind::Gap,
            );
        }
        ArrangedNode::Item(item) => item,
    };

    tracing::trace!("Materializing {}", item.kind_name());
    match item {
        ContentItem::Spacer(height) => (
            StackEntry::Fixed(Size::new(0.0, *height)),
            NodeKind::Spacer,
        ),
        ContentItem::Image(image) => {
            let size = image.size.unwrap_or(styles.image_size);
            let mut style = ImageStyle::default();
            image.style.as_ref().unwrap_or(&styles.image).apply(&mut style);
            (
                StackEntry::Fixed(size),
                NodeKind::Image {
                    source: image.source,
                    style,
                },
            )
        }
        ContentItem::Title(text) => label(text, LabelRole::Title, styles, content_width),
        ContentItem::Subtitle(text) => label(text, LabelRole::Subtitle, styles, content_width),
        ContentItem::PrimaryButton(button) => {
            self::button(button, ButtonRole::Primary, styles)
        }
        ContentItem::SecondaryButton(button) => {
            self::button(button, ButtonRole::Secondary, styles)
        }
    }
}

fn label(
    item: &TextItem,
    role: LabelRole,
    styles: &StyleRegistry,
    content_width: f32,
) -> (StackEntry, NodeKind) {
    let fallback = match role {
        LabelRole::Title => &styles.title,
        LabelRole::Subtitle => &styles.subtitle,
    };
    let mut style = LabelStyle::default();
    item.style.as_ref().unwrap_or(fallback).apply(&mut style);

    let size = item.size.unwrap_or_else(|| {
        measure_text(&item.text, style.font_size, style.max_lines, content_width)
    });

    (
        StackEntry::Fixed(size),
        NodeKind::Label {
            role,
            text: item.text.clone(),
            style,
        },
    )
}

fn button(item: &ButtonItem, role: ButtonRole, styles: &StyleRegistry) -> (StackEntry, NodeKind) {
    let (default_size, fallback) = match role {
        ButtonRole::Primary => (styles.primary_button_size, &styles.primary_button),
        ButtonRole::Secondary => (styles.secondary_button_size, &styles.secondary_button),
    };
    let size = item.size.unwrap_or(default_size);
    let mut style = ButtonStyle::default();
    item.style.as_ref().unwrap_or(fallback).apply(&mut style);

    (
        StackEntry::Fixed(size),
        NodeKind::Button {
            role,
            title: item.title.clone(),
            style,
            tappable: item.on_tap.is_some(),
        },
    )
}

//! Vertical stack with edge spacers.
//!
//! Children flow top to bottom without spacing of their own (gaps are explicit
//! entries). The two edge spacers absorb the free space; how it is split
//! between them is the `SpacerRule` derived from the vertical alignment.

use serde::{Deserialize, Serialize};

use crate::primitives::{Rect, Size};

use super::length::VerticalAlignment;

/// Constraint tying the leading and trailing edge spacers together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpacerRule {
    /// Leading spacer is zero high; trailing takes all free space.
    PinLeading,
    /// Trailing spacer is zero high; leading takes all free space.
    PinTrailing,
    /// Both spacers share the free space evenly.
    EqualHeights,
}

impl SpacerRule {
    pub fn for_alignment(alignment: VerticalAlignment) -> Self {
        match alignment {
            VerticalAlignment::Top => SpacerRule::PinLeading,
            VerticalAlignment::Center => SpacerRule::EqualHeights,
            VerticalAlignment::Bottom => SpacerRule::PinTrailing,
        }
    }

    /// Split `free` space into (leading, trailing) heights.
    pub fn split(&self, free: f32) -> (f32, f32) {
        match self {
            SpacerRule::PinLeading => (0.0, free),
            SpacerRule::PinTrailing => (free, 0.0),
            SpacerRule::EqualHeights => (free / 2.0, free / 2.0),
        }
    }
}

/// One entry of the stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StackEntry {
    /// Flexible spacer above the content.
    Leading,
    /// Flexible spacer below the content.
    Trailing,
    /// Fixed-size child, horizontally centered.
    Fixed(Size),
}

/// Frames produced by `stack_vertical`, in entry order.
#[derive(Debug, Clone, PartialEq)]
pub struct StackLayout {
    pub frames: Vec<Rect>,
    /// How far fixed children exceed the content height (0 when they fit).
    pub overflow: f32,
}

/// Lay out `entries` top to bottom inside `content`.
///
/// Fixed heights are used as given, including zero and negative values.
pub fn stack_vertical(entries: &[StackEntry], content: Rect, rule: SpacerRule) -> StackLayout {
    let total_fixed: f32 = entries
        .iter()
        .map(|entry| match entry {
            StackEntry::Fixed(size) => size.height,
            _ => 0.0,
        })
        .sum();

    let remaining = content.height - total_fixed;
    let free = remaining.max(0.0);
    let overflow = (-remaining).max(0.0);
    if overflow > 0.0 {
        tracing::warn!(
            "placeholder content overflows its bounds by {:.1}px",
            overflow
        );
    }

    let (leading, trailing) = rule.split(free);
    let center_x = content.center_x();

    let mut y = content.y;
    let frames = entries
        .iter()
        .map(|entry| {
            let frame = match entry {
                StackEntry::Leading => Rect::new(content.x, y, content.width, leading),
                StackEntry::Trailing => Rect::new(content.x, y, content.width, trailing),
                StackEntry::Fixed(size) => {
                    Rect::new(center_x - size.width / 2.0, y, size.width, size.height)
                }
            };
            y += frame.height;
            frame
        })
        .collect();

    StackLayout { frames, overflow }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> Rect {
        Rect::new(0.0, 0.0, 200.0, 300.0)
    }

    fn entries() -> Vec<StackEntry> {
        vec![
            StackEntry::Leading,
            StackEntry::Fixed(Size::new(100.0, 40.0)),
            StackEntry::Fixed(Size::new(50.0, 60.0)),
            StackEntry::Trailing,
        ]
    }

    #[test]
    fn test_rule_for_alignment() {
        assert_eq!(SpacerRule::for_alignment(VerticalAlignment::Top), SpacerRule::PinLeading);
        assert_eq!(SpacerRule::for_alignment(VerticalAlignment::Bottom), SpacerRule::PinTrailing);
        assert_eq!(SpacerRule::for_alignment(VerticalAlignment::Center), SpacerRule::EqualHeights);
    }

    #[test]
    fn test_top_alignment() {
        let layout = stack_vertical(&entries(), content(), SpacerRule::PinLeading);
        assert_eq!(layout.frames[0].height, 0.0);
        assert_eq!(layout.frames[1].y, 0.0);
        assert_eq!(layout.frames[3].height, 200.0);
        assert_eq!(layout.overflow, 0.0);
    }

    #[test]
    fn test_bottom_alignment() {
        let layout = stack_vertical(&entries(), content(), SpacerRule::PinTrailing);
        assert_eq!(layout.frames[0].height, 200.0);
        assert_eq!(layout.frames[2].bottom(), 300.0);
        assert_eq!(layout.frames[3].height, 0.0);
    }

    #[test]
    fn test_center_alignment() {
        let layout = stack_vertical(&entries(), content(), SpacerRule::EqualHeights);
        assert_eq!(layout.frames[0].height, 100.0);
        assert_eq!(layout.frames[3].height, 100.0);
        assert_eq!(layout.frames[1].y, 100.0);
    }

    #[test]
    fn test_fixed_children_are_centered() {
        let layout = stack_vertical(&entries(), content(), SpacerRule::PinLeading);
        assert_eq!(layout.frames[1].x, 50.0);
        assert_eq!(layout.frames[2].x, 75.0);
    }

    #[test]
    fn test_overflow_collapses_spacers() {
        let entries = vec![
            StackEntry::Leading,
            StackEntry::Fixed(Size::new(10.0, 500.0)),
            StackEntry::Trailing,
        ];
        let layout = stack_vertical(&entries, content(), SpacerRule::EqualHeights);
        assert_eq!(layout.frames[0].height, 0.0);
        assert_eq!(layout.frames[2].height, 0.0);
        assert_eq!(layout.overflow, 200.0);
    }

    #[test]
    fn test_negative_fixed_height_is_not_clamped() {
        let entries = vec![
            StackEntry::Leading,
            StackEntry::Fixed(Size::new(0.0, -20.0)),
            StackEntry::Trailing,
        ];
        let layout = stack_vertical(&entries, content(), SpacerRule::PinLeading);
        assert_eq!(layout.frames[1].height, -20.0);
        assert_eq!(layout.frames[2].height, 320.0);
    }
}

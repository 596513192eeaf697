//! Layout system for fluxkit.
//!
//! The placeholder is a single vertical stack. Layout happens in one pass:
//!
//! ```text
//! arranged nodes -> materialize sizes -> stack_vertical() -> frames
//! ```

pub mod length;
pub mod measure;
pub mod stack;

pub use length::{
    BASE_FONT_SIZE, CHAR_WIDTH, DEFAULT_ITEM_SPACING, LINE_HEIGHT, Padding, VerticalAlignment,
};
pub use measure::measure_text;
pub use stack::{SpacerRule, StackEntry, StackLayout, stack_vertical};

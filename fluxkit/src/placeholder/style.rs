//! Styles, style patches and the style registry.
//!
//! Every node kind starts from a bare base style. A patch is then applied on
//! top of it: the item's own patch when it has one, otherwise the registry's
//! default patch for that kind. Patches never touch geometry.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::primitives::{Color, Size};

// =========================================================================
// Resolved styles
// =========================================================================

/// How an image is fitted into its frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentMode {
    /// Stretch to fill the frame.
    #[default]
    ScaleToFill,
    /// Keep aspect ratio, fit inside the frame.
    AspectFit,
    /// Keep aspect ratio, cover the frame.
    AspectFill,
    /// No scaling, centered.
    Center,
}

/// Horizontal text alignment inside a label's frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageStyle {
    pub content_mode: ContentMode,
    pub background: Color,
    pub corner_radius: f32,
    /// Tint color (None = draw as is).
    pub tint: Option<Color>,
}

impl Default for ImageStyle {
    fn default() -> Self {
        Self {
            content_mode: ContentMode::ScaleToFill,
            background: Color::TRANSPARENT,
            corner_radius: 0.0,
            tint: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub font_size: f32,
    pub bold: bool,
    pub color: Color,
    pub alignment: TextAlignment,
    /// Maximum number of lines, 0 = unlimited.
    pub max_lines: u32,
    pub background: Color,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: 17.0,
            bold: false,
            color: Color::BLACK,
            alignment: TextAlignment::Left,
            max_lines: 1,
            background: Color::TRANSPARENT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub font_size: f32,
    pub title_color: Color,
    pub background: Color,
    pub corner_radius: f32,
    /// Border (color, width).
    pub border: Option<(Color, f32)>,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            font_size: 15.0,
            title_color: Color::SYSTEM_BLUE,
            background: Color::TRANSPARENT,
            corner_radius: 0.0,
            border: None,
        }
    }
}

// =========================================================================
// Patches
// =========================================================================

/// Optional overrides for an `ImageStyle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_mode: Option<ContentMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tint: Option<Color>,
}

impl ImagePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_mode(mut self, mode: ContentMode) -> Self {
        self.content_mode = Some(mode);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    pub fn tint(mut self, tint: Color) -> Self {
        self.tint = Some(tint);
        self
    }

    pub fn apply(&self, style: &mut ImageStyle) {
        if let Some(mode) = self.content_mode {
            style.content_mode = mode;
        }
        if let Some(color) = self.background {
            style.background = color;
        }
        if let Some(radius) = self.corner_radius {
            style.corner_radius = radius;
        }
        if let Some(tint) = self.tint {
            style.tint = Some(tint);
        }
    }
}

/// Optional overrides for a `LabelStyle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<TextAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
}

impl LabelPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn max_lines(mut self, lines: u32) -> Self {
        self.max_lines = Some(lines);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn apply(&self, style: &mut LabelStyle) {
        if let Some(size) = self.font_size {
            style.font_size = size;
        }
        if let Some(bold) = self.bold {
            style.bold = bold;
        }
        if let Some(color) = self.color {
            style.color = color;
        }
        if let Some(alignment) = self.alignment {
            style.alignment = alignment;
        }
        if let Some(lines) = self.max_lines {
            style.max_lines = lines;
        }
        if let Some(color) = self.background {
            style.background = color;
        }
    }
}

/// Optional overrides for a `ButtonStyle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<(Color, f32)>,
}

impl ButtonPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn title_color(mut self, color: Color) -> Self {
        self.title_color = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    pub fn border(mut self, color: Color, width: f32) -> Self {
        self.border = Some((color, width));
        self
    }

    pub fn apply(&self, style: &mut ButtonStyle) {
        if let Some(size) = self.font_size {
            style.font_size = size;
        }
        if let Some(color) = self.title_color {
            style.title_color = color;
        }
        if let Some(color) = self.background {
            style.background = color;
        }
        if let Some(radius) = self.corner_radius {
            style.corner_radius = radius;
        }
        if let Some(border) = self.border {
            style.border = Some(border);
        }
    }
}

// =========================================================================
// Registry
// =========================================================================

/// Default sizes and patches per content kind.
///
/// Consulted during layout only, and only for items that carry no explicit
/// size or patch of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleRegistry {
    pub image_size: Size,
    pub primary_button_size: Size,
    pub secondary_button_size: Size,
    pub image: ImagePatch,
    pub title: LabelPatch,
    pub subtitle: LabelPatch,
    pub primary_button: ButtonPatch,
    pub secondary_button: ButtonPatch,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self {
            image_size: Size::new(250.0, 180.0),
            primary_button_size: Size::new(184.0, 40.0),
            secondary_button_size: Size::new(140.0, 36.0),
            image: ImagePatch::new().content_mode(ContentMode::AspectFit),
            title: LabelPatch::new()
                .font_size(16.0)
                .color(Color::BLACK)
                .alignment(TextAlignment::Center)
                .max_lines(0),
            subtitle: LabelPatch::new()
                .font_size(14.0)
                .color(Color::GRAY)
                .alignment(TextAlignment::Center)
                .max_lines(0),
            primary_button: ButtonPatch::new()
                .background(Color::SYSTEM_BLUE)
                .corner_radius(8.0)
                .title_color(Color::WHITE)
                .font_size(16.0),
            secondary_button: ButtonPatch::new()
                .background(Color::LIGHT_GRAY)
                .corner_radius(6.0)
                .title_color(Color::WHITE)
                .font_size(14.0),
        }
    }
}

impl StyleRegistry {
    /// Parse a JSON style document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON style document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_json_str(&json)?;
        tracing::debug!("Loaded placeholder styles from {:?}", path);
        Ok(registry)
    }

    /// Serialize to a pretty JSON document.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

//! Core primitive types for fluxkit.
//!
//! Geometry is expressed in logical pixels with the origin at the top-left
//! corner of the placeholder's bounds; y grows downwards.

use serde::{Deserialize, Serialize};

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A rectangle in placeholder coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Check if a point is inside this rectangle.
    ///
    /// The right and bottom edges are exclusive.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Get the bottom edge Y coordinate.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Get the horizontal center.
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// RGBA color with components in 0.0-1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);
    pub const LIGHT_GRAY: Self = Self::rgb(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);

    /// Platform accent blue, used for primary actions.
    pub const SYSTEM_BLUE: Self = Self::rgb(0.0, 0.478, 1.0);

    /// Create a color from RGB values (0.0-1.0).
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGBA values (0.0-1.0).
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from RGB values (0-255).
    #[inline]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_from_tuple() {
        let p: Point = (5.0, 10.0).into();
        assert_eq!(p, Point::new(5.0, 10.0));
    }

    #[test]
    fn size_zero() {
        assert_eq!(Size::ZERO, Size::new(0.0, 0.0));
        let s: Size = Default::default();
        assert_eq!(s, Size::ZERO);
    }

    #[test]
    fn rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(Point::new(10.0, 20.0))); // Top-left corner
        assert!(rect.contains(Point::new(50.0, 40.0)));
        assert!(rect.contains(Point::new(109.9, 69.9)));

        assert!(!rect.contains(Point::new(110.0, 70.0))); // exclusive
        assert!(!rect.contains(Point::new(5.0, 40.0)));
        assert!(!rect.contains(Point::new(50.0, 80.0)));
    }

    #[test]
    fn rect_empty_contains_nothing() {
        let rect = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert!(!rect.contains(Point::new(10.0, 10.0)));
    }

    #[test]
    fn rect_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.size(), Size::new(100.0, 50.0));
        assert_eq!(r.bottom(), 70.0);
        assert_eq!(r.center_x(), 60.0);
    }

    #[test]
    fn color_rgb8() {
        let c = Color::rgb8(255, 0, 0);
        assert_eq!(c, Color::RED);
    }

    #[test]
    fn color_alpha_defaults_to_opaque() {
        let c: Color = serde_json::from_str(r#"{"r": 1.0, "g": 0.0, "b": 0.0}"#).unwrap();
        assert_eq!(c, Color::RED);
    }
}

//! Math utilities and types
//!
//! Screen-space vector, color and rectangle types shared by every widget.

use serde::{Deserialize, Serialize};

pub use nalgebra::{Vector2, Vector4};

/// 2D vector type (screen pixels, top-left origin)
pub type Vec2 = Vector2<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// RGBA color with components in `[0, 1]`
pub type Color = Vec4;

/// Build a color from 8-bit channels
pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
    Color::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        f32::from(a) / 255.0,
    )
}

/// Scale a color's alpha channel by `alpha`, clamped to `[0, 1]`
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.x, color.y, color.z, (color.w * alpha).clamp(0.0, 1.0))
}

/// Axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge (`x + width`)
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`)
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Top-left corner
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Check if a point is inside the rectangle (edges inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Same rectangle with negative extents collapsed to zero
    pub fn non_negative(self) -> Self {
        Self {
            width: self.width.max(0.0),
            height: self.height.max(0.0),
            ..self
        }
    }

    /// Smallest rectangle covering both `self` and `other`
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }
}

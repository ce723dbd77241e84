//! UI Backend Traits
//!
//! Defines the interface between the UI layer and the host's renderer and
//! input source. Keeps the widget logic independent of any graphics API.
//!
//! Coordinates are screen pixels with a top-left origin.

pub mod headless;

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Color, Rect, Vec2};

pub use headless::{DrawCommand, HeadlessBackend};

/// Handle to a font owned by the rendering backend
///
/// `FontHandle::DEFAULT` always resolves to the backend's built-in font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FontHandle(pub u32);

impl FontHandle {
    /// The backend's built-in font
    pub const DEFAULT: Self = Self(0);
}

/// Font selection passed to text drawing and measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Backend font
    pub handle: FontHandle,
    /// Glyph size in pixels
    pub size: f32,
    /// Extra spacing between glyphs in pixels
    pub spacing: f32,
}

impl FontSpec {
    /// Create a font spec for the default font
    pub const fn sized(size: f32) -> Self {
        Self { handle: FontHandle::DEFAULT, size, spacing: 1.0 }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::sized(20.0)
    }
}

/// Navigation and editing keys delivered through the key queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Remove the character before the caret
    Backspace,
    /// Remove the character at the caret
    Delete,
    /// Move caret left
    Left,
    /// Move caret right
    Right,
    /// Jump caret to start
    Home,
    /// Jump caret to end
    End,
    /// Main enter/return key
    Enter,
    /// Numeric keypad enter
    KeypadEnter,
    /// Escape
    Escape,
    /// Any other key, by backend key code
    Other(u32),
}

/// Drawing primitives required by the UI layer
pub trait RenderBackend {
    /// Fill a rectangle
    fn draw_rect(&mut self, rect: Rect, color: Color);

    /// Outline a rectangle with lines of the given thickness (drawn inside the rect)
    fn draw_rect_lines(&mut self, rect: Rect, thickness: f32, color: Color);

    /// Draw a text string with its top-left corner at `position`
    fn draw_text(&mut self, text: &str, position: Vec2, font: &FontSpec, color: Color);

    /// Measure the size of a text string
    fn measure_text(&self, text: &str, font: &FontSpec) -> Vec2;

    /// Restrict subsequent drawing to `rect`
    fn push_clip(&mut self, rect: Rect);

    /// Remove the clip region set by the matching `push_clip`
    fn pop_clip(&mut self);

    /// Current rendering surface size in pixels
    fn screen_size(&self) -> Vec2;
}

/// Input sampling required by the UI layer
///
/// Edge queries (`is_mouse_pressed`) report transitions since the previous
/// host frame; level queries (`is_mouse_down`, `mouse_position`) report the
/// live state and may be re-read during a frame.
pub trait InputBackend {
    /// Pointer position in screen pixels
    fn mouse_position(&self) -> Vec2;

    /// Left button went down this frame
    fn is_mouse_pressed(&self) -> bool;

    /// Left button is currently held
    fn is_mouse_down(&self) -> bool;

    /// Wheel movement this frame (positive = away from the user)
    fn wheel_delta(&self) -> f32;

    /// Seconds elapsed since the previous frame
    fn frame_time(&self) -> f32;

    /// Pop the next pending key event
    fn next_key(&mut self) -> Option<Key>;

    /// Pop the next pending character event
    fn next_char(&mut self) -> Option<char>;
}

/// Combined render and input backend consumed by [`crate::ui::Frame`]
pub trait Backend: RenderBackend + InputBackend {}

impl<T: RenderBackend + InputBackend + ?Sized> Backend for T {}

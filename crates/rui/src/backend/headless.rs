//! Headless backend
//!
//! Records draw calls into a command list instead of rasterizing them and
//! replays scripted input. Used by tests and by the demo application to drive
//! the UI without a window.

use std::collections::VecDeque;

use super::{FontSpec, InputBackend, Key, RenderBackend};
use crate::foundation::math::{Color, Rect, Vec2};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle
    Rect {
        /// Target rectangle
        rect: Rect,
        /// Fill color
        color: Color,
    },
    /// Rectangle outline
    RectLines {
        /// Target rectangle
        rect: Rect,
        /// Line thickness
        thickness: f32,
        /// Line color
        color: Color,
    },
    /// Text string
    Text {
        /// Text content
        text: String,
        /// Top-left position
        position: Vec2,
        /// Font used
        font: FontSpec,
        /// Text color
        color: Color,
    },
    /// Clip region pushed
    PushClip(Rect),
    /// Clip region popped
    PopClip,
}

/// Window-less backend with fixed-advance text metrics
///
/// Every glyph is `size * 0.5` pixels wide plus the font spacing between
/// glyphs, and `size` pixels tall.
#[derive(Debug)]
pub struct HeadlessBackend {
    commands: Vec<DrawCommand>,
    clip_depth: usize,
    screen_size: Vec2,

    mouse_position: Vec2,
    mouse_down: bool,
    mouse_down_last_frame: bool,
    wheel: f32,
    frame_time: f32,
    keys: VecDeque<Key>,
    chars: VecDeque<char>,
}

impl HeadlessBackend {
    /// Create a backend with the given surface size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            commands: Vec::new(),
            clip_depth: 0,
            screen_size: Vec2::new(width, height),
            mouse_position: Vec2::zeros(),
            mouse_down: false,
            mouse_down_last_frame: false,
            wheel: 0.0,
            frame_time: 1.0 / 60.0,
            keys: VecDeque::new(),
            chars: VecDeque::new(),
        }
    }

    /// Advance to the next host frame
    ///
    /// Clears per-frame edges, wheel movement and recorded commands. Pending
    /// key and character events are kept until drained.
    pub fn next_frame(&mut self) {
        self.mouse_down_last_frame = self.mouse_down;
        self.wheel = 0.0;
        self.commands.clear();
    }

    /// Move the pointer
    pub fn set_mouse_position(&mut self, x: f32, y: f32) {
        self.mouse_position = Vec2::new(x, y);
    }

    /// Set the left button level
    pub fn set_mouse_down(&mut self, down: bool) {
        self.mouse_down = down;
    }

    /// Move the pointer and press the left button
    pub fn press_at(&mut self, x: f32, y: f32) {
        self.set_mouse_position(x, y);
        self.mouse_down = true;
    }

    /// Set wheel movement for this frame
    pub fn set_wheel(&mut self, delta: f32) {
        self.wheel = delta;
    }

    /// Set the frame delta time in seconds
    pub fn set_frame_time(&mut self, seconds: f32) {
        self.frame_time = seconds;
    }

    /// Queue a key event
    pub fn push_key(&mut self, key: Key) {
        self.keys.push_back(key);
    }

    /// Queue character events for every char of `text`
    pub fn type_text(&mut self, text: &str) {
        self.chars.extend(text.chars());
    }

    /// Resize the surface
    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen_size = Vec2::new(width, height);
    }

    /// Commands recorded since the last `next_frame`
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the list empty
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Current clip nesting depth
    pub fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    /// Recorded text strings, in draw order
    pub fn drawn_texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Recorded filled rectangles, in draw order
    pub fn filled_rects(&self) -> Vec<(Rect, Color)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Rect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }
}

impl RenderBackend for HeadlessBackend {
    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn draw_rect_lines(&mut self, rect: Rect, thickness: f32, color: Color) {
        self.commands.push(DrawCommand::RectLines { rect, thickness, color });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, font: &FontSpec, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            font: *font,
            color,
        });
    }

    fn measure_text(&self, text: &str, font: &FontSpec) -> Vec2 {
        let glyphs = text.chars().count();
        if glyphs == 0 {
            return Vec2::new(0.0, font.size);
        }
        let width = glyphs as f32 * font.size * 0.5 + (glyphs - 1) as f32 * font.spacing;
        Vec2::new(width, font.size)
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_depth += 1;
        self.commands.push(DrawCommand::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.clip_depth = self.clip_depth.saturating_sub(1);
        self.commands.push(DrawCommand::PopClip);
    }

    fn screen_size(&self) -> Vec2 {
        self.screen_size
    }
}

impl InputBackend for HeadlessBackend {
    fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    fn is_mouse_pressed(&self) -> bool {
        self.mouse_down && !self.mouse_down_last_frame
    }

    fn is_mouse_down(&self) -> bool {
        self.mouse_down
    }

    fn wheel_delta(&self) -> f32 {
        self.wheel
    }

    fn frame_time(&self) -> f32 {
        self.frame_time
    }

    fn next_key(&mut self) -> Option<Key> {
        self.keys.pop_front()
    }

    fn next_char(&mut self) -> Option<char> {
        self.chars.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_edge_lasts_one_frame() {
        let mut backend = HeadlessBackend::new(800.0, 600.0);
        backend.press_at(10.0, 10.0);
        assert!(backend.is_mouse_pressed());
        assert!(backend.is_mouse_down());

        backend.next_frame();
        assert!(!backend.is_mouse_pressed());
        assert!(backend.is_mouse_down());

        backend.set_mouse_down(false);
        backend.next_frame();
        backend.set_mouse_down(true);
        assert!(backend.is_mouse_pressed());
    }

    #[test]
    fn test_measure_text_fixed_advance() {
        let backend = HeadlessBackend::new(800.0, 600.0);
        let font = FontSpec { spacing: 2.0, ..FontSpec::sized(10.0) };
        assert_eq!(backend.measure_text("", &font), Vec2::new(0.0, 10.0));
        assert_eq!(backend.measure_text("a", &font), Vec2::new(5.0, 10.0));
        assert_eq!(backend.measure_text("abc", &font), Vec2::new(19.0, 10.0));
    }

    #[test]
    fn test_queues_drain_in_order() {
        let mut backend = HeadlessBackend::new(800.0, 600.0);
        backend.push_key(Key::Left);
        backend.push_key(Key::Home);
        backend.type_text("hé");
        backend.next_frame();

        assert_eq!(backend.next_key(), Some(Key::Left));
        assert_eq!(backend.next_key(), Some(Key::Home));
        assert_eq!(backend.next_key(), None);
        assert_eq!(backend.next_char(), Some('h'));
        assert_eq!(backend.next_char(), Some('é'));
        assert_eq!(backend.next_char(), None);
    }
}

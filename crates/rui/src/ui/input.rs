//! Frame input sampling
//!
//! Captures pointer, button, wheel, timing and queued keyboard events once at
//! the start of a frame. Widgets read this snapshot; only drag operations go
//! back to the live backend state.

use crate::backend::{InputBackend, Key, RenderBackend};
use crate::foundation::math::Vec2;

/// Input snapshot for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Pointer position in screen coordinates
    pub mouse: Vec2,

    /// Left button went down this frame
    pub pressed: bool,
    /// Left button is held
    pub down: bool,

    /// Wheel movement this frame
    pub wheel: f32,

    /// Seconds since the previous frame (never negative)
    pub delta_time: f32,

    /// Rendering surface size
    pub screen_size: Vec2,

    /// Key events not yet consumed by a focused text field
    pub keys: Vec<Key>,
    /// Character events not yet consumed by a focused text field
    pub chars: Vec<char>,
}

impl FrameInput {
    /// Sample the backend for a new frame, draining its event queues
    pub fn sample<B: InputBackend + RenderBackend + ?Sized>(backend: &mut B) -> Self {
        let mut keys = Vec::new();
        while let Some(key) = backend.next_key() {
            keys.push(key);
        }

        let mut chars = Vec::new();
        while let Some(ch) = backend.next_char() {
            chars.push(ch);
        }

        let delta_time = backend.frame_time();

        Self {
            mouse: backend.mouse_position(),
            pressed: backend.is_mouse_pressed(),
            down: backend.is_mouse_down(),
            wheel: backend.wheel_delta(),
            delta_time: if delta_time.is_finite() { delta_time.max(0.0) } else { 0.0 },
            screen_size: backend.screen_size(),
            keys,
            chars,
        }
    }

    /// Take all pending key events
    pub fn take_keys(&mut self) -> Vec<Key> {
        std::mem::take(&mut self.keys)
    }

    /// Take all pending character events
    pub fn take_chars(&mut self) -> Vec<char> {
        std::mem::take(&mut self.chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::HeadlessBackend;

    #[test]
    fn test_sample_captures_state() {
        let mut backend = HeadlessBackend::new(640.0, 480.0);
        backend.press_at(12.0, 34.0);
        backend.set_wheel(-1.0);
        backend.set_frame_time(0.25);
        backend.push_key(Key::Enter);
        backend.type_text("ok");

        let input = FrameInput::sample(&mut backend);
        assert_eq!(input.mouse, Vec2::new(12.0, 34.0));
        assert!(input.pressed);
        assert!(input.down);
        assert_eq!(input.wheel, -1.0);
        assert_eq!(input.delta_time, 0.25);
        assert_eq!(input.screen_size, Vec2::new(640.0, 480.0));
        assert_eq!(input.keys, vec![Key::Enter]);
        assert_eq!(input.chars, vec!['o', 'k']);

        // Queues were drained
        assert_eq!(backend.next_key(), None);
        assert_eq!(backend.next_char(), None);
    }

    #[test]
    fn test_negative_frame_time_is_clamped() {
        let mut backend = HeadlessBackend::new(640.0, 480.0);
        backend.set_frame_time(-1.0);
        assert_eq!(FrameInput::sample(&mut backend).delta_time, 0.0);

        backend.set_frame_time(f32::NAN);
        assert_eq!(FrameInput::sample(&mut backend).delta_time, 0.0);
    }
}

//! Text input widget and keyboard focus
//!
//! The caller owns each field's text, capacity and caret in a [`TextInput`].
//! The context owns focus: at most one field id is focused at a time, and
//! focusing a field replaces whatever was focused before.
//!
//! Capacity counts characters including a reserved terminator slot, so a
//! field never holds more than `capacity - 1` characters.

use crate::backend::{Backend, Key};
use crate::foundation::math::{Rect, Vec2};
use crate::ui::context::Frame;
use crate::ui::id::WidgetId;

/// Seconds per caret blink cycle
const BLINK_PERIOD: f32 = 1.0;

/// Caller-owned text field state
#[derive(Debug, Clone)]
pub struct TextInput {
    id: WidgetId,
    text: String,
    capacity: usize,
    /// Caret position in characters, within `[0, len]`
    caret: usize,
    blink_timer: f32,
}

impl TextInput {
    /// Create an empty field holding at most `capacity - 1` characters
    pub fn new(id: impl Into<WidgetId>, capacity: usize) -> Self {
        Self {
            id: id.into(),
            text: String::new(),
            capacity,
            caret: 0,
            blink_timer: 0.0,
        }
    }

    /// Create a field with initial text, truncated to fit; caret at the end
    pub fn with_text(id: impl Into<WidgetId>, capacity: usize, text: &str) -> Self {
        let mut field = Self::new(id, capacity);
        field.text = text.chars().take(field.max_len()).collect();
        field.caret = field.len();
        field
    }

    /// Field identity
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Current text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the field is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Capacity including the terminator slot
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Caret position in characters
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Seconds accumulated on the caret blink timer
    pub fn blink_timer(&self) -> f32 {
        self.blink_timer
    }

    /// Whether the caret is in the visible half of its blink cycle
    pub fn caret_visible(&self) -> bool {
        self.blink_timer % BLINK_PERIOD < BLINK_PERIOD / 2.0
    }

    fn max_len(&self) -> usize {
        self.capacity.saturating_sub(1)
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(byte, _)| byte)
    }

    /// Replace the text, truncating to fit and moving the caret to the end
    pub fn set_text(&mut self, text: &str) {
        self.text = text.chars().take(self.max_len()).collect();
        self.caret = self.len();
    }

    /// Move the caret, clamped to `[0, len]`
    pub fn set_caret(&mut self, caret: usize) {
        self.caret = caret.min(self.len());
    }

    /// Insert a printable character at the caret
    ///
    /// Control characters are ignored; a full field drops the character.
    /// Returns whether the text changed.
    pub fn insert(&mut self, ch: char) -> bool {
        if ch.is_control() || self.len() + 1 > self.max_len() {
            return false;
        }
        let at = self.byte_index(self.caret);
        self.text.insert(at, ch);
        self.caret += 1;
        true
    }

    /// Remove the character before the caret
    pub fn backspace(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        let at = self.byte_index(self.caret - 1);
        self.text.remove(at);
        self.caret -= 1;
        true
    }

    /// Remove the character at the caret
    pub fn delete(&mut self) -> bool {
        if self.caret >= self.len() {
            return false;
        }
        let at = self.byte_index(self.caret);
        self.text.remove(at);
        true
    }

    /// Apply an editing or navigation key; exit keys are handled by the caller
    pub fn apply_key(&mut self, key: Key) {
        match key {
            Key::Backspace => {
                self.backspace();
            }
            Key::Delete => {
                self.delete();
            }
            Key::Left => self.caret = self.caret.saturating_sub(1),
            Key::Right => self.caret = (self.caret + 1).min(self.len()),
            Key::Home => self.caret = 0,
            Key::End => self.caret = self.len(),
            Key::Enter | Key::KeypadEnter | Key::Escape | Key::Other(_) => {}
        }
    }
}

/// Whether a key ends editing
fn is_exit_key(key: Key) -> bool {
    matches!(key, Key::Enter | Key::KeypadEnter | Key::Escape)
}

/// X offset of every caret position `0..=len` relative to the text origin
fn caret_offsets<B: Backend + ?Sized>(backend: &B, text: &str, font: &crate::backend::FontSpec) -> Vec<f32> {
    let mut offsets = Vec::with_capacity(text.len() + 1);
    let mut x = 0.0;
    offsets.push(x);
    let mut buf = [0u8; 4];
    for ch in text.chars() {
        x += backend.measure_text(ch.encode_utf8(&mut buf), font).x + font.spacing;
        offsets.push(x);
    }
    offsets
}

/// Caret index nearest to `pointer_x` given glyph offsets from [`caret_offsets`]
fn caret_from_pointer(offsets: &[f32], spacing: f32, pointer_x: f32) -> usize {
    for (index, pair) in offsets.windows(2).enumerate() {
        let glyph_width = pair[1] - pair[0] - spacing;
        if pointer_x < pair[0] + glyph_width / 2.0 {
            return index;
        }
    }
    offsets.len().saturating_sub(1)
}

impl<'a, B: Backend + ?Sized> Frame<'a, B> {
    /// Draw and run a text field; returns whether the text length changed
    ///
    /// A press inside focuses the field and moves the caret under the pointer;
    /// a press outside, Escape or Enter removes focus. While focused, queued
    /// keys and characters of this frame are consumed by the field.
    pub fn text_input(&mut self, bounds: Rect, field: &mut TextInput) -> bool {
        if field.capacity == 0 {
            return false;
        }

        let style = self.theme().text_input;
        let font = self.theme().font;
        let padding = self.ctx.config.text_padding;
        let len_before = field.len();
        let origin = Vec2::new(bounds.x + padding, bounds.y + (bounds.height - font.size) / 2.0);

        if self.ctx.input.pressed {
            if self.hovered(bounds) {
                if self.ctx.focus != Some(field.id) {
                    log::debug!("Text input {:?} focused", field.id);
                }
                self.ctx.focus = Some(field.id);
                let offsets = caret_offsets(&*self.backend, &field.text, &font);
                let caret = caret_from_pointer(&offsets, font.spacing, self.ctx.input.mouse.x - origin.x);
                field.set_caret(caret);
            } else if self.ctx.focus == Some(field.id) {
                log::debug!("Text input {:?} lost focus (click outside)", field.id);
                self.ctx.focus = None;
            }
        }

        if self.ctx.focus == Some(field.id) {
            let mut exited = false;
            for key in self.ctx.input.take_keys() {
                if is_exit_key(key) {
                    exited = true;
                } else if !exited {
                    field.apply_key(key);
                }
            }

            let chars = self.ctx.input.take_chars();
            if exited {
                log::debug!("Text input {:?} lost focus (exit key)", field.id);
                self.ctx.focus = None;
            } else {
                for ch in chars {
                    field.insert(ch);
                }
            }
        }

        let focused = self.ctx.focus == Some(field.id);
        if focused {
            self.ctx.focus_seen = true;
            field.blink_timer += self.ctx.input.delta_time;
        } else {
            field.blink_timer = 0.0;
        }
        field.caret = field.caret.min(field.len());

        let (background, border) = if focused {
            (style.focused_background_color, style.focused_border_color)
        } else {
            (style.background_color, style.border_color)
        };
        self.fill_rect(bounds, background);
        self.stroke_rect(bounds, 1.0, border);

        self.backend.push_clip(bounds.non_negative());
        self.text(&field.text, origin, &font, style.text_color);
        if focused && field.caret_visible() {
            let offsets = caret_offsets(&*self.backend, &field.text, &font);
            let caret_x = origin.x + offsets[field.caret] - if field.caret > 0 { font.spacing } else { 0.0 };
            let caret = Rect::new(caret_x, origin.y, self.ctx.config.caret_width, font.size);
            self.fill_rect(caret, style.caret_color);
        }
        self.backend.pop_clip();

        field.len() != len_before
    }
}

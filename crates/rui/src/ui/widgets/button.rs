//! Button widget - interactive clickable buttons

use crate::backend::Backend;
use crate::foundation::math::{Rect, Vec2};
use crate::ui::context::Frame;

impl<'a, B: Backend + ?Sized> Frame<'a, B> {
    /// Draw a button; returns `true` on the frame it is pressed
    ///
    /// A press is a button-down edge with the pointer inside `bounds`.
    pub fn button(&mut self, bounds: Rect, text: &str) -> bool {
        let style = self.theme().button;
        let font = self.theme().font;
        let border = self.ctx.config.border_width;

        let hovered = self.hovered(bounds);
        let pressed = hovered && self.ctx.input.pressed;

        let background = if pressed {
            style.pressed_color
        } else if hovered {
            style.hover_color
        } else {
            style.normal_color
        };

        self.fill_rect(bounds, background);
        self.stroke_rect(bounds, border, style.border_color);

        let size = self.measure(text, &font);
        let position = Vec2::new(
            bounds.x + (bounds.width - size.x) / 2.0,
            bounds.y + (bounds.height - size.y) / 2.0,
        );
        self.text(text, position, &font, style.text_color);

        pressed
    }

    /// Draw a button; `on_press` runs once on the frame it is pressed
    pub fn button_with(&mut self, bounds: Rect, text: &str, on_press: impl FnOnce()) -> bool {
        let pressed = self.button(bounds, text);
        if pressed {
            on_press();
        }
        pressed
    }
}

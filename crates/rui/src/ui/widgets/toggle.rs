//! Toggle widget - checkbox with a label
//!
//! The hit target is the whole row: the box plus its label.

use crate::backend::Backend;
use crate::foundation::math::{Rect, Vec2};
use crate::ui::context::Frame;

impl<'a, B: Backend + ?Sized> Frame<'a, B> {
    /// Draw a toggle with its box at `bounds`; returns the new value
    ///
    /// A press edge anywhere on the box or the label flips the value.
    pub fn toggle(&mut self, bounds: Rect, label: &str, value: bool) -> bool {
        let style = self.theme().toggle;
        let font = self.theme().font;
        let gap = self.ctx.config.toggle_gap;

        let label_size = if label.is_empty() { Vec2::zeros() } else { self.measure(label, &font) };
        let label_pos = Vec2::new(bounds.right() + gap, bounds.y + (bounds.height - label_size.y) / 2.0);
        let row = if label.is_empty() {
            bounds
        } else {
            bounds.union(&Rect::new(label_pos.x, label_pos.y, label_size.x, label_size.y))
        };

        let hovered = self.hovered(row);
        let value = if self.clicked(row) { !value } else { value };

        let background = if hovered { style.box_hover_color } else { style.box_color };
        self.fill_rect(bounds, background);
        self.stroke_rect(bounds, 1.0, style.border_color);

        if value {
            let inset = (bounds.width.min(bounds.height) * 0.25).max(0.0);
            let check = Rect::new(
                bounds.x + inset,
                bounds.y + inset,
                bounds.width - inset * 2.0,
                bounds.height - inset * 2.0,
            );
            self.fill_rect(check.non_negative(), style.check_color);
        }

        if !label.is_empty() {
            self.text(label, label_pos, &font, style.label_color);
        }

        value
    }

    /// Draw a toggle; `on_change` runs once when the value flips
    pub fn toggle_with(&mut self, bounds: Rect, label: &str, value: bool, on_change: impl FnOnce(bool)) -> bool {
        let new_value = self.toggle(bounds, label, value);
        if new_value != value {
            on_change(new_value);
        }
        new_value
    }
}

#[cfg(test)]
mod tests {
    use crate::backend::HeadlessBackend;
    use crate::foundation::math::Rect;
    use crate::ui::UiContext;

    const BOX: Rect = Rect::new(10.0, 10.0, 20.0, 20.0);

    #[test]
    fn test_press_flips_once() {
        let mut ui = UiContext::new();
        let mut backend = HeadlessBackend::new(800.0, 600.0);

        backend.press_at(15.0, 15.0);
        let value = ui.begin_frame(&mut backend).toggle(BOX, "Sound", false);
        assert!(value);

        // Button still held, no new edge
        backend.next_frame();
        let value = ui.begin_frame(&mut backend).toggle(BOX, "Sound", value);
        assert!(value);
    }

    #[test]
    fn test_label_is_part_of_hit_target() {
        let mut ui = UiContext::new();
        let mut backend = HeadlessBackend::new(800.0, 600.0);

        // Label starts at x = 36 and is 5 * 10 + 4 = 54 wide
        backend.press_at(80.0, 20.0);
        assert!(!ui.begin_frame(&mut backend).toggle(BOX, "Sound", true));

        backend.set_mouse_down(false);
        backend.next_frame();
        backend.press_at(95.0, 20.0);
        assert!(ui.begin_frame(&mut backend).toggle(BOX, "Sound", true));
    }

    #[test]
    fn test_callback_reports_new_value() {
        let mut ui = UiContext::new();
        let mut backend = HeadlessBackend::new(800.0, 600.0);
        let mut seen = None;

        backend.press_at(12.0, 12.0);
        ui.begin_frame(&mut backend).toggle_with(BOX, "", true, |v| seen = Some(v));
        assert_eq!(seen, Some(false));
    }
}

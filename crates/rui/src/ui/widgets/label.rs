//! Label widget - text display

use crate::backend::Backend;
use crate::foundation::math::{Color, Rect, Vec2};
use crate::ui::context::Frame;
use crate::ui::theme::HorizontalAlign;

impl<'a, B: Backend + ?Sized> Frame<'a, B> {
    /// Draw text at `position` in the theme's panel label color
    pub fn label(&mut self, text: &str, position: Vec2) {
        let color = self.theme().panel.label_color;
        self.label_colored(text, position, color);
    }

    /// Draw text at `position` in an explicit color
    pub fn label_colored(&mut self, text: &str, position: Vec2, color: Color) {
        let font = self.theme().font;
        self.text(text, position, &font, color);
    }

    /// Draw text inside `bounds` with horizontal alignment
    pub fn label_aligned(&mut self, text: &str, bounds: Rect, align: HorizontalAlign, color: Color) {
        let font = self.theme().font;
        let width = self.measure(text, &font).x;
        let x = match align {
            HorizontalAlign::Left => bounds.x,
            HorizontalAlign::Center => bounds.x + (bounds.width - width) / 2.0,
            HorizontalAlign::Right => bounds.right() - width,
        };
        self.text(text, Vec2::new(x, bounds.y), &font, color);
    }
}

#[cfg(test)]
mod tests {
    use crate::backend::{DrawCommand, HeadlessBackend};
    use crate::foundation::math::{rgba, Rect, Vec2};
    use crate::ui::theme::HorizontalAlign;
    use crate::ui::UiContext;

    #[test]
    fn test_label_uses_given_color() {
        let mut ui = UiContext::new();
        let mut backend = HeadlessBackend::new(800.0, 600.0);
        let white = rgba(255, 255, 255, 255);
        ui.begin_frame(&mut backend).label_colored("Hello there", Vec2::new(412.0, 86.0), white);

        assert_eq!(
            backend.commands(),
            &[DrawCommand::Text {
                text: "Hello there".to_string(),
                position: Vec2::new(412.0, 86.0),
                font: ui.theme().font,
                color: white,
            }]
        );
    }

    #[test]
    fn test_right_aligned_label() {
        let mut ui = UiContext::new();
        let mut backend = HeadlessBackend::new(800.0, 600.0);
        let color = rgba(0, 0, 0, 255);
        ui.begin_frame(&mut backend)
            .label_aligned("abc", Rect::new(0.0, 0.0, 100.0, 20.0), HorizontalAlign::Right, color);

        // "abc" at size 20: 3 * 10 + 2 spacing = 32 wide
        let position = backend.commands().iter().find_map(|cmd| match cmd {
            DrawCommand::Text { position, .. } => Some(*position),
            _ => None,
        });
        assert_eq!(position, Some(Vec2::new(68.0, 0.0)));
    }
}

//! Frame-level scenario tests driven by the headless backend


use crate::backend::HeadlessBackend;
use crate::foundation::math::Rect;
use crate::ui::{Frame, Panel};

/// Bounds of the scrolling list used across scenarios (header 24, view 276)
pub(super) const LIST_BOUNDS: Rect = Rect::new(50.0, 50.0, 200.0, 300.0);

/// Draw the "Many Buttons" list and return its measured content height
pub(super) fn many_buttons(frame: &mut Frame<'_, HeadlessBackend>, count: usize) -> f32 {
    frame.panel_begin(&Panel::new("list", LIST_BOUNDS).title("Many Buttons").scrollable(true));
    for i in 0..count {
        frame.panel_button(&format!("Item {}", i + 1), 30.0);
    }
    let height = frame.panel_content_height().unwrap_or_default();
    frame.panel_end();
    height
}

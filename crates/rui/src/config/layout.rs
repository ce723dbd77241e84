//! Layout metrics shared by panels and widgets

use serde::{Deserialize, Serialize};

use super::Config;

/// Layout constants for panels, scrollbars and widgets
///
/// All values are in pixels unless noted otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Inner padding between panel border and content
    pub padding: f32,
    /// Vertical gap between auto-laid-out widgets
    pub spacing: f32,
    /// Horizontal space reserved for the scrollbar in scrollable panels
    pub scrollbar_gutter: f32,
    /// Width of the scrollbar track and thumb
    pub scrollbar_width: f32,
    /// Scroll offset change per wheel notch
    pub wheel_step: f32,
    /// Smallest allowed header height
    pub min_header_height: f32,
    /// Extra header height added on top of the title font size
    pub title_extra: f32,
    /// Side length of the close glyph button
    pub close_button_size: f32,
    /// Outline thickness for panels and buttons
    pub border_width: f32,
    /// Horizontal text inset inside buttons and text fields
    pub text_padding: f32,
    /// Gap between a toggle box and its label
    pub toggle_gap: f32,
    /// Width of the text caret
    pub caret_width: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: 8.0,
            spacing: 6.0,
            scrollbar_gutter: 12.0,
            scrollbar_width: 8.0,
            wheel_step: 20.0,
            min_header_height: 18.0,
            title_extra: 12.0,
            close_button_size: 18.0,
            border_width: 2.0,
            text_padding: 6.0,
            toggle_gap: 6.0,
            caret_width: 2.0,
        }
    }
}

impl Config for LayoutConfig {}

impl LayoutConfig {
    /// Header height for a panel with or without a title
    pub fn header_height(&self, title_font_size: Option<f32>) -> f32 {
        let wanted = match title_font_size {
            Some(size) => size + self.title_extra,
            None => self.padding * 1.5,
        };
        wanted.max(self.min_header_height)
    }
}

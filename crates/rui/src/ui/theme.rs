//! Theme and per-widget styles
//!
//! A `Theme` bundles every widget palette plus the body and title fonts.
//! Themes are plain data: copy one, tweak a field, hand it back to the
//! context. They can also be loaded from TOML or RON files.

use serde::{Deserialize, Serialize};

use crate::backend::FontSpec;
use crate::config::Config;
use crate::foundation::math::{rgba, Color};

/// Horizontal alignment of panel content and text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalAlign {
    /// Flush with the left edge
    #[default]
    Left,
    /// Centered
    Center,
    /// Flush with the right edge
    Right,
}

/// Panel colors and content alignment
///
/// Can be passed per panel to override the theme without touching it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelStyle {
    /// Panel body background
    pub body_color: Color,
    /// Title bar background
    pub title_color: Color,
    /// Panel and title bar outline
    pub border_color: Color,
    /// Title text
    pub title_text_color: Color,
    /// Labels placed inside the panel
    pub label_color: Color,
    /// Horizontal placement of auto-laid-out widgets
    pub content_align: HorizontalAlign,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            body_color: rgba(240, 240, 240, 255),
            title_color: rgba(200, 200, 200, 255),
            border_color: rgba(80, 80, 80, 255),
            title_text_color: rgba(0, 0, 0, 255),
            label_color: rgba(80, 80, 80, 255),
            content_align: HorizontalAlign::Left,
        }
    }
}

/// Button colors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonStyle {
    /// Resting background
    pub normal_color: Color,
    /// Hover background
    pub hover_color: Color,
    /// Background on the frame the button is pressed
    pub pressed_color: Color,
    /// Outline
    pub border_color: Color,
    /// Label text
    pub text_color: Color,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            normal_color: rgba(200, 200, 200, 255),
            hover_color: rgba(180, 180, 220, 255),
            pressed_color: rgba(160, 160, 200, 255),
            border_color: rgba(80, 80, 80, 255),
            text_color: rgba(0, 0, 0, 255),
        }
    }
}

/// Slider colors and knob size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderStyle {
    /// Track background
    pub track_color: Color,
    /// Filled part of the track left of the knob
    pub fill_color: Color,
    /// Knob at rest
    pub knob_color: Color,
    /// Knob while hovered or dragged
    pub knob_active_color: Color,
    /// Knob width in pixels
    pub knob_width: f32,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            track_color: rgba(200, 200, 200, 255),
            fill_color: rgba(150, 170, 220, 255),
            knob_color: rgba(80, 80, 80, 255),
            knob_active_color: rgba(0, 121, 241, 255),
            knob_width: 12.0,
        }
    }
}

/// Toggle (checkbox) colors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleStyle {
    /// Box background
    pub box_color: Color,
    /// Box background while hovered
    pub box_hover_color: Color,
    /// Check mark fill
    pub check_color: Color,
    /// Box outline
    pub border_color: Color,
    /// Label text
    pub label_color: Color,
}

impl Default for ToggleStyle {
    fn default() -> Self {
        Self {
            box_color: rgba(230, 230, 230, 255),
            box_hover_color: rgba(210, 210, 235, 255),
            check_color: rgba(0, 121, 241, 255),
            border_color: rgba(80, 80, 80, 255),
            label_color: rgba(40, 40, 40, 255),
        }
    }
}

/// Text input colors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextInputStyle {
    /// Background while unfocused
    pub background_color: Color,
    /// Background while focused
    pub focused_background_color: Color,
    /// Outline while unfocused
    pub border_color: Color,
    /// Outline while focused
    pub focused_border_color: Color,
    /// Text
    pub text_color: Color,
    /// Caret
    pub caret_color: Color,
}

impl Default for TextInputStyle {
    fn default() -> Self {
        Self {
            background_color: rgba(250, 250, 250, 255),
            focused_background_color: rgba(255, 255, 255, 255),
            border_color: rgba(130, 130, 130, 255),
            focused_border_color: rgba(0, 121, 241, 255),
            text_color: rgba(20, 20, 20, 255),
            caret_color: rgba(20, 20, 20, 255),
        }
    }
}

/// Complete UI palette
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Panel chrome and panel labels
    pub panel: PanelStyle,
    /// Buttons
    pub button: ButtonStyle,
    /// Sliders
    pub slider: SliderStyle,
    /// Toggles
    pub toggle: ToggleStyle,
    /// Text inputs
    pub text_input: TextInputStyle,
    /// Body font for labels and widget text
    pub font: FontSpec,
    /// Panel title font
    pub title_font: FontSpec,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            panel: PanelStyle::default(),
            button: ButtonStyle::default(),
            slider: SliderStyle::default(),
            toggle: ToggleStyle::default(),
            text_input: TextInputStyle::default(),
            font: FontSpec::sized(20.0),
            title_font: FontSpec::sized(12.0),
        }
    }
}

impl Config for Theme {}

impl Theme {
    /// Replace unusable font sizes with the defaults
    ///
    /// Guarantees both fonts have a positive, finite size.
    pub fn resolved(mut self) -> Self {
        let defaults = Self::default();
        if !(self.font.size.is_finite() && self.font.size > 0.0) {
            self.font = defaults.font;
        }
        if !(self.title_font.size.is_finite() && self.title_font.size > 0.0) {
            self.title_font = defaults.title_font;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::FontHandle;

    #[test]
    fn test_default_theme_has_fonts() {
        let theme = Theme::default();
        assert_eq!(theme.font.handle, FontHandle::DEFAULT);
        assert!(theme.font.size > 0.0);
        assert!(theme.title_font.size > 0.0);
    }

    #[test]
    fn test_resolved_repairs_fonts() {
        let mut theme = Theme::default();
        theme.font.size = 0.0;
        theme.title_font.size = f32::NAN;

        let theme = theme.resolved();
        assert_eq!(theme.font, Theme::default().font);
        assert_eq!(theme.title_font, Theme::default().title_font);
    }

    #[test]
    fn test_partial_theme_file() {
        let text = r#"
            [panel]
            content_align = "Center"

            [slider]
            knob_width = 16.0
        "#;
        let theme = Theme::from_str_with_format(text, "theme.toml").unwrap();
        assert_eq!(theme.panel.content_align, HorizontalAlign::Center);
        assert_eq!(theme.slider.knob_width, 16.0);
        assert_eq!(theme.button, ButtonStyle::default());
    }
}

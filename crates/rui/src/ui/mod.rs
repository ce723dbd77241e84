//! Immediate-mode UI
//!
//! Architecture:
//! - `UiContext`: long-lived state (theme, focus, drag latch, scroll, fades)
//! - `Frame`: one frame of widget calls against a backend
//! - panel: auto-layout panels with scrolling
//! - widgets/: buttons, labels, sliders, toggles, text inputs

pub mod alpha;
pub mod context;
pub mod fade;
pub mod id;
pub mod input;
pub mod panel;
pub mod scroll;
pub mod theme;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use alpha::{AlphaStack, ALPHA_STACK_DEPTH};
pub use context::{Frame, UiContext};
pub use fade::{FadeOverlay, FADE_OPAQUE};
pub use id::WidgetId;
pub use input::FrameInput;
pub use panel::{Panel, PanelFlags};
pub use scroll::{ScrollState, Scrollbar};
pub use theme::{
    ButtonStyle, HorizontalAlign, PanelStyle, SliderStyle, TextInputStyle, Theme, ToggleStyle,
};
pub use widgets::TextInput;

//! # RUI
//!
//! A small immediate-mode UI layer for real-time renderers: panels, labels,
//! buttons, sliders, toggles, text inputs, scrolling panels and a fade
//! overlay. Drawing and input go through the [`backend`] traits, so the same
//! code runs on any renderer or headless in tests.
//!
//! ## Quick Start
//!
//! ```rust
//! use rui::prelude::*;
//!
//! let mut ui = UiContext::new();
//! let mut backend = HeadlessBackend::new(800.0, 600.0);
//!
//! // Once per frame
//! let mut frame = ui.begin_frame(&mut backend);
//! frame.panel_begin(&Panel::new("menu", Rect::new(20.0, 20.0, 200.0, 300.0))
//!     .title("Menu")
//!     .scrollable(true));
//! if frame.panel_button("Start", 30.0) {
//!     // start the game
//! }
//! frame.panel_label("v1.1");
//! frame.panel_end();
//! frame.draw_fade();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod backend;
pub mod ui;

/// Common imports for UI users
pub mod prelude {
    pub use crate::{
        backend::{Backend, FontHandle, FontSpec, HeadlessBackend, InputBackend, Key, RenderBackend},
        config::{Config, ConfigError, LayoutConfig},
        foundation::math::{rgba, Color, Rect, Vec2},
        ui::{
            Frame, HorizontalAlign, Panel, PanelFlags, PanelStyle, TextInput, Theme, UiContext,
            WidgetId,
        },
    };
}

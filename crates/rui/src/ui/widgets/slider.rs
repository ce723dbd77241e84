//! Slider widget - horizontal value slider
//!
//! The knob travels over `bounds.width - knob_width` pixels. A press on the
//! track or knob takes the context's drag latch; while it is held the value
//! follows the live pointer, wherever it goes, until the button is released.

use crate::backend::Backend;
use crate::foundation::math::Rect;
use crate::ui::context::Frame;
use crate::ui::id::WidgetId;

/// Map a pointer X to a value on `[min, max]`
///
/// The knob is centered on the pointer; positions past either end clamp.
pub fn value_at(bounds: Rect, knob_width: f32, pointer_x: f32, min: f32, max: f32) -> f32 {
    let travel = bounds.width - knob_width;
    if travel <= 0.0 {
        return min;
    }
    let t = ((pointer_x - bounds.x - knob_width / 2.0) / travel).clamp(0.0, 1.0);
    min + t * (max - min)
}

/// Normalize a range and clamp `value` into it
///
/// Returns `(min, max, value)` with `min <= max`. NaN values clamp to `min`.
/// A NaN bound collapses the range onto the other bound; with both bounds NaN
/// the value passes through (NaN becomes 0).
pub fn normalize_range(value: f32, min: f32, max: f32) -> (f32, f32, f32) {
    let (min, max) = match (min.is_nan(), max.is_nan()) {
        (false, false) => (min, max),
        (true, false) => (max, max),
        (false, true) => (min, min),
        (true, true) => {
            let value = if value.is_nan() { 0.0 } else { value };
            return (value, value, value);
        }
    };
    let (min, max) = if max < min { (max, min) } else { (min, max) };
    let value = if value.is_nan() { min } else { value.clamp(min, max) };
    (min, max, value)
}

impl<'a, B: Backend + ?Sized> Frame<'a, B> {
    /// Draw a slider; returns the new value, always within `[min, max]`
    ///
    /// A reversed range (`max < min`) is swapped first.
    pub fn slider(&mut self, id: impl Into<WidgetId>, bounds: Rect, value: f32, min: f32, max: f32) -> f32 {
        let id = id.into();
        let style = self.theme().slider;
        let (min, max, mut value) = normalize_range(value, min, max);
        let knob_width = style.knob_width.clamp(0.0, bounds.width.max(0.0));

        if self.clicked(bounds) && self.ctx.active_drag.is_none() {
            self.ctx.active_drag = Some(id);
            log::debug!("Slider drag started for {:?}", id);
        }

        let dragging = self.ctx.active_drag == Some(id);
        if dragging {
            if self.backend.is_mouse_down() {
                let pointer_x = self.backend.mouse_position().x;
                value = value_at(bounds, knob_width, pointer_x, min, max);
            } else {
                self.ctx.active_drag = None;
                log::debug!("Slider drag released for {:?}", id);
            }
        }

        let t = if max > min { (value - min) / (max - min) } else { 0.0 };
        let knob_x = bounds.x + t * (bounds.width - knob_width).max(0.0);
        let track = Rect::new(bounds.x, bounds.y + bounds.height / 3.0, bounds.width, bounds.height / 3.0);
        let fill = Rect::new(track.x, track.y, knob_x - bounds.x + knob_width / 2.0, track.height);
        let knob = Rect::new(knob_x, bounds.y, knob_width, bounds.height);

        let knob_color = if dragging || self.hovered(knob) {
            style.knob_active_color
        } else {
            style.knob_color
        };

        self.fill_rect(track, style.track_color);
        self.fill_rect(fill.non_negative(), style.fill_color);
        self.fill_rect(knob, knob_color);

        value
    }

    /// Draw a slider; `on_change` runs once when the returned value differs from `value`
    pub fn slider_with(
        &mut self,
        id: impl Into<WidgetId>,
        bounds: Rect,
        value: f32,
        min: f32,
        max: f32,
        on_change: impl FnOnce(f32),
    ) -> f32 {
        let new_value = self.slider(id, bounds, value, min, max);
        if new_value != value {
            on_change(new_value);
        }
        new_value
    }
}

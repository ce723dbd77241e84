//! Scroll controller
//!
//! Encapsulates the scroll state of one scrollable panel: offset, the content
//! height measured on the previous frame, and the scrollbar thumb drag.
//!
//! Clamping deliberately lags one frame: `begin` clamps against the content
//! height recorded by the previous `end`, so layout runs once per frame.

use super::id::WidgetId;
use crate::foundation::math::{Rect, Vec2};

/// Scroll state for a single panel
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    offset: f32,
    /// Content height recorded at the previous frame's `end`
    prev_content_height: Option<f32>,
    dragging: bool,
    /// Distance from the pointer to the top of the thumb during a drag
    grab_offset: f32,
}

/// Pointer state consumed by the scrollbar at panel end
#[derive(Debug, Clone, Copy)]
pub struct ScrollbarInput {
    /// Pointer position sampled at frame start
    pub pointer: Vec2,
    /// Press edge this frame
    pub pressed: bool,
    /// Live pointer position
    pub live_pointer: Vec2,
    /// Live button level
    pub live_down: bool,
}

/// Scrollbar geometry to draw after `end`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scrollbar {
    /// Full track rectangle
    pub track: Rect,
    /// Thumb rectangle at the final offset
    pub thumb: Rect,
    /// Pointer over the thumb at frame start
    pub hovered: bool,
    /// Thumb is being dragged
    pub dragging: bool,
}

impl ScrollState {
    /// Create a state scrolled to the top
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scroll offset in pixels
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Content height recorded at the last `end`, if any
    pub fn prev_content_height(&self) -> Option<f32> {
        self.prev_content_height
    }

    /// Whether the thumb is being dragged
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Largest valid offset for a viewport of `view_height`, using last frame's content
    pub fn max_offset(&self, view_height: f32) -> f32 {
        self.prev_content_height
            .map_or(0.0, |content| (content - view_height).max(0.0))
    }

    /// Apply wheel input and clamp; returns the offset for this frame's layout
    ///
    /// `wheel` must already be zero when the pointer is outside the panel.
    pub fn begin(&mut self, wheel: f32, wheel_step: f32, view_height: f32) -> f32 {
        if wheel.is_finite() {
            self.offset += wheel * wheel_step;
        }

        let max_offset = self.max_offset(view_height);
        self.offset = if max_offset > 0.0 {
            self.offset.clamp(0.0, max_offset)
        } else {
            0.0
        };
        self.offset
    }

    /// Record this frame's content height, handle thumb drag, and clamp
    ///
    /// `track` is the scrollbar track; its height is the viewport height.
    /// `latch` is the context-wide drag slot shared with sliders.
    pub fn end(
        &mut self,
        track: Rect,
        content_height: f32,
        input: ScrollbarInput,
        thumb_id: WidgetId,
        latch: &mut Option<WidgetId>,
    ) -> Option<Scrollbar> {
        self.prev_content_height = Some(content_height.max(0.0));

        // Latch taken by someone else or cleared on release
        if self.dragging && *latch != Some(thumb_id) {
            self.dragging = false;
        }

        let view_height = track.height;
        if content_height <= view_height || view_height <= 0.0 {
            self.offset = 0.0;
            self.release(thumb_id, latch);
            return None;
        }

        let max_offset = content_height - view_height;
        let thumb_height = view_height * (view_height / content_height);
        let travel = view_height - thumb_height;
        let thumb_y = |offset: f32| track.y + (offset.clamp(0.0, max_offset) / max_offset) * travel;

        let mut thumb = Rect::new(track.x, thumb_y(self.offset), track.width, thumb_height);
        let hovered = thumb.contains(input.pointer);

        if input.pressed && hovered && latch.is_none() {
            self.dragging = true;
            self.grab_offset = input.pointer.y - thumb.y;
            *latch = Some(thumb_id);
            log::debug!("Scrollbar drag started for {:?}", thumb_id);
        }

        if self.dragging {
            if input.live_down {
                let new_y = (input.live_pointer.y - self.grab_offset).clamp(track.y, track.y + travel);
                if travel > 0.0 {
                    self.offset = (new_y - track.y) / travel * max_offset;
                }
            } else {
                self.release(thumb_id, latch);
            }
        }

        self.offset = self.offset.clamp(0.0, max_offset);
        thumb.y = thumb_y(self.offset);

        Some(Scrollbar {
            track,
            thumb,
            hovered,
            dragging: self.dragging,
        })
    }

    fn release(&mut self, thumb_id: WidgetId, latch: &mut Option<WidgetId>) {
        self.dragging = false;
        if *latch == Some(thumb_id) {
            *latch = None;
            log::debug!("Scrollbar drag released for {:?}", thumb_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn idle(pointer: Vec2) -> ScrollbarInput {
        ScrollbarInput { pointer, pressed: false, live_pointer: pointer, live_down: false }
    }

    fn thumb_id() -> WidgetId {
        WidgetId::new("panel").with("scrollbar")
    }

    #[test]
    fn test_first_frame_has_no_range() {
        let mut state = ScrollState::new();
        assert_eq!(state.begin(-5.0, 20.0, 276.0), 0.0);
        assert_eq!(state.begin(5.0, 20.0, 276.0), 0.0);
    }

    #[test]
    fn test_wheel_clamps_to_previous_content() {
        let mut state = ScrollState::new();
        let mut latch = None;
        let track = Rect::new(240.0, 74.0, 8.0, 276.0);
        state.begin(0.0, 20.0, 276.0);
        state.end(track, 720.0, idle(Vec2::zeros()), thumb_id(), &mut latch);

        assert_relative_eq!(state.max_offset(276.0), 444.0);
        assert_relative_eq!(state.begin(3.0, 20.0, 276.0), 60.0);
        assert_relative_eq!(state.begin(100.0, 20.0, 276.0), 444.0);
        assert_relative_eq!(state.begin(-100.0, 20.0, 276.0), 0.0);
    }

    #[test]
    fn test_content_shrink_snaps_to_zero() {
        let mut state = ScrollState::new();
        let mut latch = None;
        let track = Rect::new(0.0, 0.0, 8.0, 100.0);
        state.end(track, 300.0, idle(Vec2::zeros()), thumb_id(), &mut latch);
        state.begin(5.0, 20.0, 100.0);
        assert_relative_eq!(state.offset(), 100.0);

        assert!(state.end(track, 80.0, idle(Vec2::zeros()), thumb_id(), &mut latch).is_none());
        assert_eq!(state.offset(), 0.0);
        assert_eq!(state.begin(5.0, 20.0, 100.0), 0.0);
    }

    #[test]
    fn test_thumb_geometry() {
        let mut state = ScrollState::new();
        let mut latch = None;
        let track = Rect::new(0.0, 50.0, 8.0, 100.0);
        state.end(track, 400.0, idle(Vec2::zeros()), thumb_id(), &mut latch);
        state.begin(15.0, 20.0, 100.0);

        let bar = state.end(track, 400.0, idle(Vec2::zeros()), thumb_id(), &mut latch).unwrap();
        assert_relative_eq!(bar.thumb.height, 25.0);
        assert_relative_eq!(bar.thumb.y, 50.0 + 75.0);
    }

    #[test]
    fn test_thumb_drag_maps_pointer_to_offset() {
        let mut state = ScrollState::new();
        let mut latch = None;
        let track = Rect::new(0.0, 0.0, 8.0, 100.0);
        state.end(track, 400.0, idle(Vec2::zeros()), thumb_id(), &mut latch);

        // Thumb spans y 0..25; grab it 10px below its top
        let press = ScrollbarInput {
            pointer: Vec2::new(4.0, 10.0),
            pressed: true,
            live_pointer: Vec2::new(4.0, 10.0),
            live_down: true,
        };
        state.begin(0.0, 20.0, 100.0);
        state.end(track, 400.0, press, thumb_id(), &mut latch);
        assert!(state.is_dragging());
        assert_eq!(latch, Some(thumb_id()));

        // Move halfway down the travel (75px): thumb top at 37.5
        let drag = ScrollbarInput {
            pointer: Vec2::new(4.0, 10.0),
            pressed: false,
            live_pointer: Vec2::new(40.0, 47.5),
            live_down: true,
        };
        state.begin(0.0, 20.0, 100.0);
        state.end(track, 400.0, drag, thumb_id(), &mut latch);
        assert_relative_eq!(state.offset(), 150.0);

        // Far past the bottom clamps to max
        let overshoot = ScrollbarInput { live_pointer: Vec2::new(4.0, 900.0), ..drag };
        state.end(track, 400.0, overshoot, thumb_id(), &mut latch);
        assert_relative_eq!(state.offset(), 300.0);

        // Release ends the drag and frees the latch
        state.end(track, 400.0, idle(Vec2::new(4.0, 900.0)), thumb_id(), &mut latch);
        assert!(!state.is_dragging());
        assert_eq!(latch, None);
    }

    #[test]
    fn test_drag_blocked_by_other_latch() {
        let mut state = ScrollState::new();
        let other = WidgetId::new("slider");
        let mut latch = Some(other);
        let track = Rect::new(0.0, 0.0, 8.0, 100.0);
        state.end(track, 400.0, idle(Vec2::zeros()), thumb_id(), &mut latch);

        let press = ScrollbarInput {
            pointer: Vec2::new(4.0, 5.0),
            pressed: true,
            live_pointer: Vec2::new(4.0, 5.0),
            live_down: true,
        };
        state.end(track, 400.0, press, thumb_id(), &mut latch);
        assert!(!state.is_dragging());
        assert_eq!(latch, Some(other));
    }
}

//! UI context and per-frame handle
//!
//! `UiContext` owns everything that outlives a single call: theme, layout
//! metrics, focus, drag latch, per-panel scroll state, the alpha stack and the
//! fade overlay. `Frame` pairs the context with a backend for the duration of
//! one frame; every widget call is a method on `Frame`.

use std::collections::HashMap;

use super::alpha::AlphaStack;
use super::fade::FadeOverlay;
use super::id::WidgetId;
use super::input::FrameInput;
use super::panel::ActivePanel;
use super::scroll::ScrollState;
use super::theme::Theme;
use crate::backend::{Backend, FontSpec};
use crate::config::LayoutConfig;
use crate::foundation::math::{with_alpha, Color, Rect, Vec2};

/// Long-lived UI state
#[derive(Debug, Default)]
pub struct UiContext {
    pub(crate) config: LayoutConfig,
    theme: Option<Theme>,
    pub(crate) input: FrameInput,
    pub(crate) alpha: AlphaStack,
    pub(crate) panel: Option<ActivePanel>,
    pub(crate) scroll: HashMap<WidgetId, ScrollState>,
    pub(crate) focus: Option<WidgetId>,
    /// Whether the focused field was drawn since the last frame start
    pub(crate) focus_seen: bool,
    pub(crate) active_drag: Option<WidgetId>,
    pub(crate) fade: FadeOverlay,
    /// Width override for auto-laid-out widgets (0 = full interior width)
    pub(crate) content_width: f32,
    /// Visible content area of the open panel; pointer hits outside it are ignored
    pub(crate) input_clip: Option<Rect>,
    frame_count: u64,
}

impl UiContext {
    /// Create a context with default layout metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with custom layout metrics
    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Layout metrics in use
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Active theme (the built-in defaults until one is set)
    pub fn theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }

    /// Replace the whole theme
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme.resolved());
    }

    /// Restore the built-in theme
    pub fn reset_theme(&mut self) {
        self.theme = Some(Theme::default());
    }

    /// Start a frame: sample input, advance animations
    pub fn begin_frame<'a, B: Backend + ?Sized>(&'a mut self, backend: &'a mut B) -> Frame<'a, B> {
        self.theme.get_or_insert_with(Theme::default);
        self.input = FrameInput::sample(backend);
        self.frame_count += 1;

        log::trace!(
            "UI frame {}: mouse {:?} pressed={} down={}",
            self.frame_count,
            (self.input.mouse.x, self.input.mouse.y),
            self.input.pressed,
            self.input.down
        );

        // A press while the focused field went undrawn cannot land on it
        if self.input.pressed && !self.focus_seen {
            if let Some(id) = self.focus.take() {
                log::debug!("Text input {:?} lost focus (not drawn)", id);
            }
        }
        self.focus_seen = false;

        if !self.input.down {
            if let Some(id) = self.active_drag.take() {
                log::debug!("Drag latch released for {:?}", id);
            }
        }

        self.fade.update(self.input.delta_time);

        let mut frame = Frame { ctx: self, backend };
        if frame.ctx.panel.is_some() {
            log::warn!("Panel still open at frame start, closing it");
            frame.panel_end();
        }
        frame.ctx.alpha.reset();
        frame
    }

    /// Id of the focused text field, if any
    pub fn focused(&self) -> Option<WidgetId> {
        self.focus
    }

    /// Drop keyboard focus
    pub fn clear_focus(&mut self) {
        self.focus = None;
    }

    /// Id of the widget currently holding the drag latch, if any
    pub fn active_drag(&self) -> Option<WidgetId> {
        self.active_drag
    }

    /// Current scroll offset of a scrollable panel
    pub fn scroll_offset(&self, panel: impl Into<WidgetId>) -> f32 {
        self.scroll.get(&panel.into()).map_or(0.0, ScrollState::offset)
    }

    /// Stored scroll state of a scrollable panel
    pub fn scroll_state(&self, panel: impl Into<WidgetId>) -> Option<&ScrollState> {
        self.scroll.get(&panel.into())
    }

    /// Forget the scroll state of a panel that no longer exists
    pub fn forget_panel(&mut self, panel: impl Into<WidgetId>) {
        self.scroll.remove(&panel.into());
    }

    /// Whether a panel is between begin and end
    pub fn panel_active(&self) -> bool {
        self.panel.is_some()
    }

    /// Frames started so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Start a fade towards an opaque overlay
    pub fn fade_out(&mut self, duration: f32) {
        self.fade.fade_out(duration);
    }

    /// Start a fade towards a transparent overlay
    pub fn fade_in(&mut self, duration: f32) {
        self.fade.fade_in(duration);
    }

    /// Overlay alpha on the 0-255 scale
    pub fn fade_alpha(&self) -> f32 {
        self.fade.alpha()
    }

    /// Whether a fade animation is running
    pub fn is_fading(&self) -> bool {
        self.fade.is_active()
    }

    /// Overlay fill color
    pub fn set_overlay_color(&mut self, color: Color) {
        self.fade.set_color(color);
    }
}

/// One frame of UI calls against a backend
pub struct Frame<'a, B: Backend + ?Sized> {
    pub(crate) ctx: &'a mut UiContext,
    pub(crate) backend: &'a mut B,
}

impl<'a, B: Backend + ?Sized> Frame<'a, B> {
    /// The underlying context
    pub fn context(&mut self) -> &mut UiContext {
        self.ctx
    }

    /// The underlying backend
    pub fn backend(&mut self) -> &mut B {
        self.backend
    }

    /// Input snapshot taken at frame start
    pub fn input(&self) -> &FrameInput {
        &self.ctx.input
    }

    /// Active theme
    pub(crate) fn theme(&self) -> Theme {
        self.ctx.theme()
    }

    /// Enter a faded level for subsequent drawing
    pub fn push_alpha(&mut self, alpha: f32) {
        self.ctx.alpha.push(alpha);
    }

    /// Leave the innermost faded level
    pub fn pop_alpha(&mut self) {
        self.ctx.alpha.pop();
    }

    /// Current cumulative alpha
    pub fn alpha(&self) -> f32 {
        self.ctx.alpha.current()
    }

    /// Draw the fade overlay over the whole surface
    pub fn draw_fade(&mut self) {
        if let Some(color) = self.ctx.fade.draw_color() {
            let size = self.backend.screen_size();
            self.backend.draw_rect(Rect::new(0.0, 0.0, size.x, size.y), color);
        }
    }

    /// Finish the frame, closing a panel left open
    pub fn end(mut self) {
        if self.ctx.panel.is_some() {
            log::warn!("Panel still open at frame end, closing it");
            self.panel_end();
        }
    }

    // =========================================================================
    // Drawing helpers (apply the alpha stack)
    // =========================================================================

    pub(crate) fn fill_rect(&mut self, rect: Rect, color: Color) {
        let color = with_alpha(color, self.ctx.alpha.current());
        self.backend.draw_rect(rect, color);
    }

    pub(crate) fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color) {
        let color = with_alpha(color, self.ctx.alpha.current());
        self.backend.draw_rect_lines(rect, thickness, color);
    }

    pub(crate) fn text(&mut self, text: &str, position: Vec2, font: &FontSpec, color: Color) {
        let color = with_alpha(color, self.ctx.alpha.current());
        self.backend.draw_text(text, position, font, color);
    }

    pub(crate) fn measure(&self, text: &str, font: &FontSpec) -> Vec2 {
        self.backend.measure_text(text, font)
    }

    /// Whether the frame-start pointer lies inside `rect` and the visible panel area
    pub(crate) fn hovered(&self, rect: Rect) -> bool {
        let mouse = self.ctx.input.mouse;
        rect.contains(mouse) && self.ctx.input_clip.map_or(true, |clip| clip.contains(mouse))
    }

    /// Whether a press edge happened inside `rect` this frame
    pub(crate) fn clicked(&self, rect: Rect) -> bool {
        self.ctx.input.pressed && self.hovered(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{DrawCommand, HeadlessBackend, Key, RenderBackend};
    use crate::foundation::math::rgba;
    use crate::ui::{Panel, TextInput};
    use approx::assert_relative_eq;

    #[test]
    fn test_custom_layout_config() {
        let config = LayoutConfig { padding: 4.0, ..LayoutConfig::default() };
        let mut ui = UiContext::with_config(config);
        let mut backend = HeadlessBackend::new(800.0, 600.0);

        let mut frame = ui.begin_frame(&mut backend);
        frame.panel_begin(&Panel::new("p", Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert_relative_eq!(frame.allocate_row(10.0).unwrap().x, 4.0);
        frame.end();

        assert_relative_eq!(ui.config().padding, 4.0);
        assert_eq!(ui.frame_count(), 1);
        assert!(!ui.panel_active());
        assert_eq!(backend.clip_depth(), 0);
    }

    #[test]
    fn test_theme_replace_and_reset() {
        let mut ui = UiContext::new();
        let mut theme = Theme::default();
        theme.font.size = -3.0;
        theme.panel.label_color = rgba(1, 2, 3, 255);

        ui.set_theme(theme);
        assert_eq!(ui.theme().font, Theme::default().font);
        assert_eq!(ui.theme().panel.label_color, rgba(1, 2, 3, 255));

        ui.reset_theme();
        assert_eq!(ui.theme(), Theme::default());
    }

    #[test]
    fn test_theme_readable_through_shared_borrow() {
        let ui = UiContext::new();
        let shared: &UiContext = &ui;
        assert_eq!(shared.theme(), Theme::default());
        assert_eq!(shared.theme().title_font.size, 12.0);
    }

    #[test]
    fn test_frame_accessors() {
        let mut ui = UiContext::new();
        let mut backend = HeadlessBackend::new(320.0, 240.0);
        backend.push_key(Key::Home);

        let mut frame = ui.begin_frame(&mut backend);
        assert_eq!(frame.input().keys, vec![Key::Home]);
        assert_eq!(frame.input().screen_size, Vec2::new(320.0, 240.0));
        assert_eq!(frame.backend().screen_size(), Vec2::new(320.0, 240.0));
        assert_eq!(frame.context().frame_count(), 1);
    }

    #[test]
    fn test_clear_focus_and_forget_panel() {
        let mut ui = UiContext::new();
        let mut backend = HeadlessBackend::new(800.0, 600.0);
        let mut field = TextInput::new("name", 8);

        backend.press_at(5.0, 5.0);
        let mut frame = ui.begin_frame(&mut backend);
        frame.text_input(Rect::new(0.0, 0.0, 50.0, 20.0), &mut field);
        frame.panel_begin(&Panel::new("list", Rect::new(100.0, 0.0, 100.0, 100.0)).scrollable(true));
        frame.panel_end();

        assert_eq!(ui.focused(), Some(field.id()));
        assert!(ui.scroll_state("list").is_some());

        ui.clear_focus();
        ui.forget_panel("list");
        assert_eq!(ui.focused(), None);
        assert!(ui.scroll_state("list").is_none());
        assert_eq!(ui.scroll_offset("list"), 0.0);
    }

    #[test]
    fn test_drawing_respects_alpha() {
        let mut ui = UiContext::new();
        let mut backend = HeadlessBackend::new(800.0, 600.0);

        let mut frame = ui.begin_frame(&mut backend);
        frame.push_alpha(0.5);
        frame.label_colored("fade", Vec2::zeros(), rgba(255, 255, 255, 255));
        frame.pop_alpha();
        frame.pop_alpha();
        assert_relative_eq!(frame.alpha(), 1.0);

        let commands = backend.take_commands();
        assert!(backend.commands().is_empty());
        match &commands[0] {
            DrawCommand::Text { color, .. } => assert_relative_eq!(color.w, 0.5),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_alpha_resets_each_frame() {
        let mut ui = UiContext::new();
        let mut backend = HeadlessBackend::new(800.0, 600.0);

        let mut frame = ui.begin_frame(&mut backend);
        frame.push_alpha(0.2);
        frame.push_alpha(0.5);

        backend.next_frame();
        let frame = ui.begin_frame(&mut backend);
        assert_relative_eq!(frame.alpha(), 1.0);
    }

    #[test]
    fn test_overlay_follows_screen_and_color() {
        let mut ui = UiContext::new();
        let mut backend = HeadlessBackend::new(800.0, 600.0);
        ui.set_overlay_color(rgba(255, 0, 0, 255));
        ui.fade_out(0.0);
        assert_relative_eq!(ui.fade_alpha(), 255.0);

        backend.set_screen_size(1024.0, 768.0);
        let mut frame = ui.begin_frame(&mut backend);
        frame.draw_fade();

        assert_eq!(
            backend.filled_rects(),
            vec![(Rect::new(0.0, 0.0, 1024.0, 768.0), rgba(255, 0, 0, 255))]
        );
    }
}

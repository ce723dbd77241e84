//! Panel layout engine
//!
//! A panel is a bordered rectangle with an optional title bar. Between
//! `panel_begin` and `panel_end` it hosts a single-column auto-layout stack:
//! each panel widget takes the next row below the layout cursor.
//!
//! Panels do not nest. Panel widgets called with no open panel draw nothing
//! and return their input unchanged.

use bitflags::bitflags;

use super::context::Frame;
use super::id::WidgetId;
use super::scroll::ScrollbarInput;
use super::theme::{HorizontalAlign, PanelStyle};
use super::widgets::TextInput;
use crate::backend::Backend;
use crate::foundation::math::{rgba, Rect, Vec2};

bitflags! {
    /// Panel behaviour options
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PanelFlags: u8 {
        /// Content scrolls vertically with a scrollbar
        const SCROLLABLE = 1 << 0;
        /// Title bar shows a close button
        const CLOSABLE = 1 << 1;
    }
}

/// Description of an auto-layout panel for one frame
#[derive(Debug, Clone)]
pub struct Panel<'t> {
    id: WidgetId,
    bounds: Rect,
    title: Option<&'t str>,
    flags: PanelFlags,
    style: Option<PanelStyle>,
    alpha: Option<f32>,
}

impl<'t> Panel<'t> {
    /// Create a panel description
    ///
    /// `id` keys the panel's scroll state across frames.
    pub fn new(id: impl Into<WidgetId>, bounds: Rect) -> Self {
        Self {
            id: id.into(),
            bounds,
            title: None,
            flags: PanelFlags::empty(),
            style: None,
            alpha: None,
        }
    }

    /// Show a title bar
    pub fn title(mut self, title: &'t str) -> Self {
        self.title = Some(title);
        self
    }

    /// Enable or disable vertical scrolling
    pub fn scrollable(mut self, scrollable: bool) -> Self {
        self.flags.set(PanelFlags::SCROLLABLE, scrollable);
        self
    }

    /// Enable or disable the title bar close button
    pub fn closable(mut self, closable: bool) -> Self {
        self.flags.set(PanelFlags::CLOSABLE, closable);
        self
    }

    /// Replace all flags
    pub fn flags(mut self, flags: PanelFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Override the theme's panel style for this panel only
    pub fn style(mut self, style: PanelStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Fade the panel and its content by `alpha` (multiplied with outer levels)
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Panel identity
    pub fn id(&self) -> WidgetId {
        self.id
    }
}

/// Layout state of the open panel
#[derive(Debug, Clone)]
pub(crate) struct ActivePanel {
    pub id: WidgetId,
    pub bounds: Rect,
    pub header_height: f32,
    /// Absolute, pre-scroll Y of the next row
    pub cursor_y: f32,
    /// Top of the content area (below the header)
    pub content_top: f32,
    pub content_height: f32,
    pub inner_left: f32,
    pub inner_right: f32,
    pub scrollable: bool,
    pub scroll_offset: f32,
    pub style: PanelStyle,
    pub pushed_alpha: bool,
}

impl ActivePanel {
    fn inner_width(&self) -> f32 {
        (self.inner_right - self.inner_left).max(0.0)
    }

    fn view_height(&self) -> f32 {
        (self.bounds.height - self.header_height).max(0.0)
    }

    /// Place the next row and advance the cursor
    fn allocate(&mut self, height: f32, width_override: f32, spacing: f32) -> Rect {
        let inner_width = self.inner_width();
        let width = if width_override > 0.0 { width_override } else { inner_width };
        let width = width.clamp(0.0, inner_width);

        let x = match self.style.content_align {
            HorizontalAlign::Left => self.inner_left,
            HorizontalAlign::Center => self.inner_left + (inner_width - width) / 2.0,
            HorizontalAlign::Right => self.inner_left + inner_width - width,
        };

        let rect = Rect::new(x, self.cursor_y - self.scroll_offset, width, height);
        self.cursor_y += height + spacing;
        self.content_height = self.cursor_y - self.content_top;
        rect
    }
}

impl<'a, B: Backend + ?Sized> Frame<'a, B> {
    // =========================================================================
    // Static panels
    // =========================================================================

    /// Draw panel chrome using the theme style, without starting a layout scope
    pub fn panel(&mut self, bounds: Rect, title: Option<&str>) {
        let style = self.theme().panel;
        self.panel_styled(bounds, title, style);
    }

    /// Draw panel chrome with an explicit style
    pub fn panel_styled(&mut self, bounds: Rect, title: Option<&str>, style: PanelStyle) {
        let header = self.header_height(title.is_some());
        self.draw_chrome(bounds, title, &style, header);
    }

    fn header_height(&mut self, titled: bool) -> f32 {
        let title_size = self.theme().title_font.size;
        self.ctx.config.header_height(titled.then_some(title_size))
    }

    fn draw_chrome(&mut self, bounds: Rect, title: Option<&str>, style: &PanelStyle, header: f32) {
        let border = self.ctx.config.border_width;
        let bounds = bounds.non_negative();

        self.fill_rect(bounds, style.body_color);
        self.stroke_rect(bounds, border, style.border_color);

        if let Some(title) = title {
            let title_font = self.theme().title_font;
            let bar = Rect::new(bounds.x, bounds.y, bounds.width, header.min(bounds.height));
            self.fill_rect(bar, style.title_color);
            self.stroke_rect(bar, 1.0, style.border_color);

            let text_y = bounds.y + (header - title_font.size) / 2.0;
            let position = Vec2::new(bounds.x + self.ctx.config.text_padding, text_y);
            self.text(title, position, &title_font, style.title_text_color);
        }
    }

    /// Close glyph rectangle in the header's right corner
    fn close_button_rect(&self, bounds: Rect, header: f32) -> Rect {
        let size = self.ctx.config.close_button_size;
        let inset = ((header - size) / 2.0).max(0.0);
        Rect::new(bounds.right() - size - inset, bounds.y + inset, size, size)
    }

    fn draw_close_button(&mut self, rect: Rect, style: &PanelStyle) -> bool {
        let hovered = self.hovered(rect);
        let pressed = self.clicked(rect);

        if hovered {
            let hover = rgba(255, 255, 255, 90);
            self.fill_rect(rect, hover);
        }
        self.stroke_rect(rect, 1.0, style.border_color);

        let font = self.theme().title_font;
        let size = self.measure("x", &font);
        let position = Vec2::new(
            rect.x + (rect.width - size.x) / 2.0,
            rect.y + (rect.height - size.y) / 2.0,
        );
        self.text("x", position, &font, style.title_text_color);
        pressed
    }

    // =========================================================================
    // Auto-layout panels
    // =========================================================================

    /// Open an auto-layout panel
    ///
    /// Returns `true` when the close button was pressed this frame. The panel
    /// stays open regardless; the caller decides whether to stop showing it.
    pub fn panel_begin(&mut self, panel: &Panel<'_>) -> bool {
        if self.ctx.panel.is_some() {
            log::warn!("panel_begin while another panel is open; closing the previous panel");
            self.panel_end();
        }

        let config = self.ctx.config;
        let style = match panel.style {
            Some(style) => style,
            None => self.theme().panel,
        };

        let pushed_alpha = match panel.alpha {
            Some(alpha) => {
                self.ctx.alpha.push(alpha);
                true
            }
            None => false,
        };

        let bounds = panel.bounds;
        let scrollable = panel.flags.contains(PanelFlags::SCROLLABLE);
        let header = self.header_height(panel.title.is_some());
        let gutter = if scrollable { config.scrollbar_gutter } else { 0.0 };

        let inner_left = bounds.x + config.padding;
        let inner_right = (bounds.right() - config.padding - gutter).max(inner_left);
        let content_top = bounds.y + header;
        let view_height = (bounds.height - header).max(0.0);

        self.draw_chrome(bounds, panel.title, &style, header);

        let mut close_pressed = false;
        if panel.title.is_some() && panel.flags.contains(PanelFlags::CLOSABLE) {
            let rect = self.close_button_rect(bounds, header);
            close_pressed = self.draw_close_button(rect, &style);
        }

        let scroll_offset = if scrollable {
            let wheel = if self.hovered(bounds) { self.ctx.input.wheel } else { 0.0 };
            self.ctx
                .scroll
                .entry(panel.id)
                .or_default()
                .begin(wheel, config.wheel_step, view_height)
        } else {
            0.0
        };

        let visible = Rect::new(bounds.x, content_top, bounds.width, view_height).non_negative();
        self.backend.push_clip(visible);
        self.ctx.input_clip = Some(visible);

        log::debug!(
            "Panel {:?} begin: bounds {:?}, scrollable={}, offset {}",
            panel.id,
            bounds,
            scrollable,
            scroll_offset
        );

        self.ctx.panel = Some(ActivePanel {
            id: panel.id,
            bounds,
            header_height: header,
            cursor_y: content_top,
            content_top,
            content_height: 0.0,
            inner_left,
            inner_right,
            scrollable,
            scroll_offset,
            style,
            pushed_alpha,
        });

        close_pressed
    }

    /// Close the open panel; no-op when none is open
    pub fn panel_end(&mut self) {
        let Some(panel) = self.ctx.panel.take() else {
            return;
        };

        self.backend.pop_clip();
        self.ctx.input_clip = None;

        if panel.scrollable {
            self.finish_scroll(&panel);
        }

        if panel.pushed_alpha {
            self.ctx.alpha.pop();
        }
        self.ctx.content_width = 0.0;

        log::debug!("Panel {:?} end: content height {}", panel.id, panel.content_height);
    }

    fn finish_scroll(&mut self, panel: &ActivePanel) {
        let config = self.ctx.config;
        let track = Rect::new(
            panel.bounds.right() - config.scrollbar_width - (config.scrollbar_gutter - config.scrollbar_width) / 2.0,
            panel.content_top,
            config.scrollbar_width,
            panel.view_height(),
        );

        let input = ScrollbarInput {
            pointer: self.ctx.input.mouse,
            pressed: self.ctx.input.pressed,
            live_pointer: self.backend.mouse_position(),
            live_down: self.backend.is_mouse_down(),
        };

        let thumb_id = panel.id.with("scrollbar");
        let state = self.ctx.scroll.entry(panel.id).or_default();
        let Some(bar) = state.end(track, panel.content_height, input, thumb_id, &mut self.ctx.active_drag) else {
            return;
        };

        let style = self.theme().slider;
        let thumb_color = if bar.dragging {
            style.knob_active_color
        } else if bar.hovered {
            style.fill_color
        } else {
            style.knob_color
        };
        self.fill_rect(bar.track, style.track_color);
        self.fill_rect(bar.thumb, thumb_color);
    }

    // =========================================================================
    // Layout controls
    // =========================================================================

    /// Width of subsequent panel widgets (0 = full interior width)
    ///
    /// Reset to full width when the panel ends.
    pub fn set_content_width(&mut self, width: f32) {
        self.ctx.content_width = if width.is_finite() { width.max(0.0) } else { 0.0 };
    }

    /// Alignment of subsequent panel widgets in the open panel
    pub fn set_content_align(&mut self, align: HorizontalAlign) {
        if let Some(panel) = self.ctx.panel.as_mut() {
            panel.style.content_align = align;
        }
    }

    /// Reserve the next row of the open panel
    ///
    /// Returns `None` when no panel is open.
    pub fn allocate_row(&mut self, height: f32) -> Option<Rect> {
        let width = self.ctx.content_width;
        let spacing = self.ctx.config.spacing;
        let height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        self.ctx
            .panel
            .as_mut()
            .map(|panel| panel.allocate(height, width, spacing))
    }

    /// Measured content height of the open panel so far
    pub fn panel_content_height(&self) -> Option<f32> {
        self.ctx.panel.as_ref().map(|panel| panel.content_height)
    }

    // =========================================================================
    // Panel widgets
    // =========================================================================

    /// Button on the next row
    pub fn panel_button(&mut self, text: &str, height: f32) -> bool {
        match self.allocate_row(height) {
            Some(rect) => self.button(rect, text),
            None => false,
        }
    }

    /// Button on the next row; `on_press` runs when it is pressed
    pub fn panel_button_with(&mut self, text: &str, height: f32, on_press: impl FnOnce()) -> bool {
        let pressed = self.panel_button(text, height);
        if pressed {
            on_press();
        }
        pressed
    }

    /// Label on the next row, in the panel's label color
    pub fn panel_label(&mut self, text: &str) {
        let Some(style) = self.ctx.panel.as_ref().map(|panel| panel.style) else {
            return;
        };
        let font = self.theme().font;
        if let Some(rect) = self.allocate_row(font.size) {
            self.label_aligned(text, rect, style.content_align, style.label_color);
        }
    }

    /// Slider on the next row
    pub fn panel_slider(&mut self, id: impl Into<WidgetId>, value: f32, min: f32, max: f32, height: f32) -> f32 {
        match self.allocate_row(height) {
            Some(rect) => self.slider(id, rect, value, min, max),
            None => value,
        }
    }

    /// Slider on the next row; `on_change` runs when the value changes
    pub fn panel_slider_with(
        &mut self,
        id: impl Into<WidgetId>,
        value: f32,
        min: f32,
        max: f32,
        height: f32,
        on_change: impl FnOnce(f32),
    ) -> f32 {
        let new_value = self.panel_slider(id, value, min, max, height);
        if new_value != value {
            on_change(new_value);
        }
        new_value
    }

    /// Toggle on the next row
    ///
    /// The box and its label are aligned as one group within the row.
    pub fn panel_toggle(&mut self, label: &str, value: bool, height: f32) -> bool {
        let Some(align) = self.ctx.panel.as_ref().map(|panel| panel.style.content_align) else {
            return value;
        };
        let Some(rect) = self.allocate_row(height) else {
            return value;
        };

        let size = rect.height.min(rect.width);
        let label_width = if label.is_empty() {
            0.0
        } else {
            let font = self.theme().font;
            self.ctx.config.toggle_gap + self.measure(label, &font).x
        };
        let group = size + label_width;
        let x = match align {
            HorizontalAlign::Left => rect.x,
            HorizontalAlign::Center => rect.x + (rect.width - group) / 2.0,
            HorizontalAlign::Right => rect.right() - group,
        };
        self.toggle(Rect::new(x.max(rect.x), rect.y, size, size), label, value)
    }

    /// Toggle on the next row; `on_change` runs when the value flips
    pub fn panel_toggle_with(&mut self, label: &str, value: bool, height: f32, on_change: impl FnOnce(bool)) -> bool {
        let new_value = self.panel_toggle(label, value, height);
        if new_value != value {
            on_change(new_value);
        }
        new_value
    }

    /// Text field on the next row; returns whether the text length changed
    pub fn panel_text_input(&mut self, field: &mut TextInput, height: f32) -> bool {
        match self.allocate_row(height) {
            Some(rect) => self.text_input(rect, field),
            None => false,
        }
    }

    /// Empty row of the given height
    pub fn panel_spacer(&mut self, height: f32) {
        self.allocate_row(height);
    }
}

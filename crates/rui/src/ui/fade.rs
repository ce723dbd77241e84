//! Full-screen fade overlay
//!
//! Linear alpha animation independent of panels. Alpha is expressed on the
//! 0-255 scale: 255 fully covers the screen, 0 is invisible.

use crate::foundation::math::{rgba, Color};

/// Fully opaque overlay alpha
pub const FADE_OPAQUE: f32 = 255.0;

/// Fade overlay state
#[derive(Debug, Clone)]
pub struct FadeOverlay {
    alpha: f32,
    start_alpha: f32,
    target_alpha: f32,
    elapsed: f32,
    duration: f32,
    active: bool,
    color: Color,
}

impl Default for FadeOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl FadeOverlay {
    /// Create an idle, transparent black overlay
    pub fn new() -> Self {
        Self {
            alpha: 0.0,
            start_alpha: 0.0,
            target_alpha: 0.0,
            elapsed: 0.0,
            duration: 0.0,
            active: false,
            color: rgba(0, 0, 0, 255),
        }
    }

    /// Animate towards an opaque overlay
    pub fn fade_out(&mut self, duration: f32) {
        self.start(FADE_OPAQUE, duration);
    }

    /// Animate towards a transparent overlay
    pub fn fade_in(&mut self, duration: f32) {
        self.start(0.0, duration);
    }

    fn start(&mut self, target: f32, duration: f32) {
        self.start_alpha = self.alpha;
        self.target_alpha = target;
        self.elapsed = 0.0;

        if duration > 0.0 && duration.is_finite() {
            self.duration = duration;
            self.active = true;
            log::debug!("Fade to {} over {:.3}s", target, duration);
        } else {
            self.duration = 0.0;
            self.alpha = target;
            self.active = false;
        }
    }

    /// Advance the animation by `delta_time` seconds
    pub fn update(&mut self, delta_time: f32) {
        if !self.active {
            return;
        }

        self.elapsed += delta_time.max(0.0);
        let t = (self.elapsed / self.duration).min(1.0);
        self.alpha = (self.start_alpha + (self.target_alpha - self.start_alpha) * t)
            .clamp(0.0, FADE_OPAQUE);

        if t >= 1.0 {
            self.alpha = self.target_alpha;
            self.active = false;
        }
    }

    /// Current alpha on the 0-255 scale
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Whether an animation is running
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Overlay fill color (its own alpha is scaled by the fade alpha)
    pub fn color(&self) -> Color {
        self.color
    }

    /// Change the overlay fill color
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Color to draw this frame, or `None` when fully transparent
    pub fn draw_color(&self) -> Option<Color> {
        if self.alpha <= 0.0 {
            return None;
        }
        let mut color = self.color;
        color.w = (color.w * self.alpha / FADE_OPAQUE).clamp(0.0, 1.0);
        Some(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fade_out_interpolates_linearly() {
        let mut fade = FadeOverlay::new();
        fade.fade_out(1.0);
        assert!(fade.is_active());

        fade.update(0.25);
        assert_relative_eq!(fade.alpha(), 63.75);
        fade.update(0.25);
        assert_relative_eq!(fade.alpha(), 127.5);
    }

    #[test]
    fn test_reaches_target_exactly() {
        let mut fade = FadeOverlay::new();
        fade.fade_out(0.3);
        for _ in 0..7 {
            fade.update(0.05);
            assert!((0.0..=FADE_OPAQUE).contains(&fade.alpha()));
        }
        assert_eq!(fade.alpha(), FADE_OPAQUE);
        assert!(!fade.is_active());

        fade.update(1.0);
        assert_eq!(fade.alpha(), FADE_OPAQUE);
    }

    #[test]
    fn test_zero_duration_snaps() {
        let mut fade = FadeOverlay::new();
        fade.fade_out(0.0);
        assert_eq!(fade.alpha(), FADE_OPAQUE);
        assert!(!fade.is_active());

        fade.fade_in(-3.0);
        assert_eq!(fade.alpha(), 0.0);
        assert!(!fade.is_active());
    }

    #[test]
    fn test_fade_in_starts_from_current_alpha() {
        let mut fade = FadeOverlay::new();
        fade.fade_out(1.0);
        fade.update(0.5);

        fade.fade_in(1.0);
        fade.update(0.5);
        assert_relative_eq!(fade.alpha(), 63.75);
        fade.update(0.5);
        assert_eq!(fade.alpha(), 0.0);
    }

    #[test]
    fn test_draw_color_skipped_when_transparent() {
        let mut fade = FadeOverlay::new();
        assert!(fade.draw_color().is_none());

        fade.fade_out(0.0);
        let color = fade.draw_color().unwrap();
        assert_relative_eq!(color.w, 1.0);
    }
}

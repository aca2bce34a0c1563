// Layout and timing constants for Atrium

use eframe::egui;
use std::time::Instant;

// --- Sizing ---
pub const CONTENT_MAX_WIDTH: f32 = 720.0;
pub const FORM_FIELD_WIDTH: f32 = 320.0;
pub const MESSAGE_ROWS: usize = 6;
pub const SECTION_SPACING: f32 = 12.0;
pub const PAGE_IMAGE_MAX_HEIGHT: f32 = 220.0;
pub const HINT_MARGIN: f32 = 20.0;

// --- Timing ---
pub const STARTUP_FADE_DELAY_MS: u64 = 100;
pub const STARTUP_FADE_SECS: f32 = 0.3;
pub const PAGE_FADE_SECS: f32 = 0.5;
pub const FEEDBACK_TIMEOUT_SECS: u64 = 5;
pub const FEEDBACK_SLIDE_SECS: f32 = 0.3;
pub const PRELOAD_DELAY_MS: u64 = 1000;
pub const HINT_FADE_SECS: f32 = 0.3;

// --- Text ---
pub const HELP_HINT_TEXT: &str = "Use Alt + \u{2190} \u{2192} to switch pages";
pub const FEEDBACK_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";

// --- Helper functions ---

/// Linear 0..1 progress of a fade that started at `start`.
pub fn fade_progress(start: Instant, now: Instant, secs: f32) -> f32 {
    if secs <= f32::EPSILON {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start).as_secs_f32();
    (elapsed / secs).clamp(0.0, 1.0)
}

/// Content width for the current panel, capped for readability.
pub fn content_width(ui: &egui::Ui) -> f32 {
    ui.available_width().min(CONTENT_MAX_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_fade_progress_clamps() {
        let start = Instant::now();
        assert_eq!(fade_progress(start, start, 0.5), 0.0);
        assert_eq!(fade_progress(start, start + Duration::from_secs(1), 0.5), 1.0);
        let mid = fade_progress(start, start + Duration::from_millis(250), 0.5);
        assert!(mid > 0.4 && mid < 0.6);
    }
}

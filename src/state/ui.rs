// UI state - transient notices, overlay visibility, animation clocks

use std::time::{Duration, Instant};

use crate::layout;

/// One acknowledgment notice shown under the contact form.
///
/// Each notice carries its own clock: it slides in, stays for the fixed
/// display window, plays a reverse transition, and is then swept.
/// Rapid submissions append independent notices; there is no
/// deduplication.
#[derive(Clone, Debug)]
pub struct FeedbackNotice {
    pub message: String,
    pub shown_at: Instant,
}

impl FeedbackNotice {
    fn display_window() -> Duration {
        Duration::from_secs(layout::FEEDBACK_TIMEOUT_SECS)
    }

    fn fade_window() -> Duration {
        Duration::from_secs_f32(layout::FEEDBACK_SLIDE_SECS)
    }

    /// Whether the notice has entered its reverse transition.
    pub fn is_fading(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= Self::display_window()
    }

    /// Whether the reverse transition has finished and the notice
    /// should be removed.
    pub fn is_expired(&self, now: Instant) -> bool {
        let total = Self::display_window() + Self::fade_window();
        now.saturating_duration_since(self.shown_at) >= total
    }

    /// Opacity across the slide-in, steady, and fade-out phases.
    pub fn opacity(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.shown_at).as_secs_f32();
        let slide = layout::FEEDBACK_SLIDE_SECS;
        let steady_end = layout::FEEDBACK_TIMEOUT_SECS as f32;
        if elapsed < slide {
            (elapsed / slide).clamp(0.0, 1.0)
        } else if elapsed < steady_end {
            1.0
        } else {
            (1.0 - (elapsed - steady_end) / slide).clamp(0.0, 1.0)
        }
    }
}

pub struct UiState {
    pub notices: Vec<FeedbackNotice>,
    pub help_hint_visible: bool,
    pub launched_at: Instant,
    pub page_entered_at: Instant,
    scroll_to_top: bool,
}

impl UiState {
    pub fn new(now: Instant) -> Self {
        Self {
            notices: Vec::new(),
            help_hint_visible: false,
            launched_at: now,
            page_entered_at: now,
            scroll_to_top: false,
        }
    }

    pub fn push_notice(&mut self, message: impl Into<String>, now: Instant) {
        self.notices.push(FeedbackNotice {
            message: message.into(),
            shown_at: now,
        });
    }

    /// Drop notices whose reverse transition has finished. Runs every
    /// frame.
    pub fn sweep_notices(&mut self, now: Instant) {
        self.notices.retain(|notice| !notice.is_expired(now));
    }

    /// Restart the entrance fade and queue a scroll back to the top of
    /// the content area.
    pub fn begin_page_transition(&mut self, now: Instant) {
        self.page_entered_at = now;
        self.scroll_to_top = true;
    }

    pub fn take_scroll_to_top(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_top)
    }

    /// Window-content opacity during the startup fade: fully hidden
    /// for a short beat, then fading in.
    pub fn startup_opacity(&self, now: Instant) -> f32 {
        let delay = Duration::from_millis(layout::STARTUP_FADE_DELAY_MS);
        let since = now.saturating_duration_since(self.launched_at);
        if since < delay {
            return 0.0;
        }
        ((since - delay).as_secs_f32() / layout::STARTUP_FADE_SECS).clamp(0.0, 1.0)
    }

    /// Opacity of the page entrance fade.
    pub fn page_opacity(&self, now: Instant) -> f32 {
        layout::fade_progress(self.page_entered_at, now, layout::PAGE_FADE_SECS)
    }

    /// Whether anything is still animating and needs another frame
    /// soon.
    pub fn animating(&self, now: Instant) -> bool {
        !self.notices.is_empty()
            || self.startup_opacity(now) < 1.0
            || self.page_opacity(now) < 1.0
    }
}

// Application controller: owns all state and drives the frame loop

use std::time::{Duration, Instant};

use eframe::egui;
use tracing::{debug, info};

use crate::config::Config;
use crate::content::SiteContent;
use crate::layout;
use crate::page::Page;
use crate::preload::ContentPreloader;
use crate::state::{ContactForm, NavigationState, UiState};
use crate::style::Theme;

/// Deferred navigation produced by the views, applied after the panels
/// have been drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavRequest {
    Go(Page),
    Back,
    Forward,
}

pub struct Atrium {
    pub config: Config,
    pub theme: Theme,
    pub content: SiteContent,
    pub nav: NavigationState,
    pub form: ContactForm,
    pub ui: UiState,
    pub preloader: ContentPreloader,
    last_title: String,
}

impl Atrium {
    pub fn new(config: Config, start: Page) -> Self {
        let now = Instant::now();
        let theme = Theme::from_name(&config.theme.mode);
        Self {
            config,
            theme,
            content: SiteContent::bundled(),
            nav: NavigationState::new(start),
            form: ContactForm::default(),
            ui: UiState::new(now),
            preloader: ContentPreloader::new(now),
            last_title: String::new(),
        }
    }

    /// Switch the visible page. Repeated calls with the current page
    /// do nothing: no history entry, no transition restart.
    pub fn navigate_to(&mut self, page: Page) {
        if !self.nav.navigate_to(page) {
            return;
        }
        debug!(page = %page, url = self.nav.current_url(), "navigated");
        self.ui.begin_page_transition(Instant::now());
    }

    /// Replay the previous history entry, browser-back style. Silent
    /// no-op at the oldest entry.
    pub fn history_back(&mut self) {
        if let Some(page) = self.nav.go_back() {
            debug!(page = %page, "history back");
            self.ui.begin_page_transition(Instant::now());
        }
    }

    pub fn history_forward(&mut self) {
        if let Some(page) = self.nav.go_forward() {
            debug!(page = %page, "history forward");
            self.ui.begin_page_transition(Instant::now());
        }
    }

    pub fn apply(&mut self, request: NavRequest) {
        match request {
            NavRequest::Go(page) => self.navigate_to(page),
            NavRequest::Back => self.history_back(),
            NavRequest::Forward => self.history_forward(),
        }
    }

    /// Local form submission: log, acknowledge, reset. Nothing leaves
    /// the machine.
    pub fn submit_form(&mut self, now: Instant) {
        let submission = self.form.submit();
        info!(
            name = %submission.name,
            email = %submission.email,
            message_chars = submission.message.len(),
            "contact form submitted"
        );
        self.ui.push_notice(layout::FEEDBACK_MESSAGE, now);
    }

    fn sync_title(&mut self, ctx: &egui::Context) {
        let title = format!("Atrium \u{2014} {}", self.nav.current_url());
        if title != self.last_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.last_title = title;
        }
    }

    fn warm_images(&self, ctx: &egui::Context, uris: &[String]) {
        for uri in uris {
            // Failures are fine; the slot renders a placeholder until
            // the loader catches up
            let _ = ctx.try_load_image(uri, egui::load::SizeHint::default());
        }
    }

    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        if self.ui.animating(now) {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else if self.preloader.pending() {
            ctx.request_repaint_after(self.preloader.deadline().saturating_duration_since(now));
        }
    }
}

impl eframe::App for Atrium {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.ui.sweep_notices(now);
        let promoted = self.preloader.tick(now, &mut self.content, self.nav.current());
        if !promoted.is_empty() {
            debug!(count = promoted.len(), "preloaded deferred page images");
            self.warm_images(ctx, &promoted);
        }

        self.handle_input(ctx);

        let request = self.nav_bar(ctx, now);
        self.page_body(ctx, now);
        self.help_hint(ctx);

        if let Some(request) = request {
            self.apply(request);
        }

        self.sync_title(ctx);
        self.schedule_repaint(ctx, now);
    }
}

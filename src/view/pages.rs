// Central panel: renders the one active page section

use eframe::egui;
use std::time::Instant;

use crate::app::Atrium;
use crate::config::Config;
use crate::content::{ImageSlot, PageContent};
use crate::layout;
use crate::page::Page;

impl Atrium {
    pub fn page_body(&mut self, ctx: &egui::Context, now: Instant) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if !self.config.ui.reduce_motion {
                ui.multiply_opacity(self.ui.startup_opacity(now) * self.ui.page_opacity(now));
            }

            let scroll_to_top = self.ui.take_scroll_to_top();
            let mut area = egui::ScrollArea::vertical()
                .id_salt(self.nav.current().slug())
                .auto_shrink([false, false]);
            if scroll_to_top && self.config.ui.reduce_motion {
                area = area.vertical_scroll_offset(0.0);
            }

            area.show(ui, |ui| {
                if scroll_to_top && !self.config.ui.reduce_motion {
                    ui.scroll_to_cursor(Some(egui::Align::TOP));
                }
                ui.set_max_width(layout::content_width(ui));

                match self.nav.current() {
                    Page::Contact => self.contact_page(ui, now),
                    page => self.static_page(ui, page),
                }
            });
        });
    }

    fn static_page(&self, ui: &mut egui::Ui, page: Page) {
        render_page_content(ui, &self.config, self.content.page(page));
    }

    fn contact_page(&mut self, ui: &mut egui::Ui, now: Instant) {
        render_page_content(ui, &self.config, self.content.page(Page::Contact));

        let info = self.content.contact_info.clone();
        ui.add_space(layout::SECTION_SPACING);
        ui.horizontal(|ui| {
            if ui
                .link(&info.email)
                .on_hover_text("Write us an email")
                .clicked()
            {
                open_external(&format!("mailto:{}", info.email));
            }
            ui.separator();
            if ui
                .link(&info.website)
                .on_hover_text("Visit our website")
                .clicked()
            {
                open_external(&info.website);
            }
        });

        ui.add_space(layout::SECTION_SPACING);
        if self.contact_form(ui) {
            self.submit_form(now);
        }
        self.feedback_notices(ui, now);
    }

    /// Render the form fields; returns true when the submit button was
    /// clicked this frame.
    fn contact_form(&mut self, ui: &mut egui::Ui) -> bool {
        let mut submitted = false;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong("Send us a message");
            ui.add_space(8.0);

            ui.label("Name");
            ui.add(
                egui::TextEdit::singleline(&mut self.form.name)
                    .desired_width(layout::FORM_FIELD_WIDTH)
                    .hint_text("Your name"),
            );
            ui.add_space(4.0);

            ui.label("Email");
            ui.add(
                egui::TextEdit::singleline(&mut self.form.email)
                    .desired_width(layout::FORM_FIELD_WIDTH)
                    .hint_text("you@example.com"),
            );
            ui.add_space(4.0);

            ui.label("Message");
            ui.add(
                egui::TextEdit::multiline(&mut self.form.message)
                    .desired_width(f32::INFINITY)
                    .desired_rows(layout::MESSAGE_ROWS)
                    .hint_text("How can we help?"),
            );
            ui.add_space(8.0);

            submitted = ui.button("Send message").clicked();
        });

        submitted
    }
}

fn render_page_content(ui: &mut egui::Ui, config: &Config, content: &PageContent) {
    ui.add_space(8.0);
    ui.label(
        egui::RichText::new(&content.heading)
            .size(config.font.heading_size)
            .strong(),
    );
    ui.add_space(4.0);
    ui.label(egui::RichText::new(&content.intro).size(config.font.body_size).italics());

    for section in &content.sections {
        ui.add_space(layout::SECTION_SPACING);
        ui.strong(&section.title);
        ui.label(egui::RichText::new(&section.body).size(config.font.body_size));
    }

    for slot in &content.images {
        ui.add_space(layout::SECTION_SPACING);
        render_image(ui, slot);
    }
}

fn render_image(ui: &mut egui::Ui, slot: &ImageSlot) {
    match slot.resolved() {
        Some(uri) => {
            ui.add(
                egui::Image::new(uri.to_owned())
                    .max_height(layout::PAGE_IMAGE_MAX_HEIGHT)
                    .maintain_aspect_ratio(true)
                    .shrink_to_fit(),
            )
            .on_hover_text(&slot.alt);
        }
        None => {
            // Not promoted yet; keep the layout stable with a label
            ui.weak(format!("[{}]", slot.alt));
        }
    }
}

fn open_external(target: &str) {
    if let Err(e) = open::that(target) {
        tracing::warn!(error = %e, target, "failed to open link");
    }
}

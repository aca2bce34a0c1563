// Top navigation bar: history buttons, page links, URL readout

use eframe::egui;
use std::time::Instant;

use crate::app::{Atrium, NavRequest};
use crate::page::Page;

impl Atrium {
    /// Draw the top bar. Navigation is returned rather than applied so
    /// the panel closure only ever reads state.
    pub fn nav_bar(&mut self, ctx: &egui::Context, now: Instant) -> Option<NavRequest> {
        let mut request = None;

        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            if !self.config.ui.reduce_motion {
                ui.multiply_opacity(self.ui.startup_opacity(now));
            }
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let back = ui
                    .add_enabled(self.nav.can_go_back(), egui::Button::new("\u{23f4}"))
                    .on_hover_text("Back");
                if back.clicked() {
                    request = Some(NavRequest::Back);
                }

                let forward = ui
                    .add_enabled(self.nav.can_go_forward(), egui::Button::new("\u{23f5}"))
                    .on_hover_text("Forward");
                if forward.clicked() {
                    request = Some(NavRequest::Forward);
                }

                ui.separator();

                for page in Page::ALL {
                    let active = page == self.nav.current();
                    let link = ui
                        .selectable_label(active, page.label())
                        .on_hover_text(format!("Navigate to the {} page", page.label()));
                    if link.clicked() {
                        // Clicking the active link is a no-op downstream
                        request = Some(NavRequest::Go(page));
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);
                    ui.weak(egui::RichText::new(self.nav.current_url()).monospace());
                });
            });
            ui.add_space(4.0);
        });

        request
    }
}

// Transient acknowledgment notices shown under the contact form

use eframe::egui;
use std::time::Instant;

use crate::app::Atrium;

impl Atrium {
    pub fn feedback_notices(&self, ui: &mut egui::Ui, now: Instant) {
        for notice in &self.ui.notices {
            let opacity = if self.config.ui.reduce_motion {
                1.0
            } else {
                notice.opacity(now)
            };

            ui.add_space(8.0);
            ui.scope(|ui| {
                ui.multiply_opacity(opacity);
                egui::Frame::group(ui.style())
                    .fill(self.theme.feedback_fill())
                    .corner_radius(egui::CornerRadius::same(6))
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.vertical_centered(|ui| {
                            ui.colored_label(self.theme.overlay_text(), &notice.message);
                        });
                    });
            });
        }
    }
}

// Floating keyboard hint shown while Alt is held

use eframe::egui;

use crate::app::Atrium;
use crate::layout;

impl Atrium {
    pub fn help_hint(&self, ctx: &egui::Context) {
        let fade = if self.config.ui.reduce_motion {
            if self.ui.help_hint_visible {
                1.0
            } else {
                0.0
            }
        } else {
            ctx.animate_bool_with_time(
                egui::Id::new("help_hint_fade"),
                self.ui.help_hint_visible,
                layout::HINT_FADE_SECS,
            )
        };
        if fade <= 0.0 {
            return;
        }

        egui::Area::new(egui::Id::new("help_hint"))
            .anchor(
                egui::Align2::RIGHT_BOTTOM,
                egui::vec2(-layout::HINT_MARGIN, -layout::HINT_MARGIN),
            )
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                ui.multiply_opacity(fade);
                egui::Frame::popup(ui.style())
                    .fill(self.theme.hint_fill())
                    .show(ui, |ui| {
                        ui.colored_label(self.theme.overlay_text(), layout::HELP_HINT_TEXT);
                    });
            });
    }
}

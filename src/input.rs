// Input handling for Atrium
// Keyboard shortcuts and browser-style mouse buttons

use crate::app::Atrium;
use eframe::egui;

impl Atrium {
    pub fn handle_input(&mut self, ctx: &egui::Context) {
        // The hint follows the modifier: visible while Alt is held,
        // hidden the moment it is released
        let alt_down = ctx.input(|i| i.modifiers.alt);
        self.ui.help_hint_visible = alt_down && self.config.ui.show_help_hint;

        // Alt + arrows walk the fixed page order, clamped at both ends
        if ctx.input(|i| i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft)) {
            if let Some(page) = self.nav.current().previous() {
                self.navigate_to(page);
            }
            return;
        }
        if ctx.input(|i| i.modifiers.alt && i.key_pressed(egui::Key::ArrowRight)) {
            if let Some(page) = self.nav.current().next() {
                self.navigate_to(page);
            }
            return;
        }

        // History on the extra mouse buttons
        if ctx.input(|i| i.pointer.button_pressed(egui::PointerButton::Extra1)) {
            self.history_back();
            return;
        }
        if ctx.input(|i| i.pointer.button_pressed(egui::PointerButton::Extra2)) {
            self.history_forward();
        }
    }
}

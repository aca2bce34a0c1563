// Theme handling and the few colors the views need

use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Parse the config `mode` string; anything unrecognized is dark.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        }
    }

    /// Fill behind the form acknowledgment notice.
    pub fn feedback_fill(self) -> egui::Color32 {
        match self {
            Theme::Light => egui::Color32::from_rgb(0x48, 0xbb, 0x78),
            Theme::Dark => egui::Color32::from_rgb(0x38, 0xa1, 0x69),
        }
    }

    /// Fill behind the floating keyboard hint.
    pub fn hint_fill(self) -> egui::Color32 {
        egui::Color32::from_black_alpha(204)
    }

    pub fn overlay_text(self) -> egui::Color32 {
        egui::Color32::WHITE
    }
}

pub fn apply(ctx: &egui::Context, theme: Theme) {
    ctx.set_visuals(theme.visuals());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_defaults_to_dark() {
        assert_eq!(Theme::from_name("light"), Theme::Light);
        assert_eq!(Theme::from_name("dark"), Theme::Dark);
        assert_eq!(Theme::from_name("solarized"), Theme::Dark);
    }
}

// Atrium - a four-page brochure app with browser-style navigation

mod app;
mod config;
mod content;
mod input;
mod layout;
mod page;
mod preload;
mod state;
mod style;
mod view;

use anyhow::Result;
use eframe::egui;
use tracing::{info, warn};

use crate::app::Atrium;
use crate::config::Config;
use crate::page::Page;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load();
    if let Err(e) = Config::create_default() {
        warn!(error = %e, "could not write default config");
    }

    // A location may be passed on the command line, e.g.
    // `atrium '#services'`; anything unrecognized lands on home
    let start = std::env::args()
        .nth(1)
        .map(|arg| Page::resolve_location(&arg))
        .unwrap_or(Page::Home);
    info!(page = %start, "starting atrium");

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.window.width, config.window.height])
        .with_min_inner_size([480.0, 360.0])
        .with_title("Atrium");
    match load_icon() {
        Ok(icon) => viewport = viewport.with_icon(icon),
        Err(e) => warn!(error = %e, "could not load window icon"),
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Atrium",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            style::apply(&cc.egui_ctx, style::Theme::from_name(&config.theme.mode));
            Ok(Box::new(Atrium::new(config, start)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to run app: {e}"))?;

    Ok(())
}

fn load_icon() -> Result<egui::IconData> {
    let image = image::load_from_memory(include_bytes!("../assets/icon.png"))?.into_rgba8();
    let (width, height) = image.dimensions();
    Ok(egui::IconData {
        rgba: image.into_raw(),
        width,
        height,
    })
}

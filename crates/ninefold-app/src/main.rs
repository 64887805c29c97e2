//! Ninefold desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Ninefold application.

use eframe::{
    NativeOptions,
    egui::{self, Vec2},
};

use crate::{app::NinefoldApp, config::AppConfig};

mod app;
mod config;
mod fetch;
mod ui;

fn main() -> eframe::Result<()> {
    better_panic::install();
    env_logger::init();

    let config = AppConfig::load();
    log::info!("using puzzle service at {}", config.api_base_url);

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_resizable(true)
            .with_inner_size(Vec2::new(700.0, 540.0))
            .with_min_inner_size(Vec2::new(520.0, 500.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Ninefold",
        options,
        Box::new(move |cc| Ok(Box::new(NinefoldApp::new(cc, config)))),
    )
}

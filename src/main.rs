mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::OxalateLookupApp;
use config::AppConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::load(std::env::args());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Oxalate Lookup",
        options,
        Box::new(move |_cc| Ok(Box::new(OxalateLookupApp::new(&config)))),
    )
}

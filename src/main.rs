mod app;
mod color;
mod data;
mod settings;
mod state;
mod ui;

use app::PlotterApp;
use eframe::egui;
use settings::Settings;

fn main() -> eframe::Result {
    env_logger::init();

    let settings = Settings::discover();
    log::debug!("{settings:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Spectral Data Plotter",
        options,
        Box::new(|_cc| Ok(Box::new(PlotterApp::new(settings)))),
    )
}

mod app;
mod assets;
mod color;
mod config;
mod content;
mod state;
mod ui;

use app::DashboardApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::default();
    log::info!(
        "Starting {} (assets from {})",
        config.title,
        config.assets_dir.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    let window_title = config.title.clone();
    eframe::run_native(
        &window_title,
        options,
        Box::new(|cc| {
            // Install image loaders so egui can render the png plots.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(DashboardApp::new(cc, config)))
        }),
    )
}

// Studio Manager Application
// Main entry point

use studio_manager::ui::StudioApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Studio Manager");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Studio Manager")
            .with_inner_size(egui::vec2(1200.0, 800.0))
            .with_min_inner_size(egui::vec2(900.0, 600.0)),
        ..Default::default()
    };

    eframe::run_native(
        "Studio Manager",
        options,
        Box::new(|cc| Ok(Box::new(StudioApp::new(cc)))),
    )
}

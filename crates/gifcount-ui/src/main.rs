#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod helpers;
mod modules;
mod theme;

fn main() -> eframe::Result {
    helpers::log::init_logging();
    ffmpeg_the_third::init().expect("FFmpeg init failed");

    let native_options = eframe::NativeOptions {
        centered: true,
        viewport: egui::ViewportBuilder::default()
            .with_title("GIF Duration Calculator - Version 1.0.0")
            .with_inner_size([560.0, 640.0])
            .with_min_inner_size([420.0, 460.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "GifCount",
        native_options,
        Box::new(|cc| Ok(Box::new(app::GifCounterApp::new(cc)))),
    )
}

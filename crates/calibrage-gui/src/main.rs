#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use calibrage::CatalogOptions;
use calibrage::constants::DEFAULT_CATALOG_FILE;
use eframe::egui;
use std::path::PathBuf;

mod app;
mod logger;
mod ui_components;
mod views;

/// Usage: calibrage [CATALOG.xlsx|CATALOG.csv] [OPTIONS.json]
fn main() -> anyhow::Result<()> {
    let logger = logger::AppLogger::new(200);
    logger.clone().init()?;

    let mut args = std::env::args_os().skip(1);
    let catalog_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE));
    let options_path = args.next().map(PathBuf::from);

    let runtime = tokio::runtime::Runtime::new()?;
    let catalog_options = match options_path {
        Some(path) => {
            let options = runtime.block_on(CatalogOptions::load(&path))?;
            options.validate()?;
            options
        }
        None => CatalogOptions::default(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_title("Calibrage"),
        ..Default::default()
    };

    eframe::run_native(
        "Calibrage",
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(app::CalibrageApp::new(
                cc,
                runtime,
                logger,
                catalog_path,
                catalog_options,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

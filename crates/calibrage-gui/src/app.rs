use calibrage::{Catalog, CatalogCache, CatalogOptions};
use eframe::egui;
use std::path::PathBuf;
use std::sync::Arc;

use crate::logger::AppLogger;
use crate::views::{EstimateState, show_estimator, show_load_error, show_log};

enum CatalogState {
    Loaded(Arc<Catalog>),
    Failed(String),
}

pub struct CalibrageApp {
    catalog_path: PathBuf,
    catalog_options: CatalogOptions,
    catalog: CatalogState,
    cache: CatalogCache,
    estimate: EstimateState,
    logger: AppLogger,

    // Catalog loads block on this runtime; files are small
    runtime: tokio::runtime::Runtime,
}

impl CalibrageApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        runtime: tokio::runtime::Runtime,
        logger: AppLogger,
        catalog_path: PathBuf,
        catalog_options: CatalogOptions,
    ) -> Self {
        let mut app = Self {
            catalog_path,
            catalog_options,
            catalog: CatalogState::Failed(String::new()),
            cache: CatalogCache::new(),
            estimate: EstimateState::default(),
            logger,
            runtime,
        };
        app.load_catalog();
        app
    }

    /// Load through the cache; an unchanged file keeps the current catalog
    fn load_catalog(&mut self) {
        let result = self.runtime.block_on(
            self.cache
                .get_or_load(&self.catalog_path, &self.catalog_options),
        );

        self.catalog = match result {
            Ok(catalog) => {
                self.estimate.adopt(&catalog);
                CatalogState::Loaded(catalog)
            }
            Err(e) => {
                log::error!("catalog load failed: {}", e);
                CatalogState::Failed(format!(
                    "Unable to load '{}'. Detail: {}",
                    self.catalog_path.display(),
                    e
                ))
            }
        };
    }
}

impl eframe::App for CalibrageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("📂 Open catalog…").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Catalog", &["xlsx", "xlsm", "xls", "ods", "csv"])
                        .pick_file()
                    {
                        self.catalog_path = path;
                        self.load_catalog();
                    }
                }
                if ui.button("🔄 Reload").clicked() {
                    self.load_catalog();
                }
                ui.weak(self.catalog_path.display().to_string());
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            show_log(ui, &self.logger);
        });

        egui::CentralPanel::default().show(ctx, |ui| match &self.catalog {
            CatalogState::Loaded(catalog) => show_estimator(ui, &mut self.estimate, catalog),
            CatalogState::Failed(message) => show_load_error(ui, message),
        });
    }
}

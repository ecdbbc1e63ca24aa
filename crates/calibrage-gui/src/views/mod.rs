mod details_section;
mod input_section;
mod log_section;
mod result_section;
mod state;

pub use log_section::show_log;
pub use state::EstimateState;

use calibrage::{Catalog, PaginationReport};
use eframe::egui;

pub fn show_estimator(ui: &mut egui::Ui, state: &mut EstimateState, catalog: &Catalog) {
    ui.heading("Calibrage");
    ui.label(
        "Enter the manuscript character count and pick a collection to get the \
         pagination, rounded up to a multiple of 8.",
    );
    ui.add_space(10.0);

    input_section::show(ui, state, catalog);
    ui.add_space(20.0);
    ui.separator();
    ui.add_space(10.0);

    let Some(entry) = state.selected_entry(catalog) else {
        return;
    };

    match PaginationReport::new(entry, state.character_count) {
        Ok(report) => {
            result_section::show(ui, &report);
            ui.add_space(10.0);
            details_section::show(ui, &report);
        }
        Err(e) => {
            let color = ui.visuals().error_fg_color;
            ui.colored_label(color, e.to_string());
        }
    }
}

/// Nothing else is rendered while the catalog is unusable
pub fn show_load_error(ui: &mut egui::Ui, message: &str) {
    ui.heading("Calibrage");
    ui.add_space(10.0);
    let color = ui.visuals().error_fg_color;
    ui.colored_label(color, message);
}

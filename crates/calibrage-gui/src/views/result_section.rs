use calibrage::PaginationReport;
use calibrage::constants::PLACEHOLDER;
use eframe::egui;

use crate::ui_components::result_card;

pub fn show(ui: &mut egui::Ui, report: &PaginationReport) {
    ui.heading("Predicted pagination");

    if report.result.is_some() {
        result_card(
            ui,
            "Result",
            &report.headline(),
            &report.collection_line(),
        );
    } else {
        ui.label(PLACEHOLDER);
    }
}

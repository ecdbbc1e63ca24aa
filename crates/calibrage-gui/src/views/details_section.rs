use calibrage::PaginationReport;
use eframe::egui;

pub fn show(ui: &mut egui::Ui, report: &PaginationReport) {
    egui::CollapsingHeader::new("Details")
        .default_open(false)
        .show(ui, |ui| {
            for line in report.details() {
                ui.label(format!("• {}", line));
            }
            if let Some(result) = report.result {
                ui.label(format!("• Signatures: {}", result.signatures));
            }
        });
}

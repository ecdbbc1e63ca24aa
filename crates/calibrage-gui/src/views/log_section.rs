use eframe::egui;
use log::Level;

use crate::logger::AppLogger;

pub fn show_log(ui: &mut egui::Ui, logger: &AppLogger) {
    match logger.latest() {
        Some(entry) => ui.weak(&entry.message),
        None => ui.weak("Ready"),
    };

    egui::CollapsingHeader::new("Log")
        .default_open(false)
        .show(ui, |ui| {
            egui::ScrollArea::vertical()
                .max_height(120.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for entry in logger.entries() {
                        let color = level_color(ui, entry.level);
                        ui.colored_label(
                            color,
                            format!(
                                "{} {:<5} {}",
                                entry.timestamp.format("%H:%M:%S"),
                                entry.level,
                                entry.message
                            ),
                        );
                    }
                });
        });
}

fn level_color(ui: &egui::Ui, level: Level) -> egui::Color32 {
    match level {
        Level::Error => ui.visuals().error_fg_color,
        Level::Warn => ui.visuals().warn_fg_color,
        _ => ui.visuals().text_color(),
    }
}

use calibrage::Catalog;
use calibrage::constants::{CHARACTER_COUNT_STEP, MAX_CHARACTER_COUNT};
use eframe::egui;

use super::state::EstimateState;
use crate::ui_components::{DragValueBuilder, collection_selector, step_buttons};

pub fn show(ui: &mut egui::Ui, state: &mut EstimateState, catalog: &Catalog) {
    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.label("Manuscript character count");
            ui.horizontal(|ui| {
                DragValueBuilder::new(&mut state.character_count)
                    .range(0..=MAX_CHARACTER_COUNT)
                    .speed(CHARACTER_COUNT_STEP as f64)
                    .suffix(" characters")
                    .show(ui);
                step_buttons(
                    ui,
                    &mut state.character_count,
                    CHARACTER_COUNT_STEP,
                    MAX_CHARACTER_COUNT,
                );
            });
        });

        ui.add_space(24.0);

        ui.vertical(|ui| {
            ui.label("Collection");
            if collection_selector(ui, "collection", &mut state.collection, catalog) {
                if let Some(name) = &state.collection {
                    log::info!("selected collection '{}'", name);
                }
            }
        });
    });
}

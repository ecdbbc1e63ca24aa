use calibrage::Catalog;
use eframe::egui;

/// Result figures are drawn in this violet
pub const ACCENT_TEXT: egui::Color32 = egui::Color32::from_rgb(167, 139, 250);

/// Builder for drag values with optional bounds and suffix
pub struct DragValueBuilder<'a, T> {
    value: &'a mut T,
    range: Option<std::ops::RangeInclusive<T>>,
    suffix: Option<String>,
    speed: Option<f64>,
}

impl<'a, T> DragValueBuilder<'a, T>
where
    T: egui::emath::Numeric,
{
    pub fn new(value: &'a mut T) -> Self {
        Self {
            value,
            range: None,
            suffix: None,
            speed: None,
        }
    }

    pub fn range(mut self, range: std::ops::RangeInclusive<T>) -> Self {
        self.range = Some(range);
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let mut drag = egui::DragValue::new(self.value);

        if let Some(range) = self.range {
            drag = drag.range(range);
        }

        if let Some(suffix) = self.suffix {
            drag = drag.suffix(suffix);
        }

        if let Some(speed) = self.speed {
            drag = drag.speed(speed);
        }

        ui.add(drag).changed()
    }
}

/// Step buttons next to a counter, kept within `0..=max`
pub fn step_buttons(ui: &mut egui::Ui, value: &mut u64, step: u64, max: u64) -> bool {
    let mut changed = false;
    if ui.small_button(format!("−{}", step)).clicked() {
        *value = value.saturating_sub(step);
        changed = true;
    }
    if ui.small_button(format!("+{}", step)).clicked() {
        *value = value.saturating_add(step).min(max);
        changed = true;
    }
    changed
}

/// Combo box listing catalog collections in catalog order.
/// An unset or stale selection displays the first collection.
pub fn collection_selector(
    ui: &mut egui::Ui,
    id: &str,
    selected: &mut Option<String>,
    catalog: &Catalog,
) -> bool {
    let current = selected
        .as_deref()
        .and_then(|name| catalog.get(name))
        .or_else(|| catalog.first());
    let current_name = current.map(|entry| entry.name.clone()).unwrap_or_default();

    let mut changed = false;
    egui::ComboBox::from_id_salt(id)
        .selected_text(current_name.as_str())
        .width(220.0)
        .show_ui(ui, |ui| {
            for entry in catalog {
                let is_current = entry.name == current_name;
                if ui.selectable_label(is_current, &entry.name).clicked() && !is_current {
                    *selected = Some(entry.name.clone());
                    changed = true;
                }
            }
        });
    changed
}

/// Tinted card holding a large figure and a caption
pub fn result_card(ui: &mut egui::Ui, label: &str, value: &str, caption: &str) {
    egui::Frame::new()
        .fill(egui::Color32::from_rgba_unmultiplied(124, 58, 237, 40))
        .corner_radius(egui::CornerRadius::same(18))
        .inner_margin(egui::Margin::symmetric(24, 20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.weak(label);
            ui.label(
                egui::RichText::new(value)
                    .size(56.0)
                    .strong()
                    .color(ACCENT_TEXT),
            );
            ui.add_space(8.0);
            ui.label(caption);
        });
}

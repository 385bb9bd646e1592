//! Auswahl-Raster der 13 Easing-Funktionen.

use crate::app::AppIntent;
use crate::core::EasingFunction;

const COLUMNS: usize = 3;

/// Rendert die Easing-Auswahl und gibt bei Klick ein `EasingSelected` zurück.
pub fn render_easing_selector(ui: &mut egui::Ui, selected: EasingFunction) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::Grid::new("easing_selector")
        .num_columns(COLUMNS)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            for (i, easing) in EasingFunction::ALL.iter().copied().enumerate() {
                let button = egui::Button::new(easing.name())
                    .min_size(egui::vec2(140.0, 24.0))
                    .selected(easing == selected);
                if ui.add(button).clicked() && easing != selected {
                    events.push(AppIntent::EasingSelected { easing });
                }
                if (i + 1) % COLUMNS == 0 {
                    ui.end_row();
                }
            }
        });

    events
}

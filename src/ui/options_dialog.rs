//! Optionen-Dialog für Zeichenfläche, Handles, Vorschau, Linien und Farben.

use crate::app::{AppIntent, AppState};
use crate::shared::GameOptions;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Options")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    ui.collapsing("Surface", |ui| changed |= surface_section(ui, &mut opts));
                    ui.collapsing("Handles", |ui| changed |= handle_section(ui, &mut opts));
                    ui.collapsing("Curves", |ui| changed |= curve_section(ui, &mut opts));
                    ui.collapsing("Preview", |ui| changed |= preview_section(ui, &mut opts));
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Defaults").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Close").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

// ── Abschnitte ──────────────────────────────────────────────────────

fn surface_section(ui: &mut egui::Ui, opts: &mut GameOptions) -> bool {
    let mut changed = false;
    changed |= drag_value(ui, "Width (px):", &mut opts.editor_width, 100.0..=1200.0, 1.0);
    changed |= drag_value(ui, "Height (px):", &mut opts.editor_height, 100.0..=900.0, 1.0);
    ui.horizontal(|ui| {
        ui.label("Grid divisions:");
        changed |= ui
            .add(egui::DragValue::new(&mut opts.grid_divisions).range(1..=50))
            .changed();
    });
    changed |= color_edit(ui, "Background:", &mut opts.surface_color);
    changed |= color_edit(ui, "Grid:", &mut opts.grid_color);
    changed |= color_edit(ui, "Axes (y=0, y=1):", &mut opts.axis_color);
    changed
}

fn handle_section(ui: &mut egui::Ui, opts: &mut GameOptions) -> bool {
    let mut changed = false;
    changed |= drag_value(ui, "Radius (px):", &mut opts.handle_radius_px, 2.0..=30.0, 0.5);
    changed |= drag_value(
        ui,
        "Pick radius (px):",
        &mut opts.handle_pick_radius_px,
        2.0..=60.0,
        0.5,
    );
    changed |= color_edit(ui, "Fill:", &mut opts.handle_fill_color);
    changed |= color_edit(ui, "Stroke:", &mut opts.handle_stroke_color);

    ui.label("Start curve:");
    ui.horizontal(|ui| {
        for (i, value) in opts.editor_start_curve.iter_mut().enumerate() {
            let range = if i % 2 == 0 { 0.0..=1.0 } else { -2.0..=2.0 };
            changed |= ui
                .add(egui::DragValue::new(value).range(range).speed(0.01))
                .changed();
        }
    });
    changed
}

fn curve_section(ui: &mut egui::Ui, opts: &mut GameOptions) -> bool {
    let mut changed = false;
    changed |= drag_value(ui, "User stroke:", &mut opts.user_stroke_width, 0.5..=12.0, 0.1);
    changed |= drag_value(ui, "Target stroke:", &mut opts.target_stroke_width, 0.5..=12.0, 0.1);
    changed |= drag_value(ui, "Guide stroke:", &mut opts.guide_stroke_width, 0.5..=8.0, 0.1);
    changed |= drag_value(ui, "Target dash:", &mut opts.target_dash_length, 0.5..=20.0, 0.1);
    changed |= drag_value(ui, "Target gap:", &mut opts.target_dash_gap, 0.5..=20.0, 0.1);
    changed |= color_edit(ui, "User curve:", &mut opts.user_curve_color);
    changed |= color_edit(ui, "Target curve:", &mut opts.target_curve_color);
    changed |= color_edit(ui, "Guides:", &mut opts.guide_color);
    changed
}

fn preview_section(ui: &mut egui::Ui, opts: &mut GameOptions) -> bool {
    let mut changed = false;
    changed |= drag_value(
        ui,
        "Freestyle duration (s):",
        &mut opts.freestyle_duration_secs,
        0.1..=10.0,
        0.05,
    );
    changed |= drag_value(
        ui,
        "Track length (px):",
        &mut opts.preview_track_width_px,
        20.0..=600.0,
        1.0,
    );
    changed |= drag_value(ui, "Hint duration (s):", &mut opts.hint_display_secs, 0.5..=30.0, 0.1);
    changed |= color_edit(ui, "User dot:", &mut opts.preview_user_color);
    changed |= color_edit(ui, "Target dot:", &mut opts.preview_target_color);
    changed
}

/// Beschriftetes DragValue in einer Zeile.
fn drag_value(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            let [r, g, b, a] = c.to_srgba_unmultiplied();
            *color = [
                r as f32 / 255.0,
                g as f32 / 255.0,
                b as f32 / 255.0,
                a as f32 / 255.0,
            ];
            changed = true;
        }
    });
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_dialog(state: &AppState) -> Vec<AppIntent> {
        let ctx = egui::Context::default();
        let mut events = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            events = show_options_dialog(ctx, state);
        });
        events
    }

    #[test]
    fn test_hidden_dialog_emits_nothing() {
        let state = AppState::with_seed(1);
        assert!(run_dialog(&state).is_empty());
    }

    #[test]
    fn test_open_dialog_without_input_keeps_options() {
        let mut state = AppState::with_seed(1);
        state.show_options_dialog = true;
        let events = run_dialog(&state);
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, AppIntent::OptionsChanged { .. })),
            "ohne Eingabe keine Änderung"
        );
    }
}

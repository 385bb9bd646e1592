//! Kopfzeile mit Moduswahl, Optionen und Programmende.

use crate::app::{AppIntent, AppState, GameMode};

/// Rendert die Kopfzeile und gibt erzeugte Events zurück.
pub fn render_header(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Smooth Operator");
            ui.separator();

            for mode in [GameMode::Guided, GameMode::Freestyle] {
                if ui
                    .selectable_label(state.mode == mode, mode.label())
                    .clicked()
                {
                    events.push(AppIntent::SwitchModeRequested { mode });
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Quit").clicked() {
                    events.push(AppIntent::ExitRequested);
                }
                if ui.button("⚙ Options").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                }
            });
        });
    });

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_renders_without_intents() {
        let state = AppState::with_seed(1);
        let ctx = egui::Context::default();
        let mut events = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            events = render_header(ctx, &state);
        });
        assert!(events.is_empty());
    }
}

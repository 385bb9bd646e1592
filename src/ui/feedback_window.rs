//! Feedback-Fenster nach "Check Answer".

use crate::app::{AppIntent, AppState};

/// Zeigt das Feedback-Fenster des geführten Modus und gibt erzeugte Events zurück.
pub fn show_feedback_window(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let run = &state.guided;

    if !run.is_feedback_open() {
        return events;
    }
    let Some(score) = run.last_score() else {
        return events;
    };

    let title = if score.is_perfect() {
        "Correct!"
    } else {
        "Not quite"
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!("Score: {}", score));
            if let Some(text) = run.feedback() {
                ui.add_space(4.0);
                ui.label(text);
            }
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if score.is_perfect() {
                    if ui.button("✏ Recreate the Curve").clicked() {
                        events.push(AppIntent::RecreateCurveRequested);
                    }
                    if ui.button("Next Level ➡").clicked() {
                        events.push(AppIntent::NextLevelRequested);
                    }
                } else if ui.button("Try Again (Esc)").clicked() {
                    events.push(AppIntent::FeedbackDismissed);
                }
            });
        });

    events
}

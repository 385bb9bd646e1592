//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, GameMode};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(mode_text(state));
            ui.separator();
            ui.label(progress_text(state));
            ui.separator();

            // Kurve des Editors, sonst die gewählte Easing-Funktion
            let curve = match state.canvas_editor() {
                Some(session) => session.user(),
                None => state.guided.selected_easing().curve(),
            };
            ui.monospace(curve.to_css_string(2));

            if state.is_dragging() {
                ui.separator();
                ui.label("Dragging");
            }
        });
    });
}

fn mode_text(state: &AppState) -> String {
    format!("Mode: {}", state.mode.label())
}

/// Level-Fortschritt (Challenges) bzw. letztes Ergebnis (Freestyle).
fn progress_text(state: &AppState) -> String {
    match state.mode {
        GameMode::Guided => {
            let run = &state.guided;
            if run.is_completed() {
                format!("Level: {0}/{0} ✔", run.level_count())
            } else {
                format!("Level: {}/{}", run.level_number(), run.level_count())
            }
        }
        GameMode::Freestyle => match state.freestyle.result() {
            Some(score) => format!("Score: {}", score),
            None => "Score: -".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guided_status_texts() {
        let state = AppState::with_seed(1);
        assert_eq!(mode_text(&state), "Mode: Challenges");
        assert_eq!(progress_text(&state), "Level: 1/16");
    }

    #[test]
    fn test_freestyle_status_shows_score_after_check() {
        let mut state = AppState::with_seed(1);
        state.mode = GameMode::Freestyle;
        assert_eq!(mode_text(&state), "Mode: Freestyle");
        assert_eq!(progress_text(&state), "Score: -");

        let score = state.freestyle.check();
        assert_eq!(progress_text(&state), format!("Score: {}%", score.value()));
    }

    #[test]
    fn test_status_bar_renders_headless() {
        let state = AppState::with_seed(1);
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            render_status_bar(ctx, &state);
        });
    }
}

//! Bildschirm des geführten Modus: Level erkennen, Hinweise, Kurve nachbauen.

use super::easing_selector::render_easing_selector;
use super::editor_canvas::render_editor_canvas;
use super::preview::preview_track;
use crate::app::{AppIntent, AppState};
use crate::render::CurveScene;

/// Rendert den geführten Modus und gibt erzeugte Events zurück.
///
/// `scene` ist nur im Editor "Kurve nachbauen" gesetzt.
pub fn render_guided_view(
    ui: &mut egui::Ui,
    state: &mut AppState,
    scene: Option<&CurveScene>,
) -> Vec<AppIntent> {
    if state.guided.is_completed() {
        return render_completed(ui, state);
    }

    let mut events = Vec::new();
    let level_number = state.guided.level_number();
    let level_count = state.guided.level_count();
    let level = *state.guided.current_level();

    ui.heading(format!("Level {} of {}", level_number, level_count));
    ui.label(level.description);
    ui.add_space(8.0);

    match scene {
        Some(scene) => events.extend(render_recreate(ui, state, scene)),
        None => events.extend(render_choice(ui, state)),
    }

    events
}

// ── Multiple Choice ─────────────────────────────────────────────────

fn render_choice(ui: &mut egui::Ui, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let options = state.options.clone();

    {
        let session = state.guided.session_mut();
        preview_track(
            ui,
            "Target",
            session.target_preview_mut(),
            &options,
            options.preview_target_color,
        );
        preview_track(
            ui,
            "Your choice",
            session.user_preview_mut(),
            &options,
            options.preview_user_color,
        );
    }
    ui.add_space(8.0);

    events.extend(render_easing_selector(ui, state.guided.selected_easing()));
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if ui.button("⟲ Replay (R)").clicked() {
            events.push(AppIntent::ReplayRequested);
        }
        if ui.button("💡 Get a Hint").clicked() {
            events.push(AppIntent::HintRequested {
                now: ui.input(|i| i.time),
            });
        }
        let check = ui.add_enabled(
            !state.guided.is_feedback_open(),
            egui::Button::new("✔ Check Answer (Enter)"),
        );
        if check.clicked() {
            events.push(AppIntent::CheckAnswerRequested);
        }
    });

    if let Some(hint) = state.guided.hint() {
        let now = ui.input(|i| i.time);
        if hint.is_expired(now, options.hint_display_secs) {
            events.push(AppIntent::HintExpired);
        } else {
            ui.add_space(6.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.label(egui::RichText::new(&hint.text).italics());
            });
        }
    }

    events
}

// ── Kurve nachbauen ─────────────────────────────────────────────────

fn render_recreate(ui: &mut egui::Ui, state: &mut AppState, scene: &CurveScene) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let options = state.options.clone();

    let Some(session) = state.guided.recreate() else {
        return events;
    };
    ui.label(format!(
        "Recreate the curve of {}",
        state.guided.current_level().easing
    ));
    events.extend(render_editor_canvas(ui, session, scene, &options));
    ui.monospace(session.user().to_css_string(2));
    let score = session.last_score();

    if let Some(session) = state.guided.recreate_mut() {
        preview_track(
            ui,
            "Target",
            session.target_preview_mut(),
            &options,
            options.preview_target_color,
        );
        preview_track(
            ui,
            "Your curve",
            session.user_preview_mut(),
            &options,
            options.preview_user_color,
        );
    }

    ui.horizontal(|ui| {
        if ui.button("⟲ Replay (R)").clicked() {
            events.push(AppIntent::ReplayRequested);
        }
        if ui.button("🎯 Check Accuracy (Enter)").clicked() {
            events.push(AppIntent::RecreateScoreRequested);
        }
        if ui.button("Done, Next Level!").clicked() {
            events.push(AppIntent::RecreateFinished);
        }
    });

    if let Some(score) = score {
        ui.label(format!("Accuracy: {}", score));
    }

    events
}

// ── Abschluss ───────────────────────────────────────────────────────

fn render_completed(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading("🎉 Congratulations!");
        ui.label(format!(
            "You completed all {} levels.",
            state.guided.level_count()
        ));
        ui.add_space(12.0);
        if ui.button("Play Again (Enter)").clicked() {
            events.push(AppIntent::PlayAgainRequested);
        }
    });

    events
}

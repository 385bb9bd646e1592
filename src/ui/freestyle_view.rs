//! Freestyle-Bildschirm: Mystery Curve per Drag oder Schieberegler nachbauen.

use super::editor_canvas::render_editor_canvas;
use super::preview::preview_track;
use crate::app::freestyle::SLIDER_RANGE;
use crate::app::{AppIntent, AppState};
use crate::render::CurveScene;

const PARAMETER_LABELS: [&str; 4] = ["x1", "y1", "x2", "y2"];

/// Rendert den Freestyle-Modus und gibt erzeugte Events zurück.
pub fn render_freestyle_view(
    ui: &mut egui::Ui,
    state: &mut AppState,
    scene: Option<&CurveScene>,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let options = state.options.clone();

    ui.heading("Freestyle: Mystery Curve");
    ui.label("Watch the blue dot and rebuild its timing curve.");
    ui.add_space(8.0);

    ui.horizontal_top(|ui| {
        if let Some(scene) = scene {
            events.extend(render_editor_canvas(
                ui,
                state.freestyle.session(),
                scene,
                &options,
            ));
        }

        ui.vertical(|ui| {
            let user = state.freestyle.session().user();
            for (index, label) in PARAMETER_LABELS.iter().enumerate() {
                let Some(mut value) = user.parameter(index) else {
                    continue;
                };
                // x-Werte bleiben auf [0, 1] beschränkt
                let range = if index % 2 == 0 {
                    0.0..=1.0
                } else {
                    SLIDER_RANGE
                };
                let slider = egui::Slider::new(&mut value, range)
                    .text(*label)
                    .step_by(0.01)
                    .fixed_decimals(3);
                if ui.add(slider).changed() {
                    events.push(AppIntent::CurveParameterChanged { index, value });
                }
            }
            ui.add_space(6.0);
            ui.monospace(user.to_css_string(3));
        });
    });
    ui.add_space(8.0);

    {
        let session = state.freestyle.session_mut();
        preview_track(
            ui,
            "Mystery",
            session.target_preview_mut(),
            &options,
            options.preview_target_color,
        );
        preview_track(
            ui,
            "Your guess",
            session.user_preview_mut(),
            &options,
            options.preview_user_color,
        );
    }

    ui.horizontal(|ui| {
        if ui.button("⟲ Replay (R)").clicked() {
            events.push(AppIntent::ReplayRequested);
        }
        if ui.button("🎯 Check My Guess! (Enter)").clicked() {
            events.push(AppIntent::CheckGuessRequested);
        }
        if ui.button("🎲 New Challenge").clicked() {
            events.push(AppIntent::NewChallengeRequested);
        }
    });

    if let (Some(score), Some(rating)) = (state.freestyle.result(), state.freestyle.rating()) {
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.heading(format!("{} {}", score, rating.label()));
            ui.label(format!("It was: {}", state.freestyle.preset().name));
            ui.monospace(state.freestyle.session().target().to_css_string(3));
        });
    }

    events
}

//! Vorschau-Widget: ein Punkt fährt mit der Timing-Funktion über eine Bahn.

use crate::core::LivePreview;
use crate::render::color32;
use crate::shared::GameOptions;

const TRACK_HEIGHT: f32 = 28.0;
const DOT_RADIUS: f32 = 10.0;

/// Zeichnet eine Vorschau-Bahn mit Beschriftung.
///
/// Die Position wird aus der egui-Uhr abgetastet; solange eine Vorschau
/// sichtbar ist, wird kontinuierlich neu gezeichnet.
pub fn preview_track(
    ui: &mut egui::Ui,
    label: &str,
    preview: &mut LivePreview,
    options: &GameOptions,
    color: [f32; 4],
) {
    let now = ui.input(|i| i.time);
    let progress = preview.sample(now);
    let half = options.preview_track_width_px * 0.5;

    ui.horizontal(|ui| {
        ui.add_sized([90.0, TRACK_HEIGHT], egui::Label::new(label));

        let width = options.preview_track_width_px + 2.0 * DOT_RADIUS;
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(width, TRACK_HEIGHT), egui::Sense::hover());
        let painter = ui.painter_at(rect.expand(DOT_RADIUS * 2.0));

        painter.line_segment(
            [
                egui::pos2(rect.center().x - half, rect.center().y),
                egui::pos2(rect.center().x + half, rect.center().y),
            ],
            egui::Stroke::new(1.0, color32(options.guide_color)),
        );

        // Überschwingen (y < 0 oder y > 1) darf die Bahn verlassen
        let x = rect.center().x - half + progress * options.preview_track_width_px;
        painter.circle_filled(egui::pos2(x, rect.center().y), DOT_RADIUS, color32(color));
    });

    ui.ctx().request_repaint();
}

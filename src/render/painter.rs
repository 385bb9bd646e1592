//! egui-Backend: übersetzt eine `CurveScene` in Shapes.

use super::scene::{CurveGeometry, CurveScene, GridLineKind};
use crate::core::DragState;
use crate::shared::GameOptions;
use eframe::egui;
use egui::epaint::CubicBezierShape;
use glam::Vec2;

/// Flatten-Toleranz der gestrichelten Zielkurve in Pixeln.
const TARGET_FLATTEN_TOLERANCE: f32 = 0.5;

/// Wandelt eine RGBA-Farbe aus den Optionen in `Color32`.
pub fn color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}

/// Zeichnet eine Szene in `rect`. Reihenfolge: Hintergrund, Raster, Ziel, Hilfslinien,
/// Nutzerkurve, Handles.
pub fn paint_scene(
    painter: &egui::Painter,
    rect: egui::Rect,
    scene: &CurveScene,
    options: &GameOptions,
    drag: DragState,
) {
    let to_pos = |v: Vec2| egui::pos2(rect.min.x + v.x, rect.min.y + v.y);

    painter.rect_filled(rect, 8.0, color32(options.surface_color));

    let grid_stroke = egui::Stroke::new(1.0, color32(options.grid_color));
    let axis_stroke = egui::Stroke::new(1.0, color32(options.axis_color));
    for line in &scene.grid {
        let stroke = match line.kind {
            GridLineKind::Minor => grid_stroke,
            GridLineKind::AxisZero | GridLineKind::AxisOne => axis_stroke,
        };
        painter.line_segment([to_pos(line.from), to_pos(line.to)], stroke);
    }

    if let Some(target) = &scene.target {
        paint_target_curve(painter, target, options, &to_pos);
    }

    let guide_stroke = egui::Stroke::new(options.guide_stroke_width, color32(options.guide_color));
    for guide in &scene.user.guides {
        painter.line_segment([to_pos(guide.from), to_pos(guide.to)], guide_stroke);
    }

    let [start, c1, c2, end] = scene.user.path.points().map(to_pos);
    painter.add(CubicBezierShape::from_points_stroke(
        [start, c1, c2, end],
        false,
        egui::Color32::TRANSPARENT,
        egui::Stroke::new(options.user_stroke_width, color32(options.user_curve_color)),
    ));

    let fill = color32(options.handle_fill_color);
    let outline = color32(options.handle_stroke_color);
    for (handle, pos) in scene.user.handles {
        // Gezogener Handle etwas größer
        let radius = if drag.handle() == Some(handle) {
            options.handle_radius_px * 1.25
        } else {
            options.handle_radius_px
        };
        painter.circle(to_pos(pos), radius, fill, egui::Stroke::new(2.0, outline));
    }
}

/// Zielkurve gestrichelt und abgeschwächt, ohne Hilfslinien und Handles.
fn paint_target_curve(
    painter: &egui::Painter,
    target: &CurveGeometry,
    options: &GameOptions,
    to_pos: &impl Fn(Vec2) -> egui::Pos2,
) {
    let stroke = egui::Stroke::new(
        options.target_stroke_width,
        color32(options.target_curve_color),
    );
    let bezier = CubicBezierShape::from_points_stroke(
        target.path.points().map(to_pos),
        false,
        egui::Color32::TRANSPARENT,
        stroke,
    );
    let points = bezier.flatten(Some(TARGET_FLATTEN_TOLERANCE));
    painter.extend(egui::Shape::dashed_line(
        &points,
        stroke,
        options.target_dash_length,
        options.target_dash_gap,
    ));
}

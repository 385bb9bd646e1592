//! Zeichenfläche des Kurven-Editors inklusive Pointer-Eingaben.
//!
//! Pointer-Down wird nur auf einem Handle angenommen. Während eines Drags
//! werden Bewegungen und das Loslassen global gelesen, also auch außerhalb
//! der Fläche.

use crate::app::{AppIntent, EditorSession};
use crate::render::{paint_scene, CurveScene};
use crate::shared::GameOptions;
use glam::Vec2;

/// Rendert den Editor und gibt erzeugte Events zurück.
pub fn render_editor_canvas(
    ui: &mut egui::Ui,
    session: &EditorSession,
    scene: &CurveScene,
    options: &GameOptions,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let surface = options.surface_size();

    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(surface.x, surface.y), egui::Sense::click_and_drag());
    let to_surface = |pos: egui::Pos2| Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y);

    let (pressed, released, primary_down, pointer_pos) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.primary_down(),
            i.pointer.latest_pos(),
        )
    });

    if session.is_dragging() {
        if let Some(pos) = pointer_pos {
            events.push(AppIntent::PointerMoved {
                surface_pos: to_surface(pos),
            });
        }
        if released || !primary_down {
            events.push(AppIntent::PointerReleased);
        }
    } else if pressed && response.hovered() {
        if let Some(pos) = pointer_pos {
            if let Some(handle) =
                session.handle_at(to_surface(pos), surface, options.handle_pick_radius_px)
            {
                events.push(AppIntent::HandlePressed { handle });
            }
        }
    }

    // Cursor-Feedback über Handles
    if session.is_dragging() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    } else if let Some(pos) = response.hover_pos() {
        if session
            .handle_at(to_surface(pos), surface, options.handle_pick_radius_px)
            .is_some()
        {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }
    }

    paint_scene(
        &ui.painter_at(rect),
        rect,
        scene,
        options,
        session.drag_state(),
    );

    events
}

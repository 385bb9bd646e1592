//! Handler für den aktiven Kurven-Editor (Drag, Parameter, Vorschau).

use crate::app::state::GameMode;
use crate::app::AppState;
use crate::core::ControlHandle;
use glam::Vec2;

/// Startet alle Vorschauen des aktiven Bildschirms neu.
pub fn replay(state: &mut AppState) {
    state.active_editor_mut().replay();
}

/// Beginnt einen Drag; wird ignoriert, wenn bereits ein Handle gezogen wird.
pub fn begin_drag(state: &mut AppState, handle: ControlHandle) {
    if !state.active_editor_mut().pointer_down(handle) {
        log::debug!("Pointer-Down auf {:?} ignoriert: Drag läuft bereits", handle);
    }
}

/// Setzt den gezogenen Handle auf die Pointer-Position.
pub fn update_drag(state: &mut AppState, surface_pos: Vec2, surface_size: Vec2) {
    state
        .active_editor_mut()
        .pointer_move(surface_pos, surface_size);
}

/// Beendet den Drag und startet die Nutzer-Vorschau neu.
pub fn end_drag(state: &mut AppState) {
    let editor = state.active_editor_mut();
    if editor.pointer_up() {
        log::debug!("Drag beendet: {}", editor.user());
    }
}

/// Setzt einen Kurvenparameter (Freestyle-Regler begrenzen zusätzlich auf −2..2).
pub fn set_curve_parameter(state: &mut AppState, index: usize, value: f64) -> anyhow::Result<()> {
    let accepted = match state.mode {
        GameMode::Freestyle => state.freestyle.set_parameter(index, value),
        GameMode::Guided => state.active_editor_mut().set_parameter(index, value),
    };
    if !accepted {
        anyhow::bail!("Ungültiger Kurvenparameter: Index {}, Wert {}", index, value);
    }
    Ok(())
}

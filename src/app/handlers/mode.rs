//! Handler für den Wechsel des Spielmodus.

use crate::app::state::GameMode;
use crate::app::AppState;

/// Wechselt den Modus. Laufende Drags des alten Modus werden freigegeben,
/// die Vorschauen des neuen Modus starten von vorn.
pub fn set_mode(state: &mut AppState, mode: GameMode) {
    match state.mode {
        GameMode::Guided => state.guided.teardown(),
        GameMode::Freestyle => state.freestyle.session_mut().teardown(),
    }

    state.mode = mode;
    match mode {
        GameMode::Guided => state.guided.replay(),
        GameMode::Freestyle => state.freestyle.session_mut().replay(),
    }
    log::info!("Spielmodus: {}", mode.label());
}

mod drag_lifecycle;
mod freestyle;
mod guided;
mod shell;

use smooth_operator::{AppCommand, AppController, AppIntent, AppState};

/// Frischer Controller + deterministischer State.
pub(crate) fn setup(seed: u64) -> (AppController, AppState) {
    (AppController::new(), AppState::with_seed(seed))
}

/// Verarbeitet einen Intent und erwartet Erfolg.
pub(crate) fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    let label = format!("{intent:?}");
    controller
        .handle_intent(state, intent)
        .unwrap_or_else(|e| panic!("{label} sollte ohne Fehler durchlaufen: {e:#}"));
}

/// Letzter geloggter Command.
pub(crate) fn last_command(state: &AppState) -> &AppCommand {
    state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein")
}

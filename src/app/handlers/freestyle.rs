//! Handler für den Freestyle-Modus.

use crate::app::AppState;

/// Bewertet die Schätzung und deckt die Zielkurve auf.
pub fn check_guess(state: &mut AppState) {
    let score = state.freestyle.check();
    log::info!(
        "Freestyle '{}': {} für {}",
        state.freestyle.preset().name,
        score,
        state.freestyle.session().user().to_css_string(3)
    );
}

/// Startet eine neue Runde mit zufälligem Preset.
pub fn new_challenge(state: &mut AppState) {
    state.freestyle.new_challenge(&mut state.rng, &state.options);
    log::info!("Neue Freestyle-Runde generiert");
}

//! Handler für den geführten Modus (Level, Antworten, Hinweise, Nachbau).

use crate::app::feedback::FeedbackProvider;
use crate::app::AppState;
use crate::core::EasingFunction;

/// Setzt die gewählte Easing-Funktion.
pub fn select_easing(state: &mut AppState, easing: EasingFunction) {
    state.guided.select_easing(easing);
}

/// Bewertet die Auswahl und öffnet das Feedback-Fenster.
pub fn check_answer(state: &mut AppState, provider: &dyn FeedbackProvider) {
    let score = state.guided.check_answer(provider);
    log::info!(
        "Level {}/{}: {} gewählt, Ziel {} → {}",
        state.guided.level_number(),
        state.guided.level_count(),
        state.guided.selected_easing(),
        state.guided.current_level().easing,
        score
    );
}

/// Zeigt einen Hinweis zum aktuellen Level.
pub fn show_hint(state: &mut AppState, provider: &dyn FeedbackProvider, now: f64) {
    state.guided.request_hint(provider, now);
}

/// Entfernt den Hinweis.
pub fn clear_hint(state: &mut AppState) {
    state.guided.expire_hint();
}

/// Schließt das Feedback-Fenster.
pub fn dismiss_feedback(state: &mut AppState) {
    state.guided.dismiss_feedback();
}

/// Wechselt zum nächsten Level (auch aus dem Nachbau-Editor heraus).
pub fn advance_level(state: &mut AppState) {
    state.guided.next_level();
    if state.guided.is_completed() {
        log::info!("Alle {} Level abgeschlossen", state.guided.level_count());
    } else {
        log::info!(
            "Level {}/{} gestartet",
            state.guided.level_number(),
            state.guided.level_count()
        );
    }
}

/// Mischt die Level neu und beginnt von vorn.
pub fn restart_run(state: &mut AppState) {
    state.guided.play_again(&mut state.rng);
    log::info!("Neuer Durchlauf mit {} Leveln", state.guided.level_count());
}

/// Öffnet "Kurve nachbauen". Nur nach richtiger Antwort erlaubt.
pub fn start_recreate(state: &mut AppState) -> anyhow::Result<()> {
    if !state.guided.start_recreate(&state.options) {
        anyhow::bail!("Kurve nachbauen ist erst nach einer richtigen Antwort möglich");
    }
    log::info!("Kurve nachbauen: {}", state.guided.current_level().easing);
    Ok(())
}

/// Bewertet den Nachbau numerisch gegen die Zielkurve.
pub fn score_recreate(state: &mut AppState) -> anyhow::Result<()> {
    let Some(editor) = state.guided.recreate_mut() else {
        anyhow::bail!("Kein Nachbau-Editor aktiv");
    };
    let score = editor.score();
    log::info!("Nachbau bewertet: {} ({})", score, editor.user());
    Ok(())
}

//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::GameOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.guided.teardown();
    state.freestyle.session_mut().teardown();
    state.should_exit = true;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: GameOptions) -> anyhow::Result<()> {
    set_options(state, options.sanitized());
    let path = GameOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    set_options(state, GameOptions::default());
    let path = GameOptions::config_path();
    state.options.save_to_file(&path)
}

fn set_options(state: &mut AppState, options: GameOptions) {
    // Geänderte Freestyle-Dauer gilt sofort für die laufende Runde
    if options.freestyle_duration_secs != state.options.freestyle_duration_secs {
        let session = state.freestyle.session_mut();
        session
            .user_preview_mut()
            .set_duration(options.freestyle_duration_secs);
        session
            .target_preview_mut()
            .set_duration(options.freestyle_duration_secs);
    }
    state.options = options;
}

//! Keyboard-Shortcuts.
//!
//! Verarbeitet globale Tasten und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, AppState};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Texteingaben (z.B. DragValue im Options-Dialog) haben Vorrang
    if ctx.wants_keyboard_input() {
        return events;
    }

    let (key_r_pressed, key_enter_pressed, key_escape_pressed) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::Enter),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if key_r_pressed {
        events.push(AppIntent::ReplayRequested);
    }

    if key_enter_pressed {
        events.push(AppIntent::ConfirmRequested);
    }

    if key_escape_pressed && state.guided.is_feedback_open() {
        events.push(AppIntent::FeedbackDismissed);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::feedback::OfflineFeedback;
    use crate::core::EasingFunction;

    fn key_event(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::default(),
        }
    }

    fn collect_with_key_event(event: egui::Event, state: &AppState) -> Vec<AppIntent> {
        let ctx = egui::Context::default();
        let mut raw_input = egui::RawInput::default();
        raw_input.events.push(event);

        let mut events = Vec::new();
        let _ = ctx.run(raw_input, |ctx| {
            events = collect_keyboard_intents(ctx, state);
        });

        events
    }

    #[test]
    fn test_r_requests_replay() {
        let state = AppState::with_seed(1);
        let events = collect_with_key_event(key_event(egui::Key::R), &state);
        assert!(matches!(events.as_slice(), [AppIntent::ReplayRequested]));
    }

    #[test]
    fn test_enter_requests_confirm() {
        let state = AppState::with_seed(1);
        let events = collect_with_key_event(key_event(egui::Key::Enter), &state);
        assert!(matches!(events.as_slice(), [AppIntent::ConfirmRequested]));
    }

    #[test]
    fn test_escape_only_dismisses_open_feedback() {
        let mut state = AppState::with_seed(1);
        let events = collect_with_key_event(key_event(egui::Key::Escape), &state);
        assert!(events.is_empty());

        state.guided.select_easing(EasingFunction::EaseOut);
        state.guided.check_answer(&OfflineFeedback);
        let events = collect_with_key_event(key_event(egui::Key::Escape), &state);
        assert!(matches!(events.as_slice(), [AppIntent::FeedbackDismissed]));
    }
}

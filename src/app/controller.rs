//! Application Controller für zentrale Event-Verarbeitung.

use super::feedback::{FeedbackProvider, OfflineFeedback};
use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::render::CurveScene;

/// Orchestriert UI-Events und Feature-Handler auf den AppState.
pub struct AppController {
    /// Quelle für Hinweise und Feedback-Texte
    feedback: Box<dyn FeedbackProvider>,
}

impl AppController {
    /// Erstellt einen Controller mit Offline-Feedback.
    pub fn new() -> Self {
        Self::with_feedback(Box::new(OfflineFeedback))
    }

    /// Erstellt einen Controller mit eigener Feedback-Quelle.
    pub fn with_feedback(feedback: Box<dyn FeedbackProvider>) -> Self {
        Self { feedback }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Modus & Anwendung ===
            AppCommand::SetMode { mode } => handlers::mode::set_mode(state, mode),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),

            // === Geführter Modus ===
            AppCommand::SelectEasing { easing } => handlers::guided::select_easing(state, easing),
            AppCommand::CheckAnswer => {
                handlers::guided::check_answer(state, self.feedback.as_ref())
            }
            AppCommand::ShowHint { now } => {
                handlers::guided::show_hint(state, self.feedback.as_ref(), now)
            }
            AppCommand::ClearHint => handlers::guided::clear_hint(state),
            AppCommand::DismissFeedback => handlers::guided::dismiss_feedback(state),
            AppCommand::AdvanceLevel => handlers::guided::advance_level(state),
            AppCommand::RestartRun => handlers::guided::restart_run(state),
            AppCommand::StartRecreate => handlers::guided::start_recreate(state)?,
            AppCommand::ScoreRecreate => handlers::guided::score_recreate(state)?,

            // === Editor ===
            AppCommand::ReplayPreviews => handlers::editor::replay(state),
            AppCommand::BeginHandleDrag { handle } => handlers::editor::begin_drag(state, handle),
            AppCommand::UpdateHandleDrag {
                surface_pos,
                surface_size,
            } => handlers::editor::update_drag(state, surface_pos, surface_size),
            AppCommand::EndHandleDrag => handlers::editor::end_drag(state),
            AppCommand::SetCurveParameter { index, value } => {
                handlers::editor::set_curve_parameter(state, index, value)?
            }

            // === Freestyle ===
            AppCommand::CheckGuess => handlers::freestyle::check_guess(state),
            AppCommand::NewChallenge => handlers::freestyle::new_challenge(state),

            // === Dialoge & Optionen ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene des Editors im aktiven Bildschirm.
    /// `None`, wenn der Bildschirm keine Zeichenfläche hat.
    pub fn build_scene(&self, state: &AppState) -> Option<CurveScene> {
        state
            .canvas_editor()
            .map(|session| render_scene::build(session, &state.options))
    }
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

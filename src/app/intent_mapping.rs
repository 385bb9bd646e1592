//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::GameMode;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SwitchModeRequested { mode } => {
            if mode == state.mode {
                vec![]
            } else {
                vec![AppCommand::SetMode { mode }]
            }
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],

        AppIntent::EasingSelected { easing } => vec![AppCommand::SelectEasing { easing }],
        AppIntent::CheckAnswerRequested => vec![AppCommand::CheckAnswer],
        AppIntent::HintRequested { now } => vec![AppCommand::ShowHint { now }],
        AppIntent::HintExpired => vec![AppCommand::ClearHint],
        AppIntent::FeedbackDismissed => vec![AppCommand::DismissFeedback],
        AppIntent::NextLevelRequested | AppIntent::RecreateFinished => {
            vec![AppCommand::AdvanceLevel]
        }
        AppIntent::PlayAgainRequested => vec![AppCommand::RestartRun],
        AppIntent::RecreateCurveRequested => vec![AppCommand::StartRecreate],
        AppIntent::RecreateScoreRequested => vec![AppCommand::ScoreRecreate],

        AppIntent::ReplayRequested => vec![AppCommand::ReplayPreviews],
        AppIntent::HandlePressed { handle } => vec![AppCommand::BeginHandleDrag { handle }],
        AppIntent::PointerMoved { surface_pos } => {
            // Moves ohne laufenden Drag sind kein Command
            if state.is_dragging() {
                vec![AppCommand::UpdateHandleDrag {
                    surface_pos,
                    surface_size: state.options.surface_size(),
                }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased => {
            if state.is_dragging() {
                vec![AppCommand::EndHandleDrag]
            } else {
                vec![]
            }
        }
        AppIntent::CurveParameterChanged { index, value } => {
            vec![AppCommand::SetCurveParameter { index, value }]
        }

        AppIntent::CheckGuessRequested => vec![AppCommand::CheckGuess],
        AppIntent::NewChallengeRequested => vec![AppCommand::NewChallenge],

        AppIntent::ConfirmRequested => map_confirm(state),

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

/// Enter prüft, was im aktuellen Bildschirm zu prüfen ist.
fn map_confirm(state: &AppState) -> Vec<AppCommand> {
    match state.mode {
        GameMode::Freestyle => vec![AppCommand::CheckGuess],
        GameMode::Guided => {
            let run = &state.guided;
            if run.is_completed() {
                vec![AppCommand::RestartRun]
            } else if run.is_recreating() {
                vec![AppCommand::ScoreRecreate]
            } else if run.is_feedback_open() {
                vec![]
            } else {
                vec![AppCommand::CheckAnswer]
            }
        }
    }
}

use smooth_operator::{AppCommand, AppIntent, EasingFunction, Score};

use super::{last_command, send, setup};

fn wrong_easing(target: EasingFunction) -> EasingFunction {
    EasingFunction::ALL
        .iter()
        .copied()
        .find(|e| *e != target)
        .expect("Katalog enthält mehr als eine Easing-Funktion")
}

#[test]
fn test_wrong_answer_opens_feedback_and_try_again_closes_it() {
    let (mut controller, mut state) = setup(7);
    let target = state.guided.current_level().easing;

    send(
        &mut controller,
        &mut state,
        AppIntent::EasingSelected {
            easing: wrong_easing(target),
        },
    );
    send(&mut controller, &mut state, AppIntent::CheckAnswerRequested);

    assert!(state.guided.is_feedback_open());
    assert_eq!(state.guided.last_score(), Some(Score::ZERO));
    assert!(state.guided.feedback().is_some());
    assert!(!state.guided.can_recreate());

    send(&mut controller, &mut state, AppIntent::FeedbackDismissed);
    assert!(!state.guided.is_feedback_open());
    assert_eq!(state.guided.level_number(), 1);
}

#[test]
fn test_recreate_is_rejected_before_correct_answer() {
    let (mut controller, mut state) = setup(7);

    let result = controller.handle_intent(&mut state, AppIntent::RecreateCurveRequested);

    assert!(result.is_err());
    assert!(!state.guided.is_recreating());
    assert!(matches!(last_command(&state), AppCommand::StartRecreate));
}

#[test]
fn test_correct_answer_then_recreate_and_finish() {
    let (mut controller, mut state) = setup(11);
    let target = state.guided.current_level().easing;

    send(
        &mut controller,
        &mut state,
        AppIntent::EasingSelected { easing: target },
    );
    send(&mut controller, &mut state, AppIntent::ConfirmRequested);
    assert_eq!(state.guided.last_score(), Some(Score::PERFECT));
    assert!(state.guided.can_recreate());

    // Ohne Nachbau-Editor hat der geführte Modus keine Zeichenfläche
    assert!(controller.build_scene(&state).is_none());

    send(&mut controller, &mut state, AppIntent::RecreateCurveRequested);
    assert!(state.guided.is_recreating());
    assert!(!state.guided.is_feedback_open());

    let scene = controller
        .build_scene(&state)
        .expect("Nachbau-Editor sollte eine Szene liefern");
    assert!(scene.target.is_some(), "Zielkurve ist beim Nachbau sichtbar");

    // Enter bewertet im Nachbau-Editor numerisch
    send(&mut controller, &mut state, AppIntent::ConfirmRequested);
    assert!(matches!(last_command(&state), AppCommand::ScoreRecreate));
    let recreate = state.guided.recreate().expect("Nachbau-Editor aktiv");
    assert!(recreate.last_score().is_some());

    send(&mut controller, &mut state, AppIntent::RecreateFinished);
    assert!(!state.guided.is_recreating());
    assert_eq!(state.guided.level_number(), 2);
    assert_eq!(state.guided.selected_easing(), EasingFunction::Linear);
}

#[test]
fn test_parameter_change_reaches_recreate_editor() {
    let (mut controller, mut state) = setup(11);
    let target = state.guided.current_level().easing;
    send(
        &mut controller,
        &mut state,
        AppIntent::EasingSelected { easing: target },
    );
    send(&mut controller, &mut state, AppIntent::ConfirmRequested);
    send(&mut controller, &mut state, AppIntent::RecreateCurveRequested);

    send(
        &mut controller,
        &mut state,
        AppIntent::CurveParameterChanged {
            index: 1,
            value: -0.75,
        },
    );
    assert!(matches!(
        last_command(&state),
        AppCommand::SetCurveParameter { index: 1, .. }
    ));
    let recreate = state.guided.recreate().expect("Nachbau-Editor aktiv");
    assert_eq!(recreate.user().p1.y, -0.75);
}

#[test]
fn test_hint_is_shown_and_expires() {
    let (mut controller, mut state) = setup(3);

    send(
        &mut controller,
        &mut state,
        AppIntent::HintRequested { now: 12.5 },
    );
    let hint = state.guided.hint().expect("Hinweis sollte gesetzt sein");
    assert!(!hint.text.is_empty());
    assert_eq!(hint.shown_at, 12.5);
    assert!(!hint.is_expired(14.0, state.options.hint_display_secs));
    assert!(hint.is_expired(18.0, state.options.hint_display_secs));

    send(&mut controller, &mut state, AppIntent::HintExpired);
    assert!(state.guided.hint().is_none());
}

#[test]
fn test_run_completes_and_play_again_restarts() {
    let (mut controller, mut state) = setup(5);
    let level_count = state.guided.level_count();

    for _ in 0..level_count {
        send(&mut controller, &mut state, AppIntent::NextLevelRequested);
    }
    assert!(state.guided.is_completed());

    // Enter auf dem Abschluss-Bildschirm startet neu
    send(&mut controller, &mut state, AppIntent::ConfirmRequested);
    assert!(matches!(last_command(&state), AppCommand::RestartRun));
    assert!(!state.guided.is_completed());
    assert_eq!(state.guided.level_number(), 1);
    assert_eq!(state.guided.level_count(), level_count);
}

#[test]
fn test_replay_bumps_preview_generation() {
    let (mut controller, mut state) = setup(9);
    let before = state.guided.session().target_preview().generation();

    send(&mut controller, &mut state, AppIntent::ReplayRequested);

    assert_ne!(state.guided.session().target_preview().generation(), before);
}

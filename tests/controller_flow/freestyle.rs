use approx::assert_relative_eq;
use smooth_operator::{AppIntent, GameMode, Score, ScoreRating};

use super::{send, setup};

fn freestyle_state(seed: u64) -> (smooth_operator::AppController, smooth_operator::AppState) {
    let (mut controller, mut state) = setup(seed);
    send(
        &mut controller,
        &mut state,
        AppIntent::SwitchModeRequested {
            mode: GameMode::Freestyle,
        },
    );
    (controller, state)
}

#[test]
fn test_freestyle_starts_with_hidden_target() {
    let (controller, state) = freestyle_state(1);

    assert_eq!(state.mode, GameMode::Freestyle);
    assert_eq!(state.freestyle.session().user(), state.options.start_curve());
    let scene = controller
        .build_scene(&state)
        .expect("Freestyle hat immer eine Zeichenfläche");
    assert!(scene.target.is_none());
    assert!(state.freestyle.result().is_none());
}

#[test]
fn test_slider_values_are_clamped() {
    let (mut controller, mut state) = freestyle_state(2);

    send(
        &mut controller,
        &mut state,
        AppIntent::CurveParameterChanged {
            index: 1,
            value: 5.0,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::CurveParameterChanged {
            index: 2,
            value: 1.7,
        },
    );

    let user = state.freestyle.session().user();
    assert_relative_eq!(user.p1.y, 2.0);
    assert_relative_eq!(user.p2.x, 1.0);
}

#[test]
fn test_invalid_parameter_index_is_an_error() {
    let (mut controller, mut state) = freestyle_state(2);
    let before = state.freestyle.session().user();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::CurveParameterChanged {
            index: 4,
            value: 0.5,
        },
    );

    assert!(result.is_err());
    assert_eq!(state.freestyle.session().user(), before);
}

#[test]
fn test_exact_guess_scores_perfect_and_reveals_target() {
    let (mut controller, mut state) = freestyle_state(4);
    let target = state.freestyle.session().target();

    for (index, value) in target.to_array().into_iter().enumerate() {
        send(
            &mut controller,
            &mut state,
            AppIntent::CurveParameterChanged { index, value },
        );
    }
    send(&mut controller, &mut state, AppIntent::CheckGuessRequested);

    assert_eq!(state.freestyle.result(), Some(Score::PERFECT));
    assert_eq!(state.freestyle.rating(), Some(ScoreRating::Incredible));
    let scene = controller.build_scene(&state).expect("Szene");
    assert!(scene.target.is_some());
}

#[test]
fn test_new_challenge_resets_round() {
    let (mut controller, mut state) = freestyle_state(6);
    send(&mut controller, &mut state, AppIntent::ConfirmRequested);
    assert!(state.freestyle.result().is_some());

    send(&mut controller, &mut state, AppIntent::NewChallengeRequested);

    assert!(state.freestyle.result().is_none());
    assert!(state.freestyle.session().visible_target().is_none());
    assert_eq!(state.freestyle.session().user(), state.options.start_curve());
}

use smooth_operator::{AppCommand, AppIntent};

use super::{last_command, send, setup};

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let (mut controller, mut state) = setup(1);

    assert!(!state.should_exit);

    send(&mut controller, &mut state, AppIntent::ExitRequested);

    assert!(state.should_exit);
    assert!(matches!(last_command(&state), AppCommand::RequestExit));
}

#[test]
fn test_options_dialog_open_and_close() {
    let (mut controller, mut state) = setup(1);

    send(
        &mut controller,
        &mut state,
        AppIntent::OpenOptionsDialogRequested,
    );
    assert!(state.show_options_dialog);

    send(
        &mut controller,
        &mut state,
        AppIntent::CloseOptionsDialogRequested,
    );
    assert!(!state.show_options_dialog);
}

#[test]
fn test_each_intent_is_logged_once() {
    let (mut controller, mut state) = setup(1);

    send(&mut controller, &mut state, AppIntent::ReplayRequested);
    send(&mut controller, &mut state, AppIntent::HintExpired);

    assert_eq!(state.command_log.len(), 2);
    assert!(matches!(
        state.command_log.entries()[0],
        AppCommand::ReplayPreviews
    ));
}

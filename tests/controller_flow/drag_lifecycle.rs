use approx::assert_relative_eq;
use glam::Vec2;
use smooth_operator::{AppCommand, AppIntent, ControlHandle, DragState, GameMode};

use super::{last_command, send, setup};

fn freestyle_state() -> (smooth_operator::AppController, smooth_operator::AppState) {
    let (mut controller, mut state) = setup(21);
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
fn test_drag_moves_handle_and_release_ends_capture() {
    let (mut controller, mut state) = freestyle_state();
    let surface = state.options.surface_size();
    let pos = Vec2::new(surface.x * 0.5, surface.y * 0.5);
    let expected = state.freestyle.session().mapper(surface).from_surface(pos);

    send(
        &mut controller,
        &mut state,
        AppIntent::HandlePressed {
            handle: ControlHandle::P2,
        },
    );
    assert_eq!(state.freestyle.session().drag_state(), DragState::DraggingP2);

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved { surface_pos: pos },
    );
    let user = state.freestyle.session().user();
    assert_relative_eq!(user.p2.x, expected.x, epsilon = 1e-5);
    assert_relative_eq!(user.p2.y, expected.y, epsilon = 1e-5);
    assert_eq!(user.p1, state.options.start_curve().p1);

    send(&mut controller, &mut state, AppIntent::PointerReleased);
    assert!(!state.is_dragging());
    assert!(matches!(last_command(&state), AppCommand::EndHandleDrag));
}

#[test]
fn test_scene_rebuilt_after_move_shows_handle_at_new_position() {
    let (mut controller, mut state) = freestyle_state();
    let surface = state.options.surface_size();
    let before = controller.build_scene(&state).expect("Freestyle hat eine Zeichenfläche");

    let press = AppIntent::HandlePressed {
        handle: ControlHandle::P1,
    };
    let moved = AppIntent::PointerMoved {
        surface_pos: Vec2::new(surface.x * 0.8, surface.y * 0.2),
    };
    assert!(press.changes_canvas() && moved.changes_canvas());
    send(&mut controller, &mut state, press);
    send(&mut controller, &mut state, moved);

    let after = controller.build_scene(&state).expect("Freestyle hat eine Zeichenfläche");
    let session = state.freestyle.session();
    let expected = session.mapper(surface).to_surface(session.user().p1);
    assert_ne!(
        before.user.handle_position(ControlHandle::P1),
        after.user.handle_position(ControlHandle::P1)
    );
    assert_eq!(after.user.handle_position(ControlHandle::P1), expected);
}

#[test]
fn test_pointer_outside_surface_clamps_x() {
    let (mut controller, mut state) = freestyle_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::HandlePressed {
            handle: ControlHandle::P1,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            surface_pos: Vec2::new(-250.0, 40.0),
        },
    );
    assert_relative_eq!(state.freestyle.session().user().p1.x, 0.0);

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            surface_pos: Vec2::new(5000.0, 40.0),
        },
    );
    assert_relative_eq!(state.freestyle.session().user().p1.x, 1.0);
}

#[test]
fn test_moves_after_release_are_ignored() {
    let (mut controller, mut state) = freestyle_state();
    send(
        &mut controller,
        &mut state,
        AppIntent::HandlePressed {
            handle: ControlHandle::P1,
        },
    );
    send(&mut controller, &mut state, AppIntent::PointerReleased);
    let before = state.freestyle.session().user();
    let logged = state.command_log.len();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            surface_pos: Vec2::new(10.0, 10.0),
        },
    );

    assert_eq!(state.freestyle.session().user(), before);
    assert_eq!(state.command_log.len(), logged);
}

#[test]
fn test_second_press_during_drag_keeps_first_handle() {
    let (mut controller, mut state) = freestyle_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::HandlePressed {
            handle: ControlHandle::P1,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::HandlePressed {
            handle: ControlHandle::P2,
        },
    );

    assert_eq!(state.freestyle.session().drag_state(), DragState::DraggingP1);
}

#[test]
fn test_mode_switch_releases_running_drag() {
    let (mut controller, mut state) = freestyle_state();
    send(
        &mut controller,
        &mut state,
        AppIntent::HandlePressed {
            handle: ControlHandle::P2,
        },
    );
    assert!(state.is_dragging());

    send(
        &mut controller,
        &mut state,
        AppIntent::SwitchModeRequested {
            mode: GameMode::Guided,
        },
    );

    assert!(!state.freestyle.session().is_dragging());
    assert!(!state.is_dragging());
}

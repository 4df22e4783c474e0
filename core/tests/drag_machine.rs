use kurabe_core::{DragInput, DragMachine, DragPhase, PointerKind};

fn press(x: f64) -> DragInput {
    DragInput::Press {
        x,
        kind: PointerKind::Mouse,
    }
}

fn touch_move(x: f64) -> DragInput {
    DragInput::Move {
        x,
        kind: PointerKind::Touch,
    }
}

fn mouse_move(x: f64) -> DragInput {
    DragInput::Move {
        x,
        kind: PointerKind::Mouse,
    }
}

#[test]
fn press_starts_drag_and_suppresses_default() {
    let mut machine = DragMachine::new();
    let transition = machine.handle(press(10.0));
    assert!(transition.started());
    assert_eq!(transition.update, Some(10.0));
    assert!(transition.suppress_default);
    assert_eq!(machine.phase(), DragPhase::Dragging);
}

#[test]
fn move_while_idle_is_ignored() {
    let mut machine = DragMachine::new();
    let transition = machine.handle(mouse_move(40.0));
    assert_eq!(transition.from, DragPhase::Idle);
    assert_eq!(transition.to, DragPhase::Idle);
    assert_eq!(transition.update, None);
    assert!(!transition.suppress_default);
}

#[test]
fn touch_move_suppresses_scroll_but_mouse_move_does_not() {
    let mut machine = DragMachine::new();
    machine.handle(press(0.0));
    let touch = machine.handle(touch_move(5.0));
    assert!(touch.suppress_default);
    assert_eq!(touch.update, Some(5.0));
    let mouse = machine.handle(mouse_move(6.0));
    assert!(!mouse.suppress_default);
    assert_eq!(mouse.update, Some(6.0));
}

#[test]
fn idle_touch_move_does_not_block_scrolling() {
    let mut machine = DragMachine::new();
    let transition = machine.handle(touch_move(5.0));
    assert!(!transition.suppress_default);
}

#[test]
fn release_ends_drag_once() {
    let mut machine = DragMachine::new();
    machine.handle(press(0.0));
    let first = machine.handle(DragInput::Release);
    assert!(first.ended());
    let second = machine.handle(DragInput::Release);
    assert!(!second.ended());
    assert_eq!(machine.phase(), DragPhase::Idle);
}

#[test]
fn press_while_dragging_restarts_without_phase_edge() {
    let mut machine = DragMachine::new();
    machine.handle(press(0.0));
    let again = machine.handle(press(20.0));
    assert!(!again.started());
    assert_eq!(again.update, Some(20.0));
    assert!(machine.is_dragging());
}

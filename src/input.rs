use kurabe_core::{DragInput, PointerKind};
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, TouchEvent};

pub(crate) const PRESS_EVENTS: [&str; 2] = ["mousedown", "touchstart"];
pub(crate) const MOVE_EVENTS: [&str; 2] = ["mousemove", "touchmove"];
pub(crate) const RELEASE_EVENTS: [&str; 3] = ["mouseup", "touchend", "touchcancel"];

fn pointer_kind(event_type: &str) -> PointerKind {
    if event_type.starts_with("touch") {
        PointerKind::Touch
    } else {
        PointerKind::Mouse
    }
}

fn client_x(event: &Event, kind: PointerKind) -> Option<f64> {
    match kind {
        PointerKind::Mouse => {
            let event = event.dyn_ref::<MouseEvent>()?;
            Some(event.client_x() as f64)
        }
        PointerKind::Touch => {
            let event = event.dyn_ref::<TouchEvent>()?;
            let touch = event.touches().get(0)?;
            Some(touch.client_x() as f64)
        }
    }
}

/// Translates a DOM event into drag input. Returns `None` for unrelated
/// events and for pointer events that carry no usable coordinate.
pub(crate) fn drag_input(event: &Event) -> Option<DragInput> {
    let event_type = event.type_();
    let event_type = event_type.as_str();
    let kind = pointer_kind(event_type);
    if RELEASE_EVENTS.contains(&event_type) {
        return Some(DragInput::Release);
    }
    if PRESS_EVENTS.contains(&event_type) {
        let x = client_x(event, kind)?;
        return Some(DragInput::Press { x, kind });
    }
    if MOVE_EVENTS.contains(&event_type) {
        let x = client_x(event, kind)?;
        return Some(DragInput::Move { x, kind });
    }
    None
}

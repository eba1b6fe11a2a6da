use egui::{PointerButton, Pos2, Rect};

use super::InputEvent;
use crate::whiteboard::Whiteboard;

fn to_canvas(canvas_rect: Rect, position: Pos2) -> Pos2 {
    (position - canvas_rect.min).to_pos2()
}

/// Feed one input event to the whiteboard.
///
/// Only the primary button draws. A stroke has to start inside the canvas but
/// may be dragged and released anywhere; the painter clips what falls outside.
pub fn route_event(whiteboard: &mut Whiteboard, canvas_rect: Rect, event: &InputEvent) {
    match event {
        InputEvent::PointerDown {
            location,
            button: PointerButton::Primary,
        } if location.is_in_canvas => {
            whiteboard.begin_stroke(to_canvas(canvas_rect, location.position));
        }
        InputEvent::PointerMove {
            location,
            held_buttons,
        } if held_buttons.contains(&PointerButton::Primary) => {
            whiteboard.extend_stroke(to_canvas(canvas_rect, location.position));
        }
        InputEvent::PointerUp {
            button: PointerButton::Primary,
            ..
        } => whiteboard.end_stroke(),
        _ => {}
    }
}

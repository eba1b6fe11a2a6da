use egui::{Color32, Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Vec2};
use whiteboard::panels::ToolbarAction;
use whiteboard::{InputEvent, InputHandler, InputLocation, WhiteboardApp};

fn screen_rect() -> Rect {
    Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))
}

fn canvas_rect() -> Rect {
    // canvas sits below a 40px toolbar
    Rect::from_min_size(Pos2::new(0.0, 40.0), Vec2::new(800.0, 560.0))
}

fn moved(x: f32, y: f32) -> Event {
    Event::PointerMoved(Pos2::new(x, y))
}

fn button(x: f32, y: f32, pressed: bool) -> Event {
    Event::PointerButton {
        pos: Pos2::new(x, y),
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

fn raw_input(events: Vec<Event>) -> RawInput {
    RawInput {
        screen_rect: Some(screen_rect()),
        events,
        ..Default::default()
    }
}

/// Run one frame and feed its input to the app
fn app_frame(ctx: &egui::Context, app: &mut WhiteboardApp, events: Vec<Event>) {
    let _ = ctx.run(raw_input(events), |ctx| app.handle_input(ctx, canvas_rect()));
}

/// Run one frame and collect the events the handler produced
fn handler_frame(
    ctx: &egui::Context,
    handler: &mut InputHandler,
    events: Vec<Event>,
) -> Vec<InputEvent> {
    let mut produced = Vec::new();
    let _ = ctx.run(raw_input(events), |ctx| produced = handler.process_input(ctx));
    produced
}

#[test]
fn test_fresh_app_uses_default_pen() {
    let app = WhiteboardApp::default();
    let board = app.whiteboard();
    assert_eq!(board.color(), Color32::BLACK);
    assert_eq!(board.line_width(), 2);
    assert!(board.canvas().is_empty());
    assert!(!board.is_drawing());
    assert!(!app.color_dialog_open());
}

#[test]
fn test_press_is_reported_before_move_in_one_frame() {
    let ctx = egui::Context::default();
    let mut handler = InputHandler::new(canvas_rect());

    let events = handler_frame(
        &ctx,
        &mut handler,
        vec![moved(10.0, 50.0), button(10.0, 50.0, true), moved(20.0, 60.0)],
    );

    assert_eq!(events.len(), 2);
    assert_eq!(
        events[0],
        InputEvent::PointerDown {
            location: InputLocation {
                position: Pos2::new(10.0, 50.0),
                is_in_canvas: true,
            },
            button: PointerButton::Primary,
        }
    );
    match &events[1] {
        InputEvent::PointerMove {
            location,
            held_buttons,
        } => {
            assert_eq!(location.position, Pos2::new(20.0, 60.0));
            assert_eq!(held_buttons, &vec![PointerButton::Primary]);
        }
        other => panic!("expected a move, got {other:?}"),
    }
}

#[test]
fn test_release_after_pointer_left_uses_last_position() {
    let ctx = egui::Context::default();
    let mut handler = InputHandler::new(canvas_rect());

    handler_frame(&ctx, &mut handler, vec![moved(10.0, 50.0), button(10.0, 50.0, true)]);
    handler_frame(&ctx, &mut handler, vec![moved(20.0, 60.0)]);
    let events = handler_frame(
        &ctx,
        &mut handler,
        vec![button(25.0, 65.0, false), Event::PointerGone],
    );

    let up = events
        .iter()
        .find(|event| matches!(event, InputEvent::PointerUp { .. }))
        .expect("release should be reported");
    assert_eq!(
        up,
        &InputEvent::PointerUp {
            location: InputLocation {
                position: Pos2::new(20.0, 60.0),
                is_in_canvas: true,
            },
            button: PointerButton::Primary,
        }
    );
}

#[test]
fn test_drag_over_frames_draws_segments() {
    let ctx = egui::Context::default();
    let mut app = WhiteboardApp::default();

    app_frame(&ctx, &mut app, vec![moved(10.0, 50.0), button(10.0, 50.0, true)]);
    assert!(app.whiteboard().is_drawing());
    assert!(app.whiteboard().canvas().is_empty());

    app_frame(&ctx, &mut app, vec![moved(20.0, 60.0)]);
    app_frame(&ctx, &mut app, vec![moved(30.0, 60.0)]);
    app_frame(&ctx, &mut app, vec![button(30.0, 60.0, false)]);

    let board = app.whiteboard();
    assert!(!board.is_drawing());
    let segments = board.canvas().segments();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].from(), Pos2::new(10.0, 10.0));
    assert_eq!(segments[0].to(), Pos2::new(20.0, 20.0));
    assert_eq!(segments[1].to(), Pos2::new(30.0, 20.0));
}

#[test]
fn test_open_dialog_blocks_canvas_input() {
    let ctx = egui::Context::default();
    let mut app = WhiteboardApp::default();
    app.apply_toolbar_action(ToolbarAction::OpenColorDialog);
    assert!(app.color_dialog_open());

    app_frame(
        &ctx,
        &mut app,
        vec![moved(10.0, 50.0), button(10.0, 50.0, true), moved(20.0, 60.0)],
    );
    app_frame(&ctx, &mut app, vec![moved(40.0, 80.0)]);

    assert!(!app.whiteboard().is_drawing());
    assert!(app.whiteboard().canvas().is_empty());
}

#[test]
fn test_opening_dialog_ends_active_stroke() {
    let ctx = egui::Context::default();
    let mut app = WhiteboardApp::default();

    app_frame(
        &ctx,
        &mut app,
        vec![moved(10.0, 50.0), button(10.0, 50.0, true), moved(20.0, 60.0)],
    );
    assert!(app.whiteboard().is_drawing());
    assert_eq!(app.whiteboard().canvas().len(), 1);

    app.apply_toolbar_action(ToolbarAction::OpenColorDialog);
    assert!(!app.whiteboard().is_drawing());

    app_frame(&ctx, &mut app, vec![moved(50.0, 90.0)]);
    assert_eq!(app.whiteboard().canvas().len(), 1);
}

use egui::Rect;

use crate::color_dialog::ColorDialog;
use crate::input::{InputHandler, route_event};
use crate::panels::{ToolbarAction, central_panel, toolbar};
use crate::whiteboard::Whiteboard;

pub struct WhiteboardApp {
    whiteboard: Whiteboard,
    input_handler: InputHandler,
    color_dialog: ColorDialog,
}

impl Default for WhiteboardApp {
    fn default() -> Self {
        Self {
            whiteboard: Whiteboard::new(),
            input_handler: InputHandler::new(Rect::NOTHING),
            color_dialog: ColorDialog::new(),
        }
    }
}

impl WhiteboardApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        // Nothing is restored: every launch gets an empty canvas and the default pen.
        let app = Self::default();
        log::info!("Starting whiteboard with pen {:?}", app.whiteboard.pen());
        app
    }

    pub fn whiteboard(&self) -> &Whiteboard {
        &self.whiteboard
    }

    pub fn whiteboard_mut(&mut self) -> &mut Whiteboard {
        &mut self.whiteboard
    }

    pub fn color_dialog_open(&self) -> bool {
        self.color_dialog.is_open()
    }

    pub fn apply_toolbar_action(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::OpenColorDialog => {
                // a stroke cannot continue under a modal dialog
                self.whiteboard.end_stroke();
                self.color_dialog.open(self.whiteboard.color());
            }
            ToolbarAction::ClearCanvas => self.whiteboard.clear(),
        }
    }

    /// Route this frame's pointer input to the whiteboard
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        self.input_handler.set_canvas_rect(canvas_rect);
        let events = self.input_handler.process_input(ctx);

        if self.color_dialog.is_open() {
            return;
        }
        for event in &events {
            route_event(&mut self.whiteboard, canvas_rect, event);
        }
    }
}

impl eframe::App for WhiteboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        toolbar(self, ctx);

        let outcome = self.color_dialog.show(ctx);
        if outcome.is_finished() {
            log::debug!("Color dialog closed: {:?}", outcome);
            self.whiteboard.set_color(outcome.selection());
        }

        central_panel(self, ctx);
    }
}

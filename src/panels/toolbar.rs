use crate::WhiteboardApp;
use crate::state::{MAX_LINE_WIDTH, MIN_LINE_WIDTH};

/// Toolbar buttons that need the app to do something beyond a field update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    OpenColorDialog,
    ClearCanvas,
}

pub fn toolbar(app: &mut WhiteboardApp, ctx: &egui::Context) {
    let mut actions = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 10.0;

            if ui.button("Change Color").clicked() {
                actions.push(ToolbarAction::OpenColorDialog);
            }
            if ui.button("Clear Canvas").clicked() {
                actions.push(ToolbarAction::ClearCanvas);
            }

            ui.label("Line Width:");
            let mut width = app.whiteboard().line_width() as i32;
            let range = MIN_LINE_WIDTH as i32..=MAX_LINE_WIDTH as i32;
            if ui.add(egui::Slider::new(&mut width, range).integer()).changed() {
                app.whiteboard_mut().set_line_width(width);
            }

            // current pen swatch
            let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 2.0, app.whiteboard().color());
        });
    });

    for action in actions {
        app.apply_toolbar_action(action);
    }
}

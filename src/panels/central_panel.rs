use crate::WhiteboardApp;

pub fn central_panel(app: &mut WhiteboardApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let size = ui.available_size();
            let (response, painter) = ui.allocate_painter(size, egui::Sense::drag());
            let canvas_rect = response.rect;

            app.handle_input(ctx, canvas_rect);

            app.whiteboard().canvas().paint(&painter, canvas_rect);

            if response.hovered() && !app.color_dialog_open() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }
        });
}

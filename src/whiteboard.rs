use egui::{Color32, Pos2};

use crate::canvas::Canvas;
use crate::state::{DrawingState, PenSettings, clamp_line_width};
use crate::stroke::Segment;

/// Owns the canvas and the drawing state, and reacts to pointer and toolbar events.
#[derive(Debug, Default)]
pub struct Whiteboard {
    canvas: Canvas,
    state: DrawingState,
}

impl Whiteboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer pressed on the canvas
    pub fn begin_stroke(&mut self, point: Pos2) {
        log::debug!("Stroke started at {:?}", point);
        self.state.is_drawing = true;
        self.state.last_point = Some(point);
    }

    /// Pointer dragged to `point`. Emits a segment from the cached point when a stroke is active.
    pub fn extend_stroke(&mut self, point: Pos2) -> Option<Segment> {
        if !self.state.is_drawing {
            return None;
        }
        let from = self.state.last_point?;
        if from == point {
            return None;
        }
        self.state.last_point = Some(point);
        let pen = self.state.pen;
        let segment = Segment::new(from, point, pen.color, pen.line_width as f32);
        self.canvas.push(segment);
        Some(segment)
    }

    /// Pointer released
    pub fn end_stroke(&mut self) {
        if self.state.is_drawing {
            log::debug!("Stroke ended, canvas holds {} segments", self.canvas.len());
        }
        self.state.is_drawing = false;
        self.state.last_point = None;
    }

    /// Apply the color dialog's result. `None` means the dialog was cancelled.
    pub fn set_color(&mut self, color: Option<Color32>) {
        if let Some(color) = color {
            log::info!("Pen color changed to {:?}", color);
            self.state.pen.color = color;
        }
    }

    pub fn set_line_width(&mut self, width: i32) {
        self.state.pen.line_width = clamp_line_width(width);
    }

    pub fn clear(&mut self) {
        log::info!("Clearing canvas ({} segments)", self.canvas.len());
        self.canvas.clear();
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn pen(&self) -> PenSettings {
        self.state.pen
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing
    }

    pub fn color(&self) -> Color32 {
        self.state.pen.color
    }

    pub fn line_width(&self) -> u8 {
        self.state.pen.line_width
    }
}

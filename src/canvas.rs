use egui::{Color32, Painter, Rect, Shape};

use crate::stroke::Segment;

pub const BACKGROUND: Color32 = Color32::WHITE;

/// Everything that has been drawn since the last clear.
///
/// egui repaints from scratch each frame, so the canvas keeps every segment
/// it was handed and paints them again in order.
#[derive(Debug, Default)]
pub struct Canvas {
    segments: Vec<Segment>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Drop all rendered content
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Shapes for every segment, positioned for a canvas whose top-left is `rect.min`
    pub fn shapes(&self, rect: Rect) -> Vec<Shape> {
        let origin = rect.min.to_vec2();
        self.segments
            .iter()
            .flat_map(|segment| segment.shapes(origin))
            .collect()
    }

    pub fn paint(&self, painter: &Painter, rect: Rect) {
        painter.rect_filled(rect, 0.0, BACKGROUND);
        painter.extend(self.shapes(rect));
    }
}

use egui::{Color32, Pos2, Shape, Stroke, Vec2};

/// One straight piece of a stroke, from the previous pointer sample to the current one.
///
/// Points are canvas-local: (0, 0) is the top-left corner of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    from: Pos2,
    to: Pos2,
    color: Color32,
    width: f32,
}

impl Segment {
    pub fn new(from: Pos2, to: Pos2, color: Color32, width: f32) -> Self {
        Self {
            from,
            to,
            color,
            width,
        }
    }

    pub fn from(&self) -> Pos2 {
        self.from
    }

    pub fn to(&self) -> Pos2 {
        self.to
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Build the shapes for this segment with the canvas origin at `origin`.
    ///
    /// The line itself gets a filled circle at each end so that consecutive
    /// segments meet without visible notches.
    pub fn shapes(&self, origin: Vec2) -> [Shape; 3] {
        let from = self.from + origin;
        let to = self.to + origin;
        let radius = self.width * 0.5;

        [
            Shape::line_segment([from, to], Stroke::new(self.width, self.color)),
            Shape::circle_filled(from, radius, self.color),
            Shape::circle_filled(to, radius, self.color),
        ]
    }
}

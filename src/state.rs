use egui::{Color32, Pos2};

pub const MIN_LINE_WIDTH: u8 = 1;
pub const MAX_LINE_WIDTH: u8 = 10;
pub const DEFAULT_LINE_WIDTH: u8 = 2;

/// Clamp a slider value into the supported pen widths
pub fn clamp_line_width(width: i32) -> u8 {
    width.clamp(MIN_LINE_WIDTH as i32, MAX_LINE_WIDTH as i32) as u8
}

/// Pen color and width used for the next segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenSettings {
    pub color: Color32,
    pub line_width: u8,
}

impl Default for PenSettings {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

/// Mutable drawing state consulted by the pointer handlers
#[derive(Debug, Clone, Default)]
pub struct DrawingState {
    pub is_drawing: bool,
    pub pen: PenSettings,
    pub last_point: Option<Pos2>,
}

use thiserror::Error;

/// Errors surfaced by the whiteboard outside of the eframe event loop
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WhiteboardError {
    /// Hex color text had the wrong number of digits
    #[error("Invalid color length: expected #rgb or #rrggbb, got {0:?}")]
    InvalidColorLength(String),

    /// Hex color text contained a non-hex character
    #[error("Invalid hex digit in color {0:?}")]
    InvalidColorDigit(String),
}

pub type WhiteboardResult<T> = Result<T, WhiteboardError>;

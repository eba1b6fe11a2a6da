#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod color_dialog;
pub mod error;
pub mod input;
pub mod panels;
pub mod state;
pub mod stroke;
pub mod whiteboard;

pub use app::WhiteboardApp;
pub use canvas::Canvas;
pub use color_dialog::{ColorDialog, DialogOutcome};
pub use error::{WhiteboardError, WhiteboardResult};
pub use input::{InputEvent, InputHandler, InputLocation};
pub use state::{DrawingState, PenSettings};
pub use stroke::Segment;
pub use whiteboard::Whiteboard;

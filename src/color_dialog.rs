use egui::Color32;
use egui::color_picker::{self, Alpha};

use crate::error::{WhiteboardError, WhiteboardResult};

/// Parse `#rrggbb`, `rrggbb` or `#rgb` into an opaque color
pub fn parse_hex_color(text: &str) -> WhiteboardResult<Color32> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(WhiteboardError::InvalidColorDigit(text.to_owned()));
    }

    let channel = |s: &str| {
        u8::from_str_radix(s, 16).map_err(|_| WhiteboardError::InvalidColorDigit(text.to_owned()))
    };

    match digits.len() {
        6 => Ok(Color32::from_rgb(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        3 => {
            let short = |s: &str| channel(s).map(|v| v * 17);
            Ok(Color32::from_rgb(
                short(&digits[0..1])?,
                short(&digits[1..2])?,
                short(&digits[2..3])?,
            ))
        }
        _ => Err(WhiteboardError::InvalidColorLength(text.to_owned())),
    }
}

pub fn format_hex_color(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// What the dialog produced this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Still open, or never opened
    Pending,
    Chosen(Color32),
    Cancelled,
}

impl DialogOutcome {
    /// The selection, if any. `Pending` and `Cancelled` both yield `None`.
    pub fn selection(self) -> Option<Color32> {
        match self {
            Self::Chosen(color) => Some(color),
            _ => None,
        }
    }

    pub fn is_finished(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Modal color chooser with a picker, a hex field and OK / Cancel.
#[derive(Debug, Default)]
pub struct ColorDialog {
    open: bool,
    candidate: Color32,
    hex_text: String,
    hex_error: Option<WhiteboardError>,
}

impl ColorDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, initial: Color32) {
        self.open = true;
        self.set_candidate(initial);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn candidate(&self) -> Color32 {
        self.candidate
    }

    pub fn hex_error(&self) -> Option<&WhiteboardError> {
        self.hex_error.as_ref()
    }

    fn set_candidate(&mut self, color: Color32) {
        self.candidate = color;
        self.hex_text = format_hex_color(color);
        self.hex_error = None;
    }

    /// Apply typed hex text; bad text leaves the candidate alone.
    pub fn edit_hex(&mut self, text: &str) {
        self.hex_text = text.to_owned();
        match parse_hex_color(text) {
            Ok(color) => {
                self.candidate = color;
                self.hex_error = None;
            }
            Err(err) => self.hex_error = Some(err),
        }
    }

    pub fn confirm(&mut self) -> DialogOutcome {
        if !self.open {
            return DialogOutcome::Pending;
        }
        self.open = false;
        DialogOutcome::Chosen(self.candidate)
    }

    pub fn cancel(&mut self) -> DialogOutcome {
        if !self.open {
            return DialogOutcome::Pending;
        }
        self.open = false;
        DialogOutcome::Cancelled
    }

    /// Draw the dialog if it is open and report what the user did.
    pub fn show(&mut self, ctx: &egui::Context) -> DialogOutcome {
        if !self.open {
            return DialogOutcome::Pending;
        }

        let mut window_open = true;
        let mut outcome = DialogOutcome::Pending;

        egui::Window::new("Choose Color")
            .open(&mut window_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                let before = self.candidate;
                color_picker::color_picker_color32(ui, &mut self.candidate, Alpha::Opaque);
                if self.candidate != before {
                    let picked = self.candidate;
                    self.set_candidate(picked);
                }

                ui.horizontal(|ui| {
                    ui.label("Hex:");
                    let mut text = self.hex_text.clone();
                    if ui.text_edit_singleline(&mut text).changed() {
                        self.edit_hex(&text);
                    }
                });
                if let Some(err) = &self.hex_error {
                    ui.colored_label(Color32::RED, err.to_string());
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        outcome = self.confirm();
                    }
                    if ui.button("Cancel").clicked() {
                        outcome = self.cancel();
                    }
                });
            });

        if !window_open && self.open {
            outcome = self.cancel();
        }
        outcome
    }
}

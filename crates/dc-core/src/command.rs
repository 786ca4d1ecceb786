//! Recorded drawing instructions.
//!
//! Each variant serializes as a flat object tagged by `type`, e.g.
//! `{"type":"fill_rect","x":0.0,"y":0.0,"w":10.0,"h":4.0}`, which is the
//! shape the JavaScript render loop replays.

use serde::{Deserialize, Serialize};

/// A single drawing instruction awaiting replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawCommand {
    FillStyle { style: String },
    StrokeStyle { style: String },
    FillRect { x: f64, y: f64, w: f64, h: f64 },
    SetFont { font: String },
    FillText { x: f64, y: f64, text: String },
    DrawCircle { x: f64, y: f64, r: f64 },
    FillCircle { x: f64, y: f64, r: f64 },
}

impl DrawCommand {
    /// The `type` tag this command serializes with.
    pub fn tag(&self) -> &'static str {
        match self {
            DrawCommand::FillStyle { .. } => "fill_style",
            DrawCommand::StrokeStyle { .. } => "stroke_style",
            DrawCommand::FillRect { .. } => "fill_rect",
            DrawCommand::SetFont { .. } => "set_font",
            DrawCommand::FillText { .. } => "fill_text",
            DrawCommand::DrawCircle { .. } => "draw_circle",
            DrawCommand::FillCircle { .. } => "fill_circle",
        }
    }
}

/// Format a CSS color as `rgba(r,g,b,a)` with no whitespace.
///
/// Numbers print the way JavaScript stringifies them for ordinary values:
/// integral values lose the fraction and negative zero prints as `0`.
pub fn rgba_style(r: f64, g: f64, b: f64, a: f64) -> String {
    // -0.0 + 0.0 == +0.0
    format!("rgba({},{},{},{})", r + 0.0, g + 0.0, b + 0.0, a + 0.0)
}

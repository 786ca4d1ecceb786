//! Draw-command recorder.
//!
//! [`DrawContext`] owns one session's command sequence and user-data handle.
//! Every append is all-or-nothing: arguments are checked before the command
//! is built, so a rejected call leaves the sequence untouched.

use crate::color::Color;
use crate::command::{DrawCommand, rgba_style};
use crate::error::{DcError, Result};
use crate::memory::{StrHandle, StringDecoder};

/// Read-only view of the canvas the commands will be replayed onto.
pub trait CanvasSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}

/// A surface with fixed dimensions, for headless use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedSurface {
    pub width: u32,
    pub height: u32,
}

impl CanvasSurface for FixedSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

/// Opaque pointer-sized value owned by the embedding module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserData(pub usize);

/// Recording context for one canvas session.
pub struct DrawContext<S> {
    surface: S,
    commands: Vec<DrawCommand>,
    user_data: Option<UserData>,
}

impl<S: CanvasSurface> DrawContext<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            commands: Vec::new(),
            user_data: None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    // ─── User data ──────────────────────────────────────────────────────

    /// Store the user-data handle, replacing any previous one.
    pub fn set_user_data(&mut self, data: UserData) {
        self.user_data = Some(data);
    }

    pub fn user_data(&self) -> Option<UserData> {
        self.user_data
    }

    // ─── Canvas queries ─────────────────────────────────────────────────

    pub fn canvas_width(&self) -> u32 {
        self.surface.width()
    }

    pub fn canvas_height(&self) -> u32 {
        self.surface.height()
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        (self.canvas_width(), self.canvas_height())
    }

    // ─── Styles ─────────────────────────────────────────────────────────

    pub fn fill_style(&mut self, r: f64, g: f64, b: f64, a: f64) -> Result<()> {
        let style = checked_style(r, g, b, a)?;
        self.push(DrawCommand::FillStyle { style });
        Ok(())
    }

    pub fn stroke_style(&mut self, r: f64, g: f64, b: f64, a: f64) -> Result<()> {
        let style = checked_style(r, g, b, a)?;
        self.push(DrawCommand::StrokeStyle { style });
        Ok(())
    }

    /// Set the fill style from a normalized color: byte-scaled RGB, raw alpha.
    pub fn fill_color(&mut self, color: Color) -> Result<()> {
        let (r, g, b, _) = color.to_byte_tuple();
        self.fill_style(r.into(), g.into(), b.into(), color.a.into())
    }

    /// Set the stroke style from a normalized color: byte-scaled RGB, raw alpha.
    pub fn stroke_color(&mut self, color: Color) -> Result<()> {
        let (r, g, b, _) = color.to_byte_tuple();
        self.stroke_style(r.into(), g.into(), b.into(), color.a.into())
    }

    // ─── Shapes ─────────────────────────────────────────────────────────

    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<()> {
        let cmd = DrawCommand::FillRect {
            x: finite("x", x)?,
            y: finite("y", y)?,
            w: finite("w", w)?,
            h: finite("h", h)?,
        };
        self.push(cmd);
        Ok(())
    }

    /// Outline a circle. Negative radii record as zero.
    pub fn draw_circle(&mut self, x: f64, y: f64, r: f64) -> Result<()> {
        let cmd = DrawCommand::DrawCircle {
            x: finite("x", x)?,
            y: finite("y", y)?,
            r: clamp_radius(finite("r", r)?),
        };
        self.push(cmd);
        Ok(())
    }

    /// Fill a circle. Negative radii record as zero.
    pub fn fill_circle(&mut self, x: f64, y: f64, r: f64) -> Result<()> {
        let cmd = DrawCommand::FillCircle {
            x: finite("x", x)?,
            y: finite("y", y)?,
            r: clamp_radius(finite("r", r)?),
        };
        self.push(cmd);
        Ok(())
    }

    // ─── Text ───────────────────────────────────────────────────────────

    pub fn set_font(&mut self, font: &str) {
        self.push(DrawCommand::SetFont {
            font: font.to_string(),
        });
    }

    /// Set the font from a string in the caller's memory.
    pub fn set_font_at(&mut self, strings: &impl StringDecoder, font: StrHandle) -> Result<()> {
        let font = strings.decode(font)?;
        self.push(DrawCommand::SetFont { font });
        Ok(())
    }

    pub fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<()> {
        let cmd = DrawCommand::FillText {
            x: finite("x", x)?,
            y: finite("y", y)?,
            text: text.to_string(),
        };
        self.push(cmd);
        Ok(())
    }

    /// Fill text read from the caller's memory.
    pub fn fill_text_at(
        &mut self,
        strings: &impl StringDecoder,
        text: StrHandle,
        x: f64,
        y: f64,
    ) -> Result<()> {
        let (x, y) = (finite("x", x)?, finite("y", y)?);
        let text = strings.decode(text)?;
        self.push(DrawCommand::FillText { x, y, text });
        Ok(())
    }

    // ─── Consumption ────────────────────────────────────────────────────

    /// Commands recorded since the last drain, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Hand every recorded command to the renderer, leaving the sequence empty.
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    fn push(&mut self, cmd: DrawCommand) {
        log::trace!("DC {} (#{})", cmd.tag(), self.commands.len());
        self.commands.push(cmd);
    }
}

fn finite(name: &str, v: f64) -> Result<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(DcError::invalid(format!("{name} must be finite, got {v}")))
    }
}

fn checked_style(r: f64, g: f64, b: f64, a: f64) -> Result<String> {
    Ok(rgba_style(
        finite("r", r)?,
        finite("g", g)?,
        finite("b", b)?,
        finite("a", a)?,
    ))
}

fn clamp_radius(r: f64) -> f64 {
    if r > 0.0 { r } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::LinearMemory;
    use pretty_assertions::assert_eq;

    fn ctx() -> DrawContext<FixedSurface> {
        DrawContext::new(FixedSurface {
            width: 640,
            height: 480,
        })
    }

    #[test]
    fn reports_canvas_size() {
        let c = ctx();
        assert_eq!(c.canvas_width(), 640);
        assert_eq!(c.canvas_height(), 480);
        assert_eq!(c.canvas_size(), (640, 480));
    }

    #[test]
    fn user_data_last_write_wins() {
        let mut c = ctx();
        assert_eq!(c.user_data(), None);
        c.set_user_data(UserData(0x1000));
        c.set_user_data(UserData(0x2000));
        assert_eq!(c.user_data(), Some(UserData(0x2000)));
    }

    #[test]
    fn fill_and_stroke_styles() {
        let mut c = ctx();
        c.fill_style(255.0, 0.0, 10.0, 0.5).unwrap();
        c.stroke_style(1.0, 2.0, 3.0, 1.0).unwrap();
        assert_eq!(
            c.commands(),
            &[
                DrawCommand::FillStyle {
                    style: "rgba(255,0,10,0.5)".into()
                },
                DrawCommand::StrokeStyle {
                    style: "rgba(1,2,3,1)".into()
                },
            ]
        );
    }

    #[test]
    fn color_helpers_scale_rgb_but_not_alpha() {
        let mut c = ctx();
        c.fill_color(Color::rgba(1.0, 0.5, 0.0, 0.5)).unwrap();
        c.stroke_color(Color::white()).unwrap();
        assert_eq!(
            c.commands(),
            &[
                DrawCommand::FillStyle {
                    style: "rgba(255,127,0,0.5)".into()
                },
                DrawCommand::StrokeStyle {
                    style: "rgba(255,255,255,1)".into()
                },
            ]
        );
    }

    #[test]
    fn negative_radius_clamps_to_zero() {
        let mut c = ctx();
        c.draw_circle(1.0, 2.0, -5.0).unwrap();
        c.fill_circle(1.0, 2.0, -0.0).unwrap();
        c.fill_circle(1.0, 2.0, 7.5).unwrap();
        let radii: Vec<f64> = c
            .commands()
            .iter()
            .map(|cmd| match cmd {
                DrawCommand::DrawCircle { r, .. } | DrawCommand::FillCircle { r, .. } => *r,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(radii, vec![0.0, 0.0, 7.5]);
        assert!(radii[1].is_sign_positive());
    }

    #[test]
    fn non_finite_input_appends_nothing() {
        let mut c = ctx();
        assert!(matches!(
            c.fill_rect(0.0, f64::NAN, 1.0, 1.0),
            Err(DcError::InvalidArgument(_))
        ));
        assert!(c.fill_style(0.0, 0.0, f64::INFINITY, 1.0).is_err());
        assert!(c.fill_circle(0.0, 0.0, f64::NAN).is_err());
        assert!(c.fill_text("x", f64::NEG_INFINITY, 0.0).is_err());
        assert!(c.is_empty());
    }

    #[test]
    fn decodes_font_and_text_from_memory() {
        let mem = LinearMemory::new(b"12px monospace\0score: 10\0");
        let mut c = ctx();
        c.set_font_at(&mem, StrHandle::nul_terminated(0)).unwrap();
        c.fill_text_at(&mem, StrHandle::nul_terminated(15), 4.0, 20.0)
            .unwrap();
        assert_eq!(
            c.commands(),
            &[
                DrawCommand::SetFont {
                    font: "12px monospace".into()
                },
                DrawCommand::FillText {
                    x: 4.0,
                    y: 20.0,
                    text: "score: 10".into()
                },
            ]
        );
    }

    #[test]
    fn bad_string_handle_appends_nothing() {
        let mem = LinearMemory::new(b"abc");
        let mut c = ctx();
        assert!(c.set_font_at(&mem, StrHandle::nul_terminated(0)).is_err());
        assert!(
            c.fill_text_at(&mem, StrHandle::with_len(2, 9), 0.0, 0.0)
                .is_err()
        );
        assert_eq!(c.len(), 0);
    }

    #[test]
    fn drain_empties_sequence() {
        let mut c = ctx();
        c.fill_rect(0.0, 0.0, 1.0, 1.0).unwrap();
        c.set_font("serif");
        let drained = c.drain();
        assert_eq!(drained.len(), 2);
        assert!(c.is_empty());
        c.fill_circle(0.0, 0.0, 1.0).unwrap();
        assert_eq!(c.len(), 1);
    }
}

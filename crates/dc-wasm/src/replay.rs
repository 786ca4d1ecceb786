//! Canvas2D replay of recorded draw commands.
//!
//! Issues the native `CanvasRenderingContext2d` call for each command in
//! order. Styles and font persist on the context between batches.

use dc_core::{DrawCommand, Result};
use std::f64::consts::TAU;
use web_sys::CanvasRenderingContext2d;

use crate::host::host_err;

/// Replay a drained batch onto a 2D context.
pub fn replay(ctx: &CanvasRenderingContext2d, commands: &[DrawCommand]) -> Result<()> {
    for cmd in commands {
        replay_one(ctx, cmd)?;
    }
    Ok(())
}

fn replay_one(ctx: &CanvasRenderingContext2d, cmd: &DrawCommand) -> Result<()> {
    match cmd {
        DrawCommand::FillStyle { style } => ctx.set_fill_style_str(style),
        DrawCommand::StrokeStyle { style } => ctx.set_stroke_style_str(style),
        DrawCommand::FillRect { x, y, w, h } => ctx.fill_rect(*x, *y, *w, *h),
        DrawCommand::SetFont { font } => ctx.set_font(font),
        DrawCommand::FillText { x, y, text } => ctx.fill_text(text, *x, *y).map_err(host_err)?,
        DrawCommand::DrawCircle { x, y, r } => {
            circle_path(ctx, *x, *y, *r)?;
            ctx.stroke();
        }
        DrawCommand::FillCircle { x, y, r } => {
            circle_path(ctx, *x, *y, *r)?;
            ctx.fill();
        }
    }
    Ok(())
}

fn circle_path(ctx: &CanvasRenderingContext2d, x: f64, y: f64, r: f64) -> Result<()> {
    ctx.begin_path();
    ctx.arc(x, y, r, 0.0, TAU).map_err(host_err)
}

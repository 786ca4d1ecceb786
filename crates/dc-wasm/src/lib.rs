//! WASM bridge for the draw-command recorder and canvas export.
//!
//! Compiled via `wasm-pack build --target web`. A compiled module records
//! through a [`DcSession`]; the page's render loop drains the session each
//! frame, either as JSON or by replaying straight onto a 2D context.

mod host;
mod replay;

pub use host::{BrowserCanvas, BrowserExportHost};
pub use replay::replay;

use dc_core::{DcError, DrawContext, ExportConfig, SaveOutcome, UserData};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// One recording session bound to a canvas element.
#[wasm_bindgen]
pub struct DcSession {
    ctx: DrawContext<BrowserCanvas>,
}

#[wasm_bindgen]
impl DcSession {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        console_setup();
        Self {
            ctx: DrawContext::new(BrowserCanvas(canvas)),
        }
    }

    pub fn set_userdata(&mut self, ptr: usize) {
        self.ctx.set_user_data(UserData(ptr));
    }

    /// Last user-data handle set, or 0 if none.
    pub fn userdata(&self) -> usize {
        self.ctx.user_data().map_or(0, |UserData(p)| p)
    }

    pub fn get_canvas_width(&self) -> u32 {
        self.ctx.canvas_width()
    }

    pub fn get_canvas_height(&self) -> u32 {
        self.ctx.canvas_height()
    }

    pub fn fill_color(&mut self, r: f64, g: f64, b: f64, a: f64) -> Result<(), JsValue> {
        self.ctx.fill_style(r, g, b, a).map_err(to_js)
    }

    pub fn stroke_color(&mut self, r: f64, g: f64, b: f64, a: f64) -> Result<(), JsValue> {
        self.ctx.stroke_style(r, g, b, a).map_err(to_js)
    }

    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), JsValue> {
        self.ctx.fill_rect(x, y, w, h).map_err(to_js)
    }

    pub fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    pub fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), JsValue> {
        self.ctx.fill_text(text, x, y).map_err(to_js)
    }

    pub fn draw_circle(&mut self, x: f64, y: f64, r: f64) -> Result<(), JsValue> {
        self.ctx.draw_circle(x, y, r).map_err(to_js)
    }

    pub fn fill_circle(&mut self, x: f64, y: f64, r: f64) -> Result<(), JsValue> {
        self.ctx.fill_circle(x, y, r).map_err(to_js)
    }

    /// Number of commands waiting to be drained.
    pub fn pending(&self) -> usize {
        self.ctx.len()
    }

    /// Drain every pending command as a JSON array of `{type, ...}` records.
    pub fn drain_json(&mut self) -> Result<String, JsValue> {
        let batch = self.ctx.drain();
        serde_json::to_string(&batch)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")).into())
    }

    /// Drain every pending command and replay it onto `target`.
    pub fn render(&mut self, target: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let batch = self.ctx.drain();
        replay::replay(target, &batch).map_err(to_js)
    }
}

/// Save the canvas with DOM id `target` as `key.png`.
///
/// Returns `"downloaded"` or `"navigated"` depending on which path the
/// browser supported. Throws if no element has that id.
#[wasm_bindgen]
pub fn save_canvas(target: &str) -> Result<String, JsValue> {
    console_setup();
    let host = BrowserExportHost::current().map_err(to_js)?;
    let outcome = dc_core::save_canvas(&host, target, &ExportConfig::default()).map_err(to_js)?;
    Ok(outcome_name(outcome).to_string())
}

fn outcome_name(outcome: SaveOutcome) -> &'static str {
    match outcome {
        SaveOutcome::Downloaded => "downloaded",
        SaveOutcome::Navigated => "navigated",
    }
}

/// Error name the JS side can match on.
fn error_name(e: &DcError) -> &'static str {
    match e {
        DcError::ElementNotFound(_) => "ElementNotFound",
        DcError::InvalidArgument(_) => "InvalidArgument",
        DcError::Host(_) => "HostError",
    }
}

fn to_js(e: DcError) -> JsValue {
    log::warn!("{e}");
    let err = js_sys::Error::new(&e.to_string());
    err.set_name(error_name(&e));
    err.into()
}

// ─── Console logging + panic hook ───────────────────────────────────────

fn console_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            let _ = console_log::init_with_level(log::Level::Debug);
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("DC WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn outcome_names() {
        assert_eq!(outcome_name(SaveOutcome::Downloaded), "downloaded");
        assert_eq!(outcome_name(SaveOutcome::Navigated), "navigated");
    }

    #[test]
    fn error_names_match_kinds() {
        assert_eq!(
            error_name(&DcError::ElementNotFound("c".into())),
            "ElementNotFound"
        );
        assert_eq!(
            error_name(&DcError::InvalidArgument("x".into())),
            "InvalidArgument"
        );
        assert_eq!(error_name(&DcError::Host("boom".into())), "HostError");
    }
}

//! Browser implementations of the core capability traits.

use dc_core::{CanvasSurface, DcError, ExportHost, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlAnchorElement, HtmlCanvasElement, MouseEvent, MouseEventInit, Window};

const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Convert a thrown JS value into a host error.
pub(crate) fn host_err(e: JsValue) -> DcError {
    DcError::Host(e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

/// The canvas element a session records for.
pub struct BrowserCanvas(pub HtmlCanvasElement);

impl CanvasSurface for BrowserCanvas {
    fn width(&self) -> u32 {
        self.0.width()
    }

    fn height(&self) -> u32 {
        self.0.height()
    }
}

/// DOM-backed export host for the current window.
pub struct BrowserExportHost {
    window: Window,
    document: Document,
}

impl BrowserExportHost {
    pub fn current() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| DcError::Host("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| DcError::Host("no document".into()))?;
        Ok(Self { window, document })
    }

    fn anchor(&self) -> Result<HtmlAnchorElement> {
        self.document
            .create_element_ns(Some(XHTML_NS), "a")
            .map_err(host_err)?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|el| DcError::Host(format!("created {} is not an anchor", el.tag_name())))
    }
}

impl ExportHost for BrowserExportHost {
    fn canvas_data_url(&self, element_id: &str, mime: &str) -> Result<Option<String>> {
        let Some(element) = self.document.get_element_by_id(element_id) else {
            return Ok(None);
        };
        let canvas = element.dyn_into::<HtmlCanvasElement>().map_err(|el| {
            DcError::InvalidArgument(format!("#{element_id} is a <{}>, not a canvas", el.tag_name()))
        })?;
        canvas.to_data_url_with_type(mime).map(Some).map_err(host_err)
    }

    fn supports_download(&self) -> bool {
        match self.anchor() {
            Ok(a) => js_sys::Reflect::has(&a, &JsValue::from_str("download")).unwrap_or(false),
            Err(_) => false,
        }
    }

    fn trigger_download(&self, data_url: &str, filename: &str) -> Result<()> {
        let anchor = self.anchor()?;
        anchor.set_download(filename);
        anchor.set_href(data_url);

        let init = MouseEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(false);
        let click =
            MouseEvent::new_with_mouse_event_init_dict("click", &init).map_err(host_err)?;
        anchor.dispatch_event(&click).map_err(host_err)?;
        Ok(())
    }

    fn navigate(&self, url: &str) -> Result<()> {
        self.window.location().set_href(url).map_err(host_err)
    }
}

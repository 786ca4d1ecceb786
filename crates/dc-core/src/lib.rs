//! Host-agnostic core of the draw-command bridge.
//!
//! A compiled module records drawing instructions into a [`DrawContext`];
//! an external render loop drains them each frame. The [`export`] module
//! saves a canvas as a PNG through whatever host capabilities are supplied.

pub mod color;
pub mod command;
pub mod error;
pub mod export;
pub mod memory;
pub mod recorder;

pub use color::Color;
pub use command::{DrawCommand, rgba_style};
pub use error::{DcError, Result};
pub use export::{ExportConfig, ExportHost, SaveOutcome, save_canvas};
pub use memory::{LinearMemory, StrHandle, StringDecoder};
pub use recorder::{CanvasSurface, DrawContext, FixedSurface, UserData};

//! Canvas export: serialize a canvas to PNG and hand it to the user.
//!
//! The DOM work lives behind [`ExportHost`] so the decision between a
//! native download and the navigation fallback stays host-agnostic.

use crate::error::{DcError, Result};

/// Export settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Suggested file name for the download.
    pub filename: String,
    /// MIME type requested from the canvas serializer.
    pub mime: String,
    /// MIME type substituted into the data URL on the navigation fallback.
    pub fallback_mime: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: "key.png".to_string(),
            mime: "image/png".to_string(),
            fallback_mime: "application/octet-stream".to_string(),
        }
    }
}

/// How a save was delivered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A download was triggered through an anchor click.
    Downloaded,
    /// The page navigated to the rewritten data URL.
    Navigated,
}

/// Host capabilities the export path relies on.
pub trait ExportHost {
    /// Serialize the canvas with the given element id to a data URL.
    /// Returns `Ok(None)` when no such element exists.
    fn canvas_data_url(&self, element_id: &str, mime: &str) -> Result<Option<String>>;

    /// Whether anchors support the `download` attribute.
    fn supports_download(&self) -> bool;

    fn trigger_download(&self, data_url: &str, filename: &str) -> Result<()>;

    /// Replace the current page location.
    fn navigate(&self, url: &str) -> Result<()>;
}

/// Save the canvas `element_id` as a PNG.
pub fn save_canvas(
    host: &impl ExportHost,
    element_id: &str,
    config: &ExportConfig,
) -> Result<SaveOutcome> {
    let data_url = host
        .canvas_data_url(element_id, &config.mime)?
        .ok_or_else(|| DcError::ElementNotFound(element_id.to_string()))?;

    if host.supports_download() {
        log::debug!("EXPORT #{element_id} -> download {}", config.filename);
        host.trigger_download(&data_url, &config.filename)?;
        Ok(SaveOutcome::Downloaded)
    } else {
        log::warn!("EXPORT #{element_id}: download attribute unsupported, navigating");
        let url = data_url.replacen(&config.mime, &config.fallback_mime, 1);
        host.navigate(&url)?;
        Ok(SaveOutcome::Navigated)
    }
}

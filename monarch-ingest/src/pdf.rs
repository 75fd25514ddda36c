//! Page text extraction backends.

use std::path::Path;

use monarch_core::{Result, StatementError};
use tracing::{debug, info};

use crate::types::PageText;

/// Source of per-page statement text.
pub trait PageTextSource {
    fn read_pages(&self, path: &Path) -> Result<PageText>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Reads page text with `pdf-extract`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractSource;

impl PageTextSource for PdfExtractSource {
    fn read_pages(&self, path: &Path) -> Result<PageText> {
        let bytes = std::fs::read(path)?;
        debug!(bytes = bytes.len(), path = %path.display(), "read PDF");

        let raw = pdf_extract::extract_text_from_mem_by_pages(&bytes)
            .map_err(|e| StatementError::PdfExtract(e.to_string()))?;

        info!(pages = raw.len(), "extracted page text");
        Ok(PageText::from_raw(raw))
    }

    fn backend_name(&self) -> &str {
        "pdf-extract"
    }
}

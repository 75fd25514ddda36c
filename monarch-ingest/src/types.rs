use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// Normalized text of a statement, one entry per page in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    pages: Vec<String>,
}

impl PageText {
    /// Normalize raw per-page text as produced by the PDF text extractor.
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            pages: raw.into_iter().map(|p| normalize(p.as_ref())).collect(),
        }
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// All pages joined by newlines, normalized again as one document.
    pub fn document_text(&self) -> String {
        normalize(&self.pages.join("\n"))
    }
}

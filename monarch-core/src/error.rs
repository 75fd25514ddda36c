use std::path::PathBuf;

/// Failures raised while interpreting statement text or writing its outputs.
///
/// Every variant is fatal for the extraction call that produced it.
#[derive(Debug, thiserror::Error)]
pub enum StatementError {
    #[error("could not find {section} section")]
    SectionNotFound { section: &'static str },

    #[error("bad date {input:?}: {reason}")]
    DateParse { input: String, reason: String },

    #[error("cannot parse amount: {input:?}")]
    AmountParse { input: String },

    #[error("statement not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("PDF text extraction failed: {0}")]
    PdfExtract(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, StatementError>;

impl StatementError {
    pub(crate) fn date(input: &str, reason: impl Into<String>) -> Self {
        StatementError::DateParse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn amount(input: &str) -> Self {
        StatementError::AmountParse {
            input: input.to_string(),
        }
    }
}

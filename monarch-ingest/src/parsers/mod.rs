//! Issuer-specific statement parsers.
//!
//! Each issuer supplies the same capabilities (locate the summary, read its
//! fields and closing date, produce activity lines, parse one activity line);
//! the shared pipeline in [`StatementParser::extract`] drives them.

pub mod chase_credit;

use std::fmt;
use std::str::FromStr;

use monarch_core::{ClosingContext, Result, StatementExtraction, SummaryFields, Transaction};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::types::PageText;

pub use chase_credit::ChaseCreditParser;

/// Characters after the summary heading searched for summary fields.
pub const DEFAULT_SUMMARY_WINDOW: usize = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    pub summary_window: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            summary_window: DEFAULT_SUMMARY_WINDOW,
        }
    }
}

pub trait StatementParser {
    fn name(&self) -> &'static str;

    /// Summary section of the whole-document text.
    fn summary_section<'a>(&self, document: &'a str, window: usize) -> Result<&'a str>;

    /// Summary fields plus the closing context read from the summary section.
    fn summary(&self, section: &str) -> Result<(SummaryFields, ClosingContext)>;

    /// Candidate activity lines, in document order.
    fn activity_lines<'a>(&'a self, pages: &'a PageText) -> Box<dyn Iterator<Item = String> + 'a>;

    /// `Ok(None)` for lines that are not transactions.
    fn parse_transaction(&self, line: &str, closing: &ClosingContext) -> Result<Option<Transaction>>;

    /// Run the full extraction for one document.
    fn extract(&self, pages: &PageText, options: &ExtractOptions) -> Result<StatementExtraction> {
        let document = pages.document_text();
        let section = self.summary_section(&document, options.summary_window)?;
        let (summary, closing) = self.summary(section)?;
        debug!(
            fields = summary.len(),
            closing = %closing.closing_date,
            "read summary section"
        );

        let mut transactions = Vec::new();
        for line in self.activity_lines(pages) {
            match self.parse_transaction(&line, &closing)? {
                Some(txn) => transactions.push(txn),
                None => debug!(line = %line, "skipping non-transaction line"),
            }
        }

        if transactions.is_empty() {
            warn!(parser = self.name(), "no transactions found in activity section");
        }
        info!(
            parser = self.name(),
            pages = pages.len(),
            transactions = transactions.len(),
            "parsed statement"
        );

        Ok(StatementExtraction {
            summary,
            closing,
            transactions,
        })
    }
}

/// Statement layouts with a registered parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Chase,
}

impl AccountType {
    pub fn parser(&self) -> Box<dyn StatementParser> {
        match self {
            AccountType::Chase => Box::new(ChaseCreditParser),
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Chase => write!(f, "chase"),
        }
    }
}

impl FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chase" => Ok(AccountType::Chase),
            other => Err(format!("unsupported account type: {other}")),
        }
    }
}

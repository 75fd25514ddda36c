//! monarch-ingest: statement text ingestion (PDF page text) and issuer-specific parsers.

pub mod normalize;
pub mod parsers;
pub mod pdf;
pub mod sections;
pub mod types;

pub use normalize::normalize;
pub use parsers::{AccountType, ChaseCreditParser, ExtractOptions, StatementParser};
pub use pdf::{PageTextSource, PdfExtractSource};
pub use types::PageText;

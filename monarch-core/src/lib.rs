//! monarch-core: statement model, amount interpretation, and date inference.

pub mod amount;
pub mod dates;
pub mod error;
pub mod model;

pub use amount::{AmountToken, Sign};
pub use dates::{ClosingContext, expand_year, parse_mdy, parse_month_day};
pub use error::{Result, StatementError};
pub use model::{StatementExtraction, SummaryField, SummaryFields, Transaction};

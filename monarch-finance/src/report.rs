//! Output assembly: summary table, activity ledger, and footer totals.

use monarch_core::{SummaryFields, Transaction};
use rust_decimal::Decimal;
use serde::Serialize;

/// Credit/debit counts and sums over the activity ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivityTotals {
    pub credit_count: usize,
    pub debit_count: usize,
    pub total_credits: Decimal,
    pub total_debits: Decimal,
}

impl ActivityTotals {
    /// Zero amounts count as neither credit nor debit.
    pub fn from_transactions(txns: &[Transaction]) -> Self {
        txns.iter().fold(Self::default(), |mut acc, t| {
            if t.is_credit() {
                acc.credit_count += 1;
                acc.total_credits += t.amount;
            } else if t.is_debit() {
                acc.debit_count += 1;
                acc.total_debits += t.amount;
            }
            acc
        })
    }

    /// Footer rows in ledger order, as (label, value).
    pub fn footer(&self) -> [(&'static str, String); 4] {
        [
            ("Credit transactions (count)", self.credit_count.to_string()),
            ("Debit transactions (count)", self.debit_count.to_string()),
            ("Total credits", self.total_credits.to_string()),
            ("Total debits", self.total_debits.to_string()),
        ]
    }
}

/// Rows ready for serialization. An empty row is written as a blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// `Field, Value` rows for every catalogued summary field, in catalogue order.
pub fn summary_table(fields: &SummaryFields) -> Table {
    Table {
        header: vec!["Field", "Value"],
        rows: fields
            .rows()
            .map(|(field, value)| vec![field.name().to_string(), value.to_string()])
            .collect(),
    }
}

/// `Date, Description, Amount` rows in document order, a blank row, then the footer.
pub fn activity_table(txns: &[Transaction], totals: &ActivityTotals) -> Table {
    let mut rows: Vec<Vec<String>> = txns
        .iter()
        .map(|t| {
            vec![
                t.date.format("%Y-%m-%d").to_string(),
                t.description.clone(),
                t.amount_display.clone(),
            ]
        })
        .collect();

    rows.push(Vec::new());
    rows.extend(
        totals
            .footer()
            .into_iter()
            .map(|(label, value)| vec![label.to_string(), String::new(), value]),
    );

    Table {
        header: vec!["Date", "Description", "Amount"],
        rows,
    }
}

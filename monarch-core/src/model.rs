//! Statement record types shared by the ingest parsers and the report writer.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::amount::AmountToken;
use crate::dates::ClosingContext;

/// Fields reported in the summary table, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SummaryField {
    AccountNumber,
    PreviousBalance,
    PaymentCredits,
    Purchases,
    CashAdvances,
    BalanceTransfers,
    FeesCharged,
    InterestCharged,
    NewBalance,
    OpeningClosingDate,
    CreditAccessLine,
    AvailableCredit,
    CashAccessLine,
    AvailableForCash,
    PastDueAmount,
    BalanceOverCreditAccessLine,
}

impl SummaryField {
    pub const ALL: [SummaryField; 16] = [
        SummaryField::AccountNumber,
        SummaryField::PreviousBalance,
        SummaryField::PaymentCredits,
        SummaryField::Purchases,
        SummaryField::CashAdvances,
        SummaryField::BalanceTransfers,
        SummaryField::FeesCharged,
        SummaryField::InterestCharged,
        SummaryField::NewBalance,
        SummaryField::OpeningClosingDate,
        SummaryField::CreditAccessLine,
        SummaryField::AvailableCredit,
        SummaryField::CashAccessLine,
        SummaryField::AvailableForCash,
        SummaryField::PastDueAmount,
        SummaryField::BalanceOverCreditAccessLine,
    ];

    /// Name written in the `Field` column.
    pub fn name(&self) -> &'static str {
        match self {
            SummaryField::AccountNumber => "Account Number",
            SummaryField::PreviousBalance => "Previous Balance",
            SummaryField::PaymentCredits => "Payment, Credits",
            SummaryField::Purchases => "Purchases",
            SummaryField::CashAdvances => "Cash Advances",
            SummaryField::BalanceTransfers => "Balance Transfers",
            SummaryField::FeesCharged => "Fees Charged",
            SummaryField::InterestCharged => "Interest Charged",
            SummaryField::NewBalance => "New Balance",
            SummaryField::OpeningClosingDate => "Opening/Closing Date",
            SummaryField::CreditAccessLine => "Credit Access Line",
            SummaryField::AvailableCredit => "Available Credit",
            SummaryField::CashAccessLine => "Cash Access Line",
            SummaryField::AvailableForCash => "Available for Cash",
            SummaryField::PastDueAmount => "Past Due Amount",
            SummaryField::BalanceOverCreditAccessLine => "Balance over the Credit Access Line",
        }
    }
}

/// Summary values found in the statement. Fields that were not found are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryFields(BTreeMap<SummaryField, String>);

impl SummaryFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: SummaryField, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    pub fn get(&self, field: SummaryField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every catalogued field in output order, missing ones as "".
    pub fn rows(&self) -> impl Iterator<Item = (SummaryField, &str)> + '_ {
        SummaryField::ALL
            .iter()
            .map(move |f| (*f, self.get(*f).unwrap_or("")))
    }
}

/// A parsed activity row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    /// Amount as shown in the ledger (`-$12.34`, `($5.00)`, `+$3.21`)
    pub amount_display: String,
    /// Positive = credit, negative = debit
    pub amount: Decimal,
}

impl Transaction {
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: &AmountToken) -> Self {
        Self {
            date,
            description: description.into(),
            amount_display: amount.display(),
            amount: amount.value(),
        }
    }

    pub fn is_credit(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_debit(&self) -> bool {
        self.amount < Decimal::ZERO
    }
}

/// Everything read from one statement document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementExtraction {
    pub summary: SummaryFields,
    pub closing: ClosingContext,
    pub transactions: Vec<Transaction>,
}

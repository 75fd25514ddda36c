//! Chase credit card statement parser (text)
//!
//! Expected extracted-text sections:
//!   ACCOUNT SUMMARY
//!   Account Number: XXXX XXXX XXXX 1234
//!   Previous Balance $1,020.33
//!   Opening/Closing Date: 12/13/17 - 01/12/18
//!   ...
//!   ACCOUNT ACTIVITY
//!   12/14 AMAZON MKTPLACE PMTS AMZN.COM/BILLWA 23.41
//!   01/02 Payment Thank You-Mobile -500.00

use std::sync::LazyLock;

use monarch_core::{
    AmountToken, ClosingContext, Result, StatementError, SummaryField, SummaryFields, Transaction,
    parse_mdy, parse_month_day,
};
use regex::Regex;
use tracing::debug;

use crate::normalize::normalize;
use crate::sections::{ACCOUNT_ACTIVITY_RE, ACCOUNT_SUMMARY_RE, activity_lines, find_section, section_window};
use crate::types::PageText;

use super::StatementParser;

/// Amount token as printed: optional sign, `$` on either side of an opening
/// parenthesis, `.dd` cents.
const AMOUNT_PATTERN: &str = r"[+\-−]?\s*\$?\s*\(?\s*\$?\s*(?:\d[\d,]*|\d)?(?:\.\d{2})\s*\)?";

// Example: "Opening/Closing Date: 12/13/17 – 01/12/18"
static DATE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)Opening/Closing\s+Date\s*:\s*(\d{1,2}/\d{1,2}/\d{2,4})\s*[–-]\s*(\d{1,2}/\d{1,2}/\d{2,4})",
    )
    .expect("valid date range regex")
});

static ACCOUNT_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bAccount\s+Number\b\s*[:#]?\s*([0-9Xx*\- ]{6,})")
        .expect("valid account number regex")
});

// MM/DD  DESCRIPTION....   $12.34
static TXN_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(?P<md>\d{{1,2}}/\d{{1,2}})\s+(?P<desc>.+?)\s+(?P<amt>{AMOUNT_PATTERN})\s*$"
    ))
    .expect("valid transaction line regex")
});

/// Post-processing applied to a labeled summary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueRule {
    AsWritten,
    /// Numeric text only, no `$`
    StripCurrency,
}

struct LabelRule {
    label: &'static str,
    field: SummaryField,
    rule: ValueRule,
}

const fn label(label: &'static str, field: SummaryField) -> LabelRule {
    LabelRule {
        label,
        field,
        rule: ValueRule::AsWritten,
    }
}

/// Printed labels of the summary amounts. New labels go here.
const LABELS: &[LabelRule] = &[
    label("Previous Balance", SummaryField::PreviousBalance),
    label("Payment, Credits", SummaryField::PaymentCredits),
    LabelRule {
        label: "Purchases",
        field: SummaryField::Purchases,
        rule: ValueRule::StripCurrency,
    },
    label("Cash Advances", SummaryField::CashAdvances),
    label("Balance Transfers", SummaryField::BalanceTransfers),
    label("Fees Charged", SummaryField::FeesCharged),
    label("Interest Charged", SummaryField::InterestCharged),
    label("New Balance", SummaryField::NewBalance),
    label("Credit Access Line", SummaryField::CreditAccessLine),
    label("Available Credit", SummaryField::AvailableCredit),
    label("Cash Access Line", SummaryField::CashAccessLine),
    label("Available for Cash", SummaryField::AvailableForCash),
    label("Past Due Amount", SummaryField::PastDueAmount),
    label(
        "Balance over the Credit Access Line",
        SummaryField::BalanceOverCreditAccessLine,
    ),
];

static LABEL_PATTERNS: LazyLock<Vec<(&'static LabelRule, Regex)>> = LazyLock::new(|| {
    LABELS
        .iter()
        .map(|rule| {
            let pattern = format!(
                r"(?i)\b{}\b\s*[: ]\s*({AMOUNT_PATTERN})",
                regex::escape(rule.label)
            );
            (rule, Regex::new(&pattern).expect("valid summary label regex"))
        })
        .collect()
});

/// Summary amount with whitespace removed, `.99` fixed to `0.99`, and any sign
/// moved ahead of the currency symbol.
fn summary_amount(raw: &str) -> String {
    match AmountToken::parse(raw) {
        Ok(token) => token.canonical(),
        Err(_) => {
            debug!(raw, "summary amount kept as written");
            raw.split_whitespace().collect()
        }
    }
}

fn grab(section: &str, pattern: &Regex) -> Option<String> {
    let caps = pattern.captures(section)?;
    Some(summary_amount(&normalize(&caps[1])))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChaseCreditParser;

impl StatementParser for ChaseCreditParser {
    fn name(&self) -> &'static str {
        "chase"
    }

    fn summary_section<'a>(&self, document: &'a str, window: usize) -> Result<&'a str> {
        let start = find_section(document, &ACCOUNT_SUMMARY_RE).ok_or(
            StatementError::SectionNotFound {
                section: "ACCOUNT SUMMARY",
            },
        )?;
        Ok(section_window(document, start, window))
    }

    fn summary(&self, section: &str) -> Result<(SummaryFields, ClosingContext)> {
        let mut fields = SummaryFields::new();

        if let Some(caps) = ACCOUNT_NUMBER_RE.captures(section) {
            fields.insert(SummaryField::AccountNumber, normalize(&caps[1]));
        }

        // Required: rows carry no year without it
        let range = DATE_RANGE_RE
            .captures(section)
            .ok_or_else(|| StatementError::DateParse {
                input: "Opening/Closing Date".to_string(),
                reason: "not found in summary".to_string(),
            })?;
        let opening = parse_mdy(&range[1])?;
        let closing = parse_mdy(&range[2])?;
        fields.insert(
            SummaryField::OpeningClosingDate,
            format!("{} \u{2013} {}", &range[1], &range[2]),
        );

        for (rule, pattern) in LABEL_PATTERNS.iter() {
            let Some(value) = grab(section, pattern) else {
                continue;
            };
            let value = match rule.rule {
                ValueRule::AsWritten => value,
                ValueRule::StripCurrency => value.replace('$', ""),
            };
            fields.insert(rule.field, value);
        }

        Ok((fields, ClosingContext::new(opening, closing)))
    }

    fn activity_lines<'a>(&'a self, pages: &'a PageText) -> Box<dyn Iterator<Item = String> + 'a> {
        Box::new(activity_lines(pages.pages(), &ACCOUNT_ACTIVITY_RE))
    }

    fn parse_transaction(&self, line: &str, closing: &ClosingContext) -> Result<Option<Transaction>> {
        let Some(caps) = TXN_LINE_RE.captures(line) else {
            return Ok(None);
        };

        let Some(date) = parse_month_day(&caps["md"]).and_then(|(m, d)| closing.resolve(m, d))
        else {
            debug!(line, "activity row has no such calendar day");
            return Ok(None);
        };

        // Leading ampersands are line-wrap artifacts
        let description = caps["desc"].trim().trim_start_matches('&').trim();
        let amount = AmountToken::parse(caps["amt"].trim())?;

        Ok(Some(Transaction::new(date, description, &amount)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::ExtractOptions;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    const SUMMARY: &str = "ACCOUNT SUMMARY
Account Number: XXXX XXXX XXXX 1234
Previous Balance $1,020.33
Payment, Credits -$500.00
Purchases +$245.17
Cash Advances $0.00
Fees Charged $ .99
New Balance $766.49
Opening/Closing Date 12/13/17 \u{2013} 01/12/18
Credit Access Line $5,000
Available Credit $4,233.00";

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn closing() -> ClosingContext {
        ClosingContext::new(ymd(2017, 12, 13), ymd(2018, 1, 12))
    }

    #[test]
    fn test_summary_fields() {
        // The date label in real statements carries a colon
        let section = SUMMARY.replace("Opening/Closing Date ", "Opening/Closing Date: ");
        let (fields, ctx) = ChaseCreditParser.summary(&section).unwrap();

        assert_eq!(fields.get(SummaryField::AccountNumber), Some("XXXX XXXX XXXX 1234"));
        assert_eq!(fields.get(SummaryField::PreviousBalance), Some("$1,020.33"));
        assert_eq!(fields.get(SummaryField::PaymentCredits), Some("-$500.00"));
        assert_eq!(fields.get(SummaryField::Purchases), Some("+245.17"));
        assert_eq!(fields.get(SummaryField::FeesCharged), Some("$0.99"));
        assert_eq!(fields.get(SummaryField::NewBalance), Some("$766.49"));
        assert_eq!(
            fields.get(SummaryField::OpeningClosingDate),
            Some("12/13/17 \u{2013} 01/12/18")
        );
        assert_eq!(fields.get(SummaryField::AvailableCredit), Some("$4,233.00"));
        // No cents, so the amount shape does not match
        assert_eq!(fields.get(SummaryField::CreditAccessLine), None);
        assert_eq!(fields.get(SummaryField::PastDueAmount), None);
        assert_eq!(ctx, closing());
    }

    #[test]
    fn test_purchases_strips_currency() {
        let section = "ACCOUNT SUMMARY Purchases: $1,234.56 Opening/Closing Date: 01/01/18 - 01/31/18";
        let (fields, _) = ChaseCreditParser.summary(section).unwrap();
        assert_eq!(fields.get(SummaryField::Purchases), Some("1,234.56"));
    }

    #[test]
    fn test_summary_keeps_paren_notation() {
        let section = "ACCOUNT SUMMARY Previous Balance $(5.00) New Balance ($12.00) \
                       Opening/Closing Date: 01/01/18 - 01/31/18";
        let (fields, _) = ChaseCreditParser.summary(section).unwrap();
        assert_eq!(fields.get(SummaryField::PreviousBalance), Some("$(5.00)"));
        assert_eq!(fields.get(SummaryField::NewBalance), Some("($12.00)"));
    }

    #[test]
    fn test_missing_date_range_is_fatal() {
        let err = ChaseCreditParser.summary(SUMMARY).unwrap_err();
        assert!(matches!(err, StatementError::DateParse { .. }));
    }

    #[test]
    fn test_missing_summary_heading() {
        let err = ChaseCreditParser.summary_section("ACCOUNT ACTIVITY only", 4000).unwrap_err();
        assert!(matches!(err, StatementError::SectionNotFound { section: "ACCOUNT SUMMARY" }));
    }

    #[test]
    fn test_summary_section_window() {
        let doc = "cover page ACCOUNT SUMMARY Previous Balance $1.00";
        let section = ChaseCreditParser.summary_section(doc, 15).unwrap();
        assert_eq!(section, "ACCOUNT SUMMARY");
    }

    #[test]
    fn test_parse_transaction_rows() {
        let ctx = closing();
        let p = ChaseCreditParser;

        let t = p.parse_transaction("12/14 AMAZON MKTPLACE PMTS 23.41", &ctx).unwrap().unwrap();
        assert_eq!(t.date, ymd(2017, 12, 14));
        assert_eq!(t.description, "AMAZON MKTPLACE PMTS");
        assert_eq!(t.amount_display, "-23.41");
        assert_eq!(t.amount, dec!(-23.41));

        let t = p.parse_transaction("01/02 Payment Thank You +$500.00", &ctx).unwrap().unwrap();
        assert_eq!(t.date, ymd(2018, 1, 2));
        assert_eq!(t.amount_display, "+$500.00");
        assert_eq!(t.amount, dec!(500.00));

        let t = p.parse_transaction("1/5 &&RETURN STORE #12 $(5.00)", &ctx).unwrap().unwrap();
        assert_eq!(t.date, ymd(2018, 1, 5));
        assert_eq!(t.description, "RETURN STORE #12");
        assert_eq!(t.amount_display, "($5.00)");
        assert_eq!(t.amount, dec!(-5.00));

        let t = p.parse_transaction("01/05 RETURN ($5.00)", &ctx).unwrap().unwrap();
        assert_eq!(t.description, "RETURN");
        assert_eq!(t.amount_display, "($5.00)");

        let t = p.parse_transaction("01/06 & LATE FEE (.50)", &ctx).unwrap().unwrap();
        assert_eq!(t.description, "LATE FEE");
        assert_eq!(t.amount_display, "(0.50)");
    }

    #[test]
    fn test_non_transaction_lines_skipped() {
        let ctx = closing();
        for line in [
            "Date of Transaction Merchant Name or Transaction Description $ Amount",
            "ACCOUNT ACTIVITY (CONTINUED)",
            "Total fees charged in 2018 $0.00",
            "02/30 IMPOSSIBLE DAY 1.00",
            "01/05 NO AMOUNT HERE",
        ] {
            assert_eq!(ChaseCreditParser.parse_transaction(line, &ctx).unwrap(), None, "{line}");
        }
    }

    #[test]
    fn test_unbalanced_amount_is_fatal() {
        let err = ChaseCreditParser
            .parse_transaction("01/05 STORE (5.00", &closing())
            .unwrap_err();
        assert!(matches!(err, StatementError::AmountParse { .. }));
    }

    #[test]
    fn test_extract_pipeline() {
        let pages = PageText::from_raw([
            format!("{}\n", SUMMARY.replace("Opening/Closing Date ", "Opening/Closing Date: ")),
            "ACCOUNT ACTIVITY\nDate of Transaction Merchant Name $ Amount\n12/20  COFFEE  4.50\n01/03 REFUND -$2.00".to_string(),
            "ACCOUNT ACTIVITY (CONTINUED)\n01/10 GROCER $1,000.10\nThis Statement is a Facsimile".to_string(),
        ]);
        let out = ChaseCreditParser.extract(&pages, &ExtractOptions::default()).unwrap();

        let dates: Vec<_> = out.transactions.iter().map(|t| t.date).collect();
        assert_eq!(dates, vec![ymd(2017, 12, 20), ymd(2018, 1, 3), ymd(2018, 1, 10)]);
        assert_eq!(out.transactions[2].amount_display, "-$1,000.10");
        assert_eq!(out.summary.get(SummaryField::NewBalance), Some("$766.49"));
    }
}

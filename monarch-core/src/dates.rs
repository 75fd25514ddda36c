//! Statement dates: `M/D/YY` parsing and year inference for `MM/DD` rows.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{Result, StatementError};

/// Two-digit years at or below this pivot land in the 2000s, the rest in the 1900s.
const TWO_DIGIT_YEAR_PIVOT: i32 = 69;

/// Closing date of the statement period, the anchor for year inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClosingContext {
    pub opening_date: NaiveDate,
    pub closing_date: NaiveDate,
}

impl ClosingContext {
    pub fn new(opening_date: NaiveDate, closing_date: NaiveDate) -> Self {
        Self {
            opening_date,
            closing_date,
        }
    }

    pub fn closing_month(&self) -> u32 {
        self.closing_date.month()
    }

    pub fn closing_year(&self) -> i32 {
        self.closing_date.year()
    }

    /// Year of a transaction dated only by month. A month after the closing
    /// month belongs to the previous calendar year (Dec rows on a Jan statement).
    pub fn infer_year(&self, month: u32) -> i32 {
        if month > self.closing_month() {
            self.closing_year() - 1
        } else {
            self.closing_year()
        }
    }

    /// Full date for an `MM/DD` row, or `None` if the month/day is not a real date.
    pub fn resolve(&self, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.infer_year(month), month, day)
    }
}

/// Expand a two-digit year using the 69/70 window.
pub fn expand_year(year: i32) -> i32 {
    if year >= 100 {
        year
    } else if year <= TWO_DIGIT_YEAR_PIVOT {
        2000 + year
    } else {
        1900 + year
    }
}

/// Parse `M/D/YY` or `M/D/YYYY`.
pub fn parse_mdy(s: &str) -> Result<NaiveDate> {
    let parts: Vec<&str> = s.trim().split('/').collect();
    if parts.len() != 3 {
        return Err(StatementError::date(s, "expected M/D/YY"));
    }

    let num = |p: &str| -> Result<u32> {
        p.parse()
            .map_err(|_| StatementError::date(s, format!("{p:?} is not a number")))
    };
    let m = num(parts[0])?;
    let d = num(parts[1])?;
    let y: u16 = parts[2]
        .parse()
        .map_err(|_| StatementError::date(s, format!("{:?} is not a year", parts[2])))?;
    let y = expand_year(i32::from(y));

    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| StatementError::date(s, "no such calendar day"))
}

/// Parse an `MM/DD` token into (month, day).
pub fn parse_month_day(s: &str) -> Option<(u32, u32)> {
    let (m, d) = s.trim().split_once('/')?;
    Some((m.parse().ok()?, d.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_two_digit_window() {
        assert_eq!(expand_year(17), 2017);
        assert_eq!(expand_year(69), 2069);
        assert_eq!(expand_year(70), 1970);
        assert_eq!(expand_year(2018), 2018);
    }

    #[test]
    fn test_parse_mdy() {
        assert_eq!(parse_mdy("01/12/18").unwrap(), ymd(2018, 1, 12));
        assert_eq!(parse_mdy("12/13/2017").unwrap(), ymd(2017, 12, 13));
        assert_eq!(parse_mdy(" 3/5/99 ").unwrap(), ymd(1999, 3, 5));
    }

    #[test]
    fn test_parse_mdy_rejects_malformed() {
        for s in ["", "01/12", "1/2/3/4", "aa/01/18", "02/30/18", "13/01/18", "1/1/4294967295", "1/1/-5"] {
            assert!(
                matches!(parse_mdy(s), Err(StatementError::DateParse { .. })),
                "{s}"
            );
        }
    }

    #[test]
    fn test_year_inference_across_boundary() {
        let ctx = ClosingContext::new(ymd(2017, 12, 13), ymd(2018, 1, 12));
        assert_eq!(ctx.closing_month(), 1);
        assert_eq!(ctx.resolve(12, 13), Some(ymd(2017, 12, 13)));
        assert_eq!(ctx.resolve(1, 5), Some(ymd(2018, 1, 5)));
    }

    #[test]
    fn test_resolve_rejects_impossible_day() {
        let ctx = ClosingContext::new(ymd(2018, 2, 1), ymd(2018, 3, 1));
        assert_eq!(ctx.resolve(2, 30), None);
        assert_eq!(parse_month_day("02/30"), Some((2, 30)));
        assert_eq!(parse_month_day("0230"), None);
    }
}

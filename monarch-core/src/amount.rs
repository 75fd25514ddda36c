//! Statement amount tokens.
//!
//! A raw token such as `$1,234.56`, `($5.00)`, `+$3.21` or `.99` is decomposed
//! once into sign, currency, parentheses and digits. Both the exact value and
//! the display string are rendered from that decomposition, so they always
//! agree on sign.
//!
//! Sign convention for transaction amounts:
//!   - parentheses => negative
//!   - leading `-` => negative
//!   - leading `+` => positive
//!   - no explicit sign => debit, forced negative

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{Result, StatementError};

/// Explicit sign written in the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    fn as_char(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

/// Decomposed amount token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountToken {
    pub sign: Option<Sign>,
    pub currency: bool,
    pub parenthesized: bool,
    /// Digits as written (comma grouping kept), with a bare leading `.` fixed to `0.`
    pub digits: String,
    /// `$` written outside the parentheses, as in `$(5.00)`
    currency_outside: bool,
    magnitude: Decimal,
}

impl AmountToken {
    /// Decompose a raw token. Whitespace anywhere in the token is ignored and the
    /// unicode minus is read as `-`.
    pub fn parse(raw: &str) -> Result<Self> {
        let s: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| if c == '\u{2212}' { '-' } else { c })
            .collect();

        let mut sign = None;
        let mut currency = false;
        let mut open_paren = false;
        let mut currency_outside = false;
        let mut rest = s.as_str();

        while let Some(c) = rest.chars().next() {
            match c {
                '+' | '-' if sign.is_none() => {
                    sign = Some(if c == '+' { Sign::Plus } else { Sign::Minus });
                }
                '$' if !currency => {
                    currency = true;
                    currency_outside = !open_paren;
                }
                '(' if !open_paren => open_paren = true,
                _ => break,
            }
            rest = &rest[c.len_utf8()..];
        }

        let (body, close_paren) = match rest.strip_suffix(')') {
            Some(body) => (body, true),
            None => (rest, false),
        };

        if open_paren != close_paren {
            return Err(StatementError::amount(raw));
        }
        if open_paren && sign == Some(Sign::Plus) {
            return Err(StatementError::amount(raw));
        }
        if body.is_empty()
            || !body.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.')
        {
            return Err(StatementError::amount(raw));
        }

        let digits = if body.starts_with('.') {
            format!("0{body}")
        } else {
            body.to_string()
        };
        let magnitude = Decimal::from_str(&digits.replace(',', ""))
            .map_err(|_| StatementError::amount(raw))?;

        Ok(Self {
            sign,
            currency,
            parenthesized: open_paren,
            digits,
            currency_outside,
            magnitude,
        })
    }

    /// Whether the token counts as negative under the debit-default convention.
    pub fn is_negative(&self) -> bool {
        self.parenthesized || self.sign != Some(Sign::Plus)
    }

    /// Exact signed value.
    pub fn value(&self) -> Decimal {
        if self.is_negative() {
            -self.magnitude
        } else {
            self.magnitude
        }
    }

    /// Display form for the activity ledger: original notation kept, sign placed
    /// before the currency symbol, `-` injected for unsigned debits.
    pub fn display(&self) -> String {
        if self.parenthesized {
            return format!("({}{})", self.currency_symbol(), self.digits);
        }
        let sign = if self.is_negative() { '-' } else { '+' };
        format!("{sign}{}{}", self.currency_symbol(), self.digits)
    }

    /// Notation as written, without the debit default. Used for summary fields.
    /// A written sign goes first; `$` and parentheses keep their written order.
    pub fn canonical(&self) -> String {
        let sign = self.sign.map(Sign::as_char).map(String::from).unwrap_or_default();
        if !self.parenthesized {
            return format!("{sign}{}{}", self.currency_symbol(), self.digits);
        }
        if self.currency_outside {
            format!("{sign}$({})", self.digits)
        } else {
            format!("{sign}({}{})", self.currency_symbol(), self.digits)
        }
    }

    fn currency_symbol(&self) -> &'static str {
        if self.currency { "$" } else { "" }
    }
}

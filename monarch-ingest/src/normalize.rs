//! Whitespace and punctuation normalization applied to all statement text.

use std::sync::LazyLock;

use regex::Regex;

static SPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid whitespace regex"));

/// Map the unicode minus to `-`, collapse runs of two or more whitespace
/// characters into one space, and trim.
///
/// En and em dashes are left alone; the en dash separates the statement date range.
/// A lone newline survives, so normalized page text can still be split into lines.
pub fn normalize(s: &str) -> String {
    let s = s.replace('\u{2212}', "-");
    SPACE_RUN_RE.replace_all(&s, " ").trim().to_string()
}

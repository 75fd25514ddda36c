//! Section headings and the activity line producer.

use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::normalize;

/// Statement summary heading.
pub static ACCOUNT_SUMMARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bACCOUNT\s+SUMMARY\b").expect("valid summary heading regex")
});

/// Activity heading. Also matches the `ACCOUNT ACTIVITY (CONTINUED)` variant.
pub static ACCOUNT_ACTIVITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bACCOUNT\s+ACTIVITY\b").expect("valid activity heading regex")
});

/// Byte offset of the first heading match.
pub fn find_section(text: &str, heading: &Regex) -> Option<usize> {
    heading.find(text).map(|m| m.start())
}

/// Up to `window` characters of `text` starting at `start`.
pub fn section_window(text: &str, start: usize, window: usize) -> &str {
    let rest = &text[start..];
    match rest.char_indices().nth(window) {
        Some((end, _)) => &rest[..end],
        None => rest,
    }
}

/// Normalized, non-empty lines following the first heading line of a page.
/// A page without the heading yields nothing.
pub fn lines_after_heading<'a>(
    page: &'a str,
    heading: &'a Regex,
) -> impl Iterator<Item = String> + 'a {
    let mut lines = page.lines();
    // consumes through the heading line, or the whole page when there is none
    let _ = lines.by_ref().find(|line| heading.is_match(line));

    lines
        .map(normalize)
        .filter(|line| !line.is_empty())
}

/// Candidate activity lines across all pages, in page order.
///
/// Only the first heading line on a page starts collection; a later
/// continuation heading on the same page is passed through as an ordinary line.
pub fn activity_lines<'a, S: AsRef<str>>(
    pages: &'a [S],
    heading: &'a Regex,
) -> impl Iterator<Item = String> + 'a {
    pages
        .iter()
        .flat_map(move |page| lines_after_heading(page.as_ref(), heading))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_section_case_and_spacing() {
        let text = "header\naccount   summary\nPrevious Balance $1.00";
        assert_eq!(find_section(text, &ACCOUNT_SUMMARY_RE), Some(7));
        assert_eq!(find_section("nothing here", &ACCOUNT_SUMMARY_RE), None);
    }

    #[test]
    fn test_section_window_char_boundary() {
        let text = "ab\u{2013}cdef";
        assert_eq!(section_window(text, 0, 3), "ab\u{2013}");
        assert_eq!(section_window(text, 1, 100), "b\u{2013}cdef");
    }

    #[test]
    fn test_activity_lines_skip_pages_without_heading() {
        let pages = vec![
            "ACCOUNT SUMMARY\nNew Balance $1.00".to_string(),
            "intro\nACCOUNT ACTIVITY\n01/05 COFFEE 4.50\n\n01/06  TEA   3.00".to_string(),
            "ACCOUNT ACTIVITY (CONTINUED)\n01/07 BAGEL 2.00".to_string(),
        ];
        let lines: Vec<_> = activity_lines(&pages[..], &ACCOUNT_ACTIVITY_RE).collect();
        assert_eq!(lines, vec!["01/05 COFFEE 4.50", "01/06 TEA 3.00", "01/07 BAGEL 2.00"]);
    }

    #[test]
    fn test_continuation_on_same_page_does_not_restart() {
        let pages = ["ACCOUNT ACTIVITY\n01/05 A 1.00\nACCOUNT ACTIVITY (CONTINUED)\n01/06 B 2.00"];
        let lines: Vec<_> = activity_lines(&pages[..], &ACCOUNT_ACTIVITY_RE).collect();
        assert_eq!(
            lines,
            vec!["01/05 A 1.00", "ACCOUNT ACTIVITY (CONTINUED)", "01/06 B 2.00"]
        );
    }
}

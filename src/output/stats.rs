//! Derived word statistics
//!
//! This module computes the word-count reduction between an original text
//! and its extractive summary and formats counts for display.

/// Percentage decrease in word count from the original to the summary
///
/// Returns `None` when the original has no words, since the ratio is undefined.
pub fn reduction_percentage(original_words: u64, summary_words: u64) -> Option<f64> {
    if original_words == 0 {
        return None;
    }
    let original = original_words as f64;
    Some((original - summary_words as f64) / original * 100.0)
}

/// Formats a reduction as one decimal place with a trailing `%`, or `N/A`
///
/// Exact ties round away from zero (75.25 renders as `75.3%`).
pub fn format_reduction(reduction: Option<f64>) -> String {
    match reduction {
        Some(pct) => format!("{:.1}%", round_tenths_ties_away(pct)),
        None => "N/A".to_string(),
    }
}

/// Resolves an exact hundredths tie before `{:.1}` would send it to even
///
/// A value sits exactly halfway between two tenths only when it is an odd
/// multiple of 0.25; every other value is left for `{:.1}` to round.
fn round_tenths_ties_away(pct: f64) -> f64 {
    let quarters = pct * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        (pct * 10.0).round() / 10.0
    } else {
        pct
    }
}

/// Formats a count with `,` as the thousands separator
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

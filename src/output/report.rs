use crate::client::SummarizeResponse;
use crate::output::stats::{format_count, format_reduction, reduction_percentage};
use serde::Serialize;
use std::fmt::Write as _;

/// Rendered view of a successful summarize response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub original_word_count: u64,
    pub extractive_word_count: u64,
    /// `None` when the original text has no words
    pub reduction_percentage: Option<f64>,
    pub extractive_summary: String,
    pub abstractive_summary: String,
    pub original_text: String,
}

impl SummaryReport {
    pub fn from_response(response: &SummarizeResponse) -> Self {
        let original = response.original_stats.word_count;
        let extractive = response.extractive_stats.word_count;

        Self {
            original_word_count: original,
            extractive_word_count: extractive,
            reduction_percentage: reduction_percentage(original, extractive),
            extractive_summary: response.extractive_summary.clone(),
            abstractive_summary: response.abstractive_summary.clone(),
            original_text: response.original_text.clone(),
        }
    }

    pub fn original_words_display(&self) -> String {
        format_count(self.original_word_count)
    }

    pub fn extractive_words_display(&self) -> String {
        format_count(self.extractive_word_count)
    }

    /// Reduction with one decimal and a trailing `%`, or `N/A`
    pub fn reduction_display(&self) -> String {
        format_reduction(self.reduction_percentage)
    }

    /// Renders the results panel as plain text
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        // Writing to a String cannot fail
        let _ = writeln!(out, "=== Summary Results ===\n");
        let _ = writeln!(out, "Statistics:");
        let _ = writeln!(out, "  Original words: {}", self.original_words_display());
        let _ = writeln!(out, "  Extractive words: {}", self.extractive_words_display());
        let _ = writeln!(out, "  Reduction: {}", self.reduction_display());

        for (title, body) in [
            ("Extractive Summary", &self.extractive_summary),
            ("Abstractive Summary", &self.abstractive_summary),
            ("Original Text", &self.original_text),
        ] {
            let _ = writeln!(out, "\n{}:", title);
            let _ = writeln!(out, "{}", body);
        }

        out
    }
}

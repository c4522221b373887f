//! Terminal form surface
//!
//! Renders the form's regions as text: results go to the output stream,
//! the error banner and loading line go to the diagnostics stream.

use crate::form::{FormView, VisibilityState};
use crate::output::SummaryReport;
use std::io::{self, Stderr, Stdout, Write};

/// How the results region is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// A form surface backed by two writers
pub struct TerminalView<O = Stdout, E = Stderr> {
    url: String,
    text: String,
    format: ReportFormat,
    quiet: bool,
    state: VisibilityState,
    out: O,
    err: E,
}

impl TerminalView {
    /// Creates a view printing to stdout and stderr
    pub fn stdio(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(url, text, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> TerminalView<O, E> {
    pub fn new(url: impl Into<String>, text: impl Into<String>, out: O, err: E) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
            format: ReportFormat::default(),
            quiet: false,
            state: VisibilityState::default(),
            out,
            err,
        }
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Drops the loading line; results and the error banner still print
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    /// Consumes the view and returns its writers
    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }

    fn render(&self, report: &SummaryReport) -> String {
        match self.format {
            ReportFormat::Text => report.render_text(),
            ReportFormat::Json => match serde_json::to_string_pretty(report) {
                Ok(json) => format!("{}\n", json),
                Err(e) => {
                    tracing::warn!("Failed to serialize report, printing text: {}", e);
                    report.render_text()
                }
            },
        }
    }
}

fn write_or_log<W: Write>(writer: &mut W, content: &str) {
    if let Err(e) = writer.write_all(content.as_bytes()).and_then(|_| writer.flush()) {
        tracing::warn!("Failed to write to terminal: {}", e);
    }
}

impl<O: Write + Send, E: Write + Send> FormView for TerminalView<O, E> {
    fn url_value(&self) -> String {
        self.url.clone()
    }

    fn text_value(&self) -> String {
        self.text.clone()
    }

    fn show_results(&mut self, report: &SummaryReport) {
        let rendered = self.render(report);
        write_or_log(&mut self.out, &rendered);
        self.state.results_visible = true;
    }

    fn hide_results(&mut self) {
        self.state.results_visible = false;
    }

    fn show_error(&mut self, message: &str) {
        write_or_log(&mut self.err, &format!("Error: {}\n", message));
        self.state.error_visible = true;
    }

    fn clear_error(&mut self) {
        self.state.error_visible = false;
    }

    fn set_loading(&mut self, visible: bool) {
        if visible && !self.state.loading_visible && !self.quiet {
            write_or_log(&mut self.err, "Summarizing...\n");
        }
        self.state.loading_visible = visible;
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.state.submit_enabled = enabled;
    }
}

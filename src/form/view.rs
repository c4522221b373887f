use crate::output::SummaryReport;

/// The user-facing form surface the orchestrator drives
///
/// Two input fields, a submit control, an error region, a loading indicator
/// and a results region. The orchestrator only writes visibility; it never
/// reads it back.
pub trait FormView: Send {
    /// Current raw value of the URL field
    fn url_value(&self) -> String;

    /// Current raw value of the free-text field
    fn text_value(&self) -> String;

    /// Fills the results region and makes it visible
    fn show_results(&mut self, report: &SummaryReport);

    fn hide_results(&mut self);

    /// Sets the error text and makes the error region visible
    fn show_error(&mut self, message: &str);

    /// Empties the error text and hides the error region
    fn clear_error(&mut self);

    fn set_loading(&mut self, visible: bool);

    fn set_submit_enabled(&mut self, enabled: bool);
}

/// Visibility flags of a form surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityState {
    pub results_visible: bool,
    pub error_visible: bool,
    pub loading_visible: bool,
    pub submit_enabled: bool,
}

impl Default for VisibilityState {
    fn default() -> Self {
        Self {
            results_visible: false,
            error_visible: false,
            loading_visible: false,
            submit_enabled: true,
        }
    }
}

/// A single mutation applied to a form surface
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    ResultsShown,
    ResultsHidden,
    ErrorShown(String),
    ErrorCleared,
    LoadingShown,
    LoadingHidden,
    SubmitEnabled,
    SubmitDisabled,
}

/// In-memory form surface that records every mutation
///
/// Useful for embedding the orchestrator without a real UI, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    pub url: String,
    pub text: String,
    pub state: VisibilityState,
    pub error_text: String,
    pub report: Option<SummaryReport>,
    pub events: Vec<ViewEvent>,
}

impl MemoryView {
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// Number of times a given event was recorded
    pub fn count(&self, event: &ViewEvent) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }

    /// Position of the first occurrence of an event
    pub fn position(&self, event: &ViewEvent) -> Option<usize> {
        self.events.iter().position(|e| e == event)
    }
}

impl FormView for MemoryView {
    fn url_value(&self) -> String {
        self.url.clone()
    }

    fn text_value(&self) -> String {
        self.text.clone()
    }

    fn show_results(&mut self, report: &SummaryReport) {
        self.report = Some(report.clone());
        self.state.results_visible = true;
        self.events.push(ViewEvent::ResultsShown);
    }

    fn hide_results(&mut self) {
        self.state.results_visible = false;
        self.events.push(ViewEvent::ResultsHidden);
    }

    fn show_error(&mut self, message: &str) {
        self.error_text = message.to_string();
        self.state.error_visible = true;
        self.events.push(ViewEvent::ErrorShown(message.to_string()));
    }

    fn clear_error(&mut self) {
        self.error_text.clear();
        self.state.error_visible = false;
        self.events.push(ViewEvent::ErrorCleared);
    }

    fn set_loading(&mut self, visible: bool) {
        self.state.loading_visible = visible;
        self.events.push(if visible {
            ViewEvent::LoadingShown
        } else {
            ViewEvent::LoadingHidden
        });
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.state.submit_enabled = enabled;
        self.events.push(if enabled {
            ViewEvent::SubmitEnabled
        } else {
            ViewEvent::SubmitDisabled
        });
    }
}

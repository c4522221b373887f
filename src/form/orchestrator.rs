use crate::client::SummarizeBackend;
use crate::form::guard::{InFlightClaim, LoadingGuard};
use crate::form::FormView;
use crate::input::{validate_input, InputPair};
use crate::output::SummaryReport;
use crate::DigestError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Drives one submit: validate, post, render
///
/// # Submit Flow
///
/// 1. Claim the in-flight flag (a second trigger gets `DigestError::Busy`)
/// 2. Hide results and clear the error region
/// 3. Read and trim both fields; reject both-filled or both-empty
/// 4. Show loading, disable submit, post once to the backend
/// 5. Render the report, or show the error and hide results
/// 6. Re-enable submit and hide loading on every exit path
pub struct Orchestrator<B> {
    backend: B,
    in_flight: Arc<AtomicBool>,
}

impl<B: SummarizeBackend> Orchestrator<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns true while a submit holds the in-flight claim
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Claims the right to run one submit
    pub(crate) fn try_claim(&self) -> Option<InFlightClaim> {
        InFlightClaim::try_acquire(&self.in_flight)
    }

    /// Runs one submit against the given form
    ///
    /// Returns the rendered report on success. Every error has already been
    /// shown on the form by the time it is returned, except `Busy`, which
    /// leaves the form untouched.
    pub async fn submit<V: FormView + ?Sized>(
        &self,
        view: &mut V,
    ) -> Result<SummaryReport, DigestError> {
        let claim = self.try_claim().ok_or(DigestError::Busy)?;
        self.submit_claimed(claim, view).await
    }

    pub(crate) async fn submit_claimed<V: FormView + ?Sized>(
        &self,
        claim: InFlightClaim,
        view: &mut V,
    ) -> Result<SummaryReport, DigestError> {
        debug_assert!(claim.belongs_to(&self.in_flight));
        let _claim = claim;

        view.hide_results();
        view.clear_error();

        let input = InputPair::new(view.url_value(), view.text_value());
        let request = match validate_input(&input) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!("Rejected input: {:?}", e);
                display_error(view, &e.to_string());
                return Err(e.into());
            }
        };

        let mut form = LoadingGuard::engage(view);

        tracing::info!(
            "Summarizing {} via {}",
            request.kind(),
            self.backend.endpoint()
        );

        let result = self
            .backend
            .summarize(&request)
            .await
            .map(|response| SummaryReport::from_response(&response));

        match &result {
            Ok(report) => {
                tracing::info!(
                    "Summary ready: {} -> {} words ({})",
                    report.original_word_count,
                    report.extractive_word_count,
                    report.reduction_display()
                );
                form.show_results(report);
            }
            Err(e) => {
                if let DigestError::Connection { endpoint, reason } = e {
                    tracing::error!("Fetch error for {}: {}", endpoint, reason);
                } else {
                    tracing::warn!("Summarize failed: {}", e);
                }
                display_error(&mut *form, &e.to_string());
            }
        }

        result
    }
}

/// Shows an error and keeps the results region hidden
fn display_error<V: FormView + ?Sized>(view: &mut V, message: &str) {
    view.show_error(message);
    view.hide_results();
}

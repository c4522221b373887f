//! Explicit form lifecycle
//!
//! `mount` wires a form surface to an orchestrator and returns a handle; the
//! handle's `dispose` tears the wiring down and returns the surface. Nothing
//! is registered globally.

use crate::client::SummarizeBackend;
use crate::form::guard::InFlightClaim;
use crate::form::{FormView, Orchestrator};
use crate::output::SummaryReport;
use crate::DigestError;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::{JoinError, JoinHandle};

/// Outcome of one submit, delivered to whoever triggered it
pub type SubmitOutcome = Result<SummaryReport, DigestError>;

struct Trigger {
    claim: InFlightClaim,
    reply: oneshot::Sender<SubmitOutcome>,
}

/// A form surface bound to an orchestrator
pub struct MountedForm<V, B> {
    orchestrator: Arc<Orchestrator<B>>,
    triggers: mpsc::UnboundedSender<Trigger>,
    task: JoinHandle<V>,
}

/// Binds a form surface to an orchestrator
///
/// The surface moves into a tokio task that runs each accepted submit to
/// completion. Must be called from within a tokio runtime.
pub fn mount<V, B>(view: V, orchestrator: Arc<Orchestrator<B>>) -> MountedForm<V, B>
where
    V: FormView + 'static,
    B: SummarizeBackend + 'static,
{
    let (triggers, mut pending) = mpsc::unbounded_channel::<Trigger>();
    let worker = Arc::clone(&orchestrator);

    let task = tokio::spawn(async move {
        let mut view = view;
        while let Some(Trigger { claim, reply }) = pending.recv().await {
            let outcome = worker.submit_claimed(claim, &mut view).await;
            // The trigger side may have stopped listening
            let _ = reply.send(outcome);
        }
        tracing::debug!("Form unmounted");
        view
    });

    MountedForm {
        orchestrator,
        triggers,
        task,
    }
}

impl<V, B: SummarizeBackend> MountedForm<V, B> {
    /// Triggers a submit
    ///
    /// The in-flight claim is taken before this returns, so a second call
    /// made while a request is outstanding resolves to `DigestError::Busy`
    /// without touching the form. If the form task is gone the receiver
    /// reports a closed channel.
    pub fn submit(&self) -> oneshot::Receiver<SubmitOutcome> {
        let (reply, outcome) = oneshot::channel();

        match self.orchestrator.try_claim() {
            Some(claim) => {
                // On failure the trigger is dropped, releasing the claim
                let _ = self.triggers.send(Trigger { claim, reply });
            }
            None => {
                let _ = reply.send(Err(DigestError::Busy));
            }
        }

        outcome
    }

    /// Unbinds the form and returns the surface
    ///
    /// A submit already accepted runs to completion first.
    pub async fn dispose(self) -> Result<V, JoinError> {
        drop(self.triggers);
        self.task.await
    }
}

//! Form module: the request orchestrator and its surface
//!
//! This module contains:
//! - `FormView`: the two fields, submit control, error, loading and results regions
//! - `Orchestrator`: validate, post once, render, always restore the form
//! - Guards that hold the in-flight and loading state for one request
//! - `mount`/`MountedForm::dispose`: explicit lifecycle of a bound form

mod binding;
mod guard;
mod orchestrator;
mod view;

pub use binding::{mount, MountedForm, SubmitOutcome};
pub use guard::{InFlightClaim, LoadingGuard};
pub use orchestrator::Orchestrator;
pub use view::{FormView, MemoryView, ViewEvent, VisibilityState};

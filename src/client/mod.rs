//! Backend client module
//!
//! This module contains the seam between the form and the summarization
//! service:
//! - `SummarizeBackend`: one request in, one classified outcome out
//! - `HttpBackend`: the reqwest implementation
//! - Response decoding and error-message extraction

mod http;
mod response;

pub use http::{build_http_client, HttpBackend};
pub use response::{
    api_error_message, interpret_response, SummarizeResponse, TextStats, FALLBACK_API_ERROR,
};

use crate::input::SummarizeRequest;
use crate::DigestError;
use async_trait::async_trait;

/// A service that turns a summarize request into a response
///
/// Implementations issue exactly one request per call and never retry.
/// Failures are reported as `DigestError::Connection` (nothing usable came
/// back) or `DigestError::Api` (the service answered with a failure status).
#[async_trait]
pub trait SummarizeBackend: Send + Sync {
    /// Address requests are sent to, used in connection diagnostics
    fn endpoint(&self) -> &str;

    /// Sends one summarize request and waits for it to settle
    async fn summarize(&self, request: &SummarizeRequest)
        -> Result<SummarizeResponse, DigestError>;
}

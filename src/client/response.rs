//! Summarize endpoint response types and outcome classification

use crate::DigestError;
use serde::{Deserialize, Serialize};

/// Message shown when a failed response carries no usable `error` field
pub const FALLBACK_API_ERROR: &str = "An unknown API error occurred.";

/// Word statistics the backend reports for a block of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub word_count: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_count: Option<u64>,
}

impl TextStats {
    pub fn words(word_count: u64) -> Self {
        Self {
            word_count,
            sentence_count: None,
            char_count: None,
        }
    }
}

/// Successful summarize response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub original_stats: TextStats,
    pub extractive_stats: TextStats,
    pub extractive_summary: String,
    pub abstractive_summary: String,
    pub original_text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<serde_json::Value>,
}

/// Extracts the user-facing message from a failed response body
///
/// Anything other than a JSON object with a non-empty string `error` field
/// yields the fallback message.
pub fn api_error_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|v| v.as_str().map(str::to_string))
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| FALLBACK_API_ERROR.to_string())
}

/// Classifies a received response into a summary or an error
///
/// # Arguments
///
/// * `endpoint` - The endpoint the request went to, for connection diagnostics
/// * `status` - HTTP status code
/// * `body` - Raw response body
pub fn interpret_response(
    endpoint: &str,
    status: u16,
    body: &[u8],
) -> crate::Result<SummarizeResponse> {
    if !(200..300).contains(&status) {
        return Err(DigestError::Api {
            status,
            message: api_error_message(body),
        });
    }

    serde_json::from_slice(body).map_err(|e| DigestError::Connection {
        endpoint: endpoint.to_string(),
        reason: format!("Malformed summarize response: {}", e),
    })
}

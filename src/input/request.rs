use serde::Serialize;

/// Request body for the summarize endpoint
///
/// Serializes to an object with exactly one key: `{"url": ...}` or `{"text": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarizeRequest {
    Url(String),
    Text(String),
}

impl SummarizeRequest {
    /// Name of the single payload key
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Url(_) => "url",
            Self::Text(_) => "text",
        }
    }

    /// The payload value
    pub fn value(&self) -> &str {
        match self {
            Self::Url(v) | Self::Text(v) => v,
        }
    }
}

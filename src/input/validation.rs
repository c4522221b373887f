use crate::input::{InputPair, SummarizeRequest};
use thiserror::Error;

/// Local, pre-network input errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please provide EITHER a URL OR text, not both.")]
    MutuallyExclusive,

    #[error("Please enter a news article URL or paste the text.")]
    NoInput,
}

/// Builds the request payload from a trimmed input pair
///
/// Exactly one field must be non-empty. Both filled is checked first.
pub fn validate_input(input: &InputPair) -> Result<SummarizeRequest, ValidationError> {
    let url = input.url.trim();
    let text = input.text.trim();

    match (url.is_empty(), text.is_empty()) {
        (false, false) => Err(ValidationError::MutuallyExclusive),
        (false, true) => Ok(SummarizeRequest::Url(url.to_string())),
        (true, false) => Ok(SummarizeRequest::Text(text.to_string())),
        (true, true) => Err(ValidationError::NoInput),
    }
}

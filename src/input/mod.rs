//! Form input handling
//!
//! - `InputPair`: the two user-editable fields, read fresh on every submit
//! - `SummarizeRequest`: the single-key payload posted to the backend
//! - `validate_input`: mutual-exclusivity check that builds the payload

mod request;
mod validation;

pub use request::SummarizeRequest;
pub use validation::{validate_input, ValidationError};

/// The URL and text fields as read from the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputPair {
    pub url: String,
    pub text: String,
}

impl InputPair {
    /// Builds a pair from raw field values, trimming both
    pub fn new(url: impl AsRef<str>, text: impl AsRef<str>) -> Self {
        Self {
            url: url.as_ref().trim().to_string(),
            text: text.as_ref().trim().to_string(),
        }
    }

    /// Returns true if neither field holds anything after trimming
    pub fn is_empty(&self) -> bool {
        self.url.is_empty() && self.text.is_empty()
    }
}

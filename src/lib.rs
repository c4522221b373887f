//! Article Digest: a form-driven client for a summarization backend
//!
//! This crate reads a URL or pasted text from a form surface, posts it to a
//! summarization service, and renders the returned word statistics and
//! summaries, with error and loading-state handling.

pub mod client;
pub mod config;
pub mod form;
pub mod input;
pub mod output;

use thiserror::Error;

pub use input::ValidationError;

/// Main error type for Article Digest operations
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The request never produced a usable response
    #[error("Could not connect to the summarization server. Make sure the backend is running at {endpoint}")]
    Connection { endpoint: String, reason: String },

    /// The backend answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("A summarize request is already in flight")]
    Busy,
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Article Digest operations
pub type Result<T> = std::result::Result<T, DigestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use client::{HttpBackend, SummarizeBackend, SummarizeResponse};
pub use config::Config;
pub use form::{mount, FormView, MountedForm, Orchestrator};
pub use input::{InputPair, SummarizeRequest};
pub use output::SummaryReport;

//! Configuration module for Article Digest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every table is optional; a missing file section falls back to the defaults.
//!
//! # Example
//!
//! ```no_run
//! use article_digest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("digest.toml")).unwrap();
//! println!("Posting to: {}", config.backend.endpoint);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{BackendConfig, ClientConfig, Config, DEFAULT_ENDPOINT};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;

//! Integration tests for the summarize client
//!
//! These tests use wiremock to stand in for the summarization backend and
//! drive the full submit cycle through `HttpBackend`.

mod config_tests;
mod summarize_tests;

//! Output module for presenting summarize results
//!
//! This module handles:
//! - Derived statistics (word-count reduction, grouped counts)
//! - The rendered summary report
//! - A terminal implementation of the form surface

mod report;
pub mod stats;
mod terminal;

pub use report::SummaryReport;
pub use stats::{format_count, format_reduction, reduction_percentage};
pub use terminal::{ReportFormat, TerminalView};

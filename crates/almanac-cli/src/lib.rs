//! Almanac CLI library.
//!
//! Reads parsed research documents from JSON, validates them, and drives the
//! graph builder. Also provides configuration management and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod ingest;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use ingest::{load_documents, IngestReport, Rejection};
pub use output::Formatter;

/// Log filter used when `RUST_LOG` is unset; shows stage summaries.
pub const DEFAULT_LOG_FILTER: &str = "info";

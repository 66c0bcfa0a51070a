//! CLI command definitions and argument parsing.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Almanac - Build the research document graph from parsed documents.
#[derive(Debug, Parser)]
#[command(name = "almanac")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ALMANAC_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (minimal)
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the graph and print a summary
    Build(BuildArgs),

    /// Show one page: breadcrumbs, references and backlinks
    Show(ShowArgs),

    /// List sitemap entries for every page
    Sitemap(SitemapArgs),
}

/// Arguments for the build command.
#[derive(Debug, Parser)]
pub struct BuildArgs {
    /// JSON file holding an array of parsed documents
    pub input: PathBuf,

    /// Write the full graph snapshot as JSON
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// JSON file holding an array of parsed documents
    pub input: PathBuf,

    /// Page id
    pub id: String,
}

/// Arguments for the sitemap command.
#[derive(Debug, Parser)]
pub struct SitemapArgs {
    /// JSON file holding an array of parsed documents
    pub input: PathBuf,

    /// Override the configured base URL
    #[arg(long)]
    pub base_url: Option<String>,
}

//! Build command implementation.

use super::{build_graph, builder_for};
use crate::cli::BuildArgs;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use std::fs;

/// Execute the build command.
pub fn execute_build(args: BuildArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let builder = builder_for(config)?;
    let graph = build_graph(&args.input, &builder, formatter)?;

    if let Some(output) = &args.output {
        fs::write(output, serde_json::to_string_pretty(&graph)?)?;
        eprintln!("{}", formatter.success(&format!("Wrote graph to {}", output.display())));
    }

    println!("{}", formatter.format_summary(&graph)?);

    // JSON output already embeds the warnings
    if formatter.format() != OutputFormat::Json && !graph.diagnostics.is_empty() {
        eprintln!("{}", formatter.format_diagnostics(&graph.diagnostics));
    }

    Ok(())
}

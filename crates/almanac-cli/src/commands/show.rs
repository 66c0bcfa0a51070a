//! Show command implementation.

use super::{build_graph, builder_for};
use crate::cli::ShowArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let builder = builder_for(config)?;
    let graph = build_graph(&args.input, &builder, formatter)?;

    let page = graph
        .page(&args.id)
        .ok_or_else(|| CliError::PageNotFound(args.id.clone()))?;

    println!("{}", formatter.format_page(page)?);

    Ok(())
}

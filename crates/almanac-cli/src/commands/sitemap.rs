//! Sitemap command implementation.

use super::{build_graph, builder_for};
use crate::cli::SitemapArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the sitemap command.
pub fn execute_sitemap(args: SitemapArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mut config = config.clone();
    if let Some(base_url) = args.base_url {
        config.graph.base_url = base_url;
    }

    let builder = builder_for(&config)?;
    let graph = build_graph(&args.input, &builder, formatter)?;
    let entries = builder.sitemap(&graph);

    println!("{}", formatter.format_sitemap(&entries)?);

    Ok(())
}

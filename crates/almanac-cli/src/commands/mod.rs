//! Command implementations.

pub mod build;
pub mod show;
pub mod sitemap;

pub use self::build::execute_build;
pub use self::show::execute_show;
pub use self::sitemap::execute_sitemap;

use crate::config::Config;
use crate::error::Result;
use crate::ingest::load_documents;
use crate::output::Formatter;
use almanac_graph::{GraphBuilder, SiteGraph};
use std::path::Path;

/// Load `input`, run the full pipeline, and report rejected records.
fn build_graph(input: &Path, builder: &GraphBuilder, formatter: &Formatter) -> Result<SiteGraph> {
    let report = load_documents(input)?;

    for rejection in &report.rejected {
        eprintln!(
            "{}",
            formatter.error(&format!("Skipped {}: {}", rejection.source, rejection.errors.join("; ")))
        );
    }
    if !report.rejected.is_empty() {
        eprintln!(
            "{}",
            formatter.info(&format!("{} record(s) left out of the build", report.rejected.len()))
        );
    }

    Ok(builder.build(report.documents))
}

fn builder_for(config: &Config) -> Result<GraphBuilder> {
    Ok(GraphBuilder::new(config.graph.clone())?)
}

//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use almanac_domain::{Document, DocumentId};
use almanac_graph::{Diagnostics, SiteGraph, SitemapEntry};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format the build summary of a graph.
    pub fn format_summary(&self, graph: &SiteGraph) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let summary = serde_json::json!({
                    "buildId": graph.build_id.to_string(),
                    "totalPages": graph.total_pages,
                    "indexedPages": graph.index.len(),
                    "statistics": graph.statistics,
                    "latest": graph.latest,
                    "warnings": graph.diagnostics,
                });
                Ok(serde_json::to_string_pretty(&summary)?)
            }
            OutputFormat::Table => {
                let stats = &graph.statistics;
                let rows = [
                    ("Pages", graph.total_pages.to_string()),
                    ("Indexed", graph.index.len().to_string()),
                    (
                        "Projects",
                        format!(
                            "{} ({} active, {} completed)",
                            stats.total_projects, stats.active_projects, stats.completed_projects
                        ),
                    ),
                    ("Milestones", stats.total_milestones.to_string()),
                    ("Experiments", stats.total_experiments.to_string()),
                    ("Insights", stats.total_insights.to_string()),
                    ("Decisions", stats.total_decisions.to_string()),
                    ("Daily notes", stats.total_daily_notes.to_string()),
                    ("Syntheses", stats.total_syntheses.to_string()),
                    ("Warnings", graph.diagnostics.len().to_string()),
                ];

                let mut builder = Builder::default();
                builder.push_record(["Metric", "Value"]);
                for (metric, value) in rows {
                    builder.push_record([metric.to_string(), value]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Quiet => Ok(graph.total_pages.to_string()),
        }
    }

    /// Format one page with its navigation and relationships.
    pub fn format_page(&self, page: &Document) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(page)?),
            OutputFormat::Table => {
                let trail: Vec<&str> = page.breadcrumbs.iter().map(|b| b.title.as_str()).collect();

                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["ID".to_string(), page.id.to_string()]);
                builder.push_record(["Type".to_string(), page.doc_type.to_string()]);
                builder.push_record(["Title".to_string(), page.title.clone()]);
                builder.push_record(["Date".to_string(), page.date.clone()]);
                builder.push_record(["Status".to_string(), page.status.to_string()]);
                builder.push_record(["Breadcrumbs".to_string(), trail.join(" > ")]);

                let forward = [
                    ("Project", page.project_page.as_slice()),
                    ("Experiment", page.experiment_page.as_slice()),
                    ("Parent", page.parent_page.as_slice()),
                    ("Enables", page.enables_pages.as_deref().unwrap_or_default()),
                    ("Related", page.related_pages.as_deref().unwrap_or_default()),
                ];
                for (label, ids) in forward {
                    if !ids.is_empty() {
                        builder.push_record([label.to_string(), join_ids(ids)]);
                    }
                }

                for (kind, ids) in page.linked_from.iter() {
                    builder.push_record([format!("Linked from ({})", kind.as_str()), join_ids(ids)]);
                }

                Ok(self.render(builder))
            }
            OutputFormat::Quiet => Ok(page.id.to_string()),
        }
    }

    /// Format sitemap entries.
    pub fn format_sitemap(&self, entries: &[SitemapEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
            OutputFormat::Table => {
                if entries.is_empty() {
                    return Ok(self.colorize("No pages found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Location", "Last Modified", "Change Freq", "Priority"]);
                for entry in entries {
                    builder.push_record([
                        entry.loc.clone(),
                        entry.lastmod.clone(),
                        entry.changefreq.as_str().to_string(),
                        format!("{:.1}", entry.priority),
                    ]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Quiet => {
                let locs: Vec<&str> = entries.iter().map(|e| e.loc.as_str()).collect();
                Ok(locs.join("\n"))
            }
        }
    }

    /// Format build warnings, one per line.
    pub fn format_diagnostics(&self, diagnostics: &Diagnostics) -> String {
        diagnostics
            .warnings()
            .iter()
            .map(|w| self.warning(&w.to_string()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn join_ids(ids: &[DocumentId]) -> String {
    ids.iter().map(DocumentId::as_str).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_domain::{DocumentType, Links};
    use almanac_graph::GraphBuilder;

    fn graph() -> SiteGraph {
        GraphBuilder::default().build(vec![
            Document::new("proj-a", DocumentType::Project, "Solar", "2024-01-01"),
            Document::new("exp-1", DocumentType::Experiment, "Baseline", "2024-01-02")
                .with_links(Links::to_project("proj-a"))
                .with_raw_content("[gone](ghost)"),
        ])
    }

    #[test]
    fn test_summary_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_summary(&graph()).unwrap();
        assert!(output.contains("Metric"));
        assert!(output.contains("1 (0 active, 0 completed)"));
    }

    #[test]
    fn test_summary_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_summary(&graph()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["totalPages"], 2);
        assert_eq!(value["statistics"]["totalExperiments"], 1);
        assert_eq!(value["warnings"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_page_table_shows_backlinks() {
        let graph = graph();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_page(graph.page("proj-a").unwrap()).unwrap();
        assert!(output.contains("Linked from (experiments)"));
        assert!(output.contains("exp-1"));
        assert!(output.contains("Home > Solar"));
    }

    #[test]
    fn test_page_quiet() {
        let graph = graph();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(formatter.format_page(graph.page("exp-1").unwrap()).unwrap(), "exp-1");
    }

    #[test]
    fn test_sitemap_quiet() {
        let graph = graph();
        let entries = GraphBuilder::default().sitemap(&graph);
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_sitemap(&entries).unwrap();
        assert_eq!(
            output,
            "https://sunriselabs.io/pages/proj-a.html\nhttps://sunriselabs.io/pages/exp-1.html"
        );
    }

    #[test]
    fn test_empty_sitemap() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert!(formatter.format_sitemap(&[]).unwrap().contains("No pages found"));
    }

    #[test]
    fn test_diagnostics_lines() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_diagnostics(&graph().diagnostics);
        assert_eq!(output, "⚠ Could not resolve internal link: ghost (in exp-1)");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("done"), "✓ done");
    }
}

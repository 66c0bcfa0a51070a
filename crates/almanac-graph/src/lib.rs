//! Almanac Graph
//!
//! Turns a flat list of parsed research documents into a navigable graph.
//!
//! # Overview
//!
//! The graph builder is a chain of in-memory stages, each consuming the output
//! of the previous one:
//!
//! ```text
//! documents → DocumentIndex → (TypeGroups ‖ resolve_relationships)
//!           → (Linker, breadcrumbs, Statistics/LatestItems) → SiteGraph
//! ```
//!
//! - **Identity index**: id → document, last writer wins, duplicates reported
//! - **Type groups**: the seven categories, newest first
//! - **Relationships**: resolved forward references plus backlinks by kind
//! - **Internal links**: `[label](doc-id)` rewritten to `/pages/doc-id.html`
//! - **Breadcrumbs**: Home → project → experiment → parent → page
//! - **Statistics**: counts and "latest N" digests for summary pages
//!
//! Integrity problems (duplicate ids, unknown types, unresolved internal links)
//! never fail a build. They are logged through `tracing` and collected in
//! [`Diagnostics`] on the resulting [`SiteGraph`].
//!
//! # Example Usage
//!
//! ```
//! use almanac_domain::{Document, DocumentType, Links};
//! use almanac_graph::GraphBuilder;
//!
//! let pages = vec![
//!     Document::new("proj-a", DocumentType::Project, "Project A", "2024-01-01"),
//!     Document::new("exp-1", DocumentType::Experiment, "Experiment 1", "2024-02-01")
//!         .with_links(Links::to_project("proj-a"))
//!         .with_raw_content("Back to [the project](proj-a)."),
//! ];
//!
//! let graph = GraphBuilder::default_config().build(pages);
//!
//! let experiment = graph.page("exp-1").unwrap();
//! assert_eq!(experiment.project_page.as_ref().unwrap().as_str(), "proj-a");
//! assert_eq!(experiment.raw_content, "Back to [the project](/pages/proj-a.html).");
//!
//! let project = graph.page("proj-a").unwrap();
//! assert_eq!(project.linked_from.experiments.len(), 1);
//! assert!(graph.diagnostics.is_empty());
//! ```

#![warn(missing_docs)]

mod breadcrumbs;
mod builder;
mod config;
mod diagnostics;
mod error;
mod grouping;
mod index;
mod linker;
mod resolver;
mod sitemap;
mod statistics;

pub use breadcrumbs::{assign_breadcrumbs, generate_breadcrumbs};
pub use builder::{GraphBuilder, SiteGraph};
pub use config::GraphConfig;
pub use diagnostics::{Diagnostics, Warning};
pub use error::GraphError;
pub use grouping::TypeGroups;
pub use index::DocumentIndex;
pub use linker::Linker;
pub use resolver::resolve_relationships;
pub use sitemap::{build_sitemap, ChangeFrequency, SitemapEntry};
pub use statistics::{LatestItems, Statistics};

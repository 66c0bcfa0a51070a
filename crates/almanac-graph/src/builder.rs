//! End-to-end graph build

use crate::{
    assign_breadcrumbs, build_sitemap, resolve_relationships, Diagnostics, DocumentIndex,
    GraphConfig, GraphError, LatestItems, Linker, SitemapEntry, Statistics, TypeGroups,
};
use almanac_domain::{BuildId, Document};
use serde::Serialize;

/// Snapshot handed to renderers
///
/// `pages` is the input sequence as received. Decorated documents (resolved
/// references, backlinks, `url`, `breadcrumbs`, rewritten bodies) live in
/// `index`, and `groups` holds copies of those decorated documents.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteGraph {
    /// Identifier of the build that produced this snapshot
    pub build_id: BuildId,
    /// Input documents, in input order
    pub pages: Vec<Document>,
    /// Decorated identity index
    #[serde(rename = "pageIndex")]
    pub index: DocumentIndex,
    /// Documents per type, newest first
    pub groups: TypeGroups,
    /// Counts per type
    pub statistics: Statistics,
    /// Newest documents per type
    pub latest: LatestItems,
    /// Number of input documents
    pub total_pages: usize,
    /// Integrity warnings raised during the build
    pub diagnostics: Diagnostics,
}

impl SiteGraph {
    /// Decorated document by id
    pub fn page(&self, id: &str) -> Option<&Document> {
        self.index.get(id)
    }
}

/// Runs the graph stages in order
///
/// # Examples
///
/// ```
/// use almanac_domain::{Document, DocumentType};
/// use almanac_graph::{GraphBuilder, GraphConfig};
///
/// let builder = GraphBuilder::new(GraphConfig::default()).unwrap();
/// let graph = builder.build(vec![
///     Document::new("p", DocumentType::Project, "P", "2024-01-01"),
/// ]);
/// assert_eq!(graph.total_pages, 1);
/// assert_eq!(graph.page("p").unwrap().url.as_deref(), Some("/pages/p.html"));
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    config: GraphConfig,
    linker: Linker,
}

impl GraphBuilder {
    /// Create a builder, validating `config`
    pub fn new(config: GraphConfig) -> Result<Self, GraphError> {
        config.validate()?;
        let linker = Linker::new(&config);
        Ok(Self { config, linker })
    }

    /// Create a builder with the default site layout
    pub fn default_config() -> Self {
        let config = GraphConfig::default();
        let linker = Linker::new(&config);
        Self { config, linker }
    }

    /// Active configuration
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Linker derived from the configuration
    pub fn linker(&self) -> &Linker {
        &self.linker
    }

    /// Index, group, resolve relationships and compute statistics
    ///
    /// The result has no `url`, `breadcrumbs` or rewritten bodies yet; see
    /// [`GraphBuilder::link`].
    pub fn aggregate(&self, pages: Vec<Document>) -> SiteGraph {
        self.aggregate_as(BuildId::new(), pages)
    }

    fn aggregate_as(&self, build_id: BuildId, pages: Vec<Document>) -> SiteGraph {
        let mut diagnostics = Diagnostics::new();

        let index = DocumentIndex::build(&pages, &mut diagnostics);
        let index = resolve_relationships(&pages, index);
        let groups = TypeGroups::from_index(&pages, &index, &mut diagnostics);
        let statistics = Statistics::calculate(&groups);
        let latest = LatestItems::from_groups(&groups, &self.config);

        tracing::info!("Indexed {} pages", pages.len());
        tracing::info!(
            "Projects: {} ({} active), milestones: {}, insights: {}",
            statistics.total_projects,
            statistics.active_projects,
            statistics.total_milestones,
            statistics.total_insights
        );

        SiteGraph {
            build_id,
            total_pages: pages.len(),
            pages,
            index,
            groups,
            statistics,
            latest,
            diagnostics,
        }
    }

    /// Assign URLs, rewrite internal links, then derive breadcrumbs
    pub fn link(&self, graph: &mut SiteGraph) {
        self.linker
            .process_all_links(&mut graph.index, &mut graph.diagnostics);
        assign_breadcrumbs(&mut graph.index, &self.linker);
        graph.groups.refresh(&graph.pages, &graph.index);
        tracing::info!("Links resolved and breadcrumbs generated");
    }

    /// Run every stage
    pub fn build(&self, pages: Vec<Document>) -> SiteGraph {
        let build_id = BuildId::new();
        let span = tracing::info_span!("build", build_id = %build_id);
        let _guard = span.enter();

        let mut graph = self.aggregate_as(build_id, pages);
        self.link(&mut graph);
        if !graph.diagnostics.is_empty() {
            tracing::warn!("Build finished with {} warning(s)", graph.diagnostics.len());
        }
        graph
    }

    /// Sitemap entries for every indexed page
    pub fn sitemap(&self, graph: &SiteGraph) -> Vec<SitemapEntry> {
        build_sitemap(graph.index.iter(), &self.config.base_url, &self.linker)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::default_config()
    }
}

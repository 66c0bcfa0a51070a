//! Build-time diagnostics
//!
//! Every integrity problem is non-fatal: it is logged at `warn` level and kept
//! here so callers can report or assert on it after the build.

use almanac_domain::DocumentId;
use serde::Serialize;
use std::fmt;

/// A non-fatal integrity problem found while building the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Warning {
    /// Two documents share an id; the later one replaced the earlier one
    DuplicateId {
        /// The shared id
        id: DocumentId,
        /// Source of the document that was replaced
        existing: String,
        /// Source of the document now in the index
        replacement: String,
    },

    /// A document's type is outside the known set; it was left out of all groups
    UnknownType {
        /// Id of the dropped document
        id: DocumentId,
        /// The unrecognized type name
        doc_type: String,
        /// Source of the dropped document
        source: String,
    },

    /// An internal link in a document body names no known document
    UnresolvedLink {
        /// Document whose body holds the link
        page: DocumentId,
        /// The identifier that failed to resolve
        target: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::DuplicateId {
                id,
                existing,
                replacement,
            } => write!(
                f,
                "Duplicate page ID found: {} (existing: {}, new: {})",
                id, existing, replacement
            ),
            Warning::UnknownType {
                id,
                doc_type,
                source,
            } => write!(f, "Unknown page type: {} for {} in {}", doc_type, id, source),
            Warning::UnresolvedLink { page, target } => {
                write!(f, "Could not resolve internal link: {} (in {})", target, page)
            }
        }
    }
}

/// Warnings collected during one build, in the order they were raised
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Log a warning and keep it
    pub fn record(&mut self, warning: Warning) {
        tracing::warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// All warnings, oldest first
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Number of warnings
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Whether the build was clean
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Ids that appeared more than once
    pub fn duplicate_ids(&self) -> impl Iterator<Item = &DocumentId> {
        self.warnings.iter().filter_map(|w| match w {
            Warning::DuplicateId { id, .. } => Some(id),
            _ => None,
        })
    }

    /// Internal link targets that could not be resolved
    pub fn unresolved_links(&self) -> impl Iterator<Item = &str> {
        self.warnings.iter().filter_map(|w| match w {
            Warning::UnresolvedLink { target, .. } => Some(target.as_str()),
            _ => None,
        })
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        if self.warnings.is_empty() {
            return "No warnings".to_string();
        }

        let mut lines = vec![format!("{} warning(s):", self.warnings.len())];
        for warning in &self.warnings {
            lines.push(format!("  - {}", warning));
        }
        lines.join("\n")
    }
}

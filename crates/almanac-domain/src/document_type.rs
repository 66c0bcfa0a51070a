//! Document type module - the fixed semantic categories

use crate::BacklinkKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic category of a document
///
/// The seven known categories form a closed set. Anything else the parser hands
/// over is kept verbatim in [`DocumentType::Other`] so it can be reported and
/// dropped from grouping instead of failing the build.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocumentType {
    /// Top-level research project
    Project,

    /// Project milestone
    Milestone,

    /// Experiment run under a project
    Experiment,

    /// Lab notebook entry
    DailyNote,

    /// Finding worth keeping
    Insight,

    /// Recorded decision and its rationale
    Decision,

    /// Summary of what a project established
    Synthesis,

    /// Any type outside the known set
    Other(String),
}

impl DocumentType {
    /// The known categories, in display order
    pub const KNOWN: [DocumentType; 7] = [
        DocumentType::Project,
        DocumentType::Milestone,
        DocumentType::Experiment,
        DocumentType::DailyNote,
        DocumentType::Insight,
        DocumentType::Decision,
        DocumentType::Synthesis,
    ];

    /// Get the type name as it appears in frontmatter
    pub fn as_str(&self) -> &str {
        match self {
            DocumentType::Project => "project",
            DocumentType::Milestone => "milestone",
            DocumentType::Experiment => "experiment",
            DocumentType::DailyNote => "daily-note",
            DocumentType::Insight => "insight",
            DocumentType::Decision => "decision",
            DocumentType::Synthesis => "synthesis",
            DocumentType::Other(name) => name,
        }
    }

    /// Parse a type name; never fails, unknown names become `Other`
    pub fn parse(s: &str) -> Self {
        match s {
            "project" => DocumentType::Project,
            "milestone" => DocumentType::Milestone,
            "experiment" => DocumentType::Experiment,
            "daily-note" => DocumentType::DailyNote,
            "insight" => DocumentType::Insight,
            "decision" => DocumentType::Decision,
            "synthesis" => DocumentType::Synthesis,
            other => DocumentType::Other(other.to_string()),
        }
    }

    /// Whether this is one of the seven known categories
    pub fn is_known(&self) -> bool {
        !matches!(self, DocumentType::Other(_))
    }

    /// Backlink bucket a document of this type lands in when it declares
    /// `links.project`
    ///
    /// Daily notes, projects and unknown types are not tracked on the project.
    pub fn backlink_kind(&self) -> Option<BacklinkKind> {
        match self {
            DocumentType::Milestone => Some(BacklinkKind::Milestones),
            DocumentType::Experiment => Some(BacklinkKind::Experiments),
            DocumentType::Insight => Some(BacklinkKind::Insights),
            DocumentType::Decision => Some(BacklinkKind::Decisions),
            DocumentType::Synthesis => Some(BacklinkKind::Synthesis),
            DocumentType::Project | DocumentType::DailyNote | DocumentType::Other(_) => None,
        }
    }

    /// Whether frontmatter of this type must declare `links.project`
    pub fn requires_project_link(&self) -> bool {
        matches!(
            self,
            DocumentType::Milestone | DocumentType::Experiment | DocumentType::Synthesis
        )
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for DocumentType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<DocumentType> for String {
    fn from(value: DocumentType) -> Self {
        value.as_str().to_string()
    }
}

//! Links module - declared relationships and the backlinks they produce

use crate::DocumentId;
use serde::{Deserialize, Serialize};

/// Outgoing relationships declared in a document's frontmatter
///
/// Every field is optional; absence means "no relationship". List fields
/// distinguish "not declared" (`None`) from "declared but empty".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    /// Owning project (required for milestones, experiments and syntheses)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<DocumentId>,

    /// Experiment this document belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiment: Option<DocumentId>,

    /// Parent document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<DocumentId>,

    /// Documents this one unblocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enables: Option<Vec<DocumentId>>,

    /// Related documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<Vec<DocumentId>>,
}

impl Links {
    /// Link to a project
    pub fn to_project(project: impl Into<DocumentId>) -> Self {
        Self {
            project: Some(project.into()),
            ..Default::default()
        }
    }

    /// Whether no relationship is declared at all
    pub fn is_empty(&self) -> bool {
        self.project.is_none()
            && self.experiment.is_none()
            && self.parent.is_none()
            && self.enables.is_none()
            && self.related.is_none()
    }
}

/// Bucket of [`LinkedFrom`] a backlink is stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BacklinkKind {
    /// Milestones declaring this project
    Milestones,

    /// Experiments declaring this project
    Experiments,

    /// Insights declaring this project
    Insights,

    /// Decisions declaring this project
    Decisions,

    /// Syntheses declaring this project
    Synthesis,

    /// Any document listing this one in `links.related`
    Related,
}

impl BacklinkKind {
    /// All buckets, in display order
    pub const ALL: [BacklinkKind; 6] = [
        BacklinkKind::Milestones,
        BacklinkKind::Experiments,
        BacklinkKind::Insights,
        BacklinkKind::Decisions,
        BacklinkKind::Synthesis,
        BacklinkKind::Related,
    ];

    /// Bucket name as exposed to renderers
    pub fn as_str(&self) -> &'static str {
        match self {
            BacklinkKind::Milestones => "milestones",
            BacklinkKind::Experiments => "experiments",
            BacklinkKind::Insights => "insights",
            BacklinkKind::Decisions => "decisions",
            BacklinkKind::Synthesis => "synthesis",
            BacklinkKind::Related => "related",
        }
    }
}

/// Backlinks stored on a target document, partitioned by kind
///
/// The six buckets always exist, empty or not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedFrom {
    /// Milestones of this project
    #[serde(default)]
    pub milestones: Vec<DocumentId>,

    /// Experiments of this project
    #[serde(default)]
    pub experiments: Vec<DocumentId>,

    /// Insights of this project
    #[serde(default)]
    pub insights: Vec<DocumentId>,

    /// Decisions of this project
    #[serde(default)]
    pub decisions: Vec<DocumentId>,

    /// Syntheses of this project
    #[serde(default)]
    pub synthesis: Vec<DocumentId>,

    /// Documents declaring this one as related
    #[serde(default)]
    pub related: Vec<DocumentId>,
}

impl LinkedFrom {
    /// Backlinks in one bucket
    pub fn bucket(&self, kind: BacklinkKind) -> &[DocumentId] {
        match kind {
            BacklinkKind::Milestones => &self.milestones,
            BacklinkKind::Experiments => &self.experiments,
            BacklinkKind::Insights => &self.insights,
            BacklinkKind::Decisions => &self.decisions,
            BacklinkKind::Synthesis => &self.synthesis,
            BacklinkKind::Related => &self.related,
        }
    }

    /// Mutable access to one bucket
    pub fn bucket_mut(&mut self, kind: BacklinkKind) -> &mut Vec<DocumentId> {
        match kind {
            BacklinkKind::Milestones => &mut self.milestones,
            BacklinkKind::Experiments => &mut self.experiments,
            BacklinkKind::Insights => &mut self.insights,
            BacklinkKind::Decisions => &mut self.decisions,
            BacklinkKind::Synthesis => &mut self.synthesis,
            BacklinkKind::Related => &mut self.related,
        }
    }

    /// Iterate over non-empty buckets
    pub fn iter(&self) -> impl Iterator<Item = (BacklinkKind, &[DocumentId])> {
        BacklinkKind::ALL
            .into_iter()
            .map(|kind| (kind, self.bucket(kind)))
            .filter(|(_, ids)| !ids.is_empty())
    }

    /// Total backlinks across all buckets
    pub fn total(&self) -> usize {
        BacklinkKind::ALL.iter().map(|kind| self.bucket(*kind).len()).sum()
    }

    /// Whether no backlink has been recorded
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

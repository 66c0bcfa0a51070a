//! Site-wide statistics and "latest" digests
//!
//! Both are pure functions of [`TypeGroups`]; the digests slice the already
//! newest-first groups and never re-sort.

use crate::{GraphConfig, TypeGroups};
use almanac_domain::{Document, DocumentId};
use serde::Serialize;

/// Counts per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// All projects
    pub total_projects: usize,
    /// Projects that are active or in progress
    pub active_projects: usize,
    /// Completed projects
    pub completed_projects: usize,
    /// All milestones
    pub total_milestones: usize,
    /// All experiments
    pub total_experiments: usize,
    /// All insights
    pub total_insights: usize,
    /// All decisions
    pub total_decisions: usize,
    /// All daily notes
    pub total_daily_notes: usize,
    /// All syntheses
    pub total_syntheses: usize,
}

impl Statistics {
    /// Count the grouped documents
    pub fn calculate(groups: &TypeGroups) -> Self {
        Self {
            total_projects: groups.project.len(),
            active_projects: groups.project.iter().filter(|p| p.status.is_active()).count(),
            completed_projects: groups.project.iter().filter(|p| p.status.is_completed()).count(),
            total_milestones: groups.milestone.len(),
            total_experiments: groups.experiment.len(),
            total_insights: groups.insight.len(),
            total_decisions: groups.decision.len(),
            total_daily_notes: groups.daily_note.len(),
            total_syntheses: groups.synthesis.len(),
        }
    }
}

/// Most recent documents per category, for summary pages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestItems {
    /// Newest active, in-progress or completed projects
    pub latest_projects: Vec<DocumentId>,
    /// Newest insights
    pub latest_insights: Vec<DocumentId>,
    /// Newest milestones
    pub latest_milestones: Vec<DocumentId>,
    /// Newest experiments
    pub latest_experiments: Vec<DocumentId>,
}

impl LatestItems {
    /// Take the configured number of newest entries from each group
    pub fn from_groups(groups: &TypeGroups, config: &GraphConfig) -> Self {
        Self {
            latest_projects: take_ids(
                groups
                    .project
                    .iter()
                    .filter(|p| p.status.is_active() || p.status.is_completed()),
                config.latest_projects,
            ),
            latest_insights: take_ids(groups.insight.iter(), config.latest_per_type),
            latest_milestones: take_ids(groups.milestone.iter(), config.latest_per_type),
            latest_experiments: take_ids(groups.experiment.iter(), config.latest_per_type),
        }
    }
}

fn take_ids<'a>(docs: impl Iterator<Item = &'a Document>, limit: usize) -> Vec<DocumentId> {
    docs.take(limit).map(|doc| doc.id.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Diagnostics;
    use almanac_domain::{DocumentType, Status};

    fn project(id: &str, date: &str, status: Status) -> Document {
        Document::new(id, DocumentType::Project, id, date).with_status(status)
    }

    #[test]
    fn test_project_counts() {
        let pages = vec![
            project("a", "2024-01-01", Status::Active),
            project("b", "2024-01-02", Status::InProgress),
            project("c", "2024-01-03", Status::Completed),
            project("d", "2024-01-04", Status::Planned),
            Document::new("n", DocumentType::DailyNote, "n", "2024-01-05"),
            Document::new("s", DocumentType::Synthesis, "s", "2024-01-05"),
        ];
        let groups = TypeGroups::from_documents(&pages, &mut Diagnostics::new());
        let stats = Statistics::calculate(&groups);

        assert_eq!(stats.total_projects, 4);
        assert_eq!(stats.active_projects, 2);
        assert_eq!(stats.completed_projects, 1);
        assert_eq!(stats.total_daily_notes, 1);
        assert_eq!(stats.total_syntheses, 1);
        assert_eq!(stats.total_insights, 0);
    }

    #[test]
    fn test_latest_projects_filter_and_limit() {
        let mut pages: Vec<Document> = (0..12)
            .map(|i| project(&format!("p{:02}", i), &format!("2024-01-{:02}", i + 1), Status::Active))
            .collect();
        pages.push(project("planned", "2024-12-31", Status::Planned));
        pages.push(project("paused", "2024-12-30", Status::Paused));

        let groups = TypeGroups::from_documents(&pages, &mut Diagnostics::new());
        let latest = LatestItems::from_groups(&groups, &GraphConfig::default());

        assert_eq!(latest.latest_projects.len(), 10);
        assert_eq!(latest.latest_projects[0].as_str(), "p11");
        assert!(!latest.latest_projects.contains(&DocumentId::from("planned")));
        assert!(!latest.latest_projects.contains(&DocumentId::from("paused")));
    }

    #[test]
    fn test_latest_per_type_limit() {
        let pages: Vec<Document> = (0..9)
            .map(|i| Document::new(format!("i{}", i), DocumentType::Insight, "i", format!("2024-02-0{}", i + 1)))
            .collect();
        let groups = TypeGroups::from_documents(&pages, &mut Diagnostics::new());
        let config = GraphConfig {
            latest_per_type: 3,
            ..Default::default()
        };
        let latest = LatestItems::from_groups(&groups, &config);

        let ids: Vec<&str> = latest.latest_insights.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["i8", "i7", "i6"]);
        assert!(latest.latest_milestones.is_empty());
    }
}

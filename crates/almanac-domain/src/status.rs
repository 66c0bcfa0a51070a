//! Status module - lifecycle of a research document

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Not started yet
    Planned,

    /// Being worked on
    Active,

    /// Being worked on (alternate spelling used by some labs)
    InProgress,

    /// On hold
    Paused,

    /// Finished
    Completed,

    /// Stopped without finishing
    Abandoned,
}

impl Status {
    /// All statuses accepted in frontmatter
    pub const ALL: [Status; 6] = [
        Status::Planned,
        Status::Active,
        Status::InProgress,
        Status::Paused,
        Status::Completed,
        Status::Abandoned,
    ];

    /// Get the status name as it appears in frontmatter
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Planned => "planned",
            Status::Active => "active",
            Status::InProgress => "in-progress",
            Status::Paused => "paused",
            Status::Completed => "completed",
            Status::Abandoned => "abandoned",
        }
    }

    /// Parse a status from its frontmatter name
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// Active or in progress
    pub fn is_active(&self) -> bool {
        matches!(self, Status::Active | Status::InProgress)
    }

    /// Completed
    pub fn is_completed(&self) -> bool {
        matches!(self, Status::Completed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid status: {}", s))
    }
}

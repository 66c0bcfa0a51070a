//! Build identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one graph build, based on UUIDv7
///
/// UUIDv7 sorts chronologically, so diagnostics from successive builds order
/// naturally in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildId(uuid::Uuid);

impl BuildId {
    /// Generate a new build id
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> uuid::Uuid {
        self.0
    }
}

impl Default for BuildId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_ids_are_chronological() {
        let first = BuildId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = BuildId::new();

        assert!(first < second, "Earlier build id should sort first");
    }

    #[test]
    fn test_build_id_display_is_uuid() {
        assert_eq!(BuildId::new().to_string().len(), 36);
    }
}

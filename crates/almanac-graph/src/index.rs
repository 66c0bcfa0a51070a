//! Identity index: the canonical id → document mapping

use crate::{Diagnostics, Warning};
use almanac_domain::{Document, DocumentId};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// One-to-one mapping from document id to document
///
/// Documents are stored in slots ordered by the first appearance of their id in
/// the input sequence, so iteration is deterministic. When an id repeats, the
/// later document replaces the earlier one in its slot (last writer wins).
///
/// The index is built once per run and then decorated in place by the
/// relationship resolver, the linker and the breadcrumb builder; each stage
/// takes it by exclusive reference or by value.
#[derive(Debug, Clone, Default)]
pub struct DocumentIndex {
    documents: Vec<Document>,
    /// Input position of the document occupying each slot
    positions: Vec<usize>,
    slots: HashMap<DocumentId, usize>,
}

impl DocumentIndex {
    /// Index an ordered document sequence
    ///
    /// Duplicate ids are recorded as [`Warning::DuplicateId`] naming both
    /// source locations; the later document wins.
    pub fn build(pages: &[Document], diagnostics: &mut Diagnostics) -> Self {
        let mut index = Self::default();

        for (position, page) in pages.iter().enumerate() {
            match index.slots.get(&page.id) {
                Some(&slot) => {
                    diagnostics.record(Warning::DuplicateId {
                        id: page.id.clone(),
                        existing: index.documents[slot].source_location().to_string(),
                        replacement: page.source_location().to_string(),
                    });
                    index.documents[slot] = page.clone();
                    index.positions[slot] = position;
                }
                None => {
                    index.slots.insert(page.id.clone(), index.documents.len());
                    index.documents.push(page.clone());
                    index.positions.push(position);
                }
            }
        }

        tracing::debug!("Indexed {} unique ids from {} pages", index.len(), pages.len());
        index
    }

    /// Look up a document by id
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.slots.get(id).map(|&slot| &self.documents[slot])
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Document> {
        match self.slots.get(id) {
            Some(&slot) => Some(&mut self.documents[slot]),
            None => None,
        }
    }

    /// Whether an id is present
    pub fn contains(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    /// Whether the document at `position` of the input sequence is the one the
    /// index kept for `id`
    pub fn is_canonical(&self, id: &str, position: usize) -> bool {
        self.slots
            .get(id)
            .is_some_and(|&slot| self.positions[slot] == position)
    }

    /// Number of unique ids
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterate over documents in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Document> {
        self.documents.iter_mut()
    }

    /// Iterate over ids in first-appearance order
    pub fn ids(&self) -> impl Iterator<Item = &DocumentId> {
        self.documents.iter().map(|doc| &doc.id)
    }
}

impl Serialize for DocumentIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.documents.len()))?;
        for doc in &self.documents {
            map.serialize_entry(&doc.id, doc)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_domain::DocumentType;

    fn doc(id: &str, title: &str, path: &str) -> Document {
        Document::new(id, DocumentType::Insight, title, "2024-01-01").with_file_path(path)
    }

    #[test]
    fn test_unique_ids() {
        let pages = vec![doc("a", "A", "a.md"), doc("b", "B", "b.md")];
        let mut diagnostics = Diagnostics::new();
        let index = DocumentIndex::build(&pages, &mut diagnostics);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("a").unwrap().title, "A");
        assert!(index.contains("b"));
        assert!(!index.contains("c"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_last_writer_wins() {
        let pages = vec![
            doc("a", "First", "repo1/a.md"),
            doc("b", "B", "b.md"),
            doc("a", "Second", "repo2/a.md"),
        ];
        let mut diagnostics = Diagnostics::new();
        let index = DocumentIndex::build(&pages, &mut diagnostics);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("a").unwrap().title, "Second");
        assert_eq!(
            diagnostics.warnings(),
            &[Warning::DuplicateId {
                id: DocumentId::from("a"),
                existing: "repo1/a.md".to_string(),
                replacement: "repo2/a.md".to_string(),
            }]
        );
    }

    #[test]
    fn test_slot_order_follows_first_appearance() {
        let pages = vec![doc("a", "1", "1"), doc("b", "2", "2"), doc("a", "3", "3")];
        let index = DocumentIndex::build(&pages, &mut Diagnostics::new());

        let ids: Vec<&str> = index.ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_is_canonical() {
        let pages = vec![doc("a", "1", "1"), doc("a", "2", "2")];
        let index = DocumentIndex::build(&pages, &mut Diagnostics::new());

        assert!(!index.is_canonical("a", 0));
        assert!(index.is_canonical("a", 1));
        assert!(!index.is_canonical("missing", 0));
    }

    #[test]
    fn test_serializes_as_map() {
        let pages = vec![doc("a", "A", "a.md")];
        let index = DocumentIndex::build(&pages, &mut Diagnostics::new());
        let json = serde_json::to_value(&index).unwrap();

        assert_eq!(json["a"]["title"], "A");
    }
}

//! Type grouping: one newest-first bucket per known document type

use crate::{Diagnostics, DocumentIndex, Warning};
use almanac_domain::{Document, DocumentType};
use serde::Serialize;

/// Documents partitioned by type, each bucket sorted by date descending
///
/// Sorting is stable: documents sharing a date keep their input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TypeGroups {
    /// Projects
    pub project: Vec<Document>,
    /// Milestones
    pub milestone: Vec<Document>,
    /// Experiments
    pub experiment: Vec<Document>,
    /// Daily notes
    #[serde(rename = "daily-note")]
    pub daily_note: Vec<Document>,
    /// Insights
    pub insight: Vec<Document>,
    /// Decisions
    pub decision: Vec<Document>,
    /// Syntheses
    pub synthesis: Vec<Document>,
}

impl TypeGroups {
    /// Group a document sequence by type
    ///
    /// Documents of an unknown type are dropped and reported as
    /// [`Warning::UnknownType`].
    pub fn from_documents(pages: &[Document], diagnostics: &mut Diagnostics) -> Self {
        Self::collect(pages.iter().cloned(), Some(diagnostics))
    }

    /// Group `pages`, taking each document's decorated copy from `index`
    ///
    /// A document that won its id in the index is replaced by the indexed
    /// version; shadowed duplicates are grouped as received. Unknown types are
    /// reported as in [`TypeGroups::from_documents`].
    pub fn from_index(pages: &[Document], index: &DocumentIndex, diagnostics: &mut Diagnostics) -> Self {
        Self::collect(decorated(pages, index), Some(diagnostics))
    }

    /// Replace every grouped document with its current indexed version
    ///
    /// Grouping and order are unchanged; no warnings are raised again.
    pub fn refresh(&mut self, pages: &[Document], index: &DocumentIndex) {
        *self = Self::collect(decorated(pages, index), None);
    }

    fn collect(pages: impl Iterator<Item = Document>, mut diagnostics: Option<&mut Diagnostics>) -> Self {
        let mut groups = Self::default();

        for page in pages {
            match groups.bucket_mut(&page.doc_type) {
                Some(bucket) => bucket.push(page),
                None => {
                    if let Some(diagnostics) = diagnostics.as_deref_mut() {
                        diagnostics.record(Warning::UnknownType {
                            id: page.id.clone(),
                            doc_type: page.doc_type.as_str().to_string(),
                            source: page.source_location().to_string(),
                        });
                    }
                }
            }
        }

        for ty in DocumentType::KNOWN {
            if let Some(bucket) = groups.bucket_mut(&ty) {
                // `sort_by` is stable; same-day documents keep input order
                bucket.sort_by(|a, b| b.date.cmp(&a.date));
            }
        }

        groups
    }

    /// Documents of one type, newest first; empty for unknown types
    pub fn get(&self, doc_type: &DocumentType) -> &[Document] {
        match doc_type {
            DocumentType::Project => &self.project,
            DocumentType::Milestone => &self.milestone,
            DocumentType::Experiment => &self.experiment,
            DocumentType::DailyNote => &self.daily_note,
            DocumentType::Insight => &self.insight,
            DocumentType::Decision => &self.decision,
            DocumentType::Synthesis => &self.synthesis,
            DocumentType::Other(_) => &[],
        }
    }

    fn bucket_mut(&mut self, doc_type: &DocumentType) -> Option<&mut Vec<Document>> {
        match doc_type {
            DocumentType::Project => Some(&mut self.project),
            DocumentType::Milestone => Some(&mut self.milestone),
            DocumentType::Experiment => Some(&mut self.experiment),
            DocumentType::DailyNote => Some(&mut self.daily_note),
            DocumentType::Insight => Some(&mut self.insight),
            DocumentType::Decision => Some(&mut self.decision),
            DocumentType::Synthesis => Some(&mut self.synthesis),
            DocumentType::Other(_) => None,
        }
    }

    /// Iterate over all seven buckets in display order
    pub fn iter(&self) -> impl Iterator<Item = (DocumentType, &[Document])> {
        DocumentType::KNOWN.into_iter().map(move |ty| {
            let docs = self.get(&ty);
            (ty, docs)
        })
    }

    /// Number of grouped documents
    pub fn total(&self) -> usize {
        self.iter().map(|(_, docs)| docs.len()).sum()
    }
}

fn decorated<'a>(pages: &'a [Document], index: &'a DocumentIndex) -> impl Iterator<Item = Document> + 'a {
    pages.iter().enumerate().map(move |(position, page)| {
        index
            .get(page.id.as_str())
            .filter(|_| index.is_canonical(page.id.as_str(), position))
            .unwrap_or(page)
            .clone()
    })
}

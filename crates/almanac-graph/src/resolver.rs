//! Relationship resolution: forward references and backlinks
//!
//! Two independent passes over the documents the index kept:
//!
//! - **Forward**: each declared link field is looked up in the index and the
//!   resolved ids are attached (`project_page`, `enables_pages`, ...).
//!   Unresolved single links stay unset; unresolved list entries are dropped.
//! - **Backward**: each declared `links.project` that resolves adds the source
//!   to the project's bucket for the source's type, and each resolved
//!   `links.related` entry adds the source to the target's `related` bucket.
//!
//! Both passes read the *declared* links, so their order does not matter.

use crate::DocumentIndex;
use almanac_domain::{Document, DocumentId, LinkedFrom, Links};

/// Decorate every indexed document with resolved references and backlinks
///
/// `pages` is the sequence the index was built from. Shadowed duplicates (an
/// earlier document whose id was later reused) contribute no edges.
pub fn resolve_relationships(pages: &[Document], mut index: DocumentIndex) -> DocumentIndex {
    // Renderers rely on all six buckets existing
    for doc in index.iter_mut() {
        doc.linked_from = LinkedFrom::default();
    }

    let canonical: Vec<&Document> = pages
        .iter()
        .enumerate()
        .filter(|(position, page)| index.is_canonical(page.id.as_str(), *position))
        .map(|(_, page)| page)
        .collect();

    for page in &canonical {
        let forward = ForwardLinks::resolve(&page.id, &page.links, &index);
        if let Some(doc) = index.get_mut(page.id.as_str()) {
            forward.apply(doc);
        }
    }

    let mut backlinks = 0usize;
    for page in &canonical {
        backlinks += record_backlinks(page, &mut index);
    }

    tracing::info!(
        "Resolved relationships for {} pages ({} backlinks)",
        canonical.len(),
        backlinks
    );
    index
}

/// Resolved form of one document's [`Links`]
#[derive(Debug, Default)]
struct ForwardLinks {
    project: Option<DocumentId>,
    experiment: Option<DocumentId>,
    parent: Option<DocumentId>,
    enables: Option<Vec<DocumentId>>,
    related: Option<Vec<DocumentId>>,
}

impl ForwardLinks {
    fn resolve(source: &DocumentId, links: &Links, index: &DocumentIndex) -> Self {
        Self {
            project: resolve_one(source, "project", links.project.as_ref(), index),
            experiment: resolve_one(source, "experiment", links.experiment.as_ref(), index),
            parent: resolve_one(source, "parent", links.parent.as_ref(), index),
            enables: resolve_many(source, "enables", links.enables.as_deref(), index),
            related: resolve_many(source, "related", links.related.as_deref(), index),
        }
    }

    fn apply(self, doc: &mut Document) {
        doc.project_page = self.project;
        doc.experiment_page = self.experiment;
        doc.parent_page = self.parent;
        doc.enables_pages = self.enables;
        doc.related_pages = self.related;
    }
}

fn resolve_one(
    source: &DocumentId,
    field: &str,
    target: Option<&DocumentId>,
    index: &DocumentIndex,
) -> Option<DocumentId> {
    let target = target?;
    if index.contains(target.as_str()) {
        Some(target.clone())
    } else {
        tracing::debug!("{}: links.{} -> {} not found, left unset", source, field, target);
        None
    }
}

fn resolve_many(
    source: &DocumentId,
    field: &str,
    targets: Option<&[DocumentId]>,
    index: &DocumentIndex,
) -> Option<Vec<DocumentId>> {
    let targets = targets?;
    let resolved = targets
        .iter()
        .filter(|target| {
            let found = index.contains(target.as_str());
            if !found {
                tracing::debug!("{}: links.{} -> {} not found, filtered", source, field, target);
            }
            found
        })
        .cloned()
        .collect();
    Some(resolved)
}

/// Push `page` onto the backlink buckets of every target it declares
fn record_backlinks(page: &Document, index: &mut DocumentIndex) -> usize {
    let mut recorded = 0;

    if let Some(project) = &page.links.project {
        if let Some(kind) = page.doc_type.backlink_kind() {
            if let Some(target) = index.get_mut(project.as_str()) {
                target.linked_from.bucket_mut(kind).push(page.id.clone());
                recorded += 1;
            }
        }
    }

    if let Some(related) = &page.links.related {
        for related_id in related {
            if let Some(target) = index.get_mut(related_id.as_str()) {
                target.linked_from.related.push(page.id.clone());
                recorded += 1;
            }
        }
    }

    recorded
}

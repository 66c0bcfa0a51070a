//! Property tests for graph invariants

use almanac_domain::{BacklinkKind, Document, DocumentId, DocumentType, Links};
use almanac_graph::{generate_breadcrumbs, Diagnostics, GraphBuilder, Linker};
use proptest::prelude::*;
use std::collections::HashMap;

const ID_POOL: usize = 6;

fn doc_type(n: u8) -> DocumentType {
    match n {
        0..=6 => DocumentType::KNOWN[n as usize].clone(),
        _ => DocumentType::Other("memo".to_string()),
    }
}

/// Small corpora over a tiny id pool so duplicates and dangling links are common
fn corpus() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(
        (
            0..ID_POOL,
            0u8..8,
            1u8..=28,
            prop::option::of(0..ID_POOL + 2),
            prop::collection::vec(0..ID_POOL + 2, 0..3),
        ),
        0..16,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(position, (id, ty, day, project, related))| {
                Document::new(
                    format!("d{}", id),
                    doc_type(ty),
                    format!("d{}#{}", id, position),
                    format!("2024-05-{:02}", day),
                )
                .with_links(Links {
                    project: project.map(|p| DocumentId::from(format!("d{}", p))),
                    related: Some(related.into_iter().map(|r| DocumentId::from(format!("d{}", r))).collect()),
                    ..Default::default()
                })
                .with_raw_content(format!("[p](d{}) [q](d{})", id, ID_POOL + 1))
            })
            .collect()
    })
}

proptest! {
    /// Property: one index entry per id, equal to the last document with that id
    #[test]
    fn test_uniqueness(pages in corpus()) {
        let graph = GraphBuilder::default().aggregate(pages.clone());

        let mut last: HashMap<&str, &Document> = HashMap::new();
        for page in &pages {
            last.insert(page.id.as_str(), page);
        }

        prop_assert_eq!(graph.index.len(), last.len());
        for (id, page) in last {
            prop_assert_eq!(&graph.page(id).unwrap().title, &page.title);
        }
    }

    /// Property: every known-type document lands in exactly one bucket
    #[test]
    fn test_grouping_completeness(pages in corpus()) {
        let graph = GraphBuilder::default().aggregate(pages.clone());

        let known: Vec<&Document> = pages.iter().filter(|p| p.doc_type.is_known()).collect();
        prop_assert_eq!(graph.groups.total(), known.len());

        for page in known {
            let hits: usize = graph
                .groups
                .iter()
                .map(|(_, docs)| docs.iter().filter(|d| d.title == page.title).count())
                .sum();
            prop_assert_eq!(hits, 1);
            prop_assert!(graph.groups.get(&page.doc_type).iter().any(|d| d.title == page.title));
        }
    }

    /// Property: dates never increase through a bucket
    #[test]
    fn test_recency_ordering(pages in corpus()) {
        let graph = GraphBuilder::default().aggregate(pages);

        for (_, docs) in graph.groups.iter() {
            for pair in docs.windows(2) {
                prop_assert!(pair[0].date >= pair[1].date);
            }
        }
    }

    /// Property: a resolved project link from a tracked kind yields exactly one
    /// backlink, in the bucket for the source's type
    #[test]
    fn test_backlink_symmetry(pages in corpus()) {
        let graph = GraphBuilder::default().aggregate(pages);

        for source in graph.index.iter() {
            let (Some(project), Some(kind)) = (&source.links.project, source.doc_type.backlink_kind()) else {
                continue;
            };
            let Some(target) = graph.page(project.as_str()) else {
                continue;
            };

            for bucket in BacklinkKind::ALL.into_iter().filter(|k| *k != BacklinkKind::Related) {
                let count = target.linked_from.bucket(bucket).iter().filter(|id| **id == source.id).count();
                prop_assert_eq!(count, usize::from(bucket == kind));
            }
        }
    }

    /// Property: resolving already-resolved content changes nothing
    #[test]
    fn test_link_resolution_idempotent(pages in corpus()) {
        let graph = GraphBuilder::default().build(pages);
        let linker = Linker::default();

        for doc in graph.index.iter() {
            let again = linker.resolve_internal_links(&doc.id, &doc.raw_content, &graph.index, &mut Diagnostics::new());
            prop_assert_eq!(&again, &doc.raw_content);
        }
    }

    /// Property: grouped documents are the decorated indexed copies
    #[test]
    fn test_groups_match_index(pages in corpus()) {
        let graph = GraphBuilder::default().build(pages);

        for (_, docs) in graph.groups.iter() {
            for grouped in docs {
                let indexed = graph.page(grouped.id.as_str()).unwrap();
                if indexed.title == grouped.title {
                    prop_assert_eq!(grouped, indexed);
                }
            }
        }
    }

    /// Property: breadcrumbs are identical across invocations
    #[test]
    fn test_breadcrumb_determinism(pages in corpus()) {
        let graph = GraphBuilder::default().build(pages);
        let linker = Linker::default();

        for doc in graph.index.iter() {
            let first = generate_breadcrumbs(doc, &graph.index, &linker);
            let second = generate_breadcrumbs(doc, &graph.index, &linker);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(&first, &doc.breadcrumbs);
            prop_assert!(first.len() <= 5);
        }
    }
}

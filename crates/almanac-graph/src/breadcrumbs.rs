//! Breadcrumb derivation

use crate::{DocumentIndex, Linker};
use almanac_domain::{Breadcrumb, Document, DocumentId, DocumentType};

/// Navigation trail from the home page to `doc`
///
/// Order is fixed: Home, the resolved project, the resolved experiment (daily
/// notes only), the resolved parent, then `doc` itself marked current. Only one
/// level of each relationship is followed, so parent cycles cannot loop.
pub fn generate_breadcrumbs(doc: &Document, index: &DocumentIndex, linker: &Linker) -> Vec<Breadcrumb> {
    let mut breadcrumbs = vec![Breadcrumb::link("Home", linker.home_url())];

    let experiment = match doc.doc_type {
        DocumentType::DailyNote => doc.experiment_page.as_ref(),
        _ => None,
    };

    for ancestor in [doc.project_page.as_ref(), experiment, doc.parent_page.as_ref()]
        .into_iter()
        .flatten()
    {
        if let Some(crumb) = ancestor_crumb(ancestor, index, linker) {
            breadcrumbs.push(crumb);
        }
    }

    breadcrumbs.push(Breadcrumb::current(&doc.title, url_of(doc, linker)));
    breadcrumbs
}

/// Compute and store breadcrumbs on every indexed document
pub fn assign_breadcrumbs(index: &mut DocumentIndex, linker: &Linker) {
    let trails: Vec<(DocumentId, Vec<Breadcrumb>)> = index
        .iter()
        .map(|doc| (doc.id.clone(), generate_breadcrumbs(doc, index, linker)))
        .collect();

    for (id, trail) in trails {
        if let Some(doc) = index.get_mut(id.as_str()) {
            doc.breadcrumbs = trail;
        }
    }
}

fn ancestor_crumb(id: &DocumentId, index: &DocumentIndex, linker: &Linker) -> Option<Breadcrumb> {
    index
        .get(id.as_str())
        .map(|target| Breadcrumb::link(&target.title, url_of(target, linker)))
}

fn url_of(doc: &Document, linker: &Linker) -> String {
    doc.url.clone().unwrap_or_else(|| linker.page_url(doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{resolve_relationships, Diagnostics};
    use almanac_domain::Links;

    fn resolved(pages: &[Document]) -> DocumentIndex {
        let index = DocumentIndex::build(pages, &mut Diagnostics::new());
        resolve_relationships(pages, index)
    }

    fn titles(trail: &[Breadcrumb]) -> Vec<&str> {
        trail.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_standalone_page() {
        let pages = vec![Document::new("p", DocumentType::Project, "Project P", "2024-01-01")];
        let index = resolved(&pages);
        let trail = generate_breadcrumbs(index.get("p").unwrap(), &index, &Linker::default());

        assert_eq!(
            trail,
            vec![
                Breadcrumb::link("Home", "/index.html"),
                Breadcrumb::current("Project P", "/pages/p.html"),
            ]
        );
    }

    #[test]
    fn test_daily_note_full_trail() {
        let pages = vec![
            Document::new("p", DocumentType::Project, "Project", "2024-01-01"),
            Document::new("e", DocumentType::Experiment, "Experiment", "2024-01-02")
                .with_links(Links::to_project("p")),
            Document::new("parent", DocumentType::DailyNote, "Week", "2024-01-03"),
            Document::new("n", DocumentType::DailyNote, "Note", "2024-01-04").with_links(Links {
                project: Some("p".into()),
                experiment: Some("e".into()),
                parent: Some("parent".into()),
                ..Default::default()
            }),
        ];
        let index = resolved(&pages);
        let trail = generate_breadcrumbs(index.get("n").unwrap(), &index, &Linker::default());

        assert_eq!(titles(&trail), vec!["Home", "Project", "Experiment", "Week", "Note"]);
        assert_eq!(trail[2].url, "/pages/e.html");
        assert!(trail.last().unwrap().current);
        assert!(trail[..4].iter().all(|b| !b.current));
    }

    #[test]
    fn test_experiment_skipped_for_other_types() {
        let pages = vec![
            Document::new("e", DocumentType::Experiment, "Experiment", "2024-01-02"),
            Document::new("i", DocumentType::Insight, "Insight", "2024-01-04")
                .with_links(Links { experiment: Some("e".into()), ..Default::default() }),
        ];
        let index = resolved(&pages);
        let trail = generate_breadcrumbs(index.get("i").unwrap(), &index, &Linker::default());

        assert_eq!(titles(&trail), vec!["Home", "Insight"]);
    }

    #[test]
    fn test_parent_cycle_is_one_level() {
        let pages = vec![
            Document::new("a", DocumentType::Insight, "A", "2024-01-01")
                .with_links(Links { parent: Some("b".into()), ..Default::default() }),
            Document::new("b", DocumentType::Insight, "B", "2024-01-01")
                .with_links(Links { parent: Some("a".into()), ..Default::default() }),
        ];
        let index = resolved(&pages);
        let trail = generate_breadcrumbs(index.get("a").unwrap(), &index, &Linker::default());

        assert_eq!(titles(&trail), vec!["Home", "B", "A"]);
    }

    #[test]
    fn test_assign_breadcrumbs_is_deterministic() {
        let pages = vec![
            Document::new("p", DocumentType::Project, "P", "2024-01-01"),
            Document::new("m", DocumentType::Milestone, "M", "2024-01-02")
                .with_links(Links::to_project("p")),
        ];
        let mut index = resolved(&pages);
        let linker = Linker::default();
        assign_breadcrumbs(&mut index, &linker);
        let first = index.get("m").unwrap().breadcrumbs.clone();
        assign_breadcrumbs(&mut index, &linker);

        assert_eq!(first, index.get("m").unwrap().breadcrumbs);
        assert_eq!(titles(&first), vec!["Home", "P", "M"]);
    }
}

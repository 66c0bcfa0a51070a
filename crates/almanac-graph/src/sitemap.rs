//! Sitemap entries for generated pages

use crate::Linker;
use almanac_domain::{Document, DocumentType};
use serde::Serialize;

/// How often crawlers should revisit a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    /// Pages still being worked on
    Weekly,
    /// Completed pages
    Monthly,
}

impl ChangeFrequency {
    /// Value as written in `sitemap.xml`
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

/// One `<url>` entry of a sitemap
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    /// Absolute page URL
    pub loc: String,
    /// Last modification date (`YYYY-MM-DD`)
    pub lastmod: String,
    /// Revisit hint
    pub changefreq: ChangeFrequency,
    /// Relative priority; projects rank above everything else
    pub priority: f32,
}

/// Build sitemap entries for `documents` under `base_url`
pub fn build_sitemap<'a>(
    documents: impl IntoIterator<Item = &'a Document>,
    base_url: &str,
    linker: &Linker,
) -> Vec<SitemapEntry> {
    let base_url = base_url.trim_end_matches('/');

    documents
        .into_iter()
        .map(|doc| {
            let path = doc.url.clone().unwrap_or_else(|| linker.page_url(doc));
            SitemapEntry {
                loc: format!("{}{}", base_url, path),
                lastmod: doc.date.clone(),
                changefreq: if doc.status.is_completed() {
                    ChangeFrequency::Monthly
                } else {
                    ChangeFrequency::Weekly
                },
                priority: if doc.doc_type == DocumentType::Project { 0.9 } else { 0.7 },
            }
        })
        .collect()
}

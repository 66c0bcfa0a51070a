//! Internal link resolution
//!
//! Document bodies reference each other with markdown links whose target is a
//! bare document id: `[see results](exp-1)`. The linker rewrites those targets
//! to page paths: `[see results](/pages/exp-1.html)`.

use crate::{Diagnostics, DocumentIndex, GraphConfig, Warning};
use almanac_domain::{Document, DocumentId, DocumentType};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `[label](target)` or `[label](target "title")`
static MARKDOWN_LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\[([^\]]+)\]\(([^)\s]+)(?:\s+"([^"]*)")?\)"#).expect("valid link regex")
});

/// Targets starting with one of these are already navigable
const PASSTHROUGH_PREFIXES: [&str; 5] = ["http://", "https://", "/", "#", "mailto:"];

/// Maps documents to page paths and rewrites internal links
#[derive(Debug, Clone)]
pub struct Linker {
    home_id: String,
    home_url: String,
    pages_dir: String,
    page_extension: String,
}

impl Linker {
    /// Create a linker using the URL layout of `config`
    pub fn new(config: &GraphConfig) -> Self {
        Self {
            home_id: config.home_id.clone(),
            home_url: config.home_url.clone(),
            pages_dir: config.pages_dir.trim_end_matches('/').to_string(),
            page_extension: config.page_extension.clone(),
        }
    }

    /// Root path of the site
    pub fn home_url(&self) -> &str {
        &self.home_url
    }

    /// Navigational path of a document
    ///
    /// The home page (by id or by type) maps to the root path; everything else
    /// lives under the pages directory.
    pub fn page_url(&self, doc: &Document) -> String {
        if self.is_home(doc) {
            return self.home_url.clone();
        }
        format!("{}/{}{}", self.pages_dir, doc.id, self.page_extension)
    }

    fn is_home(&self, doc: &Document) -> bool {
        doc.id.as_str() == self.home_id
            || matches!(&doc.doc_type, DocumentType::Other(name) if *name == self.home_id)
    }

    /// Rewrite the internal links of one document body
    ///
    /// Targets that already look like a URL, absolute path, anchor or `mailto:`
    /// are left alone, which makes this idempotent. Unknown ids are left
    /// unchanged and reported as [`Warning::UnresolvedLink`].
    pub fn resolve_internal_links(
        &self,
        page: &DocumentId,
        content: &str,
        index: &DocumentIndex,
        diagnostics: &mut Diagnostics,
    ) -> String {
        if content.is_empty() {
            return String::new();
        }

        MARKDOWN_LINK_RE
            .replace_all(content, |caps: &Captures| {
                let whole = &caps[0];
                let label = &caps[1];
                let target = &caps[2];

                if PASSTHROUGH_PREFIXES.iter().any(|prefix| target.starts_with(prefix)) {
                    return whole.to_string();
                }

                match index.get(target) {
                    Some(target_doc) => {
                        let url = self.page_url(target_doc);
                        match caps.get(3).map(|m| m.as_str()).filter(|t| !t.is_empty()) {
                            Some(title) => format!("[{}]({} \"{}\")", label, url, title),
                            None => format!("[{}]({})", label, url),
                        }
                    }
                    None => {
                        diagnostics.record(Warning::UnresolvedLink {
                            page: page.clone(),
                            target: target.to_string(),
                        });
                        whole.to_string()
                    }
                }
            })
            .into_owned()
    }

    /// Assign `url` to every indexed document and rewrite every body
    pub fn process_all_links(&self, index: &mut DocumentIndex, diagnostics: &mut Diagnostics) {
        let ids: Vec<DocumentId> = index.ids().cloned().collect();

        for id in ids {
            let (url, rewritten) = match index.get(id.as_str()) {
                Some(doc) => (
                    self.page_url(doc),
                    self.resolve_internal_links(&doc.id, &doc.raw_content, index, diagnostics),
                ),
                None => continue,
            };

            if let Some(doc) = index.get_mut(id.as_str()) {
                doc.url = Some(url);
                doc.raw_content = rewritten;
            }
        }
    }
}

impl Default for Linker {
    fn default() -> Self {
        Self::new(&GraphConfig::default())
    }
}

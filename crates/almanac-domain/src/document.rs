//! Document module - the central entity of the research graph

use crate::{Breadcrumb, DocumentType, LinkedFrom, Links, Status};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a document, unique within one build
///
/// No format is enforced here; the parsing stage is responsible for rejecting
/// documents without an id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create a new identifier
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for DocumentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DocumentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A parsed research document
///
/// The first block of fields comes from frontmatter and the markdown body. The
/// second block is derived by the graph builder: resolved references are stored
/// as ids that are guaranteed to be present in the identity index they were
/// resolved against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique identifier
    pub id: DocumentId,

    /// Semantic category
    #[serde(rename = "type")]
    pub doc_type: DocumentType,

    /// Human readable title
    pub title: String,

    /// Calendar date, normalized to `YYYY-MM-DD`
    pub date: String,

    /// Lifecycle status
    pub status: Status,

    /// Owning lab
    pub lab: String,

    /// Authors, in byline order
    pub authors: Vec<String>,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Declared outgoing relationships
    #[serde(default)]
    pub links: Links,

    /// Markdown source of the body
    #[serde(default)]
    pub raw_content: String,

    /// Rendered body
    #[serde(default)]
    pub content: String,

    /// Where the document was read from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    /// File name component of `file_path`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// Navigational path of the rendered page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Resolved `links.project`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_page: Option<DocumentId>,

    /// Resolved `links.experiment`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiment_page: Option<DocumentId>,

    /// Resolved `links.parent`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_page: Option<DocumentId>,

    /// Resolved `links.enables`, unresolved ids filtered out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enables_pages: Option<Vec<DocumentId>>,

    /// Resolved `links.related`, unresolved ids filtered out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_pages: Option<Vec<DocumentId>>,

    /// Backlinks from documents that reference this one
    #[serde(default)]
    pub linked_from: LinkedFrom,

    /// Ancestry trail from the home page to this document
    #[serde(default)]
    pub breadcrumbs: Vec<Breadcrumb>,
}

impl Document {
    /// Create a document with the given identity and defaults for everything else
    ///
    /// # Examples
    ///
    /// ```
    /// use almanac_domain::{Document, DocumentType, Status};
    ///
    /// let doc = Document::new("proj-a", DocumentType::Project, "Project A", "2024-03-01");
    /// assert_eq!(doc.id.as_str(), "proj-a");
    /// assert_eq!(doc.status, Status::Planned);
    /// assert!(doc.linked_from.is_empty());
    /// ```
    pub fn new(
        id: impl Into<DocumentId>,
        doc_type: DocumentType,
        title: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            doc_type,
            title: title.into(),
            date: date.into(),
            status: Status::Planned,
            lab: String::new(),
            authors: Vec::new(),
            tags: Vec::new(),
            links: Links::default(),
            raw_content: String::new(),
            content: String::new(),
            file_path: None,
            file_name: None,
            url: None,
            project_page: None,
            experiment_page: None,
            parent_page: None,
            enables_pages: None,
            related_pages: None,
            linked_from: LinkedFrom::default(),
            breadcrumbs: Vec::new(),
        }
    }

    /// Set the status
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Set the declared links
    pub fn with_links(mut self, links: Links) -> Self {
        self.links = links;
        self
    }

    /// Set the markdown body
    pub fn with_raw_content(mut self, raw_content: impl Into<String>) -> Self {
        self.raw_content = raw_content.into();
        self
    }

    /// Set the source location
    pub fn with_file_path(mut self, file_path: impl Into<String>) -> Self {
        let file_path = file_path.into();
        self.file_name = file_path.rsplit('/').next().map(str::to_string);
        self.file_path = Some(file_path);
        self
    }

    /// Source location for diagnostics, `<unknown>` when the parser gave none
    pub fn source_location(&self) -> &str {
        self.file_path.as_deref().unwrap_or("<unknown>")
    }
}

//! Almanac Domain Layer
//!
//! This crate defines the document model shared by the graph builder and the
//! command-line front end. It contains value types only: no I/O, no logging and
//! no graph algorithms.
//!
//! ## Key Concepts
//!
//! - **Document**: One typed research note (project, milestone, experiment, ...)
//!   with frontmatter metadata and a free-text body
//! - **Links**: Outgoing relationships a document *declares* in its frontmatter
//! - **Linked-from**: Backlinks recorded on a target, partitioned by kind
//! - **Breadcrumb**: One entry of a page's ancestry trail
//! - **Build ID**: Identifier of a single graph build run
//!
//! Derived fields on [`Document`] (`url`, `project_page`, `linked_from`, ...) are
//! empty when a document comes out of the parser and are filled in by
//! `almanac-graph`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod breadcrumb;
pub mod build;
pub mod document;
pub mod document_type;
pub mod links;
pub mod status;

// Re-exports for convenience
pub use breadcrumb::Breadcrumb;
pub use build::BuildId;
pub use document::{Document, DocumentId};
pub use document_type::DocumentType;
pub use links::{BacklinkKind, LinkedFrom, Links};
pub use status::Status;

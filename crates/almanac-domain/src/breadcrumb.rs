//! Breadcrumb module

use serde::{Deserialize, Serialize};

/// One entry of a page's navigation trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// Link text
    pub title: String,

    /// Navigational path
    pub url: String,

    /// Marks the terminal entry (the page being viewed)
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub current: bool,
}

impl Breadcrumb {
    /// Ancestor entry
    pub fn link(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            current: false,
        }
    }

    /// Terminal entry for the current page
    pub fn current(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            current: true,
        }
    }
}

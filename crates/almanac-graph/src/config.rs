//! Configuration for the graph builder
//!
//! Covers the URL layout of generated pages and the size of the "latest" digests.

use crate::GraphError;
use serde::{Deserialize, Serialize};

/// Configuration for [`GraphBuilder`](crate::GraphBuilder)
///
/// # Examples
///
/// ```
/// use almanac_graph::GraphConfig;
///
/// let config = GraphConfig::default();
/// assert_eq!(config.home_url, "/index.html");
/// assert_eq!(config.pages_dir, "/pages");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Id (or type) marking the site's home page
    pub home_id: String,

    /// Root path the home page resolves to
    pub home_url: String,

    /// Directory every other page lives under
    pub pages_dir: String,

    /// File extension of generated pages, including the dot
    pub page_extension: String,

    /// Absolute site URL used for sitemap entries
    pub base_url: String,

    /// How many projects the "latest" digest keeps
    pub latest_projects: usize,

    /// How many insights, milestones and experiments the "latest" digest keeps
    pub latest_per_type: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            home_id: "index".to_string(),
            home_url: "/index.html".to_string(),
            pages_dir: "/pages".to_string(),
            page_extension: ".html".to_string(),
            base_url: "https://sunriselabs.io".to_string(),
            latest_projects: 10,
            latest_per_type: 6,
        }
    }
}

impl GraphConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.home_id.is_empty() {
            return Err(GraphError::Config("home_id must not be empty".to_string()));
        }
        if !self.home_url.starts_with('/') {
            return Err(GraphError::Config(format!(
                "home_url must be an absolute path, got '{}'",
                self.home_url
            )));
        }
        if !self.pages_dir.starts_with('/') {
            return Err(GraphError::Config(format!(
                "pages_dir must be an absolute path, got '{}'",
                self.pages_dir
            )));
        }
        if !self.page_extension.is_empty() && !self.page_extension.starts_with('.') {
            return Err(GraphError::Config(format!(
                "page_extension must start with '.', got '{}'",
                self.page_extension
            )));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(GraphError::Config(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, GraphError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, GraphError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

//! Site configuration (_config.yml)

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::Author;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    /// Heading of the listing page
    pub title: String,
    pub language: String,
    pub url: String,
    pub root: String,

    // Listing
    /// Route segment the listing and its post links live under
    pub blog_dir: String,
    /// Number of tags shown per row
    pub tag_limit: usize,
    pub empty_message: String,

    // Directory
    pub posts_dir: String,
    pub public_dir: String,

    // Writing
    /// Author written into posts created with `new`
    pub author: Author,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            language: "en".to_string(),
            url: "http://example.com".to_string(),
            root: "/".to_string(),

            blog_dir: "blog".to_string(),
            tag_limit: 4,
            empty_message: "There are no blog posts yet.".to_string(),

            posts_dir: "posts".to_string(),
            public_dir: "public".to_string(),

            author: Author {
                name: "John Doe".to_string(),
                avatar: "/avatar.png".to_string(),
            },

            extra: IndexMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Write configuration to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path.as_ref(), content)?;
        Ok(())
    }
}

//! Post model

use serde::{Deserialize, Serialize};

use super::frontmatter::{FrontMatter, FrontMatterError};

/// A blog post loaded from a markdown file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Parsed front-matter
    pub data: FrontMatter,

    /// Raw markdown content after the front-matter block
    pub content: String,

    /// File name relative to the posts directory, unique per post
    #[serde(rename = "filePath")]
    pub file_path: String,
}

impl Post {
    /// Parse a post from the raw text of its source file
    pub fn parse(file_path: impl Into<String>, source: &str) -> Result<Self, FrontMatterError> {
        let (data, content) = FrontMatter::parse(source)?;
        Ok(Self {
            data,
            content: content.to_string(),
            file_path: file_path.into(),
        })
    }

    pub fn title(&self) -> &str {
        &self.data.title
    }

    pub fn is_pinned(&self) -> bool {
        self.data.is_pinned()
    }

    /// Render the post back to source text (front-matter block followed by body)
    pub fn to_source(&self) -> Result<String, FrontMatterError> {
        let mut out = self.data.to_block()?;
        out.push_str(&self.content);
        Ok(out)
    }
}

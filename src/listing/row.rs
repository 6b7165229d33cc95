//! Display rows of the listing page

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::post_href;

/// Thumbnail shown at the end of a row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThumbnailView {
    pub src: String,
    pub alt: String,
}

/// One navigable entry of the listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostRow {
    /// Stable identity of the row (the post's file path)
    pub key: String,
    pub href: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub author_name: String,
    pub author_avatar: String,
    /// First `tag_limit` tags of the post
    pub tags: Vec<String>,
    pub thumbnail: Option<ThumbnailView>,
    pub pinned: bool,
}

impl PostRow {
    pub fn from_post(config: &SiteConfig, post: &Post) -> Self {
        let data = &post.data;

        let thumbnail = data.thumbnail.as_ref().and_then(|thumb| {
            let src = thumb.large.as_ref()?;
            let alt = thumb
                .alt
                .as_deref()
                .filter(|alt| !alt.is_empty())
                .unwrap_or(&data.title);
            Some(ThumbnailView {
                src: src.clone(),
                alt: alt.to_string(),
            })
        });

        Self {
            key: post.file_path.clone(),
            href: post_href(config, &post.file_path),
            title: data.title.clone(),
            description: data.description.clone(),
            date: data.date.clone(),
            author_name: data.author.name.clone(),
            author_avatar: data.author.avatar.clone(),
            tags: data.tags.iter().take(config.tag_limit).cloned().collect(),
            thumbnail,
            pinned: post.is_pinned(),
        }
    }
}

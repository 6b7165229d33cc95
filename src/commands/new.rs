//! Create a new post

use anyhow::Result;
use indexmap::IndexMap;
use std::fs;
use std::path::PathBuf;

use crate::content::{FrontMatter, Post};
use crate::Blog;

/// Front-matter values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub pinned: bool,
    /// File name without extension; defaults to the slugified title
    pub path: Option<String>,
}

/// Write a new post into the posts directory and return its path
pub fn create_post(blog: &Blog, new_post: NewPost) -> Result<PathBuf> {
    let now = chrono::Local::now();

    fs::create_dir_all(&blog.posts_dir)?;

    let stem = new_post
        .path
        .clone()
        .unwrap_or_else(|| slug::slugify(&new_post.title));
    if stem.is_empty() {
        anyhow::bail!("Cannot derive a file name from title {:?}", new_post.title);
    }

    let file_name = format!("{}.md", stem);
    let file_path = blog.posts_dir.join(&file_name);

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let post = Post {
        data: FrontMatter {
            title: new_post.title,
            description: new_post.description,
            date: now.format("%Y-%m-%d").to_string(),
            thumbnail: None,
            author: blog.config.author.clone(),
            tags: new_post.tags,
            pinned: new_post.pinned.then_some(true),
            extra: IndexMap::new(),
        },
        content: String::new(),
        file_path: file_name,
    };

    fs::write(&file_path, post.to_source()?)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

//! Initialize a new blog

use anyhow::Result;
use std::fs;
use std::path::Path;

use super::new::{create_post, NewPost};
use crate::config::SiteConfig;
use crate::Blog;

/// Initialize a new blog in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("Already initialized: {:?}", config_path);
    }

    fs::create_dir_all(target_dir)?;

    let config = SiteConfig::default();
    config.save(&config_path)?;

    let blog = Blog::with_config(target_dir.to_path_buf(), config);
    fs::create_dir_all(&blog.posts_dir)?;

    create_post(
        &blog,
        NewPost {
            title: "Welcome".to_string(),
            description: "This post is pinned to the top of the listing.".to_string(),
            tags: vec!["meta".to_string()],
            pinned: true,
            path: Some("welcome".to_string()),
        },
    )?;

    tracing::info!("Initialized blog in {:?}", target_dir);
    Ok(())
}

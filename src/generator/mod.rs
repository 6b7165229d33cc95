//! Generator module - writes the listing page using built-in Tera templates

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::Post;
use crate::listing::BlogIndex;
use crate::templates::TemplateRenderer;
use crate::Blog;

/// Static listing generator
pub struct Generator {
    blog: Blog,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Result<Self> {
        Ok(Self {
            blog: blog.clone(),
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Directory the listing is written to
    pub fn output_dir(&self) -> PathBuf {
        self.blog
            .public_dir
            .join(self.blog.config.blog_dir.trim_matches('/'))
    }

    /// Render the listing and its page-props JSON.
    ///
    /// Both files are rendered and staged before either replaces the
    /// previous output.
    pub fn generate(&self, posts: &mut [Post]) -> Result<BlogIndex> {
        let index = BlogIndex::build(&self.blog.config, posts);
        let html = self.renderer.render_index(&self.blog.config, &index)?;
        let props = serde_json::to_string_pretty(&serde_json::json!({ "posts": &*posts }))?;

        let output_dir = self.output_dir();
        fs::create_dir_all(&output_dir)?;
        write_staged(&[
            (output_dir.join("index.html"), html),
            (output_dir.join("posts.json"), props),
        ])?;

        tracing::debug!("Wrote listing to {:?}", output_dir);
        Ok(index)
    }
}

/// Write every file to a `.tmp` sibling, then rename them into place
fn write_staged(files: &[(PathBuf, String)]) -> Result<()> {
    let staged: Vec<(PathBuf, &PathBuf)> = files
        .iter()
        .map(|(path, _)| (staging_path(path), path))
        .collect();

    for ((tmp, _), (_, content)) in staged.iter().zip(files) {
        if let Err(e) = fs::write(tmp, content) {
            for (tmp, _) in &staged {
                let _ = fs::remove_file(tmp);
            }
            return Err(e.into());
        }
    }

    for (tmp, path) in &staged {
        fs::rename(tmp, path)?;
    }

    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

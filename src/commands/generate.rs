//! Generate the static listing page

use anyhow::Result;

use crate::generator::Generator;
use crate::Blog;

/// Load all posts and write the listing page
pub fn run(blog: &Blog) -> Result<()> {
    let start = std::time::Instant::now();

    // Any unreadable or malformed post aborts before output is touched
    let mut posts = blog.load_posts()?;
    tracing::info!("Loaded {} posts from {:?}", posts.len(), blog.posts_dir);

    let generator = Generator::new(blog)?;
    let index = generator.generate(&mut posts)?;

    if index.is_empty() {
        tracing::info!("No posts found, rendered the empty listing");
    }

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} rows in {:.2}s",
        index.len(),
        duration.as_secs_f64()
    );

    Ok(())
}

//! Built-in listing templates using Tera template engine
//!
//! Templates are embedded directly in the binary.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::helpers::{blog_index_path, full_url_for, generator_name, html_escape};
use crate::listing::BlogIndex;

/// Template renderer with the embedded listing templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Escape text but keep `/` intact in URLs
        tera.set_escape_fn(html_escape);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("blog/layout.html")),
            ("index.html", include_str!("blog/index.html")),
            (
                "partials/post_row.html",
                include_str!("blog/partials/post_row.html"),
            ),
            (
                "partials/pin_icon.html",
                include_str!("blog/partials/pin_icon.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render the listing page
    pub fn render_index(&self, config: &SiteConfig, index: &BlogIndex) -> Result<String> {
        let mut context = Context::new();
        context.insert("config", &ConfigData::from(config));
        context.insert("rows", &index.rows);
        context.insert("is_empty", &index.is_empty());
        context.insert("generator", &generator_name());
        context.insert(
            "canonical_url",
            &full_url_for(config, &blog_index_path(config)),
        );
        self.render("index.html", &context)
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub language: String,
    pub url: String,
    pub root: String,
    pub empty_message: String,
}

impl From<&SiteConfig> for ConfigData {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            language: config.language.clone(),
            url: config.url.clone(),
            root: config.root.clone(),
            empty_message: config.empty_message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Post;

    fn post(file_path: &str, title: &str, pinned: bool, tags: &[&str]) -> Post {
        let tags: String = tags.iter().map(|t| format!("  - {t}\n")).collect();
        let source = format!(
            "---\ntitle: \"{title}\"\ndescription: Desc\ndate: 2024-02-02\nauthor:\n  name: Kim\n  avatar: /kim.png\ntags:\n{tags}pinned: {pinned}\n---\nbody\n"
        );
        Post::parse(file_path, &source).unwrap()
    }

    #[test]
    fn test_render_empty_listing() {
        let renderer = TemplateRenderer::new().unwrap();
        let config = SiteConfig::default();
        let index = BlogIndex::build(&config, &mut []);

        let html = renderer.render_index(&config, &index).unwrap();
        assert!(html.contains("There are no blog posts yet."));
        assert!(!html.contains("class=\"post-row\""));
    }

    #[test]
    fn test_render_rows() {
        let renderer = TemplateRenderer::new().unwrap();
        let config = SiteConfig::default();
        let mut posts = vec![
            post("plain.md", "Plain", false, &["a"]),
            post("hello-world.mdx", "Hello", true, &["t1", "t2", "t3", "t4", "t5", "t6"]),
        ];
        let index = BlogIndex::build(&config, &mut posts);

        let html = renderer.render_index(&config, &index).unwrap();
        assert_eq!(html.matches("class=\"post-row\"").count(), 2);
        assert!(!html.contains("There are no blog posts yet."));
        assert!(html.contains(r#"href="/blog/hello-world""#));
        assert!(html.contains(r#"href="/blog/plain""#));
        assert!(html.contains("<p class=\"post-tag\">t4</p>"));
        assert!(!html.contains("<p class=\"post-tag\">t5</p>"));
        assert_eq!(html.matches("class=\"post-pin\"").count(), 1);

        // Pinned row renders first
        let hello = html.find("/blog/hello-world").unwrap();
        let plain = html.find("/blog/plain").unwrap();
        assert!(hello < plain);
    }

    #[test]
    fn test_render_escapes_text() {
        let renderer = TemplateRenderer::new().unwrap();
        let config = SiteConfig::default();
        let mut posts = vec![post("x.md", "<script>", false, &[])];
        let index = BlogIndex::build(&config, &mut posts);

        let html = renderer.render_index(&config, &index).unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<h4 class=\"post-title\"><script>"));
    }

    #[test]
    fn test_render_thumbnail() {
        let renderer = TemplateRenderer::new().unwrap();
        let config = SiteConfig::default();
        let source = "---\ntitle: Pic\ndescription: D\ndate: d\nauthor: {name: K, avatar: /k.png}\nthumbnail:\n  large: /pic.png\n---\n";
        let mut posts = vec![Post::parse("pic.md", source).unwrap()];
        let index = BlogIndex::build(&config, &mut posts);

        let html = renderer.render_index(&config, &index).unwrap();
        assert!(html.contains(r#"src="/pic.png" alt="Pic""#));
    }
}

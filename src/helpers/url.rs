//! URL helper functions

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::SiteConfig;

lazy_static! {
    static ref POST_EXTENSION: Regex = Regex::new(r"\.mdx?$").unwrap();
}

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/blog/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    format!("{}{}", config.url.trim_end_matches('/'), url_for(config, path))
}

/// Derive a post's slug by dropping one trailing `.md`/`.mdx` from its file path
pub fn post_slug(file_path: &str) -> String {
    POST_EXTENSION.replace(file_path, "").into_owned()
}

/// Link target of a post in the listing
///
/// # Examples
/// ```ignore
/// post_href(&config, "hello-world.mdx") // -> "/blog/hello-world"
/// ```
pub fn post_href(config: &SiteConfig, file_path: &str) -> String {
    url_for(
        config,
        &format!("{}/{}", config.blog_dir.trim_matches('/'), post_slug(file_path)),
    )
}

/// Path of the listing page itself
pub fn blog_index_path(config: &SiteConfig) -> String {
    url_for(config, config.blog_dir.trim_matches('/'))
}

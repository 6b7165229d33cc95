//! HTML helper functions

/// Escape HTML special characters
///
/// Used as the template engine's escape function; `/` is left alone so
/// escaped links stay readable.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generator meta tag content
pub fn generator_name() -> String {
    format!("blog-index {}", env!("CARGO_PKG_VERSION"))
}

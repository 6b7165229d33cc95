//! Helper functions for URLs and HTML output

mod html;
mod url;

pub use html::*;
pub use url::*;

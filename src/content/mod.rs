//! Content module - loads posts and parses their front-matter

mod frontmatter;
pub mod loader;
mod post;

pub use frontmatter::{Author, FrontMatter, FrontMatterError, Thumbnail};
pub use loader::ContentError;
pub use post::Post;

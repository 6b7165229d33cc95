//! Listing module - orders posts and maps them to display rows

mod row;

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::Post;

pub use row::{PostRow, ThumbnailView};

/// Stable sort putting pinned posts first; all other ties keep input order
pub fn sort_pinned_first(posts: &mut [Post]) {
    posts.sort_by_key(|post| !post.is_pinned());
}

/// The listing page's data: ordered rows
#[derive(Debug, Clone, Serialize)]
pub struct BlogIndex {
    pub rows: Vec<PostRow>,
}

impl BlogIndex {
    /// Order the posts and map each one to a row
    pub fn build(config: &SiteConfig, posts: &mut [Post]) -> Self {
        sort_pinned_first(posts);
        let rows = posts
            .iter()
            .map(|post| PostRow::from_post(config, post))
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// An empty listing renders the "no posts" message
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Author, FrontMatter};
    use indexmap::IndexMap;

    fn post(file_path: &str, pinned: Option<bool>) -> Post {
        Post {
            data: FrontMatter {
                title: file_path.to_string(),
                description: String::new(),
                date: String::new(),
                thumbnail: None,
                author: Author::default(),
                tags: Vec::new(),
                pinned,
                extra: IndexMap::new(),
            },
            content: String::new(),
            file_path: file_path.to_string(),
        }
    }

    fn order(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.file_path.as_str()).collect()
    }

    #[test]
    fn test_pinned_first_and_stable() {
        let mut posts = vec![
            post("a.md", None),
            post("b.md", Some(true)),
            post("c.md", Some(false)),
            post("d.md", Some(true)),
            post("e.md", None),
        ];
        sort_pinned_first(&mut posts);
        assert_eq!(order(&posts), vec!["b.md", "d.md", "a.md", "c.md", "e.md"]);
    }

    #[test]
    fn test_absent_and_false_pinned_tie() {
        let mut posts = vec![post("x.md", Some(false)), post("y.md", None)];
        sort_pinned_first(&mut posts);
        assert_eq!(order(&posts), vec!["x.md", "y.md"]);

        let mut posts = vec![post("y.md", None), post("x.md", Some(false))];
        sort_pinned_first(&mut posts);
        assert_eq!(order(&posts), vec!["y.md", "x.md"]);
    }

    #[test]
    fn test_all_pinned_precede_unpinned() {
        let mut posts: Vec<Post> = (0..20)
            .map(|i| post(&format!("{i:02}.md"), Some(i % 3 == 0)))
            .collect();
        sort_pinned_first(&mut posts);

        let first_unpinned = posts.iter().position(|p| !p.is_pinned()).unwrap();
        assert!(posts[first_unpinned..].iter().all(|p| !p.is_pinned()));
        assert!(posts[..first_unpinned].iter().all(|p| p.is_pinned()));

        // Relative order within each partition is preserved
        let names = order(&posts);
        let mut pinned: Vec<&str> = names[..first_unpinned].to_vec();
        pinned.sort();
        assert_eq!(pinned, names[..first_unpinned].to_vec());
        let mut rest: Vec<&str> = names[first_unpinned..].to_vec();
        rest.sort();
        assert_eq!(rest, names[first_unpinned..].to_vec());
    }

    #[test]
    fn test_build_row_count_matches_posts() {
        let config = SiteConfig::default();
        let mut posts = vec![post("one.md", None), post("two.mdx", Some(true))];

        let index = BlogIndex::build(&config, &mut posts);
        assert_eq!(index.len(), 2);
        assert_eq!(index.rows[0].href, "/blog/two");
        assert!(index.rows[0].pinned);
        assert_eq!(index.rows[1].href, "/blog/one");
    }

    #[test]
    fn test_build_empty() {
        let config = SiteConfig::default();
        let index = BlogIndex::build(&config, &mut []);
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }
}

//! Content loader - loads posts from the posts directory

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use super::frontmatter::FrontMatterError;
use super::Post;

/// Errors that abort a load; nothing is rendered from a partial load
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to list posts in {path:?}: {source}")]
    List {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("Bad front-matter in {file}: {source}")]
    FrontMatter {
        file: String,
        source: FrontMatterError,
    },

    #[error("Post listed more than once: {0}")]
    DuplicatePath(String),
}

/// List post file names (`*.md`, `*.mdx`) directly inside `dir`, sorted by name
pub fn post_paths(dir: &Path) -> Result<Vec<String>, ContentError> {
    if !dir.exists() {
        tracing::warn!("Posts directory {:?} does not exist", dir);
        return Ok(Vec::new());
    }

    let mut names = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ContentError::List {
            path: dir.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        if let Some(name) = entry.file_name().to_str() {
            if is_post_file(name) {
                names.push(name.to_string());
            }
        } else {
            tracing::warn!("Skipping non UTF-8 file name {:?}", entry.path());
        }
    }

    Ok(names)
}

/// Load the named posts from `dir`, in the order given
pub fn load_posts<S: AsRef<str>>(dir: &Path, names: &[S]) -> Result<Vec<Post>, ContentError> {
    let mut seen = HashSet::new();
    let mut posts = Vec::with_capacity(names.len());

    for name in names {
        let name = name.as_ref();
        if !seen.insert(name) {
            return Err(ContentError::DuplicatePath(name.to_string()));
        }
        posts.push(load_post(dir, name)?);
    }

    tracing::debug!("Loaded {} posts from {:?}", posts.len(), dir);
    Ok(posts)
}

/// Load every post file in `dir`
pub fn load_all(dir: &Path) -> Result<Vec<Post>, ContentError> {
    let names = post_paths(dir)?;
    load_posts(dir, &names)
}

/// Load a single post from a file
fn load_post(dir: &Path, name: &str) -> Result<Post, ContentError> {
    let path = dir.join(name);
    let source = fs::read_to_string(&path).map_err(|source| ContentError::Read {
        path: path.clone(),
        source,
    })?;

    Post::parse(name, &source).map_err(|source| ContentError::FrontMatter {
        file: name.to_string(),
        source,
    })
}

/// Check if a file name is a post (`.md` or `.mdx`)
///
/// A bare `.md` has no stem, hence no slug, and is not a post.
pub fn is_post_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "mdx")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn post_source(title: &str, pinned: Option<bool>) -> String {
        let pinned = pinned
            .map(|p| format!("pinned: {}\n", p))
            .unwrap_or_default();
        format!(
            "---\ntitle: {title}\ndescription: about {title}\ndate: 2024-01-01\nauthor:\n  name: Jo\n  avatar: /jo.png\n{pinned}---\nBody of {title}\n"
        )
    }

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_post_paths_filters_and_sorts() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "b.mdx", &post_source("B", None));
        write(tmp.path(), "a.md", &post_source("A", None));
        write(tmp.path(), "notes.txt", "ignored");
        write(tmp.path(), "draft.markdown", "ignored");
        fs::create_dir(tmp.path().join("nested.md")).unwrap();

        let names = post_paths(tmp.path()).unwrap();
        assert_eq!(names, vec!["a.md", "b.mdx"]);
    }

    #[test]
    fn test_post_paths_missing_dir_is_empty() {
        let tmp = TempDir::new().unwrap();
        let names = post_paths(&tmp.path().join("nope")).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_load_posts_keeps_input_order() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "first.md", &post_source("First", None));
        write(tmp.path(), "second.mdx", &post_source("Second", Some(true)));

        let posts = load_posts(tmp.path(), &["second.mdx", "first.md"]).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].file_path, "second.mdx");
        assert_eq!(posts[0].title(), "Second");
        assert!(posts[0].is_pinned());
        assert_eq!(posts[1].content, "Body of First\n");
    }

    #[test]
    fn test_load_all_empty_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(load_all(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_unreadable_file_is_fatal() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "ok.md", &post_source("Ok", None));

        let err = load_posts(tmp.path(), &["ok.md", "missing.md"]).unwrap_err();
        assert!(matches!(err, ContentError::Read { .. }));
    }

    #[test]
    fn test_malformed_front_matter_is_fatal() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "good.md", &post_source("Good", None));
        write(tmp.path(), "bad.md", "---\ntitle: [oops\n---\n");

        let err = load_all(tmp.path()).unwrap_err();
        match err {
            ContentError::FrontMatter { file, .. } => assert_eq!(file, "bad.md"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "a.md", &post_source("A", None));

        let err = load_posts(tmp.path(), &["a.md", "a.md"]).unwrap_err();
        assert!(matches!(err, ContentError::DuplicatePath(name) if name == "a.md"));
    }

    #[test]
    fn test_is_post_file() {
        assert!(is_post_file("hello.md"));
        assert!(is_post_file("hello.mdx"));
        assert!(!is_post_file("hello.mdxx"));
        assert!(!is_post_file("md"));
        assert!(!is_post_file(".md"));
        assert!(!is_post_file(".mdx"));
    }

    #[test]
    fn test_post_paths_skips_stemless_files() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), ".md", &post_source("Hidden", None));
        write(tmp.path(), "real.md", &post_source("Real", None));

        assert_eq!(post_paths(tmp.path()).unwrap(), vec!["real.md"]);
    }
}

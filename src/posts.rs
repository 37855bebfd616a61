//! Post discovery in the blog content directory.
//!
//! Every `.md` or `.mdx` file directly inside the content directory is a
//! post; its file stem is the post slug and names the image subdirectory:
//!
//! ```text
//! src/content/blog/                public/images/blog/
//! ├── configurar-ssh.md     →      ├── configurar-ssh/
//! ├── fail2ban.mdx          →      ├── fail2ban/
//! └── borrador.md           →      └── borrador/
//! ```
//!
//! Drafts are listed like any other post: draft status lives in frontmatter,
//! which this module does not read.

use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum PostsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot read content directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Post file extensions, matched exactly.
pub const POST_EXTENSIONS: &[&str] = &["md", "mdx"];

fn is_post(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| POST_EXTENSIONS.contains(&e))
}

/// List post slugs in `content_dir`, sorted ascending.
///
/// Only immediate entries are considered; subdirectories are not descended.
/// Symlinks are followed. No matching files yields an empty list.
pub fn list_posts(content_dir: &Path) -> Result<Vec<String>, PostsError> {
    if !content_dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} is not a directory", content_dir.display()),
        )
        .into());
    }

    let mut slugs = Vec::new();
    for entry in WalkDir::new(content_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_post(path) {
            continue;
        }
        if let Some(stem) = path.file_stem() {
            slugs.push(stem.to_string_lossy().to_string());
        }
    }

    slugs.sort();
    tracing::debug!(dir = %content_dir.display(), count = slugs.len(), "listed posts");
    Ok(slugs)
}

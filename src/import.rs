//! Interactive image import.
//!
//! Walks the operator through one import, in strict order:
//!
//! ```text
//! 1. source      exists and fully decodes as an image (no retry)
//! 2. post        numbered menu of posts              (reprompts until valid)
//! 3. alt text    free text, defaults to the file name
//! 4. kind        simple | figure
//! 5. caption     figure only, optional
//! 6. destination <images_dir>/<post>/<slug>.webp, conflict loop if taken
//! 7. convert     resize + encode, then build the snippet
//! ```
//!
//! Nothing is written before step 7. Cancelling the conflict loop ends the
//! run with [`ImportOutcome::Cancelled`] and no filesystem changes.

use crate::config::AssetsConfig;
use crate::imaging::{BackendError, ImageBackend, convert_and_save, verify_image};
use crate::naming::{alt_from_slug, is_plain_stem, slugify};
use crate::posts::{PostsError, list_posts};
use crate::prompt::Prompter;
use crate::snippet::{SnippetKind, build_snippet};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extension of every imported image.
pub const OUTPUT_EXTENSION: &str = "webp";

/// Stem used when the source file name slugifies to nothing.
const FALLBACK_STEM: &str = "image";

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Source image not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("No posts found in {}", .0.display())]
    NoPosts(PathBuf),
    #[error(transparent)]
    Decode(BackendError),
    #[error("Failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: BackendError },
    #[error("Cannot list posts: {0}")]
    Posts(#[from] PostsError),
    #[error("Input closed before the import finished")]
    InputClosed,
    #[error("Terminal error: {0}")]
    Prompt(io::Error),
}

impl From<io::Error> for ImportError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            ImportError::InputClosed
        } else {
            ImportError::Prompt(err)
        }
    }
}

/// What a completed import produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport {
    /// Post slug the image belongs to.
    pub post: String,
    /// Where the WebP file was written.
    pub destination: PathBuf,
    /// `destination` relative to the project root, for display.
    pub relative_path: String,
    /// URL of the image on the built site.
    pub public_path: String,
    /// Written size in KB (minimum 1).
    pub size_kb: u64,
    pub kind: SnippetKind,
    pub snippet: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImportOutcome {
    Completed(ImportReport),
    Cancelled,
}

/// Answer to "the destination already exists".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictChoice {
    Overwrite,
    Rename,
    Cancel,
}

impl ConflictChoice {
    pub const ALL: [ConflictChoice; 3] = [
        ConflictChoice::Overwrite,
        ConflictChoice::Rename,
        ConflictChoice::Cancel,
    ];

    fn label(self) -> &'static str {
        match self {
            ConflictChoice::Overwrite => "Overwrite",
            ConflictChoice::Rename => "Rename",
            ConflictChoice::Cancel => "Cancel",
        }
    }
}

fn kind_label(kind: SnippetKind) -> &'static str {
    match kind {
        SnippetKind::Simple => "simple   ![alt](path)",
        SnippetKind::Figure => "figure   <Figure /> with caption (MDX posts only)",
    }
}

/// Run one interactive import of `source` into a post under `root`.
pub fn run(
    config: &AssetsConfig,
    root: &Path,
    source: &Path,
    backend: &impl ImageBackend,
    prompter: &mut impl Prompter,
) -> Result<ImportOutcome, ImportError> {
    let dims = check_source(backend, source)?;
    tracing::debug!(source = %source.display(), ?dims, "source accepted");

    let content_dir = config.content_dir(root);
    let posts = list_posts(&content_dir)?;
    if posts.is_empty() {
        return Err(ImportError::NoPosts(content_dir));
    }
    let post = &posts[prompter.choose("Posts:", &posts)?];

    let image_slug = source_slug(source);
    let alt = ask_alt_text(prompter, &image_slug)?;

    let kind_labels: Vec<&str> = SnippetKind::ALL.iter().map(|k| kind_label(*k)).collect();
    let kind = SnippetKind::ALL[prompter.choose("Snippet type:", &kind_labels)?];

    let caption = match kind {
        SnippetKind::Figure => {
            let answer = prompter.ask("Caption (optional, Enter to skip): ")?;
            (!answer.is_empty()).then_some(answer)
        }
        SnippetKind::Simple => None,
    };

    let post_dir = config.images_dir(root).join(post);
    let Some(destination) = resolve_destination(prompter, &post_dir, &image_slug)? else {
        tracing::debug!("import cancelled at destination conflict");
        return Ok(ImportOutcome::Cancelled);
    };

    let size_kb = convert_and_save(backend, source, &destination, config.images.max_width)
        .map_err(|e| match e {
            BackendError::Decode { .. } => ImportError::Decode(e),
            other => ImportError::Write {
                path: destination.clone(),
                source: other,
            },
        })?;

    let file_name = destination
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let public_path = config.public_path(post, &file_name);
    let snippet = build_snippet(&public_path, &alt, kind, caption.as_deref());

    Ok(ImportOutcome::Completed(ImportReport {
        post: post.clone(),
        relative_path: relative_to(&destination, root),
        destination,
        public_path,
        size_kb,
        kind,
        snippet,
    }))
}

/// Confirm `source` exists and decodes completely, before any prompt.
fn check_source(backend: &impl ImageBackend, source: &Path) -> Result<(u32, u32), ImportError> {
    if !source.is_file() {
        return Err(ImportError::SourceNotFound(source.to_path_buf()));
    }
    verify_image(backend, source).map_err(|e| match e {
        BackendError::Io(io) if io.kind() == io::ErrorKind::NotFound => {
            ImportError::SourceNotFound(source.to_path_buf())
        }
        BackendError::Io(io) => ImportError::Decode(BackendError::Decode {
            path: source.display().to_string(),
            reason: io.to_string(),
        }),
        other => ImportError::Decode(other),
    })
}

/// Slug of the source file stem, used for the output name and default alt text.
fn source_slug(source: &Path) -> String {
    let slug = source
        .file_stem()
        .map(|s| slugify(&s.to_string_lossy()))
        .unwrap_or_default();
    if slug.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        slug
    }
}

fn ask_alt_text(prompter: &mut impl Prompter, image_slug: &str) -> io::Result<String> {
    let default_alt = alt_from_slug(image_slug);
    let answer = prompter.ask(&format!("Alt text [{default_alt}]: "))?;
    Ok(if answer.is_empty() { default_alt } else { answer })
}

/// Pick a free destination for `<dir>/<stem>.webp`, asking on conflict.
///
/// Returns `None` when the operator cancels. Loops until a free name is
/// entered, overwrite is chosen, or the import is cancelled.
pub fn resolve_destination(
    prompter: &mut impl Prompter,
    dir: &Path,
    stem: &str,
) -> io::Result<Option<PathBuf>> {
    let mut destination = dir.join(format!("{stem}.{OUTPUT_EXTENSION}"));
    let labels: Vec<&str> = ConflictChoice::ALL.iter().map(|c| c.label()).collect();

    loop {
        if !destination.exists() {
            return Ok(Some(destination));
        }

        prompter.say(&format!("{} already exists.", destination.display()))?;
        match ConflictChoice::ALL[prompter.choose("What should happen?", &labels)?] {
            ConflictChoice::Overwrite => return Ok(Some(destination)),
            ConflictChoice::Rename => {
                let new_stem = ask_new_stem(prompter)?;
                destination = dir.join(format!("{new_stem}.{OUTPUT_EXTENSION}"));
            }
            ConflictChoice::Cancel => return Ok(None),
        }
    }
}

/// Ask for a replacement file stem until a usable slug is entered.
///
/// Empty answers reprompt silently; answers naming another directory
/// (`/`, `\`, `..`) reprompt with a message, since the file must stay in
/// the post's image directory for the snippet path to resolve.
fn ask_new_stem(prompter: &mut impl Prompter) -> io::Result<String> {
    let suffix = format!(".{OUTPUT_EXTENSION}");
    loop {
        let answer = prompter.ask("New name (without extension): ")?;
        let slug = slugify(&answer);
        let slug = slug.strip_suffix(&suffix).unwrap_or(&slug);
        if slug.is_empty() {
            continue;
        }
        if !is_plain_stem(slug) {
            prompter.say("The name cannot contain '/', '\\' or '..'.")?;
            continue;
        }
        return Ok(slug.to_string());
    }
}

/// Display `path` relative to `root`, falling back to the full path.
fn relative_to(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}

//! # import-image
//!
//! Build-time asset tooling for a static blog: imports an arbitrary image into
//! a post as a web-optimized WebP file and prints the snippet to embed it.
//!
//! # Pipeline
//!
//! One import is a short sequential pipeline driven by interactive prompts:
//!
//! ```text
//! validate source → choose post → alt / kind / caption → resolve conflict → resize + encode → snippet
//! ```
//!
//! Conversion, post discovery and snippet generation are plain functions with
//! explicit inputs, so each is tested on its own against a temp directory.
//! The prompts go through a [`prompt::Prompter`] so whole sessions can be
//! scripted in tests.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`import`] | Interactive orchestration: prompts, conflict resolution, report |
//! | [`posts`] | Lists post slugs (`*.md`, `*.mdx`) in the content directory |
//! | [`imaging`] | Pure-Rust image operations: identify, resize, WebP encode |
//! | [`snippet`] | Markdown / MDX `<Figure>` embed snippets |
//! | [`naming`] | Slugs for output file names and default alt text |
//! | [`prompt`] | Terminal (`inquire`) and line-based prompts, numbered menus |
//! | [`config`] | `blog-assets.toml` loading, merging over defaults, validation |
//! | [`output`] | CLI output formatting for the import result |
//!
//! # Design Decisions
//!
//! ## WebP Output, Capped Width
//!
//! Every imported image becomes a WebP no wider than the content column
//! (750px by default). Narrower sources keep their size; nothing is upscaled.
//!
//! ## Conflicts Are Resolved Before Conversion
//!
//! [`imaging::convert_and_save`] overwrites its destination unconditionally.
//! Deciding whether that is acceptable (overwrite, rename, cancel) is done
//! up front by [`import::resolve_destination`], so a cancelled import never
//! touches the filesystem.
//!
//! ## Pure-Rust Imaging
//!
//! Decoding, Lanczos3 resampling and WebP encoding all come from the `image`
//! crate. No ImageMagick, no libwebp, no Python.

pub mod config;
pub mod imaging;
pub mod import;
pub mod naming;
pub mod output;
pub mod posts;
pub mod prompt;
pub mod snippet;

#[cfg(test)]
pub(crate) mod test_helpers;

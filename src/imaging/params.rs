//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which decides the output dimensions) and the [`backend`](super::backend)
//! (which does the actual pixel work). Swapping in a mock backend for tests
//! leaves the planning logic untouched.

use std::path::PathBuf;

/// Default maximum output width in pixels.
///
/// Matches the content column of the blog layout; wider sources are
/// downsampled, narrower ones are kept as they are.
pub const DEFAULT_MAX_WIDTH: u32 = 750;

/// Parameters for a convert operation: decode, resize to exact dimensions, encode WebP.
///
/// When `width`/`height` equal the source dimensions the backend skips resampling.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

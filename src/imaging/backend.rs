//! Image processing backend trait and shared types.
//!
//! An import needs three things from a backend:
//!
//! - `verify`: decode the whole source once, before any prompt is shown
//! - `identify`: read dimensions from the header when planning the resize
//! - `convert`: decode, resize and write the WebP output
//!
//! [`RustBackend`](super::rust_backend::RustBackend) implements them with the
//! `image` crate; tests use the recording `MockBackend` below.

use super::params::ConvertParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },
    #[error("WebP encode failed: {0}")]
    Encode(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Get image dimensions from the header, failing if the file is not a readable image.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Decode the full image, failing on truncated or corrupt pixel data.
    ///
    /// Read failures after the file was opened are reported as `Decode`.
    fn verify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Execute a convert operation. Returns the number of bytes written.
    ///
    /// Overwrites `params.output` if it exists; conflict handling belongs to
    /// the caller.
    fn convert(&self, params: &ConvertParams) -> Result<u64, BackendError>;
}

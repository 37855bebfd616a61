//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take configuration, compute parameters, and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::calculate_fit_width;
use super::params::ConvertParams;
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32)> {
    let dims = backend.identify(path)?;
    Ok((dims.width, dims.height))
}

/// Fully decode `path`, returning its dimensions.
///
/// Catches truncated or corrupt files that a header read accepts.
pub fn verify_image(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32)> {
    let dims = backend.verify(path)?;
    Ok((dims.width, dims.height))
}

/// Plan a conversion without executing it.
///
/// Useful for testing parameter generation.
pub fn plan_conversion(
    source: &Path,
    output: &Path,
    original_dims: (u32, u32),
    max_width: u32,
) -> ConvertParams {
    let (width, height) = calculate_fit_width(original_dims, max_width);
    ConvertParams {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        width,
        height,
    }
}

/// Convert bytes to whole kilobytes for display, never reporting 0.
pub fn size_in_kb(bytes: u64) -> u64 {
    (bytes / 1024).max(1)
}

/// Convert `source` to WebP at `dest`, downsampling to `max_width` if wider.
///
/// Creates missing parent directories. Overwrites `dest` without checking
/// whether it exists. Returns the written size in KB (minimum 1).
pub fn convert_and_save(
    backend: &impl ImageBackend,
    source: &Path,
    dest: &Path,
    max_width: u32,
) -> Result<u64> {
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let original = get_dimensions(backend, source)?;
    let params = plan_conversion(source, dest, original, max_width);
    tracing::debug!(
        source = %source.display(),
        dest = %dest.display(),
        from = ?original,
        to = ?(params.width, params.height),
        "converting image"
    );

    let bytes = backend.convert(&params)?;
    Ok(size_in_kb(bytes))
}

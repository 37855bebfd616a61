//! Shared test utilities for the import-image test suite.
//!
//! Provides synthetic image writers and post fixtures so tests never depend
//! on files outside their own temp directory.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! write_posts(tmp.path(), &["a.md", "b.mdx"]);
//! create_test_png(&tmp.path().join("shot.png"), 1200, 800);
//! ```

use image::{ImageEncoder, RgbImage};
use std::path::Path;

// =========================================================================
// Synthetic images
// =========================================================================

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

/// Write a small valid PNG file with the given dimensions.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    gradient(width, height)
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap();
}

/// Write a small valid JPEG file with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = gradient(width, height);
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

// =========================================================================
// Post fixtures
// =========================================================================

/// Create one file per name in `dir` with minimal frontmatter.
pub fn write_posts(dir: &Path, names: &[&str]) {
    for name in names {
        std::fs::write(dir.join(name), "---\ntitle: test\n---\n").unwrap();
    }
}

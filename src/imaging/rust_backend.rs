//! Pure Rust image processing backend.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::ImageReader::into_dimensions` (header only) |
//! | Verify | full `decode`, dimensions of the decoded image |
//! | Decode (JPEG, PNG, TIFF, WebP, GIF, BMP) | `image` crate (pure Rust decoders) |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Encode → WebP | `image::codecs::webp::WebPEncoder` (lossless), into memory first |
//!
//! The format is sniffed from the file contents first and falls back to the
//! extension, so a PNG saved as `photo.jpg` still imports.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::ConvertParams;
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageReader};
use std::fs::File;
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Map an `image` error to a backend error, keeping I/O failures distinct.
fn decode_error(path: &Path, err: ImageError) -> BackendError {
    match err {
        ImageError::IoError(e) => BackendError::Io(e),
        other => BackendError::Decode {
            path: path.display().to_string(),
            reason: other.to_string(),
        },
    }
}

fn open_reader(path: &Path) -> Result<ImageReader<std::io::BufReader<File>>, BackendError> {
    Ok(ImageReader::open(path)?.with_guessed_format()?)
}

/// Load and decode an image from disk.
///
/// Failing to open the file is `Io`. Once open, any failure (including a
/// short read from a truncated file) is `Decode`: the source is unusable.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    open_reader(path)?
        .decode()
        .map_err(|e| BackendError::Decode {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
}

/// Normalize to a pixel layout the WebP encoder accepts (8-bit RGB or RGBA).
fn to_webp_compatible(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => img,
        other if other.color().has_alpha() => DynamicImage::ImageRgba8(other.to_rgba8()),
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

/// Encode as lossless WebP in memory, then write to `path`.
///
/// `path` is only touched once encoding has succeeded, so a failed encode
/// leaves an existing file intact. Returns the number of bytes written.
fn save_webp(img: &DynamicImage, path: &Path) -> Result<u64, BackendError> {
    let mut encoded = Vec::new();
    img.write_with_encoder(WebPEncoder::new_lossless(&mut encoded))
        .map_err(|e| BackendError::Encode(e.to_string()))?;

    std::fs::write(path, &encoded)?;
    Ok(encoded.len() as u64)
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = open_reader(path)?
            .into_dimensions()
            .map_err(|e| decode_error(path, e))?;
        Ok(Dimensions { width, height })
    }

    fn verify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let img = load_image(path)?;
        Ok(Dimensions {
            width: img.width(),
            height: img.height(),
        })
    }

    fn convert(&self, params: &ConvertParams) -> Result<u64, BackendError> {
        let img = load_image(&params.source)?;

        let sized = if img.width() == params.width && img.height() == params.height {
            img
        } else {
            img.resize_exact(params.width, params.height, FilterType::Lanczos3)
        };

        save_webp(&to_webp_compatible(sized), &params.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{create_test_jpeg, create_test_png};
    use image::ImageFormat;

    fn params(source: &Path, output: &Path, width: u32, height: u32) -> ConvertParams {
        ConvertParams {
            source: source.to_path_buf(),
            output: output.to_path_buf(),
            width,
            height,
        }
    }

    #[test]
    fn identify_synthetic_png() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("test.png");
        create_test_png(&path, 200, 150);

        let dims = RustBackend::new().identify(&path).unwrap();
        assert_eq!(dims, Dimensions { width: 200, height: 150 });
    }

    #[test]
    fn identify_sniffs_format_from_contents() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("actually-a-png.jpg");
        create_test_png(&path, 64, 32);

        let dims = RustBackend::new().identify(&path).unwrap();
        assert_eq!(dims, Dimensions { width: 64, height: 32 });
    }

    #[test]
    fn identify_nonexistent_file_is_io_error() {
        let result = RustBackend::new().identify(Path::new("/nonexistent/image.jpg"));
        assert!(matches!(result, Err(BackendError::Io(_))));
    }

    #[test]
    fn identify_text_file_is_decode_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("notes.txt");
        std::fs::write(&path, "not an image").unwrap();

        let result = RustBackend::new().identify(&path);
        assert!(matches!(result, Err(BackendError::Decode { .. })));
    }

    #[test]
    fn verify_decodes_whole_image() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("full.jpg");
        create_test_jpeg(&path, 120, 90);

        let dims = RustBackend::new().verify(&path).unwrap();
        assert_eq!(dims, Dimensions { width: 120, height: 90 });
    }

    #[test]
    fn verify_truncated_png_is_decode_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("cut.png");
        create_test_png(&path, 200, 200);
        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

        let backend = RustBackend::new();
        // The header survives, so identify still succeeds
        assert!(backend.identify(&path).is_ok());
        let result = backend.verify(&path);
        assert!(matches!(result, Err(BackendError::Decode { .. })));
    }

    #[test]
    fn verify_nonexistent_file_is_io_error() {
        let result = RustBackend::new().verify(Path::new("/nonexistent/image.png"));
        assert!(matches!(result, Err(BackendError::Io(_))));
    }

    #[test]
    fn convert_writes_webp() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("foto.png");
        let output = tmp.path().join("foto.webp");
        create_test_png(&source, 400, 300);

        let written = RustBackend::new()
            .convert(&params(&source, &output, 400, 300))
            .unwrap();

        assert!(written > 0);
        assert_eq!(written, std::fs::metadata(&output).unwrap().len());
        let format = ImageReader::open(&output)
            .unwrap()
            .with_guessed_format()
            .unwrap()
            .format();
        assert_eq!(format, Some(ImageFormat::WebP));
    }

    #[test]
    fn convert_resizes_to_exact_dimensions() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("grande.jpg");
        let output = tmp.path().join("grande.webp");
        create_test_jpeg(&source, 1200, 800);

        RustBackend::new()
            .convert(&params(&source, &output, 750, 500))
            .unwrap();

        assert_eq!(image::image_dimensions(&output).unwrap(), (750, 500));
    }

    #[test]
    fn convert_keeps_dimensions_when_unchanged() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("pequena.png");
        let output = tmp.path().join("pequena.webp");
        create_test_png(&source, 400, 300);

        RustBackend::new()
            .convert(&params(&source, &output, 400, 300))
            .unwrap();

        assert_eq!(image::image_dimensions(&output).unwrap(), (400, 300));
    }

    #[test]
    fn convert_sixteen_bit_png() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("deep.png");
        let output = tmp.path().join("deep.webp");
        let img = image::ImageBuffer::<image::Rgb<u16>, _>::from_pixel(
            40,
            20,
            image::Rgb([1000u16, 30000, 65535]),
        );
        DynamicImage::ImageRgb16(img).save(&source).unwrap();

        RustBackend::new()
            .convert(&params(&source, &output, 40, 20))
            .unwrap();

        assert_eq!(image::image_dimensions(&output).unwrap(), (40, 20));
    }

    #[test]
    fn convert_overwrites_existing_output() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("img.png");
        let output = tmp.path().join("img.webp");
        create_test_png(&source, 100, 80);
        std::fs::write(&output, b"stale").unwrap();

        RustBackend::new()
            .convert(&params(&source, &output, 100, 80))
            .unwrap();

        assert_eq!(image::image_dimensions(&output).unwrap(), (100, 80));
    }

    #[test]
    fn failed_encode_keeps_existing_output() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("tall.png");
        let output = tmp.path().join("tall.webp");
        // Taller than WebP's 16383 px limit; narrow, so no resize happens
        create_test_png(&source, 100, 20_000);
        std::fs::write(&output, b"previous image").unwrap();

        let result = RustBackend::new().convert(&params(&source, &output, 100, 20_000));

        assert!(matches!(result, Err(BackendError::Encode(_))));
        assert_eq!(std::fs::read(&output).unwrap(), b"previous image");
    }

    #[test]
    fn failed_encode_creates_no_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("tall.png");
        let output = tmp.path().join("tall.webp");
        create_test_png(&source, 100, 20_000);

        assert!(
            RustBackend::new()
                .convert(&params(&source, &output, 100, 20_000))
                .is_err()
        );
        assert!(!output.exists());
    }

    #[test]
    fn convert_into_missing_directory_is_io_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("img.png");
        create_test_png(&source, 10, 10);
        let output = tmp.path().join("missing").join("img.webp");

        let result = RustBackend::new().convert(&params(&source, &output, 10, 10));
        assert!(matches!(result, Err(BackendError::Io(_))));
    }
}

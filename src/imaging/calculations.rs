//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate output dimensions for a max-width fit.
///
/// Images no wider than `max_width` keep their dimensions (never upscaled).
/// Wider images are scaled to exactly `max_width`, and the height is scaled
/// by the same ratio and truncated toward zero. The height never drops
/// below 1 pixel so extreme panoramas still encode.
///
/// # Arguments
/// * `original` - Source dimensions (width, height)
/// * `max_width` - Maximum allowed output width
///
/// # Examples
/// ```
/// # use import_image::imaging::calculate_fit_width;
/// assert_eq!(calculate_fit_width((1200, 800), 750), (750, 500));
/// assert_eq!(calculate_fit_width((400, 300), 750), (400, 300));
/// ```
pub fn calculate_fit_width(original: (u32, u32), max_width: u32) -> (u32, u32) {
    let (orig_w, orig_h) = original;

    if orig_w <= max_width {
        return (orig_w, orig_h);
    }

    // Integer math: height * max_width / width, truncated. u64 avoids overflow.
    let h = (orig_h as u64 * max_width as u64 / orig_w as u64) as u32;
    (max_width, h.max(1))
}

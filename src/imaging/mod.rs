//! Image identification and WebP conversion, all in pure Rust.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::ImageReader::into_dimensions` |
//! | **Verify** | full decode of the source |
//! | **Resize → WebP** | Lanczos3 + `WebPEncoder` (lossless) |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::calculate_fit_width;
pub use operations::{
    convert_and_save, get_dimensions, plan_conversion, size_in_kb, verify_image,
};
pub use params::{ConvertParams, DEFAULT_MAX_WIDTH};
pub use rust_backend::RustBackend;

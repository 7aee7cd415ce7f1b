//! Image processing, pure Rust via the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `ImageReader::into_dimensions` |
//! | **Decode** | `ImageReader::decode` |
//! | **Thumbnail** | `resize_exact` (Lanczos3) + `crop_imm` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for fit and crop geometry (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{CropRect, calculate_center_crop, calculate_fit_dimensions};
pub use operations::{
    GeneratedThumbnail, ThumbnailConfig, create_thumbnail, decode_dimensions, get_dimensions,
    plan_thumbnail,
};
pub use params::{Quality, ThumbnailParams};
pub use rust_backend::RustBackend;

//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take configuration, compute parameters, and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::{calculate_center_crop, calculate_fit_dimensions};
use super::params::{Quality, ThumbnailParams};
use crate::config::ThumbnailsConfig;
use crate::types::Orientation;
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32)> {
    let dims = backend.identify(path)?;
    Ok((dims.width, dims.height))
}

/// Fully decode an image and return its dimensions.
///
/// Use this instead of [`get_dimensions`] when no thumbnail will be written,
/// so a file with a damaged body still fails.
pub fn decode_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32)> {
    let dims = backend.decode(path)?;
    Ok((dims.width, dims.height))
}

/// Configuration for thumbnail generation.
#[derive(Debug, Clone)]
pub struct ThumbnailConfig {
    /// Edge length of the bounding box.
    pub size: u32,
    /// Center-crop to a square after fitting.
    pub crop: bool,
    pub quality: Quality,
}

impl ThumbnailConfig {
    pub fn from_config(config: &ThumbnailsConfig) -> Self {
        Self {
            size: config.size,
            crop: config.crop,
            quality: Quality::new(config.quality),
        }
    }
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self::from_config(&ThumbnailsConfig::default())
    }
}

/// Plan a thumbnail operation without executing it.
///
/// The crop follows the orientation of the *original* image, so a
/// horizontal photo is always trimmed at the sides.
pub fn plan_thumbnail(
    source: &Path,
    output_path: &Path,
    original_dims: (u32, u32),
    config: &ThumbnailConfig,
) -> ThumbnailParams {
    let (resize_width, resize_height) = calculate_fit_dimensions(original_dims, config.size);
    let orientation = Orientation::from_dimensions(original_dims.0, original_dims.1);
    let crop = config
        .crop
        .then(|| calculate_center_crop((resize_width, resize_height), orientation));

    ThumbnailParams {
        source: source.to_path_buf(),
        output: output_path.to_path_buf(),
        resize_width,
        resize_height,
        crop,
        quality: config.quality,
    }
}

/// A thumbnail written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedThumbnail {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Create a thumbnail in `thumbs_dir`, keeping the source's base name.
pub fn create_thumbnail(
    backend: &impl ImageBackend,
    source: &Path,
    thumbs_dir: &Path,
    base_name: &str,
    original_dims: (u32, u32),
    config: &ThumbnailConfig,
) -> Result<GeneratedThumbnail> {
    let thumb_path = thumbs_dir.join(base_name);
    let params = plan_thumbnail(source, &thumb_path, original_dims, config);
    backend.thumbnail(&params)?;

    let (width, height) = params.output_dimensions();
    Ok(GeneratedThumbnail {
        path: thumb_path,
        width,
        height,
    })
}

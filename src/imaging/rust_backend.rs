//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `ImageReader::into_dimensions` (header only) |
//! | Decode (JPEG, PNG, TIFF, WebP, GIF) | `ImageReader::decode` |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Center crop | `DynamicImage::crop_imm` |
//! | Encode | format of the thumbnail's extension, else the source's; JPEG honours quality |
//!
//! Every read sniffs the format from the file contents, so a JPEG named
//! `IMG_0001` or `scan.png` decodes as a JPEG.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::ThumbnailParams;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Pure Rust backend using the `image` crate.
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

fn decode_error(path: &Path, reason: impl ToString) -> BackendError {
    BackendError::Decode {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Open an image with its format sniffed from the contents.
fn open_image(path: &Path) -> Result<ImageReader<BufReader<File>>, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .with_guessed_format()
        .map_err(BackendError::Io)
}

/// Load and decode an image from disk, along with its detected format.
fn load_image(path: &Path) -> Result<(DynamicImage, ImageFormat), BackendError> {
    let reader = open_image(path)?;
    let format = reader
        .format()
        .ok_or_else(|| decode_error(path, "The image format could not be determined"))?;
    let img = reader.decode().map_err(|e| decode_error(path, e))?;
    Ok((img, format))
}

/// Save a DynamicImage to the given path.
///
/// The format comes from the path's extension; paths without a recognised
/// extension are written in `source_format`.
fn save_image(
    img: &DynamicImage,
    path: &Path,
    quality: u32,
    source_format: ImageFormat,
) -> Result<(), BackendError> {
    let format = ImageFormat::from_path(path).unwrap_or(source_format);

    match format {
        ImageFormat::Jpeg => save_jpeg(img, path, quality),
        other => img.save_with_format(path, other).map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to write {}: {}", path.display(), e))
        }),
    }
}

/// Encode as JPEG at the given quality. JPEG has no alpha channel, so
/// images that carry one are flattened to RGB first.
fn save_jpeg(img: &DynamicImage, path: &Path, quality: u32) -> Result<(), BackendError> {
    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let writer = std::io::BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(writer, quality.clamp(1, 100) as u8);

    let result = if img.color().has_alpha() {
        DynamicImage::ImageRgb8(img.to_rgb8()).write_with_encoder(encoder)
    } else {
        img.write_with_encoder(encoder)
    };
    result.map_err(|e| BackendError::ProcessingFailed(format!("JPEG encode failed: {}", e)))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = open_image(path)?
            .into_dimensions()
            .map_err(|e| decode_error(path, e))?;
        Ok(Dimensions { width, height })
    }

    fn decode(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (img, _) = load_image(path)?;
        Ok(Dimensions {
            width: img.width(),
            height: img.height(),
        })
    }

    fn thumbnail(&self, params: &ThumbnailParams) -> Result<(), BackendError> {
        let (img, source_format) = load_image(&params.source)?;

        let fitted = img.resize_exact(
            params.resize_width,
            params.resize_height,
            FilterType::Lanczos3,
        );

        let final_img = match params.crop {
            Some(crop) => fitted.crop_imm(crop.x, crop.y, crop.size, crop.size),
            None => fitted,
        };

        save_image(
            &final_img,
            &params.output,
            params.quality.value(),
            source_format,
        )
    }
}

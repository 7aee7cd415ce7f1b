//! Shared test utilities for the gallerist test suite.
//!
//! Synthetic images are generated on the fly so tests never depend on
//! binary fixtures.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_gallery(&[("1-x.jpg", 300, 200), ("2-y.jpg", 200, 300)]);
//! let records = pipeline::check(tmp.path(), &GalleryConfig::default()).unwrap();
//! ```

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ImageEncoder, RgbImage};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::generate::stock_template;

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

/// Write a gradient JPEG of the given size.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = gradient(width, height);
    let file = fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Write a gradient PNG of the given size.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    let img = gradient(width, height);
    let file = fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    PngEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Lay out a gallery root in a temp directory.
///
/// Creates `images/fulls/` with one synthetic image per `(name, width, height)`
/// entry (PNG for `.png` names, JPEG otherwise) and writes the stock
/// `template.html`. Matches the default `GalleryConfig` paths.
pub fn setup_gallery(images: &[(&str, u32, u32)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fulls = tmp.path().join("images/fulls");
    fs::create_dir_all(&fulls).unwrap();

    for &(name, width, height) in images {
        let path = fulls.join(name);
        if name.ends_with(".png") {
            create_test_png(&path, width, height);
        } else {
            create_test_jpeg(&path, width, height);
        }
    }

    fs::write(tmp.path().join("template.html"), stock_template()).unwrap();
    tmp
}

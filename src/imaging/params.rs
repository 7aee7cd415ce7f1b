//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which decides what thumbnail to create) and the [`backend`](super::backend)
//! (which does the actual pixel work).

use super::calculations::CropRect;
use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// Parameters for a thumbnail operation (fit resize + optional center crop).
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailParams {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Fitted dimensions the source is resized to.
    pub resize_width: u32,
    pub resize_height: u32,
    /// Square cut applied after resizing, if cropping is enabled.
    pub crop: Option<CropRect>,
    pub quality: Quality,
}

impl ThumbnailParams {
    /// Dimensions of the written thumbnail.
    pub fn output_dimensions(&self) -> (u32, u32) {
        match self.crop {
            Some(crop) => (crop.size, crop.size),
            None => (self.resize_width, self.resize_height),
        }
    }
}

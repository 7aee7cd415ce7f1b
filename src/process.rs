//! Per-image processing.
//!
//! Stage 2 of the build pipeline. For every scanned source image:
//!
//! 1. read its pixel dimensions and classify the orientation;
//! 2. if thumbnails are enabled, fit it into the `size × size` box,
//!    center-crop it to a square (when `crop` is on) and write it to the
//!    thumbnail directory under the same base name.
//!
//! Every image is decoded in full exactly once. With thumbnails enabled the
//! thumbnail step does it; otherwise the dimensions come from a full decode
//! rather than the header, so a truncated file fails either way.
//!
//! Orientation is computed even when thumbnails are disabled: the page
//! template uses it as a CSS class for the grid layout.
//!
//! ## Parallel Processing
//!
//! Images are independent, so they are processed on a [rayon] pool sized by
//! [`effective_threads`](crate::config::effective_threads). Records come back
//! in scan order whatever order the workers finish in; ordering for display
//! happens later in [`order`](crate::order).
//!
//! Any failure aborts the stage. There is no skip-and-continue: a gallery
//! silently missing a photo is worse than a failed build.

use crate::config::{GalleryConfig, effective_threads};
use crate::imaging::{
    BackendError, ImageBackend, RustBackend, ThumbnailConfig, create_thumbnail, decode_dimensions,
    get_dimensions,
};
use crate::scan::SourceImage;
use crate::types::{ImageRecord, Orientation};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Progress events emitted while processing.
///
/// Sent over an mpsc channel so a printer thread can report progress while
/// workers run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessEvent {
    Started {
        total: usize,
        thumbnails: bool,
    },
    ThumbnailWritten {
        /// 1-based count of completed thumbnails (completion order).
        completed: usize,
        total: usize,
        name: String,
        dimensions: (u32, u32),
    },
}

/// What the process stage needs from the gallery config.
#[derive(Debug, Clone)]
pub struct ProcessConfig {
    /// `None` disables thumbnail generation.
    pub thumbnail: Option<ThumbnailConfig>,
    pub threads: usize,
}

impl ProcessConfig {
    pub fn from_gallery_config(config: &GalleryConfig) -> Self {
        Self {
            thumbnail: config
                .thumbnails
                .resize
                .then(|| ThumbnailConfig::from_config(&config.thumbnails)),
            threads: effective_threads(&config.processing),
        }
    }
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self::from_gallery_config(&GalleryConfig::default())
    }
}

/// Result of the process stage.
#[derive(Debug)]
pub struct ProcessOutput {
    /// One record per source, in scan order.
    pub records: Vec<ImageRecord>,
    /// Thumbnails written, in scan order.
    pub thumbnails: Vec<PathBuf>,
}

pub fn process(
    sources: &[SourceImage],
    thumbs_dir: &Path,
    config: &ProcessConfig,
    progress: Option<Sender<ProcessEvent>>,
) -> Result<ProcessOutput, ProcessError> {
    let backend = RustBackend::new();
    process_with_backend(&backend, sources, thumbs_dir, config, progress)
}

/// Process images using a specific backend (allows testing with mock).
pub fn process_with_backend(
    backend: &impl ImageBackend,
    sources: &[SourceImage],
    thumbs_dir: &Path,
    config: &ProcessConfig,
    progress: Option<Sender<ProcessEvent>>,
) -> Result<ProcessOutput, ProcessError> {
    let total = sources.len();
    if let Some(tx) = &progress {
        tx.send(ProcessEvent::Started {
            total,
            thumbnails: config.thumbnail.is_some(),
        })
        .ok();
    }

    if config.thumbnail.is_some() {
        std::fs::create_dir_all(thumbs_dir)?;
    }

    let completed = AtomicUsize::new(0);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads.max(1))
        .build()?;

    let results: Vec<(ImageRecord, Option<PathBuf>)> = pool.install(|| {
        sources
            .par_iter()
            .map_with(
                progress,
                |progress, source| -> Result<(ImageRecord, Option<PathBuf>), ProcessError> {
                    let Some(thumb_config) = &config.thumbnail else {
                        let dims = decode_dimensions(backend, &source.path)?;
                        return Ok((record_for(source, dims), None));
                    };

                    let dims = get_dimensions(backend, &source.path)?;
                    let record = record_for(source, dims);

                    let thumb = create_thumbnail(
                        backend,
                        &source.path,
                        thumbs_dir,
                        &source.base_name,
                        dims,
                        thumb_config,
                    )?;

                    if let Some(tx) = progress {
                        tx.send(ProcessEvent::ThumbnailWritten {
                            completed: completed.fetch_add(1, Ordering::SeqCst) + 1,
                            total,
                            name: source.base_name.clone(),
                            dimensions: (thumb.width, thumb.height),
                        })
                        .ok();
                    }

                    Ok((record, Some(thumb.path)))
                },
            )
            .collect::<Result<Vec<_>, ProcessError>>()
    })?;

    let mut records = Vec::with_capacity(results.len());
    let mut thumbnails = Vec::new();
    for (record, thumb) in results {
        records.push(record);
        thumbnails.extend(thumb);
    }

    Ok(ProcessOutput {
        records,
        thumbnails,
    })
}

fn record_for(source: &SourceImage, dims: (u32, u32)) -> ImageRecord {
    ImageRecord {
        name: source.base_name.clone(),
        orientation: Orientation::from_dimensions(dims.0, dims.1),
    }
}

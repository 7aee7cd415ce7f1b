//! Pipeline entry points used by the CLI.
//!
//! ```text
//! scan  fulls/  →  [SourceImage]
//! process       →  [ImageRecord] (+ thumbs/)
//! order         →  [ImageRecord] in display order
//! generate      →  index.html
//! ```
//!
//! Every configured path is resolved against the gallery root, so the same
//! `gallerist.toml` works regardless of the directory the binary runs from.
//! The first error from any stage stops the run. Under numeric ordering the
//! file names are validated right after the scan, before any image work.

use crate::config::{ConfigError, GalleryConfig};
use crate::generate::{self, ImageLinks, RenderError};
use crate::order::{OrderError, order_records, validate_names};
use crate::process::{self, ProcessConfig, ProcessError, ProcessEvent};
use crate::scan::{self, ScanError, SourceImage};
use crate::types::ImageRecord;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Process(#[from] ProcessError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Filesystem locations for one run, resolved against the gallery root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryPaths {
    pub fulls: PathBuf,
    pub thumbs: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
}

impl GalleryPaths {
    pub fn resolve(root: &Path, config: &GalleryConfig) -> Self {
        Self {
            fulls: root.join(&config.images.fulls),
            thumbs: root.join(&config.images.thumbs),
            template: root.join(&config.template),
            output: root.join(&config.output),
        }
    }
}

/// Outcome of a successful build.
#[derive(Debug)]
pub struct BuildReport {
    /// Records in display order, as rendered.
    pub records: Vec<ImageRecord>,
    /// Number of thumbnails written.
    pub thumbnails: usize,
    pub output: PathBuf,
}

fn scan_sources(
    paths: &GalleryPaths,
    config: &GalleryConfig,
) -> Result<Vec<SourceImage>, PipelineError> {
    let sources = scan::scan(&paths.fulls)?;
    validate_names(sources.iter().map(|s| s.base_name.as_str()), config.sort)?;
    Ok(sources)
}

/// Scan, decode and order without writing anything.
///
/// Surfaces the same errors a build would (undecodable images, bad
/// numeric prefixes) except template and output problems.
pub fn check(root: &Path, config: &GalleryConfig) -> Result<Vec<ImageRecord>, PipelineError> {
    let paths = GalleryPaths::resolve(root, config);
    let sources = scan_sources(&paths, config)?;

    let process_config = ProcessConfig {
        thumbnail: None,
        ..ProcessConfig::from_gallery_config(config)
    };
    let processed = process::process(&sources, &paths.thumbs, &process_config, None)?;

    Ok(order_records(processed.records, config.sort)?)
}

/// Run the full pipeline and write the page.
pub fn build(
    root: &Path,
    config: &GalleryConfig,
    progress: Option<Sender<ProcessEvent>>,
) -> Result<BuildReport, PipelineError> {
    let paths = GalleryPaths::resolve(root, config);
    let sources = scan_sources(&paths, config)?;

    let process_config = ProcessConfig::from_gallery_config(config);
    let processed = process::process(&sources, &paths.thumbs, &process_config, progress)?;

    let records = order_records(processed.records, config.sort)?;

    generate::generate(
        &paths.template,
        &paths.output,
        &config.title,
        &records,
        &ImageLinks::from_config(config),
    )?;

    Ok(BuildReport {
        records,
        thumbnails: processed.thumbnails.len(),
        output: paths.output,
    })
}

//! Gallery configuration module.
//!
//! Handles loading, validating, and merging `gallerist.toml`. User values are
//! merged on top of stock defaults, so a config file only needs the keys it
//! wants to change. Relative paths are resolved against the gallery root
//! (`--root`, default `.`).
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Photos"            # Gallery title, substituted for {{title}}
//! template = "template.html"  # Page template read at build time
//! output = "index.html"       # Rendered page
//! sort = "insertion"          # "insertion" (file name order) or "numeric"
//!
//! [images]
//! fulls = "images/fulls"      # Full-resolution sources
//! thumbs = "images/thumbs"    # Thumbnail destination
//!
//! [thumbnails]
//! resize = true               # Write thumbnails at all
//! crop = true                 # Center-crop to a square
//! size = 200                  # Edge length of the bounding box in pixels
//! quality = 90                # JPEG quality (1-100)
//!
//! [processing]
//! max_processes = 4           # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the gallery root.
pub const CONFIG_FILE_NAME: &str = "gallerist.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Display order of the gallery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Directory listing order (file names ascending).
    #[default]
    Insertion,
    /// Numeric `NNN-` prefix, highest first.
    Numeric,
}

/// Gallery configuration loaded from `gallerist.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Page title.
    pub title: String,
    /// Path to the page template.
    pub template: String,
    /// Path of the rendered page.
    pub output: String,
    /// Display order.
    pub sort: SortMode,
    /// Source and thumbnail directories.
    pub images: ImagesConfig,
    /// Thumbnail generation settings.
    pub thumbnails: ThumbnailsConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: "Photos".to_string(),
            template: "template.html".to_string(),
            output: "index.html".to_string(),
            sort: SortMode::default(),
            images: ImagesConfig::default(),
            thumbnails: ThumbnailsConfig::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl GalleryConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if self.output.trim().is_empty() {
            return Err(ConfigError::Validation("output must not be empty".into()));
        }
        if self.thumbnails.size == 0 {
            return Err(ConfigError::Validation(
                "thumbnails.size must be non-zero".into(),
            ));
        }
        if !(1..=100).contains(&self.thumbnails.quality) {
            return Err(ConfigError::Validation(
                "thumbnails.quality must be 1-100".into(),
            ));
        }
        if self.processing.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "processing.max_processes must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Where photos are read from and thumbnails written to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// Directory of full-resolution images.
    pub fulls: String,
    /// Directory thumbnails are written to, one per source, same base name.
    pub thumbs: String,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            fulls: "images/fulls".to_string(),
            thumbs: "images/thumbs".to_string(),
        }
    }
}

/// Thumbnail generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThumbnailsConfig {
    /// Write thumbnails. When off, existing thumbnails are referenced as-is.
    pub resize: bool,
    /// Center-crop to a square after fitting into the bounding box.
    pub crop: bool,
    /// Edge length of the `size × size` bounding box.
    pub size: u32,
    /// JPEG encoding quality (other formats ignore it).
    pub quality: u32,
}

impl Default for ThumbnailsConfig {
    fn default() -> Self {
        Self {
            resize: true,
            crop: true,
            size: 200,
            quality: 90,
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel image processing workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(GalleryConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Parse a config file's contents over the stock defaults and validate.
pub fn parse_config(content: &str) -> Result<GalleryConfig, ConfigError> {
    let overlay: toml::Value = toml::from_str(content)?;
    let merged = merge_toml(stock_defaults_value()?, overlay);
    let config: GalleryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the config file at `path`.
///
/// A missing file is an error; use [`load_config`] for the optional
/// `gallerist.toml` lookup.
pub fn load_config_file(path: &Path) -> Result<GalleryConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load `gallerist.toml` from the gallery root, or stock defaults if absent.
pub fn load_config(root: &Path) -> Result<GalleryConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        let config = GalleryConfig::default();
        config.validate()?;
        return Ok(config);
    }
    load_config_file(&config_path)
}

/// Returns a fully-commented stock `gallerist.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# gallerist configuration
# =======================
# All keys are optional. Values shown are the defaults.
# Relative paths are resolved against the gallery root (--root).

# Page title, substituted for {{title}} in the template.
title = "Photos"

# Page template. Must contain {{gallery}}; may contain {{title}} and {{count}}.
# Run `gallerist gen-template` for a starting point.
template = "template.html"

# Where the rendered page is written.
output = "index.html"

# Display order:
#   "insertion" - file name order
#   "numeric"   - NNN- prefix, highest first (every file must have one)
sort = "insertion"

# ---------------------------------------------------------------------------
# Directories
# ---------------------------------------------------------------------------
[images]
fulls = "images/fulls"
thumbs = "images/thumbs"

# ---------------------------------------------------------------------------
# Thumbnails
# ---------------------------------------------------------------------------
[thumbnails]
# Write thumbnails. Turn off to reuse thumbnails from an earlier run.
resize = true
# Center-crop to a square. Off keeps the fitted aspect ratio.
crop = true
# Thumbnails fit inside a size x size box.
size = 200
# JPEG quality (1-100). Other formats are written with default settings.
quality = 90

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Max parallel workers. Omit for one per CPU core; 1 processes sequentially.
# max_processes = 4
"##
}

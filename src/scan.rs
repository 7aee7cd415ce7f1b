//! Source directory scanning.
//!
//! Stage 1 of the build pipeline: list the full-resolution images that make
//! up the gallery.
//!
//! ```text
//! images/
//! ├── fulls/               # scanned (not recursive)
//! │   ├── 1-harbour.jpg
//! │   ├── 2-pier.jpg
//! │   └── .DS_Store        # dot-files ignored
//! └── thumbs/              # written by the process stage
//! ```
//!
//! Every other regular file is treated as an image: a stray non-image fails
//! the build when it is decoded, rather than silently disappearing from the
//! page. Entries are returned in file name order.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Source directory not found: {0}")]
    MissingDirectory(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("File name is not valid UTF-8: {0}")]
    NonUtf8Name(PathBuf),
}

/// A file found in the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pub path: PathBuf,
    /// File name without its directory.
    pub base_name: String,
}

/// List the images in `dir`, sorted by file name.
pub fn scan(dir: &Path) -> Result<Vec<SourceImage>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::MissingDirectory(dir.to_path_buf()));
    }

    let mut images = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let base_name = entry
            .file_name()
            .to_str()
            .ok_or_else(|| ScanError::NonUtf8Name(entry.path().to_path_buf()))?
            .to_string();
        if is_hidden(&base_name) {
            continue;
        }

        images.push(SourceImage {
            path: entry.into_path(),
            base_name,
        });
    }

    Ok(images)
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

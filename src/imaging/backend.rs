//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the operations the pipeline needs:
//! identify (read pixel dimensions from the header), decode (read every
//! pixel, proving the file is usable) and thumbnail (fit, optionally crop,
//! write).
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend); tests use a recording mock.

use super::params::ThumbnailParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
pub trait ImageBackend: Sync {
    /// Get image dimensions from the header.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Decode the whole image and return its dimensions.
    ///
    /// Fails on files whose header is intact but whose pixel data is not.
    fn decode(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Execute a thumbnail operation (resize + optional center crop).
    fn thumbnail(&self, params: &ThumbnailParams) -> Result<(), BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::imaging::calculations::CropRect;
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;

    /// Mock backend that records operations without executing them.
    /// Uses Mutex (not RefCell) so it is Sync and works with rayon's par_iter.
    ///
    /// Dimensions are looked up by file name, so results don't depend on the
    /// order worker threads happen to call `identify`. Names in `truncated`
    /// identify fine but fail to decode, like a file cut short after its
    /// header.
    #[derive(Default)]
    pub struct MockBackend {
        pub dimensions: HashMap<String, Dimensions>,
        pub truncated: HashSet<String>,
        pub operations: Mutex<Vec<RecordedOp>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Identify(String),
        Decode(String),
        Thumbnail {
            source: String,
            output: String,
            resize_width: u32,
            resize_height: u32,
            crop: Option<CropRect>,
            quality: u32,
        },
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_dimensions(dims: &[(&str, u32, u32)]) -> Self {
            Self {
                dimensions: dims
                    .iter()
                    .map(|&(name, width, height)| (name.to_string(), Dimensions { width, height }))
                    .collect(),
                ..Self::default()
            }
        }

        pub fn truncate(mut self, name: &str) -> Self {
            self.truncated.insert(name.to_string());
            self
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }

        pub fn thumbnail_ops(&self) -> Vec<RecordedOp> {
            self.get_operations()
                .into_iter()
                .filter(|op| matches!(op, RecordedOp::Thumbnail { .. }))
                .collect()
        }
    }

    fn file_name(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    fn mock_decode_error(path: &Path, reason: &str) -> BackendError {
        BackendError::Decode {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    impl MockBackend {
        fn lookup(&self, path: &Path) -> Result<Dimensions, BackendError> {
            self.dimensions
                .get(&file_name(path))
                .copied()
                .ok_or_else(|| mock_decode_error(path, "no mock dimensions"))
        }

        fn check_body(&self, path: &Path) -> Result<(), BackendError> {
            if self.truncated.contains(&file_name(path)) {
                return Err(mock_decode_error(path, "unexpected end of file"));
            }
            Ok(())
        }
    }

    impl ImageBackend for MockBackend {
        fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
            self.operations
                .lock()
                .unwrap()
                .push(RecordedOp::Identify(path.to_string_lossy().to_string()));
            self.lookup(path)
        }

        fn decode(&self, path: &Path) -> Result<Dimensions, BackendError> {
            self.operations
                .lock()
                .unwrap()
                .push(RecordedOp::Decode(path.to_string_lossy().to_string()));
            let dims = self.lookup(path)?;
            self.check_body(path)?;
            Ok(dims)
        }

        fn thumbnail(&self, params: &ThumbnailParams) -> Result<(), BackendError> {
            self.check_body(&params.source)?;
            self.operations.lock().unwrap().push(RecordedOp::Thumbnail {
                source: params.source.to_string_lossy().to_string(),
                output: params.output.to_string_lossy().to_string(),
                resize_width: params.resize_width,
                resize_height: params.resize_height,
                crop: params.crop,
                quality: params.quality.value(),
            });
            Ok(())
        }
    }

    #[test]
    fn mock_records_identify() {
        let backend = MockBackend::with_dimensions(&[("image.jpg", 800, 600)]);

        let result = backend.identify(Path::new("/test/image.jpg")).unwrap();
        assert_eq!(result.width, 800);
        assert_eq!(result.height, 600);

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Identify(p) if p == "/test/image.jpg"));
    }

    #[test]
    fn mock_unknown_file_is_decode_error() {
        let backend = MockBackend::new();
        let result = backend.identify(Path::new("/test/missing.jpg"));
        assert!(matches!(result, Err(BackendError::Decode { .. })));
    }

    #[test]
    fn mock_truncated_identifies_but_fails_decode() {
        let backend = MockBackend::with_dimensions(&[("cut.png", 300, 200)]).truncate("cut.png");

        assert!(backend.identify(Path::new("/f/cut.png")).is_ok());
        assert!(matches!(
            backend.decode(Path::new("/f/cut.png")),
            Err(BackendError::Decode { .. })
        ));
        assert_eq!(
            backend.get_operations(),
            vec![
                RecordedOp::Identify("/f/cut.png".to_string()),
                RecordedOp::Decode("/f/cut.png".to_string()),
            ]
        );
    }

    #[test]
    fn mock_records_thumbnail() {
        let backend = MockBackend::new();

        backend
            .thumbnail(&ThumbnailParams {
                source: "/fulls/a.jpg".into(),
                output: "/thumbs/a.jpg".into(),
                resize_width: 200,
                resize_height: 133,
                crop: None,
                quality: super::super::params::Quality::new(85),
            })
            .unwrap();

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(
            &ops[0],
            RecordedOp::Thumbnail {
                resize_width: 200,
                resize_height: 133,
                crop: None,
                quality: 85,
                ..
            }
        ));
    }
}

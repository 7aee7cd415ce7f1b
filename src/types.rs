//! Shared types used across all pipeline stages.
//!
//! [`ImageRecord`] is produced by the process stage, reordered by
//! [`order`](crate::order) and consumed by [`generate`](crate::generate).
//! It is also what `gallerist scan` prints as JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Orientation of a source image, decided from its decoded pixel size.
///
/// Square images are [`Orientation::Vertical`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Classify from pixel dimensions: wider than tall is horizontal.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if width > height {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Lowercase name, also used as the CSS class in the rendered page.
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One photo in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// File base name, e.g. `010-harbour.jpg`. Unique within a run.
    pub name: String,
    pub orientation: Orientation,
}

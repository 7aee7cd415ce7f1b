//! # Gallerist
//!
//! Turns a directory of photos into a single static HTML gallery page with
//! thumbnails. The filesystem is the data source: every image in the source
//! directory becomes one tile, optionally ordered by a numeric file name
//! prefix.
//!
//! # Architecture: Four-Stage Pipeline
//!
//! ```text
//! 1. Scan      images/fulls/  →  [SourceImage]    (directory listing)
//! 2. Process   sources        →  [ImageRecord]    (identify + thumbnails, parallel)
//! 3. Order     records        →  [ImageRecord]    (insertion or numeric)
//! 4. Generate  records        →  index.html       (template + Maud grid)
//! ```
//!
//! Each stage is a plain function over owned data, so tests can drive any
//! stage in isolation. [`pipeline`] strings them together for the CLI.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: lists the source images in file name order |
//! | [`process`] | Stage 2: identifies orientation and writes thumbnails on a rayon pool |
//! | [`order`] | Stage 3: insertion or numeric-prefix-descending ordering |
//! | [`generate`] | Stage 4: substitutes the page template, renders the grid with Maud |
//! | [`pipeline`] | Path resolution and the `build` / `check` entry points |
//! | [`config`] | `gallerist.toml` loading, merging over stock defaults, validation |
//! | [`types`] | `ImageRecord` and `Orientation`, shared between stages |
//! | [`naming`] | `NNN-name` prefix parser used by numeric ordering |
//! | [`imaging`] | Fit and crop geometry plus the `image`-crate backend |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Fit, Then Crop
//!
//! Thumbnails are first scaled so the longer side matches the configured size
//! (small images are scaled up), then optionally center-cropped to a square
//! whose edge is the shorter side. A 300×200 photo at size 200 becomes a
//! 200×133 fit and a 133×133 tile. The crop direction follows the orientation
//! of the original photo.
//!
//! ## Runtime Template, Compile-Time Grid
//!
//! The page shell is a user-owned HTML file read at build time, so the look of
//! the gallery can change without rebuilding the binary. The grid itself is
//! rendered with [Maud](https://maud.lambda.xyz/), which escapes every file
//! name and the title automatically.
//!
//! ## Deterministic Output
//!
//! Images are processed in parallel, but results are collected in scan order,
//! and numeric ordering is a stable sort. Two runs over the same directory
//! produce byte-identical pages.

pub mod config;
pub mod generate;
pub mod imaging;
pub mod naming;
pub mod order;
pub mod output;
pub mod pipeline;
pub mod process;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

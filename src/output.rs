//! CLI output formatting for all pipeline stages.
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.
//!
//! ## Check
//!
//! ```text
//! Photos (3)
//! 001 10-b.jpg  horizontal
//! 002 3-a.jpg   vertical
//! 003 1-c.jpg   vertical
//! ```
//!
//! ## Process
//!
//! ```text
//! Writing 3 thumbnails
//! 1 of 3 10-b.jpg (133x133)
//! 2 of 3 1-c.jpg (133x133)
//! 3 of 3 3-a.jpg (200x200)
//! ```
//!
//! ## Build
//!
//! ```text
//! Generated index.html (3 photos, 3 thumbnails)
//! ```

use crate::pipeline::BuildReport;
use crate::process::ProcessEvent;
use crate::types::ImageRecord;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format the ordered gallery as an inventory, one photo per line.
pub fn format_records(records: &[ImageRecord]) -> Vec<String> {
    let width = records
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = vec![format!("Photos ({})", records.len())];
    for (i, record) in records.iter().enumerate() {
        lines.push(format!(
            "{} {:<width$}  {}",
            format_index(i + 1),
            record.name,
            record.orientation,
            width = width
        ));
    }
    lines
}

pub fn print_records(records: &[ImageRecord]) {
    for line in format_records(records) {
        println!("{}", line);
    }
}

/// Format a single process progress event as display lines.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::Started { total, thumbnails } => {
            if *thumbnails {
                vec![format!("Writing {} thumbnails", total)]
            } else {
                vec![format!("Reading {} images (thumbnails disabled)", total)]
            }
        }
        ProcessEvent::ThumbnailWritten {
            completed,
            total,
            name,
            dimensions: (w, h),
        } => vec![format!("{} of {} {} ({}x{})", completed, total, name, w, h)],
    }
}

/// Format the closing summary of a build.
pub fn format_build_summary(report: &BuildReport) -> Vec<String> {
    vec![format!(
        "Generated {} ({} photos, {} thumbnails)",
        report.output.display(),
        report.records.len(),
        report.thumbnails
    )]
}

pub fn print_build_summary(report: &BuildReport) {
    for line in format_build_summary(report) {
        println!("{}", line);
    }
}

//! Pure calculation functions for thumbnail geometry.
//!
//! All functions here are pure and testable without any I/O or images.

use crate::types::Orientation;

/// Square region cut out of a resized image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

/// Calculate the dimensions of an image fitted into a `box_size × box_size` box.
///
/// The longer edge becomes `box_size`; the shorter edge is scaled by the same
/// ratio and rounded, never below 1 pixel. Smaller sources are scaled up.
///
/// # Examples
/// ```
/// # use gallerist::imaging::calculate_fit_dimensions;
/// assert_eq!(calculate_fit_dimensions((300, 200), 200), (200, 133));
/// assert_eq!(calculate_fit_dimensions((200, 300), 200), (133, 200));
/// ```
pub fn calculate_fit_dimensions(source: (u32, u32), box_size: u32) -> (u32, u32) {
    let (src_w, src_h) = source;
    if src_w == 0 || src_h == 0 {
        return (box_size, box_size);
    }

    let scale = |short: u32, long: u32| -> u32 {
        let scaled = (short as f64 * box_size as f64 / long as f64).round() as u32;
        scaled.clamp(1, box_size)
    };

    if src_w >= src_h {
        (box_size, scale(src_h, src_w))
    } else {
        (scale(src_w, src_h), box_size)
    }
}

/// Calculate the centered square crop of a resized image.
///
/// Horizontal originals are trimmed left and right, vertical (and square)
/// originals top and bottom. Offsets use integer division, so an odd margin
/// leaves the extra pixel on the far side.
pub fn calculate_center_crop(resized: (u32, u32), orientation: Orientation) -> CropRect {
    let (w, h) = resized;
    match orientation {
        Orientation::Horizontal => {
            let size = h.min(w);
            CropRect {
                x: w.saturating_sub(size) / 2,
                y: 0,
                size,
            }
        }
        Orientation::Vertical => {
            let size = w.min(h);
            CropRect {
                x: 0,
                y: h.saturating_sub(size) / 2,
                size,
            }
        }
    }
}

//! HTML page generation.
//!
//! Final stage of the build pipeline. Takes the ordered records and writes the
//! gallery page.
//!
//! ## Templates
//!
//! The page layout lives in a user-editable template read at build time
//! (`template` in `gallerist.toml`). It is plain HTML with three placeholders:
//!
//! | Placeholder | Replaced with |
//! |---|---|
//! | `{{title}}` | gallery title, HTML-escaped |
//! | `{{count}}` | number of photos |
//! | `{{gallery}}` | the photo grid (required) |
//!
//! Placeholders are substituted in a single pass, so a title that happens to
//! contain `{{gallery}}` stays literal text. Unknown `{{...}}` sequences are
//! left untouched. `gallerist gen-template` prints the stock template.
//!
//! ## Grid markup
//!
//! The grid is rendered with [maud](https://maud.lambda.xyz/), so file names
//! are HTML-escaped automatically. Link targets are also percent-encoded per
//! path segment, so `sea #2.jpg` links to `sea%20%232.jpg`:
//!
//! ```html
//! <div class="gallery">
//!   <a class="photo horizontal" href="images/fulls/1-x.jpg">
//!     <img src="images/thumbs/1-x.jpg" alt="1-x.jpg" loading="lazy">
//!   </a>
//! </div>
//! ```
//!
//! The orientation class is emitted whether or not thumbnails were cropped.

use crate::config::GalleryConfig;
use crate::types::ImageRecord;
use maud::{Markup, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to read template {path}: {source}")]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Template has no {{{{gallery}}}} placeholder")]
    MissingGalleryPlaceholder,
}

const STOCK_TEMPLATE: &str = include_str!("../static/template.html");

/// The stock page template, printed by `gallerist gen-template`.
pub fn stock_template() -> &'static str {
    STOCK_TEMPLATE
}

/// URL prefixes the grid links to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLinks {
    pub fulls: String,
    pub thumbs: String,
}

impl ImageLinks {
    /// Link to the configured directories, relative to the page.
    pub fn from_config(config: &GalleryConfig) -> Self {
        Self {
            fulls: to_href(&config.images.fulls),
            thumbs: to_href(&config.images.thumbs),
        }
    }
}

/// Normalize a configured directory into a URL path prefix.
fn to_href(dir: &str) -> String {
    let href = dir.replace('\\', "/");
    let href = href.strip_prefix("./").unwrap_or(&href);
    href.trim_end_matches('/').to_string()
}

/// Percent-encode one URL path segment. Only RFC 3986 unreserved
/// characters pass through unchanged.
fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

fn join_href(prefix: &str, name: &str) -> String {
    let name = encode_segment(name);
    if prefix.is_empty() {
        return name;
    }
    let prefix: Vec<String> = prefix.split('/').map(encode_segment).collect();
    format!("{}/{}", prefix.join("/"), name)
}

/// Render the photo grid for the ordered records.
pub fn render_gallery(records: &[ImageRecord], links: &ImageLinks) -> Markup {
    html! {
        div.gallery {
            @for record in records {
                a class={ "photo " (record.orientation.as_str()) } href=(join_href(&links.fulls, &record.name)) {
                    img src=(join_href(&links.thumbs, &record.name)) alt=(record.name) loading="lazy";
                }
            }
        }
    }
}

/// Substitute the placeholders in `template`.
pub fn render_page(
    template: &str,
    title: &str,
    records: &[ImageRecord],
    links: &ImageLinks,
) -> Result<String, RenderError> {
    let mut out = String::with_capacity(template.len() + records.len() * 160);
    let mut rest = template;
    let mut saw_gallery = false;

    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start + 2..].find("}}") else {
            break;
        };
        let key = rest[start + 2..start + 2 + len].trim();
        out.push_str(&rest[..start]);

        match key {
            "title" => out.push_str(&html! { (title) }.into_string()),
            "count" => out.push_str(&records.len().to_string()),
            "gallery" => {
                saw_gallery = true;
                out.push_str(&render_gallery(records, links).into_string());
            }
            _ => out.push_str(&rest[start..start + 2 + len + 2]),
        }
        rest = &rest[start + 2 + len + 2..];
    }
    out.push_str(rest);

    if !saw_gallery {
        return Err(RenderError::MissingGalleryPlaceholder);
    }
    Ok(out)
}

/// Read the template, render it and write the page.
pub fn generate(
    template_path: &Path,
    output_path: &Path,
    title: &str,
    records: &[ImageRecord],
    links: &ImageLinks,
) -> Result<(), RenderError> {
    let template = fs::read_to_string(template_path).map_err(|source| RenderError::Template {
        path: template_path.to_path_buf(),
        source,
    })?;

    let page = render_page(&template, title, records, links)?;

    fs::write(output_path, page).map_err(|source| RenderError::Write {
        path: output_path.to_path_buf(),
        source,
    })
}

//! Gallery rendering: projecting stored entries into display-ready items.
//!
//! Rendering is a pure function of the input sequence; the only state the
//! [`Gallery`] holds is the batch of transient items from the previous
//! render, which it releases before building the next one so display
//! handles never accumulate across redraws.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::entry::Entry;

/// Default strftime pattern for the gallery timestamp column.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A display-ready view of one journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryItem {
    /// Transient `data:` URL derived from the image payload. Valid only
    /// for the lifetime of the render batch that produced it.
    pub display_url: String,
    /// The entry's description.
    pub caption: String,
    /// Creation time formatted in the local timezone.
    pub taken_at: String,
}

/// Renders entry sequences into gallery items.
#[derive(Debug)]
pub struct Gallery {
    timestamp_format: String,
    items: Vec<GalleryItem>,
}

impl Gallery {
    /// Create a gallery using [`DEFAULT_TIMESTAMP_FORMAT`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_format(DEFAULT_TIMESTAMP_FORMAT)
    }

    /// Create a gallery with a custom strftime timestamp pattern.
    #[must_use]
    pub fn with_format(timestamp_format: impl Into<String>) -> Self {
        Self {
            timestamp_format: timestamp_format.into(),
            items: Vec::new(),
        }
    }

    /// Project entries into display items, preserving input order.
    ///
    /// Items from the previous render are released first; the caller gets
    /// a view of the freshly built batch.
    pub fn render(&mut self, entries: &[Entry]) -> &[GalleryItem] {
        self.items.clear();
        self.items.extend(entries.iter().map(|entry| GalleryItem {
            display_url: display_url(&entry.image),
            caption: entry.description.clone(),
            taken_at: format_timestamp(entry.created_at, &self.timestamp_format),
        }));
        &self.items
    }

    /// The items from the most recent render.
    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    /// Release the current batch of display items.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive a transient `data:` URL for an encoded image payload.
#[must_use]
pub fn display_url(image: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        sniff_media_type(image),
        STANDARD.encode(image)
    )
}

/// Best-effort media type detection from the payload's magic bytes.
///
/// The capture pipeline normally hands over WebP, but the store treats
/// payloads as opaque, so anything unrecognized falls back to a generic
/// binary type rather than failing the render.
fn sniff_media_type(image: &[u8]) -> &'static str {
    if image.len() >= 12 && &image[0..4] == b"RIFF" && &image[8..12] == b"WEBP" {
        "image/webp"
    } else if image.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        "image/png"
    } else if image.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if image.starts_with(b"GIF8") {
        "image/gif"
    } else {
        "application/octet-stream"
    }
}

/// Format a creation timestamp in the local timezone.
fn format_timestamp(created_at: DateTime<Utc>, format: &str) -> String {
    created_at.with_timezone(&Local).format(format).to_string()
}

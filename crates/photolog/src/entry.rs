//! The journal entry domain type.
//!
//! An [`Entry`] is one saved photo-journal record: an encoded image
//! payload, a description, and a creation timestamp. Entries are immutable
//! once stored; the only lifecycle operations are create and read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder stored in place of a blank or whitespace-only description.
pub const DEFAULT_DESCRIPTION: &str = "No description";

/// A single photo-journal record.
///
/// The image payload is opaque to the journal: whatever encoded raster
/// bytes the capture pipeline produced are stored and returned verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique, monotonically increasing identifier, assigned by the record
    /// store on first write.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The encoded image payload.
    pub image: Vec<u8>,

    /// Free-form caption. Never empty; see [`DEFAULT_DESCRIPTION`].
    pub description: String,

    /// When this entry was created. Drives gallery ordering.
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Create a new entry from a captured image payload.
    ///
    /// Stamps the creation time and substitutes the placeholder for a
    /// blank description. The id stays unset until the store assigns one.
    #[must_use]
    pub fn new(image: Vec<u8>, description: &str) -> Self {
        Self {
            id: None,
            image,
            description: normalize_description(description),
            created_at: Utc::now(),
        }
    }

    /// Size of the encoded image payload in bytes.
    #[must_use]
    pub fn image_len(&self) -> usize {
        self.image.len()
    }

    /// Check whether the description is the substituted placeholder.
    #[must_use]
    pub fn has_placeholder_description(&self) -> bool {
        self.description == DEFAULT_DESCRIPTION
    }
}

/// Substitute the placeholder for blank input; keep everything else as-is.
fn normalize_description(raw: &str) -> String {
    if raw.trim().is_empty() {
        DEFAULT_DESCRIPTION.to_string()
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry() {
        let entry = Entry::new(vec![1, 2, 3], "Sunrise over the bay");

        assert!(entry.id.is_none());
        assert_eq!(entry.image, vec![1, 2, 3]);
        assert_eq!(entry.description, "Sunrise over the bay");
        assert!(!entry.has_placeholder_description());
    }

    #[test]
    fn test_blank_description_gets_placeholder() {
        let entry = Entry::new(vec![0xFF], "");
        assert_eq!(entry.description, DEFAULT_DESCRIPTION);
        assert!(entry.has_placeholder_description());
    }

    #[test]
    fn test_whitespace_only_description_gets_placeholder() {
        let entry = Entry::new(vec![0xFF], "  \t\n ");
        assert_eq!(entry.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_padded_description_is_kept_verbatim() {
        let entry = Entry::new(vec![0xFF], "  lighthouse  ");
        assert_eq!(entry.description, "  lighthouse  ");
    }

    #[test]
    fn test_image_len() {
        let entry = Entry::new(vec![0u8; 42], "x");
        assert_eq!(entry.image_len(), 42);
    }

    #[test]
    fn test_created_at_is_recent() {
        let before = Utc::now();
        let entry = Entry::new(Vec::new(), "now");
        let after = Utc::now();

        assert!(entry.created_at >= before);
        assert!(entry.created_at <= after);
    }

    #[test]
    fn test_serialization_skips_unset_id() {
        let entry = Entry::new(vec![9], "caption");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("\"id\""));

        let mut stored = entry;
        stored.id = Some(7);
        let json = serde_json::to_string(&stored).unwrap();
        assert!(json.contains("\"id\":7"));
    }
}

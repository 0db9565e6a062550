//! Domain façade over the record store.
//!
//! The repository owns no state of its own: it borrows the store, builds
//! records on the way in (placeholder defaulting, creation timestamp) and
//! orders them on the way out. Store errors propagate unchanged.

use tracing::debug;

use crate::entry::Entry;
use crate::error::Result;
use crate::store::RecordStore;

/// Stateless façade translating journal operations into store calls.
#[derive(Debug)]
pub struct EntryRepository<'s> {
    store: &'s RecordStore,
}

impl<'s> EntryRepository<'s> {
    /// Create a repository over the given store.
    #[must_use]
    pub fn new(store: &'s RecordStore) -> Self {
        Self { store }
    }

    /// Persist a captured image with its description.
    ///
    /// Builds the entry (blank descriptions become the placeholder, the
    /// creation time is stamped here) and writes it. The returned entry
    /// carries the id the store assigned.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::Error::WriteFailed`] and
    /// [`crate::Error::StorageUnavailable`] from the store unchanged.
    pub fn save_entry(&self, image: Vec<u8>, description: &str) -> Result<Entry> {
        let mut entry = Entry::new(image, description);
        let id = self.store.put(&entry)?;
        entry.id = Some(id);
        debug!("Saved entry {} ({})", id, entry.description);
        Ok(entry)
    }

    /// List every entry, most recent first.
    ///
    /// Entries are ordered by creation time descending, with the id as a
    /// deterministic tie-break for entries created within the same
    /// timestamp. An empty journal yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::Error::ReadFailed`] from the store unchanged.
    pub fn list_entries(&self) -> Result<Vec<Entry>> {
        let mut entries = self.store.get_all()?;
        entries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::DEFAULT_DESCRIPTION;
    use chrono::{Duration, Utc};

    fn create_test_store() -> RecordStore {
        RecordStore::open_in_memory().expect("failed to create test store")
    }

    #[test]
    fn test_save_then_list_roundtrip() {
        let store = create_test_store();
        let repo = EntryRepository::new(&store);
        let payload = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

        let saved = repo.save_entry(payload.clone(), "harbor lights").unwrap();
        assert!(saved.id.is_some());

        let listed = repo.list_entries().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, saved.id);
        assert_eq!(listed[0].description, "harbor lights");
        assert_eq!(listed[0].image, payload);
    }

    #[test]
    fn test_blank_description_stored_as_placeholder() {
        let store = create_test_store();
        let repo = EntryRepository::new(&store);

        repo.save_entry(vec![1], "").unwrap();
        repo.save_entry(vec![2], "   ").unwrap();

        let listed = repo.list_entries().unwrap();
        assert_eq!(listed.len(), 2);
        for entry in &listed {
            assert_eq!(entry.description, DEFAULT_DESCRIPTION);
            assert!(!entry.description.is_empty());
        }
    }

    #[test]
    fn test_list_orders_by_recency() {
        let store = create_test_store();
        let repo = EntryRepository::new(&store);

        // Write entries with explicit timestamps T1 < T2 < T3, out of order
        let base = Utc::now();
        for (offset_secs, caption) in [(2i64, "t3"), (0, "t1"), (1, "t2")] {
            let mut entry = Entry::new(vec![0], caption);
            entry.created_at = base + Duration::seconds(offset_secs);
            store.put(&entry).unwrap();
        }

        let listed = repo.list_entries().unwrap();
        let captions: Vec<&str> = listed.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(captions, vec!["t3", "t2", "t1"]);

        for pair in listed.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn test_same_timestamp_breaks_tie_by_id() {
        let store = create_test_store();
        let repo = EntryRepository::new(&store);

        let instant = Utc::now();
        for caption in ["older", "newer"] {
            let mut entry = Entry::new(vec![0], caption);
            entry.created_at = instant;
            store.put(&entry).unwrap();
        }

        let listed = repo.list_entries().unwrap();
        assert_eq!(listed[0].description, "newer");
        assert_eq!(listed[1].description, "older");
    }

    #[test]
    fn test_empty_journal_lists_empty() {
        let store = create_test_store();
        let repo = EntryRepository::new(&store);

        let listed = repo.list_entries().unwrap();
        assert!(listed.is_empty());
    }

    #[test]
    fn test_list_is_idempotent() {
        let store = create_test_store();
        let repo = EntryRepository::new(&store);

        repo.save_entry(vec![1, 2], "one").unwrap();
        repo.save_entry(vec![3, 4], "two").unwrap();

        let first = repo.list_entries().unwrap();
        let second = repo.list_entries().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_overwrite_keeps_ids_unique() {
        let store = create_test_store();
        let repo = EntryRepository::new(&store);

        let saved = repo.save_entry(vec![1], "before").unwrap();

        let mut replacement = Entry::new(vec![2], "after");
        replacement.id = saved.id;
        store.put(&replacement).unwrap();

        let listed = repo.list_entries().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, saved.id);
        assert_eq!(listed[0].description, "after");

        let mut ids: Vec<_> = listed.iter().map(|e| e.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), listed.len());
    }

    #[test]
    fn test_each_save_adds_exactly_one_entry() {
        let store = create_test_store();
        let repo = EntryRepository::new(&store);

        for n in 1..=5u8 {
            repo.save_entry(vec![n], &format!("entry {n}")).unwrap();
            assert_eq!(repo.list_entries().unwrap().len(), usize::from(n));
        }
    }
}

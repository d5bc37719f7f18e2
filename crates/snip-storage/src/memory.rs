use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use snip_core::store::Result;
use snip_core::{MappingStore, ReadStore, ShortId, StorageError};
use tracing::trace;

/// In-memory implementation of [`MappingStore`] using two DashMaps.
///
/// DashMap shards its locks, so lookups and inserts on different keys
/// proceed without blocking each other.
///
/// Lock order: `add` holds the reverse-map entry for the url while it takes
/// the forward-map entry for the id. Nothing locks forward then reverse.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    forward: DashMap<ShortId, String>,
    reverse: DashMap<String, ShortId>,
}

impl InMemoryStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

impl ReadStore for InMemoryStore {
    fn get_by_short_id(&self, short_id: &str) -> Result<String> {
        match self.forward.get(short_id) {
            Some(url) => Ok(url.value().clone()),
            None => {
                trace!(short_id, "short id not found");
                Err(StorageError::NotFound(short_id.to_owned()))
            }
        }
    }

    fn get_short_id_by_url(&self, original_url: &str) -> Option<ShortId> {
        self.reverse
            .get(original_url)
            .map(|short_id| short_id.value().clone())
    }

    fn exists(&self, short_id: &str) -> bool {
        self.forward.contains_key(short_id)
    }
}

impl MappingStore for InMemoryStore {
    fn add(&self, short_id: &ShortId, original_url: &str) -> Result<()> {
        let reverse = self.reverse.entry(original_url.to_owned());

        let forward = match self.forward.entry(short_id.clone()) {
            Entry::Occupied(_) => return Err(StorageError::Conflict(short_id.to_string())),
            Entry::Vacant(forward) => forward,
        };

        match reverse {
            Entry::Occupied(existing) => Err(StorageError::UrlExists {
                url: original_url.to_owned(),
                existing: existing.get().clone(),
            }),
            Entry::Vacant(reverse) => {
                forward.insert(original_url.to_owned());
                reverse.insert(short_id.clone());
                trace!(%short_id, original_url, "mapping added");
                Ok(())
            }
        }
    }
}

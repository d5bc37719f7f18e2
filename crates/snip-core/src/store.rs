use crate::error::StorageError;
use crate::short_id::ShortId;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of a mapping store.
///
/// Reads observe a consistent per-key snapshot at the instant of the call.
pub trait ReadStore: Send + Sync + 'static {
    /// Retrieves the original URL for a short id.
    /// Returns `Err(NotFound)` if the id has no mapping.
    fn get_by_short_id(&self, short_id: &str) -> Result<String>;

    /// Retrieves the short id already assigned to `original_url`, if any.
    fn get_short_id_by_url(&self, original_url: &str) -> Option<ShortId>;

    /// Checks whether a short id is already taken.
    fn exists(&self, short_id: &str) -> bool;
}

/// A bidirectional `short id <-> original url` store.
pub trait MappingStore: ReadStore {
    /// Inserts the forward and reverse entries as one atomic step.
    ///
    /// Returns `Err(Conflict)` if the short id is taken, and
    /// `Err(UrlExists)` if the url is already mapped to another short id.
    /// Existing entries are never overwritten.
    fn add(&self, short_id: &ShortId, original_url: &str) -> Result<()>;
}

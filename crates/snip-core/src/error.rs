use crate::short_id::ShortId;
use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid short id: {0}")]
    InvalidShortId(String),
}

/// Errors returned by a [`MappingStore`](crate::store::MappingStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("short id already exists: {0}")]
    Conflict(String),
    #[error("url {url} is already mapped to {existing}")]
    UrlExists { url: String, existing: ShortId },
    #[error("short id not found: {0}")]
    NotFound(String),
}

/// Errors surfaced by the shortening service to its transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("shortened url not found: {0}")]
    NotFound(String),
    #[error("short id conflict: {0}")]
    Conflict(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<CoreError> for ShortenerError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::InvalidShortId(message) => Self::Storage(message),
        }
    }
}

impl From<StorageError> for ShortenerError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::Conflict(code) => Self::Conflict(code),
            StorageError::NotFound(code) => Self::NotFound(code),
            other @ StorageError::UrlExists { .. } => Self::Storage(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_map_onto_shortener_errors() {
        assert_eq!(
            ShortenerError::from(StorageError::Conflict("deadbeef".into())),
            ShortenerError::Conflict("deadbeef".into())
        );
        assert_eq!(
            ShortenerError::from(StorageError::NotFound("nope".into())),
            ShortenerError::NotFound("nope".into())
        );
        assert!(matches!(
            ShortenerError::from(StorageError::UrlExists {
                url: "http://example.com".into(),
                existing: ShortId::new_unchecked("deadbeef"),
            }),
            ShortenerError::Storage(_)
        ));
    }

    #[test]
    fn core_errors_surface_as_storage_faults() {
        let err = ShortenerError::from(CoreError::InvalidShortId("too short".into()));
        assert_eq!(err, ShortenerError::Storage("too short".into()));
    }
}

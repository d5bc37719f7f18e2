use crate::settings::ShortenerSettings;
use crate::validate::validate_url;
use snip_core::{MappingStore, ShortId, ShortenedUrl, Shortener, ShortenerError, StorageError};
use snip_generator::Generator;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `MappingStore` and a `Generator` to handle:
/// - URL validation
/// - Deduplication (one short id per distinct url string)
/// - Short id generation, regenerating on collision up to
///   [`ShortenerSettings::max_attempts`] times
#[derive(Debug)]
pub struct ShortenerService<S, G> {
    store: Arc<S>,
    generator: G,
    settings: ShortenerSettings,
}

impl<S: MappingStore, G: Generator> ShortenerService<S, G> {
    /// Creates a new `ShortenerService` with default settings.
    ///
    /// The store is shared so the composition root can keep reading it.
    pub fn new(store: Arc<S>, generator: G) -> Self {
        Self {
            store,
            generator,
            settings: ShortenerSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: ShortenerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The store this service writes to.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Tries one freshly generated candidate id for `original_url`.
    fn try_insert(&self, original_url: &str) -> Result<ShortId, StorageError> {
        let candidate = self.generator.generate();

        if self.store.exists(candidate.as_str()) {
            return Err(StorageError::Conflict(candidate.to_string()));
        }

        self.store.add(&candidate, original_url)?;
        Ok(candidate)
    }
}

impl<S: MappingStore, G: Generator> Shortener for ShortenerService<S, G> {
    fn shorten(
        &self,
        original_url: &str,
        host_domain: &str,
    ) -> Result<ShortenedUrl, ShortenerError> {
        validate_url(original_url)?;

        if let Some(existing) = self.store.get_short_id_by_url(original_url) {
            debug!(short_id = %existing, original_url, "url already shortened");
            return Ok(ShortenedUrl::new(existing, host_domain));
        }

        let max_attempts = self.settings.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.try_insert(original_url) {
                Ok(short_id) => {
                    info!(short_id = %short_id, original_url, "url shortened");
                    return Ok(ShortenedUrl::new(short_id, host_domain));
                }
                // Another caller mapped the same url first; share its id.
                Err(StorageError::UrlExists { existing, .. }) => {
                    debug!(short_id = %existing, original_url, "url shortened concurrently");
                    return Ok(ShortenedUrl::new(existing, host_domain));
                }
                Err(StorageError::Conflict(short_id)) if attempt < max_attempts => {
                    warn!(short_id = %short_id, attempt, max_attempts, "short id collision, regenerating");
                    attempt += 1;
                }
                Err(err) => {
                    warn!(error = %err, attempt, "giving up on shortening url");
                    return Err(err.into());
                }
            }
        }
    }

    fn resolve(&self, short_id: &str) -> Result<String, ShortenerError> {
        trace!(short_id, "resolving short id");

        let original_url = self.store.get_by_short_id(short_id)?;
        debug!(short_id, original_url = %original_url, "resolved short id");
        Ok(original_url)
    }
}

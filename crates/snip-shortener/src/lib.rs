//! URL shortening service implementation.
//!
//! This crate composes a [`MappingStore`](snip_core::MappingStore) and a
//! [`Generator`](snip_generator::Generator) into the request/response
//! semantics of the shortener. Core types are re-exported from `snip_core`.

pub mod service;
pub mod settings;
pub mod validate;

pub use service::ShortenerService;
pub use settings::ShortenerSettings;
pub use snip_core::{ShortenedUrl, Shortener, ShortenerError};

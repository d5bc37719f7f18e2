//! Core types and traits for the snip URL shortener.
//!
//! This crate provides the types shared by the mapping store, the
//! shortening service and the HTTP gateway.

pub mod error;
pub mod short_id;
pub mod shortener;
pub mod store;

pub use error::{CoreError, ShortenerError, StorageError};
pub use short_id::ShortId;
pub use shortener::{ShortenedUrl, Shortener};
pub use store::{MappingStore, ReadStore};

use crate::short_id::ShortId;
use serde::{Deserialize, Serialize};

type Result<T> = std::result::Result<T, crate::error::ShortenerError>;

/// The outcome of shortening a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenedUrl {
    /// The short id assigned to the original URL.
    pub short_id: ShortId,
    /// `host_domain + "/" + short_id`.
    pub short_url: String,
}

impl ShortenedUrl {
    pub fn new(short_id: ShortId, host_domain: &str) -> Self {
        let short_url = short_id.to_url(host_domain);
        Self {
            short_id,
            short_url,
        }
    }
}

pub trait Shortener: Send + Sync + 'static {
    /// Shortens `original_url`, returning the existing mapping if the exact
    /// same URL was shortened before.
    fn shorten(&self, original_url: &str, host_domain: &str) -> Result<ShortenedUrl>;

    /// Resolves a short id back to its original URL.
    fn resolve(&self, short_id: &str) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortened_url_serializes_in_camel_case() {
        let shortened = ShortenedUrl::new(ShortId::new_unchecked("abcd1234"), "http://localhost");

        let json = serde_json::to_value(&shortened).unwrap();
        assert_eq!(json["shortId"], "abcd1234");
        assert_eq!(json["shortUrl"], "http://localhost/abcd1234");
    }
}

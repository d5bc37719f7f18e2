use std::sync::Arc;

use snip_core::Shortener;

#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    public_base_url: Option<String>,
}

impl AppState {
    /// `public_base_url` overrides the host domain derived from each request.
    /// A trailing slash is dropped.
    pub fn new(shortener: Arc<dyn Shortener>, public_base_url: Option<String>) -> Self {
        Self {
            shortener,
            public_base_url: public_base_url.map(|url| url.trim_end_matches('/').to_owned()),
        }
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn public_base_url(&self) -> Option<&str> {
        self.public_base_url.as_deref()
    }
}

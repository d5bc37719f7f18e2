mod health;
mod url;

pub use health::health_handler;
pub use url::{resolve_url_handler, shorten_url_handler};

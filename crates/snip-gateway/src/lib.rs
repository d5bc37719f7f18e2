//! HTTP transport for the snip shortener.
//!
//! Derives the host domain from the request, calls into the
//! [`Shortener`](snip_core::Shortener), maps its errors onto status codes
//! and issues redirects. No business logic lives here.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;

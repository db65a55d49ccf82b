//! HTTP routing and per-branch request processing

pub mod handler;
pub mod helpers;
pub mod interactive;
pub mod parsing;
pub mod provisioning;
pub mod slash;

// Re-export the router constructor for convenience
pub use handler::router;

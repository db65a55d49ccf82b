//! All Slack-specific functionality

pub mod client;
pub mod modal_builder;

// Re-export main types for convenience
pub use client::{SlackClient, build_views_open_payload};
pub use modal_builder::build_request_modal;

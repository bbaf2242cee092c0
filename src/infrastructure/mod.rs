// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete access to the outside world: the content store over HTTP
//! (`reqwest`) or on the local filesystem (`tokio::fs`).
//!
//! # Available Adapters
//!
//! - [`content`]: Document and image fetching ([`ContentClient`])

pub mod content;

// Re-export main types for convenience
pub use content::{ContentClient, ContentSource, ImageLocation};

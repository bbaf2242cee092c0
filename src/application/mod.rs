// SPDX-License-Identifier: MPL-2.0
//! Application layer - Content caching and screen queries.
//!
//! - [`content_cache`]: The shared feed of work bodies, image pool and journal
//! - [`query`]: Read-side services that derive screen state from the feed
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer produces the data stored here
//! - Presentation layer reads snapshots and drives the query services
//!
//! # Example
//!
//! ```ignore
//! use folio::application::content_cache::ContentCache;
//! use folio::application::query::WorkNavigator;
//!
//! let cache = ContentCache::new();
//! let mut navigator = WorkNavigator::new();
//! navigator.resolve(cache.snapshot(), Some("coastlines"));
//! ```

pub mod content_cache;
pub mod query;

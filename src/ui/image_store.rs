// SPDX-License-Identifier: MPL-2.0
//! In-memory cache of image handles, keyed by resolved location.
//!
//! Local files are handed to the renderer by path and are ready immediately.
//! Remote images go through a `Loading` slot until their download completes.

use crate::error::Error;
use crate::infrastructure::content::ImageLocation;
use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

#[derive(Debug, Clone)]
pub enum ImageSlot {
    Loading,
    Ready(Handle),
    Failed(String),
}

#[derive(Debug)]
pub struct ImageStore {
    slots: LruCache<ImageLocation, ImageSlot>,
}

impl ImageStore {
    /// Creates a store holding at most `capacity` images (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            slots: LruCache::new(capacity),
        }
    }

    /// Current slot of `location`, without touching recency.
    #[must_use]
    pub fn slot(&self, location: &ImageLocation) -> Option<&ImageSlot> {
        self.slots.peek(location)
    }

    /// Marks `location` as wanted.
    ///
    /// Returns `true` when the caller must start a download. Known
    /// locations (loading, ready, or failed) are only promoted.
    pub fn request(&mut self, location: &ImageLocation) -> bool {
        if self.slots.get(location).is_some() {
            return false;
        }
        match location {
            ImageLocation::Local(path) => {
                self.slots
                    .put(location.clone(), ImageSlot::Ready(Handle::from_path(path)));
                false
            }
            ImageLocation::Remote(_) => {
                self.slots.put(location.clone(), ImageSlot::Loading);
                true
            }
        }
    }

    /// Stores the outcome of a download.
    pub fn complete(&mut self, location: ImageLocation, result: Result<Handle, Error>) {
        let slot = match result {
            Ok(handle) => ImageSlot::Ready(handle),
            Err(err) => {
                tracing::warn!(?location, error = %err, "image failed to load");
                ImageSlot::Failed(err.to_string())
            }
        };
        self.slots.put(location, slot);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn remote(name: &str) -> ImageLocation {
        ImageLocation::Remote(format!("https://example.com/images/{name}"))
    }

    #[test]
    fn remote_request_starts_download_once() {
        let mut store = ImageStore::new(4);
        assert!(store.request(&remote("a.jpg")));
        assert!(matches!(store.slot(&remote("a.jpg")), Some(ImageSlot::Loading)));
        assert!(!store.request(&remote("a.jpg")));
    }

    #[test]
    fn local_request_is_ready_immediately() {
        let mut store = ImageStore::new(4);
        let local = ImageLocation::Local(PathBuf::from("/srv/site/images/a.jpg"));
        assert!(!store.request(&local));
        assert!(matches!(store.slot(&local), Some(ImageSlot::Ready(_))));
    }

    #[test]
    fn completion_replaces_loading_slot() {
        let mut store = ImageStore::new(4);
        store.request(&remote("a.jpg"));
        store.complete(
            remote("a.jpg"),
            Err(Error::Status {
                status: 404,
                document: "a.jpg".into(),
            }),
        );
        match store.slot(&remote("a.jpg")) {
            Some(ImageSlot::Failed(message)) => assert!(message.contains("404")),
            other => panic!("expected failed slot, got {other:?}"),
        }
        // Failed images are not retried automatically.
        assert!(!store.request(&remote("a.jpg")));
    }

    #[test]
    fn least_recently_used_entry_is_evicted() {
        let mut store = ImageStore::new(2);
        store.request(&remote("a.jpg"));
        store.request(&remote("b.jpg"));
        store.request(&remote("a.jpg")); // promote a
        store.request(&remote("c.jpg")); // evicts b

        assert_eq!(store.len(), 2);
        assert!(store.slot(&remote("a.jpg")).is_some());
        assert!(store.slot(&remote("b.jpg")).is_none());
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut store = ImageStore::new(0);
        store.request(&remote("a.jpg"));
        store.request(&remote("b.jpg"));
        assert_eq!(store.len(), 1);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Process-wide content cache for the documents shared between screens.
//!
//! The work bodies, the image pool and the journal entries are fetched
//! together once at startup. The cache exposes the result of that fetch
//! cycle as a read-only [`LoadState`] snapshot: either everything is
//! available, or nothing is (still loading, or failed with a message).

use crate::domain::content::{ImageRef, JournalEntry, WorkBody};
use crate::error::Error;
use std::sync::Arc;

/// Tri-state status of an asynchronous load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// The fetch is in flight.
    Loading,
    /// The fetch completed and produced data.
    Ready(T),
    /// The fetch failed; the message is shown to the user as-is.
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    /// Builds a terminal state from a fetch result.
    pub fn from_result(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(err) => LoadState::Failed(err.to_string()),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// The three documents fetched in one cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkFeed {
    pub work_bodies: Vec<WorkBody>,
    pub image_pool: Vec<ImageRef>,
    pub journal_entries: Vec<JournalEntry>,
}

/// Identifies one fetch cycle so late results from a superseded cycle can
/// be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchCycle(u64);

/// Shared, lazily populated cache of the [`WorkFeed`].
#[derive(Debug, Default)]
pub struct ContentCache {
    feed: LoadState<Arc<WorkFeed>>,
    cycle: u64,
}

impl ContentCache {
    /// Creates a cache in the loading state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new fetch cycle. Any data from the previous cycle is dropped.
    pub fn begin_cycle(&mut self) -> FetchCycle {
        self.cycle += 1;
        self.feed = LoadState::Loading;
        FetchCycle(self.cycle)
    }

    /// Stores the result of a fetch cycle.
    ///
    /// Returns `false` (and leaves the cache untouched) when `cycle` is not
    /// the latest one.
    pub fn complete(&mut self, cycle: FetchCycle, result: Result<WorkFeed, Error>) -> bool {
        if cycle.0 != self.cycle {
            tracing::debug!(stale = cycle.0, current = self.cycle, "discarding stale feed");
            return false;
        }
        self.feed = LoadState::from_result(result.map(Arc::new));
        true
    }

    /// Read-only snapshot of the feed.
    #[must_use]
    pub fn snapshot(&self) -> &LoadState<Arc<WorkFeed>> {
        &self.feed
    }

    #[must_use]
    pub fn work_bodies(&self) -> Option<&[WorkBody]> {
        self.feed.ready().map(|feed| feed.work_bodies.as_slice())
    }

    #[must_use]
    pub fn image_pool(&self) -> Option<&[ImageRef]> {
        self.feed.ready().map(|feed| feed.image_pool.as_slice())
    }

    #[must_use]
    pub fn journal_entries(&self) -> Option<&[JournalEntry]> {
        self.feed.ready().map(|feed| feed.journal_entries.as_slice())
    }
}

/// Load state of a document fetched anew on every visit of a screen.
///
/// Each visit gets a number; a result is only accepted for the latest visit,
/// so a slow response from an earlier visit never overwrites a newer one.
#[derive(Debug, Clone)]
pub struct VisitLoad<T> {
    visit: u64,
    state: LoadState<T>,
}

impl<T> Default for VisitLoad<T> {
    fn default() -> Self {
        Self {
            visit: 0,
            state: LoadState::Loading,
        }
    }
}

impl<T> VisitLoad<T> {
    /// Starts a visit: the state goes back to loading.
    pub fn begin(&mut self) -> u64 {
        self.visit += 1;
        self.state = LoadState::Loading;
        self.visit
    }

    /// Stores a result if it belongs to the current visit.
    pub fn complete(&mut self, visit: u64, result: Result<T, Error>) -> bool {
        if visit != self.visit {
            return false;
        }
        self.state = LoadState::from_result(result);
        true
    }

    #[must_use]
    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    #[must_use]
    pub fn state_mut(&mut self) -> &mut LoadState<T> {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_feed() -> WorkFeed {
        WorkFeed {
            work_bodies: vec![WorkBody {
                id: "b1".into(),
                title: "Coast".into(),
                description: "Salt and fog".into(),
            }],
            image_pool: vec!["a.jpg".into(), "b.jpg".into()],
            journal_entries: Vec::new(),
        }
    }

    #[test]
    fn new_cache_is_loading_with_no_slots() {
        let cache = ContentCache::new();
        assert!(cache.snapshot().is_loading());
        assert!(cache.work_bodies().is_none());
        assert!(cache.image_pool().is_none());
        assert!(cache.journal_entries().is_none());
    }

    #[test]
    fn completed_cycle_exposes_all_slots() {
        let mut cache = ContentCache::new();
        let cycle = cache.begin_cycle();
        assert!(cache.complete(cycle, Ok(sample_feed())));

        assert_eq!(cache.work_bodies().map(<[_]>::len), Some(1));
        assert_eq!(cache.image_pool().map(<[_]>::len), Some(2));
        assert_eq!(cache.journal_entries().map(<[_]>::len), Some(0));
        assert!(cache.snapshot().error().is_none());
    }

    #[test]
    fn failed_cycle_clears_data_and_keeps_message() {
        let mut cache = ContentCache::new();
        let first = cache.begin_cycle();
        cache.complete(first, Ok(sample_feed()));

        let second = cache.begin_cycle();
        cache.complete(
            second,
            Err(Error::Status {
                status: 500,
                document: "homeImages.json".into(),
            }),
        );

        assert!(cache.work_bodies().is_none());
        assert_eq!(
            cache.snapshot().error(),
            Some("HTTP error! status: 500 for homeImages.json")
        );
    }

    #[test]
    fn stale_cycle_result_is_ignored() {
        let mut cache = ContentCache::new();
        let stale = cache.begin_cycle();
        let current = cache.begin_cycle();

        assert!(!cache.complete(stale, Ok(sample_feed())));
        assert!(cache.snapshot().is_loading());

        assert!(cache.complete(current, Ok(WorkFeed::default())));
        assert_eq!(cache.work_bodies().map(<[_]>::len), Some(0));
    }

    #[test]
    fn visit_load_accepts_only_latest_visit() {
        let mut load: VisitLoad<u32> = VisitLoad::default();
        let first = load.begin();
        let second = load.begin();

        assert!(!load.complete(first, Ok(1)));
        assert!(load.state().is_loading());
        assert!(load.complete(second, Ok(2)));
        assert_eq!(load.state().ready(), Some(&2));
    }

    #[test]
    fn visit_load_restarts_on_each_visit() {
        let mut load: VisitLoad<u32> = VisitLoad::default();
        let visit = load.begin();
        load.complete(visit, Err(Error::Http("offline".into())));
        assert_eq!(load.state().error(), Some("Network Error: offline"));

        load.begin();
        assert!(load.state().is_loading());
    }
}

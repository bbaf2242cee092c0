// SPDX-License-Identifier: MPL-2.0
//! Work screen navigation: which body is shown and which item of it.
//!
//! A body is displayed as a virtual sequence of `1 + |image pool|` items:
//! an image slot at index 0, the description panel at index 1, then the
//! remaining pool images. The cursor cycles through that sequence in both
//! directions.
//!
//! # Index mapping
//!
//! With `n = |pool|` and the cursor reduced modulo `1 + n`:
//!
//! | index | item                                   | alt number |
//! |-------|----------------------------------------|------------|
//! | 0     | `pool[0]`, or "no images" when `n = 0` | 1          |
//! | 1     | description panel                      | -          |
//! | i ≥ 2 | `pool[(i - 1) mod n]`                  | i          |

use crate::application::content_cache::{LoadState, WorkFeed};
use crate::domain::content::{find_body, ImageRef, WorkBody};
use std::sync::Arc;

/// Outcome of the last resolution, used to pick what the screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NavigatorStatus {
    /// The feed has not arrived yet.
    #[default]
    Loading,
    /// The feed failed to load.
    Failed(String),
    /// The route names a body that does not exist, or there are no bodies.
    NotFound,
    /// A body is active and the cursor is engaged.
    Active,
}

/// A single displayable item of the active body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkItem<'a> {
    /// An image from the pool. `number` is the 1-based label used in alt text.
    Image { reference: &'a str, number: usize },
    /// The body's title and description.
    Description { title: &'a str, description: &'a str },
    /// Index 0 with an empty image pool.
    NoImages,
}

/// Snapshot of the cursor for position indicators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Cursor position (0-indexed).
    pub current_index: usize,
    /// Number of items in the sequence, at least 1.
    pub total_count: usize,
}

/// Maps a cursor index to the item it displays for `body`.
#[must_use]
pub fn item_at<'a>(body: &'a WorkBody, image_pool: &'a [ImageRef], index: usize) -> WorkItem<'a> {
    let total = 1 + image_pool.len();
    match index % total {
        0 => match image_pool.first() {
            Some(reference) => WorkItem::Image {
                reference,
                number: 1,
            },
            None => WorkItem::NoImages,
        },
        1 => WorkItem::Description {
            title: &body.title,
            description: &body.description,
        },
        // index < total = 1 + len, so len >= 2 here and the modulo is safe.
        index => WorkItem::Image {
            reference: &image_pool[(index - 1) % image_pool.len()],
            number: index,
        },
    }
}

/// Cursor state machine for the Work screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkNavigator {
    status: NavigatorStatus,
    active_body: Option<WorkBody>,
    image_pool: Vec<ImageRef>,
    cursor: usize,
}

impl WorkNavigator {
    /// Creates a navigator waiting for its first resolution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-resolves the active body from the feed and the route parameter.
    ///
    /// Must run whenever either input changes. The cursor always returns to
    /// 0, even when the resolved body is the same as before.
    pub fn resolve(&mut self, feed: &LoadState<Arc<WorkFeed>>, route_param: Option<&str>) {
        match feed {
            LoadState::Loading => {
                self.status = NavigatorStatus::Loading;
                self.active_body = None;
                self.image_pool.clear();
            }
            LoadState::Failed(message) => {
                self.status = NavigatorStatus::Failed(message.clone());
                self.active_body = None;
                self.image_pool.clear();
            }
            LoadState::Ready(feed) => {
                let found = match route_param {
                    Some(id) => find_body(&feed.work_bodies, id),
                    None => feed.work_bodies.first(),
                };
                self.active_body = found.cloned();
                self.image_pool.clone_from(&feed.image_pool);
                self.status = if self.active_body.is_some() {
                    NavigatorStatus::Active
                } else {
                    NavigatorStatus::NotFound
                };
                tracing::debug!(
                    route = route_param.unwrap_or("<default>"),
                    body = self.active_body.as_ref().map(|b| b.id.as_str()),
                    "resolved work body"
                );
            }
        }
        self.cursor = 0;
    }

    #[must_use]
    pub fn status(&self) -> &NavigatorStatus {
        &self.status
    }

    #[must_use]
    pub fn active_body(&self) -> Option<&WorkBody> {
        self.active_body.as_ref()
    }

    #[must_use]
    pub fn image_pool(&self) -> &[ImageRef] {
        &self.image_pool
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of items in the sequence: the description plus every image.
    #[must_use]
    pub fn total_items(&self) -> usize {
        1 + self.image_pool.len()
    }

    /// Moves to the next item, wrapping to the first.
    ///
    /// Returns `true` if the cursor moved. Does nothing without an active
    /// body or when the sequence has a single item.
    pub fn advance(&mut self) -> bool {
        let total = self.total_items();
        if self.active_body.is_none() || total <= 1 {
            return false;
        }
        self.cursor = (self.cursor + 1) % total;
        true
    }

    /// Moves to the previous item, wrapping to the last.
    ///
    /// Returns `true` if the cursor moved. Same no-op rules as [`advance`](Self::advance).
    pub fn retreat(&mut self) -> bool {
        let total = self.total_items();
        if self.active_body.is_none() || total <= 1 {
            return false;
        }
        self.cursor = (self.cursor + total - 1) % total;
        true
    }

    /// Item under the cursor, if a body is active.
    #[must_use]
    pub fn current_item(&self) -> Option<WorkItem<'_>> {
        self.active_body
            .as_ref()
            .map(|body| item_at(body, &self.image_pool, self.cursor))
    }

    /// Image reference under the cursor, if the current item is an image.
    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        match self.current_item()? {
            WorkItem::Image { reference, .. } => Some(reference),
            WorkItem::Description { .. } | WorkItem::NoImages => None,
        }
    }

    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        NavigationInfo {
            current_index: self.cursor,
            total_count: self.total_items(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(id: &str) -> WorkBody {
        WorkBody {
            id: id.into(),
            title: format!("Title {id}"),
            description: format!("About {id}"),
        }
    }

    fn ready_feed(ids: &[&str], images: &[&str]) -> LoadState<Arc<WorkFeed>> {
        LoadState::Ready(Arc::new(WorkFeed {
            work_bodies: ids.iter().map(|id| body(id)).collect(),
            image_pool: images.iter().map(|s| (*s).to_string()).collect(),
            journal_entries: Vec::new(),
        }))
    }

    fn navigator(images: &[&str]) -> WorkNavigator {
        let mut nav = WorkNavigator::new();
        nav.resolve(&ready_feed(&["b1", "b2", "b3"], images), None);
        nav
    }

    #[test]
    fn new_navigator_is_loading() {
        let nav = WorkNavigator::new();
        assert_eq!(nav.status(), &NavigatorStatus::Loading);
        assert!(nav.current_item().is_none());
    }

    #[test]
    fn resolve_selects_route_param_body() {
        let mut nav = WorkNavigator::new();
        nav.resolve(&ready_feed(&["b1", "b2", "b3"], &["a"]), Some("b2"));
        assert_eq!(nav.active_body().map(|b| b.id.as_str()), Some("b2"));
        assert_eq!(nav.status(), &NavigatorStatus::Active);
    }

    #[test]
    fn resolve_without_param_selects_first_body() {
        let mut nav = WorkNavigator::new();
        nav.resolve(&ready_feed(&["b1", "b2", "b3"], &["a"]), None);
        assert_eq!(nav.active_body().map(|b| b.id.as_str()), Some("b1"));
    }

    #[test]
    fn resolve_unknown_param_is_not_found() {
        let mut nav = WorkNavigator::new();
        nav.resolve(&ready_feed(&["b1", "b2", "b3"], &["a"]), Some("zzz"));
        assert!(nav.active_body().is_none());
        assert_eq!(nav.status(), &NavigatorStatus::NotFound);
    }

    #[test]
    fn resolve_with_no_bodies_is_not_found() {
        let mut nav = WorkNavigator::new();
        nav.resolve(&ready_feed(&[], &["a"]), None);
        assert_eq!(nav.status(), &NavigatorStatus::NotFound);
    }

    #[test]
    fn resolve_while_loading_or_failed_has_no_active_body() {
        let mut nav = navigator(&["a"]);
        nav.resolve(&LoadState::Loading, None);
        assert!(nav.active_body().is_none());
        assert_eq!(nav.status(), &NavigatorStatus::Loading);

        nav.resolve(&LoadState::Failed("offline".into()), Some("b1"));
        assert!(nav.active_body().is_none());
        assert_eq!(nav.status(), &NavigatorStatus::Failed("offline".into()));
        assert!(!nav.advance());
    }

    #[test]
    fn resolve_resets_cursor_even_for_same_body() {
        let feed = ready_feed(&["b1", "b2"], &["a", "b", "c"]);
        let mut nav = WorkNavigator::new();
        nav.resolve(&feed, Some("b1"));
        nav.advance();
        nav.advance();
        assert_eq!(nav.cursor(), 2);

        nav.resolve(&feed, Some("b1"));
        assert_eq!(nav.cursor(), 0);
        assert_eq!(nav.active_body().map(|b| b.id.as_str()), Some("b1"));
    }

    #[test]
    fn advancing_total_items_times_returns_to_start() {
        for pool_size in 1..6 {
            let images: Vec<String> = (0..pool_size).map(|i| format!("img{i}")).collect();
            let refs: Vec<&str> = images.iter().map(String::as_str).collect();
            for start in 0..=pool_size {
                let mut nav = navigator(&refs);
                for _ in 0..start {
                    nav.advance();
                }
                let before = nav.cursor();
                for _ in 0..nav.total_items() {
                    assert!(nav.advance());
                }
                assert_eq!(nav.cursor(), before, "pool {pool_size}, start {start}");
            }
        }
    }

    #[test]
    fn retreat_inverts_advance() {
        let mut nav = navigator(&["a", "b", "c"]);
        for start in 0..nav.total_items() {
            while nav.cursor() != start {
                nav.advance();
            }
            let snapshot = nav.clone();
            nav.advance();
            nav.retreat();
            assert_eq!(nav, snapshot);
        }
    }

    #[test]
    fn retreat_from_zero_wraps_to_last() {
        let mut nav = navigator(&["a", "b", "c"]);
        assert!(nav.retreat());
        assert_eq!(nav.cursor(), 3);
    }

    #[test]
    fn single_item_sequence_never_moves() {
        let mut nav = navigator(&[]);
        assert_eq!(nav.total_items(), 1);
        assert!(!nav.advance());
        assert!(!nav.retreat());
        assert_eq!(nav.cursor(), 0);
        assert_eq!(nav.current_item(), Some(WorkItem::NoImages));
    }

    #[test]
    fn item_mapping_follows_index_formula() {
        let b = body("b1");
        let pool: Vec<String> = vec!["imgA".into(), "imgB".into(), "imgC".into()];

        assert_eq!(
            item_at(&b, &pool, 0),
            WorkItem::Image {
                reference: "imgA",
                number: 1
            }
        );
        assert_eq!(
            item_at(&b, &pool, 1),
            WorkItem::Description {
                title: "Title b1",
                description: "About b1"
            }
        );
        assert_eq!(
            item_at(&b, &pool, 2),
            WorkItem::Image {
                reference: "imgB",
                number: 2
            }
        );
        assert_eq!(
            item_at(&b, &pool, 3),
            WorkItem::Image {
                reference: "imgC",
                number: 3
            }
        );
        // Four items in total, so index 4 is index 0 again.
        assert_eq!(item_at(&b, &pool, 4), item_at(&b, &pool, 0));
    }

    #[test]
    fn cursor_walk_visits_expected_items() {
        let mut nav = navigator(&["imgA", "imgB", "imgC"]);
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(nav.current_image().map(str::to_string));
            nav.advance();
        }
        assert_eq!(
            seen,
            [
                Some("imgA".to_string()),
                None,
                Some("imgB".to_string()),
                Some("imgC".to_string()),
                Some("imgA".to_string()),
            ]
        );
    }

    #[test]
    fn navigation_info_reports_position() {
        let mut nav = navigator(&["a", "b"]);
        nav.advance();
        let info = nav.navigation_info();
        assert_eq!(info.current_index, 1);
        assert_eq!(info.total_count, 3);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Random image selection for the Home screen.
//!
//! The Home screen shows a handful of images drawn at random from the pool.
//! Clicking one swaps it for another image that is not currently on screen.

use crate::domain::content::ImageRef;
use rand::seq::SliceRandom;
use rand::Rng;

/// Draws up to `count` distinct images from `pool`, skipping any in `exclude`.
///
/// The candidates are shuffled with a Fisher-Yates shuffle, so every subset
/// of the eligible images is equally likely.
#[must_use]
pub fn pick_random<R: Rng + ?Sized>(
    pool: &[ImageRef],
    count: usize,
    exclude: &[ImageRef],
    rng: &mut R,
) -> Vec<ImageRef> {
    let mut candidates: Vec<ImageRef> = pool
        .iter()
        .filter(|image| !exclude.contains(image))
        .cloned()
        .collect();
    candidates.shuffle(rng);
    candidates.truncate(count);
    candidates
}

/// The images currently displayed on the Home screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeSelection {
    displayed: Vec<ImageRef>,
}

impl HomeSelection {
    /// Initial draw of `count` images from the pool.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(pool: &[ImageRef], count: usize, rng: &mut R) -> Self {
        Self {
            displayed: pick_random(pool, count, &[], rng),
        }
    }

    #[must_use]
    pub fn displayed(&self) -> &[ImageRef] {
        &self.displayed
    }

    /// Replaces `clicked` with a random image not currently displayed.
    ///
    /// Returns the replacement, or `None` when the pool has nothing left to
    /// offer (the selection is then unchanged).
    pub fn replace<R: Rng + ?Sized>(
        &mut self,
        clicked: &str,
        pool: &[ImageRef],
        rng: &mut R,
    ) -> Option<ImageRef> {
        let replacement = pick_random(pool, 1, &self.displayed, rng).pop();
        let Some(replacement) = replacement else {
            tracing::info!(image = clicked, "no more unique images to show");
            return None;
        };
        for slot in self.displayed.iter_mut().filter(|slot| slot.as_str() == clicked) {
            slot.clone_from(&replacement);
        }
        Some(replacement)
    }
}

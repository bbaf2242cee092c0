// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Content**: Where documents come from and how long to wait for them
//! - **Home**: Random image selection
//! - **Layout**: Window size thresholds

// ==========================================================================
// Content Defaults
// ==========================================================================

/// Default content root: the `public` folder of a local site checkout.
pub const DEFAULT_CONTENT_SOURCE: &str = "public";

/// Default HTTP request timeout (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Number of decoded images kept in memory.
pub const DEFAULT_IMAGE_CACHE_CAPACITY: usize = 64;

// ==========================================================================
// Home Defaults
// ==========================================================================

/// Number of random images shown on the Home screen.
pub const DEFAULT_HOME_IMAGE_COUNT: usize = 2;

/// Upper bound for the Home image count.
pub const MAX_HOME_IMAGE_COUNT: usize = 12;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Window width (logical pixels) below which the navigation collapses
/// behind a menu button.
pub const COMPACT_WIDTH_THRESHOLD: f32 = 768.0;

// ==========================================================================
// Compile-time validation
// ==========================================================================

const _: () = {
    assert!(MIN_REQUEST_TIMEOUT_SECS <= DEFAULT_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_HOME_IMAGE_COUNT >= 1);
    assert!(DEFAULT_HOME_IMAGE_COUNT <= MAX_HOME_IMAGE_COUNT);
    assert!(DEFAULT_IMAGE_CACHE_CAPACITY > 0);
};

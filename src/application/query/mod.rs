// SPDX-License-Identifier: MPL-2.0
//! Query services (read-side).
//!
//! These services derive what a screen shows from the cached content without
//! modifying it.
//!
//! # Available Services
//!
//! - [`work_navigation`]: Body resolution and item cycling (`WorkNavigator`)
//! - [`home_selection`]: Random image selection for the Home screen

pub mod home_selection;
pub mod work_navigation;

// Re-export main types
pub use home_selection::HomeSelection;
pub use work_navigation::{NavigationInfo, NavigatorStatus, WorkItem, WorkNavigator};

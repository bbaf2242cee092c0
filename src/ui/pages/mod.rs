// SPDX-License-Identifier: MPL-2.0
//! One module per routed screen.
//!
//! Each page exposes a `ViewContext` and a `view` function; pages with
//! their own state also expose `State`, `Message` and `update`.

pub mod home;
pub mod info;
pub mod journal;
pub mod placeholder;
pub mod shop;
pub mod work;

// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern:
//! pages receive a read-only `ViewContext` and report back through their
//! own `Message` type, which the application wraps.
//!
//! # Screens
//!
//! - [`pages`] - Home, Work, Journal, Shop, Info and placeholder routes
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Sidebar, compact top bar and mobile overlay menu
//! - [`components`] - Reusable UI pieces (status messages, image frames)
//! - [`image_store`] - LRU cache of image handles
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod image_store;
pub mod navbar;
pub mod pages;
pub mod styles;
pub mod theming;

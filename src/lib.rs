// SPDX-License-Identifier: MPL-2.0
//! `folio` is a portfolio viewer built with the Iced GUI framework.
//!
//! It browses bodies of work, a journal, a print shop and an artist
//! biography published as static JSON documents, either from a web server
//! or from a local site directory.
//!
//! # Layers
//!
//! - [`domain`] - Content documents (work bodies, journal, shop, info)
//! - [`application`] - Content cache, Work navigator, Home selection
//! - [`infrastructure`] - Fetching documents and images
//! - [`ui`] - Pages, navigation menu and styling
//! - [`app`] - Iced application shell, routing and configuration

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

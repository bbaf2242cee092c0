// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Portfolio content types and their pure rules.
//!
//! This module contains the records published by the content store and the
//! small business rules attached to them (journal ordering, shop edition
//! partitioning, email splitting). Apart from `serde` derives and `chrono`
//! date parsing it has no framework dependencies.
//!
//! # Modules
//!
//! - [`content`]: Content records ([`WorkBody`](content::WorkBody),
//!   [`JournalEntry`](content::JournalEntry), [`ShopItem`](content::ShopItem),
//!   [`Info`](content::Info)) and the [`ImageRef`](content::ImageRef) alias

pub mod content;

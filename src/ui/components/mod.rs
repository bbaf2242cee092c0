// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! # Components
//!
//! - [`email_link`] - Contact address assembled at render time, copy on press
//! - [`html_text`] - CMS HTML fragments to plain paragraphs
//! - [`image_frame`] - Image slot with loading and failure placeholders
//! - [`journal_entry`] - One journal entry card
//! - [`status`] - Centered loading, error and empty messages

pub mod email_link;
pub mod html_text;
pub mod image_frame;
pub mod journal_entry;
pub mod status;

// SPDX-License-Identifier: MPL-2.0
//! Content records published by the portfolio's static JSON documents.
//!
//! Field names follow the JSON documents (`camelCase`), so the structs use
//! `serde(rename_all)` rather than renaming on the Rust side.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Reference to an image: an absolute URL, a root-relative path (`/images/a.jpg`)
/// or a path relative to the content root.
pub type ImageRef = String;

/// A named body of work shown on the Work screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkBody {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Finds the first body whose id equals `id`.
#[must_use]
pub fn find_body<'a>(bodies: &'a [WorkBody], id: &str) -> Option<&'a WorkBody> {
    bodies.iter().find(|body| body.id == id)
}

// =============================================================================
// Journal
// =============================================================================

/// Presentation kind of a journal entry.
///
/// Unknown kinds are kept verbatim so the page can report them instead of
/// failing the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Text,
    Image,
    Poem,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub title: String,
    /// ISO date (`2024-03-01`) or RFC 3339 timestamp as written by the CMS.
    pub date: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub text_content: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl JournalEntry {
    /// Parses the entry date, accepting both plain dates and timestamps.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date);
        }
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|timestamp| timestamp.date_naive())
    }

    /// Long-form date such as `March 1, 2024`, or the raw string when the
    /// date cannot be parsed.
    #[must_use]
    pub fn display_date(&self) -> String {
        match self.parsed_date() {
            Some(date) => date.format("%B %-d, %Y").to_string(),
            None => self.date.clone(),
        }
    }
}

/// Returns the entries ordered newest first.
///
/// Entries with unparseable dates sort after all dated entries and keep their
/// relative order.
#[must_use]
pub fn sort_newest_first(entries: &[JournalEntry]) -> Vec<JournalEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.parsed_date().cmp(&a.parsed_date()));
    sorted
}

// =============================================================================
// Shop
// =============================================================================

/// Print edition. Values other than `open` and `limited` are kept as written
/// so one odd item does not reject the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    Open,
    Limited,
    #[serde(untagged)]
    Other(String),
}

impl Default for Edition {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub edition: Edition,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub available: u32,
    pub price: f64,
}

impl ShopItem {
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available > 0
    }

    /// Price with two decimals and a dollar sign, e.g. `$45.00`.
    #[must_use]
    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// Shop items split by edition, preserving document order within each half.
/// Items of any other edition are left out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShopCatalog {
    pub open_edition: Vec<ShopItem>,
    pub limited_edition: Vec<ShopItem>,
}

impl ShopCatalog {
    #[must_use]
    pub fn from_items(items: Vec<ShopItem>) -> Self {
        let mut catalog = Self::default();
        for item in items {
            match item.edition {
                Edition::Open => catalog.open_edition.push(item),
                Edition::Limited => catalog.limited_edition.push(item),
                Edition::Other(ref edition) => {
                    tracing::debug!(id = %item.id, edition = %edition, "Skipping shop item");
                }
            }
        }
        catalog
    }
}

// =============================================================================
// Info
// =============================================================================

/// Biography, CV and contact address. `bio` and `cv` hold HTML fragments.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub cv: String,
    #[serde(default)]
    pub email: String,
}

/// An email address kept as separate halves so the full address only exists
/// while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress {
    user: String,
    domain: String,
}

impl EmailAddress {
    /// Splits `user@domain`. Returns `None` when either half is empty.
    #[must_use]
    pub fn split(raw: &str) -> Option<Self> {
        let mut parts = raw.trim().split('@');
        let user = parts.next()?.trim();
        let domain = parts.next()?.trim();
        if user.is_empty() || domain.is_empty() {
            return None;
        }
        Some(Self {
            user: user.to_string(),
            domain: domain.to_string(),
        })
    }

    /// Re-assembles the address.
    #[must_use]
    pub fn assemble(&self) -> String {
        format!("{}@{}", self.user, self.domain)
    }

    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.assemble())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, date: &str) -> JournalEntry {
        JournalEntry {
            id: id.into(),
            title: id.to_uppercase(),
            date: date.into(),
            kind: EntryKind::Text,
            text_content: None,
            image: None,
            caption: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn find_body_matches_by_id() {
        let bodies = vec![
            WorkBody {
                id: "b1".into(),
                title: "One".into(),
                description: String::new(),
            },
            WorkBody {
                id: "b2".into(),
                title: "Two".into(),
                description: String::new(),
            },
        ];
        assert_eq!(find_body(&bodies, "b2").map(|b| b.title.as_str()), Some("Two"));
        assert!(find_body(&bodies, "zzz").is_none());
    }

    #[test]
    fn journal_entry_deserializes_camel_case_fields() {
        let json = r#"{
            "id": "j1",
            "title": "Morning",
            "date": "2024-03-01",
            "type": "image",
            "image": "/images/morning.jpg",
            "caption": "Fog",
            "tags": ["film", "coast"]
        }"#;
        let entry: JournalEntry = serde_json::from_str(json).expect("valid entry");
        assert_eq!(entry.kind, EntryKind::Image);
        assert_eq!(entry.caption.as_deref(), Some("Fog"));
        assert_eq!(entry.tags.len(), 2);
    }

    #[test]
    fn unknown_entry_type_is_preserved() {
        let json = r#"{"id": "j2", "title": "?", "date": "2024-01-01", "type": "video"}"#;
        let entry: JournalEntry = serde_json::from_str(json).expect("valid entry");
        assert_eq!(entry.kind, EntryKind::Other("video".into()));
    }

    #[test]
    fn display_date_uses_long_form() {
        assert_eq!(entry("a", "2024-03-01").display_date(), "March 1, 2024");
        assert_eq!(
            entry("b", "2023-12-24T10:00:00Z").display_date(),
            "December 24, 2023"
        );
    }

    #[test]
    fn display_date_falls_back_to_raw_string() {
        assert_eq!(entry("a", "spring 2021").display_date(), "spring 2021");
    }

    #[test]
    fn sort_newest_first_orders_by_date_descending() {
        let entries = vec![
            entry("old", "2021-05-01"),
            entry("undated", "someday"),
            entry("new", "2024-01-10"),
            entry("mid", "2022-07-15T08:30:00+02:00"),
        ];
        let ids: Vec<_> = sort_newest_first(&entries)
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, ["new", "mid", "old", "undated"]);
    }

    #[test]
    fn shop_catalog_partitions_by_edition() {
        let json = r#"[
            {"id": "p1", "title": "Dune", "edition": "open", "available": 3, "price": 25},
            {"id": "p2", "title": "Tide", "edition": "limited", "total": 10, "available": 0, "price": 120.5},
            {"id": "p3", "title": "Salt", "edition": "open", "available": 1, "price": 30}
        ]"#;
        let items: Vec<ShopItem> = serde_json::from_str(json).expect("valid items");
        let catalog = ShopCatalog::from_items(items);

        assert_eq!(catalog.open_edition.len(), 2);
        assert_eq!(catalog.limited_edition.len(), 1);
        assert_eq!(catalog.open_edition[1].id, "p3");
        assert!(!catalog.limited_edition[0].is_available());
        assert_eq!(catalog.limited_edition[0].formatted_price(), "$120.50");
    }

    #[test]
    fn shop_catalog_skips_unknown_editions() {
        let json = r#"[
            {"id": "p1", "title": "Dune", "edition": "open", "available": 3, "price": 25},
            {"id": "p2", "title": "Proof", "edition": "artist-proof", "available": 1, "price": 300},
            {"id": "p3", "title": "Tide", "edition": "limited", "total": 10, "available": 2, "price": 120},
            {"id": "p4", "title": "Draft", "available": 1, "price": 10}
        ]"#;
        let items: Vec<ShopItem> = serde_json::from_str(json).expect("mixed items parse");
        assert_eq!(items[1].edition, Edition::Other("artist-proof".to_string()));
        assert_eq!(items[3].edition, Edition::default());

        let catalog = ShopCatalog::from_items(items);
        let open: Vec<_> = catalog.open_edition.iter().map(|i| i.id.as_str()).collect();
        let limited: Vec<_> = catalog.limited_edition.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(open, ["p1"]);
        assert_eq!(limited, ["p3"]);
    }

    #[test]
    fn email_split_requires_both_halves() {
        let email = EmailAddress::split("studio@example.com").expect("valid email");
        assert_eq!(email.assemble(), "studio@example.com");
        assert_eq!(email.mailto(), "mailto:studio@example.com");

        assert!(EmailAddress::split("").is_none());
        assert!(EmailAddress::split("no-at-sign").is_none());
        assert!(EmailAddress::split("@example.com").is_none());
        assert!(EmailAddress::split("studio@").is_none());
    }
}

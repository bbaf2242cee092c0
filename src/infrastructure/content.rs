// SPDX-License-Identifier: MPL-2.0
//! Content store access: static JSON documents and the images they reference.
//!
//! The store is either a remote site (`https://example.com`) whose documents
//! live under `/data/`, or a local directory with the same layout. Both are
//! read-only.

use crate::application::content_cache::WorkFeed;
use crate::domain::content::{ImageRef, Info, JournalEntry, ShopCatalog, ShopItem, WorkBody};
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const WORK_BODIES: &str = "workBodies.json";
pub const HOME_IMAGES: &str = "homeImages.json";
pub const JOURNAL_ENTRIES: &str = "journalEntries.json";
pub const SHOP_ITEMS: &str = "shopItems.json";
pub const INFO: &str = "info.json";

/// Folder holding the JSON documents, relative to the content root.
const DATA_DIR: &str = "data";

/// Where the content documents come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Base URL without trailing slash.
    Http(String),
    /// Root directory of a local copy of the site.
    Directory(PathBuf),
}

/// A resolved image reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageLocation {
    Remote(String),
    Local(PathBuf),
}

fn is_absolute_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

impl ContentSource {
    /// Interprets a configured source: URLs select HTTP, anything else is a
    /// directory path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if is_absolute_url(raw) {
            ContentSource::Http(raw.trim_end_matches('/').to_string())
        } else {
            ContentSource::Directory(PathBuf::from(raw))
        }
    }

    /// Human-readable location of a document, for logs.
    #[must_use]
    pub fn document_location(&self, document: &str) -> String {
        match self {
            ContentSource::Http(base) => format!("{base}/{DATA_DIR}/{document}"),
            ContentSource::Directory(root) => root
                .join(DATA_DIR)
                .join(document)
                .display()
                .to_string(),
        }
    }

    /// Resolves an image reference against the content root.
    ///
    /// Absolute URLs are kept as-is. Root-relative (`/images/a.jpg`) and
    /// relative references are joined to the base URL or directory.
    #[must_use]
    pub fn resolve_image(&self, reference: &str) -> ImageLocation {
        if is_absolute_url(reference) {
            return ImageLocation::Remote(reference.to_string());
        }
        let relative = reference.trim_start_matches('/');
        match self {
            ContentSource::Http(base) => ImageLocation::Remote(format!("{base}/{relative}")),
            ContentSource::Directory(root) => ImageLocation::Local(root.join(relative)),
        }
    }
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentSource::Http(base) => f.write_str(base),
            ContentSource::Directory(root) => write!(f, "{}", root.display()),
        }
    }
}

/// Fetches documents and images from a [`ContentSource`].
///
/// Cheap to clone; clones share the underlying HTTP connection pool.
#[derive(Debug, Clone)]
pub struct ContentClient {
    source: ContentSource,
    http: reqwest::Client,
}

impl ContentClient {
    /// Builds a client whose HTTP requests give up after `timeout`.
    pub fn new(source: ContentSource, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { source, http })
    }

    #[must_use]
    pub fn source(&self) -> &ContentSource {
        &self.source
    }

    /// Reads one document and decodes it as `T`.
    pub async fn fetch_document<T: DeserializeOwned>(&self, document: &str) -> Result<T> {
        tracing::debug!(location = %self.source.document_location(document), "fetching document");
        let bytes = match &self.source {
            ContentSource::Http(base) => {
                let url = format!("{base}/{DATA_DIR}/{document}");
                self.get_bytes(&url, document).await?
            }
            ContentSource::Directory(root) => read_local(&root.join(DATA_DIR).join(document)).await?,
        };
        serde_json::from_slice(&bytes).map_err(|err| Error::Parse {
            document: document.to_string(),
            message: err.to_string(),
        })
    }

    /// Fetches the work bodies, image pool and journal together.
    ///
    /// Fails as a whole if any of the three documents fails.
    pub async fn load_work_feed(&self) -> Result<WorkFeed> {
        let (work_bodies, image_pool, journal_entries) = futures_util::future::try_join3(
            self.fetch_document::<Vec<WorkBody>>(WORK_BODIES),
            self.fetch_document::<Vec<ImageRef>>(HOME_IMAGES),
            self.fetch_document::<Vec<JournalEntry>>(JOURNAL_ENTRIES),
        )
        .await
        .inspect_err(|err| tracing::warn!(error = %err, "work feed failed to load"))?;

        tracing::info!(
            bodies = work_bodies.len(),
            images = image_pool.len(),
            journal = journal_entries.len(),
            "work feed loaded"
        );
        Ok(WorkFeed {
            work_bodies,
            image_pool,
            journal_entries,
        })
    }

    /// Fetches the shop items and splits them by edition.
    pub async fn load_shop(&self) -> Result<ShopCatalog> {
        let items = self.fetch_document::<Vec<ShopItem>>(SHOP_ITEMS).await?;
        Ok(ShopCatalog::from_items(items))
    }

    pub async fn load_info(&self) -> Result<Info> {
        self.fetch_document::<Info>(INFO).await
    }

    /// Reads the encoded bytes of an image.
    pub async fn fetch_image(&self, location: &ImageLocation) -> Result<Vec<u8>> {
        match location {
            ImageLocation::Remote(url) => {
                let name = url.rsplit('/').next().unwrap_or(url.as_str());
                self.get_bytes(url, name).await
            }
            ImageLocation::Local(path) => read_local(path).await,
        }
    }

    async fn get_bytes(&self, url: &str, document: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                document: document.to_string(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

async fn read_local(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path).await.map_err(|err| {
        Error::Io(format!("{}: {err}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_doc(root: &Path, name: &str, body: &str) {
        let dir = root.join(DATA_DIR);
        std::fs::create_dir_all(&dir).expect("create data dir");
        std::fs::write(dir.join(name), body).expect("write document");
    }

    fn client_for(root: &Path) -> ContentClient {
        ContentClient::new(
            ContentSource::Directory(root.to_path_buf()),
            Duration::from_secs(5),
        )
        .expect("client builds")
    }

    #[test]
    fn parse_detects_urls_and_directories() {
        assert_eq!(
            ContentSource::parse("https://example.com/"),
            ContentSource::Http("https://example.com".into())
        );
        assert_eq!(
            ContentSource::parse("./site"),
            ContentSource::Directory(PathBuf::from("./site"))
        );
    }

    #[test]
    fn resolve_image_joins_relative_references() {
        let http = ContentSource::Http("https://example.com".into());
        assert_eq!(
            http.resolve_image("/images/a.jpg"),
            ImageLocation::Remote("https://example.com/images/a.jpg".into())
        );
        assert_eq!(
            http.resolve_image("https://cdn.test/b.png"),
            ImageLocation::Remote("https://cdn.test/b.png".into())
        );

        let dir = ContentSource::Directory(PathBuf::from("/srv/site"));
        assert_eq!(
            dir.resolve_image("/images/a.jpg"),
            ImageLocation::Local(PathBuf::from("/srv/site/images/a.jpg"))
        );
    }

    #[test]
    fn document_location_includes_data_folder() {
        let http = ContentSource::Http("https://example.com".into());
        assert_eq!(
            http.document_location(INFO),
            "https://example.com/data/info.json"
        );
    }

    #[tokio::test]
    async fn load_work_feed_reads_all_three_documents() {
        let temp = tempdir().expect("temp dir");
        write_doc(
            temp.path(),
            WORK_BODIES,
            r#"[{"id": "b1", "title": "Coast", "description": "Fog"}]"#,
        );
        write_doc(temp.path(), HOME_IMAGES, r#"["/images/a.jpg", "/images/b.jpg"]"#);
        write_doc(
            temp.path(),
            JOURNAL_ENTRIES,
            r#"[{"id": "j1", "title": "Note", "date": "2024-01-02", "type": "text", "textContent": "Hi"}]"#,
        );

        let feed = client_for(temp.path())
            .load_work_feed()
            .await
            .expect("feed loads");
        assert_eq!(feed.work_bodies.len(), 1);
        assert_eq!(feed.image_pool, vec!["/images/a.jpg", "/images/b.jpg"]);
        assert_eq!(feed.journal_entries[0].text_content.as_deref(), Some("Hi"));
    }

    #[tokio::test]
    async fn load_work_feed_fails_when_any_document_is_missing() {
        let temp = tempdir().expect("temp dir");
        write_doc(temp.path(), WORK_BODIES, "[]");
        write_doc(temp.path(), JOURNAL_ENTRIES, "[]");

        let err = client_for(temp.path())
            .load_work_feed()
            .await
            .expect_err("missing homeImages.json");
        match err {
            Error::Io(message) => assert!(message.contains(HOME_IMAGES)),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_document_reports_parse_error() {
        let temp = tempdir().expect("temp dir");
        write_doc(temp.path(), SHOP_ITEMS, r#"{"items": []}"#);

        let err = client_for(temp.path())
            .load_shop()
            .await
            .expect_err("object is not an array");
        match err {
            Error::Parse { document, .. } => assert_eq!(document, SHOP_ITEMS),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn load_info_decodes_document() {
        let temp = tempdir().expect("temp dir");
        write_doc(
            temp.path(),
            INFO,
            r#"{"bio": "<p>Hello</p>", "cv": "<p>2020</p>", "email": "me@example.com"}"#,
        );

        let info = client_for(temp.path()).load_info().await.expect("info loads");
        assert_eq!(info.email, "me@example.com");
        assert_eq!(info.bio, "<p>Hello</p>");
    }

    #[tokio::test]
    async fn fetch_image_reads_local_files() {
        let temp = tempdir().expect("temp dir");
        let path = temp.path().join("pixel.bin");
        std::fs::write(&path, [1u8, 2, 3]).expect("write image");

        let bytes = client_for(temp.path())
            .fetch_image(&ImageLocation::Local(path))
            .await
            .expect("image loads");
        assert_eq!(bytes, vec![1, 2, 3]);
    }
}

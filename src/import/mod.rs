//! One-shot bookmark import
//!
//! Pages through a bookmark collection, one request at a time, and writes every
//! item it collected to a single JSON file. A failing page ends the import
//! early; whatever was gathered up to that point is still written.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

pub mod raindrop;

pub use raindrop::{RaindropClient, RaindropSettings};

/// Errors raised while importing bookmarks.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Page {page} returned HTTP {status}")]
    Status { status: u16, page: u32 },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize bookmarks: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One page of a bookmark collection
///
/// `count` is the size of the whole collection, not of this page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookmarkPage {
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default)]
    pub count: u64,
}

/// Source of bookmark pages, numbered from zero.
#[async_trait]
pub trait BookmarkSource {
    async fn fetch_page(&self, page: u32) -> Result<BookmarkPage, ImportError>;
}

/// Result of paging through a collection
#[derive(Debug, Clone, Default)]
pub struct ImportOutcome {
    pub items: Vec<Value>,
    pub pages_fetched: u32,
    /// True when a page failed and the items are partial
    pub interrupted: bool,
}

/// Fetch pages until the collection is exhausted
///
/// The remaining count starts at `count - len` of the first page and drops by
/// each later page's length. The loop also stops on an empty page or the first
/// error; errors are logged, never returned.
pub async fn import_all<S>(source: &S) -> ImportOutcome
where
    S: BookmarkSource + ?Sized,
{
    let mut outcome = ImportOutcome::default();
    let mut items_left: Option<u64> = None;
    let mut page = 0u32;

    loop {
        let fetched = match source.fetch_page(page).await {
            Ok(fetched) => fetched,
            Err(e) => {
                log::error!("Error fetching bookmark collection: {}", e);
                outcome.interrupted = true;
                break;
            }
        };

        let page_len = fetched.items.len() as u64;
        let left = match items_left {
            None => fetched.count.saturating_sub(page_len),
            Some(left) => left.saturating_sub(page_len),
        };
        items_left = Some(left);

        outcome.items.extend(fetched.items);
        outcome.pages_fetched += 1;
        log::debug!("Bookmark page {}: {} items, {} left", page, page_len, left);

        if left == 0 {
            break;
        }
        if page_len == 0 {
            log::warn!("Bookmark page {} was empty with {} items still expected, stopping", page, left);
            break;
        }
        page += 1;
    }

    log::info!(
        "Collected {} bookmarks over {} pages",
        outcome.items.len(),
        outcome.pages_fetched
    );
    outcome
}

/// Write `items` as one pretty-printed JSON array, creating parent directories
pub fn save_collection(items: &[Value], path: &Path) -> Result<(), ImportError> {
    let json = serde_json::to_string_pretty(items)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ImportError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, json).map_err(|source| ImportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

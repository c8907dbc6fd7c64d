//! Item feed
//!
//! The deck never fetches anything itself. An [`ItemProvider`] produces raw
//! records, [`FeedFilter`] cleans them, and [`Feed`] keeps the last good
//! snapshot. A refresh either replaces the snapshot wholesale or fails and
//! leaves it alone.

use crate::error::{FeedError, Result};
use crate::item::{Item, ItemList};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Source of raw item records
pub trait ItemProvider {
    /// Fetch the full, ordered item sequence
    fn refresh(&mut self) -> Result<Vec<Item>>;
}

/// Reads a JSON array of items from disk on every refresh
#[derive(Clone, Debug)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItemProvider for JsonFileProvider {
    fn refresh(&mut self) -> Result<Vec<Item>> {
        let content = fs::read_to_string(&self.path).map_err(|source| FeedError::Io {
            path: self.path.clone(),
            source,
        })?;
        let records: Vec<serde_json::Value> = serde_json::from_str(&content)?;
        let items = records
            .into_iter()
            .enumerate()
            .map(|(n, record)| {
                Item::deserialize(record).unwrap_or_else(|err| {
                    warn!(record = n, "Unreadable item record: {}", err);
                    Item::default()
                })
            })
            .collect();
        Ok(items)
    }
}

/// Serves a fixed set of items
#[derive(Clone, Debug, Default)]
pub struct StaticProvider {
    items: Vec<Item>,
}

impl StaticProvider {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl ItemProvider for StaticProvider {
    fn refresh(&mut self) -> Result<Vec<Item>> {
        Ok(self.items.clone())
    }
}

/// Rules applied to raw records before they reach the deck
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedFilter {
    /// Drop records whose rank is explicitly 0
    pub drop_unranked: bool,
    /// Keep only records with `is_active == true`
    pub active_only: bool,
    /// Keep at most this many records
    pub limit: Option<usize>,
}

impl Default for FeedFilter {
    fn default() -> Self {
        Self {
            drop_unranked: true,
            active_only: true,
            limit: Some(100),
        }
    }
}

impl FeedFilter {
    /// Pass every record through untouched
    pub fn passthrough() -> Self {
        Self {
            drop_unranked: false,
            active_only: false,
            limit: None,
        }
    }

    pub fn accepts(&self, item: &Item) -> bool {
        if self.drop_unranked && item.rank == Some(0) {
            return false;
        }
        if self.active_only && item.is_active != Some(true) {
            return false;
        }
        true
    }

    pub fn apply(&self, items: Vec<Item>) -> ItemList {
        let limit = self.limit.unwrap_or(usize::MAX);
        items
            .into_iter()
            .filter(|item| self.accepts(item))
            .take(limit)
            .collect()
    }
}

/// The last successfully loaded snapshot plus the provider behind it
pub struct Feed<P> {
    provider: P,
    filter: FeedFilter,
    snapshot: Option<ItemList>,
}

impl<P: ItemProvider> Feed<P> {
    pub fn new(provider: P, filter: FeedFilter) -> Self {
        Self {
            provider,
            filter,
            snapshot: None,
        }
    }

    /// `None` until the first refresh succeeds
    pub fn snapshot(&self) -> Option<&ItemList> {
        self.snapshot.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Fetch, filter, and replace the snapshot
    pub fn refresh(&mut self) -> Result<ItemList> {
        let raw = match self.provider.refresh() {
            Ok(raw) => raw,
            Err(err) => {
                warn!("Feed refresh failed, keeping previous snapshot: {}", err);
                return Err(err);
            }
        };
        let total = raw.len();
        let list = self.filter.apply(raw);
        debug!(total, kept = list.len(), "feed refreshed");
        self.snapshot = Some(list.clone());
        Ok(list)
    }
}

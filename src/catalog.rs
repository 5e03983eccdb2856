//! Static catalog of selectable Vistar feeds.
//!
//! Loaded once at startup and never mutated. Enumeration follows the order
//! in which the keys appear in the JSON source.

use crate::error::{AppError, Result};
use serde::{Deserialize, Deserializer};
use std::path::Path;
use std::time::Duration;

const BUILTIN_CATALOG: &str = include_str!("../data/vistar.json");

/// One selectable image feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceEntry {
    pub name: String,
    /// Image endpoint, fetched with a cache-busting suffix on every cycle.
    pub img: String,
    /// Primary refresh interval in milliseconds.
    pub refreshrate: u64,
    /// Alternate refresh interval in milliseconds. Not used by the refresh loop.
    #[serde(default)]
    pub ext_refreshrate: u64,
    /// Logbook number, `""` in the source data when there is none.
    #[serde(default, deserialize_with = "deserialize_logbook")]
    pub lgbk: Option<u32>,
}

impl SourceEntry {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refreshrate)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLogbook {
    Number(u32),
    Text(String),
}

fn deserialize_logbook<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match RawLogbook::deserialize(deserializer)? {
        RawLogbook::Number(n) => Ok(Some(n)),
        RawLogbook::Text(text) if text.trim().is_empty() => Ok(None),
        RawLogbook::Text(text) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Read-only mapping from source key to entry.
#[derive(Debug, Clone)]
pub struct SourceCatalog {
    entries: Vec<(String, SourceEntry)>,
}

impl SourceCatalog {
    /// Parses the catalog embedded in the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Reads and parses a catalog file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| AppError::Catalog(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Parses a `{ key: entry, ... }` JSON object and validates every entry.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;

        let mut entries = Vec::with_capacity(raw.len());
        for (key, value) in raw {
            let entry: SourceEntry = serde_json::from_value(value)
                .map_err(|e| AppError::Catalog(format!("entry {}: {}", key, e)))?;
            validate_entry(&key, &entry)?;
            entries.push((key, entry));
        }

        if entries.is_empty() {
            return Err(AppError::Catalog("catalog has no entries".to_string()));
        }

        log::debug!("Loaded catalog with {} sources", entries.len());
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&SourceEntry> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entry)| entry)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates `(key, entry)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SourceEntry)> {
        self.entries.iter().map(|(k, entry)| (k.as_str(), entry))
    }

    /// Key at a position of the selection list.
    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(k, _)| k.as_str())
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

fn validate_entry(key: &str, entry: &SourceEntry) -> Result<()> {
    if entry.name.trim().is_empty() {
        return Err(AppError::Catalog(format!("entry {} has an empty name", key)));
    }
    if entry.refreshrate == 0 {
        return Err(AppError::Catalog(format!(
            "entry {} must have a positive refreshrate",
            key
        )));
    }
    Ok(())
}

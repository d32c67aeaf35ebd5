//! The immutable station registry.
//!
//! Built once at startup from the catalog. Ids and keywords are checked for
//! uniqueness here, so lookups never have to.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use arcade_core::model::StationContent;
use arcade_core::parser::{load_content_directory, parse_station_str, validate_station_content};
use arcade_core::traits::Launcher;

use crate::catalog::{CatalogEntry, CATALOG, FIRST_STATION, LAST_STATION, STATION_COUNT};
use crate::error::RegistryError;
use crate::launcher::create_launcher;

/// One playable station.
pub struct StationEntry {
    pub id: u8,
    pub keyword: String,
    pub title: String,
    launcher: Box<dyn Launcher>,
}

impl StationEntry {
    pub fn new<K: Into<String>, T: Into<String>>(
        id: u8,
        keyword: K,
        title: T,
        launcher: Box<dyn Launcher>,
    ) -> Self {
        Self {
            id,
            keyword: keyword.into(),
            title: title.into(),
            launcher,
        }
    }

    pub fn launcher(&self) -> &dyn Launcher {
        self.launcher.as_ref()
    }
}

impl fmt::Debug for StationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StationEntry")
            .field("id", &self.id)
            .field("keyword", &self.keyword)
            .field("title", &self.title)
            .field("units", &self.launcher.unit_count())
            .finish()
    }
}

/// All stations, ordered by id, with keyword lookup.
#[derive(Debug)]
pub struct StationRegistry {
    entries: Vec<StationEntry>,
    by_keyword: HashMap<String, usize>,
}

impl StationRegistry {
    /// Build a registry, rejecting bad ids and duplicate ids or keywords.
    pub fn new(mut entries: Vec<StationEntry>) -> Result<Self, RegistryError> {
        if entries.len() != STATION_COUNT {
            return Err(RegistryError::WrongCount {
                expected: STATION_COUNT,
                found: entries.len(),
            });
        }

        let mut ids = HashSet::new();
        for entry in &entries {
            if !(FIRST_STATION..=LAST_STATION).contains(&entry.id) {
                return Err(RegistryError::IdOutOfRange(entry.id));
            }
            if !ids.insert(entry.id) {
                return Err(RegistryError::DuplicateId(entry.id));
            }
            let keyword_ok = !entry.keyword.is_empty()
                && !entry.keyword.chars().any(char::is_whitespace)
                && !entry.keyword.starts_with(|c: char| c.is_ascii_digit());
            if !keyword_ok {
                return Err(RegistryError::InvalidKeyword {
                    id: entry.id,
                    keyword: entry.keyword.clone(),
                });
            }
        }

        entries.sort_by_key(|e| e.id);

        let mut by_keyword = HashMap::new();
        for (index, entry) in entries.iter().enumerate() {
            let key = entry.keyword.to_lowercase();
            if by_keyword.insert(key.clone(), index).is_some() {
                return Err(RegistryError::DuplicateKeyword(key));
            }
        }

        Ok(Self {
            entries,
            by_keyword,
        })
    }

    /// The catalog with its embedded content.
    pub fn builtin() -> Result<Self> {
        Self::from_catalog(HashMap::new())
    }

    /// The catalog, with content replaced by any station files under `dir`.
    pub fn with_overrides(dir: &Path) -> Result<Self> {
        let mut overrides = HashMap::new();
        for file in load_content_directory(dir)? {
            if !(FIRST_STATION..=LAST_STATION).contains(&file.station_id) {
                tracing::warn!(
                    "ignoring content for unknown station {} in {}",
                    file.station_id,
                    dir.display()
                );
                continue;
            }
            tracing::debug!(
                "override for station {:02} has {} unit(s)",
                file.station_id,
                file.content.len()
            );
            if overrides.insert(file.station_id, file.content).is_some() {
                tracing::warn!(
                    "station {:02} has more than one content file in {}; using the last",
                    file.station_id,
                    dir.display()
                );
            }
        }
        tracing::info!(
            "loaded {} content override(s) from {}",
            overrides.len(),
            dir.display()
        );
        Self::from_catalog(overrides)
    }

    fn from_catalog(mut overrides: HashMap<u8, StationContent>) -> Result<Self> {
        let entries = CATALOG
            .iter()
            .map(|row| -> Result<StationEntry> {
                let content = match overrides.remove(&row.id) {
                    Some(content) => content,
                    None => builtin_content(row)?,
                };
                for warning in validate_station_content(&content) {
                    let item = warning
                        .item
                        .map(|n| format!(" item {n}"))
                        .unwrap_or_default();
                    tracing::debug!("station {:02}{item}: {}", row.id, warning.message);
                }
                Ok(StationEntry::new(
                    row.id,
                    row.keyword,
                    row.title,
                    create_launcher(content),
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(entries)?)
    }

    /// Entries in id order.
    pub fn entries(&self) -> &[StationEntry] {
        &self.entries
    }

    /// Zero-based slot of a station, matching the session's score arrays.
    pub fn slot(&self, id: u8) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn by_id(&self, id: u8) -> Option<&StationEntry> {
        self.slot(id).map(|i| &self.entries[i])
    }

    /// Keyword lookup, ignoring case.
    pub fn by_keyword(&self, keyword: &str) -> Option<&StationEntry> {
        self.by_keyword
            .get(&keyword.to_lowercase())
            .map(|&i| &self.entries[i])
    }

    /// Resolve a `play` argument to a station id.
    ///
    /// An argument starting with a digit is read as a number (leading digits
    /// only) and must name an id in range. Anything else must be a keyword.
    pub fn resolve(&self, arg: &str) -> Option<u8> {
        let arg = arg.trim();
        if arg.starts_with(|c: char| c.is_ascii_digit()) {
            let digits: String = arg.chars().take_while(char::is_ascii_digit).collect();
            let id = digits.parse::<u8>().ok()?;
            self.by_id(id).map(|e| e.id)
        } else {
            self.by_keyword(arg).map(|e| e.id)
        }
    }
}

fn builtin_content(row: &CatalogEntry) -> Result<StationContent> {
    let source = PathBuf::from(format!("builtin/{:02}-{}.toml", row.id, row.keyword));
    let file = parse_station_str(row.source, &source)
        .with_context(|| format!("built-in content for station {:02} is invalid", row.id))?;
    if file.station_id != row.id {
        return Err(RegistryError::ContentMismatch {
            expected: row.id,
            found: file.station_id,
        }
        .into());
    }
    Ok(file.content)
}

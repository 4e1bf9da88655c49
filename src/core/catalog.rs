//! The persisted key -> text catalog (the primary locale JSON file).
//!
//! Existing entries are authoritative: merging only adds missing keys, so
//! edits made by translators are never overwritten. The file is always
//! written whole, with keys in sorted order and 2-space indentation.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    error::{LocalizeError, Result},
    utils::write_atomic,
};

/// Read a catalog file.
///
/// Returns `Ok(None)` when the file does not exist. A file that exists but is
/// not a flat JSON object of strings is an error, never silently discarded.
pub fn read_catalog(path: &Path) -> Result<Option<BTreeMap<String, String>>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(LocalizeError::CatalogRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let entries = serde_json::from_str(&content).map_err(|source| LocalizeError::CatalogParse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(entries))
}

/// Counts from a merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Keys that were missing and have been added.
    pub added: usize,
    /// Keys that already existed; their values were left alone.
    pub kept: usize,
}

#[derive(Debug)]
pub struct Catalog {
    file_path: PathBuf,
    entries: BTreeMap<String, String>,
    existed: bool,
}

impl Catalog {
    /// Load the catalog at `path`, starting empty if the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        let existing = read_catalog(path)?;
        let existed = existing.is_some();
        Ok(Self {
            file_path: path.to_path_buf(),
            entries: existing.unwrap_or_default(),
            existed,
        })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Whether the file was present on disk when loaded.
    pub fn existed(&self) -> bool {
        self.existed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Add entries whose key is not present yet. Existing values always win.
    pub fn merge<I, K, V>(&mut self, new_entries: I) -> MergeStats
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut stats = MergeStats::default();
        for (key, value) in new_entries {
            let key = key.into();
            if self.entries.contains_key(&key) {
                stats.kept += 1;
            } else {
                self.entries.insert(key, value.into());
                stats.added += 1;
            }
        }
        stats
    }

    /// Pretty JSON with sorted keys and a trailing newline.
    pub fn to_json(&self) -> String {
        // A map of strings always serializes.
        let content = serde_json::to_string_pretty(&self.entries).unwrap_or_default();
        format!("{}\n", content)
    }

    /// Write the whole catalog back to its file.
    pub fn save(&self) -> Result<()> {
        write_atomic(&self.file_path, self.to_json().as_bytes()).map_err(|source| {
            LocalizeError::CatalogWrite {
                path: self.file_path.clone(),
                source,
            }
        })
    }
}

/// Merge `new_entries` into the catalog at `path` and write it back.
pub fn merge_and_write<I, K, V>(path: &Path, new_entries: I) -> Result<MergeStats>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut catalog = Catalog::load(path)?;
    let stats = catalog.merge(new_entries);
    catalog.save()?;
    tracing::debug!(
        file = %path.display(),
        added = stats.added,
        kept = stats.kept,
        total = catalog.len(),
        "wrote catalog"
    );
    Ok(stats)
}

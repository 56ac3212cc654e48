//! Mapping table for logical SVG identifiers
//!
//! Templates refer to SVG assets through short stable ids. The mapping table
//! turns those ids into paths (possibly containing an `@themeName` token),
//! optionally overrides the generated link href, and selects the embedding
//! method for fragment references.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or parsing the mapping configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read mapping file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse mapping YAML: {0}")]
    ParseError(#[from] serde_yaml_ng::Error),
}

/// How a fragment reference is embedded in the generated markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmbedMethod {
    /// Copy the target element's markup directly into the output
    Inline,
    /// Reference the sprite sheet through a `<use xlink:href>` element
    #[default]
    Linked,
}

/// One row of the mapping table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Stable identifier used by templates
    #[serde(default)]
    pub id: String,
    /// Filesystem-relative path, may contain an `@themeName` token
    pub path: String,
    /// Overrides the computed href for linked references
    pub replacement: Option<String>,
    /// Embedding method for fragment references, linked when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<EmbedMethod>,
}

impl MappingEntry {
    /// Create an entry with just an id and a path
    pub fn new(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            replacement: None,
            method: None,
        }
    }

    /// Set the href replacement
    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = Some(replacement.into());
        self
    }

    /// Set the embedding method
    pub fn with_method(mut self, method: EmbedMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// The href replacement, if present and non-empty
    pub fn effective_replacement(&self) -> Option<&str> {
        self.replacement.as_deref().filter(|r| !r.is_empty())
    }

    /// The embedding method, defaulting to linked
    pub fn embed_method(&self) -> EmbedMethod {
        self.method.unwrap_or_default()
    }
}

/// Persisted configuration shape: a top-level `mappings:` map
#[derive(Serialize, Deserialize, Default)]
struct MappingConfig {
    #[serde(default)]
    mappings: BTreeMap<String, MappingEntry>,
}

/// Table of mapping entries keyed by id
///
/// Ids are unique within the table; inserting an entry under an existing id
/// overwrites the earlier one (last-write-wins).
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: BTreeMap<String, MappingEntry>,
}

impl MappingTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, keyed by its id
    pub fn insert(&mut self, entry: MappingEntry) {
        self.entries.insert(entry.id.clone(), entry);
    }

    /// Look up an entry by id
    pub fn get(&self, id: &str) -> Option<&MappingEntry> {
        self.entries.get(id)
    }

    /// Check whether an id is mapped
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All mapped ids
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    /// All entries, ordered by id
    pub fn iter(&self) -> impl Iterator<Item = &MappingEntry> {
        self.entries.values()
    }

    /// Load a table from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a table from YAML text
    ///
    /// The map key is authoritative: an entry whose `id` field is empty or
    /// disagrees with its key is stored under the key.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let parsed: MappingConfig = serde_yaml_ng::from_str(content)?;

        let mut table = Self::new();
        for (key, mut entry) in parsed.mappings {
            entry.id = key;
            table.insert(entry);
        }
        Ok(table)
    }

    /// Serialize the table to YAML text
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        let config = MappingConfig {
            mappings: self.entries.clone(),
        };
        Ok(serde_yaml_ng::to_string(&config)?)
    }

    /// Parse the legacy `id|path|replacement` line format.
    ///
    /// One entry per line; the replacement field is optional. Lines that do
    /// not match the pattern are skipped, and duplicate ids overwrite
    /// earlier entries.
    pub fn from_pipe_text(text: &str) -> Self {
        let mut table = Self::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut parts = line.splitn(3, '|');
            let id = parts.next().unwrap_or("");
            let Some(path) = parts.next() else {
                continue;
            };
            if id.is_empty() || id.contains(char::is_whitespace) || path.is_empty() {
                continue;
            }

            let mut entry = MappingEntry::new(id, path);
            if let Some(replacement) = parts.next().filter(|r| !r.is_empty()) {
                entry.replacement = Some(replacement.to_string());
            }
            table.insert(entry);
        }

        table
    }

    /// Serialize the table to the `id|path|replacement` line format
    pub fn to_pipe_text(&self) -> String {
        let mut text = String::new();

        for entry in self.entries.values() {
            text.push_str(&entry.id);
            text.push('|');
            text.push_str(&entry.path);
            if let Some(replacement) = entry.effective_replacement() {
                text.push('|');
                text.push_str(replacement);
            }
            text.push('\n');
        }

        text
    }
}

impl FromIterator<MappingEntry> for MappingTable {
    fn from_iter<I: IntoIterator<Item = MappingEntry>>(iter: I) -> Self {
        let mut table = Self::new();
        for entry in iter {
            table.insert(entry);
        }
        table
    }
}

//! Asset loading for resolved SVG paths

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Source of raw SVG text by resolved path.
///
/// A missing or unreadable asset is `None`, never a panic or an error: the
/// caller turns it into a user-visible diagnostic and empty output.
pub trait AssetReader {
    /// Read the SVG text stored under `path`
    fn read_svg(&self, path: &str) -> Option<String>;
}

/// Reads assets from the filesystem, rooted at an application directory
#[derive(Debug, Clone)]
pub struct FsAssetReader {
    root: PathBuf,
}

impl FsAssetReader {
    /// Create a reader rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory relative paths are resolved against
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetReader for FsAssetReader {
    fn read_svg(&self, path: &str) -> Option<String> {
        std::fs::read_to_string(self.root.join(path)).ok()
    }
}

/// In-memory asset store, for tests and hosts that preload their assets
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetReader {
    files: HashMap<String, String>,
}

impl MemoryAssetReader {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store SVG text under a path, builder-style
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Store SVG text under a path
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

impl AssetReader for MemoryAssetReader {
    fn read_svg(&self, path: &str) -> Option<String> {
        self.files.get(path).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_reader() {
        let assets = MemoryAssetReader::new().with_file("icons.svg", "<svg></svg>");

        assert_eq!(assets.read_svg("icons.svg").as_deref(), Some("<svg></svg>"));
        assert_eq!(assets.read_svg("missing.svg"), None);
    }

    #[test]
    fn test_fs_reader_missing_file() {
        let assets = FsAssetReader::new("/nonexistent-root");
        assert_eq!(assets.read_svg("missing.svg"), None);
    }
}

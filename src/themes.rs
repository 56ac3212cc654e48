//! Theme registry for `@themeName` token lookups

use std::collections::HashMap;

/// Maps theme names to their filesystem-relative directories.
///
/// Unknown names resolve to nothing, which leaves the `@name` token in a
/// path untouched rather than failing the render.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    paths: HashMap<String, String>,
}

impl ThemeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a theme directory
    pub fn register(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.paths.insert(name.into(), path.into());
    }

    /// Register a theme directory, builder-style
    pub fn with_theme(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.register(name, path);
        self
    }

    /// Look up the directory for a theme name
    pub fn theme_path(&self, name: &str) -> Option<&str> {
        self.paths.get(name).map(|s| s.as_str())
    }

    /// All registered theme names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.paths.keys().map(|s| s.as_str())
    }
}

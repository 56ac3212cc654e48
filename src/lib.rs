//! Responsive SVG markup generation for content-management templates
//!
//! Given a logical SVG identifier (optionally a mapped alias, optionally a
//! `#fragment` pointing at a symbol inside the file), this library resolves
//! the real file path, reads the SVG, extracts its geometry, and emits
//! markup that preserves the native aspect ratio with a padding-based
//! intrinsic-ratio container. Fragment references embed either as a link
//! (`<use xlink:href>`) or inline, per the mapping table.
//!
//! All collaborators are explicit: the mapping table, the theme registry,
//! and the asset reader are injected, so rendering needs no ambient state
//! and is trivially testable.
//!
//! # Example
//!
//! ```rust
//! use responsive_svg::{MemoryAssetReader, RenderOptions, SvgRenderer};
//!
//! let assets = MemoryAssetReader::new()
//!     .with_file("icons.svg", r#"<svg viewBox="0 0 100 50"></svg>"#);
//! let renderer = SvgRenderer::new(assets);
//!
//! let markup = renderer.responsive_svg("icons.svg", &RenderOptions::default());
//! assert!(markup.contains("padding-bottom: 50%"));
//! ```

pub mod assets;
pub mod document;
pub mod error;
pub mod mappings;
pub mod renderer;
pub mod resolver;
pub mod themes;

pub use assets::{AssetReader, FsAssetReader, MemoryAssetReader};
pub use document::{SvgDocument, ViewBox};
pub use error::RenderError;
pub use mappings::{ConfigError, EmbedMethod, MappingEntry, MappingTable};
pub use renderer::{build_responsive, build_source, RenderOptions};
pub use themes::ThemeRegistry;

/// The template-facing filter surface.
///
/// Owns the injected collaborators and applies the non-fatal error policy:
/// any render failure is reported through `log::warn!` and produces empty
/// markup, so a broken or missing icon never aborts page rendering.
pub struct SvgRenderer<R: AssetReader = FsAssetReader> {
    mappings: MappingTable,
    themes: ThemeRegistry,
    assets: R,
}

impl<R: AssetReader> SvgRenderer<R> {
    /// Create a renderer over an asset reader, with empty mapping and
    /// theme tables
    pub fn new(assets: R) -> Self {
        Self {
            mappings: MappingTable::new(),
            themes: ThemeRegistry::new(),
            assets,
        }
    }

    /// Set the mapping table
    pub fn with_mappings(mut self, mappings: MappingTable) -> Self {
        self.mappings = mappings;
        self
    }

    /// Set the theme registry
    pub fn with_themes(mut self, themes: ThemeRegistry) -> Self {
        self.themes = themes;
        self
    }

    /// The active mapping table
    pub fn mappings(&self) -> &MappingTable {
        &self.mappings
    }

    /// The active theme registry
    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    /// Responsive-embed filter: aspect-ratio-preserving markup for
    /// `path-or-id[#fragment]`.
    ///
    /// On failure this emits a warning and returns an empty string.
    pub fn responsive_svg(&self, uri: &str, options: &RenderOptions) -> String {
        self.recover(self.try_responsive_svg(uri, options))
    }

    /// Fallible variant of [`responsive_svg`](Self::responsive_svg)
    pub fn try_responsive_svg(
        &self,
        uri: &str,
        options: &RenderOptions,
    ) -> Result<String, RenderError> {
        build_responsive(uri, options, &self.mappings, &self.themes, &self.assets)
    }

    /// Raw sprite-sheet passthrough filter.
    ///
    /// On failure this emits a warning and returns an empty string.
    pub fn responsive_source_svg(&self, uri: &str) -> String {
        self.recover(self.try_responsive_source_svg(uri))
    }

    /// Fallible variant of
    /// [`responsive_source_svg`](Self::responsive_source_svg)
    pub fn try_responsive_source_svg(&self, uri: &str) -> Result<String, RenderError> {
        build_source(uri, &self.mappings, &self.themes, &self.assets)
    }

    fn recover(&self, result: Result<String, RenderError>) -> String {
        match result {
            Ok(markup) => markup,
            Err(err) => {
                log::warn!("{err}");
                String::new()
            }
        }
    }
}

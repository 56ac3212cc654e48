//! Error types for the render pipeline

use thiserror::Error;

/// Failures that can occur while generating markup for a URI.
///
/// All variants are recoverable by design: the filter surface turns them
/// into a warning plus empty output, so a broken or missing icon never
/// aborts page rendering. The `Display` text of each variant is the
/// user-visible diagnostic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The resolved path does not exist or is unreadable
    #[error("Cannot find SVG {uri}")]
    FileNotFound { uri: String },

    /// The fragment identifier does not match any element in the document
    #[error("Cannot find SVG element for {uri}")]
    ElementNotFound { uri: String },

    /// The target element lacks a parseable viewBox attribute
    #[error("Cannot find viewBox attribute in {uri}")]
    ViewBoxMissing { uri: String },
}

//! Markup generation from resolved SVG documents
//!
//! Two variants: the responsive aspect-ratio-preserving wrapper and the
//! raw sprite-sheet passthrough.

pub mod config;
pub mod responsive;
pub mod source;

pub use config::RenderOptions;
pub use responsive::build_responsive;
pub use source::build_source;

//! Responsive markup generation
//!
//! Wraps an SVG reference in an aspect-ratio-preserving container: a
//! relatively positioned wrapper, a zero-height filler whose bottom padding
//! encodes the aspect ratio, and an absolutely positioned `<svg>` or
//! `<object>` carrying the artwork.

use crate::assets::AssetReader;
use crate::document::{read_view_box, SvgDocument};
use crate::error::RenderError;
use crate::mappings::{EmbedMethod, MappingTable};
use crate::renderer::config::RenderOptions;
use crate::resolver;
use crate::themes::ThemeRegistry;

/// Style applied to the embedded svg/object so it fills the wrapper
const EMBED_STYLE: &str = "position: absolute; top: 0; bottom: 0; left: 0; right: 0;";

/// Generate responsive markup for a URI of the form `path-or-id[#fragment]`.
///
/// The returned string is final markup, safe for direct template insertion.
/// Failures carry the user-visible diagnostic and leave no partial output.
pub fn build_responsive(
    uri: &str,
    options: &RenderOptions,
    mappings: &MappingTable,
    themes: &ThemeRegistry,
    assets: &dyn AssetReader,
) -> Result<String, RenderError> {
    let (path, fragment) = split_fragment(uri);

    let resolved = resolver::resolve(path, mappings, themes);

    // The replacement is looked up under the original key, not the resolved path.
    let mut href = match mappings.get(path).and_then(|e| e.effective_replacement()) {
        Some(replacement) => replacement.to_string(),
        None => format!("/{resolved}"),
    };
    if !fragment.is_empty() {
        href.push('#');
        href.push_str(fragment);
    }

    let svg_text = assets
        .read_svg(&resolved)
        .ok_or_else(|| RenderError::FileNotFound {
            uri: uri.to_string(),
        })?;

    let doc = SvgDocument::parse(&svg_text);
    let target = doc
        .select_target(fragment)
        .ok_or_else(|| RenderError::ElementNotFound {
            uri: uri.to_string(),
        })?;

    let (raw_view_box, view_box) =
        read_view_box(&target).ok_or_else(|| RenderError::ViewBoxMissing {
            uri: uri.to_string(),
        })?;

    // Offsets first, then explicit overrides; the padding uses the final figures.
    let mut width = view_box.width + options.offset_x;
    let mut height = view_box.height + options.offset_y;
    if let Some(w) = options.width {
        width = w;
    }
    if let Some(h) = options.height {
        height = h;
    }

    let padding = round_padding(height / width * 100.0);

    let classes = std::iter::once("responsive-svg")
        .chain(options.class.split(' '))
        .collect::<Vec<_>>()
        .join(" ");

    let embed = if !fragment.is_empty() {
        let method = mappings.get(path).map(|e| e.embed_method()).unwrap_or_default();
        match method {
            EmbedMethod::Inline => format!(
                r#"<svg viewBox="{raw_view_box}" style="{EMBED_STYLE}">{}</svg>"#,
                target.inner_html()
            ),
            EmbedMethod::Linked => format!(
                r#"<svg viewBox="0 0 {width} {height}" style="{EMBED_STYLE}"><use xlink:href="{href}"></use></svg>"#
            ),
        }
    } else {
        format!(r#"<object type="image/svg+xml" data="{href}" style="{EMBED_STYLE}"></object>"#)
    };

    Ok(format!(
        r#"<div class="{classes}" style="position: relative;"><div style="width: 100%; height: 0; overflow-hidden; padding-bottom: {padding}%"></div>{embed}</div>"#
    ))
}

/// Split a URI on the first `#` into path and fragment identifier.
///
/// The fragment is empty when the URI has none.
pub fn split_fragment(uri: &str) -> (&str, &str) {
    uri.split_once('#').unwrap_or((uri, ""))
}

/// Round a padding percentage to five decimal places, half away from zero
fn round_padding(value: f64) -> f64 {
    (value * 100_000.0).round() / 100_000.0
}

//! Raw sprite-sheet passthrough
//!
//! Emits an SVG file's own markup for direct embedding in a page, with the
//! XML preamble stripped and the root tag hidden so the sprite sheet never
//! paints on its own. Everything here is textual substitution; round-
//! tripping a full document for a strip-and-flag operation is not worth it
//! and would change the byte output.

use crate::assets::AssetReader;
use crate::error::RenderError;
use crate::mappings::MappingTable;
use crate::resolver;
use crate::themes::ThemeRegistry;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
const SVG11_DOCTYPE: &str = r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#;
const HIDDEN_SVG_OPEN: &str = r#"<svg style="display:none;" "#;

/// Generate raw passthrough markup for a sprite-sheet URI.
///
/// The returned text is the file content with the XML declaration and the
/// SVG 1.1 doctype stripped (first occurrence each) and a
/// `style="display:none;"` forced onto the opening `<svg>` tag.
pub fn build_source(
    uri: &str,
    mappings: &MappingTable,
    themes: &ThemeRegistry,
    assets: &dyn AssetReader,
) -> Result<String, RenderError> {
    let resolved = resolver::resolve(uri, mappings, themes);

    let svg = assets
        .read_svg(&resolved)
        .ok_or_else(|| RenderError::FileNotFound {
            uri: uri.to_string(),
        })?;

    let svg = svg.replacen(XML_DECLARATION, "", 1);
    let svg = svg.replacen(SVG11_DOCTYPE, "", 1);

    // Reapplying the filter must not stack style attributes.
    if svg.contains(HIDDEN_SVG_OPEN) {
        return Ok(svg);
    }
    Ok(svg.replacen("<svg ", HIDDEN_SVG_OPEN, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MemoryAssetReader;

    fn render_source(content: &str) -> String {
        let assets = MemoryAssetReader::new().with_file("sprites.svg", content);
        build_source(
            "sprites.svg",
            &MappingTable::new(),
            &ThemeRegistry::new(),
            &assets,
        )
        .expect("Should render")
    }

    #[test]
    fn test_strips_declaration_and_doctype() {
        let content = format!(
            "{XML_DECLARATION}\n{SVG11_DOCTYPE}\n<svg viewBox=\"0 0 10 10\"></svg>"
        );
        let output = render_source(&content);

        assert!(!output.contains("<?xml"));
        assert!(!output.contains("<!DOCTYPE"));
        assert!(output.contains(r#"<svg style="display:none;" viewBox="0 0 10 10">"#));
    }

    #[test]
    fn test_plain_file_gains_hidden_style() {
        let output = render_source(r#"<svg width="10" height="10"></svg>"#);
        assert_eq!(
            output,
            r#"<svg style="display:none;" width="10" height="10"></svg>"#
        );
    }

    #[test]
    fn test_idempotent_on_filtered_output() {
        let once = render_source(r#"<svg viewBox="0 0 10 10"><g id="a"/></svg>"#);
        let twice = render_source(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let assets = MemoryAssetReader::new();
        let err = build_source(
            "missing.svg",
            &MappingTable::new(),
            &ThemeRegistry::new(),
            &assets,
        )
        .unwrap_err();

        assert_eq!(
            err,
            RenderError::FileNotFound {
                uri: "missing.svg".to_string()
            }
        );
    }

    #[test]
    fn test_resolves_mapped_identifier() {
        let mut mappings = MappingTable::new();
        mappings.insert(crate::mappings::MappingEntry::new(
            "sprites",
            "@bartik/sprites.svg",
        ));
        let themes = ThemeRegistry::new().with_theme("bartik", "themes/bartik");
        let assets = MemoryAssetReader::new().with_file(
            "themes/bartik/sprites.svg",
            r#"<svg viewBox="0 0 4 4"></svg>"#,
        );

        let output = build_source("sprites", &mappings, &themes, &assets).expect("Should render");
        assert!(output.starts_with(r#"<svg style="display:none;" viewBox"#));
    }
}

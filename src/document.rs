//! Lenient SVG document parsing and target selection
//!
//! SVG assets in the wild are frequently fragments without an XML prolog,
//! or malformed-but-renderable. Parsing goes through an HTML-mode parser
//! so those documents still yield a usable tree, and fragment lookup uses
//! CSS id-selector semantics.

use scraper::{ElementRef, Html, Selector};

/// A parsed SVG document, queryable by CSS selector
pub struct SvgDocument {
    html: Html,
}

impl SvgDocument {
    /// Parse SVG text leniently
    pub fn parse(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
        }
    }

    /// Select the render target for a fragment identifier.
    ///
    /// An empty fragment targets the document's root `<svg>` element.
    /// Otherwise the target is the element whose `id` equals the fragment;
    /// no match (or a fragment that is not a valid id selector) is `None`.
    pub fn select_target(&self, fragment: &str) -> Option<ElementRef<'_>> {
        let selector = if fragment.is_empty() {
            Selector::parse("svg").expect("static selector")
        } else {
            Selector::parse(&format!("#{fragment}")).ok()?
        };
        self.html.select(&selector).next()
    }
}

/// A parsed `viewBox` attribute: `minX minY width height`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Parse a `viewBox` attribute value.
    ///
    /// Exactly four whitespace-separated numeric tokens; anything else is
    /// `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let tokens: Vec<f64> = value
            .split_whitespace()
            .map(|t| t.parse().ok())
            .collect::<Option<Vec<f64>>>()?;
        if tokens.len() != 4 {
            return None;
        }
        Some(Self {
            min_x: tokens[0],
            min_y: tokens[1],
            width: tokens[2],
            height: tokens[3],
        })
    }
}

/// Read the target element's `viewBox`.
///
/// Returns both the raw attribute string (embedded verbatim when inlining)
/// and the parsed value. The HTML parser keeps the camelCase spelling for
/// elements in the SVG namespace, but the lowercased form is accepted too
/// for documents that went through a less careful serializer.
pub fn read_view_box<'a>(element: &ElementRef<'a>) -> Option<(&'a str, ViewBox)> {
    let raw = element
        .value()
        .attr("viewBox")
        .or_else(|| element.value().attr("viewbox"))?;
    let parsed = ViewBox::parse(raw)?;
    Some((raw, parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPRITE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 200">
  <symbol id="spark" viewBox="0 0 100 50"><path d="M0 0 L100 50"/></symbol>
  <symbol id="bolt" viewBox="0 0 30 60"><circle cx="15" cy="30" r="10"/></symbol>
</svg>"##;

    #[test]
    fn test_select_root_svg() {
        let doc = SvgDocument::parse(SPRITE);
        let target = doc.select_target("").expect("Should find root svg");
        assert_eq!(target.value().name(), "svg");

        let (raw, vb) = read_view_box(&target).expect("Should have viewBox");
        assert_eq!(raw, "0 0 200 200");
        assert_eq!(vb.width, 200.0);
    }

    #[test]
    fn test_select_fragment_by_id() {
        let doc = SvgDocument::parse(SPRITE);
        let target = doc.select_target("spark").expect("Should find #spark");
        assert_eq!(target.value().name(), "symbol");

        let (raw, vb) = read_view_box(&target).expect("Should have viewBox");
        assert_eq!(raw, "0 0 100 50");
        assert_eq!(vb.height, 50.0);
    }

    #[test]
    fn test_select_missing_fragment() {
        let doc = SvgDocument::parse(SPRITE);
        assert!(doc.select_target("missing").is_none());
    }

    #[test]
    fn test_parse_without_prolog() {
        // No XML declaration, no doctype, unclosed path: still usable.
        let doc = SvgDocument::parse(r#"<svg viewBox="0 0 10 10"><path d="M0 0">"#);
        let target = doc.select_target("").expect("Should find root svg");
        assert!(read_view_box(&target).is_some());
    }

    #[test]
    fn test_viewbox_parse() {
        let vb = ViewBox::parse("0 0 100 50").expect("Should parse");
        assert_eq!(vb.min_x, 0.0);
        assert_eq!(vb.min_y, 0.0);
        assert_eq!(vb.width, 100.0);
        assert_eq!(vb.height, 50.0);

        let vb = ViewBox::parse("-10.5 4 7.25 3").expect("Should parse");
        assert_eq!(vb.min_x, -10.5);
        assert_eq!(vb.width, 7.25);
    }

    #[test]
    fn test_viewbox_parse_rejects_bad_input() {
        assert_eq!(ViewBox::parse(""), None);
        assert_eq!(ViewBox::parse("0 0 100"), None);
        assert_eq!(ViewBox::parse("0 0 100 50 1"), None);
        assert_eq!(ViewBox::parse("0 0 wide tall"), None);
    }

    #[test]
    fn test_missing_viewbox_attribute() {
        let doc = SvgDocument::parse(r#"<svg width="10" height="10"></svg>"#);
        let target = doc.select_target("").expect("Should find root svg");
        assert!(read_view_box(&target).is_none());
    }
}

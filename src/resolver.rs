//! Path resolution for logical SVG identifiers
//!
//! Turns a template-facing identifier into a concrete asset path in two
//! steps: mapping-table replacement, then `@themeName` token substitution.
//! Resolution never fails; an unknown identifier passes through unchanged
//! and an unknown theme leaves its token in place.

use crate::mappings::MappingTable;
use crate::themes::ThemeRegistry;

/// Resolve an identifier to a concrete asset path.
///
/// If `identifier` is a key in the mapping table it is replaced by that
/// entry's path; otherwise it is assumed to already be a path. A `@name`
/// token (the name runs up to the next `/`) is then substituted with the
/// registered theme directory, first occurrence only, when the registry
/// yields a non-empty path for it.
pub fn resolve(identifier: &str, mappings: &MappingTable, themes: &ThemeRegistry) -> String {
    let mut resolved = match mappings.get(identifier) {
        Some(entry) => entry.path.clone(),
        None => identifier.to_string(),
    };

    if let Some((name, token)) = theme_token(&resolved) {
        if let Some(theme_path) = themes.theme_path(&name).filter(|p| !p.is_empty()) {
            resolved = resolved.replacen(&token, theme_path, 1);
        }
    }

    resolved
}

/// Find the first `@name` token in a path.
///
/// The name is the maximal run of non-`/` characters after the `@`.
/// Returns the name and the full token including the `@`.
fn theme_token(path: &str) -> Option<(String, String)> {
    let at = path.find('@')?;
    let rest = &path[at + 1..];
    let name_end = rest.find('/').unwrap_or(rest.len());
    let name = &rest[..name_end];
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), format!("@{name}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mappings::MappingEntry;

    fn themes() -> ThemeRegistry {
        ThemeRegistry::new().with_theme("bartik", "themes/bartik")
    }

    #[test]
    fn test_mapped_identifier_uses_entry_path() {
        let mut mappings = MappingTable::new();
        mappings.insert(MappingEntry::new("icon", "@bartik/icons.svg"));

        let resolved = resolve("icon", &mappings, &themes());
        assert_eq!(resolved, "themes/bartik/icons.svg");
    }

    #[test]
    fn test_unmapped_identifier_passes_through() {
        let mappings = MappingTable::new();

        let resolved = resolve("images/logo.svg", &mappings, &themes());
        assert_eq!(resolved, "images/logo.svg");
    }

    #[test]
    fn test_theme_substitution_on_raw_path() {
        let mappings = MappingTable::new();

        let resolved = resolve("@bartik/logo.svg", &mappings, &themes());
        assert_eq!(resolved, "themes/bartik/logo.svg");
    }

    #[test]
    fn test_unknown_theme_token_left_untouched() {
        let mappings = MappingTable::new();

        let resolved = resolve("@classic/logo.svg", &mappings, &themes());
        assert_eq!(resolved, "@classic/logo.svg");
    }

    #[test]
    fn test_empty_theme_path_left_untouched() {
        let mappings = MappingTable::new();
        let themes = ThemeRegistry::new().with_theme("bartik", "");

        let resolved = resolve("@bartik/logo.svg", &mappings, &themes);
        assert_eq!(resolved, "@bartik/logo.svg");
    }

    #[test]
    fn test_first_occurrence_only() {
        let mappings = MappingTable::new();

        let resolved = resolve("@bartik/@bartik/logo.svg", &mappings, &themes());
        assert_eq!(resolved, "themes/bartik/@bartik/logo.svg");
    }

    #[test]
    fn test_token_in_middle_of_path() {
        let mappings = MappingTable::new();

        let resolved = resolve("assets/@bartik/logo.svg", &mappings, &themes());
        assert_eq!(resolved, "assets/themes/bartik/logo.svg");
    }

    #[test]
    fn test_no_token() {
        let mappings = MappingTable::new();

        assert_eq!(theme_token("plain/path.svg"), None);
        assert_eq!(theme_token("trailing@"), None);
        let resolved = resolve("plain/path.svg", &mappings, &themes());
        assert_eq!(resolved, "plain/path.svg");
    }
}

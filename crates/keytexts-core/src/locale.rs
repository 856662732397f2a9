//! Locale tags and the candidate order used to pick a table.
//!
//! The table registry only does exact matches; this module holds the
//! broader matching policy applied by callers before they ask for a table.

/// Tag of the fallback table every other table defers to.
pub const DEFAULT_LOCALE: &str = "DEFAULT";

/// Pseudo-locale for the plain alphabet layout. Bindings for it ask the
/// override provider for the system locale instead.
pub const NO_LANGUAGE: &str = "zz";

/// Normalize a tag to the `lang_REGION` form used by the tables.
pub fn normalize(tag: &str) -> String {
    tag.trim().replace('-', "_")
}

/// Language subtag of `tag` (`"hi_IN"` → `"hi"`).
pub fn language(tag: &str) -> &str {
    tag.split(['_', '-']).next().unwrap_or(tag)
}

/// Tags to try, most specific first: the full tag, then its language.
pub fn candidates(tag: &str) -> Vec<String> {
    let full = normalize(tag);
    if full.is_empty() {
        return Vec::new();
    }
    let lang = language(&full).to_string();
    if lang == full || lang.is_empty() {
        vec![full]
    } else {
        vec![full, lang]
    }
}

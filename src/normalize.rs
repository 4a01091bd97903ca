//! Style dialect translation for the legacy engine.
//!
//! The legacy engine understands a narrower style vocabulary than the modern
//! one. Every bucket headed for it goes through [`normalize_style`], which
//! drops the properties it rejects.

use crate::style::{NamedStylesheet, StyleMap};

/// Properties the legacy engine rejects or mishandles.
pub const LEGACY_UNSUPPORTED_PROPERTIES: &[&str] = &["whiteSpace", "listStyleType"];

/// Copy `style` without the properties listed in `unsupported`.
pub fn strip_properties(style: &StyleMap, unsupported: &[&str]) -> StyleMap {
    style
        .iter()
        .filter(|(key, _)| !unsupported.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Copy `style` without any property the legacy engine does not support.
pub fn normalize_style(style: &StyleMap) -> StyleMap {
    strip_properties(style, LEGACY_UNSUPPORTED_PROPERTIES)
}

/// Normalize every bucket of a stylesheet. All bucket names are kept.
pub fn normalize_buckets(stylesheet: &NamedStylesheet) -> NamedStylesheet {
    stylesheet
        .iter()
        .map(|(name, style)| (name.clone(), normalize_style(style)))
        .collect()
}

/// Normalize an optional stylesheet.
///
/// `None` stays `None`: an absent override is not the same as an empty one.
pub fn normalize_stylesheet(stylesheet: Option<&NamedStylesheet>) -> Option<NamedStylesheet> {
    stylesheet.map(normalize_buckets)
}

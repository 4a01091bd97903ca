use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single style property value.
///
/// Style maps are open: the adapter never interprets values beyond copying
/// them, so any shape an engine understands (numbers, keywords, offsets,
/// transform lists) round-trips untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Flag(bool),
    Number(f64),
    Keyword(String),
    List(Vec<StyleValue>),
    Nested(BTreeMap<String, StyleValue>),
}

/// One visual bucket: property name (camelCase) to value.
pub type StyleMap = BTreeMap<String, StyleValue>;

/// Bucket name (tag or class) to its style.
pub type NamedStylesheet = BTreeMap<String, StyleMap>;

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        StyleValue::Flag(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Keyword(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Keyword(value)
    }
}

/// Build a [`StyleMap`] from `(property, value)` pairs.
pub fn style_map<K, V, I>(entries: I) -> StyleMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<StyleValue>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Copy every entry of `overrides` onto `base`, later entries winning.
pub fn extend_style(base: &mut StyleMap, overrides: &StyleMap) {
    base.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
}

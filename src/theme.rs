use crate::error::{DisplayError, DisplayResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Visual context the HTML display resolves its colors from.
pub const HTML_CONTEXT: &str = "html";

/// Resolved colors for one visual context, valid for a single render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSnapshot {
    #[serde(alias = "color")]
    pub foreground: String,
    #[serde(alias = "backgroundColor")]
    pub background: String,
    /// Border color of the context, used to paint `<hr>` dividers.
    #[serde(alias = "border")]
    pub divider: String,
}

impl Default for ThemeSnapshot {
    fn default() -> Self {
        Self {
            foreground: "#000000".to_string(),
            background: "#ffffff".to_string(),
            divider: "#cccccc".to_string(),
        }
    }
}

/// Source of truth for theme colors. Owned by the host application.
pub trait ThemeSource {
    fn resolve_colors(&self, context: &str) -> ThemeSnapshot;
}

/// A fixed palette of per-context colors, loadable from YAML.
///
/// ```yaml
/// fallback:
///   foreground: "#1a1a1a"
///   background: "#ffffff"
///   divider: "#dddddd"
/// contexts:
///   html:
///     foreground: "#e0e0e0"
///     background: "#121212"
///     divider: "#333333"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemePalette {
    pub fallback: ThemeSnapshot,
    pub contexts: HashMap<String, ThemeSnapshot>,
}

impl ThemePalette {
    /// Create a palette that answers every context with the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a palette from YAML
    pub fn from_yaml(yaml: &str) -> DisplayResult<Self> {
        let palette: ThemePalette = serde_yaml::from_str(yaml)?;
        palette.validate()?;
        Ok(palette)
    }

    pub fn with_context(mut self, context: impl Into<String>, colors: ThemeSnapshot) -> Self {
        self.contexts.insert(context.into(), colors);
        self
    }

    /// Check every color in the palette
    pub fn validate(&self) -> DisplayResult<()> {
        validate_snapshot("fallback", &self.fallback)?;
        for (context, snapshot) in &self.contexts {
            validate_snapshot(context, snapshot)?;
        }
        Ok(())
    }
}

impl ThemeSource for ThemePalette {
    fn resolve_colors(&self, context: &str) -> ThemeSnapshot {
        self.contexts
            .get(context)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

fn validate_snapshot(context: &str, snapshot: &ThemeSnapshot) -> DisplayResult<()> {
    validate_color(context, "foreground", &snapshot.foreground)?;
    validate_color(context, "background", &snapshot.background)?;
    validate_color(context, "divider", &snapshot.divider)
}

const NAMED_COLORS: &[&str] = &[
    "black", "white", "red", "green", "blue", "yellow", "orange", "purple", "pink", "gray",
    "grey", "transparent",
];

/// Accepts hex (`#rgb`, `#rrggbb`, `#rrggbbaa`), `rgb()`/`rgba()` or a named color
pub fn validate_color(context: &str, role: &str, color: &str) -> DisplayResult<()> {
    static HEX_COLOR_REGEX: OnceLock<Regex> = OnceLock::new();
    static RGB_COLOR_REGEX: OnceLock<Regex> = OnceLock::new();
    let hex = HEX_COLOR_REGEX.get_or_init(|| {
        Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
    });
    let rgb = RGB_COLOR_REGEX.get_or_init(|| {
        Regex::new(r"^rgba?\(\s*\d{1,3}\s*,\s*\d{1,3}\s*,\s*\d{1,3}\s*(?:,\s*(?:0|1|0?\.\d+)\s*)?\)$")
            .unwrap()
    });

    if hex.is_match(color) || rgb.is_match(color) || NAMED_COLORS.contains(&color) {
        Ok(())
    } else {
        Err(DisplayError::InvalidColor {
            context: context.to_string(),
            role: role.to_string(),
            value: color.to_string(),
            reason: format!(
                "must be a hex color (e.g., #ff0000), rgb()/rgba() or a named color ({})",
                NAMED_COLORS.join(", ")
            ),
        })
    }
}

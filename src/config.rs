use crate::engine::LinkHandler;
use crate::error::{DisplayError, DisplayResult};
use crate::style::{NamedStylesheet, StyleMap};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::num::NonZeroU32;

/// Caller-supplied rendering options.
///
/// Only the style fields and the handful of flags below are merged by the
/// adapter; every other key lands in `options` and reaches the engines as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_style: Option<StyleMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_styles: Option<NamedStylesheet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes_styles: Option<NamedStylesheet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_experimental_percent_width: Option<bool>,
    /// Overrides the request width when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_width: Option<u32>,
    /// Overrides the interceptor's link handler when set.
    #[serde(skip)]
    pub on_link_press: Option<LinkHandler>,
    #[serde(flatten)]
    pub options: BTreeMap<String, serde_yaml::Value>,
}

impl RenderConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_yaml(yaml: &str) -> DisplayResult<Self> {
        let configuration: RenderConfiguration = serde_yaml::from_str(yaml)?;
        configuration.validate()?;
        Ok(configuration)
    }

    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    pub fn validate(&self) -> DisplayResult<()> {
        if self.content_width == Some(0) {
            return Err(DisplayError::InvalidContentWidth { value: 0 });
        }
        Ok(())
    }
}

/// One call to the display: what to render and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub content_width: NonZeroU32,
    #[serde(default)]
    pub configuration: RenderConfiguration,
    /// Whether the legacy engine can render this content.
    #[serde(default)]
    pub supports_legacy: bool,
    /// Whether the caller asks for the legacy engine.
    #[serde(default)]
    pub use_legacy: bool,
    /// Style of the outer container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleMap>,
}

impl RenderRequest {
    pub fn new(content_width: NonZeroU32, configuration: RenderConfiguration) -> Self {
        Self {
            content_width,
            configuration,
            supports_legacy: false,
            use_legacy: false,
            style: None,
        }
    }

    pub fn from_yaml(yaml: &str) -> DisplayResult<Self> {
        let request: RenderRequest = serde_yaml::from_str(yaml)?;
        request.configuration.validate()?;
        Ok(request)
    }

    pub fn supports_legacy(mut self, supports_legacy: bool) -> Self {
        self.supports_legacy = supports_legacy;
        self
    }

    pub fn use_legacy(mut self, use_legacy: bool) -> Self {
        self.use_legacy = use_legacy;
        self
    }

    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = Some(style);
        self
    }

    /// Width the engines lay out at; the configuration wins over the request
    pub fn effective_width(&self) -> NonZeroU32 {
        self.configuration
            .content_width
            .and_then(NonZeroU32::new)
            .unwrap_or(self.content_width)
    }
}

/// Fixed values the selector merges under, or forces over, caller options.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderDefaults {
    /// Outer default for `debug`. Both engines get `debug: false` regardless.
    pub debug: bool,
    pub enable_experimental_percent_width: bool,
    /// Appended to the platform font list for the modern engine.
    pub extra_system_font: &'static str,
    pub divider_margin: f64,
    pub divider_height: f64,
    /// Props whose change invalidates the modern engine's render cache.
    pub invalidation_props: &'static [&'static str],
    /// Option names the adapter computes or forces; dropped from caller options.
    pub reserved_options: &'static [&'static str],
    pub unavailable_message: &'static str,
    pub unavailable_margin_horizontal: f64,
    pub unavailable_font_size: f64,
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            debug: false,
            enable_experimental_percent_width: true,
            extra_system_font: "space-mono",
            divider_margin: 16.0,
            divider_height: 1.0,
            invalidation_props: &["baseStyle"],
            reserved_options: &[
                "onLinkPress",
                "contentWidth",
                "enableExperimentalPercentWidth",
                "defaultTextProps",
                "html",
                "baseStyle",
                "baseFontStyle",
                "classesStyles",
                "tagsStyles",
                "debug",
                "enableUserAgentStyles",
                "enableExperimentalMarginCollapsing",
                "systemFonts",
                "remoteLoadingView",
                "triggerTREInvalidationPropNames",
            ],
            unavailable_message: "Legacy HTML component is not available for this snippet.",
            unavailable_margin_horizontal: 30.0,
            unavailable_font_size: 20.0,
        }
    }
}

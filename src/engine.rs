//! Seams to the host application and to the two rendering engines.

use crate::style::{NamedStylesheet, StyleMap};
use crate::view::View;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Callback invoked with the URL of an activated link.
///
/// Compares by identity, so two props are equal only if they carry the same
/// handler instance.
#[derive(Clone)]
pub struct LinkHandler(Arc<dyn Fn(&str) + Send + Sync>);

impl LinkHandler {
    pub fn new(handler: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self(Arc::new(handler))
    }

    /// A handler that ignores every link
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    pub fn call(&self, url: &str) {
        (self.0)(url)
    }
}

impl PartialEq for LinkHandler {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for LinkHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LinkHandler(..)")
    }
}

impl Serialize for LinkHandler {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("<link handler>")
    }
}

/// Supplies the handler for outbound link activation.
pub trait LinkInterceptor {
    fn link_handler(&self) -> LinkHandler;
}

/// Supplies the node shown while remote resources load.
pub trait LoadingPlaceholder {
    fn render_loading_placeholder(&self) -> View;
}

/// Platform font enumeration.
///
/// Implementations should hand out the same `Arc` while the list is
/// unchanged; the display recomposes its font list only when it changes.
pub trait FontCatalog {
    fn system_fonts(&self) -> Arc<[String]>;
}

impl LinkInterceptor for LinkHandler {
    fn link_handler(&self) -> LinkHandler {
        self.clone()
    }
}

impl LoadingPlaceholder for View {
    fn render_loading_placeholder(&self) -> View {
        self.clone()
    }
}

impl FontCatalog for Arc<[String]> {
    fn system_fonts(&self) -> Arc<[String]> {
        Arc::clone(self)
    }
}

/// Props for default text rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProps {
    pub selectable: bool,
}

/// Props common to both engines.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedProps {
    pub on_link_press: LinkHandler,
    pub content_width: u32,
    pub enable_experimental_percent_width: bool,
    pub default_text_props: TextProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Caller options the adapter does not interpret.
    #[serde(flatten)]
    pub options: BTreeMap<String, serde_yaml::Value>,
}

/// Props handed to the legacy engine. All styles are normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyProps {
    #[serde(flatten)]
    pub shared: SharedProps,
    pub base_font_style: StyleMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes_styles: Option<NamedStylesheet>,
    pub tags_styles: NamedStylesheet,
    pub debug: bool,
}

/// Props handed to the modern engine. Styles are passed unnormalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModernProps {
    #[serde(flatten)]
    pub shared: SharedProps,
    pub base_style: StyleMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes_styles: Option<NamedStylesheet>,
    pub tags_styles: NamedStylesheet,
    pub enable_user_agent_styles: bool,
    pub enable_experimental_margin_collapsing: bool,
    pub debug: bool,
    pub system_fonts: Arc<[String]>,
    pub remote_loading_view: View,
    /// Props whose change invalidates the engine's internal render cache.
    #[serde(rename = "triggerTREInvalidationPropNames")]
    pub trigger_invalidation_prop_names: Vec<String>,
}

/// The primary HTML-to-view engine.
pub trait ModernEngine {
    fn render(&self, props: &ModernProps) -> View;
}

/// The engine kept for content the modern one cannot handle yet.
pub trait LegacyEngine {
    fn render(&self, props: &LegacyProps) -> View;
}

impl<F> ModernEngine for F
where
    F: Fn(&ModernProps) -> View,
{
    fn render(&self, props: &ModernProps) -> View {
        self(props)
    }
}

impl<F> LegacyEngine for F
where
    F: Fn(&LegacyProps) -> View,
{
    fn render(&self, props: &LegacyProps) -> View {
        self(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_link_handler_identity() {
        let a = LinkHandler::noop();
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, LinkHandler::noop());
    }

    #[test]
    fn test_link_handler_call() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let handler = LinkHandler::new(move |url| sink.lock().unwrap().push(url.to_string()));
        handler.call("https://example.com");
        assert_eq!(*seen.lock().unwrap(), vec!["https://example.com".to_string()]);
    }

    #[test]
    fn test_closure_engine() {
        let engine =
            |props: &LegacyProps| View::text(props.shared.html.clone().unwrap_or_default(), None);
        let props = LegacyProps {
            shared: SharedProps {
                on_link_press: LinkHandler::noop(),
                content_width: 100,
                enable_experimental_percent_width: true,
                default_text_props: TextProps { selectable: true },
                html: Some("<b>x</b>".to_string()),
                options: BTreeMap::new(),
            },
            base_font_style: StyleMap::new(),
            classes_styles: None,
            tags_styles: NamedStylesheet::new(),
            debug: false,
        };
        assert_eq!(LegacyEngine::render(&engine, &props).text_content(), "<b>x</b>");
    }
}

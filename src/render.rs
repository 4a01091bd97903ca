//! Render path selection and prop merging.
//!
//! A request resolves to exactly one [`RenderPath`]:
//!
//! | `use_legacy` | `supports_legacy` | path          |
//! |--------------|-------------------|---------------|
//! | true         | false             | `Unavailable` |
//! | true         | true              | `Legacy`      |
//! | false        | any               | `Modern`      |
//!
//! Props are merged in three layers: [`RenderDefaults`], then the caller's
//! [`RenderConfiguration`](crate::config::RenderConfiguration), then the
//! computed fields the caller cannot override: divider geometry and color,
//! `debug: false` and selectable text. Caller options named like a computed
//! prop are dropped.

use crate::config::{RenderDefaults, RenderRequest};
use crate::engine::{
    FontCatalog, LegacyEngine, LegacyProps, LinkHandler, LinkInterceptor, LoadingPlaceholder,
    ModernEngine, ModernProps, SharedProps, TextProps,
};
use crate::normalize::{normalize_buckets, normalize_style, normalize_stylesheet};
use crate::style::{extend_style, style_map, NamedStylesheet, StyleMap, StyleValue};
use crate::theme::{ThemeSnapshot, ThemeSource, HTML_CONTEXT};
use crate::view::View;
use log::{debug, warn};
use serde::Serialize;
use std::cell::RefCell;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RenderPath {
    Modern,
    Legacy,
    /// Legacy requested for content the legacy engine cannot render.
    Unavailable,
}

/// Pick the render path. Unavailability takes precedence over everything.
pub fn select_path(supports_legacy: bool, use_legacy: bool) -> RenderPath {
    match (use_legacy, supports_legacy) {
        (true, false) => RenderPath::Unavailable,
        (true, true) => RenderPath::Legacy,
        (false, _) => RenderPath::Modern,
    }
}

/// The selected path together with everything needed to draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "path", content = "props", rename_all = "camelCase")]
pub enum RenderPlan {
    Modern(ModernProps),
    Legacy(LegacyProps),
    Unavailable(View),
}

impl RenderPlan {
    pub fn path(&self) -> RenderPath {
        match self {
            RenderPlan::Modern(_) => RenderPath::Modern,
            RenderPlan::Legacy(_) => RenderPath::Legacy,
            RenderPlan::Unavailable(_) => RenderPath::Unavailable,
        }
    }
}

/// Host-side collaborators of an [`HtmlDisplay`].
pub struct DisplayServices {
    pub theme: Box<dyn ThemeSource>,
    pub links: Box<dyn LinkInterceptor>,
    pub loading: Box<dyn LoadingPlaceholder>,
    pub fonts: Box<dyn FontCatalog>,
    pub modern: Box<dyn ModernEngine>,
    pub legacy: Box<dyn LegacyEngine>,
}

struct FontCache {
    platform: Arc<[String]>,
    composed: Arc<[String]>,
}

/// Renders HTML through the modern or the legacy engine behind one call.
pub struct HtmlDisplay {
    services: DisplayServices,
    defaults: RenderDefaults,
    font_cache: RefCell<Option<FontCache>>,
}

impl HtmlDisplay {
    pub fn new(services: DisplayServices) -> Self {
        Self::with_defaults(services, RenderDefaults::default())
    }

    pub fn with_defaults(services: DisplayServices, defaults: RenderDefaults) -> Self {
        Self {
            services,
            defaults,
            font_cache: RefCell::new(None),
        }
    }

    pub fn defaults(&self) -> &RenderDefaults {
        &self.defaults
    }

    /// Render `request` into a single node wrapped in the caller's outer style.
    pub fn render(&self, request: &RenderRequest) -> View {
        let body = match self.plan(request) {
            RenderPlan::Unavailable(placeholder) => placeholder,
            RenderPlan::Legacy(props) => self.services.legacy.render(&props),
            RenderPlan::Modern(props) => self.services.modern.render(&props),
        };
        body.wrap(request.style.clone())
    }

    /// Resolve the path and merge props without invoking either engine.
    pub fn plan(&self, request: &RenderRequest) -> RenderPlan {
        let path = select_path(request.supports_legacy, request.use_legacy);
        debug!(
            "html display: path={:?} supports_legacy={} use_legacy={}",
            path, request.supports_legacy, request.use_legacy
        );

        let theme = self.services.theme.resolve_colors(HTML_CONTEXT);

        if path == RenderPath::Unavailable {
            warn!("html display: legacy engine requested for unsupported content");
            return RenderPlan::Unavailable(unavailable_placeholder(&self.defaults));
        }

        let configuration = &request.configuration;
        let base_style = merge_base_style(&theme, configuration.base_style.as_ref());
        let tags_styles =
            merge_tags_styles(configuration.tags_styles.as_ref(), &theme, &self.defaults);
        let shared = self.shared_props(request);

        match path {
            RenderPath::Legacy => RenderPlan::Legacy(LegacyProps {
                shared,
                base_font_style: normalize_style(&base_style),
                classes_styles: normalize_stylesheet(configuration.classes_styles.as_ref()),
                tags_styles: normalize_buckets(&tags_styles),
                debug: false,
            }),
            _ => RenderPlan::Modern(ModernProps {
                shared,
                base_style,
                classes_styles: configuration.classes_styles.clone(),
                tags_styles,
                enable_user_agent_styles: true,
                enable_experimental_margin_collapsing: true,
                debug: false,
                system_fonts: self.system_fonts(),
                remote_loading_view: self.services.loading.render_loading_placeholder(),
                trigger_invalidation_prop_names: self
                    .defaults
                    .invalidation_props
                    .iter()
                    .map(|name| name.to_string())
                    .collect(),
            }),
        }
    }

    fn shared_props(&self, request: &RenderRequest) -> SharedProps {
        let configuration = &request.configuration;
        let on_link_press = configuration
            .on_link_press
            .clone()
            .unwrap_or_else(|| self.services.links.link_handler());

        if configuration.debug.unwrap_or(self.defaults.debug) {
            debug!("html display: debug rendering requested, engines run with debug off");
        }

        SharedProps {
            on_link_press,
            content_width: request.effective_width().get(),
            enable_experimental_percent_width: configuration
                .enable_experimental_percent_width
                .unwrap_or(self.defaults.enable_experimental_percent_width),
            default_text_props: TextProps { selectable: true },
            html: configuration.html.clone(),
            options: configuration
                .options
                .iter()
                .filter(|(key, _)| !self.defaults.reserved_options.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        }
    }

    /// Platform fonts plus the extra font, recomposed only when the
    /// platform list changes identity.
    fn system_fonts(&self) -> Arc<[String]> {
        let platform = self.services.fonts.system_fonts();
        let mut cache = self.font_cache.borrow_mut();
        if let Some(cached) = cache.as_ref() {
            if Arc::ptr_eq(&cached.platform, &platform) {
                return Arc::clone(&cached.composed);
            }
        }

        debug!(
            "html display: composing system fonts ({} platform fonts)",
            platform.len()
        );
        let composed: Arc<[String]> = platform
            .iter()
            .cloned()
            .chain(std::iter::once(self.defaults.extra_system_font.to_string()))
            .collect();
        *cache = Some(FontCache {
            platform,
            composed: Arc::clone(&composed),
        });
        composed
    }
}

/// Theme colors overlaid by the caller's base style.
pub fn merge_base_style(theme: &ThemeSnapshot, caller: Option<&StyleMap>) -> StyleMap {
    let mut style = style_map([
        ("color", theme.foreground.as_str()),
        ("backgroundColor", theme.background.as_str()),
    ]);
    if let Some(caller) = caller {
        extend_style(&mut style, caller);
    }
    style
}

/// Caller tag styles with a themed `hr` divider and an empty `html` bucket.
///
/// The caller may restyle `hr` freely except for its height and color.
pub fn merge_tags_styles(
    caller: Option<&NamedStylesheet>,
    theme: &ThemeSnapshot,
    defaults: &RenderDefaults,
) -> NamedStylesheet {
    let mut tags = caller.cloned().unwrap_or_default();

    let mut hr = style_map([
        ("marginTop", defaults.divider_margin),
        ("marginBottom", defaults.divider_margin),
    ]);
    if let Some(caller_hr) = caller.and_then(|tags| tags.get("hr")) {
        extend_style(&mut hr, caller_hr);
    }
    hr.insert("height".to_string(), StyleValue::from(defaults.divider_height));
    hr.insert(
        "backgroundColor".to_string(),
        StyleValue::from(theme.divider.as_str()),
    );

    tags.insert("hr".to_string(), hr);
    tags.insert("html".to_string(), StyleMap::new());
    tags
}

/// Centered italic notice shown instead of legacy output.
pub fn unavailable_placeholder(defaults: &RenderDefaults) -> View {
    let container = style_map([
        ("alignItems", StyleValue::from("center")),
        ("justifyContent", StyleValue::from("center")),
        (
            "marginHorizontal",
            StyleValue::from(defaults.unavailable_margin_horizontal),
        ),
        ("flexGrow", StyleValue::from(1)),
    ]);
    let text = style_map([
        ("textAlign", StyleValue::from("center")),
        ("fontSize", StyleValue::from(defaults.unavailable_font_size)),
        ("fontStyle", StyleValue::from("italic")),
    ]);
    View::container(
        Some(container),
        vec![View::text(defaults.unavailable_message, Some(text))],
    )
}

/// A link handler that logs and otherwise ignores activations.
pub fn logging_link_handler() -> LinkHandler {
    LinkHandler::new(|url| debug!("html display: link activated: {}", url))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> ThemeSnapshot {
        ThemeSnapshot {
            foreground: "#111111".to_string(),
            background: "#fafafa".to_string(),
            divider: "#dddddd".to_string(),
        }
    }

    #[test]
    fn test_select_path_precedence() {
        assert_eq!(select_path(false, true), RenderPath::Unavailable);
        assert_eq!(select_path(true, true), RenderPath::Legacy);
        assert_eq!(select_path(true, false), RenderPath::Modern);
        assert_eq!(select_path(false, false), RenderPath::Modern);
    }

    #[test]
    fn test_merge_base_style_caller_wins() {
        let caller = style_map([("color", "purple"), ("fontSize", "18")]);
        let style = merge_base_style(&theme(), Some(&caller));
        assert_eq!(style["color"], StyleValue::from("purple"));
        assert_eq!(style["backgroundColor"], StyleValue::from("#fafafa"));
        assert_eq!(style["fontSize"], StyleValue::from("18"));
    }

    #[test]
    fn test_merge_tags_styles_without_caller() {
        let tags = merge_tags_styles(None, &theme(), &RenderDefaults::default());
        assert_eq!(tags.len(), 2);
        assert!(tags["html"].is_empty());
        assert_eq!(
            tags["hr"],
            style_map([
                ("marginTop", StyleValue::from(16)),
                ("marginBottom", StyleValue::from(16)),
                ("height", StyleValue::from(1)),
                ("backgroundColor", StyleValue::from("#dddddd")),
            ])
        );
    }

    #[test]
    fn test_merge_tags_styles_divider_not_overridable() {
        let mut caller = NamedStylesheet::new();
        caller.insert(
            "hr".to_string(),
            style_map([
                ("height", StyleValue::from(4)),
                ("backgroundColor", StyleValue::from("red")),
                ("marginTop", StyleValue::from(2)),
            ]),
        );
        caller.insert("p".to_string(), style_map([("marginTop", 0)]));

        let tags = merge_tags_styles(Some(&caller), &theme(), &RenderDefaults::default());
        assert_eq!(tags["hr"]["height"], StyleValue::from(1));
        assert_eq!(tags["hr"]["backgroundColor"], StyleValue::from("#dddddd"));
        assert_eq!(tags["hr"]["marginTop"], StyleValue::from(2));
        assert_eq!(tags["hr"]["marginBottom"], StyleValue::from(16));
        assert_eq!(tags["p"], style_map([("marginTop", 0)]));
    }

    #[test]
    fn test_merge_tags_styles_resets_html_bucket() {
        let mut caller = NamedStylesheet::new();
        caller.insert("html".to_string(), style_map([("padding", 8)]));
        let tags = merge_tags_styles(Some(&caller), &theme(), &RenderDefaults::default());
        assert!(tags["html"].is_empty());
    }

    #[test]
    fn test_unavailable_placeholder_shape() {
        let view = unavailable_placeholder(&RenderDefaults::default());
        let style = view.style().unwrap();
        assert_eq!(style["marginHorizontal"], StyleValue::from(30));
        assert_eq!(style["flexGrow"], StyleValue::from(1));
        let text = &view.children()[0];
        assert_eq!(text.style().unwrap()["fontStyle"], StyleValue::from("italic"));
        assert_eq!(text.style().unwrap()["fontSize"], StyleValue::from(20));
        assert_eq!(
            view.text_content(),
            "Legacy HTML component is not available for this snippet."
        );
    }
}

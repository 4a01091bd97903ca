//! # HTML Display
//!
//! Renders HTML inside a host view tree through one of two interchangeable
//! engines: a modern engine with the richer style vocabulary, and a legacy
//! engine kept for snippets the modern one cannot render yet.
//!
//! ## Features
//! - One call for both engines: content width, theme, link interception
//! - Theme colors, divider styling and system fonts merged into each engine's props
//! - Style dialect translation for the legacy engine
//! - A placeholder instead of a failure when legacy rendering is unsupported
//! - YAML-loadable configurations and palettes
//!
//! ## Example
//! ```ignore
//! use html_display::{DisplayServices, HtmlDisplay, RenderConfiguration, RenderRequest};
//! use std::num::NonZeroU32;
//!
//! let display = HtmlDisplay::new(services);
//! let request = RenderRequest::new(
//!     NonZeroU32::new(360).unwrap(),
//!     RenderConfiguration::new().with_html("<p>Hello <hr/> World</p>"),
//! )
//! .supports_legacy(true)
//! .use_legacy(true);
//!
//! let view = display.render(&request);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod render;
pub mod style;
pub mod theme;
pub mod view;

// --- Core types ---
pub use config::{RenderConfiguration, RenderDefaults, RenderRequest};
pub use engine::{
    FontCatalog, LegacyEngine, LegacyProps, LinkHandler, LinkInterceptor, LoadingPlaceholder,
    ModernEngine, ModernProps, SharedProps, TextProps,
};
pub use error::{DisplayError, DisplayResult};
pub use render::{select_path, DisplayServices, HtmlDisplay, RenderPath, RenderPlan};
pub use style::{NamedStylesheet, StyleMap, StyleValue};
pub use theme::{ThemePalette, ThemeSnapshot, ThemeSource};
pub use view::View;

// --- Style normalization ---
pub use normalize::{normalize_style, normalize_stylesheet, LEGACY_UNSUPPORTED_PROPERTIES};

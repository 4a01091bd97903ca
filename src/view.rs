use crate::style::StyleMap;
use serde::{Deserialize, Serialize};

/// A node in the host view tree.
///
/// Both engines are black boxes that produce one of these; the adapter only
/// builds the outer wrapper and the unavailable placeholder itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum View {
    // Text first: every field of Container is optional.
    Text(Text),
    Container(Container),
}

/// Container node - a styled box around its children
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleMap>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<View>,
}

/// Text node - a run of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleMap>,
}

impl View {
    pub fn container(style: Option<StyleMap>, children: Vec<View>) -> Self {
        View::Container(Container { style, children })
    }

    pub fn text(text: impl Into<String>, style: Option<StyleMap>) -> Self {
        View::Text(Text {
            text: text.into(),
            style,
        })
    }

    /// Wrap a single node in a container carrying `style`
    pub fn wrap(self, style: Option<StyleMap>) -> Self {
        View::container(style, vec![self])
    }

    pub fn style(&self) -> Option<&StyleMap> {
        match self {
            View::Container(c) => c.style.as_ref(),
            View::Text(t) => t.style.as_ref(),
        }
    }

    pub fn children(&self) -> &[View] {
        match self {
            View::Container(c) => &c.children,
            View::Text(_) => &[],
        }
    }

    /// Concatenated text of this node and its descendants, depth first
    pub fn text_content(&self) -> String {
        match self {
            View::Text(t) => t.text.clone(),
            View::Container(c) => c.children.iter().map(View::text_content).collect(),
        }
    }
}

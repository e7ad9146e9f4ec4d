//! Body content accepted by composite builders.

use glint_core::{TextProps, Widget};

/// Either plain text or a pre-built descriptor.
///
/// Builders resolve this once, up front: plain text becomes a text node with
/// the toolkit's default size and weight, a node passes through untouched.
#[derive(Clone, Debug)]
pub enum Content {
    Text(String),
    Node(Widget),
}

impl Content {
    /// Resolve to a widget descriptor.
    pub fn into_widget(self) -> Widget {
        match self {
            Content::Text(value) => Widget::Text(TextProps {
                value,
                ..Default::default()
            }),
            Content::Node(widget) => widget,
        }
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::Text(value.to_string())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::Text(value)
    }
}

impl From<Widget> for Content {
    fn from(widget: Widget) -> Self {
        Content::Node(widget)
    }
}

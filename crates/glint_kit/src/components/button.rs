//! Themed button factories.
//!
//! # Example
//!
//! ```rust
//! use glint_kit::prelude::*;
//!
//! let theme = ThemeState::new(ColorScheme::Light);
//!
//! let save = button("Save").on_click(|| {}).build(&theme);
//! let cancel = secondary_button("Cancel").width(120.0).build(&theme);
//! let remove = button("Delete").variant(ButtonVariant::Error).build(&theme);
//! ```

use glint_core::{ButtonProps, Callback, Color, IconButtonProps, Widget};
use glint_theme::{material, Palette, ThemeState};

/// Semantic button styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Brand primary: `on_primary` label on `primary` fill.
    #[default]
    Primary,
    /// Brand secondary: `on_secondary` label on `secondary` fill.
    Secondary,
    /// Status green, white label.
    Success,
    /// Status yellow, black label.
    Warning,
    /// Status red, white label.
    Error,
}

impl ButtonVariant {
    /// Resolve the (label, fill) pair for this variant.
    ///
    /// Brand variants follow the palette; status variants use the fixed
    /// material status colors regardless of scheme.
    fn colors(self, palette: &Palette) -> (Color, Color) {
        match self {
            ButtonVariant::Primary => (palette.on_primary, palette.primary),
            ButtonVariant::Secondary => (palette.on_secondary, palette.secondary),
            ButtonVariant::Success => (Color::WHITE, material::SUCCESS),
            ButtonVariant::Warning => (Color::BLACK, material::WARNING),
            ButtonVariant::Error => (Color::WHITE, material::ERROR),
        }
    }
}

/// Builder for a themed push button.
pub struct Button {
    label: String,
    variant: ButtonVariant,
    on_click: Option<Callback>,
    width: Option<f32>,
    height: Option<f32>,
    color: Option<Color>,
    bgcolor: Option<Color>,
}

impl Button {
    /// Set the semantic variant.
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the click handler.
    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Callback::unit(handler));
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Override the label color. Overrides always win over the variant.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Override the fill color. Overrides always win over the variant.
    pub fn bgcolor(mut self, color: Color) -> Self {
        self.bgcolor = Some(color);
        self
    }

    /// Resolve colors against the current palette and build the descriptor.
    pub fn build(self, theme: &ThemeState) -> Widget {
        let palette = theme.palette();
        let (label_color, fill) = self.variant.colors(&palette);
        Widget::Button(ButtonProps {
            label: self.label,
            on_click: self.on_click,
            width: self.width,
            height: self.height,
            color: Some(self.color.unwrap_or(label_color)),
            bgcolor: Some(self.bgcolor.unwrap_or(fill)),
        })
    }
}

/// Create a button builder, defaulting to the primary variant.
pub fn button(label: impl Into<String>) -> Button {
    Button {
        label: label.into(),
        variant: ButtonVariant::default(),
        on_click: None,
        width: None,
        height: None,
        color: None,
        bgcolor: None,
    }
}

/// A primary-variant button.
pub fn primary_button(label: impl Into<String>) -> Button {
    button(label)
}

/// A secondary-variant button.
pub fn secondary_button(label: impl Into<String>) -> Button {
    button(label).variant(ButtonVariant::Secondary)
}

/// Builder for an icon-only button.
///
/// Icon buttons carry no themed fill; color and size stay toolkit defaults
/// unless set explicitly.
pub struct IconButton {
    icon: String,
    on_click: Option<Callback>,
    tooltip: Option<String>,
    icon_color: Option<Color>,
    icon_size: Option<f32>,
}

impl IconButton {
    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Callback::unit(handler));
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn icon_color(mut self, color: Color) -> Self {
        self.icon_color = Some(color);
        self
    }

    pub fn icon_size(mut self, size: f32) -> Self {
        self.icon_size = Some(size);
        self
    }

    pub fn build(self, _theme: &ThemeState) -> Widget {
        Widget::IconButton(IconButtonProps {
            icon: self.icon,
            on_click: self.on_click,
            tooltip: self.tooltip,
            icon_color: self.icon_color,
            icon_size: self.icon_size,
        })
    }
}

/// Create an icon button builder from a toolkit icon name.
pub fn icon_button(icon: impl Into<String>) -> IconButton {
    IconButton {
        icon: icon.into(),
        on_click: None,
        tooltip: None,
        icon_color: None,
        icon_size: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_theme::ColorScheme;

    fn built(widget: Widget) -> ButtonProps {
        match widget {
            Widget::Button(props) => props,
            other => panic!("expected a button, got {other:?}"),
        }
    }

    #[test]
    fn test_primary_button_uses_brand_roles() {
        let theme = ThemeState::new(ColorScheme::Light);
        let props = built(button("Save").build(&theme));
        assert_eq!(props.label, "Save");
        assert_eq!(props.bgcolor, Some(Color::from_hex(0x2196F3)));
        assert_eq!(props.color, Some(Color::from_hex(0xFFFFFF)));
    }

    #[test]
    fn test_secondary_button_uses_secondary_roles() {
        let theme = ThemeState::new(ColorScheme::Light);
        let props = built(secondary_button("Cancel").build(&theme));
        assert_eq!(props.bgcolor, Some(Color::from_hex(0xFF9800)));
        assert_eq!(props.color, Some(Color::WHITE));
    }

    #[test]
    fn test_status_variants_ignore_scheme() {
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            let theme = ThemeState::new(scheme);
            let warning = built(button("!").variant(ButtonVariant::Warning).build(&theme));
            assert_eq!(warning.bgcolor, Some(material::WARNING));
            assert_eq!(warning.color, Some(Color::BLACK));

            let error = built(button("x").variant(ButtonVariant::Error).build(&theme));
            assert_eq!(error.bgcolor, Some(material::ERROR));
            assert_eq!(error.color, Some(Color::WHITE));
        }
    }

    #[test]
    fn test_explicit_override_beats_variant() {
        let theme = ThemeState::new(ColorScheme::Light);
        let custom = Color::from_hex(0x123456);
        let props = built(button("Go").bgcolor(custom).build(&theme));
        assert_eq!(props.bgcolor, Some(custom));
        // The non-overridden side still resolves from the variant.
        assert_eq!(props.color, Some(Color::WHITE));
    }

    #[test]
    fn test_dimensions_pass_through() {
        let theme = ThemeState::new(ColorScheme::Light);
        let props = built(button("Wide").width(200.0).height(48.0).build(&theme));
        assert_eq!(props.width, Some(200.0));
        assert_eq!(props.height, Some(48.0));
    }

    #[test]
    fn test_icon_button_keeps_toolkit_defaults() {
        let theme = ThemeState::new(ColorScheme::Dark);
        let widget = icon_button("settings").tooltip("Settings").build(&theme);
        let Widget::IconButton(props) = widget else {
            panic!("expected an icon button");
        };
        assert_eq!(props.icon, "settings");
        assert_eq!(props.tooltip.as_deref(), Some("Settings"));
        assert_eq!(props.icon_color, None);
        assert_eq!(props.icon_size, None);
    }
}
